use teloxide::utils::command::BotCommands;

/// Portfolio sections, reachable from any chat state.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Portfolio sections:")]
pub enum Command {
    #[command(description = "who I am")]
    About,
    #[command(description = "what I work with")]
    Skills,
    #[command(description = "projects and awards")]
    Projects,
    #[command(description = "where I studied")]
    Education,
    #[command(description = "how to reach me")]
    Contacts,
    #[command(description = "list the sections")]
    Help,
}

pub const WELCOME: &str = "<b>Welcome to My Personal Portfolio</b>\n\
Hi, I'm Zhiyuan (Mark) Li. Explore my work and get to know me better!\n\n\
While you're here, answer a few quick questions so I can get to know my visitors. \
The sections are available any time: /about, /skills, /projects, /education, /contacts.";

pub const NO_MORE_QUESTIONS: &str = "No more questions!";

const ABOUT: &str = "<b>About Me</b>\n\
I am a third-year Engineering Science (Robotics) student at the University of Toronto, \
deeply passionate about Machine Intelligence and Robotics. With a strong foundation in \
mathematics, algorithm development, and system modeling, I enjoy tackling complex \
engineering challenges.\n\n\
Beyond coding, I have a deep love for music and creative expression. I enjoy playing \
the piano, composing original pieces, and engaging with rhythm-games. I'm always eager \
to explore new ideas, feel free to reach out if you'd like to collaborate, exchange \
ideas, or just have a chat!";

const SKILLS: &str = "<b>Skills</b>\n\n\
<b>Software Development</b>\n\
• Pytorch\n\
• QtDesigner\n\
• ROS\n\
• Mujoco\n\n\
<b>Hardware Development</b>\n\
• System Verilog\n\
• C++ &amp; Arduino IDE\n\
• Circuit Analysis\n\
• Solidworks\n\n\
<b>Mathematical Modelling</b>\n\
• Calculus &amp; Real, Complex Analysis\n\
• Statistics &amp; Combinatorics\n\
• Ordinary &amp; Partial Differential Equations\n\
• Graph Theory";

const PROJECTS: &str = "<b>Projects &amp; Awards</b>\n\n\
<b>Delivery Turtle-bot</b>\n\
A delivery robot prototype capable of navigating a test environment and stopping at \
designated locations.\n\n\
<b>Portfolio Website</b>\n\
A responsive portfolio website designed to showcase my skills and projects. Built with \
React, Flask and MySQL.\n\n\
<b>Contest Awards</b>\n\
Top 154 in Putnam and member of UofT Winning Team. 2-time CMO participant. Honour roll \
in AMC &amp; CEMC math contests.";

const EDUCATION: &str = "<b>Education</b>\n\n\
<b>Bachelor of Engineering Science, Robotics Specialization</b>\n\
University of Toronto, 2022 - 2027\n\n\
<b>British Columbia Certificate of Graduation (Dogwood Diploma)</b>\n\
Pinetree Secondary School, 2019 - 2022";

const CONTACTS: &str = "<b>Connect With Me</b>\n\
• GitHub: https://github.com/markli1hoshipu\n\
• LinkedIn: https://www.linkedin.com/in/zhiyuan-li-36b894296/\n\
• Email: markzhiyuan.li@mail.utoronto.ca";

pub fn section(command: &Command) -> String {
    match command {
        Command::About => ABOUT.to_string(),
        Command::Skills => SKILLS.to_string(),
        Command::Projects => PROJECTS.to_string(),
        Command::Education => EDUCATION.to_string(),
        Command::Contacts => CONTACTS.to_string(),
        Command::Help => Command::descriptions().to_string(),
    }
}
