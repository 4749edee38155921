mod backend;
mod config;
mod content;
mod portfolio;
mod quiz;
mod visitor;

use std::sync::Arc;

use dotenv::dotenv;
use teloxide::{
    dispatching::dialogue::InMemStorage,
    prelude::*,
    types::{ChatId, KeyboardButton, KeyboardMarkup, ParseMode},
};

use backend::BackendClient;
use config::Config;
use content::PageContentFetcher;
use portfolio::Command;
use quiz::controller::{QuizController, Submission};
use quiz::Quiz;
use visitor::Visitor;

type PortfolioDialogue = Dialogue<State, InMemStorage<State>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[derive(Clone, Default)]
pub enum State {
    #[default]
    Start,
    Quiz {
        quiz: Quiz,
        visitor: Visitor,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    pretty_env_logger::init();
    log::info!("Starting portfolio bot...");

    let config = Config::from_env();
    let bot = Bot::from_env();

    let http = reqwest::Client::new();
    let controller = Arc::new(QuizController::new(
        Arc::new(BackendClient::new(http.clone(), config.backend_url.clone())),
        Arc::new(PageContentFetcher::new(http.clone())),
        config.quiz_source_url.clone(),
    ));
    let start_controller = controller.clone();
    let start_http = http.clone();
    let ip_api_url = config.ip_api_url.clone();

    Dispatcher::builder(
        bot,
        Update::filter_message()
            .branch(teloxide::filter_command::<Command, _>().endpoint(show_section))
            .enter_dialogue::<Message, InMemStorage<State>, State>()
            .branch(dptree::case![State::Start].endpoint(
                move |bot: Bot, dialogue: PortfolioDialogue, msg: Message| {
                    start(
                        start_controller.clone(),
                        start_http.clone(),
                        ip_api_url.clone(),
                        bot,
                        dialogue,
                        msg,
                    )
                },
            ))
            .branch(dptree::case![State::Quiz { quiz, visitor }].endpoint(
                move |bot: Bot,
                      dialogue: PortfolioDialogue,
                      (quiz, visitor): (Quiz, Visitor),
                      msg: Message| {
                    answer(controller.clone(), bot, dialogue, (quiz, visitor), msg)
                },
            )),
    )
    .dependencies(dptree::deps![InMemStorage::<State>::new()])
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;
}

async fn show_section(bot: Bot, msg: Message, command: Command) -> HandlerResult {
    bot.send_message(msg.chat.id, portfolio::section(&command))
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

/// First contact in a chat: greet, settle the visitor's identity, report
/// the visit, then put up the seed question.
async fn start(
    controller: Arc<QuizController>,
    http: reqwest::Client,
    ip_api_url: String,
    bot: Bot,
    dialogue: PortfolioDialogue,
    msg: Message,
) -> HandlerResult {
    bot.send_message(msg.chat.id, portfolio::WELCOME)
        .parse_mode(ParseMode::Html)
        .await?;

    // Answers are silently ignored until the visit is on record, so
    // identity is settled before the first question goes out.
    let mut visitor = visitor::resolve(&http, &ip_api_url, msg.from()).await;
    controller.track_visit(&mut visitor).await;

    let quiz = Quiz::seed();
    send_current_question(&bot, msg.chat.id, &quiz).await?;

    dialogue.update(State::Quiz { quiz, visitor }).await?;
    Ok(())
}

/// Every text message while the quiz is up counts as an answer to the
/// current question.
async fn answer(
    controller: Arc<QuizController>,
    bot: Bot,
    dialogue: PortfolioDialogue,
    (mut quiz, visitor): (Quiz, Visitor),
    msg: Message,
) -> HandlerResult {
    let Some(text) = msg.text() else {
        bot.send_message(msg.chat.id, "Please answer with one of the options")
            .await?;
        return Ok(());
    };

    match controller.submit(&mut quiz, &visitor, text).await {
        Ok(Submission::Advanced) => {
            send_current_question(&bot, msg.chat.id, &quiz).await?;
            dialogue.update(State::Quiz { quiz, visitor }).await?;
        }
        // Every other outcome shows the visitor nothing: the current
        // question simply stays up.
        Ok(Submission::NotReady) => {
            log::debug!("Answer ignored, the visit was never recorded");
        }
        Ok(Submission::InFlight) => {
            log::debug!("Answer ignored, another submission is in flight");
        }
        Ok(Submission::Finished) => {}
        Err(err) => {
            log::error!("Error: {}", err);
        }
    }
    Ok(())
}

async fn send_current_question(bot: &Bot, chat_id: ChatId, quiz: &Quiz) -> HandlerResult {
    let Some(question) = quiz.current() else {
        bot.send_message(chat_id, portfolio::NO_MORE_QUESTIONS).await?;
        return Ok(());
    };

    let options = question
        .options
        .iter()
        .map(|option| vec![KeyboardButton::new(option.clone())])
        .collect::<Vec<_>>();

    bot.send_message(
        chat_id,
        format!("<b>{}</b>", teloxide::utils::html::escape(&question.text)),
    )
    .parse_mode(ParseMode::Html)
    .reply_markup(KeyboardMarkup::new(options))
    .await?;
    Ok(())
}
