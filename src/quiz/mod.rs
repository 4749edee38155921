pub mod controller;

/// A single multiple-choice question, in the shape the backend serves it.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<String>,
}

impl Question {
    pub fn new(text: String, options: Vec<String>) -> Self {
        Self { text, options }
    }
}

/// The quiz shown to one visitor. Questions are only ever appended and the
/// index only ever advances, so everything before `current_index` has been
/// answered.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Quiz {
    questions: Vec<Question>,
    current_index: usize,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current_index: 0,
        }
    }

    /// The quiz every visitor starts with.
    pub fn seed() -> Self {
        Self::new(vec![Question::new(
            "1 + 1 = ?".to_string(),
            vec!["0".to_string(), "1".to_string(), "2".to_string()],
        )])
    }

    /// The question waiting for an answer, or `None` once the quiz has run
    /// out.
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// Appends a freshly generated question and moves past the one just
    /// answered. The two always travel together, so the index can never
    /// overtake the question list.
    pub fn advance_with(&mut self, question: Question) {
        self.questions.push(question);
        self.current_index += 1;
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }
}
