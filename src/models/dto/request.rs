use serde::Deserialize;
use validator::Validate;

use crate::models::domain::learning_style::DEFAULT_LEARNING_STYLE;

pub const DEFAULT_NUM_QUESTIONS: u32 = 5;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TutorRequest {
    #[validate(length(min = 1, max = 200))]
    pub subject: String,

    #[validate(length(min = 1, max = 100))]
    pub level: String,

    #[validate(length(min = 1, max = 10000))]
    pub question: String,

    #[serde(default = "default_learning_style")]
    pub learning_style: String,

    #[serde(default = "default_background")]
    pub background: String,

    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuizRequest {
    #[validate(length(min = 1, max = 200))]
    pub subject: String,

    #[validate(length(min = 1, max = 100))]
    pub level: String,

    #[serde(default = "default_num_questions")]
    #[validate(range(min = 1, max = 10))]
    pub num_questions: u32,

    // explicit null behaves like an omitted field
    #[serde(default)]
    pub reveal_format: Option<bool>,
}

impl QuizRequest {
    pub fn reveal_format(&self) -> bool {
        self.reveal_format.unwrap_or(true)
    }
}

/// Path segments of `/quiz-html/{subject}/{level}/{num_questions}`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuizHtmlPath {
    #[validate(length(min = 1, max = 200))]
    pub subject: String,

    #[validate(length(min = 1, max = 100))]
    pub level: String,

    #[validate(range(min = 1, max = 10))]
    pub num_questions: u32,
}

fn default_learning_style() -> String {
    DEFAULT_LEARNING_STYLE.to_string()
}

fn default_background() -> String {
    "Unknown".to_string()
}

fn default_language() -> String {
    "English".to_string()
}

fn default_num_questions() -> u32 {
    DEFAULT_NUM_QUESTIONS
}
