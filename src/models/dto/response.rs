use serde::Serialize;

use crate::models::domain::{QuizQuestion, QuizResult};

#[derive(Debug, Clone, Serialize)]
pub struct TutorResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub quiz: Vec<QuizQuestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_quiz: Option<String>,
}

impl From<QuizResult> for QuizResponse {
    fn from(result: QuizResult) -> Self {
        QuizResponse {
            quiz: result.questions,
            formatted_quiz: result.rendered_html,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
