use crate::models::domain::QuizQuestion;

/// Outcome of one quiz request. Lives for a single request/response cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResult {
    pub questions: Vec<QuizQuestion>,
    pub rendered_html: Option<String>,
}

impl QuizResult {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            rendered_html: None,
        }
    }

    pub fn with_rendered_html(mut self, html: String) -> Self {
        self.rendered_html = Some(html);
        self
    }
}
