use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::QuizResult,
    services::{
        completion_client::{CompletionClient, CompletionRequest},
        prompt_builder::{build_quiz_prompt, build_quiz_system_prompt},
        quiz_parser::parse_quiz,
        quiz_renderer::render_quiz_html,
    },
};

pub struct QuizService {
    client: Arc<dyn CompletionClient>,
}

impl QuizService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Requests `num_questions` questions and parses them, substituting the
    /// fallback quiz when the reply is malformed. Renders HTML when `render`.
    pub async fn generate_quiz(
        &self,
        subject: &str,
        level: &str,
        num_questions: u32,
        render: bool,
    ) -> AppResult<QuizResult> {
        let request = CompletionRequest::new(build_quiz_prompt(subject, level, num_questions))
            .with_system_prompt(build_quiz_system_prompt(subject, level));

        log::info!(
            "Generating quiz for subject: {}, level: {}, questions: {}",
            subject,
            level,
            num_questions
        );

        let raw = self.client.complete(request).await.map_err(|e| {
            log::error!(
                "Error generating quiz for subject: {}, level: {}: {}",
                subject,
                level,
                e
            );
            AppError::UpstreamError(format!("Error generating quiz: {}", e))
        })?;

        let questions = parse_quiz(&raw, subject, num_questions as usize);

        let result = QuizResult::new(questions);
        if render {
            let html = render_quiz_html(&result.questions);
            Ok(result.with_rendered_html(html))
        } else {
            Ok(result)
        }
    }
}
