use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::LearningStyle, dto::request::TutorRequest},
    services::{
        completion_client::{CompletionClient, CompletionRequest},
        prompt_builder::build_tutor_prompt,
    },
};

pub struct TutorService {
    client: Arc<dyn CompletionClient>,
}

impl TutorService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn explain(&self, request: &TutorRequest) -> AppResult<String> {
        let prompt = build_tutor_prompt(
            &request.subject,
            &request.level,
            &request.question,
            &request.learning_style,
            &request.background,
            &request.language,
        );

        log::info!(
            "Generating tutoring response for subject: {}, level: {}",
            request.subject,
            request.level
        );

        let content = self
            .client
            .complete(CompletionRequest::new(prompt))
            .await
            .map_err(|e| {
                log::error!(
                    "Error generating tutoring response for subject: {}, level: {}: {}",
                    request.subject,
                    request.level,
                    e
                );
                AppError::UpstreamError(format!("Error generating explanation: {}", e))
            })?;

        Ok(LearningStyle::decorate(&request.learning_style, content))
    }
}
