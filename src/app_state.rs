use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        completion_client::{CompletionClient, OpenAiCompletionClient},
        quiz_service::QuizService,
        tutor_service::TutorService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub tutor_service: Arc<TutorService>,
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Composition root: one provider client shared by every service.
    pub fn new(config: Config) -> Self {
        let client: Arc<dyn CompletionClient> = Arc::new(OpenAiCompletionClient::new(&config));
        Self::with_client(config, client)
    }

    pub fn with_client(config: Config, client: Arc<dyn CompletionClient>) -> Self {
        Self {
            tutor_service: Arc::new(TutorService::new(Arc::clone(&client))),
            quiz_service: Arc::new(QuizService::new(client)),
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_builds_from_config() {
        let state = AppState::new(Config::test_config());
        assert_eq!(state.config.openai_model, "test-model");
    }
}
