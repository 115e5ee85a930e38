#[cfg(test)]
pub mod fixtures {
    use std::sync::Arc;

    use crate::{
        app_state::AppState,
        config::Config,
        models::{domain::QuizQuestion, dto::request::TutorRequest},
        services::completion_client::MockCompletionClient,
    };

    /// A single valid question object, compact JSON on one line.
    pub fn question_json(n: usize) -> String {
        format!(
            r#"{{"question": "Question number {n}?", "options": ["Wrong {n}a", "Right {n}", "Wrong {n}b", "Wrong {n}c"], "correct_answer": "Right {n}", "explanation": "Because {n} is right."}}"#
        )
    }

    /// A model reply wrapping `count` questions in prose and a json fence.
    pub fn quiz_reply_fenced(count: usize) -> String {
        let items: Vec<String> = (1..=count).map(question_json).collect();
        format!(
            "Here is your quiz:\n\n```json\n[\n{}\n]\n```\n\nLet me know if you want more!",
            items.join(",\n")
        )
    }

    pub fn sample_question() -> QuizQuestion {
        QuizQuestion::new(
            "What is the capital of France?",
            [
                "Berlin".to_string(),
                "Paris".to_string(),
                "Rome".to_string(),
                "Madrid".to_string(),
            ],
            "Paris",
            "Paris has been the capital of France since 987.",
        )
    }

    pub fn tutor_request(learning_style: &str) -> TutorRequest {
        TutorRequest {
            subject: "Physics".to_string(),
            level: "Beginner".to_string(),
            question: "Explain Newton's Second Law of Motion.".to_string(),
            learning_style: learning_style.to_string(),
            background: "Some knowledge".to_string(),
            language: "English".to_string(),
        }
    }

    pub fn test_app_state(client: MockCompletionClient) -> AppState {
        AppState::with_client(Config::test_config(), Arc::new(client))
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Handler rejected the request (4xx) or failed upstream (5xx).
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "handler should have failed, got {}",
            status
        );
    }

    pub fn assert_success_status(status: StatusCode) {
        assert!(status.is_success(), "handler should have succeeded, got {}", status);
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::test_helpers::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_fixtures_question_json_is_valid() {
        let value: serde_json::Value = serde_json::from_str(&question_json(4)).unwrap();
        assert_eq!(value["correct_answer"], "Right 4");
        assert_eq!(value["options"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn test_fixtures_quiz_reply_is_fenced() {
        let reply = quiz_reply_fenced(2);
        assert!(reply.contains("```json\n["));
        assert!(reply.contains("Question number 2?"));
    }

    #[test]
    fn test_fixtures_sample_question() {
        let question = sample_question();
        assert_eq!(question.correct_index(), 1);
    }

    #[test]
    fn test_status_helpers() {
        assert_success_status(StatusCode::OK);
        assert_error_status(StatusCode::BAD_REQUEST);
        assert_error_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}
