pub mod health_handler;
pub mod quiz_handler;
pub mod tutor_handler;
pub mod ui_handler;

use actix_web::web;

use crate::errors::AppError;

pub use health_handler::health_check;
pub use quiz_handler::{generate_quiz, quiz_html};
pub use tutor_handler::tutor;
pub use ui_handler::index;

/// Registers every route plus extractor configs that turn malformed bodies
/// and path segments into 400 responses.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }))
    .service(index)
    .service(health_check)
    .service(tutor)
    .service(generate_quiz)
    .service(quiz_html);
}
