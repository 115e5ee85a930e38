use actix_web::{get, http::header::ContentType, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::{QuizHtmlPath, QuizRequest},
        response::QuizResponse,
    },
};

#[post("/quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let request_id = get_request_id(&req);
    log::info!(
        "[{}] quiz request: subject={}, level={}, questions={}",
        request_id,
        request.subject,
        request.level,
        request.num_questions
    );

    let result = state
        .quiz_service
        .generate_quiz(
            &request.subject,
            &request.level,
            request.num_questions,
            request.reveal_format(),
        )
        .await
        .map_err(|e| {
            log::error!("[{}] quiz request failed: {}", request_id, e);
            e
        })?;

    Ok(HttpResponse::Ok().json(QuizResponse::from(result)))
}

#[get("/quiz-html/{subject}/{level}/{num_questions}")]
pub async fn quiz_html(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<QuizHtmlPath>,
) -> Result<HttpResponse, AppError> {
    let path = path.into_inner();
    path.validate()?;

    let request_id = get_request_id(&req);
    log::info!(
        "[{}] quiz html request: subject={}, level={}, questions={}",
        request_id,
        path.subject,
        path.level,
        path.num_questions
    );

    let result = state
        .quiz_service
        .generate_quiz(&path.subject, &path.level, path.num_questions, true)
        .await
        .map_err(|e| {
            log::error!("[{}] quiz html request failed: {}", request_id, e);
            e
        })?;

    let html = result
        .rendered_html
        .ok_or_else(|| AppError::InternalError("Quiz HTML was not rendered".to_string()))?;

    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(html))
}
