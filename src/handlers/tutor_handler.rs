use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{request::TutorRequest, response::TutorResponse},
};

#[post("/tutor")]
pub async fn tutor(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<TutorRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let request_id = get_request_id(&req);
    log::info!(
        "[{}] tutor request: subject={}, level={}, style={}",
        request_id,
        request.subject,
        request.level,
        request.learning_style
    );

    let response = state.tutor_service.explain(&request).await.map_err(|e| {
        log::error!("[{}] tutor request failed: {}", request_id, e);
        e
    })?;

    Ok(HttpResponse::Ok().json(TutorResponse { response }))
}
