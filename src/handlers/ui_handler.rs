use actix_web::{get, http::header::ContentType, HttpResponse};

const INDEX_PAGE: &str = include_str!("../../assets/index.html");

#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_PAGE)
}
