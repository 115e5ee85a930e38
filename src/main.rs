use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use tutor_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("{}", e);
        std::io::Error::other(e.to_string())
    })?;

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    log::info!(
        "starting HTTP server on {}:{} (model: {}, base: {})",
        host,
        port,
        config.openai_model,
        config.openai_api_base
    );

    let state = AppState::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Cors::permissive())
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new(r#"%a "%r" %s %b %Dms request_id=%{x-request-id}o"#))
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
