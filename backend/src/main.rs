mod assets;
mod config;
mod error;
mod inference;
mod routes;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use config::AppConfig;
use inference::Model;
use routes::configure_routes;
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Ok(current_dir) = env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    } else {
        log::error!("Failed to get the current working directory.");
    }

    let config = AppConfig::load().map_err(|e| {
        log::error!("Invalid configuration: {e}");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    log::info!(
        "Loading {:?} model from {}",
        config.model.engine,
        config.model.path.display()
    );
    let model = Model::load(&config.model).map_err(|e| {
        log::error!("Failed to load model at startup: {e}");
        std::io::Error::other(format!("Model loading failed: {e}"))
    })?;
    let model = web::Data::new(model);

    for path in assets::missing_assets(&config.paths.assets_dir) {
        log::warn!("Static asset not found: {}", path.display());
    }
    if !config.paths.frontend_dir.is_dir() {
        log::warn!(
            "Frontend build not found at {}; run `trunk build` in frontend/",
            config.paths.frontend_dir.display()
        );
    }

    let upload_config = web::Data::new(config.upload.clone());
    let paths = config.paths.clone();
    let bind_address = config.bind_address();

    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(model.clone())
            .app_data(upload_config.clone())
            .configure(|cfg| configure_routes(cfg, &paths))
    })
    .bind(&bind_address)?
    .run()
    .await
}
