use actix_cors::Cors;
use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod admin;
mod config;
mod controllers;
mod db;
mod error;
mod markdown;
mod models;
mod templates;
mod urls;
mod views;

use config::Config;
use db::{Database, DocumentStore};

pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    /// Server start time for uptime calculation
    pub started_at: std::time::Instant,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            started_at: std::time::Instant::now(),
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    log::info!("markdown-backend v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();
    let bind = (config.bind_address.clone(), config.port);

    log::info!("Initializing database at {}", config.database_url);
    let db = match Database::new(&config.database_url, config.db_pool_size) {
        Ok(db) => Arc::new(db),
        Err(e) => {
            log::error!("Failed to initialize database: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };
    match db.count_documents() {
        Ok(count) => log::info!("[DOCS] {} documents in store", count),
        Err(e) => log::warn!("[DOCS] Could not count documents: {}", e),
    }

    let static_dir = config.static_dir.clone();
    let serve_static = std::path::Path::new(&static_dir).exists();
    if serve_static {
        log::info!("Serving static files from: {}", static_dir);
    } else {
        log::warn!("Static directory {} not found, editor preview assets disabled", static_dir);
    }

    let max_body_bytes = config.max_body_bytes;
    log::info!("Accepting request bodies up to {} bytes", max_body_bytes);

    let state = web::Data::new(AppState::new(db));
    log::info!("Listening on {}", config.self_url());

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        let mut app = App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::body_limits(max_body_bytes))
            .configure(controllers::health::config_routes)
            .configure(controllers::api::config)
            .configure(controllers::markdownx::config)
            .configure(controllers::admin::config)
            .configure(controllers::documents::config);

        if serve_static {
            app = app.service(Files::new("/static", static_dir.clone()));
        }

        app
    })
    .bind(bind)?
    .run();

    let server_handle = server.handle();

    // Spawn Ctrl+C handler
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        log::info!("Received Ctrl+C, shutting down...");

        let server_stop = server_handle.stop(true);
        if tokio::time::timeout(std::time::Duration::from_secs(5), server_stop).await.is_err() {
            log::warn!("Timeout waiting for HTTP server to stop, forcing exit...");
        }

        log::info!("Shutdown complete");
    });

    server.await
}
