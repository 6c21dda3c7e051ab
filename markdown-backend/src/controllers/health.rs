use actix_web::{web, HttpResponse, Responder};

use crate::AppState;

/// Version from Cargo.toml, available at compile time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/health").route(web::get().to(health_check)));
    cfg.service(web::resource("/api/version").route(web::get().to(get_version)));
}

async fn health_check(state: web::Data<AppState>) -> impl Responder {
    // A failing count means the pool or the database file is unusable
    match state.store.count_documents() {
        Ok(count) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "version": VERSION,
            "documents": count,
            "uptime_secs": state.started_at.elapsed().as_secs()
        })),
        Err(e) => {
            log::error!("Health check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "status": "error",
                "version": VERSION,
                "error": e.to_string()
            }))
        }
    }
}

async fn get_version() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "version": VERSION
    }))
}
