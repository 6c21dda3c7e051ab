pub mod admin;
pub mod api;
pub mod documents;
pub mod health;
pub mod markdownx;

use actix_web::http::header::{self, ContentType};
use actix_web::{web, HttpResponse};
use maud::Markup;

use crate::error::StoreError;
use crate::templates;

/// Raise the form and JSON extractor limits so long markdown bodies fit.
/// Anything larger is answered with 413.
pub fn body_limits(max_bytes: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::FormConfig::default().limit(max_bytes))
            .app_data(web::JsonConfig::default().limit(max_bytes));
    }
}

/// 200 response with an HTML page
pub(crate) fn html(markup: Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(markup.into_string())
}

/// 302 redirect after a successful form submission
pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub(crate) fn not_found_page(what: &str) -> HttpResponse {
    HttpResponse::NotFound()
        .content_type(ContentType::html())
        .body(templates::not_found(what).into_string())
}

pub(crate) fn store_error_page(e: StoreError) -> HttpResponse {
    log::error!("Document store error: {}", e);
    HttpResponse::InternalServerError()
        .content_type(ContentType::plaintext())
        .body("Internal server error")
}
