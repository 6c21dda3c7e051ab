//! Live preview endpoint used by the markdown editor widget.

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::markdown::markdownify;
use crate::urls;

#[derive(Debug, Deserialize)]
struct PreviewForm {
    #[serde(default)]
    content: String,
}

/// Render the posted markdown to an HTML fragment
async fn markdownify_preview(form: web::Form<PreviewForm>) -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(markdownify(&form.content))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(urls::MARKDOWNIFY).route(web::post().to(markdownify_preview)));
}
