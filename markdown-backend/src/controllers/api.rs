//! Documents REST API.
//!
//! JSON counterparts of the HTML views. Responses carry the rendered HTML
//! and the canonical URL alongside the raw markdown.

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::admin::DOCUMENT_ADMIN;
use crate::models::{DocumentForm, DocumentResponse};
use crate::views::{self, SaveOutcome};
use crate::AppState;

#[derive(Debug, Deserialize)]
struct ListDocumentsQuery {
    q: Option<String>,
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "Document not found"
    }))
}

fn database_error(context: &str, e: impl std::fmt::Display) -> HttpResponse {
    log::error!("{}: {}", context, e);
    HttpResponse::InternalServerError().json(serde_json::json!({
        "error": format!("Database error: {}", e)
    }))
}

/// List documents, optionally filtered by title
async fn list_documents(
    data: web::Data<AppState>,
    query: web::Query<ListDocumentsQuery>,
) -> impl Responder {
    match DOCUMENT_ADMIN.changelist(data.store.as_ref(), query.q.as_deref()) {
        Ok(docs) => {
            let items: Vec<DocumentResponse> = docs.into_iter().map(Into::into).collect();
            HttpResponse::Ok().json(items)
        }
        Err(e) => database_error("Failed to list documents", e),
    }
}

/// Get a document by ID
async fn get_document(data: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    match data.store.get_document(path.into_inner()) {
        Ok(Some(doc)) => HttpResponse::Ok().json(DocumentResponse::from(doc)),
        Ok(None) => not_found(),
        Err(e) => database_error("Failed to get document", e),
    }
}

async fn create_document(
    data: web::Data<AppState>,
    body: web::Json<DocumentForm>,
) -> impl Responder {
    match views::save_document(data.store.as_ref(), None, &body) {
        Ok(SaveOutcome::Saved(doc)) => HttpResponse::Created()
            .insert_header((actix_web::http::header::LOCATION, doc.canonical_location()))
            .json(DocumentResponse::from(doc)),
        Ok(SaveOutcome::Invalid(errors)) => {
            HttpResponse::BadRequest().json(serde_json::json!({ "errors": errors }))
        }
        Ok(SaveOutcome::NotFound) => not_found(),
        Err(e) => database_error("Failed to create document", e),
    }
}

/// Replace title and body of a document
async fn update_document(
    data: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<DocumentForm>,
) -> impl Responder {
    let id = path.into_inner();

    match data.store.get_document(id) {
        Ok(Some(_)) => {}
        Ok(None) => return not_found(),
        Err(e) => return database_error("Failed to get document", e),
    }

    match views::save_document(data.store.as_ref(), Some(id), &body) {
        Ok(SaveOutcome::Saved(doc)) => HttpResponse::Ok().json(DocumentResponse::from(doc)),
        Ok(SaveOutcome::Invalid(errors)) => {
            HttpResponse::BadRequest().json(serde_json::json!({ "errors": errors }))
        }
        Ok(SaveOutcome::NotFound) => not_found(),
        Err(e) => database_error("Failed to update document", e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/documents")
            .service(
                web::resource("")
                    .route(web::get().to(list_documents))
                    .route(web::post().to(create_document)),
            )
            .service(
                web::resource(r"/{id:\d+}")
                    .route(web::get().to(get_document))
                    .route(web::put().to(update_document)),
            ),
    );
}
