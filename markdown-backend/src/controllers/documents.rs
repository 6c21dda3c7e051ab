//! Public HTML pages: list, detail, create and update.

use actix_web::{web, HttpResponse, Responder};

use super::{html, not_found_page, redirect, store_error_page};
use crate::error::StoreResult;
use crate::models::DocumentForm;
use crate::templates;
use crate::views::{self, ViewOutcome};
use crate::AppState;

fn respond(outcome: StoreResult<ViewOutcome>) -> HttpResponse {
    match outcome {
        Ok(ViewOutcome::List(docs)) => html(templates::document_list(&docs)),
        Ok(ViewOutcome::Detail(doc)) => html(templates::document_detail(&doc)),
        Ok(ViewOutcome::Form { mode, form, errors }) => {
            html(templates::document_form(mode, &form, &errors))
        }
        Ok(ViewOutcome::Redirect(location)) => redirect(&location),
        Ok(ViewOutcome::NotFound) => not_found_page("No document found matching the query"),
        Err(e) => store_error_page(e),
    }
}

async fn list_documents(data: web::Data<AppState>) -> impl Responder {
    respond(views::list_view(data.store.as_ref()))
}

async fn document_detail(data: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    respond(views::detail_view(data.store.as_ref(), path.into_inner()))
}

async fn create_form() -> impl Responder {
    respond(Ok(views::create_form_view()))
}

async fn create_document(
    data: web::Data<AppState>,
    form: web::Form<DocumentForm>,
) -> impl Responder {
    respond(views::create_view(data.store.as_ref(), form.into_inner()))
}

async fn update_form(data: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    respond(views::update_form_view(data.store.as_ref(), path.into_inner()))
}

async fn update_document(
    data: web::Data<AppState>,
    path: web::Path<i64>,
    form: web::Form<DocumentForm>,
) -> impl Responder {
    respond(views::update_view(
        data.store.as_ref(),
        path.into_inner(),
        form.into_inner(),
    ))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(list_documents)))
        .service(
            web::resource("/create/")
                .route(web::get().to(create_form))
                .route(web::post().to(create_document)),
        )
        .service(web::resource(r"/{id:\d+}/").route(web::get().to(document_detail)))
        .service(
            web::resource(r"/{id:\d+}/update/")
                .route(web::get().to(update_form))
                .route(web::post().to(update_document)),
        );
}
