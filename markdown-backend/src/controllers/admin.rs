//! Admin pages: model index, changelist with search, add and change forms.

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use super::{html, not_found_page, redirect, store_error_page};
use crate::admin::{self, ModelAdmin, DOCUMENT_ADMIN};
use crate::models::{DocumentForm, FormErrors};
use crate::templates;
use crate::urls;
use crate::views::{self, SaveOutcome};
use crate::AppState;

#[derive(Debug, Deserialize)]
struct ChangelistQuery {
    q: Option<String>,
}

fn lookup_or_404(model: &str) -> Result<&'static ModelAdmin, HttpResponse> {
    admin::lookup(model).ok_or_else(|| not_found_page("Unknown admin model"))
}

async fn admin_index(data: web::Data<AppState>) -> impl Responder {
    // Documents are the only registered model
    match data.store.count_documents() {
        Ok(count) => html(templates::admin_index(&[(&DOCUMENT_ADMIN, count)])),
        Err(e) => store_error_page(e),
    }
}

async fn changelist(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<ChangelistQuery>,
) -> impl Responder {
    let model_admin = match lookup_or_404(&path) {
        Ok(a) => a,
        Err(resp) => return resp,
    };

    match model_admin.changelist(data.store.as_ref(), query.q.as_deref()) {
        Ok(docs) => html(templates::admin_changelist(model_admin, &docs, query.q.as_deref())),
        Err(e) => store_error_page(e),
    }
}

async fn add_form(path: web::Path<String>) -> impl Responder {
    match lookup_or_404(&path) {
        Ok(model_admin) => html(templates::admin_form(
            model_admin,
            None,
            &DocumentForm::default(),
            &FormErrors::default(),
        )),
        Err(resp) => resp,
    }
}

async fn add_submit(
    data: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<DocumentForm>,
) -> impl Responder {
    let model_admin = match lookup_or_404(&path) {
        Ok(a) => a,
        Err(resp) => return resp,
    };

    match views::save_document(data.store.as_ref(), None, &form) {
        Ok(SaveOutcome::Saved(doc)) => {
            log::info!("[ADMIN] Added {} {}", model_admin.verbose_name, doc.id);
            redirect(&urls::admin_changelist_path(model_admin.model))
        }
        Ok(SaveOutcome::Invalid(errors)) => {
            html(templates::admin_form(model_admin, None, &form, &errors))
        }
        Ok(SaveOutcome::NotFound) => not_found_page("No document found matching the query"),
        Err(e) => store_error_page(e),
    }
}

async fn change_form(data: web::Data<AppState>, path: web::Path<(String, i64)>) -> impl Responder {
    let (model, id) = path.into_inner();
    let model_admin = match lookup_or_404(&model) {
        Ok(a) => a,
        Err(resp) => return resp,
    };

    match data.store.get_document(id) {
        Ok(Some(doc)) => html(templates::admin_form(
            model_admin,
            Some(&doc),
            &DocumentForm::from_document(&doc),
            &FormErrors::default(),
        )),
        Ok(None) => not_found_page("No document found matching the query"),
        Err(e) => store_error_page(e),
    }
}

async fn change_submit(
    data: web::Data<AppState>,
    path: web::Path<(String, i64)>,
    form: web::Form<DocumentForm>,
) -> impl Responder {
    let (model, id) = path.into_inner();
    let model_admin = match lookup_or_404(&model) {
        Ok(a) => a,
        Err(resp) => return resp,
    };

    let existing = match data.store.get_document(id) {
        Ok(Some(doc)) => doc,
        Ok(None) => return not_found_page("No document found matching the query"),
        Err(e) => return store_error_page(e),
    };

    match views::save_document(data.store.as_ref(), Some(id), &form) {
        Ok(SaveOutcome::Saved(doc)) => {
            log::info!("[ADMIN] Changed {} {}", model_admin.verbose_name, doc.id);
            redirect(&urls::admin_changelist_path(model_admin.model))
        }
        Ok(SaveOutcome::Invalid(errors)) => html(templates::admin_form(
            model_admin,
            Some(&existing),
            &form,
            &errors,
        )),
        Ok(SaveOutcome::NotFound) => not_found_page("No document found matching the query"),
        Err(e) => store_error_page(e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(web::resource("/").route(web::get().to(admin_index)))
            .service(web::resource("/{model}/").route(web::get().to(changelist)))
            .service(
                web::resource("/{model}/add/")
                    .route(web::get().to(add_form))
                    .route(web::post().to(add_submit)),
            )
            .service(
                web::resource(r"/{model}/{id:\d+}/change/")
                    .route(web::get().to(change_form))
                    .route(web::post().to(change_submit)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults;
    use crate::controllers::{body_limits, test_support::test_state};
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};

    async fn body_string(resp: actix_web::dev::ServiceResponse) -> String {
        String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn test_index_lists_registered_models() {
        let (_dir, db, state) = test_state();
        db.create_document("One", "1").unwrap();
        let app = test::init_service(App::new().app_data(state).configure(config)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/admin/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains("href=\"/admin/documents/\""));
    }

    #[actix_web::test]
    async fn test_index_counts_documents() {
        let (_dir, db, state) = test_state();
        let app = test::init_service(App::new().app_data(state).configure(config)).await;

        let req = test::TestRequest::get().uri("/admin/").to_request();
        let empty = body_string(test::call_service(&app, req).await).await;

        db.create_document("One", "1").unwrap();
        db.create_document("Two", "2").unwrap();
        let req = test::TestRequest::get().uri("/admin/").to_request();
        let filled = body_string(test::call_service(&app, req).await).await;

        assert!(empty.contains(">0<"), "{}", empty);
        assert!(filled.contains(">2<"), "{}", filled);
    }

    #[actix_web::test]
    async fn test_changelist_search_filters_by_title() {
        let (_dir, db, state) = test_state();
        db.create_document("Meeting notes", "agenda").unwrap();
        db.create_document("Shopping list", "notes on milk").unwrap();
        let app = test::init_service(App::new().app_data(state).configure(config)).await;

        let req = test::TestRequest::get().uri("/admin/documents/?q=notes").to_request();
        let body = body_string(test::call_service(&app, req).await).await;
        assert!(body.contains("Meeting notes"));
        assert!(!body.contains("Shopping list"));

        let req = test::TestRequest::get().uri("/admin/documents/").to_request();
        let body = body_string(test::call_service(&app, req).await).await;
        assert!(body.contains("Meeting notes"));
        assert!(body.contains("Shopping list"));
    }

    #[actix_web::test]
    async fn test_add_with_long_body() {
        let (_dir, db, state) = test_state();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .configure(body_limits(defaults::MAX_BODY_BYTES))
                .configure(config),
        )
        .await;

        let long_body = "word ".repeat(5000);
        let req = test::TestRequest::post()
            .uri("/admin/documents/add/")
            .set_form([("title", "Long"), ("markdown_description", long_body.as_str())])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(db.count_documents().unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_unknown_model_is_not_found() {
        let (_dir, _db, state) = test_state();
        let app = test::init_service(App::new().app_data(state).configure(config)).await;

        let req = test::TestRequest::get().uri("/admin/users/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_add_and_change() {
        let (_dir, db, state) = test_state();
        let app = test::init_service(App::new().app_data(state).configure(config)).await;

        let req = test::TestRequest::post()
            .uri("/admin/documents/add/")
            .set_form([("title", "Admin doc"), ("markdown_description", "body")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
            "/admin/documents/"
        );

        let doc = db.list_documents().unwrap().pop().unwrap();
        let req = test::TestRequest::get()
            .uri(&format!("/admin/documents/{}/change/", doc.id))
            .to_request();
        let body = body_string(test::call_service(&app, req).await).await;
        assert!(body.contains("View on site"));
        assert!(body.contains(&format!("href=\"{}\"", doc.canonical_location())));

        let req = test::TestRequest::post()
            .uri(&format!("/admin/documents/{}/change/", doc.id))
            .set_form([("title", ""), ("markdown_description", "body")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_string(resp).await.contains("This field is required."));
        assert_eq!(db.get_document(doc.id).unwrap().unwrap().title, "Admin doc");

        let req = test::TestRequest::get()
            .uri("/admin/documents/999/change/")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
