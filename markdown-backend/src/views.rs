//! List/detail/create/update views.
//!
//! Each view is a plain function over a [`DocumentStore`] and the request
//! payload, returning a [`ViewOutcome`] that the controllers turn into an
//! HTTP response. Nothing here knows about actix-web.

use crate::db::DocumentStore;
use crate::error::StoreResult;
use crate::models::{Document, DocumentForm, FormErrors};
use crate::urls;

/// Whether the shared form page is adding a new document or editing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(i64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewOutcome {
    List(Vec<Document>),
    Detail(Document),
    Form {
        mode: FormMode,
        form: DocumentForm,
        errors: FormErrors,
    },
    Redirect(String),
    NotFound,
}

/// Result of validating and persisting a form
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved(Document),
    Invalid(FormErrors),
    NotFound,
}

/// Validate `form` and either insert a new document or replace an existing one.
pub fn save_document(
    store: &dyn DocumentStore,
    id: Option<i64>,
    form: &DocumentForm,
) -> StoreResult<SaveOutcome> {
    let cleaned = match form.clean() {
        Ok(c) => c,
        Err(errors) => return Ok(SaveOutcome::Invalid(errors)),
    };

    let saved = match id {
        None => Some(store.create_document(&cleaned.title, &cleaned.markdown_description)?),
        Some(id) => store.update_document(id, &cleaned.title, &cleaned.markdown_description)?,
    };

    Ok(saved.map_or(SaveOutcome::NotFound, SaveOutcome::Saved))
}

pub fn list_view(store: &dyn DocumentStore) -> StoreResult<ViewOutcome> {
    Ok(ViewOutcome::List(store.list_documents()?))
}

pub fn detail_view(store: &dyn DocumentStore, id: i64) -> StoreResult<ViewOutcome> {
    Ok(store
        .get_document(id)?
        .map_or(ViewOutcome::NotFound, ViewOutcome::Detail))
}

pub fn create_form_view() -> ViewOutcome {
    ViewOutcome::Form {
        mode: FormMode::Create,
        form: DocumentForm::default(),
        errors: FormErrors::default(),
    }
}

pub fn create_view(store: &dyn DocumentStore, form: DocumentForm) -> StoreResult<ViewOutcome> {
    Ok(match save_document(store, None, &form)? {
        SaveOutcome::Saved(_) => ViewOutcome::Redirect(urls::list_path()),
        SaveOutcome::Invalid(errors) => ViewOutcome::Form {
            mode: FormMode::Create,
            form,
            errors,
        },
        SaveOutcome::NotFound => ViewOutcome::NotFound,
    })
}

pub fn update_form_view(store: &dyn DocumentStore, id: i64) -> StoreResult<ViewOutcome> {
    Ok(match store.get_document(id)? {
        Some(doc) => ViewOutcome::Form {
            mode: FormMode::Update(doc.id),
            form: DocumentForm::from_document(&doc),
            errors: FormErrors::default(),
        },
        None => ViewOutcome::NotFound,
    })
}

pub fn update_view(
    store: &dyn DocumentStore,
    id: i64,
    form: DocumentForm,
) -> StoreResult<ViewOutcome> {
    // An invalid submission for a missing record is still a 404
    if store.get_document(id)?.is_none() {
        return Ok(ViewOutcome::NotFound);
    }

    Ok(match save_document(store, Some(id), &form)? {
        SaveOutcome::Saved(_) => ViewOutcome::Redirect(urls::list_path()),
        SaveOutcome::Invalid(errors) => ViewOutcome::Form {
            mode: FormMode::Update(id),
            form,
            errors,
        },
        SaveOutcome::NotFound => ViewOutcome::NotFound,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use tempfile::{tempdir, TempDir};

    fn test_db() -> (TempDir, Database) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("views.db");
        let db = Database::new(db_path.to_str().unwrap(), 2).expect("Failed to create database");
        (dir, db)
    }

    fn form(title: &str, body: &str) -> DocumentForm {
        DocumentForm {
            title: title.to_string(),
            markdown_description: body.to_string(),
        }
    }

    #[test]
    fn test_create_redirects_to_list() {
        let (_dir, db) = test_db();

        let outcome = create_view(&db, form("Example", "hello")).unwrap();
        assert_eq!(outcome, ViewOutcome::Redirect("/".to_string()));

        match list_view(&db).unwrap() {
            ViewOutcome::List(docs) => {
                assert_eq!(docs.len(), 1);
                assert_eq!(docs[0].display_label(), "Example");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_create_rerenders_form() {
        let (_dir, db) = test_db();

        match create_view(&db, form("", "hello")).unwrap() {
            ViewOutcome::Form { mode, form, errors } => {
                assert_eq!(mode, FormMode::Create);
                assert_eq!(form.markdown_description, "hello");
                assert!(!errors.get("title").is_empty());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(db.count_documents().unwrap(), 0);
    }

    #[test]
    fn test_detail_found_and_missing() {
        let (_dir, db) = test_db();
        let doc = db.create_document("Doc", "body").unwrap();

        assert_eq!(detail_view(&db, doc.id).unwrap(), ViewOutcome::Detail(doc));
        assert_eq!(detail_view(&db, 999).unwrap(), ViewOutcome::NotFound);
    }

    #[test]
    fn test_update_form_prefills() {
        let (_dir, db) = test_db();
        let doc = db.create_document("Doc", "body").unwrap();

        match update_form_view(&db, doc.id).unwrap() {
            ViewOutcome::Form { mode, form, errors } => {
                assert_eq!(mode, FormMode::Update(doc.id));
                assert_eq!(form.title, "Doc");
                assert!(errors.is_empty());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(update_form_view(&db, 999).unwrap(), ViewOutcome::NotFound);
    }

    #[test]
    fn test_update_replaces_fields() {
        let (_dir, db) = test_db();
        let doc = db.create_document("Doc", "old").unwrap();

        let outcome = update_view(&db, doc.id, form("New", "**new**")).unwrap();
        assert_eq!(outcome, ViewOutcome::Redirect("/".to_string()));

        let fetched = db.get_document(doc.id).unwrap().unwrap();
        assert_eq!(fetched.title, "New");
        assert!(fetched.render().contains("<strong>new</strong>"));
    }

    #[test]
    fn test_update_missing_is_not_found_even_if_invalid() {
        let (_dir, db) = test_db();

        assert_eq!(update_view(&db, 5, form("", "")).unwrap(), ViewOutcome::NotFound);
        assert_eq!(update_view(&db, 5, form("t", "b")).unwrap(), ViewOutcome::NotFound);
    }

    #[test]
    fn test_save_document_reports_outcomes() {
        let (_dir, db) = test_db();

        let saved = save_document(&db, None, &form("A", "b")).unwrap();
        let doc = match saved {
            SaveOutcome::Saved(doc) => doc,
            other => panic!("unexpected outcome: {:?}", other),
        };
        assert!(matches!(
            save_document(&db, Some(doc.id), &form("", "b")).unwrap(),
            SaveOutcome::Invalid(_)
        ));
        assert_eq!(
            save_document(&db, Some(doc.id + 100), &form("A", "b")).unwrap(),
            SaveOutcome::NotFound
        );
    }
}
