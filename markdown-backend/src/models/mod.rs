pub mod document;

pub use document::{
    Document, DocumentForm, DocumentResponse, FormErrors, DOCUMENT_FIELDS, TITLE_MAX_LENGTH,
};
