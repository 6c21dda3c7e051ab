use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::markdown::markdownify;
use crate::urls;

/// Maximum title length accepted by the forms
pub const TITLE_MAX_LENGTH: usize = 200;

/// Columns a caller may name when looking up or searching documents.
pub const DOCUMENT_FIELDS: &[&str] = &["id", "title", "markdown_description"];

/// Document - a titled markdown record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub title: String,
    pub markdown_description: String,
}

impl Document {
    /// Render the markdown body to HTML. Recomputed on every call.
    pub fn render(&self) -> String {
        markdownify(&self.markdown_description)
    }

    /// Detail page path for this document.
    pub fn canonical_location(&self) -> String {
        urls::detail_path(self.id)
    }

    pub fn display_label(&self) -> &str {
        &self.title
    }

    /// Look up a column by name for admin list columns.
    pub fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.id.to_string()),
            "title" => Some(self.title.clone()),
            "markdown_description" => Some(self.markdown_description.clone()),
            _ => None,
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// Validation messages keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Create/update payload, shared by the HTML forms and the JSON API.
///
/// Missing fields deserialize as empty strings so they surface as
/// validation messages rather than extractor errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub markdown_description: String,
}

/// Trimmed, validated form values ready for the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedDocument {
    pub title: String,
    pub markdown_description: String,
}

impl DocumentForm {
    pub fn from_document(doc: &Document) -> Self {
        Self {
            title: doc.title.clone(),
            markdown_description: doc.markdown_description.clone(),
        }
    }

    /// Validate required fields and the title length.
    pub fn clean(&self) -> Result<CleanedDocument, FormErrors> {
        let mut errors = FormErrors::default();
        let title = self.title.trim();
        let body = self.markdown_description.trim();

        if title.is_empty() {
            errors.add("title", "This field is required.");
        } else {
            let len = title.chars().count();
            if len > TITLE_MAX_LENGTH {
                errors.add(
                    "title",
                    format!(
                        "Ensure this value has at most {} characters (it has {}).",
                        TITLE_MAX_LENGTH, len
                    ),
                );
            }
        }

        if body.is_empty() {
            errors.add("markdown_description", "This field is required.");
        }

        if errors.is_empty() {
            Ok(CleanedDocument {
                title: title.to_string(),
                markdown_description: body.to_string(),
            })
        } else {
            Err(errors)
        }
    }
}

/// Document response for API
#[derive(Debug, Clone, Serialize)]
pub struct DocumentResponse {
    pub id: i64,
    pub title: String,
    pub markdown_description: String,
    pub rendered_html: String,
    pub url: String,
}

impl From<Document> for DocumentResponse {
    fn from(doc: Document) -> Self {
        let rendered_html = doc.render();
        let url = doc.canonical_location();
        DocumentResponse {
            id: doc.id,
            title: doc.title,
            markdown_description: doc.markdown_description,
            rendered_html,
            url,
        }
    }
}
