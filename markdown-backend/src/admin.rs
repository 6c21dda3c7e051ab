//! Admin configuration.
//!
//! Each browsable model gets one [`ModelAdmin`] entry in [`REGISTRY`]; the
//! admin controller reads columns and search fields from it.

use crate::db::DocumentStore;
use crate::error::StoreResult;
use crate::models::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelAdmin {
    /// URL segment under /admin/
    pub model: &'static str,
    pub verbose_name: &'static str,
    pub verbose_name_plural: &'static str,
    /// Columns shown on the changelist
    pub list_display: &'static [&'static str],
    /// Columns matched by the changelist search box
    pub search_fields: &'static [&'static str],
}

pub const DOCUMENT_ADMIN: ModelAdmin = ModelAdmin {
    model: "documents",
    verbose_name: "document",
    verbose_name_plural: "documents",
    list_display: &["title"],
    search_fields: &["title"],
};

pub const REGISTRY: &[ModelAdmin] = &[DOCUMENT_ADMIN];

pub fn lookup(model: &str) -> Option<&'static ModelAdmin> {
    REGISTRY.iter().find(|admin| admin.model == model)
}

impl ModelAdmin {
    /// Rows for the changelist, filtered by `query` when one is given
    pub fn changelist(
        &self,
        store: &dyn DocumentStore,
        query: Option<&str>,
    ) -> StoreResult<Vec<Document>> {
        match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => store.search_documents(self.search_fields, q),
            None => store.list_documents(),
        }
    }

    pub fn is_searchable(&self) -> bool {
        !self.search_fields.is_empty()
    }

    /// Column headings, e.g. `markdown_description` -> `Markdown description`
    pub fn column_headers(&self) -> Vec<String> {
        self.list_display.iter().map(|field| humanize(field)).collect()
    }

    pub fn row(&self, doc: &Document) -> Vec<String> {
        self.list_display
            .iter()
            .map(|field| doc.field_value(field).unwrap_or_default())
            .collect()
    }
}

fn humanize(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
