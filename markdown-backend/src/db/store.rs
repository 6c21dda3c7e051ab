//! The store interface the views are written against.

use crate::error::StoreResult;
use crate::models::Document;

use super::Database;

/// Create/read/update/list access to documents.
///
/// Views take `&dyn DocumentStore` so they stay independent of SQLite.
pub trait DocumentStore: Send + Sync {
    fn list_documents(&self) -> StoreResult<Vec<Document>>;
    fn get_document(&self, id: i64) -> StoreResult<Option<Document>>;
    fn create_document(&self, title: &str, markdown_description: &str) -> StoreResult<Document>;
    fn update_document(
        &self,
        id: i64,
        title: &str,
        markdown_description: &str,
    ) -> StoreResult<Option<Document>>;
    fn search_documents(&self, fields: &[&str], query: &str) -> StoreResult<Vec<Document>>;
    fn count_documents(&self) -> StoreResult<i64>;
}

impl DocumentStore for Database {
    fn list_documents(&self) -> StoreResult<Vec<Document>> {
        Database::list_documents(self)
    }

    fn get_document(&self, id: i64) -> StoreResult<Option<Document>> {
        Database::get_document(self, id)
    }

    fn create_document(&self, title: &str, markdown_description: &str) -> StoreResult<Document> {
        Database::create_document(self, title, markdown_description)
    }

    fn update_document(
        &self,
        id: i64,
        title: &str,
        markdown_description: &str,
    ) -> StoreResult<Option<Document>> {
        Database::update_document(self, id, title, markdown_description)
    }

    fn search_documents(&self, fields: &[&str], query: &str) -> StoreResult<Vec<Document>> {
        Database::search_documents(self, fields, query)
    }

    fn count_documents(&self) -> StoreResult<i64> {
        Database::count_documents(self)
    }
}
