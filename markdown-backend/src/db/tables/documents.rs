//! Document database operations

use rusqlite::{params, params_from_iter, OptionalExtension, Row};

use crate::error::{StoreError, StoreResult};
use crate::models::{Document, DOCUMENT_FIELDS};
use super::super::Database;

const SELECT_DOCUMENT: &str = "SELECT id, title, markdown_description FROM documents";

fn row_to_document(row: &Row<'_>) -> rusqlite::Result<Document> {
    Ok(Document {
        id: row.get(0)?,
        title: row.get(1)?,
        markdown_description: row.get(2)?,
    })
}

/// Escape LIKE wildcards so search terms match literally
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    format!("%{}%", escaped)
}

impl Database {
    /// Insert a document and return it with its assigned id
    pub fn create_document(&self, title: &str, markdown_description: &str) -> StoreResult<Document> {
        let conn = self.conn()?;

        conn.execute(
            "INSERT INTO documents (title, markdown_description) VALUES (?1, ?2)",
            params![title, markdown_description],
        )?;

        let id = conn.last_insert_rowid();
        log::info!("[DOCS] Created document {} ({:?})", id, title);

        Ok(Document {
            id,
            title: title.to_string(),
            markdown_description: markdown_description.to_string(),
        })
    }

    /// Get a document by id
    pub fn get_document(&self, id: i64) -> StoreResult<Option<Document>> {
        let conn = self.conn()?;

        let doc = conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_DOCUMENT),
                params![id],
                row_to_document,
            )
            .optional()?;

        Ok(doc)
    }

    /// Replace title and body of an existing document. Returns None if it does not exist.
    pub fn update_document(
        &self,
        id: i64,
        title: &str,
        markdown_description: &str,
    ) -> StoreResult<Option<Document>> {
        let conn = self.conn()?;

        let rows_affected = conn.execute(
            "UPDATE documents SET title = ?1, markdown_description = ?2 WHERE id = ?3",
            params![title, markdown_description, id],
        )?;

        if rows_affected == 0 {
            log::debug!("[DOCS] Update skipped, document {} not found", id);
            return Ok(None);
        }

        log::info!("[DOCS] Updated document {}", id);
        Ok(Some(Document {
            id,
            title: title.to_string(),
            markdown_description: markdown_description.to_string(),
        }))
    }

    /// List all documents, oldest first
    pub fn list_documents(&self) -> StoreResult<Vec<Document>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(&format!("{} ORDER BY id", SELECT_DOCUMENT))?;
        let docs = stmt
            .query_map([], row_to_document)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(docs)
    }

    /// Case-insensitive substring search.
    ///
    /// The query is split on whitespace; every term must match at least one
    /// of `fields`. An empty query returns all documents.
    pub fn search_documents(&self, fields: &[&str], query: &str) -> StoreResult<Vec<Document>> {
        if let Some(unknown) = fields.iter().find(|f| !DOCUMENT_FIELDS.contains(f)) {
            return Err(StoreError::UnknownField(unknown.to_string()));
        }

        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() || fields.is_empty() {
            return self.list_documents();
        }

        let mut conditions = Vec::with_capacity(terms.len());
        let mut values = Vec::with_capacity(terms.len() * fields.len());
        for term in &terms {
            let pattern = escape_like(term);
            let ors: Vec<String> = fields
                .iter()
                .map(|field| {
                    values.push(pattern.clone());
                    format!("{} LIKE ?{} ESCAPE '\\'", field, values.len())
                })
                .collect();
            conditions.push(format!("({})", ors.join(" OR ")));
        }

        let sql = format!(
            "{} WHERE {} ORDER BY id",
            SELECT_DOCUMENT,
            conditions.join(" AND ")
        );

        let conn = self.conn()?;
        let mut stmt = conn.prepare(&sql)?;
        let docs = stmt
            .query_map(params_from_iter(values.iter()), row_to_document)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(docs)
    }

    /// Count stored documents
    pub fn count_documents(&self) -> StoreResult<i64> {
        let conn = self.conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn test_db() -> (TempDir, Database) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::new(db_path.to_str().unwrap(), 2).expect("Failed to create database");
        (dir, db)
    }

    #[test]
    fn test_create_and_get() {
        let (_dir, db) = test_db();

        let created = db.create_document("Example", "hello").expect("Failed to create");
        let fetched = db
            .get_document(created.id)
            .expect("Failed to get")
            .expect("Document should exist");

        assert_eq!(fetched.display_label(), "Example");
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_ids_are_unique() {
        let (_dir, db) = test_db();

        let a = db.create_document("Same", "a").unwrap();
        let b = db.create_document("Same", "b").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_get_missing_returns_none() {
        let (_dir, db) = test_db();
        assert!(db.get_document(999).unwrap().is_none());
    }

    #[test]
    fn test_update_changes_render_not_id() {
        let (_dir, db) = test_db();

        let doc = db.create_document("Doc", "*before*").unwrap();
        let before = doc.render();

        let updated = db
            .update_document(doc.id, "Doc v2", "**after**")
            .unwrap()
            .expect("Document should exist");
        assert_eq!(updated.id, doc.id);

        let fetched = db.get_document(doc.id).unwrap().unwrap();
        assert_eq!(fetched.title, "Doc v2");
        assert_ne!(fetched.render(), before);
        assert!(fetched.render().contains("<strong>after</strong>"));
    }

    #[test]
    fn test_update_missing_returns_none() {
        let (_dir, db) = test_db();
        assert!(db.update_document(42, "t", "b").unwrap().is_none());
        assert_eq!(db.count_documents().unwrap(), 0);
    }

    #[test]
    fn test_list_returns_all() {
        let (_dir, db) = test_db();

        for i in 0..3 {
            db.create_document(&format!("Doc {}", i), "body").unwrap();
        }

        let docs = db.list_documents().unwrap();
        assert_eq!(docs.len(), 3);
        let mut titles: Vec<_> = docs.iter().map(|d| d.title.as_str()).collect();
        titles.sort();
        assert_eq!(titles, ["Doc 0", "Doc 1", "Doc 2"]);
        assert_eq!(db.count_documents().unwrap(), 3);
    }

    #[test]
    fn test_search_by_title() {
        let (_dir, db) = test_db();

        db.create_document("Rust Notes", "body").unwrap();
        db.create_document("Python notes", "body").unwrap();
        db.create_document("Groceries", "rust remover").unwrap();

        let hits = db.search_documents(&["title"], "notes").unwrap();
        assert_eq!(hits.len(), 2);

        let hits = db.search_documents(&["title"], "RUST notes").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Rust Notes");

        let all = db.search_documents(&["title"], "   ").unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_search_treats_wildcards_literally() {
        let (_dir, db) = test_db();

        db.create_document("100% done", "body").unwrap();
        db.create_document("1000 done", "body").unwrap();

        let hits = db.search_documents(&["title"], "0%").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "100% done");
    }

    #[test]
    fn test_search_rejects_unknown_field() {
        let (_dir, db) = test_db();

        let err = db.search_documents(&["title; DROP TABLE documents"], "x").unwrap_err();
        assert!(matches!(err, StoreError::UnknownField(_)));
    }
}
