//! SQLite connection pool and schema setup.

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use std::time::Duration;

use crate::error::StoreResult;

pub type DbConn = PooledConnection<SqliteConnectionManager>;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS documents (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        markdown_description TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_documents_title ON documents(title);
";

/// Pooled SQLite database holding the documents table
pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Open (or create) the database file and make sure the schema exists
    pub fn new(database_url: &str, pool_size: u32) -> StoreResult<Self> {
        if let Some(parent) = Path::new(database_url).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let manager = SqliteConnectionManager::file(database_url).with_init(|conn| {
            conn.busy_timeout(Duration::from_secs(5))?;
            conn.execute_batch("PRAGMA foreign_keys = ON;")
        });
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        let db = Self { pool };
        db.init_schema()?;
        log::debug!("[DB] Opened {} (pool size {})", database_url, pool_size);
        Ok(db)
    }

    /// Check out a pooled connection
    pub fn conn(&self) -> StoreResult<DbConn> {
        Ok(self.pool.get()?)
    }

    fn init_schema(&self) -> StoreResult<()> {
        let conn = self.conn()?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
    }
}
