//! Error types for the document store.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("failed to prepare database directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown document field: {0}")]
    UnknownField(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
