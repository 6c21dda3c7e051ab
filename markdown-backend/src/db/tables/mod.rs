//! Table-specific `impl Database` blocks.

mod documents;
