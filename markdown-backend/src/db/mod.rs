pub mod sqlite;
pub mod store;
pub mod tables;

pub use sqlite::Database;
pub use store::DocumentStore;
