use std::env;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const BIND_ADDRESS: &str = "BIND_ADDRESS";
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Maximum number of pooled SQLite connections.
    pub const DB_POOL_SIZE: &str = "DB_POOL_SIZE";
    /// Directory served under /static (stylesheet and editor preview script).
    pub const STATIC_DIR: &str = "STATIC_DIR";
    /// Upper bound for form and JSON request bodies, in bytes.
    pub const MAX_BODY_BYTES: &str = "MAX_BODY_BYTES";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 8000;
    pub const BIND_ADDRESS: &str = "127.0.0.1";
    pub const DATABASE_URL: &str = "./.db/documents.db";
    pub const DB_POOL_SIZE: u32 = 8;
    pub const STATIC_DIR: &str = "static";
    pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;
}

/// Returns the absolute path to the markdown-backend directory.
/// Uses CARGO_MANIFEST_DIR at compile time, so it always resolves
/// to markdown-backend/ regardless of the working directory at runtime.
pub fn backend_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Get the static files directory
pub fn static_dir() -> String {
    env::var(env_vars::STATIC_DIR).unwrap_or_else(|_| {
        backend_dir()
            .join(defaults::STATIC_DIR)
            .to_string_lossy()
            .to_string()
    })
}

fn parse_or_default<T: std::str::FromStr + ToString>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!(
                "Invalid value {:?} for {}, using default {}",
                raw,
                name,
                default.to_string()
            );
            default
        }),
        Err(_) => default,
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: String,
    pub port: u16,
    pub database_url: String,
    pub db_pool_size: u32,
    pub static_dir: String,
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_address: env::var(env_vars::BIND_ADDRESS)
                .unwrap_or_else(|_| defaults::BIND_ADDRESS.to_string()),
            port: parse_or_default(env_vars::PORT, defaults::PORT),
            database_url: env::var(env_vars::DATABASE_URL)
                .unwrap_or_else(|_| defaults::DATABASE_URL.to_string()),
            db_pool_size: parse_or_default(env_vars::DB_POOL_SIZE, defaults::DB_POOL_SIZE).max(1),
            static_dir: static_dir(),
            max_body_bytes: parse_or_default(env_vars::MAX_BODY_BYTES, defaults::MAX_BODY_BYTES),
        }
    }

    /// Base URL the server answers on, for startup logging.
    pub fn self_url(&self) -> String {
        format!("http://{}:{}", self.bind_address, self.port)
    }
}
