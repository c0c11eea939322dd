pub mod app_config;
pub mod history;
pub mod kv;
pub mod redis_repo;

pub use history::{build_history, KvSearchHistory, SEARCH_HISTORY_KEY};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use redis_repo::RedisStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
    #[error("History store misconfigured: {0}")]
    Misconfigured(String),
}
