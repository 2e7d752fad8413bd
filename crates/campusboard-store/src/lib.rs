//! # Campusboard Store
//!
//! Durable key-value storage for console preferences (last resolved role,
//! compact menu flag).
//!
//! This crate provides:
//! - The [`KeyValueStore`] trait consumed by the menu resolver
//! - A JSON file backend ([`FileStore`]), the default
//! - A Redis backend ([`RedisStore`])
//! - An in-memory backend ([`MemoryStore`]) for tests and demo runs
//! - [`PreferenceStore`], selecting one of the above from [`StoreConfig`]
//! - Fixed key names ([`keys`])
//!
//! # Example
//!
//! ```ignore
//! use campusboard_store::{KeyValueStore, PreferenceStore, StoreConfig, keys};
//!
//! let store = PreferenceStore::connect(&StoreConfig::from_env()).await?;
//! store.set(&keys::menu::role(), "Teacher").await?;
//! ```

pub mod config;
pub mod file;
pub mod keys;
pub mod memory;
pub mod redis;

use std::future::Future;

pub use config::{StoreBackend, StoreConfig};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use self::redis::RedisStore;

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Redis connection error: {0}")]
    Connection(#[from] ::redis::RedisError),
}

/// String-valued key-value storage that outlives the process.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;

    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn remove(&self, key: &str) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// A store backend chosen at runtime.
#[derive(Debug, Clone)]
pub enum PreferenceStore {
    File(FileStore),
    Redis(RedisStore),
    Memory(MemoryStore),
}

impl PreferenceStore {
    /// Opens the backend named by `config`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connection` if the Redis backend is selected and
    /// the connection cannot be established.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let store = match config.backend {
            StoreBackend::File => Self::File(FileStore::new(&config.file_path)),
            StoreBackend::Redis => Self::Redis(RedisStore::new(&config.redis_url).await?),
            StoreBackend::Memory => Self::Memory(MemoryStore::new()),
        };
        tracing::debug!(backend = ?config.backend, "Preference store ready");
        Ok(store)
    }
}

impl KeyValueStore for PreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            Self::File(store) => store.get(key).await,
            Self::Redis(store) => store.get(key).await,
            Self::Memory(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            Self::File(store) => store.set(key, value).await,
            Self::Redis(store) => store.set(key, value).await,
            Self::Memory(store) => store.set(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        match self {
            Self::File(store) => store.remove(key).await,
            Self::Redis(store) => store.remove(key).await,
            Self::Memory(store) => store.remove(key).await,
        }
    }
}
