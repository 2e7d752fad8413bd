//! Preference store configuration.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Which backend holds console preferences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    File,
    Redis,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "redis" => Ok(Self::Redis),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown store backend: {other}")),
        }
    }
}

/// Store configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `CAMPUSBOARD_STORE`: `file`, `redis` or `memory` (default: `file`)
/// - `CAMPUSBOARD_STORE_PATH`: JSON file used by the file backend (default: `storage/preferences.json`)
/// - `REDIS_URL`: Redis connection URL (default: `redis://127.0.0.1:6379`)
#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub file_path: PathBuf,
    pub redis_url: String,
}

impl StoreConfig {
    pub const DEFAULT_FILE_PATH: &'static str = "storage/preferences.json";
    pub const DEFAULT_REDIS_URL: &'static str = "redis://127.0.0.1:6379";

    /// Load configuration from environment variables.
    ///
    /// An unrecognized `CAMPUSBOARD_STORE` value falls back to the file backend.
    pub fn from_env() -> Self {
        let backend = match env::var("CAMPUSBOARD_STORE") {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to file preference store");
                StoreBackend::File
            }),
            Err(_) => StoreBackend::File,
        };

        Self {
            backend,
            file_path: env::var("CAMPUSBOARD_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(Self::DEFAULT_FILE_PATH)),
            redis_url: env::var("REDIS_URL").unwrap_or_else(|_| Self::DEFAULT_REDIS_URL.into()),
        }
    }

    pub fn memory() -> Self {
        Self {
            backend: StoreBackend::Memory,
            ..Self::default()
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::File,
            file_path: PathBuf::from(Self::DEFAULT_FILE_PATH),
            redis_url: Self::DEFAULT_REDIS_URL.into(),
        }
    }
}
