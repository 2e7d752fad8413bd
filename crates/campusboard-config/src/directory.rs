use std::env;
use std::time::Duration;

use crate::env_secs;

/// Connection settings for the remote user directory.
///
/// # Environment Variables
///
/// - `CAMPUSBOARD_API_URL`: base URL of the directory API (default: `http://localhost:3000/api`)
/// - `CAMPUSBOARD_API_TOKEN`: bearer token sent with every request (optional)
/// - `CAMPUSBOARD_REQUEST_TIMEOUT_SECS`: per-request HTTP timeout (default: `30`)
#[derive(Clone)]
pub struct DirectoryConfig {
    pub base_url: String,
    pub api_token: Option<String>,
    pub request_timeout: Duration,
}

impl DirectoryConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:3000/api";
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

    pub fn from_env() -> Self {
        let base_url = env::var("CAMPUSBOARD_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());

        let api_token = env::var("CAMPUSBOARD_API_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        let request_timeout = Duration::from_secs(
            env_secs("CAMPUSBOARD_REQUEST_TIMEOUT_SECS")
                .unwrap_or(Self::DEFAULT_REQUEST_TIMEOUT_SECS),
        );

        Self {
            base_url,
            api_token,
            request_timeout,
        }
    }

    /// Builds a config pointing at `base_url` with default timeout and no token.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            api_token: None,
            request_timeout: Duration::from_secs(Self::DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

// Keeps the token out of logs.
impl std::fmt::Debug for DirectoryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "***"))
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
