//! # Campusboard Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`directory`]: user directory endpoint, credentials and request timeout
//! - [`workflow`]: approval workflow behaviour (action timeout)
//!
//! # Example
//!
//! ```ignore
//! use campusboard_config::{DirectoryConfig, WorkflowConfig};
//!
//! let directory_config = DirectoryConfig::from_env();
//! let workflow_config = WorkflowConfig::from_env();
//! ```

pub mod directory;
pub mod workflow;

// Re-export commonly used types at crate root
pub use directory::DirectoryConfig;
pub use workflow::WorkflowConfig;

/// Reads an environment variable as a number of seconds.
///
/// Returns `None` when the variable is unset, unparsable, or zero.
pub(crate) fn env_secs(name: &str) -> Option<u64> {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
}
