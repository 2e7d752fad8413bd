//! Campusboard Observability Module
//!
//! Sets up the global `tracing` subscriber for Campusboard binaries:
//! - Console logging with env-based filtering
//! - Daily-rolling plain (errors only) and JSON log files
//!
//! File logging is compiled in via the `observability` feature flag (on by
//! default). At runtime it can be switched off with
//! `OBSERVABILITY_ENABLED=false`, leaving console output only.
//!
//! # Examples
//!
//! ```no_run
//! use campusboard_observability::init_tracing;
//!
//! let _guards = init_tracing();
//! tracing::info!("console started");
//! ```

pub mod basic_logging;
#[cfg(feature = "observability")]
pub mod logging;

pub use basic_logging::init_basic_console_logging;

#[cfg(feature = "observability")]
pub use logging::{LogGuards, init_tracing, is_observability_enabled};

// Console-only fallbacks when the feature is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    /// Nothing to flush when file logging is compiled out.
    #[derive(Debug, Default)]
    pub struct LogGuards;

    pub fn is_observability_enabled() -> bool {
        false
    }

    pub fn init_tracing() -> LogGuards {
        crate::init_basic_console_logging();
        LogGuards
    }
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
