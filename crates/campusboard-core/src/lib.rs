//! # Campusboard Core
//!
//! Core types and utilities shared by the Campusboard crates.
//!
//! - [`errors`]: Application error type and its taxonomy
//! - [`serde`]: Custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use campusboard_core::errors::{AppError, ErrorKind};
//!
//! let error = AppError::fetch(anyhow::anyhow!("directory unreachable"));
//! assert_eq!(error.kind, ErrorKind::Fetch);
//! ```

pub mod errors;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{AppError, AppResult, ErrorKind};
