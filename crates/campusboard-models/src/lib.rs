//! # Campusboard Models
//!
//! Domain models shared across the Campusboard crates.
//!
//! # Modules
//!
//! - [`ids`]: Strongly-typed identifiers
//! - [`value_types`]: Validated primitives (email)
//! - [`users`]: Roles and directory users
//! - [`teachers`]: Teacher applications and their approval status
//! - [`menu`]: Navigation entries
//! - [`dashboard`]: Dashboard summary counts
//!
//! # Example
//!
//! ```ignore
//! use campusboard_models::{ApprovalStatus, Role};
//!
//! assert_eq!(Role::parse_or_default("teacher"), Role::Teacher);
//! assert!(ApprovalStatus::Pending.can_transition_to(ApprovalStatus::Approved));
//! ```

pub mod dashboard;
pub mod ids;
pub mod menu;
pub mod teachers;
pub mod users;
pub mod value_types;

// Re-export commonly used types at crate root for convenience
pub use dashboard::DashboardSummary;
pub use ids::UserId;
pub use menu::{MenuEntry, MenuItem};
pub use teachers::{ApprovalStatus, Teacher};
pub use users::{Role, User};
pub use value_types::{Email, ValueTypeError};
