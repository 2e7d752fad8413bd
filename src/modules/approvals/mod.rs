//! Teacher approval workflow.
//!
//! A teacher application moves `Pending -> Approved | Rejected` once, through
//! the user directory. After every decision the pending list is re-fetched;
//! the directory's answer is authoritative and nothing is merged locally.

pub mod model;
pub mod processing;
pub mod service;

pub use model::{ApprovalAction, DecisionReport};
pub use processing::{ProcessingGuard, ProcessingSet};
pub use service::ApprovalWorkflow;
