use std::fmt;

use campusboard_core::AppResult;
use campusboard_models::{ApprovalStatus, Teacher, UserId};

/// A decision on a pending teacher application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalAction<'a> {
    Approve,
    Reject { reason: Option<&'a str> },
}

impl ApprovalAction<'_> {
    /// Status the teacher moves to when the remote call succeeds.
    pub fn target_status(&self) -> ApprovalStatus {
        match self {
            Self::Approve => ApprovalStatus::Approved,
            Self::Reject { .. } => ApprovalStatus::Rejected,
        }
    }
}

impl fmt::Display for ApprovalAction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approve => f.write_str("approve"),
            Self::Reject { .. } => f.write_str("reject"),
        }
    }
}

/// Result of a decision together with the pending-list refresh that followed it.
///
/// `refreshed` is the only source for whether the decision took effect. When
/// it is an error, the outcome is unknown regardless of `outcome`.
#[derive(Debug)]
pub struct DecisionReport {
    pub outcome: AppResult<()>,
    pub refreshed: AppResult<Vec<Teacher>>,
}

impl DecisionReport {
    /// Whether `id` is in the refreshed list, or `None` if the refresh failed.
    pub fn still_pending(&self, id: &UserId) -> Option<bool> {
        self.refreshed
            .as_ref()
            .ok()
            .map(|pending| pending.iter().any(|t| t.id() == id))
    }
}
