//! Teacher applications and their approval status.

use crate::ids::UserId;
use crate::users::User;
use campusboard_core::serde::deserialize_optional_string;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a teacher application.
///
/// `Pending` is the only state with outgoing transitions; `Approved` and
/// `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Approved) | (Self::Pending, Self::Rejected)
        )
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        };
        f.write_str(label)
    }
}

/// A user who applied to teach.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    #[serde(flatten)]
    pub user: User,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub qualification: Option<String>,
    pub approval_status: ApprovalStatus,
    pub created_at: DateTime<Utc>,
}

impl Teacher {
    #[inline]
    pub fn id(&self) -> &UserId {
        &self.user.id
    }

    pub fn is_pending(&self) -> bool {
        self.approval_status == ApprovalStatus::Pending
    }
}
