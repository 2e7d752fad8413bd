use campusboard_models::{DashboardSummary, Role, Teacher, User};
use serde::Serialize;

pub struct DashboardAggregator;

impl DashboardAggregator {
    /// Counts users per role and the teachers in `pending` that are still
    /// `Pending`.
    ///
    /// `pending` is re-filtered even though the directory should only return
    /// pending teachers, so a stale or mixed list can never inflate the count.
    pub fn summarize(users: &[User], pending: &[Teacher]) -> DashboardSummary {
        let count_role = |role: Role| users.iter().filter(|u| u.has_role(role)).count();

        DashboardSummary {
            total_users: users.len(),
            admin_count: count_role(Role::Admin),
            teacher_count: count_role(Role::Teacher),
            student_count: count_role(Role::Student),
            pending_teacher_count: pending.iter().filter(|t| t.is_pending()).count(),
        }
    }
}

/// What a dashboard should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "summary", rename_all = "snake_case")]
pub enum DashboardView {
    /// A fetch is in flight; counts are unknown, not zero.
    Loading,
    Ready(DashboardSummary),
}

impl DashboardView {
    pub fn from_state(loading: bool, users: &[User], pending: &[Teacher]) -> Self {
        if loading {
            Self::Loading
        } else {
            Self::Ready(DashboardAggregator::summarize(users, pending))
        }
    }

    pub fn summary(&self) -> Option<&DashboardSummary> {
        match self {
            Self::Loading => None,
            Self::Ready(summary) => Some(summary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusboard_models::{ApprovalStatus, Email, UserId};
    use chrono::Utc;

    fn user(id: &str, role: Role) -> User {
        User {
            id: UserId::from(id),
            display_name: id.to_uppercase(),
            email: Email::new_unchecked(format!("{id}@school.test")),
            role,
        }
    }

    fn teacher(id: &str, status: ApprovalStatus) -> Teacher {
        Teacher {
            user: user(id, Role::Teacher),
            qualification: None,
            approval_status: status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(
            DashboardAggregator::summarize(&[], &[]),
            DashboardSummary::default()
        );
    }

    #[test]
    fn test_pending_count_ignores_decided_teachers() {
        let pending = [
            teacher("t1", ApprovalStatus::Pending),
            teacher("t2", ApprovalStatus::Approved),
            teacher("t3", ApprovalStatus::Rejected),
        ];

        let summary = DashboardAggregator::summarize(&[], &pending);

        assert_eq!(summary.pending_teacher_count, 1);
    }

    #[test]
    fn test_loading_hides_counts() {
        let users = [user("a", Role::Admin)];

        let view = DashboardView::from_state(true, &users, &[]);
        assert_eq!(view, DashboardView::Loading);
        assert!(view.summary().is_none());

        let view = DashboardView::from_state(false, &users, &[]);
        assert_eq!(view.summary().map(|s| s.admin_count), Some(1));
    }

    #[test]
    fn test_view_serialization() {
        let json = serde_json::to_value(DashboardView::Loading).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "loading" }));
    }
}
