use serde::Serialize;

/// Headline counts for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DashboardSummary {
    pub total_users: usize,
    pub admin_count: usize,
    pub teacher_count: usize,
    pub student_count: usize,
    pub pending_teacher_count: usize,
}
