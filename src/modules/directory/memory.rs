use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::anyhow;
use campusboard_core::{AppError, AppResult};
use campusboard_models::{ApprovalStatus, Teacher, User, UserId};
use tracing::{debug, instrument};

use super::UserDirectoryService;

#[derive(Debug, Default)]
struct DirectoryData {
    users: Vec<User>,
    teachers: Vec<Teacher>,
    rejection_reasons: HashMap<UserId, Option<String>>,
}

/// Process-local user directory.
///
/// Approve and reject only move teachers out of `Pending`, mirroring the
/// server-side state machine. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    inner: Arc<Mutex<DirectoryData>>,
}

impl InMemoryDirectory {
    pub fn new(users: Vec<User>, teachers: Vec<Teacher>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(DirectoryData {
                users,
                teachers,
                rejection_reasons: HashMap::new(),
            })),
        }
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self::new(users, Vec::new())
    }

    pub fn with_teachers(teachers: Vec<Teacher>) -> Self {
        Self::new(Vec::new(), teachers)
    }

    fn lock(&self) -> MutexGuard<'_, DirectoryData> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current state of a teacher application, whatever its status.
    pub fn teacher(&self, id: &UserId) -> Option<Teacher> {
        self.lock().teachers.iter().find(|t| t.id() == id).cloned()
    }

    /// The reason recorded by the last rejection of `id`.
    ///
    /// `None` if the teacher was never rejected; `Some(None)` if it was
    /// rejected without a reason.
    pub fn rejection_reason(&self, id: &UserId) -> Option<Option<String>> {
        self.lock().rejection_reasons.get(id).cloned()
    }

    fn transition(&self, id: &UserId, next: ApprovalStatus) -> AppResult<()> {
        let mut data = self.lock();
        let teacher = data
            .teachers
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or_else(|| AppError::remote_operation(anyhow!("Teacher {id} not found")))?;

        if !teacher.approval_status.can_transition_to(next) {
            return Err(AppError::remote_operation(anyhow!(
                "Teacher {id} is already {}",
                teacher.approval_status
            )));
        }

        teacher.approval_status = next;
        debug!(teacher_id = %id, status = %next, "Teacher status changed");
        Ok(())
    }
}

impl UserDirectoryService for InMemoryDirectory {
    async fn fetch_all_users(&self) -> AppResult<Vec<User>> {
        Ok(self.lock().users.clone())
    }

    async fn fetch_pending_teachers(&self) -> AppResult<Vec<Teacher>> {
        Ok(self
            .lock()
            .teachers
            .iter()
            .filter(|t| t.is_pending())
            .cloned()
            .collect())
    }

    #[instrument(skip(self), fields(teacher_id = %id))]
    async fn approve_teacher(&self, id: &UserId) -> AppResult<()> {
        self.transition(id, ApprovalStatus::Approved)
    }

    #[instrument(skip(self, reason), fields(teacher_id = %id))]
    async fn reject_teacher(&self, id: &UserId, reason: Option<&str>) -> AppResult<()> {
        self.transition(id, ApprovalStatus::Rejected)?;
        self.lock()
            .rejection_reasons
            .insert(id.clone(), reason.map(str::to_owned));
        Ok(())
    }
}
