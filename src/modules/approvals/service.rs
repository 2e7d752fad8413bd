use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use anyhow::anyhow;
use campusboard_config::WorkflowConfig;
use campusboard_core::{AppError, AppResult};
use campusboard_models::{Teacher, UserId};
use tracing::{debug, error, info, instrument};

use super::model::{ApprovalAction, DecisionReport};
use super::processing::ProcessingSet;
use crate::modules::directory::UserDirectoryService;

#[derive(Debug, Default)]
struct PendingSnapshot {
    teachers: Vec<Teacher>,
    /// Ticket of the fetch that produced `teachers`.
    applied_ticket: u64,
}

/// Teacher approval operations against a user directory.
///
/// Holds the pending-teacher snapshot and the set of ids with a call in
/// flight. Nothing here stops a second approve/reject on an id that is
/// already processing; callers check [`ApprovalWorkflow::is_processing`]
/// first.
#[derive(Debug)]
pub struct ApprovalWorkflow<D> {
    directory: D,
    config: WorkflowConfig,
    pending: Mutex<PendingSnapshot>,
    fetch_seq: AtomicU64,
    processing: ProcessingSet,
}

impl<D: UserDirectoryService> ApprovalWorkflow<D> {
    pub fn new(directory: D) -> Self {
        Self::with_config(directory, WorkflowConfig::default())
    }

    pub fn with_config(directory: D, config: WorkflowConfig) -> Self {
        Self {
            directory,
            config,
            pending: Mutex::new(PendingSnapshot::default()),
            fetch_seq: AtomicU64::new(0),
            processing: ProcessingSet::new(),
        }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    fn snapshot(&self) -> MutexGuard<'_, PendingSnapshot> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetches pending teachers and replaces the local snapshot.
    ///
    /// When fetches overlap, a response that arrives after a newer one has
    /// been applied is dropped and the newer snapshot is returned instead.
    #[instrument(skip(self))]
    pub async fn fetch_pending(&self) -> AppResult<Vec<Teacher>> {
        let ticket = self.fetch_seq.fetch_add(1, Ordering::Relaxed) + 1;
        let teachers = self.directory.fetch_pending_teachers().await?;

        let mut snapshot = self.snapshot();
        if ticket < snapshot.applied_ticket {
            debug!(
                ticket,
                applied = snapshot.applied_ticket,
                "Discarding stale pending-teacher response"
            );
            return Ok(snapshot.teachers.clone());
        }

        snapshot.applied_ticket = ticket;
        snapshot.teachers = teachers.clone();
        debug!(ticket, count = teachers.len(), "Pending teachers updated");
        Ok(teachers)
    }

    #[instrument(skip(self), fields(teacher_id = %id))]
    pub async fn approve(&self, id: &UserId) -> AppResult<()> {
        self.decide(id, ApprovalAction::Approve).await.outcome
    }

    /// Rejects `id`, forwarding `reason` to the directory.
    #[instrument(skip(self, reason), fields(teacher_id = %id))]
    pub async fn reject(&self, id: &UserId, reason: Option<&str>) -> AppResult<()> {
        self.decide(id, ApprovalAction::Reject { reason }).await.outcome
    }

    /// Sends `action` for `id`, then refreshes the pending list.
    ///
    /// The refresh runs whether or not the action succeeded. Its result is
    /// reported separately and never changes `outcome`.
    pub async fn decide(&self, id: &UserId, action: ApprovalAction<'_>) -> DecisionReport {
        let outcome = {
            let _processing = self.processing.begin(id);
            let call = async {
                match action {
                    ApprovalAction::Approve => self.directory.approve_teacher(id).await,
                    ApprovalAction::Reject { reason } => {
                        self.directory.reject_teacher(id, reason).await
                    }
                }
            };

            match self.config.action_timeout {
                Some(limit) => tokio::time::timeout(limit, call).await.unwrap_or_else(|_| {
                    Err(AppError::timeout(anyhow!(
                        "{action} of teacher {id} did not settle within {limit:?}"
                    )))
                }),
                None => call.await,
            }
        };

        if outcome.is_ok() {
            info!(teacher_id = %id, status = %action.target_status(), "Teacher application decided");
        }

        let refreshed = self.fetch_pending().await;
        if let Err(e) = &refreshed {
            error!(error = %e, %action, "Failed to refresh pending teachers");
        }

        DecisionReport { outcome, refreshed }
    }

    pub fn is_processing(&self, id: &UserId) -> bool {
        self.processing.contains(id)
    }

    pub fn processing_ids(&self) -> Vec<UserId> {
        self.processing.snapshot()
    }

    /// The last applied pending-teacher snapshot.
    pub fn pending(&self) -> Vec<Teacher> {
        self.snapshot().teachers.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::directory::InMemoryDirectory;
    use campusboard_models::{ApprovalStatus, Email, Role, User};
    use chrono::Utc;
    use std::time::Duration;

    fn pending_teacher(id: &str) -> Teacher {
        Teacher {
            user: User {
                id: UserId::from(id),
                display_name: format!("Teacher {id}"),
                email: Email::new_unchecked(format!("{id}@school.test")),
                role: Role::Teacher,
            },
            qualification: Some("B.Ed".to_string()),
            approval_status: ApprovalStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Accepts every call and never answers approve/reject.
    struct SilentDirectory;

    impl UserDirectoryService for SilentDirectory {
        async fn fetch_all_users(&self) -> AppResult<Vec<User>> {
            Ok(Vec::new())
        }

        async fn fetch_pending_teachers(&self) -> AppResult<Vec<Teacher>> {
            Ok(vec![pending_teacher("t1")])
        }

        async fn approve_teacher(&self, _id: &UserId) -> AppResult<()> {
            std::future::pending().await
        }

        async fn reject_teacher(&self, _id: &UserId, _reason: Option<&str>) -> AppResult<()> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_fetch_pending_replaces_snapshot() {
        let directory = InMemoryDirectory::with_teachers(vec![pending_teacher("t1")]);
        let workflow = ApprovalWorkflow::new(directory);
        assert!(workflow.pending().is_empty());

        let fetched = workflow.fetch_pending().await.unwrap();

        assert_eq!(fetched.len(), 1);
        assert_eq!(workflow.pending(), fetched);
    }

    #[tokio::test]
    async fn test_approve_refreshes_and_releases() {
        let directory = InMemoryDirectory::with_teachers(vec![pending_teacher("t1")]);
        let workflow = ApprovalWorkflow::new(directory);
        let id = UserId::from("t1");
        workflow.fetch_pending().await.unwrap();

        workflow.approve(&id).await.unwrap();

        assert!(workflow.pending().is_empty());
        assert!(!workflow.is_processing(&id));
    }

    #[tokio::test]
    async fn test_failed_action_still_releases_and_refreshes() {
        let directory = InMemoryDirectory::with_teachers(vec![pending_teacher("t1")]);
        let workflow = ApprovalWorkflow::new(directory);
        let missing = UserId::from("ghost");

        let err = workflow.approve(&missing).await.unwrap_err();

        assert!(err.is_remote_operation());
        assert!(!workflow.is_processing(&missing));
        assert_eq!(workflow.pending().len(), 1);
    }

    #[tokio::test]
    async fn test_id_is_processing_while_call_is_in_flight() {
        let workflow = ApprovalWorkflow::new(SilentDirectory);
        let id = UserId::from("t1");

        let call = workflow.approve(&id);
        tokio::pin!(call);
        tokio::select! {
            biased;
            _ = &mut call => panic!("approve settled without an answer"),
            _ = tokio::task::yield_now() => {}
        }

        assert!(workflow.is_processing(&id));
        assert_eq!(workflow.processing_ids(), vec![id.clone()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_releases_id() {
        let config = WorkflowConfig::default().with_action_timeout(Duration::from_secs(5));
        let workflow = ApprovalWorkflow::with_config(SilentDirectory, config);
        let id = UserId::from("t1");

        let err = workflow.reject(&id, Some("late")).await.unwrap_err();

        assert!(err.is_timeout());
        assert!(!workflow.is_processing(&id));
        assert_eq!(workflow.pending().len(), 1);
    }
}
