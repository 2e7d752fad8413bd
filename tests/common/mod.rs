use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::anyhow;
use campusboard::modules::directory::UserDirectoryService;
use campusboard_core::{AppError, AppResult};
use campusboard_models::{ApprovalStatus, Email, Role, Teacher, User, UserId};
use chrono::Utc;
use tokio::sync::{Semaphore, oneshot};

#[allow(dead_code)]
pub fn user(id: &str, role: Role) -> User {
    User {
        id: UserId::from(id),
        display_name: format!("User {}", id.to_uppercase()),
        email: Email::new_unchecked(format!("{id}@school.test")),
        role,
    }
}

#[allow(dead_code)]
pub fn teacher(id: &str, status: ApprovalStatus) -> Teacher {
    Teacher {
        user: user(id, Role::Teacher),
        qualification: Some("B.Ed".to_string()),
        approval_status: status,
        created_at: Utc::now(),
    }
}

#[allow(dead_code)]
pub fn ids(teachers: &[Teacher]) -> Vec<&str> {
    teachers.iter().map(|t| t.id().as_str()).collect()
}

/// A fresh preference file path under the system temp dir.
#[allow(dead_code)]
pub fn temp_preferences_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("campusboard-test-{}", uuid::Uuid::new_v4()))
        .join("preferences.json")
}

#[derive(Default)]
struct FakeState {
    users: Vec<User>,
    teachers: Vec<Teacher>,
    approve_calls: Vec<UserId>,
    reject_calls: Vec<(UserId, Option<String>)>,
    fail_actions: bool,
    fail_fetches: bool,
    scripted_fetches: VecDeque<(oneshot::Receiver<()>, Vec<Teacher>)>,
}

/// User directory fake that records every call it receives.
///
/// - Approve/reject flip the stored status (no transition checks) unless
///   failures are switched on.
/// - With [`FakeDirectory::gated`], approve/reject wait for
///   [`FakeDirectory::release`] after being recorded.
/// - [`FakeDirectory::script_fetch`] queues pending-teacher responses that
///   are returned only when their sender fires.
#[derive(Clone, Default)]
pub struct FakeDirectory {
    state: Arc<Mutex<FakeState>>,
    gate: Option<Arc<Semaphore>>,
}

#[allow(dead_code)]
impl FakeDirectory {
    pub fn new(users: Vec<User>, teachers: Vec<Teacher>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeState {
                users,
                teachers,
                ..FakeState::default()
            })),
            gate: None,
        }
    }

    pub fn with_teachers(teachers: Vec<Teacher>) -> Self {
        Self::new(Vec::new(), teachers)
    }

    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Semaphore::new(0)));
        self
    }

    /// Lets `calls` gated approve/reject calls proceed.
    pub fn release(&self, calls: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(calls);
        }
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn fail_actions(&self, fail: bool) {
        self.lock().fail_actions = fail;
    }

    pub fn fail_fetches(&self, fail: bool) {
        self.lock().fail_fetches = fail;
    }

    pub fn script_fetch(&self, response: Vec<Teacher>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.lock().scripted_fetches.push_back((rx, response));
        tx
    }

    pub fn approve_calls(&self) -> Vec<UserId> {
        self.lock().approve_calls.clone()
    }

    pub fn reject_calls(&self) -> Vec<(UserId, Option<String>)> {
        self.lock().reject_calls.clone()
    }

    pub fn status_of(&self, id: &str) -> Option<ApprovalStatus> {
        self.lock()
            .teachers
            .iter()
            .find(|t| t.id() == id)
            .map(|t| t.approval_status)
    }

    async fn wait_for_gate(&self) {
        if let Some(gate) = &self.gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
    }

    fn settle(&self, id: &UserId, status: ApprovalStatus) -> AppResult<()> {
        let mut state = self.lock();
        if state.fail_actions {
            return Err(AppError::remote_operation(anyhow!("directory unavailable")));
        }
        if let Some(teacher) = state.teachers.iter_mut().find(|t| t.id() == id) {
            teacher.approval_status = status;
        }
        Ok(())
    }
}

impl UserDirectoryService for FakeDirectory {
    async fn fetch_all_users(&self) -> AppResult<Vec<User>> {
        let state = self.lock();
        if state.fail_fetches {
            return Err(AppError::fetch(anyhow!("directory unavailable")));
        }
        Ok(state.users.clone())
    }

    async fn fetch_pending_teachers(&self) -> AppResult<Vec<Teacher>> {
        let scripted = self.lock().scripted_fetches.pop_front();
        if let Some((ready, response)) = scripted {
            let _ = ready.await;
            return Ok(response);
        }

        let state = self.lock();
        if state.fail_fetches {
            return Err(AppError::fetch(anyhow!("directory unavailable")));
        }
        Ok(state
            .teachers
            .iter()
            .filter(|t| t.is_pending())
            .cloned()
            .collect())
    }

    async fn approve_teacher(&self, id: &UserId) -> AppResult<()> {
        self.lock().approve_calls.push(id.clone());
        self.wait_for_gate().await;
        self.settle(id, ApprovalStatus::Approved)
    }

    async fn reject_teacher(&self, id: &UserId, reason: Option<&str>) -> AppResult<()> {
        self.lock()
            .reject_calls
            .push((id.clone(), reason.map(str::to_owned)));
        self.wait_for_gate().await;
        self.settle(id, ApprovalStatus::Rejected)
    }
}
