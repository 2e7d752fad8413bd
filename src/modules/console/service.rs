use std::sync::{MutexGuard, PoisonError};

use campusboard_core::AppError;
use campusboard_models::{Teacher, User, UserId};
use campusboard_store::KeyValueStore;
use tracing::{error, warn};

use super::model::{ActionOutcome, ConsoleState};
use crate::modules::approvals::ApprovalAction;
use crate::modules::dashboard::DashboardView;
use crate::modules::directory::UserDirectoryService;
use crate::modules::menu::ResolvedMenu;
use crate::state::AppState;

/// User-facing operations.
///
/// Errors stop here: they are logged, remembered in
/// [`ConsoleState::last_error`] and never returned. Callers learn the outcome
/// from the refreshed data. Each public operation starts by clearing the
/// previous error.
pub struct ConsoleService;

impl ConsoleService {
    fn console<D, S>(app: &AppState<D, S>) -> MutexGuard<'_, ConsoleState> {
        app.console.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin<D, S>(app: &AppState<D, S>) {
        Self::console(app).last_error = None;
    }

    fn record_error<D, S>(app: &AppState<D, S>, context: &str, err: &AppError) {
        error!(error = %err, "{context}");
        Self::console(app).last_error = Some(format!("{context}: {err}"));
    }

    pub fn last_error<D, S>(app: &AppState<D, S>) -> Option<String> {
        Self::console(app).last_error.clone()
    }

    pub async fn load_users<D, S>(app: &AppState<D, S>) -> Vec<User>
    where
        D: UserDirectoryService,
        S: KeyValueStore,
    {
        Self::begin(app);
        Self::refresh_users(app).await
    }

    /// Refreshes the pending list; on failure the previous snapshot is kept.
    pub async fn load_pending<D, S>(app: &AppState<D, S>) -> Vec<Teacher>
    where
        D: UserDirectoryService,
        S: KeyValueStore,
    {
        Self::begin(app);
        Self::refresh_pending(app).await
    }

    async fn refresh_users<D, S>(app: &AppState<D, S>) -> Vec<User>
    where
        D: UserDirectoryService,
    {
        Self::console(app).users_loading = true;
        let result = app.workflow.directory().fetch_all_users().await;
        Self::console(app).users_loading = false;

        match result {
            Ok(users) => Self::console(app).users = users,
            Err(e) => Self::record_error(app, "Failed to load users", &e),
        }
        Self::console(app).users.clone()
    }

    async fn refresh_pending<D, S>(app: &AppState<D, S>) -> Vec<Teacher>
    where
        D: UserDirectoryService,
    {
        Self::console(app).pending_loading = true;
        let result = app.workflow.fetch_pending().await;
        Self::console(app).pending_loading = false;

        if let Err(e) = result {
            Self::record_error(app, "Failed to load pending teachers", &e);
        }
        app.workflow.pending()
    }

    /// The dashboard for the data currently held.
    pub fn dashboard<D, S>(app: &AppState<D, S>) -> DashboardView
    where
        D: UserDirectoryService,
        S: KeyValueStore,
    {
        let pending = app.workflow.pending();
        let console = Self::console(app);
        DashboardView::from_state(console.is_loading(), &console.users, &pending)
    }

    pub async fn load_dashboard<D, S>(app: &AppState<D, S>) -> DashboardView
    where
        D: UserDirectoryService,
        S: KeyValueStore,
    {
        Self::begin(app);
        Self::refresh_users(app).await;
        Self::refresh_pending(app).await;
        Self::dashboard(app)
    }

    pub async fn approve<D, S>(app: &AppState<D, S>, id: &UserId) -> ActionOutcome
    where
        D: UserDirectoryService,
        S: KeyValueStore,
    {
        Self::decide(app, id, ApprovalAction::Approve).await
    }

    pub async fn reject<D, S>(
        app: &AppState<D, S>,
        id: &UserId,
        reason: Option<&str>,
    ) -> ActionOutcome
    where
        D: UserDirectoryService,
        S: KeyValueStore,
    {
        Self::decide(app, id, ApprovalAction::Reject { reason }).await
    }

    async fn decide<D, S>(
        app: &AppState<D, S>,
        id: &UserId,
        action: ApprovalAction<'_>,
    ) -> ActionOutcome
    where
        D: UserDirectoryService,
        S: KeyValueStore,
    {
        Self::begin(app);
        if app.workflow.is_processing(id) {
            warn!(teacher_id = %id, %action, "Teacher is already being processed");
            return ActionOutcome::AlreadyProcessing;
        }

        let report = app.workflow.decide(id, action).await;
        let still_pending = report.still_pending(id);

        // The action error is recorded last so it is the one kept.
        if let Err(e) = &report.refreshed {
            Self::record_error(app, "Failed to refresh pending teachers", e);
        }
        if let Err(e) = &report.outcome {
            Self::record_error(app, &format!("Failed to {action} teacher {id}"), e);
        }

        match still_pending {
            Some(still_pending) => ActionOutcome::Settled { still_pending },
            None => ActionOutcome::Unconfirmed,
        }
    }

    /// Resolves the menu and refreshes the cached compact-menu preference.
    pub async fn menu<D, S>(app: &AppState<D, S>, requested: Option<&str>) -> ResolvedMenu
    where
        D: UserDirectoryService,
        S: KeyValueStore,
    {
        Self::begin(app);
        let menu = app.menus.resolve(requested).await;
        let compact = app.menus.compact_menu().await;
        Self::console(app).compact_menu = compact;
        menu
    }

    pub async fn set_compact_menu<D, S>(app: &AppState<D, S>, compact: bool)
    where
        D: UserDirectoryService,
        S: KeyValueStore,
    {
        Self::begin(app);
        match app.menus.set_compact_menu(compact).await {
            Ok(()) => Self::console(app).compact_menu = compact,
            Err(e) => Self::record_error(app, "Failed to save compact menu preference", &e),
        }
    }

    pub async fn forget_role<D, S>(app: &AppState<D, S>)
    where
        D: UserDirectoryService,
        S: KeyValueStore,
    {
        Self::begin(app);
        if let Err(e) = app.menus.forget_role().await {
            Self::record_error(app, "Failed to clear remembered role", &e);
        }
    }
}
