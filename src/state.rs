use std::sync::Mutex;

use anyhow::Context;
use campusboard_config::{DirectoryConfig, WorkflowConfig};
use campusboard_store::{KeyValueStore, PreferenceStore, StoreConfig};

use crate::modules::approvals::ApprovalWorkflow;
use crate::modules::console::ConsoleState;
use crate::modules::directory::{HttpDirectory, UserDirectoryService};
use crate::modules::menu::RoleMenuResolver;

/// Everything a presentation layer needs, passed around by reference.
#[derive(Debug)]
pub struct AppState<D, S> {
    pub workflow: ApprovalWorkflow<D>,
    pub menus: RoleMenuResolver<S>,
    pub console: Mutex<ConsoleState>,
}

impl<D, S> AppState<D, S>
where
    D: UserDirectoryService,
    S: KeyValueStore,
{
    pub fn new(directory: D, store: S, workflow_config: WorkflowConfig) -> Self {
        Self {
            workflow: ApprovalWorkflow::with_config(directory, workflow_config),
            menus: RoleMenuResolver::new(store),
            console: Mutex::new(ConsoleState::default()),
        }
    }
}

/// Builds the production state (HTTP directory, configured store) from the
/// environment.
pub async fn init_app_state() -> anyhow::Result<AppState<HttpDirectory, PreferenceStore>> {
    let directory = HttpDirectory::new(DirectoryConfig::from_env())
        .context("Failed to build user directory client")?;
    let store = PreferenceStore::connect(&StoreConfig::from_env())
        .await
        .context("Failed to open preference store")?;

    Ok(AppState::new(directory, store, WorkflowConfig::from_env()))
}
