use campusboard_core::{AppError, AppResult, serde::parse_bool_flag};
use campusboard_models::{MenuEntry, MenuItem, Role};
use campusboard_store::{KeyValueStore, keys};
use tracing::{debug, error, instrument, warn};

use super::data::{ADMIN_MENU, STUDENT_MENU, TEACHER_MENU};
use super::model::ResolvedMenu;

pub struct MenuService;

impl MenuService {
    /// The fixed navigation sequence for `role`.
    pub fn menu_for(role: Role) -> &'static [MenuEntry] {
        match role {
            Role::Admin => ADMIN_MENU,
            Role::Teacher => TEACHER_MENU,
            Role::Student => STUDENT_MENU,
        }
    }

    /// Path of the first navigable item in the role's menu.
    pub fn landing_path(role: Role) -> &'static str {
        Self::menu_for(role)
            .iter()
            .find_map(MenuEntry::as_item)
            .map(|item| item.path)
            .unwrap_or("/")
    }

    /// Deepest item whose path is `path` or a parent of it.
    ///
    /// Items flagged `ignore` never match. On equal path length the nested
    /// item wins over its parent.
    pub fn active_item(entries: &'static [MenuEntry], path: &str) -> Option<&'static MenuItem> {
        let path = normalize(path);
        let mut best = None;
        for item in entries.iter().filter_map(MenuEntry::as_item) {
            visit(item, path, &mut best);
        }
        best
    }
}

fn normalize(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

fn path_matches(item_path: &str, path: &str) -> bool {
    let item_path = normalize(item_path);
    if item_path == "/" {
        return path == "/";
    }
    match path.strip_prefix(item_path) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

fn visit(item: &'static MenuItem, path: &str, best: &mut Option<&'static MenuItem>) {
    if !item.ignore
        && path_matches(item.path, path)
        && (*best).is_none_or(|current| item.path.len() >= current.path.len())
    {
        *best = Some(item);
    }
    for child in item.children {
        visit(child, path, best);
    }
}

/// Resolves roles to menus and keeps the related preferences in a store.
///
/// Store failures never fail menu resolution: they are logged and the Admin
/// menu is used.
#[derive(Debug, Clone)]
pub struct RoleMenuResolver<S> {
    store: S,
}

impl<S: KeyValueStore> RoleMenuResolver<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolves `requested`, or the stored role when `None`.
    ///
    /// An explicit role (including an unrecognized one, stored as `Admin`)
    /// is remembered for later calls without a role.
    #[instrument(skip(self))]
    pub async fn resolve(&self, requested: Option<&str>) -> ResolvedMenu {
        let (role, fell_back) = match requested {
            Some(value) => {
                let (role, fell_back) = Role::parse_or_fallback(value);
                if fell_back {
                    warn!(requested = %value, "Unrecognized role, using Admin menu");
                }
                self.remember_role(role).await;
                (role, fell_back)
            }
            None => self.stored_role().await,
        };

        ResolvedMenu {
            role,
            entries: MenuService::menu_for(role),
            fell_back,
        }
    }

    /// The last remembered role; `Admin` when absent, invalid or unreadable.
    pub async fn current_role(&self) -> Role {
        self.stored_role().await.0
    }

    async fn stored_role(&self) -> (Role, bool) {
        match self.store.get(&keys::menu::role()).await {
            Ok(Some(value)) => {
                let (role, fell_back) = Role::parse_or_fallback(&value);
                if fell_back {
                    warn!(stored = %value, "Stored role is invalid, using Admin menu");
                }
                (role, fell_back)
            }
            Ok(None) => (Role::default(), false),
            Err(e) => {
                error!(error = %e, "Failed to read stored role");
                (Role::default(), true)
            }
        }
    }

    async fn remember_role(&self, role: Role) {
        let key = keys::menu::role();
        let stored = match self.store.get(&key).await {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Failed to read stored role before update");
                None
            }
        };

        if stored.as_deref() == Some(role.as_str()) {
            return;
        }

        match self.store.set(&key, role.as_str()).await {
            Ok(()) => debug!(role = %role, "Remembered role"),
            Err(e) => error!(error = %e, role = %role, "Failed to remember role"),
        }
    }

    /// Clears the remembered role so the next resolution uses the default.
    pub async fn forget_role(&self) -> AppResult<()> {
        self.store
            .remove(&keys::menu::role())
            .await
            .map_err(AppError::storage)
    }

    /// The compact-menu display preference. Unset, unparsable or unreadable
    /// values read as `false`.
    pub async fn compact_menu(&self) -> bool {
        match self.store.get(&keys::menu::compact()).await {
            Ok(Some(value)) => parse_bool_flag(&value).unwrap_or_else(|| {
                warn!(stored = %value, "Invalid compact menu flag, using false");
                false
            }),
            Ok(None) => false,
            Err(e) => {
                error!(error = %e, "Failed to read compact menu flag");
                false
            }
        }
    }

    pub async fn set_compact_menu(&self, compact: bool) -> AppResult<()> {
        self.store
            .set(&keys::menu::compact(), if compact { "true" } else { "false" })
            .await
            .map_err(AppError::storage)
    }
}
