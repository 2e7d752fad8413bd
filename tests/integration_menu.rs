mod common;

use campusboard::modules::menu::{MenuService, RoleMenuResolver};
use campusboard_models::Role;
use campusboard_store::{FileStore, KeyValueStore, MemoryStore, keys};
use common::temp_preferences_path;

#[tokio::test]
async fn test_resolve_is_idempotent_per_role() {
    let resolver = RoleMenuResolver::new(MemoryStore::new());

    for role in Role::ALL {
        let first = resolver.resolve(Some(role.as_str())).await;
        let second = resolver.resolve(Some(role.as_str())).await;
        let stored = resolver.resolve(None).await;

        assert_eq!(first.entries, second.entries);
        assert_eq!(first.entries, stored.entries);
        assert_eq!(first.entries, MenuService::menu_for(role));
    }
}

#[tokio::test]
async fn test_unknown_and_absent_roles_resolve_to_admin() {
    let resolver = RoleMenuResolver::new(MemoryStore::new());
    let admin = MenuService::menu_for(Role::Admin);

    let absent = resolver.resolve(None).await;
    assert_eq!(absent.role, Role::Admin);
    assert_eq!(absent.entries, admin);

    for value in ["", "principal", "ADMINISTRATOR"] {
        let resolved = resolver.resolve(Some(value)).await;
        assert_eq!(resolved.role, Role::Admin, "value {value:?}");
        assert!(resolved.fell_back);
        assert_eq!(resolved.entries, admin);
    }
}

#[tokio::test]
async fn test_role_is_case_insensitive() {
    let resolver = RoleMenuResolver::new(MemoryStore::new());

    assert_eq!(resolver.resolve(Some("STUDENT")).await.role, Role::Student);
    assert_eq!(resolver.resolve(Some("Teacher")).await.role, Role::Teacher);
    assert_eq!(resolver.resolve(Some(" admin ")).await.role, Role::Admin);
}

#[tokio::test]
async fn test_role_survives_a_new_session_with_file_store() {
    let path = temp_preferences_path();

    let first_session = RoleMenuResolver::new(FileStore::new(&path));
    first_session.resolve(Some("teacher")).await;
    first_session.set_compact_menu(true).await.unwrap();

    let second_session = RoleMenuResolver::new(FileStore::new(&path));
    let resolved = second_session.resolve(None).await;

    assert_eq!(resolved.role, Role::Teacher);
    assert_eq!(resolved.entries, MenuService::menu_for(Role::Teacher));
    assert!(second_session.compact_menu().await);

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[tokio::test]
async fn test_fallback_role_is_written_as_admin() {
    let store = MemoryStore::with_entries([(keys::menu::role(), "Student")]);
    let resolver = RoleMenuResolver::new(store.clone());

    resolver.resolve(Some("janitor")).await;

    assert_eq!(
        store.get(&keys::menu::role()).await.unwrap().as_deref(),
        Some("Admin")
    );
}

#[test]
fn test_every_menu_starts_with_a_header_and_has_one_ignored_logout() {
    for role in Role::ALL {
        let menu = MenuService::menu_for(role);

        assert!(menu[0].is_header(), "{role}");
        let ignored: Vec<_> = menu
            .iter()
            .filter_map(|e| e.as_item())
            .filter(|item| item.ignore)
            .map(|item| item.title)
            .collect();
        assert_eq!(ignored, ["Logout"], "{role}");
    }
}

#[test]
fn test_active_item_for_landing_path() {
    for role in Role::ALL {
        let landing = MenuService::landing_path(role);
        let active = MenuService::active_item(MenuService::menu_for(role), landing).unwrap();

        assert_eq!(active.title, "Dashboard");
    }
}
