//! Demo directory seeding.
//!
//! Builds an [`InMemoryDirectory`] filled with fake users so the console can
//! be tried without a running user directory.

pub mod models;
pub mod users;

use campusboard::modules::directory::InMemoryDirectory;
use campusboard_models::Role;
use std::time::Instant;
use tracing::info;

pub use models::SeedConfig;

/// Generates a directory according to `config`.
///
/// Every teacher appears both in the user list and as a teacher application.
pub fn seed_directory(config: &SeedConfig) -> InMemoryDirectory {
    let start = Instant::now();

    let teachers = users::generate_teachers(config.teachers, config.pending_teachers);
    let mut all_users = users::generate_users(Role::Admin, config.admins);
    all_users.extend(teachers.iter().map(|t| t.user.clone()));
    all_users.extend(users::generate_users(Role::Student, config.students));

    info!(
        users = all_users.len(),
        pending_teachers = config.pending_teachers,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Seeded demo directory"
    );

    InMemoryDirectory::new(all_users, teachers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusboard::modules::directory::UserDirectoryService;

    #[tokio::test]
    async fn test_seeded_directory_matches_config() {
        let config = SeedConfig::default().with_teachers(4, 1).with_students(5);
        let directory = seed_directory(&config);

        let users = directory.fetch_all_users().await.unwrap();
        let pending = directory.fetch_pending_teachers().await.unwrap();

        assert_eq!(users.len(), config.total_users());
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id().as_str(), "t1");
    }
}
