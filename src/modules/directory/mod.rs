//! User directory access.
//!
//! The user directory is the remote service that owns users and teacher
//! applications. The core only talks to it through [`UserDirectoryService`]:
//!
//! - [`HttpDirectory`]: JSON over HTTP (production)
//! - [`InMemoryDirectory`]: seeded, process-local (tests and demo runs)

pub mod http;
pub mod memory;

use std::future::Future;
use std::sync::Arc;

use campusboard_core::AppResult;
use campusboard_models::{Teacher, User, UserId};

pub use http::HttpDirectory;
pub use memory::InMemoryDirectory;

/// Operations the console needs from the user directory.
///
/// Reads fail with `ErrorKind::Fetch`; approve/reject fail with
/// `ErrorKind::RemoteOperation`.
pub trait UserDirectoryService: Send + Sync {
    fn fetch_all_users(&self) -> impl Future<Output = AppResult<Vec<User>>> + Send;

    /// Every returned teacher is expected to be `Pending`.
    fn fetch_pending_teachers(&self) -> impl Future<Output = AppResult<Vec<Teacher>>> + Send;

    fn approve_teacher(&self, id: &UserId) -> impl Future<Output = AppResult<()>> + Send;

    fn reject_teacher(
        &self,
        id: &UserId,
        reason: Option<&str>,
    ) -> impl Future<Output = AppResult<()>> + Send;
}

impl<T: UserDirectoryService> UserDirectoryService for Arc<T> {
    fn fetch_all_users(&self) -> impl Future<Output = AppResult<Vec<User>>> + Send {
        (**self).fetch_all_users()
    }

    fn fetch_pending_teachers(&self) -> impl Future<Output = AppResult<Vec<Teacher>>> + Send {
        (**self).fetch_pending_teachers()
    }

    fn approve_teacher(&self, id: &UserId) -> impl Future<Output = AppResult<()>> + Send {
        (**self).approve_teacher(id)
    }

    fn reject_teacher(
        &self,
        id: &UserId,
        reason: Option<&str>,
    ) -> impl Future<Output = AppResult<()>> + Send {
        (**self).reject_teacher(id, reason)
    }
}
