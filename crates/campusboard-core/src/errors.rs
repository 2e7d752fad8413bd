//! Application error type.
//!
//! Every fallible core operation returns an [`AppError`]: an [`ErrorKind`]
//! that callers can branch on, wrapping the underlying `anyhow::Error` for
//! context and display.

use anyhow::Error;
use std::fmt;

/// Failure categories surfaced by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A read from the user directory failed (transport, auth, decoding).
    Fetch,
    /// An approve/reject call was rejected by the user directory.
    RemoteOperation,
    /// A call did not settle within the configured timeout.
    Timeout,
    /// The preference store could not be read or written.
    Storage,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Fetch => "fetch error",
            Self::RemoteOperation => "remote operation error",
            Self::Timeout => "timeout",
            Self::Storage => "storage error",
        };
        f.write_str(label)
    }
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub error: Error,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:#}", self.kind, self.error)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.error.as_ref())
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            error: err.into(),
        }
    }

    pub fn fetch<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Fetch, err)
    }

    pub fn remote_operation<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::RemoteOperation, err)
    }

    pub fn timeout<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Timeout, err)
    }

    pub fn storage<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Storage, err)
    }

    pub fn is_fetch(&self) -> bool {
        self.kind == ErrorKind::Fetch
    }

    pub fn is_remote_operation(&self) -> bool {
        self.kind == ErrorKind::RemoteOperation
    }

    pub fn is_timeout(&self) -> bool {
        self.kind == ErrorKind::Timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, anyhow};

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(AppError::fetch(anyhow!("x")).kind, ErrorKind::Fetch);
        assert_eq!(
            AppError::remote_operation(anyhow!("x")).kind,
            ErrorKind::RemoteOperation
        );
        assert_eq!(AppError::timeout(anyhow!("x")).kind, ErrorKind::Timeout);
        assert_eq!(AppError::storage(anyhow!("x")).kind, ErrorKind::Storage);
    }

    #[test]
    fn test_display_includes_context_chain() {
        let err: Result<(), _> = Err(anyhow!("connection refused"));
        let err = err.context("Failed to fetch users").unwrap_err();
        let app_error = AppError::fetch(err);

        assert_eq!(
            app_error.to_string(),
            "fetch error: Failed to fetch users: connection refused"
        );
    }

    #[test]
    fn test_kind_predicates() {
        let err = AppError::remote_operation(anyhow!("409"));
        assert!(err.is_remote_operation());
        assert!(!err.is_fetch());
        assert!(!err.is_timeout());
    }
}
