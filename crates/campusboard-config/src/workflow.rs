use std::time::Duration;

use crate::env_secs;

/// Approval workflow settings.
///
/// # Environment Variables
///
/// - `CAMPUSBOARD_ACTION_TIMEOUT_SECS`: upper bound for a single approve/reject
///   call. Unset or `0` disables the timeout, in which case a call that never
///   settles keeps its id marked as processing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkflowConfig {
    pub action_timeout: Option<Duration>,
}

impl WorkflowConfig {
    pub fn from_env() -> Self {
        Self {
            action_timeout: env_secs("CAMPUSBOARD_ACTION_TIMEOUT_SECS").map(Duration::from_secs),
        }
    }

    pub fn with_action_timeout(mut self, timeout: Duration) -> Self {
        self.action_timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_timeout() {
        assert_eq!(WorkflowConfig::default().action_timeout, None);
    }

    #[test]
    fn test_with_action_timeout() {
        let config = WorkflowConfig::default().with_action_timeout(Duration::from_secs(5));
        assert_eq!(config.action_timeout, Some(Duration::from_secs(5)));
    }
}
