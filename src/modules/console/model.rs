use campusboard_models::User;

/// Presentation-side state: cached directory data and loading flags.
#[derive(Debug, Clone, Default)]
pub struct ConsoleState {
    pub users: Vec<User>,
    pub users_loading: bool,
    pub pending_loading: bool,
    pub compact_menu: bool,
    /// Message of the most recent swallowed error. Cleared when the next
    /// console operation starts.
    pub last_error: Option<String>,
}

impl ConsoleState {
    pub fn is_loading(&self) -> bool {
        self.users_loading || self.pending_loading
    }
}

/// What happened to a console approve/reject request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The id already had a call in flight; nothing was sent.
    AlreadyProcessing,
    /// The call settled. `still_pending` reflects the refreshed pending list,
    /// which is the only signal of whether the decision took effect.
    Settled { still_pending: bool },
    /// The call settled but the pending list could not be refreshed, so
    /// whether the decision took effect is not known.
    Unconfirmed,
}
