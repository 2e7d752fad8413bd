use campusboard_models::{MenuEntry, Role};
use serde::Serialize;

/// Outcome of resolving a requested role to its navigation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedMenu {
    pub role: Role,
    pub entries: &'static [MenuEntry],
    /// `true` when the requested or stored role was unrecognized and the
    /// Admin menu was used instead.
    pub fell_back: bool,
}
