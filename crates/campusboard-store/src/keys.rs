//! Fixed key names.
//!
//! Every key carries the same prefix so the Redis backend can share a
//! database with other applications.

const KEY_PREFIX: &str = "campusboard";

fn build_key(parts: &[&str]) -> String {
    format!("{}:{}", KEY_PREFIX, parts.join(":"))
}

/// Keys for navigation preferences.
pub mod menu {
    use super::*;

    /// Identifier of the last explicitly resolved role.
    pub fn role() -> String {
        build_key(&["menu", "role"])
    }

    /// Boolean-as-string "compact menu" display preference.
    pub fn compact() -> String {
        build_key(&["menu", "compact"])
    }
}
