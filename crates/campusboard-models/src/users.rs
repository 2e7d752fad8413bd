//! Roles and directory users.
//!
//! A [`Role`] decides which menu and dashboard a signed-in user sees. The
//! set is closed: every role-dependent table in the workspace matches on it
//! exhaustively. Unknown role strings become a role only through
//! [`Role::parse_or_fallback`], which falls back to [`Role::Admin`] and
//! reports that it did; [`Role::parse_or_default`] drops that flag.

use crate::ids::UserId;
use crate::value_types::Email;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Platform role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Role {
    /// Fallback for absent or unrecognized role values.
    #[default]
    Admin,
    Teacher,
    Student,
}

/// Returned by the strict `Role` parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Teacher, Role::Student];

    /// Canonical identifier, as persisted in the preference store.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Teacher => "Teacher",
            Self::Student => "Student",
        }
    }

    /// Parses a role, falling back to [`Role::Admin`] for anything unrecognized.
    ///
    /// Returns the role together with whether the fallback was taken.
    pub fn parse_or_fallback(value: &str) -> (Self, bool) {
        match value.parse::<Self>() {
            Ok(role) => (role, false),
            Err(_) => (Self::default(), true),
        }
    }

    pub fn parse_or_default(value: &str) -> Self {
        Self::parse_or_fallback(value).0
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "teacher" => Ok(Self::Teacher),
            "student" => Ok(Self::Student),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.as_str().to_ascii_lowercase())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A user as reported by the user directory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub display_name: String,
    pub email: Email,
    pub role: Role,
}

impl User {
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}
