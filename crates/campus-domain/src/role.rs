//! User role types.

use serde::{Deserialize, Serialize};

/// Account role, fixed at registration.
///
/// Wire format: lowercase string (`"instructor"` / `"student"`).
/// The set is closed so policy checks can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Instructor,
    Student,
}

impl Role {
    /// Parse from the wire string. Returns `None` for unknown values.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "instructor" => Some(Self::Instructor),
            "student" => Some(Self::Student),
            _ => None,
        }
    }

    /// Convert to the wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Instructor => "instructor",
            Self::Student => "student",
        }
    }
}
