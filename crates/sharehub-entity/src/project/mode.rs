//! Access mode classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which credential path produced an access decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
    /// The caller proved they are the project owner.
    Owner,
    /// The caller presented the project's current share link.
    ShareLink,
    /// No credential matched (only produced by checks that never deny).
    None,
}

impl AccessMode {
    /// Returns the mode as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::ShareLink => "share_link",
            Self::None => "none",
        }
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
