//! Project entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Length of every share link.
pub const SHARE_LINK_LEN: usize = 16;

/// A shared project.
///
/// `owner_id` and `share_link` are the two identity fields the authorization
/// core reads; everything else is descriptive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Opaque unique identifier issued by the store.
    pub id: String,
    /// The controlling principal.
    pub owner_id: String,
    /// 16-character alphanumeric link secret granting anonymous access.
    pub share_link: String,
    /// Project title (escaped).
    pub title: String,
    /// Optional description (escaped).
    pub description: Option<String>,
    /// Optional display name of whoever uploaded the content (escaped).
    pub uploader_name: Option<String>,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
    /// When the project was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Check whether `owner_id` identifies this project's owner.
    pub fn is_owned_by(&self, owner_id: &str) -> bool {
        self.owner_id == owner_id
    }

    /// Check whether `share_link` is this project's current share link.
    pub fn has_share_link(&self, share_link: &str) -> bool {
        self.share_link == share_link
    }
}

/// Data required to create a new project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProject {
    /// The owner.
    pub owner_id: String,
    /// Title.
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Uploader display name.
    pub uploader_name: Option<String>,
}

/// Partial update of a project's descriptive fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProject {
    /// New title.
    pub title: Option<String>,
    /// New description; `Some(None)` clears it.
    pub description: Option<Option<String>>,
}
