//! Request DTOs with validation.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Create project request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProjectRequest {
    /// Title.
    #[validate(length(min = 1, max = 200, message = "title must be 1 to 200 characters"))]
    pub title: String,
    /// Description.
    #[validate(length(max = 2000, message = "description must be at most 2000 characters"))]
    pub description: Option<String>,
    /// Name shown as the uploader.
    #[validate(length(
        min = 1,
        max = 100,
        message = "uploader_name must be 1 to 100 characters"
    ))]
    pub uploader_name: Option<String>,
}

/// Partial project update.
///
/// `description: null` clears the description; omitting it leaves it as is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    /// New title.
    #[validate(length(min = 1, max = 200, message = "title must be 1 to 200 characters"))]
    pub title: Option<String>,
    /// New description, or `null` to clear it.
    #[serde(default, deserialize_with = "present")]
    #[validate(length(max = 2000, message = "description must be at most 2000 characters"))]
    pub description: Option<Option<String>>,
}

impl UpdateProjectRequest {
    /// Whether the request changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

/// Marks a field as present even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
