//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sharehub_auth::TokenKind;
use sharehub_auth::jwt::IssuedToken;
use sharehub_auth::ProjectAccess;
use sharehub_entity::project::{AccessMode, Project};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Project as seen by the caller.
///
/// `owner_id` and `share_link` are only filled in for the owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectResponse {
    /// Project ID.
    pub id: String,
    /// Title.
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Uploader display name.
    pub uploader_name: Option<String>,
    /// Whether the caller owns the project.
    pub is_owner: bool,
    /// How access was granted.
    pub access_mode: AccessMode,
    /// Owner identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    /// Current share link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_link: Option<String>,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl ProjectResponse {
    /// Builds the view for a caller with the given access.
    pub fn for_access(access: &ProjectAccess) -> Self {
        Self::new(&access.project, access.is_owner, access.mode)
    }

    /// Builds the owner's view of `project`.
    pub fn for_owner(project: &Project) -> Self {
        Self::new(project, true, AccessMode::Owner)
    }

    fn new(project: &Project, is_owner: bool, access_mode: AccessMode) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            description: project.description.clone(),
            uploader_name: project.uploader_name.clone(),
            is_owner,
            access_mode,
            owner_id: is_owner.then(|| project.owner_id.clone()),
            share_link: is_owner.then(|| project.share_link.clone()),
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

/// Freshly issued bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Compact JWT.
    pub token: String,
    /// Token kind.
    pub kind: TokenKind,
    /// Project the token is bound to.
    pub project_id: String,
    /// Expiration.
    pub expires_at: DateTime<Utc>,
}

impl TokenResponse {
    /// Wraps an issued token.
    pub fn new(project_id: &str, issued: IssuedToken) -> Self {
        Self {
            token: issued.token,
            kind: issued.kind,
            project_id: project_id.to_string(),
            expires_at: issued.expires_at,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Seconds since startup.
    pub uptime_seconds: u64,
}
