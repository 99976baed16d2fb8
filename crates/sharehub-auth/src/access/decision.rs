//! Access decision types.

use serde::{Deserialize, Serialize};

use sharehub_core::error::AppError;
use sharehub_entity::project::{AccessMode, Project};

/// Why access was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// No project was resolved.
    NotFound,
    /// The project exists but no credential matches it.
    AccessDenied,
}

impl DenyReason {
    /// Converts the reason into the matching application error.
    pub fn into_error(self) -> AppError {
        match self {
            Self::NotFound => AppError::not_found("Project not found"),
            Self::AccessDenied => {
                AppError::access_denied("You do not have access to this project")
            }
        }
    }
}

/// Outcome of evaluating one request against one project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDecision {
    /// Access granted through `mode`.
    Allow(AccessMode),
    /// Access refused.
    Deny(DenyReason),
}

/// Resolved access attached to a request for downstream handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectAccess {
    /// The resolved project.
    pub project: Project,
    /// Whether the caller is the project owner.
    pub is_owner: bool,
    /// Which credential path granted access.
    pub mode: AccessMode,
}
