//! Claims carried by ShareHub bearer tokens.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token kind discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Grants owner access to one project.
    OwnerAccess,
    /// Grants share-link access to one project.
    ShareLinkAccess,
}

impl TokenKind {
    /// Returns the kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OwnerAccess => "owner_access",
            Self::ShareLinkAccess => "share_link_access",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a token grants. Each variant carries exactly the identity field its
/// kind requires, so a parsed grant never needs "is this field present"
/// checks.
///
/// On the wire the discriminator lives in the `type` claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AccessGrant {
    /// Owner access to `project_id`.
    #[serde(rename = "project_access")]
    OwnerAccess {
        /// Target project.
        project_id: String,
        /// Owner the token was issued to.
        owner_id: String,
    },
    /// Share-link access to `project_id`.
    #[serde(rename = "share_link_access")]
    ShareLinkAccess {
        /// Target project.
        project_id: String,
        /// Share link the token was issued for.
        share_link: String,
    },
}

impl AccessGrant {
    /// Owner grant for a project.
    pub fn owner(project_id: impl Into<String>, owner_id: impl Into<String>) -> Self {
        Self::OwnerAccess {
            project_id: project_id.into(),
            owner_id: owner_id.into(),
        }
    }

    /// Share-link grant for a project.
    pub fn share_link(project_id: impl Into<String>, share_link: impl Into<String>) -> Self {
        Self::ShareLinkAccess {
            project_id: project_id.into(),
            share_link: share_link.into(),
        }
    }

    /// The kind discriminator.
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::OwnerAccess { .. } => TokenKind::OwnerAccess,
            Self::ShareLinkAccess { .. } => TokenKind::ShareLinkAccess,
        }
    }

    /// The project this grant targets.
    pub fn project_id(&self) -> &str {
        match self {
            Self::OwnerAccess { project_id, .. } | Self::ShareLinkAccess { project_id, .. } => {
                project_id
            }
        }
    }

    /// The identity value: the owner id or the share link.
    pub fn identity(&self) -> &str {
        match self {
            Self::OwnerAccess { owner_id, .. } => owner_id,
            Self::ShareLinkAccess { share_link, .. } => share_link,
        }
    }
}

/// Full claim set of a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// The grant.
    #[serde(flatten)]
    pub grant: AccessGrant,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Token ID, used to correlate log lines.
    pub jti: Uuid,
}

impl AccessClaims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_default()
    }
}
