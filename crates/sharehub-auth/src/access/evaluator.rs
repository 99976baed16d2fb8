//! The access decision core.
//!
//! [`evaluate`] is a pure function of the resolved project, the identities
//! the caller claims, and the [`AccessPolicy`] of the calling check. It never
//! performs I/O; resolution and token verification happen in the gate.

use std::fmt;

use serde::{Deserialize, Serialize};

use sharehub_entity::project::{AccessMode, Project};

use super::decision::{AccessDecision, DenyReason};
use crate::jwt::{AccessClaims, AccessGrant};

/// Which of the three request checks is asking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessPolicy {
    /// Mutations: owner identity required, lookup by id only.
    OwnerOnly,
    /// Informational load: resolves by id or link, never denies on identity.
    PublicLoad,
    /// Reads: owner or share-link holder.
    OwnerOrLink,
}

impl AccessPolicy {
    /// Whether a share-link match may grant access under this policy.
    pub fn allows_share_link(&self) -> bool {
        !matches!(self, Self::OwnerOnly)
    }

    /// Whether this policy turns an identity mismatch into an error.
    pub fn denies_on_identity(&self) -> bool {
        !matches!(self, Self::PublicLoad)
    }

    /// Returns the policy as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OwnerOnly => "owner_only",
            Self::PublicLoad => "public_load",
            Self::OwnerOrLink => "owner_or_link",
        }
    }
}

impl fmt::Display for AccessPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identities a request claims, after validation and token verification.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaimedIdentity<'a> {
    /// Owner id from the identity header.
    pub owner_id: Option<&'a str>,
    /// Share link from the request path.
    pub share_link: Option<&'a str>,
    /// Claims of a verified bearer token.
    pub token: Option<&'a AccessClaims>,
}

/// Decides whether the claimed identities grant access to `project`.
///
/// A token only counts when its `project_id` is the project's id, and only
/// toward the mode of its own kind. An owner match wins over a link match.
pub fn evaluate(
    project: Option<&Project>,
    claimed: &ClaimedIdentity<'_>,
    policy: AccessPolicy,
) -> AccessDecision {
    let Some(project) = project else {
        return AccessDecision::Deny(DenyReason::NotFound);
    };

    let grant = claimed
        .token
        .map(|claims| &claims.grant)
        .filter(|grant| grant.project_id() == project.id);

    let header_owner = claimed.owner_id.is_some_and(|id| project.is_owned_by(id));
    let token_owner = matches!(
        grant,
        Some(AccessGrant::OwnerAccess { owner_id, .. }) if project.is_owned_by(owner_id)
    );
    let is_owner = header_owner || token_owner;

    let path_link = claimed
        .share_link
        .is_some_and(|link| project.has_share_link(link));
    let token_link = matches!(
        grant,
        Some(AccessGrant::ShareLinkAccess { share_link, .. }) if project.has_share_link(share_link)
    );
    let has_link_access = path_link || token_link;

    if is_owner {
        AccessDecision::Allow(AccessMode::Owner)
    } else if has_link_access && policy.allows_share_link() {
        AccessDecision::Allow(AccessMode::ShareLink)
    } else {
        AccessDecision::Deny(DenyReason::AccessDenied)
    }
}
