//! The access gate: one parameterised check behind three entry points.

use std::sync::Arc;

use tracing::{debug, error};

use sharehub_core::error::{AppError, FieldError};
use sharehub_core::result::AppResult;
use sharehub_entity::project::{AccessMode, Project};
use sharehub_store::traits::ProjectLookup;

use super::decision::{AccessDecision, DenyReason, ProjectAccess};
use super::evaluator::{AccessPolicy, ClaimedIdentity, evaluate};
use super::identity::RequestIdentifiers;
use crate::jwt::{AccessClaims, TokenCodec, TokenStatus};
use crate::validate::{check_owner_id, check_project_id, check_share_link};

/// Runs validation, token verification, the project lookup and the evaluator
/// for one request.
#[derive(Clone)]
pub struct AccessGate {
    store: Arc<dyn ProjectLookup>,
    tokens: Arc<TokenCodec>,
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate").finish_non_exhaustive()
    }
}

impl AccessGate {
    /// Creates a gate over a project lookup and a token codec.
    pub fn new(store: Arc<dyn ProjectLookup>, tokens: Arc<TokenCodec>) -> Self {
        Self { store, tokens }
    }

    /// Owner-only check used by mutation endpoints.
    pub async fn require_owner(&self, ids: &RequestIdentifiers) -> AppResult<ProjectAccess> {
        self.check(AccessPolicy::OwnerOnly, ids).await
    }

    /// Resolves the project and reports `is_owner` without gating on identity.
    pub async fn load_public(&self, ids: &RequestIdentifiers) -> AppResult<ProjectAccess> {
        self.check(AccessPolicy::PublicLoad, ids).await
    }

    /// Owner or share-link holder check used by read endpoints.
    pub async fn require_owner_or_link(
        &self,
        ids: &RequestIdentifiers,
    ) -> AppResult<ProjectAccess> {
        self.check(AccessPolicy::OwnerOrLink, ids).await
    }

    /// Runs the check for `policy`.
    ///
    /// Order: identifier presence and shape, bearer token, project lookup,
    /// evaluation. Everything before the lookup fails without touching the
    /// store.
    pub async fn check(
        &self,
        policy: AccessPolicy,
        ids: &RequestIdentifiers,
    ) -> AppResult<ProjectAccess> {
        let project_id = ids.project_id.as_deref();
        let share_link = match policy {
            AccessPolicy::OwnerOnly => None,
            _ => ids.share_link.as_deref(),
        };

        if project_id.is_none() && share_link.is_none() {
            return Err(AppError::missing_identifier(match policy {
                AccessPolicy::OwnerOnly => "project_id is required",
                _ => "project_id or share_link is required",
            }));
        }

        let owner_id = self.validate_identifiers(policy, project_id, share_link, ids)?;
        let claims = self.verify_token(policy, ids.bearer_token.as_deref())?;

        // A project addressed by id needs some identity to match against;
        // a share link in the path is its own identity.
        if policy.denies_on_identity()
            && share_link.is_none()
            && owner_id.is_none()
            && claims.is_none()
        {
            return Err(AppError::missing_identifier(
                "An owner identity or access token is required",
            ));
        }

        let project = self.resolve(project_id, share_link).await?;

        let claimed = ClaimedIdentity {
            owner_id,
            share_link,
            token: claims.as_ref(),
        };
        let decision = evaluate(project.as_ref(), &claimed, policy);

        let mode = match decision {
            AccessDecision::Allow(mode) => mode,
            AccessDecision::Deny(DenyReason::AccessDenied) if !policy.denies_on_identity() => {
                AccessMode::None
            }
            AccessDecision::Deny(reason) => {
                debug!(
                    policy = %policy,
                    project_id = ?project_id.or(project.as_ref().map(|p| p.id.as_str())),
                    reason = ?reason,
                    "Access denied"
                );
                return Err(reason.into_error());
            }
        };

        let project = project.ok_or_else(|| DenyReason::NotFound.into_error())?;
        debug!(policy = %policy, project_id = %project.id, mode = %mode, "Access resolved");

        Ok(ProjectAccess {
            is_owner: mode == AccessMode::Owner,
            mode,
            project,
        })
    }

    /// Checks identifier shapes, collecting every offending field.
    ///
    /// Returns the owner id to evaluate. Public-load drops a malformed owner
    /// header instead of failing, since it never gates on identity.
    fn validate_identifiers<'a>(
        &self,
        policy: AccessPolicy,
        project_id: Option<&str>,
        share_link: Option<&str>,
        ids: &'a RequestIdentifiers,
    ) -> AppResult<Option<&'a str>> {
        let mut errors: Vec<FieldError> = Vec::new();

        if let Some(id) = project_id {
            errors.extend(check_project_id(self.store.as_ref(), "project_id", id));
        }
        if let Some(link) = share_link {
            errors.extend(check_share_link("share_link", link));
        }

        let mut owner_id = ids.owner_id.as_deref();
        if let Some(err) = owner_id.and_then(|owner| check_owner_id("owner_id", owner)) {
            if policy.denies_on_identity() {
                errors.push(err);
            } else {
                debug!(policy = %policy, "Ignoring malformed owner header");
                owner_id = None;
            }
        }

        if errors.is_empty() {
            Ok(owner_id)
        } else {
            Err(AppError::validation(errors))
        }
    }

    /// Verifies the bearer token, if any.
    ///
    /// Public-load ignores tokens that fail verification.
    fn verify_token(
        &self,
        policy: AccessPolicy,
        token: Option<&str>,
    ) -> AppResult<Option<AccessClaims>> {
        let Some(token) = token else {
            return Ok(None);
        };

        let err = match self.tokens.parse(token) {
            TokenStatus::Valid(claims) => {
                debug!(
                    jti = %claims.jti,
                    kind = %claims.grant.kind(),
                    project_id = %claims.grant.project_id(),
                    "Bearer token verified"
                );
                return Ok(Some(claims));
            }
            TokenStatus::Expired => AppError::expired_credential("Access token has expired"),
            TokenStatus::Malformed => AppError::malformed_credential("Access token is invalid"),
        };

        if policy.denies_on_identity() {
            Err(err)
        } else {
            debug!(policy = %policy, error = %err, "Ignoring unusable bearer token");
            Ok(None)
        }
    }

    async fn resolve(
        &self,
        project_id: Option<&str>,
        share_link: Option<&str>,
    ) -> AppResult<Option<Project>> {
        let result = match (project_id, share_link) {
            (Some(id), _) => self.store.find_by_id(id).await,
            (None, Some(link)) => self.store.find_by_share_link(link).await,
            (None, None) => Ok(None),
        };

        result.map_err(|e| {
            error!(error = %e, "Project lookup failed");
            AppError::internal("Project lookup failed")
        })
    }
}
