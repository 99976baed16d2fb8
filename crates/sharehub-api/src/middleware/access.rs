//! Project access middleware.
//!
//! Each function is a thin call site over [`AccessGate::check`] with its own
//! [`AccessPolicy`]. On success the resolved [`ProjectAccess`] is inserted
//! into the request extensions for handlers to pick up with `Extension`.
//!
//! Mount with `route_layer` so the `project_id` / `share_link` path
//! parameters are available.
//!
//! [`AccessGate::check`]: sharehub_auth::AccessGate::check
//! [`ProjectAccess`]: sharehub_auth::ProjectAccess

use std::collections::HashMap;

use axum::extract::{Path, Request, State};
use axum::middleware::Next;
use axum::response::Response;

use sharehub_auth::{AccessPolicy, RequestIdentifiers};

use crate::error::ApiResult;
use crate::extractors::Credentials;
use crate::state::AppState;

/// Path parameter naming a project by id.
pub const PROJECT_ID_PARAM: &str = "project_id";
/// Path parameter naming a project by share link.
pub const SHARE_LINK_PARAM: &str = "share_link";

/// Owner-only: mutation endpoints.
pub async fn require_owner(
    State(state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    guard(AccessPolicy::OwnerOnly, &state, params, request, next).await
}

/// Public-load: resolves the project and reports `is_owner` without gating.
pub async fn load_project(
    State(state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    guard(AccessPolicy::PublicLoad, &state, params, request, next).await
}

/// Owner-or-link: read endpoints open to the owner and to link holders.
pub async fn require_owner_or_link(
    State(state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    guard(AccessPolicy::OwnerOrLink, &state, params, request, next).await
}

async fn guard(
    policy: AccessPolicy,
    state: &AppState,
    mut params: HashMap<String, String>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let credentials = Credentials::extract(request.headers(), request.uri());
    let ids = RequestIdentifiers {
        project_id: params.remove(PROJECT_ID_PARAM),
        share_link: params.remove(SHARE_LINK_PARAM),
        owner_id: credentials.owner_id,
        bearer_token: credentials.bearer_token,
    };

    let access = state.access.check(policy, &ids).await?;
    request.extensions_mut().insert(access);

    Ok(next.run(request).await)
}
