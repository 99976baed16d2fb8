//! Bearer token issuance handlers.

use axum::extract::State;
use axum::{Extension, Json};
use tracing::info;

use sharehub_auth::ProjectAccess;

use crate::dto::response::{ApiResponse, TokenResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /api/projects/{project_id}/token
pub async fn issue_owner_token(
    State(state): State<AppState>,
    Extension(access): Extension<ProjectAccess>,
) -> ApiResult<Json<ApiResponse<TokenResponse>>> {
    let project = &access.project;
    let issued = state
        .tokens
        .issue_owner_token(&project.id, &project.owner_id)?;

    info!(project_id = %project.id, kind = %issued.kind, "Owner token issued");
    Ok(Json(ApiResponse::ok(TokenResponse::new(&project.id, issued))))
}

/// POST /api/share/{share_link}/token
///
/// The token is bound to the project's current share link.
pub async fn issue_share_link_token(
    State(state): State<AppState>,
    Extension(access): Extension<ProjectAccess>,
) -> ApiResult<Json<ApiResponse<TokenResponse>>> {
    let project = &access.project;
    let issued = state
        .tokens
        .issue_share_link_token(&project.id, &project.share_link)?;

    info!(
        project_id = %project.id,
        kind = %issued.kind,
        mode = %access.mode,
        "Share-link token issued"
    );
    Ok(Json(ApiResponse::ok(TokenResponse::new(&project.id, issued))))
}
