//! Project management and share-link view handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use tracing::info;

use sharehub_auth::ProjectAccess;
use sharehub_auth::validate::{check_owner_id, escape_html, sanitize_optional};
use sharehub_core::error::AppError;
use sharehub_entity::project::{CreateProject, UpdateProject};

use crate::dto::request::{CreateProjectRequest, UpdateProjectRequest};
use crate::dto::response::{ApiResponse, MessageResponse, ProjectResponse};
use crate::error::ApiResult;
use crate::extractors::{Credentials, ValidatedJson};
use crate::state::AppState;

/// POST /api/projects
///
/// The caller's owner header becomes the project owner.
pub async fn create_project(
    State(state): State<AppState>,
    credentials: Credentials,
    ValidatedJson(req): ValidatedJson<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<ProjectResponse>>)> {
    let owner_id = credentials
        .owner_id
        .ok_or_else(|| AppError::missing_identifier("x-owner-id header is required"))?;
    if let Some(err) = check_owner_id("owner_id", &owner_id) {
        return Err(AppError::validation(vec![err]).into());
    }

    let title = req.title.trim();
    if title.is_empty() {
        return Err(AppError::invalid_field("title", "length", "title must not be blank").into());
    }

    let project = state
        .projects
        .create(CreateProject {
            owner_id,
            title: escape_html(title),
            description: sanitize_optional(req.description.as_deref()),
            uploader_name: sanitize_optional(req.uploader_name.as_deref()),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(ProjectResponse::for_owner(&project))),
    ))
}

/// GET /api/projects/{project_id}
pub async fn get_project(
    Extension(access): Extension<ProjectAccess>,
) -> Json<ApiResponse<ProjectResponse>> {
    Json(ApiResponse::ok(ProjectResponse::for_access(&access)))
}

/// GET /api/share/{share_link}
pub async fn view_shared_project(
    Extension(access): Extension<ProjectAccess>,
) -> Json<ApiResponse<ProjectResponse>> {
    Json(ApiResponse::ok(ProjectResponse::for_access(&access)))
}

/// PATCH /api/projects/{project_id}
pub async fn update_project(
    State(state): State<AppState>,
    Extension(access): Extension<ProjectAccess>,
    ValidatedJson(req): ValidatedJson<UpdateProjectRequest>,
) -> ApiResult<Json<ApiResponse<ProjectResponse>>> {
    if req.is_empty() {
        return Err(AppError::invalid_field(
            "body",
            "empty",
            "at least one of title or description is required",
        )
        .into());
    }

    let title = match req.title.as_deref().map(str::trim) {
        Some("") => {
            return Err(
                AppError::invalid_field("title", "length", "title must not be blank").into(),
            );
        }
        other => other.map(escape_html),
    };

    let project = state
        .projects
        .update(
            &access.project.id,
            UpdateProject {
                title,
                description: req
                    .description
                    .map(|d| sanitize_optional(d.as_deref())),
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(ProjectResponse::for_owner(&project))))
}

/// DELETE /api/projects/{project_id}
pub async fn delete_project(
    State(state): State<AppState>,
    Extension(access): Extension<ProjectAccess>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let id = &access.project.id;
    if !state.projects.delete(id).await? {
        return Err(AppError::not_found("Project not found").into());
    }

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Project deleted".to_string(),
    })))
}

/// POST /api/projects/{project_id}/share-link/rotate
///
/// Outstanding share-link tokens stop working once the link changes.
pub async fn rotate_share_link(
    State(state): State<AppState>,
    Extension(access): Extension<ProjectAccess>,
) -> ApiResult<Json<ApiResponse<ProjectResponse>>> {
    let project = state.projects.rotate_share_link(&access.project.id).await?;
    info!(project_id = %project.id, "Share link rotated by owner");
    Ok(Json(ApiResponse::ok(ProjectResponse::for_owner(&project))))
}
