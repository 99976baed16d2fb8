//! Route definitions for the ShareHub HTTP API.
//!
//! All routes are mounted under `/api`. Access middleware is attached per
//! method with `route_layer`, so one path can carry an owner-or-link `GET`
//! next to owner-only mutations.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post},
};

use crate::handlers;
use crate::middleware::access::{load_project, require_owner, require_owner_or_link};
use crate::state::AppState;

/// Build the API router.
///
/// Receives the fully-constructed `AppState` and threads it through every
/// route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(project_routes(&state))
        .merge(share_routes(&state))
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Project management, addressed by id.
fn project_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/projects", post(handlers::projects::create_project))
        .route(
            "/projects/{project_id}",
            get(handlers::projects::get_project)
                .route_layer(from_fn_with_state(state.clone(), require_owner_or_link))
                .merge(
                    patch(handlers::projects::update_project)
                        .merge(delete(handlers::projects::delete_project))
                        .route_layer(from_fn_with_state(state.clone(), require_owner)),
                ),
        )
        .route(
            "/projects/{project_id}/share-link/rotate",
            post(handlers::projects::rotate_share_link)
                .route_layer(from_fn_with_state(state.clone(), require_owner)),
        )
        .route(
            "/projects/{project_id}/token",
            post(handlers::tokens::issue_owner_token)
                .route_layer(from_fn_with_state(state.clone(), require_owner)),
        )
}

/// Share-link access, addressed by link.
fn share_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/share/{share_link}",
            get(handlers::projects::view_shared_project)
                .route_layer(from_fn_with_state(state.clone(), load_project)),
        )
        .route(
            "/share/{share_link}/token",
            post(handlers::tokens::issue_share_link_token)
                .route_layer(from_fn_with_state(state.clone(), require_owner_or_link)),
        )
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
