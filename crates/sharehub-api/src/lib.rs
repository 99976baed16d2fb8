//! # sharehub-api
//!
//! HTTP API layer for ShareHub built on Axum.
//!
//! Provides the project and share-link endpoints, the three access
//! middlewares (owner-only, public-load, owner-or-link), credential
//! extraction, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
