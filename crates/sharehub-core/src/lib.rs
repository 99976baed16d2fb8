//! # sharehub-core
//!
//! Core crate for ShareHub. Contains the configuration schema, the unified
//! error taxonomy shared by the authorization core and the HTTP layer, and
//! the `AppResult` alias.
//!
//! This crate has **no** internal dependencies on other ShareHub crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::{AppError, ErrorKind, FieldError};
pub use result::AppResult;
