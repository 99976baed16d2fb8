//! Unified application error types for ShareHub.
//!
//! Every crate maps its failures into [`AppError`] so the authorization core
//! and the HTTP layer agree on one taxonomy. Each [`ErrorKind`] has a stable
//! machine-readable code and an HTTP status class.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A required path or identity field was absent.
    MissingIdentifier,
    /// A credential failed signature or shape checks.
    MalformedCredential,
    /// A credential was validly signed but is past its expiry.
    ExpiredCredential,
    /// The requested resource does not exist.
    NotFound,
    /// The credential was verified but does not grant access to the resource.
    AccessDenied,
    /// A boundary validator rejected one or more fields.
    Validation,
    /// A uniqueness constraint in the store was violated.
    Conflict,
    /// Startup configuration is unusable.
    Configuration,
    /// An unexpected failure in a lookup or signing primitive.
    Internal,
}

impl ErrorKind {
    /// Stable code reported to clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingIdentifier => "MISSING_IDENTIFIER",
            Self::MalformedCredential => "MALFORMED_CREDENTIAL",
            Self::ExpiredCredential => "EXPIRED_CREDENTIAL",
            Self::NotFound => "RESOURCE_NOT_FOUND",
            Self::AccessDenied => "ACCESS_DENIED",
            Self::Validation => "VALIDATION_ERROR",
            Self::Conflict => "CONFLICT",
            Self::Configuration => "CONFIGURATION_ERROR",
            Self::Internal => "INTERNAL_ERROR",
        }
    }

    /// HTTP status code for this kind.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingIdentifier | Self::Validation => 400,
            Self::MalformedCredential | Self::ExpiredCredential => 401,
            Self::AccessDenied => 403,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::Configuration | Self::Internal => 500,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single offending field reported by a boundary validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending field.
    pub field: String,
    /// Machine-readable reason, e.g. `"length"` or `"charset"`.
    pub code: String,
    /// Human-readable explanation.
    pub message: String,
}

impl FieldError {
    /// Creates a new field error.
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// The unified application error used throughout ShareHub.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Per-field details for validation failures.
    pub details: Vec<FieldError>,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: Vec::new(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            details: Vec::new(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a missing-identifier error.
    pub fn missing_identifier(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingIdentifier, message)
    }

    /// Create a malformed-credential error.
    pub fn malformed_credential(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedCredential, message)
    }

    /// Create an expired-credential error.
    pub fn expired_credential(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ExpiredCredential, message)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an access-denied error.
    pub fn access_denied(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AccessDenied, message)
    }

    /// Create a validation error carrying every offending field.
    pub fn validation(details: Vec<FieldError>) -> Self {
        let message = match details.as_slice() {
            [single] => single.message.clone(),
            _ => format!("{} fields failed validation", details.len()),
        };
        Self {
            kind: ErrorKind::Validation,
            message,
            details,
            source: None,
        }
    }

    /// Create a validation error for one field.
    pub fn invalid_field(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::validation(vec![FieldError::new(field, code, message)])
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            details: self.details.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Internal,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Internal, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut details: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"));
                    FieldError::new(field.clone(), e.code.to_string(), message)
                })
            })
            .collect();
        // field_errors() is backed by a HashMap
        details.sort_by(|a, b| a.field.cmp(&b.field));
        Self::validation(details)
    }
}
