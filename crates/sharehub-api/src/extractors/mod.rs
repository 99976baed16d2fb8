//! Custom Axum extractors.

pub mod credentials;
pub mod json;

pub use credentials::Credentials;
pub use json::ValidatedJson;
