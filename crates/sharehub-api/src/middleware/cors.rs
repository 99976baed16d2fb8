//! CORS layer configuration.

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use sharehub_core::config::CorsConfig;

use crate::extractors::credentials::{ACCESS_TOKEN_HEADER, OWNER_HEADER};

/// Builds a CORS tower layer from configuration.
///
/// An empty origin list or `"*"` allows any origin; production configs are
/// rejected at startup before reaching this point.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new();

    // Origins
    if config.allowed_origins.is_empty() || config.allowed_origins.iter().any(|o| o == "*") {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    // Methods
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    layer = layer.allow_methods(methods);

    layer = layer.allow_headers([
        AUTHORIZATION,
        CONTENT_TYPE,
        HeaderName::from_static(OWNER_HEADER),
        HeaderName::from_static(ACCESS_TOKEN_HEADER),
    ]);

    layer.max_age(std::time::Duration::from_secs(config.max_age_seconds))
}
