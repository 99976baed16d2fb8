//! `Credentials` extractor: the owner identity header and a bearer token.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::{HeaderMap, Uri};
use serde::Deserialize;

/// Header carrying the caller's owner identity.
pub const OWNER_HEADER: &str = "x-owner-id";
/// Fallback header carrying a bearer token.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";
/// Query parameter carrying a bearer token.
pub const TOKEN_QUERY_PARAM: &str = "token";

#[derive(Debug, Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

/// Raw identity material presented by a request.
///
/// Nothing here is validated; the access gate does that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Value of the owner identity header.
    pub owner_id: Option<String>,
    /// Bearer token from the first source that carried one.
    pub bearer_token: Option<String>,
}

impl Credentials {
    /// Reads credentials from request headers and the query string.
    ///
    /// Token sources in order: `Authorization: Bearer`, the `token` query
    /// parameter, the `x-access-token` header.
    pub fn extract(headers: &HeaderMap, uri: &Uri) -> Self {
        let owner_id = header_value(headers, OWNER_HEADER);

        let bearer_token = header_value(headers, AUTHORIZATION.as_str())
            .and_then(|value| strip_bearer(&value))
            .or_else(|| query_token(uri))
            .or_else(|| header_value(headers, ACCESS_TOKEN_HEADER));

        Self {
            owner_id,
            bearer_token,
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

fn strip_bearer(value: &str) -> Option<String> {
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

fn query_token(uri: &Uri) -> Option<String> {
    let Query(query) = Query::<TokenQuery>::try_from_uri(uri).ok()?;
    query.token.filter(|t| !t.is_empty())
}

impl<S> FromRequestParts<S> for Credentials
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::extract(&parts.headers, &parts.uri))
    }
}
