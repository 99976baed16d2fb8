//! Request/response logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{Span, debug_span, info};

/// Placeholder logged in place of a share link.
const REDACTED_LINK: &str = "{share_link}";

/// Logs request method, path, status, and duration.
///
/// The query string is left out since it may carry a bearer token, and
/// share links in the path are redacted.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = redacted_path(request.uri().path());
    let start = Instant::now();

    let response = next.run(request).await;

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "HTTP request"
    );

    response
}

/// Span for `TraceLayer`, carrying the same redacted path as the request log.
pub fn request_span(request: &Request) -> Span {
    debug_span!(
        "request",
        method = %request.method(),
        path = %redacted_path(request.uri().path()),
    )
}

/// Replaces the segment after `share/` with a placeholder.
pub fn redacted_path(path: &str) -> String {
    let mut previous = "";
    path.split('/')
        .map(|segment| {
            let out = if previous == "share" && !segment.is_empty() {
                REDACTED_LINK
            } else {
                segment
            };
            previous = segment;
            out
        })
        .collect::<Vec<_>>()
        .join("/")
}
