//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use sharehub_core::config::AppConfig;
use sharehub_store::MemoryProjectStore;

/// Signing secret used by every test app.
pub const TEST_SECRET: &str = "integration-test-secret-0123456789";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Store behind the router, for direct setup and inspection
    pub store: Arc<MemoryProjectStore>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with an empty store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = Some(TEST_SECRET.to_string());
        config.validate().expect("test config is valid");

        let store = Arc::new(MemoryProjectStore::new());
        let state = sharehub_api::AppState::new(config.clone(), store.clone())
            .expect("Failed to build app state");
        let router = sharehub_api::build_app(state);

        Self {
            router,
            store,
            config,
        }
    }

    /// Create a project owned by `owner` and return its JSON representation
    pub async fn create_project(&self, owner: &str, title: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/api/projects",
                Some(serde_json::json!({ "title": title })),
                &[("x-owner-id", owner)],
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Project creation failed: {:?}",
            response.body
        );
        response.body["data"].clone()
    }

    /// Request a token from `path` and return the token string
    pub async fn issue_token(&self, path: &str, headers: &[(&str, &str)]) -> String {
        let response = self.request("POST", path, None, headers).await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Token issuance failed: {:?}",
            response.body
        );
        response.body["data"]["token"]
            .as_str()
            .expect("No token in response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Builds an `Authorization: Bearer` header value
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Error code of a failed request
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}
