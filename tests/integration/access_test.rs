//! Integration tests for bearer-token access across the three checks.

use http::StatusCode;

use sharehub_auth::{AccessGrant, TokenCodec};

use crate::helpers::{TestApp, bearer};

async fn project_with_link_token(app: &TestApp) -> (String, String, String) {
    let project = app.create_project("alice", "P").await;
    let id = project["id"].as_str().unwrap().to_string();
    let link = project["share_link"].as_str().unwrap().to_string();
    let token = app
        .issue_token(&format!("/api/share/{link}/token"), &[])
        .await;
    (id, link, token)
}

#[tokio::test]
async fn test_link_token_reads_by_id() {
    let app = TestApp::new();
    let (id, _, token) = project_with_link_token(&app).await;
    let auth = bearer(&token);

    let response = app
        .request(
            "GET",
            &format!("/api/projects/{id}"),
            None,
            &[("authorization", auth.as_str())],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["access_mode"], "share_link");
    assert_eq!(response.body["data"]["is_owner"], false);
}

#[tokio::test]
async fn test_link_token_from_query_and_fallback_header() {
    let app = TestApp::new();
    let (id, _, token) = project_with_link_token(&app).await;

    let by_query = app
        .request("GET", &format!("/api/projects/{id}?token={token}"), None, &[])
        .await;
    assert_eq!(by_query.status, StatusCode::OK);

    let by_header = app
        .request(
            "GET",
            &format!("/api/projects/{id}"),
            None,
            &[("x-access-token", token.as_str())],
        )
        .await;
    assert_eq!(by_header.status, StatusCode::OK);
}

#[tokio::test]
async fn test_link_token_cannot_mutate() {
    let app = TestApp::new();
    let (id, _, token) = project_with_link_token(&app).await;
    let auth = bearer(&token);

    let response = app
        .request(
            "DELETE",
            &format!("/api/projects/{id}"),
            None,
            &[("authorization", auth.as_str())],
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), "ACCESS_DENIED");
    assert_eq!(app.store.len(), 1);
}

#[tokio::test]
async fn test_owner_token_mutates() {
    let app = TestApp::new();
    let project = app.create_project("alice", "P").await;
    let id = project["id"].as_str().unwrap();
    let token = app
        .issue_token(
            &format!("/api/projects/{id}/token"),
            &[("x-owner-id", "alice")],
        )
        .await;
    let auth = bearer(&token);

    let response = app
        .request(
            "PATCH",
            &format!("/api/projects/{id}"),
            Some(serde_json::json!({ "title": "Via token" })),
            &[("authorization", auth.as_str())],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "Via token");
}

#[tokio::test]
async fn test_rotation_invalidates_link_token() {
    let app = TestApp::new();
    let (id, _, token) = project_with_link_token(&app).await;
    let auth = bearer(&token);

    let rotated = app
        .request(
            "POST",
            &format!("/api/projects/{id}/share-link/rotate"),
            None,
            &[("x-owner-id", "alice")],
        )
        .await;
    assert_eq!(rotated.status, StatusCode::OK);

    let response = app
        .request(
            "GET",
            &format!("/api/projects/{id}"),
            None,
            &[("authorization", auth.as_str())],
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_token_for_other_project_is_denied() {
    let app = TestApp::new();
    let (_, _, token) = project_with_link_token(&app).await;
    let other = app.create_project("alice", "Other").await;
    let auth = bearer(&token);

    let response = app
        .request(
            "GET",
            &format!("/api/projects/{}", other["id"].as_str().unwrap()),
            None,
            &[("authorization", auth.as_str())],
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_garbage_token_is_malformed() {
    let app = TestApp::new();
    let project = app.create_project("alice", "P").await;

    let response = app
        .request(
            "GET",
            &format!("/api/projects/{}", project["id"].as_str().unwrap()),
            None,
            &[("authorization", "Bearer not.a.token")],
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "MALFORMED_CREDENTIAL");
}

#[tokio::test]
async fn test_expired_token_is_reported_as_expired() {
    let app = TestApp::new();
    let project = app.create_project("alice", "P").await;
    let id = project["id"].as_str().unwrap();

    let codec = TokenCodec::new(&app.config.auth).unwrap();
    let expired = codec
        .issue(
            AccessGrant::owner(id, "alice"),
            chrono::Duration::seconds(-60),
        )
        .unwrap();
    let auth = bearer(&expired.token);

    let response = app
        .request(
            "GET",
            &format!("/api/projects/{id}"),
            None,
            &[("authorization", auth.as_str())],
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "EXPIRED_CREDENTIAL");
}

#[tokio::test]
async fn test_public_view_ignores_bad_token() {
    let app = TestApp::new();
    let project = app.create_project("alice", "P").await;

    let response = app
        .request(
            "GET",
            &format!("/api/share/{}", project["share_link"].as_str().unwrap()),
            None,
            &[("authorization", "Bearer not.a.token")],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["is_owner"], false);
}

#[tokio::test]
async fn test_owner_header_wins_over_link_token() {
    let app = TestApp::new();
    let (id, _, token) = project_with_link_token(&app).await;
    let auth = bearer(&token);

    let response = app
        .request(
            "GET",
            &format!("/api/projects/{id}"),
            None,
            &[("authorization", auth.as_str()), ("x-owner-id", "alice")],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["access_mode"], "owner");
}
