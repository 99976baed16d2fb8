//! Integration tests for the token issuance endpoints.

use chrono::{DateTime, Duration, Utc};
use http::StatusCode;

use crate::helpers::TestApp;

fn expires_in(body: &serde_json::Value) -> Duration {
    let expires_at: DateTime<Utc> = body["data"]["expires_at"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    expires_at - Utc::now()
}

#[tokio::test]
async fn test_owner_token_issued_for_owner() {
    let app = TestApp::new();
    let project = app.create_project("alice", "P").await;
    let id = project["id"].as_str().unwrap();

    let response = app
        .request(
            "POST",
            &format!("/api/projects/{id}/token"),
            None,
            &[("x-owner-id", "alice")],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["kind"], "owner_access");
    assert_eq!(response.body["data"]["project_id"], id);
    let remaining = expires_in(&response.body);
    assert!(remaining > Duration::days(6) && remaining <= Duration::days(7));
}

#[tokio::test]
async fn test_owner_token_needs_identity() {
    let app = TestApp::new();
    let project = app.create_project("alice", "P").await;
    let path = format!("/api/projects/{}/token", project["id"].as_str().unwrap());

    let anonymous = app.request("POST", &path, None, &[]).await;
    assert_eq!(anonymous.status, StatusCode::BAD_REQUEST);
    assert_eq!(anonymous.error_code(), "MISSING_IDENTIFIER");

    let stranger = app
        .request("POST", &path, None, &[("x-owner-id", "mallory")])
        .await;
    assert_eq!(stranger.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_share_link_token_issued_to_link_holder() {
    let app = TestApp::new();
    let project = app.create_project("alice", "P").await;
    let link = project["share_link"].as_str().unwrap();

    let response = app
        .request("POST", &format!("/api/share/{link}/token"), None, &[])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["kind"], "share_link_access");
    assert_eq!(response.body["data"]["project_id"], project["id"]);
    let remaining = expires_in(&response.body);
    assert!(remaining > Duration::days(29) && remaining <= Duration::days(30));
}

#[tokio::test]
async fn test_share_link_token_for_unknown_link() {
    let app = TestApp::new();
    let response = app
        .request("POST", "/api/share/0000000000000000/token", None, &[])
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "RESOURCE_NOT_FOUND");
}
