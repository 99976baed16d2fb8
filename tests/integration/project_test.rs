//! Integration tests for project management and share-link views.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_project_returns_owner_view() {
    let app = TestApp::new();
    let project = app.create_project("alice", "Holiday photos").await;

    assert_eq!(project["title"], "Holiday photos");
    assert_eq!(project["owner_id"], "alice");
    assert_eq!(project["is_owner"], true);
    assert_eq!(project["access_mode"], "owner");
    assert_eq!(project["share_link"].as_str().unwrap().len(), 16);
    assert_eq!(app.store.len(), 1);
}

#[tokio::test]
async fn test_create_project_requires_owner_header() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/projects",
            Some(serde_json::json!({ "title": "T" })),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "MISSING_IDENTIFIER");
}

#[tokio::test]
async fn test_create_project_rejects_bad_owner_id() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/projects",
            Some(serde_json::json!({ "title": "T" })),
            &[("x-owner-id", "alice smith")],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
    assert_eq!(response.body["details"][0]["field"], "owner_id");
}

#[tokio::test]
async fn test_create_project_reports_every_bad_field() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/projects",
            Some(serde_json::json!({
                "title": "",
                "description": "x".repeat(2001),
            })),
            &[("x-owner-id", "alice")],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let fields: Vec<&str> = response.body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["description", "title"]);
}

#[tokio::test]
async fn test_create_project_escapes_markup() {
    let app = TestApp::new();
    let project = app
        .create_project("alice", "<script>alert(1)</script>")
        .await;
    assert_eq!(project["title"], "&lt;script&gt;alert(1)&lt;/script&gt;");
}

#[tokio::test]
async fn test_owner_reads_project() {
    let app = TestApp::new();
    let project = app.create_project("alice", "P").await;
    let path = format!("/api/projects/{}", project["id"].as_str().unwrap());

    let response = app
        .request("GET", &path, None, &[("x-owner-id", "alice")])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["is_owner"], true);
    assert_eq!(response.body["data"]["share_link"], project["share_link"]);
}

#[tokio::test]
async fn test_read_without_credentials_is_missing_identifier() {
    let app = TestApp::new();
    let project = app.create_project("alice", "P").await;
    let path = format!("/api/projects/{}", project["id"].as_str().unwrap());

    let response = app.request("GET", &path, None, &[]).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "MISSING_IDENTIFIER");
}

#[tokio::test]
async fn test_other_owner_is_denied() {
    let app = TestApp::new();
    let project = app.create_project("alice", "P").await;
    let path = format!("/api/projects/{}", project["id"].as_str().unwrap());

    let response = app
        .request("GET", &path, None, &[("x-owner-id", "mallory")])
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), "ACCESS_DENIED");
}

#[tokio::test]
async fn test_unknown_project_is_not_found() {
    let app = TestApp::new();
    let response = app
        .request(
            "GET",
            "/api/projects/6f1c2a0e-3b7d-4d3a-9a55-2f5e8f0b9c11",
            None,
            &[("x-owner-id", "alice")],
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_malformed_project_id_is_rejected() {
    let app = TestApp::new();
    let response = app
        .request(
            "GET",
            "/api/projects/not-a-project",
            None,
            &[("x-owner-id", "alice")],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
    assert_eq!(response.body["details"][0]["field"], "project_id");
}

#[tokio::test]
async fn test_owner_updates_project() {
    let app = TestApp::new();
    let project = app.create_project("alice", "P").await;
    let path = format!("/api/projects/{}", project["id"].as_str().unwrap());

    let response = app
        .request(
            "PATCH",
            &path,
            Some(serde_json::json!({ "title": "Renamed", "description": "Notes & more" })),
            &[("x-owner-id", "alice")],
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "Renamed");
    assert_eq!(response.body["data"]["description"], "Notes &amp; more");

    let cleared = app
        .request(
            "PATCH",
            &path,
            Some(serde_json::json!({ "description": null })),
            &[("x-owner-id", "alice")],
        )
        .await;
    assert_eq!(cleared.status, StatusCode::OK);
    assert!(cleared.body["data"]["description"].is_null());
    assert_eq!(cleared.body["data"]["title"], "Renamed");
}

#[tokio::test]
async fn test_update_requires_a_field() {
    let app = TestApp::new();
    let project = app.create_project("alice", "P").await;
    let path = format!("/api/projects/{}", project["id"].as_str().unwrap());

    let response = app
        .request(
            "PATCH",
            &path,
            Some(serde_json::json!({})),
            &[("x-owner-id", "alice")],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_link_holder_cannot_mutate() {
    let app = TestApp::new();
    let project = app.create_project("alice", "P").await;
    let path = format!("/api/projects/{}", project["id"].as_str().unwrap());

    let response = app
        .request(
            "PATCH",
            &path,
            Some(serde_json::json!({ "title": "Hijacked" })),
            &[("x-owner-id", "mallory")],
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_owner_deletes_project() {
    let app = TestApp::new();
    let project = app.create_project("alice", "P").await;
    let path = format!("/api/projects/{}", project["id"].as_str().unwrap());

    let response = app
        .request("DELETE", &path, None, &[("x-owner-id", "alice")])
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(app.store.is_empty());

    let again = app
        .request("GET", &path, None, &[("x-owner-id", "alice")])
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_shared_view_hides_owner_fields() {
    let app = TestApp::new();
    let project = app.create_project("alice", "P").await;
    let path = format!("/api/share/{}", project["share_link"].as_str().unwrap());

    let response = app.request("GET", &path, None, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["id"], project["id"]);
    assert_eq!(data["is_owner"], false);
    assert_eq!(data["access_mode"], "share_link");
    assert!(data.get("share_link").is_none());
    assert!(data.get("owner_id").is_none());
}

#[tokio::test]
async fn test_shared_view_recognises_owner() {
    let app = TestApp::new();
    let project = app.create_project("alice", "P").await;
    let path = format!("/api/share/{}", project["share_link"].as_str().unwrap());

    let response = app
        .request("GET", &path, None, &[("x-owner-id", "alice")])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["is_owner"], true);
    assert_eq!(response.body["data"]["share_link"], project["share_link"]);
}

#[tokio::test]
async fn test_shared_view_rejects_malformed_link() {
    let app = TestApp::new();
    let response = app
        .request("GET", "/api/share/abcd1234efgh567!", None, &[])
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["details"][0]["code"], "charset");
}

#[tokio::test]
async fn test_rotation_retires_old_link() {
    let app = TestApp::new();
    let project = app.create_project("alice", "P").await;
    let id = project["id"].as_str().unwrap();
    let old_link = project["share_link"].as_str().unwrap();

    let rotated = app
        .request(
            "POST",
            &format!("/api/projects/{id}/share-link/rotate"),
            None,
            &[("x-owner-id", "alice")],
        )
        .await;
    assert_eq!(rotated.status, StatusCode::OK);
    let new_link = rotated.body["data"]["share_link"].as_str().unwrap();
    assert_ne!(new_link, old_link);

    let old = app
        .request("GET", &format!("/api/share/{old_link}"), None, &[])
        .await;
    assert_eq!(old.status, StatusCode::NOT_FOUND);

    let new = app
        .request("GET", &format!("/api/share/{new_link}"), None, &[])
        .await;
    assert_eq!(new.status, StatusCode::OK);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/health", None, &[]).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}
