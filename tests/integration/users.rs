//! User endpoints: registration transforms and the audit trail.

use axum::http::StatusCode;
use serde_json::Value;

use crate::helpers::{TestApp, TestUser};

async fn audits(app: &TestApp, user: &TestUser) -> Vec<Value> {
    let response = app
        .request("GET", "/api/users/me/audits", None, Some(&user.token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    response.body["data"].as_array().cloned().unwrap_or_default()
}

fn updates(entries: &[Value]) -> Vec<&Value> {
    entries.iter().filter(|e| e["event"] == "updated").collect()
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_register_title_cases_and_hides_password() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({ "name": "joe doe", "password": "secret" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["name"], "Joe Doe");
    assert!(response.body["data"].get("password").is_none());
    assert!(response.body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_validation() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/users",
            Some(serde_json::json!({ "name": "", "password": "abc" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["details"]["name"][0]["code"], "required");
    assert_eq!(response.body["details"]["password"][0]["code"], "min");
}

#[tokio::test]
async fn test_profile() {
    let app = TestApp::new();
    let joe = app.register("joe doe", "secret").await;

    let response = app.request("GET", "/api/users/me", None, Some(&joe.token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["id"], joe.id.to_string());
    assert_eq!(response.body["data"]["name"], "Joe Doe");
}

#[tokio::test]
async fn test_registration_is_audited() {
    let app = TestApp::new();
    let joe = app.register("joe", "secret").await;

    let entries = audits(&app, &joe).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["event"], "created");
    assert_eq!(entries[0]["attribute"], "name");
    assert_eq!(entries[0]["new_value"], "joe");
    assert!(entries[0]["old_value"].is_null());
}

#[tokio::test]
async fn test_name_change_adds_one_entry() {
    let app = TestApp::new();
    let joe = app.register("joe", "secret").await;

    let response = app
        .request(
            "PUT",
            "/api/users/me",
            Some(serde_json::json!({ "name": "joe doe" })),
            Some(&joe.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "Joe Doe");

    let entries = audits(&app, &joe).await;
    assert_eq!(entries.len(), 2);
    let changes = updates(&entries);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0]["attribute"], "name");
    assert_eq!(changes[0]["old_value"], "joe");
    assert_eq!(changes[0]["new_value"], "joe doe");
    assert_eq!(changes[0]["actor_id"], joe.id.to_string());
}

#[tokio::test]
async fn test_bulk_change_adds_entry_per_attribute() {
    let app = TestApp::new();
    let joe = app.register("joe", "secret").await;

    let response = app
        .request(
            "PUT",
            "/api/users/me",
            Some(serde_json::json!({ "name": "ann", "password": "another" })),
            Some(&joe.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let entries = audits(&app, &joe).await;
    let changes = updates(&entries);
    assert_eq!(changes.len(), 2);
    assert!(changes.iter().any(|e| e["attribute"] == "name"));
    let password = changes.iter().find(|e| e["attribute"] == "password").unwrap();
    assert!(password["old_value"].is_null());
    assert!(password["new_value"].is_null());
}

#[tokio::test]
async fn test_noop_update_adds_nothing() {
    let app = TestApp::new();
    let joe = app.register("joe", "secret").await;

    let response = app
        .request(
            "PUT",
            "/api/users/me",
            Some(serde_json::json!({ "name": "joe", "password": "secret" })),
            Some(&joe.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    assert_eq!(audits(&app, &joe).await.len(), 1);
}

#[tokio::test]
async fn test_renamed_into_blocked_name_cannot_create() {
    let app = TestApp::new();
    let user = app.register("joe", "secret").await;

    app.request(
        "PUT",
        "/api/users/me",
        Some(serde_json::json!({ "name": "jane doe" })),
        Some(&user.token),
    )
    .await;

    let response = app
        .request(
            "POST",
            "/api/logs",
            Some(serde_json::json!({ "text": "hello", "date": "2021-06-15" })),
            Some(&user.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
