//! Log endpoints: validation, create guard, ownership, soft delete, today.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_log() {
    let app = TestApp::new();
    let joe = app.register("joe doe", "secret").await;

    let response = app
        .request(
            "POST",
            "/api/logs",
            Some(serde_json::json!({ "text": "Went hiking", "date": "2021-06-15" })),
            Some(&joe.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let data = &response.body["data"];
    assert_eq!(data["text"], "Went hiking");
    assert_eq!(data["date"], "2021-06-15");
    assert_eq!(data["user_id"], joe.id.to_string());
    assert!(data["deleted_at"].is_null());
    assert_eq!(app.events.count(), 1);
}

#[tokio::test]
async fn test_text_and_date_are_required() {
    let app = TestApp::new();
    let joe = app.register("joe", "secret").await;

    let response = app
        .request("POST", "/api/logs", Some(serde_json::json!({})), Some(&joe.token))
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let details = &response.body["details"];
    assert_eq!(details["text"][0]["code"], "required");
    assert_eq!(details["text"][0]["message"], "The text field is required.");
    assert_eq!(details["date"][0]["code"], "required");
    assert_eq!(app.events.count(), 0);
}

#[tokio::test]
async fn test_empty_bodies_report_required_fields() {
    let app = TestApp::new();
    let joe = app.register("joe", "secret").await;

    for body in ["", "[]", "null"] {
        let response = app
            .request_raw("POST", "/api/logs", body.to_string(), Some(&joe.token))
            .await;

        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY, "{body:?}");
        let details = &response.body["details"];
        assert_eq!(details["text"][0]["code"], "required", "{body:?}");
        assert_eq!(details["date"][0]["code"], "required", "{body:?}");
    }
    assert_eq!(app.events.count(), 0);
}

#[tokio::test]
async fn test_wrong_field_type_keeps_other_errors() {
    let app = TestApp::new();
    let joe = app.register("joe", "secret").await;

    let response = app
        .request(
            "POST",
            "/api/logs",
            Some(serde_json::json!({ "text": 5, "date": "nope" })),
            Some(&joe.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let details = &response.body["details"];
    assert_eq!(details["text"][0]["code"], "string");
    assert_eq!(details["text"][0]["message"], "The text must be a string.");
    assert_eq!(details["date"][0]["code"], "date");
}

#[tokio::test]
async fn test_malformed_json_is_field_keyed() {
    let app = TestApp::new();
    let joe = app.register("joe", "secret").await;

    let response = app
        .request_raw("POST", "/api/logs", "{\"text\":".to_string(), Some(&joe.token))
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(response.body["details"]["body"][0]["code"], "json");
}

#[tokio::test]
async fn test_invalid_date() {
    let app = TestApp::new();
    let joe = app.register("joe", "secret").await;

    let response = app
        .request(
            "POST",
            "/api/logs",
            Some(serde_json::json!({ "text": "hello", "date": "yesterday-ish" })),
            Some(&joe.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let details = &response.body["details"];
    assert_eq!(details["date"][0]["code"], "date");
    assert_eq!(details["date"][0]["message"], "The date is not a valid date.");
    assert!(details.get("text").is_none());
}

#[tokio::test]
async fn test_blocked_word() {
    let app = TestApp::new();
    let joe = app.register("joe", "secret").await;

    let response = app
        .request(
            "POST",
            "/api/logs",
            Some(serde_json::json!({ "text": "What a SHIT day", "date": "2021-06-15" })),
            Some(&joe.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.body["details"]["text"][0]["message"],
        "Bad word! Don't use SHIT. Please!!!"
    );
    assert_eq!(app.events.count(), 0);
}

#[tokio::test]
async fn test_blocked_name_is_unauthorized() {
    let app = TestApp::new();
    let jane = app.register("jane doe", "secret").await;

    let response = app
        .request(
            "POST",
            "/api/logs",
            Some(serde_json::json!({ "text": "hello", "date": "2021-06-15" })),
            Some(&jane.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "You may not create logs.");
    assert_eq!(app.events.count(), 0);

    let list = app.request("GET", "/api/logs", None, Some(&jane.token)).await;
    assert_eq!(list.body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_missing_or_bad_token() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/logs", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.request("GET", "/api/logs", None, Some("garbage")).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_only_owner_may_delete() {
    let app = TestApp::new();
    let joe = app.register("joe", "secret").await;
    let ann = app.register("ann", "secret").await;
    let id = app.create_log(&joe, "mine", "2021-06-15").await;
    let path = format!("/api/logs/{id}");

    let response = app.request("DELETE", &path, None, Some(&ann.token)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let still_there = app.request("GET", &path, None, Some(&joe.token)).await;
    assert_eq!(still_there.status, StatusCode::OK);

    let response = app.request("DELETE", &path, None, Some(&joe.token)).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let gone = app.request("GET", &path, None, Some(&joe.token)).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);

    let trashed = app
        .request("GET", &format!("{path}?with_trashed=true"), None, Some(&joe.token))
        .await;
    assert_eq!(trashed.status, StatusCode::OK);
    assert!(!trashed.body["data"]["deleted_at"].is_null());
}

#[tokio::test]
async fn test_restore() {
    let app = TestApp::new();
    let joe = app.register("joe", "secret").await;
    let ann = app.register("ann", "secret").await;
    let id = app.create_log(&joe, "mine", "2021-06-15").await;
    app.request("DELETE", &format!("/api/logs/{id}"), None, Some(&joe.token))
        .await;

    let restore = format!("/api/logs/{id}/restore");
    let response = app.request("POST", &restore, None, Some(&ann.token)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app.request("POST", &restore, None, Some(&joe.token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["deleted_at"].is_null());
}

#[tokio::test]
async fn test_update_is_owner_only() {
    let app = TestApp::new();
    let joe = app.register("joe", "secret").await;
    let ann = app.register("ann", "secret").await;
    let id = app.create_log(&joe, "draft", "2021-06-15").await;
    let path = format!("/api/logs/{id}");
    let edit = serde_json::json!({ "text": "final" });

    let response = app.request("PUT", &path, Some(edit.clone()), Some(&ann.token)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app.request("PUT", &path, Some(edit), Some(&joe.token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["text"], "final");
    assert_eq!(response.body["data"]["date"], "2021-06-15");
}

#[tokio::test]
async fn test_list_today() {
    let app = TestApp::new();
    let joe = app.register("joe", "secret").await;
    let ann = app.register("ann", "secret").await;

    app.create_log(&joe, "one", "2021-06-15").await;
    app.create_log(&joe, "two", "2021-06-15 08:30:00").await;
    app.create_log(&joe, "old", "2021-06-14").await;
    app.create_log(&ann, "theirs", "2021-06-15").await;
    let deleted = app.create_log(&joe, "gone", "2021-06-15").await;
    app.request("DELETE", &format!("/api/logs/{deleted}"), None, Some(&joe.token))
        .await;

    let today = app
        .request("GET", "/api/logs?today=true", None, Some(&joe.token))
        .await;
    assert_eq!(today.status, StatusCode::OK);
    let logs = today.body["data"].as_array().unwrap();
    assert_eq!(logs.len(), 2);
    assert!(logs.iter().all(|l| l["date"] == "2021-06-15"));

    let all = app.request("GET", "/api/logs", None, Some(&joe.token)).await;
    assert_eq!(all.body["data"].as_array().unwrap().len(), 3);

    let with_trashed = app
        .request("GET", "/api/logs?with_trashed=true", None, Some(&joe.token))
        .await;
    assert_eq!(with_trashed.body["data"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_unknown_log() {
    let app = TestApp::new();
    let joe = app.register("joe", "secret").await;

    let response = app
        .request("GET", "/api/logs/not-a-uuid", None, Some(&joe.token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "DELETE",
            &format!("/api/logs/{}", uuid::Uuid::new_v4()),
            None,
            Some(&joe.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
