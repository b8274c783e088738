//! Shared test helpers for integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use serde_json::Value;
use tower::ServiceExt;

use daylog_api::{AppState, build_app};
use daylog_auth::JwtEncoder;
use daylog_core::config::{AppConfig, DatabaseBackend};
use daylog_core::result::AppResult;
use daylog_core::traits::{Clock, FixedClock};
use daylog_core::types::UserId;
use daylog_database::Database;
use daylog_service::{EventListener, EventNotifier, LogCreated, TracingListener};

/// Counts `LogCreated` events.
#[derive(Debug, Default)]
pub struct CountingListener {
    count: AtomicUsize,
}

impl CountingListener {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventListener for CountingListener {
    fn name(&self) -> &'static str {
        "counting"
    }

    async fn on_log_created(&self, _event: &LogCreated) -> AppResult<()> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// A registered user and a bearer token for them.
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: UserId,
    pub token: String,
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    /// Events seen by the notifier
    pub events: Arc<CountingListener>,
}

/// The frozen "today" every test runs on.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 6, 15).unwrap()
}

impl TestApp {
    /// Fresh app over an empty in-memory store.
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.backend = DatabaseBackend::Memory;
        config.auth.jwt_secret = "integration-secret".to_string();
        config.auth.hash_memory_kib = 1024;
        config.auth.hash_iterations = 1;

        let clock: Arc<dyn Clock> = Arc::new(FixedClock::on(today()));
        let database = Database::in_memory(Arc::clone(&clock));
        let events = Arc::new(CountingListener::default());
        let notifier = EventNotifier::new()
            .with(Arc::new(TracingListener))
            .with(events.clone());

        let state = AppState::new(config.clone(), database, clock, notifier)
            .expect("Failed to build app state");

        Self {
            router: build_app(state),
            config,
            events,
        }
    }

    /// Register through the API and mint a token for the new user.
    pub async fn register(&self, name: &str, password: &str) -> TestUser {
        let response = self
            .request(
                "POST",
                "/api/users",
                Some(serde_json::json!({ "name": name, "password": password })),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );

        let id: UserId = response.body["data"]["id"]
            .as_str()
            .and_then(|s| s.parse().ok())
            .expect("No user id in registration response");
        let (token, _) = JwtEncoder::new(&self.config.auth)
            .generate_access_token(id, name)
            .expect("Failed to mint token");

        TestUser { id, token }
    }

    /// Create a log for a user, asserting success; returns the log id.
    pub async fn create_log(&self, user: &TestUser, text: &str, date: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/logs",
                Some(serde_json::json!({ "text": text, "date": date })),
                Some(&user.token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"]["id"]
            .as_str()
            .expect("No log id in response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.request_raw(method, path, body_str, token).await
    }

    /// Make an HTTP request with a verbatim body
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        body_str: String,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
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

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
