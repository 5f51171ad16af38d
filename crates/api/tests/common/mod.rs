//! Common test utilities for integration tests.
//!
//! Every test gets its own in-memory SQLite store, so tests are isolated and
//! need no external database.

// Not every helper is used by every test binary.
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use fittrack_api::{
    app::create_app,
    config::{Config, DatabaseConfig, LoggingConfig, SecurityConfig, ServerConfig},
};
use persistence::Store;
use serde_json::Value;
use tower::ServiceExt;

pub const MEMORY_DATABASE_URL: &str = "sqlite::memory:";

/// Test configuration pointing at an in-memory database.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 30,
        },
        database: DatabaseConfig {
            url: MEMORY_DATABASE_URL.to_string(),
            connect_timeout_secs: 5,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig::default(),
    }
}

/// Create a fresh store backed by its own in-memory database.
pub fn create_test_store(config: &Config) -> Arc<Store> {
    Arc::new(Store::sqlite(config.store_config()))
}

/// Create a test application with a fresh store.
pub fn create_test_app() -> (Router, Arc<Store>) {
    let config = test_config();
    let store = create_test_store(&config);
    (create_app(config, store.clone()), store)
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a DELETE request.
pub fn delete_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a request with a JSON body.
pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Parse response body as JSON.
pub async fn parse_response_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(Value::Null)
}

/// Send a request and return the status with the parsed JSON body.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, parse_response_body(response).await)
}

/// Create a user through the API and return its id.
pub async fn create_user(app: &Router, name: &str) -> String {
    let (status, body) = send(
        app,
        json_request(
            Method::POST,
            "/api/users",
            serde_json::json!({
                "name": name,
                "avatar": "🏋",
                "color": "from-green-500 to-lime-500"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create user failed: {body}");
    body["id"].as_str().unwrap().to_string()
}

/// Workout log payload with sensible defaults.
pub fn workout_log_payload(user_id: &str, date: &str, time: &str) -> Value {
    serde_json::json!({
        "userId": user_id,
        "date": date,
        "time": time,
        "workoutName": "Upper Body",
        "durationMinutes": 40,
        "actualDurationSeconds": 2450,
        "totalExercises": 6,
        "completedExercises": 5,
        "completionRate": 83,
        "isCustomWorkout": false
    })
}
