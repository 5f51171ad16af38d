//! Integration tests for the user endpoints.
//!
//! Tests cover:
//! - GET /api/users
//! - POST /api/users
//! - DELETE /api/users?id=<id>
//! - Cascade of workout logs on user deletion

mod common;

use axum::http::{header, Method, StatusCode};
use common::{
    create_test_app, create_user, delete_request, get_request, json_request, send,
    workout_log_payload,
};
use fake::{faker::name::en::FirstName, Fake};
use serde_json::json;

#[tokio::test]
async fn test_list_users_returns_default_users() {
    let (app, _store) = create_test_app();

    let (status, body) = send(&app, get_request("/api/users")).await;

    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["id"], "akshay");
    assert_eq!(users[0]["name"], "Akshay");
    assert_eq!(users[1]["id"], "guest");
    assert!(users[1]["avatar"].is_string());
    assert!(users[1]["color"].is_string());
}

#[tokio::test]
async fn test_create_user_success() {
    let (app, _store) = create_test_app();

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/users",
            json!({"name": "Sam", "avatar": "🏋", "color": "from-green-500 to-lime-500"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({"message": "User added successfully", "id": "sam"})
    );

    let (_, body) = send(&app, get_request("/api/users")).await;
    let sam = body
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["id"] == "sam")
        .cloned()
        .unwrap();
    assert_eq!(
        sam,
        json!({"id": "sam", "name": "Sam", "avatar": "🏋", "color": "from-green-500 to-lime-500"})
    );
}

#[tokio::test]
async fn test_create_user_with_generated_name() {
    let (app, _store) = create_test_app();
    let name: String = FirstName().fake();

    let id = create_user(&app, &format!("{name} Tester")).await;

    assert_eq!(id, shared::slug::derive_user_id(&format!("{name} Tester")));
}

#[tokio::test]
async fn test_create_user_duplicate_id_conflicts() {
    let (app, _store) = create_test_app();
    create_user(&app, "Sam").await;

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/users",
            json!({"name": "SAM", "avatar": "x", "color": "y"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("sam"));
}

#[tokio::test]
async fn test_create_default_user_name_conflicts() {
    let (app, _store) = create_test_app();

    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/api/users",
            json!({"name": "Guest", "avatar": "x", "color": "y"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_user_missing_fields() {
    let (app, _store) = create_test_app();

    let (status, body) = send(
        &app,
        json_request(Method::POST, "/api/users", json!({"name": "Sam", "color": " "})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing required fields: avatar, color"}));
}

#[tokio::test]
async fn test_create_user_malformed_json() {
    let (app, _store) = create_test_app();

    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{\"name\":"))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_delete_default_user_forbidden() {
    let (app, _store) = create_test_app();

    for id in ["akshay", "guest"] {
        let (status, body) = send(&app, delete_request(&format!("/api/users?id={id}"))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, json!({"error": "Cannot delete default system users."}));
    }

    let (_, body) = send(&app, get_request("/api/users")).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_delete_user_success() {
    let (app, _store) = create_test_app();
    create_user(&app, "Sam").await;

    let (status, body) = send(&app, delete_request("/api/users?id=sam")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "User deleted successfully"}));

    let (_, body) = send(&app, get_request("/api/users")).await;
    assert!(body.as_array().unwrap().iter().all(|u| u["id"] != "sam"));
}

#[tokio::test]
async fn test_delete_user_not_found() {
    let (app, _store) = create_test_app();

    let (status, body) = send(&app, delete_request("/api/users?id=nobody")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "User not found"}));
}

#[tokio::test]
async fn test_delete_user_missing_id() {
    let (app, _store) = create_test_app();

    let (status, body) = send(&app, delete_request("/api/users")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing required fields: id"}));
}

#[tokio::test]
async fn test_delete_user_cascades_workout_logs() {
    let (app, _store) = create_test_app();
    create_user(&app, "Sam").await;

    for (date, time) in [("2024-03-01", "07:00"), ("2024-03-02", "07:15")] {
        let (status, _) = send(
            &app,
            json_request(
                Method::POST,
                "/api/workout-logs",
                workout_log_payload("sam", date, time),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
    send(
        &app,
        json_request(
            Method::POST,
            "/api/workout-logs",
            workout_log_payload("guest", "2024-03-01", "09:00"),
        ),
    )
    .await;

    let (status, _) = send(&app, delete_request("/api/users?id=sam")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, get_request("/api/workout-logs")).await;
    let logs = body.as_array().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["userId"], "guest");
}

#[tokio::test]
async fn test_users_unsupported_method() {
    let (app, _store) = create_test_app();

    let response = tower::ServiceExt::oneshot(
        app.clone(),
        json_request(Method::PUT, "/api/users", json!({})),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let allow = response.headers()[header::ALLOW].to_str().unwrap();
    assert!(allow.contains("GET"));
    assert!(allow.contains("POST"));
    assert!(allow.contains("DELETE"));
}
