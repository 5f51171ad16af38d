//! Integration tests for the workout package endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{create_test_app, delete_request, get_request, json_request, send};
use serde_json::{json, Value};

fn package_payload(name: &str) -> Value {
    json!({
        "name": name,
        "exercises": [
            {"name": "Bench Press", "sets": 4, "reps": 8, "weight": 60},
            {"name": "Incline Fly", "sets": 3, "reps": "10-12"},
            {"name": "Plank", "duration": "60s", "notes": "keep hips level"}
        ],
        "focus": "Chest",
        "duration": "45 min",
        "createdBy": "akshay",
        "createdAt": "2024-04-01T08:00:00.000Z"
    })
}

#[tokio::test]
async fn test_create_and_list_package_round_trip() {
    let (app, _store) = create_test_app();
    let payload = package_payload("Push Day");

    let (status, body) = send(
        &app,
        json_request(Method::POST, "/api/workout-packages", payload.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Workout package added successfully");
    let id = body["id"].as_str().unwrap().to_string();
    assert!(uuid::Uuid::parse_str(&id).is_ok());

    let (status, body) = send(&app, get_request("/api/workout-packages")).await;
    assert_eq!(status, StatusCode::OK);
    let packages = body.as_array().unwrap();
    assert_eq!(packages.len(), 1);

    let package = &packages[0];
    assert_eq!(package["id"], id);
    assert_eq!(package["name"], "Push Day");
    assert_eq!(package["exercises"], payload["exercises"]);
    assert_eq!(package["focus"], "Chest");
    assert_eq!(package["duration"], "45 min");
    assert_eq!(package["createdBy"], "akshay");
    assert_eq!(package["createdAt"], "2024-04-01T08:00:00.000Z");
}

#[tokio::test]
async fn test_list_packages_newest_first() {
    let (app, _store) = create_test_app();

    for (name, created_at) in [
        ("Old", "2024-01-01T00:00:00.000Z"),
        ("New", "2024-06-01T00:00:00.000Z"),
    ] {
        let mut payload = package_payload(name);
        payload["createdAt"] = json!(created_at);
        send(&app, json_request(Method::POST, "/api/workout-packages", payload)).await;
    }

    let (_, body) = send(&app, get_request("/api/workout-packages")).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["New", "Old"]);
}

#[tokio::test]
async fn test_create_package_optional_fields() {
    let (app, _store) = create_test_app();

    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/api/workout-packages",
            json!({
                "name": "Quick",
                "exercises": [{"name": "Burpee"}],
                "createdBy": "guest"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, get_request("/api/workout-packages")).await;
    let package = &body[0];
    assert!(package["focus"].is_null());
    assert!(package["duration"].is_null());
    assert!(package["createdAt"].as_str().unwrap().starts_with("20"));
}

#[tokio::test]
async fn test_create_package_missing_fields() {
    let (app, _store) = create_test_app();

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/workout-packages",
            json!({"focus": "Legs"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Missing required fields: name, exercises, createdBy"
    );
}

#[tokio::test]
async fn test_create_package_rejects_unnamed_exercise() {
    let (app, _store) = create_test_app();
    let mut payload = package_payload("Broken");
    payload["exercises"] = json!([{"name": "Squat"}, {"name": ""}]);

    let (status, body) = send(
        &app,
        json_request(Method::POST, "/api/workout-packages", payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "exercises[1] must have a name");
}

#[tokio::test]
async fn test_create_package_rejects_non_list_exercises() {
    let (app, _store) = create_test_app();
    let mut payload = package_payload("Broken");
    payload["exercises"] = json!("Squat x10");

    let (status, _) = send(
        &app,
        json_request(Method::POST, "/api/workout-packages", payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_package() {
    let (app, _store) = create_test_app();
    let (_, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/workout-packages",
            package_payload("Temp"),
        ),
    )
    .await;
    let id = body["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        delete_request(&format!("/api/workout-packages?id={id}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Workout package deleted successfully");

    let (status, body) = send(
        &app,
        delete_request(&format!("/api/workout-packages?id={id}")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Workout package not found");
}

#[tokio::test]
async fn test_delete_package_missing_id() {
    let (app, _store) = create_test_app();

    let (status, _) = send(&app, delete_request("/api/workout-packages?id=")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_packages_unsupported_method() {
    let (app, _store) = create_test_app();

    let (status, body) = send(
        &app,
        json_request(Method::PATCH, "/api/workout-packages", json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Method not allowed");
}
