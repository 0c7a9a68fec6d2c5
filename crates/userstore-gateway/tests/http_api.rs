//! `/api/users` end to end through the router, in-process.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use userstore_gateway::{app_state::AppState, config::GatewayConfig, router};

fn app() -> Router {
    router::build_router(AppState::new(GatewayConfig::default()))
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };

    let resp = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

async fn create(app: &Router, name: &str, email: &str, age: i32) -> Value {
    let (status, body) = call(
        app,
        Method::POST,
        "/api/users",
        Some(json!({ "name": name, "email": email, "age": age })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

#[tokio::test]
async fn create_returns_201_with_id() {
    let app = app();
    let body = create(&app, "Test User", "test@example.com", 25).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Test User");
    assert_eq!(body["email"], "test@example.com");
    assert_eq!(body["age"], 25);
}

#[tokio::test]
async fn create_invalid_returns_400() {
    let app = app();
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "name": "", "email": "test@example.com", "age": 25 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_INPUT");

    let (_, all) = call(&app, Method::GET, "/api/users", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn create_with_missing_fields_is_invalid_input() {
    let app = app();
    let (status, body) =
        call(&app, Method::POST, "/api/users", Some(json!({ "name": "Ana" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_INPUT");
}

#[tokio::test]
async fn null_fields_are_invalid_input() {
    let app = app();
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "name": null, "email": "test@example.com", "age": 25 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_INPUT");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_by_id_round_trip_and_404() {
    let app = app();
    let created = create(&app, "Test User", "test@example.com", 25).await;
    let id = created["id"].as_u64().unwrap();

    let (status, body) = call(&app, Method::GET, &format!("/api/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);

    let (status, body) = call(&app, Method::GET, "/api/users/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/api/users/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn list_returns_array() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/api/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_array());

    create(&app, "Juan", "juan@example.com", 30).await;
    create(&app, "María", "maria@example.com", 25).await;
    let (_, body) = call(&app, Method::GET, "/api/users", None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn update_keeps_path_id_and_maps_errors() {
    let app = app();
    let created = create(&app, "Juan", "juan@example.com", 30).await;
    let id = created["id"].as_u64().unwrap();

    let (status, body) = call(
        &app,
        Method::PUT,
        &format!("/api/users/{id}"),
        Some(json!({ "id": 999, "name": "Juan Actualizado", "email": "juan.updated@example.com", "age": 31 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Juan Actualizado");
    assert_eq!(body["age"], 31);

    let (status, _) = call(
        &app,
        Method::PUT,
        "/api/users/999",
        Some(json!({ "name": "Juan", "email": "juan@example.com", "age": 30 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = call(
        &app,
        Method::PUT,
        &format!("/api/users/{id}"),
        Some(json!({ "name": "Juan", "email": "no-at-sign", "age": 30 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_INPUT");
}

#[tokio::test]
async fn delete_then_get_is_404() {
    let app = app();
    let created = create(&app, "Test User", "test@example.com", 25).await;
    let id = created["id"].as_u64().unwrap();

    let (status, body) = call(&app, Method::DELETE, &format!("/api/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "user deleted");

    let (status, _) = call(&app, Method::GET, &format!("/api/users/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, Method::DELETE, &format!("/api/users/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_by_name() {
    let app = app();
    create(&app, "Juan García", "juan@example.com", 30).await;
    create(&app, "María López", "maria@example.com", 25).await;
    create(&app, "Juan Pérez", "juanperez@example.com", 35).await;

    let (status, body) = call(&app, Method::GET, "/api/users/search?name=juan", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = call(&app, Method::GET, "/api/users/search?name=MARIA", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "María López");

    let (_, body) = call(&app, Method::GET, "/api/users/search?name=", None).await;
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (status, _) = call(&app, Method::GET, "/api/users/search", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_and_readiness() {
    let state = AppState::new(GatewayConfig::default());
    let app = router::build_router(state.clone());

    let (status, body) = call(&app, Method::GET, "/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("ok".into()));

    let (status, _) = call(&app, Method::GET, "/readyz", None).await;
    assert_eq!(status, StatusCode::OK);

    state.set_draining();
    let (status, body) = call(&app, Method::GET, "/readyz", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, Value::String("draining".into()));
}
