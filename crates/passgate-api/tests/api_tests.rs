//! API integration tests
//!
//! Drives the full router over the in-memory store: registration, login,
//! token-gated routes, and the role gate, end to end.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use passgate_api::auth::models::{User, UserRole};
use passgate_api::auth::MemoryUserStore;
use passgate_api::{create_router_for_testing, create_router_with_store};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Helper to create a test request
fn create_json_request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");

    match body {
        Some(json_body) => builder
            .body(Body::from(serde_json::to_string(&json_body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn bearer_request(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn register_body() -> Value {
    json!({
        "email": "a@b.com",
        "username": "user_01",
        "password": "abc123",
        "confirm_password": "abc123"
    })
}

/// Register user_01 and return their access token
async fn register_and_login(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(create_json_request(
            "POST",
            "/api/auth/register",
            Some(register_body()),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(create_json_request(
            "POST",
            "/api/auth/login",
            Some(json!({"username": "user_01", "password": "abc123"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    json["token"].as_str().unwrap().to_string()
}

// =============================================================================
// Health Check
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = create_router_for_testing();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["status"], "OK");
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_register_success_has_no_password_field() {
    let app = create_router_for_testing();

    let response = app
        .oneshot(create_json_request(
            "POST",
            "/api/auth/register",
            Some(register_body()),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = response_json(response).await;
    assert_eq!(json["user"]["username"], "user_01");
    assert_eq!(json["user"]["email"], "a@b.com");
    assert!(json["user"]["id"].is_string());
    assert!(json["user"].get("password").is_none());
    assert!(json["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_short_username_rejected() {
    let app = create_router_for_testing();

    let mut body = register_body();
    body["username"] = json!("ab");

    let response = app
        .oneshot(create_json_request("POST", "/api/auth/register", Some(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_mismatched_passwords_rejected() {
    let app = create_router_for_testing();

    let mut body = register_body();
    body["confirm_password"] = json!("abc124");

    let response = app
        .oneshot(create_json_request("POST", "/api/auth/register", Some(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_duplicate_rejected_generically() {
    let app = create_router_for_testing();

    let first = app
        .clone()
        .oneshot(create_json_request(
            "POST",
            "/api/auth/register",
            Some(register_body()),
        ))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .oneshot(create_json_request(
            "POST",
            "/api/auth/register",
            Some(register_body()),
        ))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    // Generic message, no hint of which field collided
    let json = response_json(second).await;
    let message = json["message"].as_str().unwrap();
    assert!(!message.contains("email"));
    assert!(!message.contains("username"));
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn test_login_returns_token() {
    let app = create_router_for_testing();
    let token = register_and_login(&app).await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = create_router_for_testing();

    app.clone()
        .oneshot(create_json_request(
            "POST",
            "/api/auth/register",
            Some(register_body()),
        ))
        .await
        .unwrap();

    let unknown_user = app
        .clone()
        .oneshot(create_json_request(
            "POST",
            "/api/auth/login",
            Some(json!({"username": "no_such_user", "password": "abc123"})),
        ))
        .await
        .unwrap();

    let wrong_password = app
        .oneshot(create_json_request(
            "POST",
            "/api/auth/login",
            Some(json!({"username": "user_01", "password": "wrong"})),
        ))
        .await
        .unwrap();

    assert_eq!(unknown_user.status(), StatusCode::BAD_REQUEST);
    assert_eq!(wrong_password.status(), StatusCode::BAD_REQUEST);

    let body_a = response_json(unknown_user).await;
    let body_b = response_json(wrong_password).await;
    assert_eq!(body_a, body_b);
    assert_eq!(body_a["message"], "Invalid credentials");
}

// =============================================================================
// Protected Routes
// =============================================================================

#[tokio::test]
async fn test_profile_with_valid_token() {
    let app = create_router_for_testing();
    let token = register_and_login(&app).await;

    let response = app
        .oneshot(bearer_request("/api/protected/profile", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("user_01"));
}

#[tokio::test]
async fn test_protected_route_without_token_is_401() {
    let app = create_router_for_testing();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/protected/profile")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_garbage_token_is_401() {
    let app = create_router_for_testing();

    let response = app
        .oneshot(bearer_request("/api/protected/profile", "not.a.token"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_tampered_token_is_401() {
    let app = create_router_for_testing();
    let token = register_and_login(&app).await;

    // Corrupt the signature segment
    let mut tampered = token[..token.len() - 4].to_string();
    tampered.push_str("AAAA");

    let response = app
        .oneshot(bearer_request("/api/protected/profile", &tampered))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Role Gate
// =============================================================================

#[tokio::test]
async fn test_admin_route_with_user_token_is_403() {
    let app = create_router_for_testing();
    let token = register_and_login(&app).await;

    let response = app
        .oneshot(bearer_request("/api/protected/admin", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_route_with_admin_token() {
    let store = Arc::new(MemoryUserStore::new());
    let app = create_router_with_store(store.clone());

    // Registration can only mint 'user' accounts; seed the admin directly
    let mut admin = User::new(
        "root@b.com".to_string(),
        "admin_01".to_string(),
        bcrypt::hash("abc123", 4).unwrap(),
    );
    admin.role = UserRole::Admin;
    store.seed(admin).await;

    let login = app
        .clone()
        .oneshot(create_json_request(
            "POST",
            "/api/auth/login",
            Some(json!({"username": "admin_01", "password": "abc123"})),
        ))
        .await
        .unwrap();
    assert_eq!(login.status(), StatusCode::OK);
    let token = response_json(login).await["token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .oneshot(bearer_request("/api/protected/admin", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
