mod common;

use chrono::Utc;
use common::mint_token;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_protected_route_without_header() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/v1/users/me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["errorCode"], "ERR-1004");
}

#[tokio::test]
async fn test_protected_route_with_valid_token() {
    let app = TestApp::spawn().await;
    let token = app.register("a@x.com", "secret1").await;

    let response = app
        .get("/api/v1/users/me")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["role"], "USER");
    assert!(body["id"].is_string());
    assert!(body["created_at"].is_string());

    // The hash never leaves the service
    let rendered = body.to_string();
    assert!(!rendered.contains("argon2"));
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_protected_route_with_expired_token() {
    let app = TestApp::spawn().await;
    app.register("a@x.com", "secret1").await;

    let now = Utc::now().timestamp();
    let expired = mint_token("a@x.com", now - 7200, now - 3600);

    let response = app
        .get("/api/v1/users/me")
        .bearer_auth(&expired)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_tampered_token() {
    let app = TestApp::spawn().await;
    let token = app.register("a@x.com", "secret1").await;

    // Flip one character of the payload segment
    let mut bytes = token.into_bytes();
    let payload_start = bytes.iter().position(|&b| b == b'.').unwrap() + 1;
    bytes[payload_start] = if bytes[payload_start] == b'A' { b'B' } else { b'A' };
    let tampered = String::from_utf8(bytes).unwrap();

    let response = app
        .get("/api/v1/users/me")
        .bearer_auth(&tampered)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_token_for_unknown_subject() {
    let app = TestApp::spawn().await;

    // Well-signed token, but the subject was never registered
    let now = Utc::now().timestamp();
    let token = mint_token("ghost@x.com", now, now + 3600);

    let response = app
        .get("/api/v1/users/me")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_check_endpoint_reports_authentication_state() {
    let app = TestApp::spawn().await;
    let token = app.register("a@x.com", "secret1").await;

    // Public route: reachable anonymously, but reports unauthenticated
    let response = app
        .get("/api/v1/auth/check")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .get("/api/v1/auth/check")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["status"], "authenticated");
}

#[tokio::test]
async fn test_invalid_token_does_not_fail_public_routes() {
    let app = TestApp::spawn().await;
    app.register("a@x.com", "secret1").await;

    // A garbage token on a public route is not an error by itself
    let response = app
        .post("/api/v1/auth/login")
        .bearer_auth("garbage.token.here")
        .json(&json!({ "email": "a@x.com", "password": "secret1" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unclassified_route_is_denied() {
    let app = TestApp::spawn().await;
    let token = app.register("a@x.com", "secret1").await;

    let response = app
        .get("/metrics")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Authentication does not help outside the served surface
    let response = app
        .get("/metrics")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
