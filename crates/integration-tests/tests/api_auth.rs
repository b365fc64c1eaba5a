//! Integration tests for the login endpoint.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The API server running (cargo run -p pulseboard-api)
//! - A seeded user `it@agency.com` / `test-password`
//!
//! Run with: cargo test -p pulseboard-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

/// Base URL for the API (configurable via environment).
fn api_base_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

async fn post_login(body: Value) -> reqwest::Response {
    Client::new()
        .post(format!("{}/api/login", api_base_url()))
        .json(&body)
        .send()
        .await
        .expect("Failed to reach API")
}

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn login_with_valid_credentials_returns_token() {
    let resp = post_login(json!({
        "email": "it@agency.com",
        "password": "test-password",
    }))
    .await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Invalid JSON");
    assert_eq!(body["message"], "Login successful");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["email"], "it@agency.com");
    assert!(body["user"]["id"].as_str().is_some());
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn login_with_wrong_password_is_generic_401() {
    let resp = post_login(json!({
        "email": "it@agency.com",
        "password": "wrong-password",
    }))
    .await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.expect("Invalid JSON");
    assert_eq!(body["message"], "Invalid email or password.");
}

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn login_with_unknown_email_matches_wrong_password_response() {
    let wrong_password = post_login(json!({
        "email": "it@agency.com",
        "password": "wrong-password",
    }))
    .await;
    let unknown_email = post_login(json!({
        "email": "nobody@agency.com",
        "password": "test-password",
    }))
    .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    // Identical body for both failure modes
    let a: Value = wrong_password.json().await.expect("Invalid JSON");
    let b: Value = unknown_email.json().await.expect("Invalid JSON");
    assert_eq!(a["message"], b["message"]);
}

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn login_with_missing_fields_is_400() {
    for body in [
        json!({ "email": "it@agency.com" }),
        json!({ "password": "test-password" }),
        json!({ "email": "", "password": "" }),
    ] {
        let resp = post_login(body).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = resp.json().await.expect("Invalid JSON");
        assert_eq!(body["message"], "Email and password are required.");
    }
}
