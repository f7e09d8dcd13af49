// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session flag cookie tests.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
};
use ns_walk::config::Config;
use tower::ServiceExt;

mod common;

fn session_cookie(response: &Response) -> String {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .find(|value| value.starts_with("isLoggedIn="))
        .unwrap_or_else(|| panic!("missing Set-Cookie header for isLoggedIn"))
}

fn post(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut request = Request::builder().method("POST").uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    request.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_login_sets_flag() {
    let (app, _) = common::create_test_app();

    let response = app.oneshot(post("/login", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = session_cookie(&response);
    assert!(cookie.starts_with("isLoggedIn=true"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(!cookie.contains("HttpOnly"));
    assert!(!cookie.contains("Secure"));

    let body = common::body_json(response).await;
    assert_eq!(body["logged_in"], true);
    assert_eq!(body["nav"][0]["href"], "/home");
}

#[tokio::test]
async fn test_logout_clears_flag() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(post("/logout", Some("isLoggedIn=true")))
        .await
        .unwrap();

    let cookie = session_cookie(&response);
    assert!(cookie.starts_with("isLoggedIn=false"));

    let body = common::body_json(response).await;
    assert_eq!(body["logged_in"], false);
    assert_eq!(body["nav"][0]["href"], "/login");
}

#[tokio::test]
async fn test_secure_cookie_for_https_frontend() {
    let config = Config {
        frontend_url: "https://walk.example.com".to_string(),
        ..Config::test_default()
    };
    let ((app, _), _) = common::create_test_app_with_config(config);

    let response = app.oneshot(post("/login", None)).await.unwrap();

    assert!(session_cookie(&response).contains("Secure"));
}

#[tokio::test]
async fn test_login_page_reads_cookie() {
    for (cookie, expected) in [("isLoggedIn=true", true), ("isLoggedIn=yes", false)] {
        let (app, _) = common::create_test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/login")
                    .header(header::COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = common::body_json(response).await;
        assert_eq!(body["logged_in"], expected, "{cookie}");
    }
}

#[tokio::test]
async fn test_security_headers_present() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/login").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.headers().get("cache-control").unwrap(), "no-store");
    assert_eq!(response.headers().get("x-frame-options").unwrap(), "DENY");
}
