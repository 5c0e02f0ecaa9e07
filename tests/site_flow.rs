mod common;

use axum::http::StatusCode;
use chrono::Duration;
use common::{app, body_string, send, SECRET};
use launchpad::auth::session::create_session_token;

fn session_cookie(email: &str) -> String {
    let token = create_session_token(SECRET, "user_123", Some(email), Duration::hours(1)).unwrap();
    format!("__session={}", token)
}

#[tokio::test]
async fn test_maintenance_redirects_pricing() {
    let response = send(app(true), "GET", "/pricing", None).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()["location"], "/maintenance");
}

#[tokio::test]
async fn test_maintenance_redirects_signed_in_users_too() {
    let cookie = session_cookie("ada@example.com");
    let response = send(app(true), "GET", "/", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()["location"], "/maintenance");
}

#[tokio::test]
async fn test_maintenance_page_served_during_maintenance() {
    let response = send(app(true), "GET", "/maintenance", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("Under Maintenance"));
    assert!(html.contains("Expected return: "));
    assert!(html.contains("mailto:help@launchpad.test"));
}

#[tokio::test]
async fn test_maintenance_page_redirects_home_when_live() {
    let response = send(app(false), "GET", "/maintenance", None).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()["location"], "/");
}

#[tokio::test]
async fn test_trailing_slash_maintenance_is_not_the_notice() {
    let response = send(app(true), "GET", "/maintenance/", None).await;
    assert_eq!(response.headers()["location"], "/maintenance");

    let response = send(app(false), "GET", "/maintenance/", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_pricing_renders_for_anonymous_visitor() {
    let response = send(app(false), "GET", "/pricing", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("<title>Pricing | Launchpad</title>"));
    assert!(html.contains("Enterprise"));
    assert!(html.contains("Sign In"));
    assert!(html.contains(
        "https://accounts.launchpad.test/sign-in?redirect_url=http%3A%2F%2Flocalhost%3A3000%2Fpricing"
    ));
    assert!(!html.contains("robots"));
}

#[tokio::test]
async fn test_pricing_renders_for_signed_in_user() {
    let cookie = session_cookie("grace@example.com");
    let response = send(app(false), "GET", "/pricing", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("grace@example.com"));
    assert!(html.contains(r#"action="/sign-out""#));
    assert!(!html.contains("Sign In"));
}

#[tokio::test]
async fn test_tampered_session_is_anonymous() {
    let cookie = format!("{}x", session_cookie("grace@example.com"));
    let response = send(app(false), "GET", "/", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("Sign In"));
}

#[tokio::test]
async fn test_sign_out_flow() {
    let cookie = session_cookie("grace@example.com");
    let response = send(app(false), "POST", "/sign-out", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/");
    let set_cookie = response.headers()["set-cookie"].to_str().unwrap();
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_not_found_page() {
    let response = send(app(false), "GET", "/nowhere", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let html = body_string(response).await;
    assert!(html.contains("Page not found"));
    assert!(html.contains("Page Not Found | Launchpad"));
    assert!(html.contains("noindex, nofollow"));
}
