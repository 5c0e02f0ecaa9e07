mod common;

use reqwest::{redirect::Policy, StatusCode};
use tokio::net::TcpListener;

/// Serve the app on an ephemeral port and return its base URL
async fn spawn(maintenance_mode: bool) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, common::app(maintenance_mode))
            .await
            .unwrap();
    });

    format!("http://{}", addr)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_live_maintenance_redirect() {
    let base = spawn(true).await;

    let response = client()
        .get(format!("{}/pricing", base))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()["location"], "/maintenance");
}

#[tokio::test]
async fn test_live_follows_to_maintenance_notice() {
    let base = spawn(true).await;

    let response = reqwest::get(format!("{}/", base)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.url().path(), "/maintenance");
    assert!(response.text().await.unwrap().contains("Under Maintenance"));
}

#[tokio::test]
async fn test_live_home_when_not_in_maintenance() {
    let base = spawn(false).await;

    let response = client()
        .get(format!("{}/maintenance", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()["location"], "/");

    let response = client().get(format!("{}/", base)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("Build Modern Web Apps"));
}

#[tokio::test]
async fn test_live_health() {
    let base = spawn(false).await;

    let health: serde_json::Value = client()
        .get(format!("{}/api/health", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(health["status"], "healthy");
    assert_eq!(health["site"], "Launchpad");
}
