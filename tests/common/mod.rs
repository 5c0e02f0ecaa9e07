#![allow(dead_code)]

use axum::{body::Body, http::Request, response::Response, Router};
use launchpad::config::{LogFormat, Settings};
use launchpad::web::{router, AppState};
use tower::ServiceExt;

pub const SECRET: &str = "integration-secret";

pub fn settings(maintenance_mode: bool) -> Settings {
    Settings {
        site_name: "Launchpad".to_string(),
        site_url: "http://localhost:3000".to_string(),
        version: "0.0.0-test".to_string(),
        support_email: "help@launchpad.test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        public_dir: "./public".to_string(),
        maintenance_mode,
        session_cookie: "__session".to_string(),
        session_secret: SECRET.to_string(),
        sign_in_url: "https://accounts.launchpad.test/sign-in".to_string(),
        log_format: LogFormat::Pretty,
    }
}

pub fn app(maintenance_mode: bool) -> Router {
    router(AppState::from_settings(settings(maintenance_mode)).expect("valid settings"))
}

pub async fn send(app: Router, method: &str, uri: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}
