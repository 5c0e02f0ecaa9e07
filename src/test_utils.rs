#[cfg(test)]
pub mod helpers {
    use crate::auth::{AuthState, Authenticator, SessionUser};
    use crate::config::Settings;
    use crate::web::AppState;
    use anyhow::{anyhow, Result};
    use axum::{async_trait, http::HeaderMap, response::Response};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Settings for tests, independent of the process environment
    pub fn test_settings(maintenance_mode: bool) -> Settings {
        Settings {
            site_name: "Launchpad".to_string(),
            site_url: "http://localhost:3000".to_string(),
            version: "0.0.0-test".to_string(),
            support_email: "support@example.com".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            public_dir: "./public".to_string(),
            maintenance_mode,
            session_cookie: "__session".to_string(),
            session_secret: "test-session-secret".to_string(),
            sign_in_url: "/sign-in".to_string(),
            log_format: Default::default(),
        }
    }

    pub fn test_state(maintenance_mode: bool, authenticator: Arc<dyn Authenticator>) -> AppState {
        AppState::new(test_settings(maintenance_mode), authenticator)
    }

    pub async fn body_string(response: Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        String::from_utf8(body.to_vec()).expect("Body is not UTF-8")
    }

    /// Authenticator with a fixed answer that counts how often it is asked
    pub struct FakeAuthenticator {
        signed_in: bool,
        calls: AtomicUsize,
    }

    impl FakeAuthenticator {
        pub fn new(signed_in: bool) -> Self {
            Self {
                signed_in,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Authenticator for FakeAuthenticator {
        async fn authenticate(&self, _headers: &HeaderMap) -> Result<AuthState> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.signed_in {
                Ok(AuthState::signed_in(SessionUser {
                    id: "user_test".to_string(),
                    email: Some("test@example.com".to_string()),
                }))
            } else {
                Ok(AuthState::signed_out())
            }
        }

        fn sign_in_url(&self) -> &str {
            "/sign-in"
        }

        fn after_sign_out_url(&self) -> &str {
            "/"
        }
    }

    /// Authenticator whose provider is down
    pub struct FailingAuthenticator;

    impl FailingAuthenticator {
        pub const MESSAGE: &'static str = "auth provider unavailable";
    }

    #[async_trait]
    impl Authenticator for FailingAuthenticator {
        async fn authenticate(&self, _headers: &HeaderMap) -> Result<AuthState> {
            Err(anyhow!(Self::MESSAGE))
        }

        fn sign_in_url(&self) -> &str {
            "/sign-in"
        }

        fn after_sign_out_url(&self) -> &str {
            "/"
        }
    }
}
