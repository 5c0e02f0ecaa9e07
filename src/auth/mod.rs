pub mod session;

use anyhow::Result;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use std::convert::Infallible;

pub use session::SessionAuthenticator;

/// Signed-in user as reported by the authentication provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub email: Option<String>,
}

impl SessionUser {
    /// Single uppercase character shown in the avatar bubble
    pub fn initial(&self) -> String {
        self.email
            .as_deref()
            .and_then(|email| email.chars().next())
            .unwrap_or('U')
            .to_uppercase()
            .to_string()
    }
}

/// Authentication state attached to each gated request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
}

impl AuthState {
    pub fn signed_out() -> Self {
        Self { user: None }
    }

    pub fn signed_in(user: SessionUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Handlers read the state the request gate stored in the request
/// extensions. Requests that bypassed the gate are treated as signed out.
#[async_trait]
impl<S> FromRequestParts<S> for AuthState
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<AuthState>()
            .cloned()
            .unwrap_or_default())
    }
}

/// External authentication provider consulted by the request gate.
///
/// Implementations answer "is the caller signed in" for a request and expose
/// the URLs the UI needs for its sign-in and sign-out affordances.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Resolve the caller's session. Errors are provider failures, not
    /// "signed out"; an anonymous caller is `Ok(AuthState::signed_out())`.
    async fn authenticate(&self, headers: &HeaderMap) -> Result<AuthState>;

    /// Where the Sign In button sends the browser
    fn sign_in_url(&self) -> &str;

    /// Where the browser lands after signing out
    fn after_sign_out_url(&self) -> &str;
}
