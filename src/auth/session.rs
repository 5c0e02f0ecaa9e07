use anyhow::{anyhow, bail, Result};
use axum::{async_trait, http::HeaderMap};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{AuthState, Authenticator, SessionUser};
use crate::config::Settings;
use crate::routing::policy::HOME_PATH;

/// JWT session claims issued by the authentication provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (provider user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// User email, if the provider shares it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Sign a session token the same way the provider does (HS256)
pub fn create_session_token(
    secret: &str,
    user_id: &str,
    email: Option<&str>,
    ttl: Duration,
) -> Result<String> {
    let now = Utc::now();
    let exp = now + ttl;

    let claims = SessionClaims {
        sub: user_id.to_string(),
        exp: exp.timestamp(),
        iat: now.timestamp(),
        email: email.map(str::to_string),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// Verify and decode a session token
pub fn verify_session_token(
    secret: &str,
    token: &str,
) -> jsonwebtoken::errors::Result<SessionClaims> {
    let validation = Validation::new(Algorithm::HS256);

    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

/// Cookie that removes the provider session from the browser
pub fn clear_session_cookie(name: &str) -> Cookie<'static> {
    Cookie::build((name.to_string(), ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::ZERO)
        .build()
}

/// Authenticator backed by the provider's signed session cookie
pub struct SessionAuthenticator {
    cookie_name: String,
    secret: String,
    sign_in_url: String,
}

impl SessionAuthenticator {
    pub fn new(
        cookie_name: impl Into<String>,
        secret: impl Into<String>,
        sign_in_url: impl Into<String>,
    ) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            bail!("Session secret must not be empty");
        }

        Ok(Self {
            cookie_name: cookie_name.into(),
            secret,
            sign_in_url: sign_in_url.into(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(
            settings.session_cookie.clone(),
            settings.session_secret.clone(),
            settings.sign_in_url.clone(),
        )
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }
}

#[async_trait]
impl Authenticator for SessionAuthenticator {
    async fn authenticate(&self, headers: &HeaderMap) -> Result<AuthState> {
        let jar = CookieJar::from_headers(headers);
        let Some(cookie) = jar.get(&self.cookie_name) else {
            return Ok(AuthState::signed_out());
        };

        match verify_session_token(&self.secret, cookie.value()) {
            Ok(claims) => Ok(AuthState::signed_in(SessionUser {
                id: claims.sub,
                email: claims.email,
            })),
            Err(e) => match e.kind() {
                ErrorKind::ExpiredSignature | ErrorKind::ImmatureSignature => {
                    debug!("Session token not currently valid: {}", e);
                    Ok(AuthState::signed_out())
                }
                ErrorKind::InvalidToken
                | ErrorKind::InvalidSignature
                | ErrorKind::InvalidAlgorithm
                | ErrorKind::MissingRequiredClaim(_)
                | ErrorKind::Base64(_)
                | ErrorKind::Json(_)
                | ErrorKind::Utf8(_) => {
                    warn!("Rejected session token: {}", e);
                    Ok(AuthState::signed_out())
                }
                _ => Err(anyhow!("Session verification failed: {}", e)),
            },
        }
    }

    fn sign_in_url(&self) -> &str {
        &self.sign_in_url
    }

    fn after_sign_out_url(&self) -> &str {
        HOME_PATH
    }
}
