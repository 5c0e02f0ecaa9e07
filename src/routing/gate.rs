//! Request gate.
//!
//! Applies the routing policy to every request the path filter selects and,
//! only when the policy allows it, asks the authenticator who the caller is.
//! Authenticator failures are returned to the caller untouched.

use anyhow::Result;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tracing::debug;

use super::policy::{self, RouteDecision};
use crate::auth::{AuthState, Authenticator};
use crate::monitoring;
use crate::web::{error::AppError, AppState};

/// What the gate wants done with a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Render the requested resource with the resolved auth state
    Continue(AuthState),
    /// Send the browser elsewhere
    Redirect(&'static str),
}

pub struct RequestGate {
    maintenance_mode: bool,
    authenticator: Arc<dyn Authenticator>,
}

impl RequestGate {
    pub fn new(maintenance_mode: bool, authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            maintenance_mode,
            authenticator,
        }
    }

    pub fn maintenance_mode(&self) -> bool {
        self.maintenance_mode
    }

    pub fn authenticator(&self) -> &dyn Authenticator {
        self.authenticator.as_ref()
    }

    pub async fn evaluate(&self, path: &str, headers: &HeaderMap) -> Result<GateOutcome> {
        let decision = policy::decide(path, self.maintenance_mode);
        monitoring::GATE_DECISIONS
            .with_label_values(&[decision.label()])
            .inc();

        match decision {
            RouteDecision::RedirectTo(location) => {
                debug!(path, location, "Redirecting request");
                Ok(GateOutcome::Redirect(location))
            }
            RouteDecision::Allow => {
                let auth = self.authenticator.authenticate(headers).await?;
                Ok(GateOutcome::Continue(auth))
            }
        }
    }
}

/// Axum middleware wrapping [`RequestGate`] around the router
pub async fn request_gate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();

    if !state.path_filter.matches(&path) {
        return next.run(req).await;
    }

    let outcome = state.gate.evaluate(&path, req.headers()).await;
    match outcome {
        Ok(GateOutcome::Continue(auth)) => {
            req.extensions_mut().insert(auth);
            next.run(req).await
        }
        Ok(GateOutcome::Redirect(location)) => Redirect::temporary(location).into_response(),
        Err(e) => AppError::new(e, state.site.clone()).into_response(),
    }
}
