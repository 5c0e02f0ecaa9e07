use axum::{extract::State, http::header, response::IntoResponse, Json};
use serde::Serialize;

use crate::models::{self, Schema};
use crate::monitoring;
use crate::web::{error::AppError, AppState};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub site: String,
    pub maintenance_mode: bool,
    pub build: BuildInfo,
}

#[derive(Debug, Serialize)]
pub struct BuildInfo {
    pub git_hash: String,
    pub git_branch: String,
    pub git_date: String,
    pub git_dirty: bool,
    pub build_timestamp: String,
    pub rust_version: String,
    pub profile: String,
}

impl BuildInfo {
    /// Values baked in by build.rs
    pub fn current() -> Self {
        let profile = if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        };

        Self {
            git_hash: env!("GIT_HASH").to_string(),
            git_branch: env!("GIT_BRANCH").to_string(),
            git_date: env!("GIT_DATE").to_string(),
            git_dirty: env!("GIT_DIRTY").parse().unwrap_or(false),
            build_timestamp: env!("BUILD_TIMESTAMP").to_string(),
            rust_version: env!("RUST_VERSION").to_string(),
            profile: profile.to_string(),
        }
    }
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.settings.version.clone(),
        site: state.site.name.clone(),
        maintenance_mode: state.gate.maintenance_mode(),
        build: BuildInfo::current(),
    })
}

pub async fn root_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": state.site.name,
        "version": state.settings.version,
        "endpoints": {
            "/api/health": "GET - Health check",
            "/api/metrics": "GET - Prometheus metrics",
            "/api/schema": "GET - Registered data schema"
        }
    }))
}

pub async fn metrics_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let body = monitoring::gather_text().map_err(|e| AppError::new(e, state.site.clone()))?;
    Ok(([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body))
}

pub async fn schema_handler() -> Json<Schema> {
    Json(models::schema())
}
