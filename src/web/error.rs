use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{html, Markup};
use std::sync::Arc;
use uuid::Uuid;

use super::components::{icons, layout};
use crate::metadata::{create_metadata, PageMeta, SiteConfig};
use crate::monitoring;

/// Error surfaced to the browser as the generic "something went wrong" page.
///
/// The underlying error is logged together with a digest that the page shows,
/// so a report from a user can be matched to the log line.
#[derive(Debug)]
pub struct AppError {
    error: anyhow::Error,
    site: Arc<SiteConfig>,
}

impl AppError {
    pub fn new(error: impl Into<anyhow::Error>, site: Arc<SiteConfig>) -> Self {
        Self {
            error: error.into(),
            site,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let digest = Uuid::now_v7().simple().to_string();
        tracing::error!(digest = %digest, error = ?self.error, "Request failed");
        monitoring::ERROR_COUNT.with_label_values(&["internal"]).inc();

        (StatusCode::INTERNAL_SERVER_ERROR, error_page(&self.site, Some(&digest))).into_response()
    }
}

pub fn error_page(site: &SiteConfig, digest: Option<&str>) -> Markup {
    let meta = create_metadata(site, PageMeta::titled("Error").no_index());

    layout::base(
        &meta,
        layout::centered(html! {
            div class="flex justify-center" {
                div class="bg-red-50 p-4 rounded-full" {
                    (icons::alert_triangle("w-16 h-16 text-red-600"))
                }
            }

            div class="space-y-2" {
                h1 class="text-3xl font-bold text-gray-900" { "Something went wrong" }
                p class="text-gray-500" { "An unexpected error occurred. Please try again." }
            }

            @if let Some(digest) = digest {
                p class="text-xs text-gray-500 font-mono" { "Error ID: " (digest) }
            }

            div class="flex flex-col sm:flex-row gap-3 justify-center" {
                button
                    type="button"
                    onclick="window.location.reload()"
                    class="px-4 py-2 bg-primary text-white rounded-md hover:bg-blue-700 transition-colors" {
                    "Try again"
                }
                a href="/" class="px-4 py-2 bg-secondary text-gray-900 rounded-md hover:bg-gray-300 transition-colors" {
                    "Go home"
                }
            }
        }),
    )
}
