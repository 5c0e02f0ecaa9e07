pub mod auth;
pub mod components;
pub mod error;
pub mod maintenance;
pub mod pricing;

use anyhow::Result;
use axum::{
    extract::State,
    http::{Method, StatusCode},
    middleware,
    routing::{get, post},
    Router,
};
use maud::{html, Markup};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::api;
use crate::auth::{AuthState, Authenticator, SessionAuthenticator};
use crate::config::Settings;
use crate::metadata::{create_metadata, PageMeta, SiteConfig};
use crate::monitoring;
use crate::routing::{request_gate, PathFilter, RequestGate, HOME_PATH};

use components::{icons, layout};

/// Shared, immutable state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub site: Arc<SiteConfig>,
    pub gate: Arc<RequestGate>,
    pub path_filter: Arc<PathFilter>,
}

impl AppState {
    pub fn new(settings: Settings, authenticator: Arc<dyn Authenticator>) -> Self {
        let site = SiteConfig::from_settings(&settings);
        let gate = RequestGate::new(settings.maintenance_mode, authenticator);

        Self {
            settings: Arc::new(settings),
            site: Arc::new(site),
            gate: Arc::new(gate),
            path_filter: Arc::new(PathFilter::default()),
        }
    }

    /// State backed by the provider session cookie
    pub fn from_settings(settings: Settings) -> Result<Self> {
        let authenticator = SessionAuthenticator::from_settings(&settings)?;
        Ok(Self::new(settings, Arc::new(authenticator)))
    }

    pub fn shell<'a>(&'a self, auth: &'a AuthState, current_path: &'a str) -> layout::Shell<'a> {
        layout::Shell {
            site: &self.site,
            auth,
            sign_in_url: self.gate.authenticator().sign_in_url(),
            current_path,
        }
    }
}

/// Full application router with the request gate applied to every route
pub fn router(state: AppState) -> Router {
    let public_dir = PathBuf::from(&state.settings.public_dir);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([hyper::header::CONTENT_TYPE, hyper::header::ACCEPT])
        .allow_credentials(false);

    let api_routes = Router::new()
        .route("/", get(api::root_handler))
        .route("/health", get(api::health_handler))
        .route("/metrics", get(api::metrics_handler))
        .route("/schema", get(api::schema_handler))
        .layer(cors);

    Router::new()
        .route(HOME_PATH, get(home))
        .route("/pricing", get(pricing::show))
        .route("/maintenance", get(maintenance::show))
        .route("/sign-out", post(auth::sign_out))
        .nest("/api", api_routes)
        .nest_service("/static", ServeDir::new(&public_dir))
        .route_service("/og-image.png", ServeFile::new(public_dir.join("og-image.png")))
        .route_service("/favicon.ico", ServeFile::new(public_dir.join("favicon.ico")))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), request_gate))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Home page - hero, features and call to action
pub async fn home(State(state): State<AppState>, auth: AuthState) -> Markup {
    monitoring::record_page_view("home", auth.is_signed_in());

    let meta = create_metadata(
        &state.site,
        PageMeta::titled("Home").description(
            "Production-ready website starter with session-aware navigation, \
             a maintenance switch and server-rendered pages.",
        ),
    );

    layout::main_layout(
        &state.shell(&auth, HOME_PATH),
        &meta,
        html! {
            // Hero
            section class="container mx-auto px-4 sm:px-6 lg:px-8 py-20 md:py-32" {
                div class="max-w-3xl mx-auto text-center space-y-8" {
                    h1 class="text-4xl md:text-6xl font-bold text-gray-900" {
                        "Build Modern Web Apps"
                        span class="block text-primary" { "Lightning Fast" }
                    }
                    p class="text-lg md:text-xl text-gray-500 max-w-2xl mx-auto" {
                        "Production-ready starter with authentication, a real-time backend "
                        "and clean server-rendered pages. Start building today."
                    }
                    div class="flex flex-col sm:flex-row gap-4 justify-center" {
                        a
                            href="/pricing"
                            class="inline-flex items-center justify-center gap-2 px-6 py-3 bg-primary text-white rounded-md hover:bg-blue-700 transition-colors font-medium" {
                            "Get Started"
                            (icons::arrow_right("w-4 h-4"))
                        }
                        a
                            href=(state.site.links.github)
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center justify-center gap-2 px-6 py-3 bg-secondary text-gray-900 rounded-md hover:bg-gray-300 transition-colors font-medium" {
                            "View on GitHub"
                        }
                    }
                }
            }

            // Features
            section class="container mx-auto px-4 sm:px-6 lg:px-8 py-20 border-t" {
                div class="max-w-5xl mx-auto" {
                    div class="text-center space-y-4 mb-16" {
                        h2 class="text-3xl md:text-4xl font-bold text-gray-900" { "Everything you need" }
                        p class="text-lg text-gray-500" { "Built with modern technologies and best practices" }
                    }

                    div class="grid md:grid-cols-3 gap-8" {
                        (feature_card(
                            icons::zap("w-6 h-6 text-primary"),
                            "Lightning Fast",
                            "A single async Rust binary serving pre-rendered templates with minimal overhead."
                        ))
                        (feature_card(
                            icons::shield("w-6 h-6 text-primary"),
                            "Secure by Default",
                            "Sessions verified on every request, with support for email, social logins and more."
                        ))
                        (feature_card(
                            icons::sparkles("w-6 h-6 text-primary"),
                            "Real-time Ready",
                            "Schema registered with a real-time backend for type-safe data sync."
                        ))
                    }
                }
            }

            // Call to action
            section class="container mx-auto px-4 sm:px-6 lg:px-8 py-20 border-t" {
                div class="max-w-3xl mx-auto text-center space-y-6" {
                    h2 class="text-3xl md:text-4xl font-bold text-gray-900" { "Ready to get started?" }
                    p class="text-lg text-gray-500" {
                        "Deploy your first project in minutes. No credit card required."
                    }
                    a
                        href="/pricing"
                        class="inline-flex items-center justify-center gap-2 px-8 py-4 bg-primary text-white rounded-md hover:bg-blue-700 transition-colors font-medium text-lg" {
                        "Start Building"
                        (icons::arrow_right("w-5 h-5"))
                    }
                }
            }
        },
    )
}

fn feature_card(icon: Markup, title: &str, description: &str) -> Markup {
    html! {
        div class="space-y-3 p-6 rounded-lg border bg-white" {
            div class="w-12 h-12 rounded-lg bg-blue-50 flex items-center justify-center" {
                (icon)
            }
            h3 class="text-xl font-semibold text-gray-900" { (title) }
            p class="text-gray-500" { (description) }
        }
    }
}

/// 404 Not Found page
pub async fn not_found(State(state): State<AppState>) -> (StatusCode, Markup) {
    monitoring::record_page_view("not_found", false);

    let meta = create_metadata(
        &state.site,
        PageMeta::titled("Page Not Found")
            .description("The page you're looking for doesn't exist.")
            .no_index(),
    );

    (
        StatusCode::NOT_FOUND,
        layout::base(
            &meta,
            layout::centered(html! {
                div class="flex justify-center" {
                    div class="bg-gray-100 p-4 rounded-full" {
                        (icons::file_question("w-16 h-16 text-gray-500"))
                    }
                }

                div class="space-y-2" {
                    h1 class="text-3xl font-bold text-gray-900" { "404" }
                    h2 class="text-xl font-semibold text-gray-900" { "Page not found" }
                    p class="text-gray-500" {
                        "The page you're looking for doesn't exist or has been moved."
                    }
                }

                (layout::primary_link("Go back home", HOME_PATH))
            }),
        ),
    )
}
