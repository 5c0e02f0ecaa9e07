use axum::extract::State;
use maud::{html, Markup};

use super::components::{icons, layout};
use super::AppState;
use crate::metadata::{create_metadata, PageMeta};
use crate::monitoring;

/// Maintenance notice. Only reachable while maintenance mode is on; the
/// request gate sends everyone home otherwise.
pub async fn show(State(state): State<AppState>) -> Markup {
    monitoring::record_page_view("maintenance", false);

    let meta = create_metadata(
        &state.site,
        PageMeta::titled("Under Maintenance")
            .description("We're performing scheduled maintenance. We'll be back shortly."),
    );

    layout::base(
        &meta,
        html! {
            div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-gray-50 to-gray-100" {
                div class="max-w-md w-full mx-4 text-center" {
                    div class="bg-white rounded-lg shadow-xl p-8 space-y-6" {
                        div class="flex justify-center" {
                            div class="bg-yellow-100 p-4 rounded-full" {
                                (icons::construction("w-16 h-16 text-yellow-600"))
                            }
                        }

                        h1 class="text-3xl font-bold text-gray-900" { "Under Maintenance" }

                        p class="text-gray-600" {
                            "We're currently performing scheduled maintenance to improve your "
                            "experience. We'll be back online shortly."
                        }

                        div class="pt-4" {
                            p class="text-sm text-gray-500" {
                                "Expected return: "
                                span class="font-semibold" { "Soon" }
                            }
                        }

                        div class="pt-2" {
                            a
                                href=(format!("mailto:{}", state.settings.support_email))
                                class="text-sm text-blue-600 hover:text-blue-700" {
                                "Contact Support"
                            }
                        }
                    }
                }
            }
        },
    )
}
