use axum::extract::State;
use maud::{html, Markup};

use super::components::layout;
use super::AppState;
use crate::auth::AuthState;
use crate::metadata::{create_metadata, PageMeta};
use crate::monitoring;

struct Plan {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    features: &'static [&'static str],
    cta: &'static str,
    popular: bool,
}

const PLANS: &[Plan] = &[
    Plan {
        name: "Free",
        price: "$0",
        period: "per month",
        features: &["Basic features", "Community support", "1 project"],
        cta: "Get Started",
        popular: false,
    },
    Plan {
        name: "Pro",
        price: "$29",
        period: "per month",
        features: &[
            "All Free features",
            "Priority support",
            "Unlimited projects",
            "Advanced analytics",
        ],
        cta: "Get Started",
        popular: true,
    },
    Plan {
        name: "Enterprise",
        price: "Custom",
        period: "contact us",
        features: &[
            "All Pro features",
            "Dedicated support",
            "Custom integrations",
            "SLA guarantee",
        ],
        cta: "Contact Sales",
        popular: false,
    },
];

/// Show pricing plans
pub async fn show(State(state): State<AppState>, auth: AuthState) -> Markup {
    monitoring::record_page_view("pricing", auth.is_signed_in());

    let meta = create_metadata(
        &state.site,
        PageMeta::titled("Pricing").description("Choose the perfect plan for your needs."),
    );

    layout::main_layout(
        &state.shell(&auth, "/pricing"),
        &meta,
        html! {
            div class="container mx-auto px-4 sm:px-6 lg:px-8 py-20" {
                div class="max-w-3xl mx-auto text-center space-y-4 mb-12" {
                    h1 class="text-4xl md:text-5xl font-bold text-gray-900" { "Pricing" }
                    p class="text-lg text-gray-500" { "Choose the perfect plan for your needs" }
                }

                div class="max-w-4xl mx-auto" {
                    div class="grid md:grid-cols-3 gap-8" {
                        @for plan in PLANS {
                            (plan_card(plan))
                        }
                    }
                }
            }
        },
    )
}

fn plan_card(plan: &Plan) -> Markup {
    let (border, button_style) = if plan.popular {
        (
            "border-2 border-primary relative",
            "bg-primary text-white hover:bg-blue-700",
        )
    } else {
        ("border", "bg-secondary text-gray-900 hover:bg-gray-300")
    };

    html! {
        div class=(format!("p-6 rounded-lg bg-white space-y-4 {}", border)) {
            @if plan.popular {
                div class="absolute -top-3 left-1/2 -translate-x-1/2 px-3 py-1 bg-primary text-white text-xs font-medium rounded-full" {
                    "Popular"
                }
            }
            h3 class="text-2xl font-bold text-gray-900" { (plan.name) }
            div class="space-y-2" {
                p class="text-3xl font-bold text-gray-900" { (plan.price) }
                p class="text-sm text-gray-500" { (plan.period) }
            }
            ul class="space-y-2 text-sm text-gray-500" {
                @for feature in plan.features {
                    li { "✓ " (feature) }
                }
            }
            button
                type="button"
                class=(format!("w-full px-4 py-2 rounded-md transition-colors {}", button_style)) {
                (plan.cta)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_popular_plan() {
        let popular: Vec<_> = PLANS.iter().filter(|p| p.popular).map(|p| p.name).collect();
        assert_eq!(popular, vec!["Pro"]);
    }

    #[test]
    fn test_plan_card_lists_features() {
        let html = plan_card(&PLANS[2]).into_string();

        assert!(html.contains("Enterprise"));
        assert!(html.contains("✓ SLA guarantee"));
        assert!(html.contains("Contact Sales"));
        assert!(!html.contains("Popular"));
    }
}
