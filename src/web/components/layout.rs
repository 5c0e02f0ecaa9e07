use chrono::{Datelike, Utc};
use maud::{html, Markup, DOCTYPE};

use super::icons;
use crate::auth::{AuthState, SessionUser};
use crate::metadata::{Metadata, SiteConfig};

/// Everything the navbar and footer need to know about the current request
pub struct Shell<'a> {
    pub site: &'a SiteConfig,
    pub auth: &'a AuthState,
    pub sign_in_url: &'a str,
    pub current_path: &'a str,
}

/// Base HTML document with Tailwind CSS
pub fn base(meta: &Metadata, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (meta.render())
                link rel="icon" href="/favicon.ico";

                // Tailwind CSS (using CDN for now, can switch to build later)
                script src="https://cdn.tailwindcss.com" {}

                script {
                    r#"
                    tailwind.config = {
                        theme: {
                            extend: {
                                colors: {
                                    primary: '#2563eb',
                                    secondary: '#e5e7eb',
                                }
                            }
                        }
                    }
                    "#
                }
            }
            body class="bg-white text-gray-900 antialiased min-h-screen" {
                (content)
            }
        }
    }
}

/// Navbar + content + footer
pub fn main_layout(shell: &Shell<'_>, meta: &Metadata, content: Markup) -> Markup {
    base(
        meta,
        html! {
            div class="min-h-screen flex flex-col" {
                (navbar(shell))
                main class="flex-1" {
                    (content)
                }
                (footer(shell.site))
            }
        },
    )
}

/// Provider sign-in URL that sends the browser back to `return_to` afterwards
pub fn sign_in_href(sign_in_url: &str, site_url: &str, return_to: &str) -> String {
    let separator = if sign_in_url.contains('?') { '&' } else { '?' };
    let target = format!("{}{}", site_url.trim_end_matches('/'), return_to);
    format!(
        "{}{}redirect_url={}",
        sign_in_url,
        separator,
        urlencoding::encode(&target)
    )
}

pub fn navbar(shell: &Shell<'_>) -> Markup {
    let sign_in = sign_in_href(shell.sign_in_url, &shell.site.url, shell.current_path);

    html! {
        nav class="border-b bg-white/95 backdrop-blur" {
            div class="container mx-auto px-4 sm:px-6 lg:px-8" {
                div class="flex h-16 items-center justify-between" {
                    a href="/" class="flex items-center space-x-2" {
                        span class="text-xl font-bold text-gray-900" { (shell.site.name) }
                    }

                    // Desktop navigation
                    div class="hidden md:flex items-center gap-6" {
                        a href="/pricing" class="text-sm font-medium text-gray-500 hover:text-gray-900 transition-colors" {
                            "Pricing"
                        }
                        (account_control(shell.auth, &sign_in, "px-4 py-2"))
                    }

                    button
                        type="button"
                        onclick="document.getElementById('mobile-menu').classList.toggle('hidden')"
                        class="md:hidden p-2 text-gray-500 hover:text-gray-900"
                        aria-controls="mobile-menu"
                        aria-label="Toggle menu" {
                        (icons::menu("w-6 h-6"))
                    }
                }

                // Mobile navigation
                div id="mobile-menu" class="hidden md:hidden py-4 space-y-4" {
                    a href="/pricing" class="block text-sm font-medium text-gray-500 hover:text-gray-900 transition-colors" {
                        "Pricing"
                    }
                    div class="pt-2" {
                        (account_control(shell.auth, &sign_in, "w-full px-4 py-2"))
                    }
                }
            }
        }
    }
}

/// Sign In button for anonymous visitors, user menu otherwise
fn account_control(auth: &AuthState, sign_in: &str, sizing: &str) -> Markup {
    match &auth.user {
        Some(user) => user_button(user),
        None => html! {
            a
                href=(sign_in)
                class=(format!("inline-block text-center {} text-sm font-medium bg-primary text-white rounded-md hover:bg-blue-700 transition-colors", sizing)) {
                "Sign In"
            }
        },
    }
}

fn user_button(user: &SessionUser) -> Markup {
    html! {
        div class="flex items-center gap-3" {
            div
                class="h-8 w-8 rounded-full bg-primary flex items-center justify-center text-white font-medium"
                title=(user.email.as_deref().unwrap_or(&user.id)) {
                (user.initial())
            }
            form action="/sign-out" method="post" {
                button type="submit" class="text-sm text-gray-500 hover:text-gray-700" {
                    "Sign out"
                }
            }
        }
    }
}

pub fn footer(site: &SiteConfig) -> Markup {
    let year = Utc::now().year();

    html! {
        footer class="border-t bg-white" {
            div class="container mx-auto px-4 sm:px-6 lg:px-8 py-8" {
                div class="grid grid-cols-1 md:grid-cols-4 gap-8" {
                    div class="space-y-3" {
                        h3 class="text-sm font-semibold text-gray-900" { (site.name) }
                        p class="text-xs text-gray-500" { (site.description) }
                    }
                    (footer_column("Product", &[("Pricing", "/pricing"), ("Documentation", "/")]))
                    (footer_column("Company", &[("About", "/"), ("Contact", "/")]))
                    (footer_column("Legal", &[("Privacy", "/"), ("Terms", "/")]))
                }

                div class="mt-8 pt-8 border-t flex flex-col sm:flex-row justify-between items-center gap-4" {
                    p class="text-xs text-gray-500" {
                        "© " (year) " " (site.name) ". All rights reserved."
                    }
                    div class="flex items-center gap-4" {
                        a
                            href=(site.links.github)
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-gray-500 hover:text-gray-900 transition-colors" {
                            (icons::github("w-5 h-5"))
                            span class="sr-only" { "GitHub" }
                        }
                    }
                }
            }
        }
    }
}

fn footer_column(heading: &str, links: &[(&str, &str)]) -> Markup {
    html! {
        div class="space-y-3" {
            h4 class="text-sm font-semibold text-gray-900" { (heading) }
            ul class="space-y-2" {
                @for (label, href) in links {
                    li {
                        a href=(href) class="text-xs text-gray-500 hover:text-gray-900 transition-colors" {
                            (label)
                        }
                    }
                }
            }
        }
    }
}

/// Full-height centered panel used by the standalone status pages
pub fn centered(content: Markup) -> Markup {
    html! {
        div class="min-h-screen flex items-center justify-center bg-white p-4" {
            div class="max-w-md w-full text-center space-y-6" {
                (content)
            }
        }
    }
}

/// Primary call-to-action link
pub fn primary_link(text: &str, href: &str) -> Markup {
    html! {
        a
            href=(href)
            class="inline-flex items-center justify-center gap-2 px-6 py-3 bg-primary text-white rounded-md hover:bg-blue-700 transition-colors font-medium" {
            (text)
        }
    }
}
