//! Page metadata: `<title>`, description, robots, Open Graph and Twitter tags.

use maud::{html, Markup};
use serde::Serialize;

use crate::config::Settings;

pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;

/// Site-wide defaults the metadata helper falls back on
#[derive(Debug, Clone, Serialize)]
pub struct SiteConfig {
    pub name: String,
    pub description: String,
    pub url: String,
    pub og_image: String,
    pub links: SiteLinks,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteLinks {
    pub twitter: String,
    pub github: String,
}

impl SiteConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            name: settings.site_name.clone(),
            url: settings.site_url.clone(),
            ..Self::default()
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Launchpad".to_string(),
            description: "Production-ready website starter with authentication gating and a maintenance switch".to_string(),
            url: "http://localhost:3000".to_string(),
            og_image: "/og-image.png".to_string(),
            links: SiteLinks {
                twitter: "https://twitter.com".to_string(),
                github: "https://github.com".to_string(),
            },
        }
    }
}

/// Per-page overrides; every field is optional
#[derive(Debug, Clone, Default)]
pub struct PageMeta<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub image: Option<&'a str>,
    pub no_index: bool,
}

impl<'a> PageMeta<'a> {
    pub fn titled(title: &'a str) -> Self {
        Self {
            title: Some(title),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn no_index(mut self) -> Self {
        self.no_index = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots: Option<Robots>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
}

impl Robots {
    pub fn directive(&self) -> String {
        let index = if self.index { "index" } else { "noindex" };
        let follow = if self.follow { "follow" } else { "nofollow" };
        format!("{}, {}", index, follow)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub images: Vec<OgImage>,
    pub locale: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

/// Build the metadata for a page, filling gaps from the site defaults
pub fn create_metadata(site: &SiteConfig, page: PageMeta<'_>) -> Metadata {
    let title = match page.title {
        Some(title) => format!("{} | {}", title, site.name),
        None => site.name.clone(),
    };
    let description = page.description.unwrap_or(site.description.as_str()).to_string();
    let image = page.image.unwrap_or(site.og_image.as_str()).to_string();

    Metadata {
        robots: page.no_index.then_some(Robots {
            index: false,
            follow: false,
        }),
        open_graph: OpenGraph {
            title: title.clone(),
            description: description.clone(),
            url: site.url.clone(),
            site_name: site.name.clone(),
            images: vec![OgImage {
                url: image.clone(),
                width: OG_IMAGE_WIDTH,
                height: OG_IMAGE_HEIGHT,
                alt: title.clone(),
            }],
            locale: "en_US".to_string(),
            kind: "website".to_string(),
        },
        twitter: TwitterCard {
            card: "summary_large_image".to_string(),
            title: title.clone(),
            description: description.clone(),
            images: vec![image],
        },
        title,
        description,
    }
}

impl Metadata {
    /// Head tags for this page
    pub fn render(&self) -> Markup {
        html! {
            title { (self.title) }
            meta name="description" content=(self.description);
            @if let Some(robots) = self.robots {
                meta name="robots" content=(robots.directive());
            }

            meta property="og:title" content=(self.open_graph.title);
            meta property="og:description" content=(self.open_graph.description);
            meta property="og:url" content=(self.open_graph.url);
            meta property="og:site_name" content=(self.open_graph.site_name);
            meta property="og:locale" content=(self.open_graph.locale);
            meta property="og:type" content=(self.open_graph.kind);
            @for image in &self.open_graph.images {
                meta property="og:image" content=(image.url);
                meta property="og:image:width" content=(image.width);
                meta property="og:image:height" content=(image.height);
                meta property="og:image:alt" content=(image.alt);
            }

            meta name="twitter:card" content=(self.twitter.card);
            meta name="twitter:title" content=(self.twitter.title);
            meta name="twitter:description" content=(self.twitter.description);
            @for image in &self.twitter.images {
                meta name="twitter:image" content=(image);
            }
        }
    }
}
