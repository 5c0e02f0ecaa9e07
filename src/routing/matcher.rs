//! Inclusion filter deciding which requests pass through the request gate.
//!
//! A path is gated unless it points at a static asset. API prefixes are
//! gated unconditionally, even when they look like an asset.
//!
//! Prefixes are matched as raw string prefixes, so `/api` also covers
//! `/apiary`. A path counts as an asset when any `.` in it is followed by a
//! static extension, so `/app.css.map`, `/component.jsx` and
//! `/docs.png/readme` are all assets. Comparison is case-sensitive.

/// Prefixes that are always gated
pub const ALWAYS_INCLUDED_PREFIXES: &[&str] = &["/api", "/trpc"];

/// Prefixes served straight from disk
pub const EXCLUDED_PREFIXES: &[&str] = &["/static"];

/// File extensions treated as static assets
pub const STATIC_EXTENSIONS: &[&str] = &[
    "html", "htm", "css", "js", "jpg", "jpeg", "webp", "png", "gif", "svg", "ttf", "woff",
    "woff2", "ico", "csv", "doc", "docx", "xls", "xlsx", "zip", "webmanifest",
];

/// Extensions that start like a static one but are still gated (`.json` vs `.js`)
pub const GATED_EXTENSIONS: &[&str] = &["json"];

#[derive(Debug, Clone)]
pub struct PathFilter {
    always_included: Vec<String>,
    excluded_prefixes: Vec<String>,
    static_extensions: Vec<String>,
    gated_extensions: Vec<String>,
}

impl PathFilter {
    pub fn new(
        always_included: impl IntoIterator<Item = impl Into<String>>,
        excluded_prefixes: impl IntoIterator<Item = impl Into<String>>,
        static_extensions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            always_included: always_included.into_iter().map(Into::into).collect(),
            excluded_prefixes: excluded_prefixes.into_iter().map(Into::into).collect(),
            static_extensions: static_extensions.into_iter().map(Into::into).collect(),
            gated_extensions: Vec::new(),
        }
    }

    /// Keep gating extensions that would otherwise be caught by a shorter static one.
    pub fn gating(mut self, extensions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.gated_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if the request at `path` must go through the gate.
    pub fn matches(&self, path: &str) -> bool {
        if self
            .always_included
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
        {
            return true;
        }

        if self
            .excluded_prefixes
            .iter()
            .any(|prefix| is_under(path, prefix))
        {
            return false;
        }

        !self.is_static_asset(path)
    }

    fn is_static_asset(&self, path: &str) -> bool {
        let path = path.split('?').next().unwrap_or(path);
        path.match_indices('.').any(|(i, _)| {
            let rest = &path[i + 1..];
            self.static_extensions
                .iter()
                .any(|ext| rest.starts_with(ext.as_str()))
                && !self
                    .gated_extensions
                    .iter()
                    .any(|ext| rest.starts_with(ext.as_str()))
        })
    }
}

impl Default for PathFilter {
    fn default() -> Self {
        Self::new(
            ALWAYS_INCLUDED_PREFIXES.iter().copied(),
            EXCLUDED_PREFIXES.iter().copied(),
            STATIC_EXTENSIONS.iter().copied(),
        )
        .gating(GATED_EXTENSIONS.iter().copied())
    }
}

/// `/static` and `/static/...` are under `/static`; `/statics` is not.
fn is_under(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
