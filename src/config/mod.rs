use once_cell::sync::Lazy;
use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    // Site Settings
    pub site_name: String,
    pub site_url: String,
    pub version: String,
    pub support_email: String,

    // Server Settings
    pub host: String,
    pub port: u16,
    pub public_dir: String,

    // Maintenance
    pub maintenance_mode: bool,

    // Authentication provider
    pub session_cookie: String,
    pub session_secret: String,
    pub sign_in_url: String,

    // Logging
    pub log_format: LogFormat,
}

/// Output format for the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Fallback secret for local development only; sessions signed with it are forgeable
pub const PLACEHOLDER_SESSION_SECRET: &str = "change-this-to-your-provider-signing-secret";

impl Settings {
    pub fn new() -> Self {
        Settings {
            site_name: get_env("SITE_NAME", "Launchpad"),
            site_url: get_env("SITE_URL", "http://localhost:3000"),
            version: get_env("VERSION", env!("CARGO_PKG_VERSION")),
            support_email: get_env("SUPPORT_EMAIL", "support@example.com"),

            host: get_env("HOST", "0.0.0.0"),
            port: get_env_parsed("PORT", 3000),
            public_dir: get_env("PUBLIC_DIR", "./public"),

            maintenance_mode: get_env_flag("MAINTENANCE_MODE"),

            session_cookie: get_env("SESSION_COOKIE", "__session"),
            session_secret: get_env("SESSION_SECRET", PLACEHOLDER_SESSION_SECRET),
            sign_in_url: get_env("AUTH_SIGN_IN_URL", "/sign-in"),

            log_format: match get_env("LOG_FORMAT", "pretty").to_lowercase().as_str() {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        }
    }

    pub fn uses_placeholder_secret(&self) -> bool {
        self.session_secret == PLACEHOLDER_SESSION_SECRET
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

pub static SETTINGS: Lazy<Settings> = Lazy::new(Settings::new);

pub fn get_settings() -> &'static Settings {
    &SETTINGS
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Only the exact string "true" turns a flag on; anything else (including unset) is off.
fn get_env_flag(key: &str) -> bool {
    env::var(key).map(|v| v == "true").unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_maintenance_flag_requires_exact_true() {
        env::set_var("MAINTENANCE_MODE", "true");
        assert!(Settings::new().maintenance_mode);

        for value in ["TRUE", "1", "yes", " true", ""] {
            env::set_var("MAINTENANCE_MODE", value);
            assert!(
                !Settings::new().maintenance_mode,
                "{:?} should not enable maintenance mode",
                value
            );
        }

        env::remove_var("MAINTENANCE_MODE");
        assert!(!Settings::new().maintenance_mode);
    }

    #[test]
    #[serial]
    fn test_defaults() {
        env::remove_var("SITE_URL");
        env::remove_var("PORT");
        env::remove_var("LOG_FORMAT");

        let settings = Settings::new();
        assert_eq!(settings.site_url, "http://localhost:3000");
        assert_eq!(settings.port, 3000);
        assert_eq!(settings.session_cookie, "__session");
        assert_eq!(settings.log_format, LogFormat::Pretty);
    }

    #[test]
    #[serial]
    fn test_overrides() {
        env::set_var("SITE_URL", "https://launchpad.dev");
        env::set_var("PORT", "8080");
        env::set_var("LOG_FORMAT", "JSON");

        let settings = Settings::new();
        assert_eq!(settings.site_url, "https://launchpad.dev");
        assert_eq!(settings.address(), format!("{}:8080", settings.host));
        assert_eq!(settings.log_format, LogFormat::Json);

        env::remove_var("SITE_URL");
        env::remove_var("PORT");
        env::remove_var("LOG_FORMAT");
    }

    #[test]
    #[serial]
    fn test_invalid_port_falls_back() {
        for value in ["not-a-port", "70000", "-1"] {
            env::set_var("PORT", value);
            assert_eq!(Settings::new().port, 3000, "PORT={:?}", value);
        }
        env::remove_var("PORT");
    }

    #[test]
    #[serial]
    fn test_placeholder_secret_detected() {
        env::remove_var("SESSION_SECRET");
        assert!(Settings::new().uses_placeholder_secret());

        env::set_var("SESSION_SECRET", "a-real-provider-secret");
        assert!(!Settings::new().uses_placeholder_secret());
        env::remove_var("SESSION_SECRET");
    }
}
