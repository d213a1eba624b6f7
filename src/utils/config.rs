use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_PORT: &str = "7000";
pub const DEFAULT_CATALOG_BASE_URL: &str = "http://books.toscrape.com/";
pub const DEFAULT_PAGES: u32 = 2;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_RECOMMENDATIONS: usize = 5;
pub const USER_AGENT: &str = "Mozilla/5.0";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: String,
    pub catalog_base_url: String,
    pub pages: u32,
    pub fetch_timeout: Duration,
    pub recommendations: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT.to_string(),
            catalog_base_url: DEFAULT_CATALOG_BASE_URL.to_string(),
            pages: DEFAULT_PAGES,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            recommendations: DEFAULT_RECOMMENDATIONS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; unset keys and
    /// unparseable numbers fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());
        let catalog_base_url =
            lookup("CATALOG_BASE_URL").unwrap_or_else(|| DEFAULT_CATALOG_BASE_URL.to_string());
        let pages = parse_or("CATALOG_PAGES", lookup("CATALOG_PAGES"), DEFAULT_PAGES);
        let timeout_secs = parse_positive(
            "FETCH_TIMEOUT_SECS",
            lookup("FETCH_TIMEOUT_SECS"),
            DEFAULT_FETCH_TIMEOUT_SECS,
        );
        let recommendations = parse_positive(
            "RECOMMENDATIONS",
            lookup("RECOMMENDATIONS"),
            DEFAULT_RECOMMENDATIONS,
        );

        Self {
            port,
            catalog_base_url,
            pages,
            fetch_timeout: Duration::from_secs(timeout_secs),
            recommendations,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_or<T: FromStr + Copy>(key: &str, value: Option<String>, default: T) -> T {
    match value {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}, using default", key, raw);
            default
        }),
        None => default,
    }
}

/// Like `parse_or`, but zero also falls back to the default.
fn parse_positive<T: FromStr + Copy + Default + PartialEq>(
    key: &str,
    value: Option<String>,
    default: T,
) -> T {
    let parsed = parse_or(key, value, default);
    if parsed == T::default() {
        warn!("Ignoring zero {}, using default", key);
        return default;
    }
    parsed
}
