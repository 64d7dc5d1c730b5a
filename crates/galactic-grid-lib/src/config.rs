//! Process-wide configuration, read once at startup.
//!
//! Every upstream base URL carries a literal default so the service works
//! out of the box; API keys are optional and gate the upstreams that need
//! them. The rate-limit and cache values are declared placeholders: they
//! are parsed and carried but not enforced by this layer.

use std::env;
use std::time::Duration;

/// Immutable configuration for the space-data aggregation service.
///
/// Constructed once at process start and passed by reference into the
/// service; adapters and clients never read ambient environment state.
#[derive(Debug, Clone)]
pub struct SpaceApiConfig {
    /// SpaceX v4 REST API base URL.
    pub spacex_api_url: String,
    /// Launch Library 2 REST API base URL.
    pub launch_library_api_url: String,
    /// Open Notify ISS snapshot API base URL.
    pub iss_api_url: String,
    /// N2YO satellite tracking API base URL.
    pub n2yo_api_url: String,
    /// NASA open APIs base URL (reserved for future sources).
    pub nasa_api_url: String,
    /// Optional NASA API key.
    pub nasa_api_key: Option<String>,
    /// Optional Launch Library API key.
    pub launch_library_api_key: Option<String>,
    /// Optional N2YO API key; satellite tracking is skipped without it.
    pub n2yo_api_key: Option<String>,
    /// Per-request timeout applied to every upstream call.
    pub http_timeout: Duration,
    /// Rate-limit window in milliseconds (declared, not enforced).
    pub rate_limit_window_ms: u64,
    /// Rate-limit request budget per window (declared, not enforced).
    pub rate_limit_max_requests: u64,
    /// Cache TTL in seconds (declared, not enforced).
    pub cache_ttl_seconds: u64,
}

impl SpaceApiConfig {
    /// Load configuration from environment variables, falling back to the
    /// built-in defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            spacex_api_url: env_or("SPACEX_API_URL", "https://api.spacexdata.com/v4"),
            launch_library_api_url: env_or(
                "LAUNCH_LIBRARY_API_URL",
                "https://ll.thespacedevs.com/2.2.0",
            ),
            iss_api_url: env_or("ISS_API_URL", "http://api.open-notify.org"),
            n2yo_api_url: env_or("N2YO_API_URL", "https://api.n2yo.com/rest/v1/satellite"),
            nasa_api_url: env_or("NASA_API_URL", "https://api.nasa.gov"),
            nasa_api_key: env_opt("NASA_API_KEY"),
            launch_library_api_key: env_opt("LAUNCH_LIBRARY_API_KEY"),
            n2yo_api_key: env_opt("N2YO_API_KEY"),
            http_timeout: Duration::from_secs(env_u64("HTTP_TIMEOUT_SECONDS", 10)),
            rate_limit_window_ms: env_u64("RATE_LIMIT_WINDOW_MS", 900_000),
            rate_limit_max_requests: env_u64("RATE_LIMIT_MAX_REQUESTS", 100),
            cache_ttl_seconds: env_u64("CACHE_TTL_SECONDS", 300),
        }
    }
}

impl Default for SpaceApiConfig {
    fn default() -> Self {
        Self {
            spacex_api_url: "https://api.spacexdata.com/v4".to_string(),
            launch_library_api_url: "https://ll.thespacedevs.com/2.2.0".to_string(),
            iss_api_url: "http://api.open-notify.org".to_string(),
            n2yo_api_url: "https://api.n2yo.com/rest/v1/satellite".to_string(),
            nasa_api_url: "https://api.nasa.gov".to_string(),
            nasa_api_key: None,
            launch_library_api_key: None,
            n2yo_api_key: None,
            http_timeout: Duration::from_secs(10),
            rate_limit_window_ms: 900_000,
            rate_limit_max_requests: 100,
            cache_ttl_seconds: 300,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
