use std::env;
use std::str::FromStr;
use std::time::Duration;

use blog_api_client::DEFAULT_ENDPOINT;

/// Service configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub blog_api_url: String,
    pub blog_api_secret: Option<String>,
    pub blog_cache_ttl: Duration,
    pub search_cache_ttl: Duration,
    pub search_cache_capacity: u64,
    /// `None` leaves the transport default in place
    pub upstream_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            blog_api_url: DEFAULT_ENDPOINT.to_string(),
            blog_api_secret: None,
            blog_cache_ttl: Duration::from_secs(5),
            search_cache_ttl: Duration::from_secs(10),
            search_cache_capacity: 10_000,
            upstream_timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl Config {
    /// Parse configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup. Unset or
    /// unparseable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parsed = |name: &str| lookup(name).and_then(|v| v.trim().parse::<u64>().ok());

        let port = lookup("PORT")
            .and_then(|p| u16::from_str(p.trim()).ok())
            .unwrap_or(defaults.port);

        let blog_api_url = lookup("BLOG_API_URL")
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.blog_api_url);

        let blog_api_secret = lookup("BLOG_API_SECRET").filter(|s| !s.is_empty());

        let blog_cache_ttl = parsed("BLOG_CACHE_TTL_SECS")
            .map(Duration::from_secs)
            .unwrap_or(defaults.blog_cache_ttl);

        let search_cache_ttl = parsed("SEARCH_CACHE_TTL_SECS")
            .map(Duration::from_secs)
            .unwrap_or(defaults.search_cache_ttl);

        let search_cache_capacity =
            parsed("SEARCH_CACHE_CAPACITY").unwrap_or(defaults.search_cache_capacity);

        let upstream_timeout = match parsed("UPSTREAM_TIMEOUT_SECS") {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => defaults.upstream_timeout,
        };

        Self {
            port,
            blog_api_url,
            blog_api_secret,
            blog_cache_ttl,
            search_cache_ttl,
            search_cache_capacity,
            upstream_timeout,
        }
    }
}
