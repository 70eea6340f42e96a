//! Blog Insights - blog stats and search over the upstream blog API
//!
//! Fetches the full blog list from the upstream REST endpoint, memoizes it
//! briefly, and serves aggregate stats and a cached title search.

use blog_api_client::BlogApiClient;
use blog_insights::search::SearchCache;
use blog_insights::source::CachedBlogSource;
use blog_insights::{start_server, Config, Result, ServerState, SharedState};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::from_default_env().add_directive("blog_insights=info".parse()?);

    // Use JSON format for GCP Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    };

    info!("Starting Blog Insights...");

    let config = Config::from_env();
    info!("Port: {}", config.port);
    info!("Upstream: {}", config.blog_api_url);
    info!(
        blog_ttl_secs = config.blog_cache_ttl.as_secs(),
        search_ttl_secs = config.search_cache_ttl.as_secs(),
        search_capacity = config.search_cache_capacity,
        "Cache settings"
    );

    if config.blog_api_secret.is_none() {
        warn!("BLOG_API_SECRET is not set; upstream requests are sent without the admin secret");
    }
    if config.search_cache_ttl <= config.blog_cache_ttl {
        warn!("Search cache TTL does not exceed blog cache TTL");
    }

    let client = BlogApiClient::with_options(
        &config.blog_api_url,
        config.blog_api_secret.as_deref(),
        config.upstream_timeout,
    )?;

    let state: SharedState = Arc::new(ServerState::new(
        CachedBlogSource::new(Arc::new(client), config.blog_cache_ttl),
        SearchCache::new(config.search_cache_ttl, config.search_cache_capacity),
    ));

    // Start HTTP server (blocking)
    start_server(state, config.port).await?;

    Ok(())
}
