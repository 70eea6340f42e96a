//! HTTP server for the blog endpoints

use crate::gate::require_blogs;
use crate::search::{blog_search, SearchCache};
use crate::source::CachedBlogSource;
use crate::stats::blog_stats;
use crate::types::{CacheReport, HealthResponse};
use axum::{extract::State, middleware, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Shared state for the HTTP server
pub struct ServerState {
    pub blogs: CachedBlogSource,
    pub searches: SearchCache,
    pub started_at: DateTime<Utc>,
}

impl ServerState {
    pub fn new(blogs: CachedBlogSource, searches: SearchCache) -> Self {
        Self {
            blogs,
            searches,
            started_at: Utc::now(),
        }
    }
}

pub type SharedState = Arc<ServerState>;

/// Create the HTTP router
pub fn create_router(state: SharedState) -> Router {
    let api = Router::new()
        .route("/api/blog-stats", get(blog_stats))
        .route("/api/blog-search", get(blog_search))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_blogs));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(state: SharedState, port: u16) -> std::io::Result<()> {
    let router = create_router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    info!("Server is running on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await
}

/// Health check endpoint
async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    let uptime_secs = (Utc::now() - state.started_at).num_seconds() as u64;

    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs,
        cache: CacheReport {
            blogs: state.blogs.stats(),
            search: state.searches.stats(),
        },
    })
}
