//! Title search with a per-query result cache

use crate::cache::{CacheStatus, TtlCache};
use crate::error::AppError;
use crate::server::SharedState;
use crate::types::{Blog, BlogList, CacheStats};
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json, Response},
    Extension,
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Search results keyed by the query exactly as the client sent it.
///
/// Matching ignores case but the key does not, so `Hello` and `hello` are
/// stored separately.
pub struct SearchCache {
    results: TtlCache<String, BlogList>,
}

impl SearchCache {
    pub fn new(ttl: Duration, max_capacity: u64) -> Self {
        Self {
            results: TtlCache::new(ttl, max_capacity),
        }
    }

    pub async fn search(&self, query: &str, blogs: &[Blog]) -> (BlogList, CacheStatus) {
        self.results
            .get_or_compute(query.to_string(), async {
                Arc::new(filter_by_title(blogs, query))
            })
            .await
    }

    pub fn stats(&self) -> CacheStats {
        self.results.stats()
    }
}

/// Blogs whose title contains `query`, ignoring case, in list order
pub fn filter_by_title(blogs: &[Blog], query: &str) -> Vec<Blog> {
    let needle = query.to_lowercase();
    blogs
        .iter()
        .filter(|blog| blog.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    query: Option<String>,
}

/// `GET /api/blog-search?query=...`
pub async fn blog_search(
    State(state): State<SharedState>,
    Extension(blogs): Extension<BlogList>,
    Query(params): Query<SearchParams>,
) -> Result<Response, AppError> {
    let query = params
        .query
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing query parameter".into()))?;

    let (matches, status) = state.searches.search(&query, &blogs).await;

    match status {
        CacheStatus::Hit => info!(query = %query, "Serving search from cache"),
        CacheStatus::Miss => info!(
            query = %query,
            matches = matches.len(),
            "Computed search from blog list"
        ),
    }

    Ok((
        [("X-Cache", status.as_header_value())],
        Json(matches.as_slice()),
    )
        .into_response())
}
