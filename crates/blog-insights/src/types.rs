//! Data types for the blog insights service

use serde::Serialize;
use std::sync::Arc;

pub use blog_api_client::Blog;

/// The upstream blog list, shared read-only across requests
pub type BlogList = Arc<Vec<Blog>>;

/// Counters for one caching tier
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    pub entries: u64,
    pub ttl_secs: u64,
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug, Serialize)]
pub struct CacheReport {
    pub blogs: CacheStats,
    pub search: CacheStats,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
    pub cache: CacheReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_stats_default() {
        let stats = CacheStats::default();
        assert_eq!(stats.entries, 0);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            uptime_secs: 3600,
            cache: CacheReport {
                blogs: CacheStats {
                    entries: 1,
                    ttl_secs: 5,
                    hits: 40,
                    misses: 2,
                },
                search: CacheStats::default(),
            },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["uptime_secs"], 3600);
        assert_eq!(json["cache"]["blogs"]["hits"], 40);
        assert_eq!(json["cache"]["search"]["entries"], 0);
    }
}
