//! Upstream blog source and the memoized fetch in front of it

use crate::cache::{CacheStatus, TtlCache};
use crate::types::{BlogList, CacheStats};
use async_trait::async_trait;
use blog_api_client::{Blog, BlogApiClient, BlogApiError};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Anything that can produce the full blog list
#[async_trait]
pub trait BlogSource: Send + Sync {
    async fn fetch_blogs(&self) -> Result<Vec<Blog>, BlogApiError>;
}

#[async_trait]
impl BlogSource for BlogApiClient {
    async fn fetch_blogs(&self) -> Result<Vec<Blog>, BlogApiError> {
        BlogApiClient::fetch_blogs(self).await
    }
}

/// Single-slot memoized fetch of the blog list.
///
/// Callers within the TTL share one stored list, and callers arriving while a
/// fetch is in flight wait on that fetch instead of starting their own.
/// Failed fetches are not stored.
pub struct CachedBlogSource {
    source: Arc<dyn BlogSource>,
    cache: TtlCache<(), BlogList>,
}

impl CachedBlogSource {
    pub fn new(source: Arc<dyn BlogSource>, ttl: Duration) -> Self {
        Self {
            source,
            cache: TtlCache::new(ttl, 1),
        }
    }

    pub async fn blogs(&self) -> Result<BlogList, Arc<BlogApiError>> {
        let (blogs, status) = self
            .cache
            .try_get_or_compute((), async {
                self.source.fetch_blogs().await.map(Arc::new)
            })
            .await?;

        if status == CacheStatus::Hit {
            debug!(count = blogs.len(), "Using memoized blog list");
        }

        Ok(blogs)
    }

    /// Forget the stored list so the next call fetches again
    pub async fn invalidate(&self) {
        self.cache.invalidate(&()).await;
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Canned source that counts fetches and can be switched to failing
    pub struct StubSource {
        blogs: Vec<Blog>,
        failing: AtomicBool,
        calls: AtomicUsize,
    }

    impl StubSource {
        pub fn new(blogs: Vec<Blog>) -> Self {
            Self {
                blogs,
                failing: AtomicBool::new(false),
                calls: AtomicUsize::new(0),
            }
        }

        /// Starts out failing; serves `blogs` once switched back
        pub fn failing(blogs: Vec<Blog>) -> Self {
            let source = Self::new(blogs);
            source.set_failing(true);
            source
        }

        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl BlogSource for StubSource {
        async fn fetch_blogs(&self) -> Result<Vec<Blog>, BlogApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(50)).await;
            if self.failing.load(Ordering::SeqCst) {
                return Err(BlogApiError::Status(503));
            }
            Ok(self.blogs.clone())
        }
    }

    const TTL: Duration = Duration::from_secs(5);

    fn sample() -> Vec<Blog> {
        vec![Blog::new("Hello World"), Blog::new("Privacy Policy")]
    }

    #[tokio::test(start_paused = true)]
    async fn test_reuses_list_within_ttl() {
        let stub = Arc::new(StubSource::new(sample()));
        let cached = CachedBlogSource::new(stub.clone(), TTL);

        let first = cached.blogs().await.unwrap();
        tokio::time::advance(Duration::from_millis(4_900)).await;
        let second = cached.blogs().await.unwrap();

        assert_eq!(stub.calls(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test(start_paused = true)]
    async fn test_refetches_once_after_ttl_under_concurrency() {
        let stub = Arc::new(StubSource::new(sample()));
        let cached = CachedBlogSource::new(stub.clone(), TTL);

        cached.blogs().await.unwrap();
        tokio::time::advance(TTL + Duration::from_millis(1)).await;

        let results = futures::future::join_all((0..20).map(|_| cached.blogs())).await;

        assert!(results.iter().all(|r| r.is_ok()));
        assert_eq!(stub.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_is_retried_on_next_call() {
        let stub = Arc::new(StubSource::failing(sample()));
        let cached = CachedBlogSource::new(stub.clone(), TTL);

        let err = cached.blogs().await.unwrap_err();
        assert!(matches!(*err, BlogApiError::Status(503)));

        stub.set_failing(false);
        let blogs = cached.blogs().await.unwrap();

        assert_eq!(blogs.len(), 2);
        assert_eq!(stub.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalidate_forces_fetch() {
        let stub = Arc::new(StubSource::new(sample()));
        let cached = CachedBlogSource::new(stub.clone(), TTL);

        cached.blogs().await.unwrap();
        cached.invalidate().await;
        cached.blogs().await.unwrap();

        assert_eq!(stub.calls(), 2);
    }
}
