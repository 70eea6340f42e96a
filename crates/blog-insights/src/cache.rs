//! Time-bounded get-or-compute cache
//!
//! Wraps a moka cache with our own freshness check. Entries are stamped with
//! the instant they were stored; a lookup that finds an entry older than the
//! TTL removes it and computes a replacement. Concurrent lookups for the same
//! key share a single computation.

use crate::types::CacheStats;
use moka::future::Cache;
use moka::ops::compute::Op;
use std::future::Future;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Whether a lookup was served from an existing entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

impl CacheStatus {
    pub fn as_header_value(self) -> &'static str {
        match self {
            Self::Hit => "HIT",
            Self::Miss => "MISS",
        }
    }
}

#[derive(Clone)]
struct Stamped<V> {
    value: V,
    stored_at: Instant,
}

pub struct TtlCache<K, V> {
    entries: Cache<K, Stamped<V>>,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<K, V> TtlCache<K, V>
where
    K: Hash + Eq + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    pub fn new(ttl: Duration, max_capacity: u64) -> Self {
        Self {
            entries: Cache::builder().max_capacity(max_capacity).build(),
            ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Return the fresh value for `key`, computing and storing one if the
    /// entry is missing or older than the TTL.
    pub async fn get_or_compute<F>(&self, key: K, compute: F) -> (V, CacheStatus)
    where
        F: Future<Output = V>,
    {
        self.evict_stale(&key).await;

        let mut computed = false;
        let entry = self
            .entries
            .get_with(key, async {
                computed = true;
                let value = compute.await;
                Stamped {
                    value,
                    stored_at: Instant::now(),
                }
            })
            .await;

        (entry.value, self.record(computed))
    }

    /// Fallible variant of [`get_or_compute`](Self::get_or_compute).
    ///
    /// Errors are shared with every caller waiting on the same computation
    /// and are never stored, so the next lookup computes again.
    pub async fn try_get_or_compute<F, E>(
        &self,
        key: K,
        compute: F,
    ) -> Result<(V, CacheStatus), Arc<E>>
    where
        F: Future<Output = Result<V, E>>,
        E: Send + Sync + 'static,
    {
        self.evict_stale(&key).await;

        let mut computed = false;
        let entry = self
            .entries
            .try_get_with(key, async {
                computed = true;
                let value = compute.await?;
                Ok(Stamped {
                    value,
                    stored_at: Instant::now(),
                })
            })
            .await?;

        Ok((entry.value, self.record(computed)))
    }

    /// Drop the entry for `key`, forcing the next lookup to compute
    pub async fn invalidate(&self, key: &K) {
        self.entries.invalidate(key).await;
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.entry_count(),
            ttl_secs: self.ttl.as_secs(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Remove the entry for `key` only if the stored one is stale. Runs as a
    /// single per-key operation so a fresh entry written by a concurrent
    /// caller is left alone.
    async fn evict_stale(&self, key: &K) {
        let ttl = self.ttl;
        self.entries
            .entry(key.clone())
            .and_compute_with(|existing| {
                let op = match existing {
                    Some(entry) if entry.value().stored_at.elapsed() > ttl => Op::Remove,
                    _ => Op::Nop,
                };
                std::future::ready(op)
            })
            .await;
    }

    fn record(&self, computed: bool) -> CacheStatus {
        if computed {
            self.misses.fetch_add(1, Ordering::Relaxed);
            CacheStatus::Miss
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
            CacheStatus::Hit
        }
    }
}
