//! Request-level result caching.
//!
//! One analysis per normalized URL per TTL window: repeated requests are
//! served from memory instead of re-fetching the page and re-querying the
//! registry. The cache is an explicitly owned service, constructed once at
//! startup and injected (`Arc`) wherever it is needed.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::analyzer::AnalysisResult;
use crate::config::CACHE_TTL;

/// A stored result together with its insertion time.
///
/// Owned exclusively by the cache; expiry is judged against `stored_at`, not
/// against the result's own analysis timestamp.
struct CacheEntry {
    result: AnalysisResult,
    stored_at: Instant,
}

/// Counters and size surfaced by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Live entries currently stored (expired-but-unevicted entries count
    /// until a read sweeps them).
    pub entries: usize,
    /// Reads answered from the cache.
    pub hits: u64,
    /// Reads that found nothing usable.
    pub misses: u64,
}

/// In-process TTL cache of analysis results, keyed by normalized URL.
///
/// Concurrent reads are safe; concurrent writes to the same key are
/// last-write-wins, which is acceptable because re-analyzing the same URL
/// within the TTL window yields an equivalent result. Expired entries are
/// evicted lazily on read.
pub struct ResultCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ResultCache {
    /// Creates a cache with the standard 24-hour TTL.
    pub fn new() -> Self {
        Self::with_ttl(CACHE_TTL)
    }

    /// Creates a cache with a custom TTL. Used by tests; production code
    /// always runs with [`CACHE_TTL`].
    pub fn with_ttl(ttl: Duration) -> Self {
        ResultCache {
            entries: RwLock::new(HashMap::new()),
            ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Returns the cached result for `key`, if present and fresh.
    ///
    /// A hit returns the prior result verbatim, original analysis timestamp
    /// included; deciding whether that staleness matters is the consumer's
    /// call. An entry whose age has reached the TTL is removed and counted
    /// as a miss.
    pub async fn get(&self, key: &str) -> Option<AnalysisResult> {
        let expired = {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.stored_at.elapsed() < self.ttl => {
                    self.hits.fetch_add(1, Ordering::Relaxed);
                    return Some(entry.result.clone());
                }
                Some(_) => true,
                None => false,
            }
        };

        if expired {
            let mut entries = self.entries.write().await;
            // Re-check under the write lock: a concurrent put may have
            // replaced the expired entry with a fresh one
            if entries
                .get(key)
                .is_some_and(|entry| entry.stored_at.elapsed() >= self.ttl)
            {
                entries.remove(key);
                log::debug!("Evicted expired cache entry for {key}");
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Stores `result` under `key`, replacing (never merging) any previous
    /// entry and restarting its TTL.
    pub async fn put(&self, key: String, result: AnalysisResult) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key,
            CacheEntry {
                result,
                stored_at: Instant::now(),
            },
        );
    }

    /// Snapshot of entry count and hit/miss counters.
    pub async fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.read().await.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carbon::calculate_carbon;
    use crate::hosting::HostingDescriptor;
    use crate::score::calculate_score;
    use chrono::Utc;

    fn sample_result(url: &str) -> AnalysisResult {
        let hosting = HostingDescriptor::degraded();
        let carbon = calculate_carbon(1024 * 1024, hosting.is_green);
        let score = calculate_score(&carbon, &hosting);
        AnalysisResult {
            url: url.to_string(),
            score,
            hosting,
            carbon,
            page_weight_bytes: 1024 * 1024,
            analyzed_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_get_returns_stored_result_verbatim() {
        let cache = ResultCache::new();
        let result = sample_result("https://example.com/");
        cache.put("https://example.com/".to_string(), result.clone()).await;

        let fetched = cache.get("https://example.com/").await.unwrap();
        assert_eq!(fetched, result);
        // Original timestamp preserved on a hit
        assert_eq!(fetched.analyzed_at, result.analyzed_at);
    }

    #[tokio::test]
    async fn test_miss_on_unknown_key() {
        let cache = ResultCache::new();
        assert!(cache.get("https://example.com/").await.is_none());

        let stats = cache.stats().await;
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.entries, 0);
    }

    #[tokio::test]
    async fn test_entry_expires_after_ttl() {
        let cache = ResultCache::with_ttl(Duration::from_millis(20));
        cache
            .put("key".to_string(), sample_result("https://example.com/"))
            .await;
        assert!(cache.get("key").await.is_some());

        tokio::time::sleep(Duration::from_millis(40)).await;
        assert!(cache.get("key").await.is_none());

        // Lazy eviction removed the entry on that read
        assert_eq!(cache.stats().await.entries, 0);
    }

    #[tokio::test]
    async fn test_zero_ttl_expires_immediately() {
        let cache = ResultCache::with_ttl(Duration::ZERO);
        cache
            .put("key".to_string(), sample_result("https://example.com/"))
            .await;
        // now - stored_at >= TTL holds as soon as the entry lands
        assert!(cache.get("key").await.is_none());
    }

    #[tokio::test]
    async fn test_put_replaces_previous_entry() {
        let cache = ResultCache::new();
        let first = sample_result("https://example.com/");
        let mut second = sample_result("https://example.com/");
        second.page_weight_bytes = 42;

        cache.put("key".to_string(), first).await;
        cache.put("key".to_string(), second.clone()).await;

        let fetched = cache.get("key").await.unwrap();
        assert_eq!(fetched.page_weight_bytes, 42);
        assert_eq!(fetched, second);
        assert_eq!(cache.stats().await.entries, 1);
    }

    #[tokio::test]
    async fn test_stats_count_hits_and_misses() {
        let cache = ResultCache::new();
        cache
            .put("key".to_string(), sample_result("https://example.com/"))
            .await;

        cache.get("key").await;
        cache.get("key").await;
        cache.get("absent").await;

        let stats = cache.stats().await;
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
    }
}
