//! Remote collection caching using Moka.
//!
//! Each entity kind caches its last-fetched list. Concurrent reads of an
//! unexpired entry coalesce onto one in-flight fetch; invalidation marks the
//! entry stale so the next read refetches.

use moka::future::Cache;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use arca_shared::{AppError, AppResult};

use super::entity::{CollectionEntity, EntityKind};

/// Default cache capacity (number of entity kinds).
const DEFAULT_CACHE_CAPACITY: u64 = 8;

/// Default time-to-live for cache entries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

/// Cache for a remote collection's last-fetched list.
///
/// Keyed by [`EntityKind`]; stores the whole list behind an `Arc` so every
/// reader shares the same in-memory copy. Thread-safe and cheap to clone.
#[derive(Clone)]
pub struct CollectionCache<E: CollectionEntity> {
    cache: Cache<EntityKind, Arc<Vec<E>>>,
}

impl<E: CollectionEntity> CollectionCache<E> {
    /// Creates a new collection cache with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a new collection cache with custom capacity and TTL.
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Returns the cached list, fetching it if absent or expired.
    ///
    /// Concurrent callers while a fetch is in flight all wait on the same
    /// fetch; no duplicate request is issued for the same key. A failed
    /// fetch is NOT cached: every caller waiting on it receives the error
    /// and the next read retries.
    pub async fn get_or_fetch<F>(&self, fetch: F) -> AppResult<Arc<Vec<E>>>
    where
        F: Future<Output = AppResult<Vec<E>>>,
    {
        self.cache
            .try_get_with(E::KIND, async move { fetch.await.map(Arc::new) })
            .await
            .map_err(|err: Arc<AppError>| (*err).clone())
    }

    /// Returns the cached list without fetching, if present.
    pub async fn peek(&self) -> Option<Arc<Vec<E>>> {
        self.cache.get(&E::KIND).await
    }

    /// Marks the cached list stale; the next read triggers a network fetch.
    pub async fn invalidate(&self) {
        self.cache.invalidate(&E::KIND).await;
    }

    /// Runs cache maintenance tasks.
    ///
    /// Moka handles expiry in the background; calling this explicitly makes
    /// invalidations visible to `entry_count` in tests.
    pub async fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks().await;
    }
}

impl<E: CollectionEntity> Default for CollectionCache<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obligations::Obligation;
    use arca_shared::types::ObligationId;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn obligation(id: i64, name: &str) -> Obligation {
        Obligation {
            id: ObligationId::from_raw(id),
            name: name.to_string(),
            obligation_type: "Other".to_string(),
            monthly_amount: dec!(100),
            beneficiary: "Family".to_string(),
            end_date: None,
        }
    }

    #[tokio::test]
    async fn test_miss_then_hit() {
        let cache: CollectionCache<Obligation> = CollectionCache::new();
        let fetches = AtomicUsize::new(0);

        let first = cache
            .get_or_fetch(async {
                fetches.fetch_add(1, Ordering::SeqCst);
                Ok(vec![obligation(1, "Tuition")])
            })
            .await
            .unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(fetches.load(Ordering::SeqCst), 1);

        // Second read must come from the cache without a new fetch.
        let second = cache
            .get_or_fetch(async {
                fetches.fetch_add(1, Ordering::SeqCst);
                Ok(vec![])
            })
            .await
            .unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let cache: CollectionCache<Obligation> = CollectionCache::new();

        let first = cache
            .get_or_fetch(async { Ok(vec![obligation(1, "Tuition")]) })
            .await
            .unwrap();
        assert_eq!(first.len(), 1);

        cache.invalidate().await;
        cache.run_pending_tasks().await;

        let second = cache
            .get_or_fetch(async { Ok(vec![obligation(1, "Tuition"), obligation(2, "Charity")]) })
            .await
            .unwrap();
        assert_eq!(second.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_not_cached() {
        let cache: CollectionCache<Obligation> = CollectionCache::new();

        let err = cache
            .get_or_fetch(async { Err(AppError::Transport("connection refused".into())) })
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "TRANSPORT_ERROR");

        // Retry succeeds; the error was not cached.
        let list = cache
            .get_or_fetch(async { Ok(vec![obligation(1, "Tuition")]) })
            .await
            .unwrap();
        assert_eq!(list.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_reads_coalesce() {
        let cache: CollectionCache<Obligation> = CollectionCache::new();
        let fetches = Arc::new(AtomicUsize::new(0));

        let slow_fetch = |counter: Arc<AtomicUsize>| async move {
            counter.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok(vec![obligation(1, "Tuition")])
        };

        let (a, b) = tokio::join!(
            cache.get_or_fetch(slow_fetch(fetches.clone())),
            cache.get_or_fetch(slow_fetch(fetches.clone())),
        );

        assert_eq!(a.unwrap().len(), 1);
        assert_eq!(b.unwrap().len(), 1);
        assert_eq!(
            fetches.load(Ordering::SeqCst),
            1,
            "Concurrent reads must share one fetch"
        );
    }

    #[tokio::test]
    async fn test_peek_does_not_fetch() {
        let cache: CollectionCache<Obligation> = CollectionCache::new();
        assert!(cache.peek().await.is_none());

        let _ = cache
            .get_or_fetch(async { Ok(vec![obligation(1, "Tuition")]) })
            .await
            .unwrap();
        assert!(cache.peek().await.is_some());
    }
}
