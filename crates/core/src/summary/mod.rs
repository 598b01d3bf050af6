//! Cached portfolio summary.
//!
//! The summary is a single backend-computed document rather than a record
//! list, so it gets its own gateway and a one-entry cache. Mutations on any
//! collection invalidate it, matching the collections themselves.

pub mod types;

pub use types::{Summary, TopIncomeGenerator};

use async_trait::async_trait;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tracing::error;

use arca_shared::{AppError, AppResult};

use crate::collection::EntityKind;

/// Time-to-live matching the collection caches (5 minutes).
const SUMMARY_TTL_SECS: u64 = 300;

/// Remote source of the portfolio summary.
#[async_trait]
pub trait SummaryGateway: Send + Sync {
    /// Fetches the current summary from the backend.
    async fn fetch_summary(&self) -> AppResult<Summary>;
}

/// Summary document with read-through caching.
///
/// Cheap to clone; clones share the cache.
#[derive(Clone)]
pub struct ManagedSummary {
    gateway: Arc<dyn SummaryGateway>,
    cache: Cache<EntityKind, Arc<Summary>>,
}

impl ManagedSummary {
    /// Creates a managed summary backed by `gateway`.
    #[must_use]
    pub fn new(gateway: Arc<dyn SummaryGateway>) -> Self {
        let cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(Duration::from_secs(SUMMARY_TTL_SECS))
            .build();

        Self { gateway, cache }
    }

    /// Returns the summary, fetching it if absent or expired.
    ///
    /// A failed fetch is not cached; the next read retries.
    pub async fn load(&self) -> AppResult<Arc<Summary>> {
        let gateway = Arc::clone(&self.gateway);
        self.cache
            .try_get_with(EntityKind::Summary, async move {
                gateway.fetch_summary().await.map(Arc::new)
            })
            .await
            .map_err(|err: Arc<AppError>| {
                error!(error = %err, "Failed to load summary");
                (*err).clone()
            })
    }

    /// Returns the cached summary without fetching, if present.
    pub async fn peek(&self) -> Option<Arc<Summary>> {
        self.cache.get(&EntityKind::Summary).await
    }

    /// Marks the summary stale; the next read refetches.
    pub async fn invalidate(&self) {
        self.cache.invalidate(&EntityKind::Summary).await;
    }
}
