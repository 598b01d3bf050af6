//! The managed collection: cache, filter, edit session, and mutation flow.

use std::sync::Arc;

use tracing::{error, info};

use arca_shared::AppResult;

use super::cache::CollectionCache;
use super::entity::CollectionEntity;
use super::filter::filter;
use super::gateway::CollectionGateway;
use super::session::EditSession;
use crate::notify::Notices;

/// A remote collection managed by the view layer.
///
/// Composes the remote collection cache, the local filter, the single edit
/// session, and the mutation gateway. Owned by the view and mutated only in
/// response to user or network events.
///
/// Data flow: cache -> filter -> rendered list. User actions -> edit session
/// -> gateway -> (on success) cache invalidation -> re-render. The cache is
/// the sole client-side mirror; there is no optimistic local mutation.
pub struct ManagedCollection<E: CollectionEntity> {
    gateway: Arc<dyn CollectionGateway<E>>,
    cache: CollectionCache<E>,
    session: EditSession<E>,
    pending_delete: Option<E::Id>,
    notices: Notices,
}

impl<E: CollectionEntity> ManagedCollection<E> {
    /// Creates a managed collection over `gateway`, pushing notices into
    /// the shared `notices` feed.
    #[must_use]
    pub fn new(gateway: Arc<dyn CollectionGateway<E>>, notices: Notices) -> Self {
        Self {
            gateway,
            cache: CollectionCache::new(),
            session: EditSession::Closed,
            pending_delete: None,
            notices,
        }
    }

    /// Returns the cached list, fetching from the backend when stale.
    pub async fn records(&self) -> AppResult<Arc<Vec<E>>> {
        let gateway = Arc::clone(&self.gateway);
        let result = self
            .cache
            .get_or_fetch(async move { gateway.fetch().await })
            .await;
        if let Err(err) = &result {
            error!(kind = %E::KIND, %err, "collection fetch failed");
        }
        result
    }

    /// Returns the visible sublist for `term` (see [`filter`]).
    pub async fn visible(&self, term: &str) -> AppResult<Vec<E>> {
        let records = self.records().await?;
        Ok(filter(&records, term))
    }

    /// Marks the cached list stale; the next read refetches.
    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }

    /// The current edit session.
    #[must_use]
    pub fn session(&self) -> &EditSession<E> {
        &self.session
    }

    /// Opens the create form, replacing any open session.
    pub fn open_create(&mut self) {
        self.session = EditSession::creating();
    }

    /// Opens the edit form for `record`, replacing any open session.
    pub fn open_edit(&mut self, record: &E) {
        self.session = EditSession::editing(record);
    }

    /// Closes the form without submitting.
    pub fn cancel(&mut self) {
        self.session = EditSession::Closed;
    }

    /// Submits `draft` through the open session.
    ///
    /// On success the cache is invalidated (forcing a refetch on the next
    /// read), the session closes, and a success notice is emitted. On
    /// failure the cache and session are left untouched, an error notice is
    /// emitted, and the error is returned; nothing is retried automatically.
    pub async fn submit(&mut self, draft: &E::Draft) -> AppResult<()> {
        let kind = E::KIND;
        let (result, done, infinitive) = match &self.session {
            EditSession::Closed => {
                return Ok(());
            }
            EditSession::Creating { .. } => {
                (self.gateway.create(draft).await.map(|_| ()), "added", "add")
            }
            EditSession::Editing { id, .. } => {
                (self.gateway.update(*id, draft).await, "updated", "update")
            }
        };

        match result {
            Ok(()) => {
                self.cache.invalidate().await;
                self.session = EditSession::Closed;
                info!(%kind, "record {}", done);
                self.notices
                    .success(format!("{} {done} successfully", kind.singular()));
                Ok(())
            }
            Err(err) => {
                error!(%kind, %err, "mutation failed");
                self.notices.error(format!(
                    "Failed to {infinitive} {}",
                    kind.singular().to_lowercase()
                ));
                Err(err)
            }
        }
    }

    /// Records a delete request for `id`, awaiting explicit confirmation.
    ///
    /// No network call is issued until [`confirm_delete`](Self::confirm_delete).
    pub fn request_delete(&mut self, id: E::Id) {
        self.pending_delete = Some(id);
    }

    /// The delete awaiting confirmation, if any.
    #[must_use]
    pub fn pending_delete(&self) -> Option<E::Id> {
        self.pending_delete
    }

    /// Declines the pending delete; no network call is issued.
    pub fn decline_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirms and issues the pending delete.
    ///
    /// Success invalidates the cache and emits a success notice; failure
    /// emits an error notice and leaves the cache untouched. Without a
    /// pending request this is a no-op.
    pub async fn confirm_delete(&mut self) -> AppResult<()> {
        let kind = E::KIND;
        let Some(id) = self.pending_delete.take() else {
            return Ok(());
        };

        match self.gateway.delete(id).await {
            Ok(()) => {
                self.cache.invalidate().await;
                info!(%kind, %id, "record deleted");
                self.notices
                    .success(format!("{} deleted successfully", kind.singular()));
                Ok(())
            }
            Err(err) => {
                error!(%kind, %id, %err, "delete failed");
                self.notices
                    .error(format!("Failed to delete {}", kind.singular().to_lowercase()));
                Err(err)
            }
        }
    }
}
