//! The mutation gateway contract a managed collection drives.

use async_trait::async_trait;

use arca_shared::AppResult;

use super::entity::CollectionEntity;

/// Asynchronous backend gateway for one entity collection.
///
/// Implemented over REST by `arca-client`; the core only sees this trait so
/// the mutation flow can be exercised with in-memory doubles.
#[async_trait]
pub trait CollectionGateway<E: CollectionEntity>: Send + Sync {
    /// Fetches the full collection.
    async fn fetch(&self) -> AppResult<Vec<E>>;

    /// Creates a new record from `draft`, returning the stored record.
    async fn create(&self, draft: &E::Draft) -> AppResult<E>;

    /// Replaces the record `id` with the contents of `draft`.
    async fn update(&self, id: E::Id, draft: &E::Draft) -> AppResult<()>;

    /// Deletes the record `id`.
    async fn delete(&self, id: E::Id) -> AppResult<()>;
}
