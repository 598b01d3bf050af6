//! Asset endpoints.

use async_trait::async_trait;

use arca_core::assets::{Asset, AssetDraft};
use arca_core::collection::CollectionGateway;
use arca_shared::AppResult;
use arca_shared::types::AssetId;

use crate::rest::RestClient;

const ASSETS_PATH: &str = "/api/Assets";

/// REST gateway for the assets collection.
#[derive(Clone)]
pub struct AssetsApi {
    rest: RestClient,
}

impl AssetsApi {
    /// Creates the gateway on top of a shared client.
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl CollectionGateway<Asset> for AssetsApi {
    async fn fetch(&self) -> AppResult<Vec<Asset>> {
        self.rest.get_json(ASSETS_PATH).await
    }

    async fn create(&self, draft: &AssetDraft) -> AppResult<Asset> {
        self.rest.post_json(ASSETS_PATH, draft).await
    }

    async fn update(&self, id: AssetId, draft: &AssetDraft) -> AppResult<()> {
        self.rest
            .put_json(&format!("{ASSETS_PATH}/{id}"), draft)
            .await
    }

    async fn delete(&self, id: AssetId) -> AppResult<()> {
        self.rest.delete(&format!("{ASSETS_PATH}/{id}")).await
    }
}
