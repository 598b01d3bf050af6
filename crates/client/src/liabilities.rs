//! Liability endpoints.

use async_trait::async_trait;

use arca_core::collection::CollectionGateway;
use arca_core::liabilities::{Liability, LiabilityDraft};
use arca_shared::AppResult;
use arca_shared::types::LiabilityId;

use crate::rest::RestClient;

const LIABILITIES_PATH: &str = "/api/Liabilities";

/// REST gateway for the liabilities collection.
#[derive(Clone)]
pub struct LiabilitiesApi {
    rest: RestClient,
}

impl LiabilitiesApi {
    /// Creates the gateway on top of a shared client.
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl CollectionGateway<Liability> for LiabilitiesApi {
    async fn fetch(&self) -> AppResult<Vec<Liability>> {
        self.rest.get_json(LIABILITIES_PATH).await
    }

    async fn create(&self, draft: &LiabilityDraft) -> AppResult<Liability> {
        self.rest.post_json(LIABILITIES_PATH, draft).await
    }

    async fn update(&self, id: LiabilityId, draft: &LiabilityDraft) -> AppResult<()> {
        self.rest
            .put_json(&format!("{LIABILITIES_PATH}/{id}"), draft)
            .await
    }

    async fn delete(&self, id: LiabilityId) -> AppResult<()> {
        self.rest.delete(&format!("{LIABILITIES_PATH}/{id}")).await
    }
}
