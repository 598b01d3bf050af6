//! Obligation endpoints.

use async_trait::async_trait;

use arca_core::collection::CollectionGateway;
use arca_core::obligations::{Obligation, ObligationDraft};
use arca_shared::AppResult;
use arca_shared::types::ObligationId;

use crate::rest::RestClient;

const OBLIGATIONS_PATH: &str = "/api/Obligations";

/// REST gateway for the obligations collection.
#[derive(Clone)]
pub struct ObligationsApi {
    rest: RestClient,
}

impl ObligationsApi {
    /// Creates the gateway on top of a shared client.
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl CollectionGateway<Obligation> for ObligationsApi {
    async fn fetch(&self) -> AppResult<Vec<Obligation>> {
        self.rest.get_json(OBLIGATIONS_PATH).await
    }

    async fn create(&self, draft: &ObligationDraft) -> AppResult<Obligation> {
        self.rest.post_json(OBLIGATIONS_PATH, draft).await
    }

    async fn update(&self, id: ObligationId, draft: &ObligationDraft) -> AppResult<()> {
        self.rest
            .put_json(&format!("{OBLIGATIONS_PATH}/{id}"), draft)
            .await
    }

    async fn delete(&self, id: ObligationId) -> AppResult<()> {
        self.rest.delete(&format!("{OBLIGATIONS_PATH}/{id}")).await
    }
}
