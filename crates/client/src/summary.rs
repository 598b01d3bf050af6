//! Portfolio summary endpoint.

use async_trait::async_trait;

use arca_core::summary::{Summary, SummaryGateway};
use arca_shared::AppResult;

use crate::rest::RestClient;

const SUMMARY_PATH: &str = "/api/Assets/summary";

/// REST gateway for the backend-computed summary.
#[derive(Clone)]
pub struct SummaryApi {
    rest: RestClient,
}

impl SummaryApi {
    /// Creates the gateway on top of a shared client.
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl SummaryGateway for SummaryApi {
    async fn fetch_summary(&self) -> AppResult<Summary> {
        self.rest.get_json(SUMMARY_PATH).await
    }
}
