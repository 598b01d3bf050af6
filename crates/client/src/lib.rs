//! REST gateways for the Arca backend.
//!
//! [`RestClient`] owns the HTTP connection pool and the error mapping;
//! the per-entity modules implement the `arca-core` gateway traits on top
//! of it.

pub mod assets;
pub mod liabilities;
pub mod obligations;
pub mod rest;
pub mod summary;

pub use assets::AssetsApi;
pub use liabilities::LiabilitiesApi;
pub use obligations::ObligationsApi;
pub use rest::RestClient;
pub use summary::SummaryApi;
