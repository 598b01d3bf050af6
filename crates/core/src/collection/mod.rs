//! Generic managed collection view.
//!
//! One pattern shared by the Assets, Liabilities, and Obligations pages:
//! fetch a list, filter it client-side by search text, and drive a single
//! edit form wired to mutations that invalidate the cached list.

pub mod cache;
pub mod entity;
pub mod filter;
pub mod gateway;
pub mod session;
pub mod view;

#[cfg(test)]
mod filter_props;


pub use cache::CollectionCache;
pub use entity::{CollectionEntity, EntityKind};
pub use filter::filter;
pub use gateway::CollectionGateway;
pub use session::EditSession;
pub use view::ManagedCollection;
