//! Asset records, drafts, and the asset form.

pub mod form;
pub mod types;

pub use form::AssetForm;
pub use types::{ASSET_TYPES, Asset, AssetDraft};
