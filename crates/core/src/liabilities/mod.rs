//! Liability records, drafts, and the liability form.

pub mod form;
pub mod types;

pub use form::LiabilityForm;
pub use types::{LIABILITY_TYPES, Liability, LiabilityDraft};
