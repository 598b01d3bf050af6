//! Obligation records, drafts, and the obligation form.

pub mod form;
pub mod types;

pub use form::ObligationForm;
pub use types::{OBLIGATION_TYPES, Obligation, ObligationDraft};
