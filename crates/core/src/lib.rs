//! Core domain logic for Arca.
//!
//! This crate contains pure domain logic with ZERO http or terminal
//! dependencies. The reusable piece is the managed collection: a cached
//! remote list, a client-side filter, a single edit session, and the
//! mutation flow that ties them together.
//!
//! # Modules
//!
//! - `collection` - Generic managed collection (cache, filter, session, mutations)
//! - `assets` - Asset records, drafts, and forms
//! - `liabilities` - Liability records, drafts, and forms
//! - `obligations` - Obligation records, drafts, and forms
//! - `summary` - Read-only aggregate summary view
//! - `form` - String-backed form parsing with field-level errors
//! - `notify` - User-facing success/error notices
//! - `theme` - Persisted dark/light preference

pub mod assets;
pub mod collection;
pub mod dates;
pub mod form;
pub mod liabilities;
pub mod notify;
pub mod obligations;
pub mod summary;
pub mod theme;
