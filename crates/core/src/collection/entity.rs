//! The entity contract a managed collection is parameterized by.

use std::fmt::Display;

/// The entity kinds the application manages.
///
/// Used as the cache key and in user-facing notices, mirroring the query
/// keys the backend exposes collections under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Income-generating assets.
    Assets,
    /// Debts and loans.
    Liabilities,
    /// Recurring commitments to others.
    Obligations,
    /// The server-computed aggregate summary.
    Summary,
}

impl EntityKind {
    /// Returns the collection name used as the cache key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assets => "assets",
            Self::Liabilities => "liabilities",
            Self::Obligations => "obligations",
            Self::Summary => "summary",
        }
    }

    /// Returns the singular label used in notices ("Asset added successfully").
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Assets => "Asset",
            Self::Liabilities => "Liability",
            Self::Obligations => "Obligation",
            Self::Summary => "Summary",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record type manageable by a [`ManagedCollection`](super::ManagedCollection).
///
/// Implementations are flat records mirrored from the backend; the client
/// never owns their lifecycle, only reflects it.
pub trait CollectionEntity: Clone + Send + Sync + 'static {
    /// Typed backend-assigned identifier.
    type Id: Copy + Eq + Send + Sync + Display + 'static;

    /// The create/update payload for this entity.
    type Draft: Clone + Default + Send + Sync + 'static;

    /// Which collection this entity belongs to.
    const KIND: EntityKind;

    /// Returns the record's identifier.
    fn id(&self) -> Self::Id;

    /// Builds a draft pre-filled from this record, for the edit form.
    fn to_draft(&self) -> Self::Draft;

    /// The fixed triple of string fields the local filter matches against:
    /// name, type/category, and one entity-specific secondary field.
    fn search_fields(&self) -> [&str; 3];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(EntityKind::Assets.as_str(), "assets");
        assert_eq!(EntityKind::Liabilities.singular(), "Liability");
        assert_eq!(EntityKind::Obligations.to_string(), "obligations");
        assert_eq!(EntityKind::Summary.as_str(), "summary");
    }
}
