//! The single open create/edit form state.

use super::entity::CollectionEntity;

/// Transient state backing the one modal form a page can show.
///
/// Only one session is open at a time; opening a new one while another is
/// open simply replaces it. Submit-success and cancel both return to
/// [`EditSession::Closed`].
#[derive(Debug, Clone)]
pub enum EditSession<E: CollectionEntity> {
    /// No form open.
    Closed,
    /// Creating a new record; the draft carries type-specific defaults.
    Creating {
        /// Pre-filled draft for the form.
        draft: E::Draft,
    },
    /// Editing an existing record; the draft is pre-filled from it.
    Editing {
        /// The record being edited.
        id: E::Id,
        /// Pre-filled draft for the form.
        draft: E::Draft,
    },
}

impl<E: CollectionEntity> EditSession<E> {
    /// Opens a create session pre-filled with entity defaults.
    #[must_use]
    pub fn creating() -> Self {
        Self::Creating {
            draft: E::Draft::default(),
        }
    }

    /// Opens an edit session pre-filled from `record`.
    #[must_use]
    pub fn editing(record: &E) -> Self {
        Self::Editing {
            id: record.id(),
            draft: record.to_draft(),
        }
    }

    /// Whether any form is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Returns the target record ID when editing.
    #[must_use]
    pub fn editing_id(&self) -> Option<E::Id> {
        match self {
            Self::Editing { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Returns the pre-filled draft while a form is open.
    #[must_use]
    pub fn draft(&self) -> Option<&E::Draft> {
        match self {
            Self::Closed => None,
            Self::Creating { draft } | Self::Editing { draft, .. } => Some(draft),
        }
    }
}

impl<E: CollectionEntity> Default for EditSession<E> {
    fn default() -> Self {
        Self::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obligations::Obligation;
    use arca_shared::types::ObligationId;
    use rust_decimal_macros::dec;

    fn record() -> Obligation {
        Obligation {
            id: ObligationId::from_raw(9),
            name: "School Fees".to_string(),
            obligation_type: "Kids Education".to_string(),
            monthly_amount: dec!(450),
            beneficiary: "Kids".to_string(),
            end_date: None,
        }
    }

    #[test]
    fn test_default_is_closed() {
        let session: EditSession<Obligation> = EditSession::default();
        assert!(!session.is_open());
        assert!(session.draft().is_none());
    }

    #[test]
    fn test_creating_prefills_defaults() {
        let session: EditSession<Obligation> = EditSession::creating();
        assert!(session.is_open());
        assert!(session.editing_id().is_none());
        let draft = session.draft().unwrap();
        assert_eq!(draft.obligation_type, "Other");
    }

    #[test]
    fn test_editing_prefills_from_record() {
        let session = EditSession::editing(&record());
        assert_eq!(session.editing_id(), Some(ObligationId::from_raw(9)));
        let draft = session.draft().unwrap();
        assert_eq!(draft.name, "School Fees");
        assert_eq!(draft.monthly_amount, dec!(450));
    }

    #[test]
    fn test_opening_replaces_existing_session() {
        let mut session: EditSession<Obligation> = EditSession::creating();
        session = EditSession::editing(&record());
        assert_eq!(session.editing_id(), Some(ObligationId::from_raw(9)));
    }
}
