//! Obligation data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use arca_shared::types::ObligationId;

use crate::collection::{CollectionEntity, EntityKind};
use crate::dates::lenient_optional_date;

/// Common obligation types offered by the form dropdown.
pub const OBLIGATION_TYPES: &[&str] = &[
    "Kids Education",
    "Family Medical",
    "Parents Support",
    "Charity Pledge",
    "Studies",
    "Other",
];

/// A recurring commitment mirrored from the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Obligation {
    /// Backend-assigned ID.
    pub id: ObligationId,
    /// Display name.
    pub name: String,
    /// Obligation category (see [`OBLIGATION_TYPES`]).
    #[serde(rename = "type")]
    pub obligation_type: String,
    /// Committed monthly amount.
    pub monthly_amount: Decimal,
    /// Who the commitment supports.
    pub beneficiary: String,
    /// Optional end date.
    #[serde(default, deserialize_with = "lenient_optional_date")]
    pub end_date: Option<NaiveDate>,
}

/// Create/update payload for an obligation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObligationDraft {
    /// Display name.
    pub name: String,
    /// Obligation category.
    #[serde(rename = "type")]
    pub obligation_type: String,
    /// Committed monthly amount.
    pub monthly_amount: Decimal,
    /// Who the commitment supports.
    pub beneficiary: String,
    /// Optional end date.
    pub end_date: Option<NaiveDate>,
}

impl Default for ObligationDraft {
    /// Defaults mirror the add-form pre-fill: type "Other", zero amount.
    fn default() -> Self {
        Self {
            name: String::new(),
            obligation_type: "Other".to_string(),
            monthly_amount: Decimal::ZERO,
            beneficiary: String::new(),
            end_date: None,
        }
    }
}

impl CollectionEntity for Obligation {
    type Id = ObligationId;
    type Draft = ObligationDraft;

    const KIND: EntityKind = EntityKind::Obligations;

    fn id(&self) -> ObligationId {
        self.id
    }

    fn to_draft(&self) -> ObligationDraft {
        ObligationDraft {
            name: self.name.clone(),
            obligation_type: self.obligation_type.clone(),
            monthly_amount: self.monthly_amount,
            beneficiary: self.beneficiary.clone(),
            end_date: self.end_date,
        }
    }

    fn search_fields(&self) -> [&str; 3] {
        [&self.name, &self.obligation_type, &self.beneficiary]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_record_deserializes_from_wire() {
        let json = r#"{
            "id": 11,
            "name": "School Fees",
            "type": "Kids Education",
            "monthlyAmount": 450,
            "beneficiary": "Kids",
            "endDate": "2032-07-01T00:00:00"
        }"#;
        let obligation: Obligation = serde_json::from_str(json).unwrap();
        assert_eq!(obligation.monthly_amount, dec!(450));
        assert_eq!(
            obligation.end_date,
            Some(NaiveDate::from_ymd_opt(2032, 7, 1).unwrap())
        );
    }

    #[test]
    fn test_default_draft_prefill() {
        let draft = ObligationDraft::default();
        assert_eq!(draft.obligation_type, "Other");
        assert_eq!(draft.monthly_amount, Decimal::ZERO);
        assert!(draft.beneficiary.is_empty());
    }
}
