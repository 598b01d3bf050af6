//! Liability data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use arca_shared::types::LiabilityId;

use crate::collection::{CollectionEntity, EntityKind};
use crate::dates::lenient_optional_date;

/// Common liability types offered by the form dropdown.
pub const LIABILITY_TYPES: &[&str] = &[
    "Mortgage",
    "Credit Card",
    "Personal Loan",
    "Car Loan",
    "Student Loan",
    "Other",
];

/// A liability record mirrored from the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Liability {
    /// Backend-assigned ID.
    pub id: LiabilityId,
    /// Display name.
    pub name: String,
    /// Liability category (see [`LIABILITY_TYPES`]).
    #[serde(rename = "type")]
    pub liability_type: String,
    /// Outstanding balance.
    pub current_balance: Decimal,
    /// Monthly payment amount.
    pub monthly_payment: Decimal,
    /// Annual interest rate in percent.
    pub interest_rate: Decimal,
    /// Who the debt is owed to.
    pub creditor: String,
    /// Whether the loan is secured against collateral.
    pub is_secured: bool,
    /// Optional payoff date.
    #[serde(default, deserialize_with = "lenient_optional_date")]
    pub end_date: Option<NaiveDate>,
}

/// Create/update payload for a liability.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiabilityDraft {
    /// Display name.
    pub name: String,
    /// Liability category.
    #[serde(rename = "type")]
    pub liability_type: String,
    /// Outstanding balance.
    pub current_balance: Decimal,
    /// Monthly payment amount.
    pub monthly_payment: Decimal,
    /// Annual interest rate in percent.
    pub interest_rate: Decimal,
    /// Who the debt is owed to.
    pub creditor: String,
    /// Whether the loan is secured against collateral.
    pub is_secured: bool,
    /// Optional payoff date.
    pub end_date: Option<NaiveDate>,
}

impl Default for LiabilityDraft {
    /// Defaults mirror the add-form pre-fill: an unsecured credit card with
    /// zero amounts.
    fn default() -> Self {
        Self {
            name: String::new(),
            liability_type: "Credit Card".to_string(),
            current_balance: Decimal::ZERO,
            monthly_payment: Decimal::ZERO,
            interest_rate: Decimal::ZERO,
            creditor: String::new(),
            is_secured: false,
            end_date: None,
        }
    }
}

impl CollectionEntity for Liability {
    type Id = LiabilityId;
    type Draft = LiabilityDraft;

    const KIND: EntityKind = EntityKind::Liabilities;

    fn id(&self) -> LiabilityId {
        self.id
    }

    fn to_draft(&self) -> LiabilityDraft {
        LiabilityDraft {
            name: self.name.clone(),
            liability_type: self.liability_type.clone(),
            current_balance: self.current_balance,
            monthly_payment: self.monthly_payment,
            interest_rate: self.interest_rate,
            creditor: self.creditor.clone(),
            is_secured: self.is_secured,
            end_date: self.end_date,
        }
    }

    fn search_fields(&self) -> [&str; 3] {
        [&self.name, &self.liability_type, &self.creditor]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_record_deserializes_from_wire() {
        let json = r#"{
            "id": 3,
            "name": "Chase Sapphire Reserve",
            "type": "Credit Card",
            "currentBalance": 4200.55,
            "monthlyPayment": 250,
            "interestRate": 24.99,
            "creditor": "Chase Bank",
            "isSecured": false,
            "endDate": null
        }"#;
        let liability: Liability = serde_json::from_str(json).unwrap();
        assert_eq!(liability.id, LiabilityId::from_raw(3));
        assert_eq!(liability.liability_type, "Credit Card");
        assert_eq!(liability.current_balance, dec!(4200.55));
        assert!(!liability.is_secured);
        assert_eq!(liability.end_date, None);
    }

    #[test]
    fn test_draft_serializes_to_wire() {
        let draft = LiabilityDraft {
            name: "Mortgage".to_string(),
            liability_type: "Mortgage".to_string(),
            current_balance: dec!(310000),
            creditor: "First National".to_string(),
            is_secured: true,
            ..LiabilityDraft::default()
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["type"], "Mortgage");
        assert_eq!(value["currentBalance"].as_str(), Some("310000"));
        assert_eq!(value["isSecured"], true);
    }

    #[test]
    fn test_default_draft_prefill() {
        let draft = LiabilityDraft::default();
        assert_eq!(draft.liability_type, "Credit Card");
        assert_eq!(draft.current_balance, Decimal::ZERO);
        assert!(!draft.is_secured);
    }
}
