//! Asset data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use arca_shared::types::AssetId;

use crate::collection::{CollectionEntity, EntityKind};

/// Common asset types offered by the form dropdown.
pub const ASSET_TYPES: &[&str] = &[
    "Stocks",
    "Bonds",
    "Real Estate",
    "Cash",
    "Crypto",
    "Other",
];

/// An income-generating asset mirrored from the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Backend-assigned ID.
    pub id: AssetId,
    /// Display name.
    #[serde(rename = "assetName")]
    pub name: String,
    /// Asset category (see [`ASSET_TYPES`]); the backend may omit it.
    #[serde(default)]
    pub asset_type: Option<String>,
    /// Current market value, when the backend has one.
    pub current_value: Option<Decimal>,
    /// Held quantity; doubles as the value for unpriced assets.
    #[serde(default)]
    pub quantity: Decimal,
    /// Annual yield in percent.
    pub yield_percentage: Option<Decimal>,
    /// Currency code.
    pub currency: String,
}

impl Asset {
    /// The display value: `currentValue`, falling back to `quantity`.
    #[must_use]
    pub fn display_value(&self) -> Decimal {
        self.current_value.unwrap_or(self.quantity)
    }

    /// Estimated monthly income, derived client-side for display only:
    /// `value * yield / 100 / 12`. The backend remains authoritative for
    /// all real income figures.
    #[must_use]
    pub fn monthly_income(&self) -> Decimal {
        match self.yield_percentage {
            Some(yield_pct) => {
                self.display_value() * yield_pct / Decimal::ONE_HUNDRED / Decimal::from(12)
            }
            None => Decimal::ZERO,
        }
    }
}

/// Create/update payload for an asset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDraft {
    /// Display name.
    #[serde(rename = "assetName")]
    pub name: String,
    /// Asset category.
    pub asset_type: String,
    /// Current market value.
    pub current_value: Option<Decimal>,
    /// Held quantity.
    pub quantity: Decimal,
    /// Annual yield in percent.
    pub yield_percentage: Option<Decimal>,
    /// Currency code.
    pub currency: String,
}

impl Default for AssetDraft {
    /// Defaults mirror the add-form pre-fill: type "Other", USD, zero
    /// quantity.
    fn default() -> Self {
        Self {
            name: String::new(),
            asset_type: "Other".to_string(),
            current_value: None,
            quantity: Decimal::ZERO,
            yield_percentage: None,
            currency: "USD".to_string(),
        }
    }
}

impl CollectionEntity for Asset {
    type Id = AssetId;
    type Draft = AssetDraft;

    const KIND: EntityKind = EntityKind::Assets;

    fn id(&self) -> AssetId {
        self.id
    }

    fn to_draft(&self) -> AssetDraft {
        AssetDraft {
            name: self.name.clone(),
            asset_type: self
                .asset_type
                .clone()
                .unwrap_or_else(|| "Other".to_string()),
            current_value: self.current_value,
            quantity: self.quantity,
            yield_percentage: self.yield_percentage,
            currency: self.currency.clone(),
        }
    }

    fn search_fields(&self) -> [&str; 3] {
        [
            &self.name,
            self.asset_type.as_deref().unwrap_or(""),
            &self.currency,
        ]
    }
}
