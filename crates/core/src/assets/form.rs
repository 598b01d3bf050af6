//! String-backed asset form.

use rust_decimal::Decimal;

use crate::form::{FieldError, FormResult, amount_or, optional_amount, required_text};

use super::types::AssetDraft;

/// Raw form state for the asset modal.
#[derive(Debug, Clone, Default)]
pub struct AssetForm {
    /// Display name.
    pub name: String,
    /// Selected asset category.
    pub asset_type: String,
    /// Current market value; optional for unpriced assets.
    pub current_value: String,
    /// Held quantity.
    pub quantity: String,
    /// Annual yield in percent.
    pub yield_percentage: String,
    /// Currency code.
    pub currency: String,
}

impl AssetForm {
    /// Builds a form pre-filled from `draft`.
    #[must_use]
    pub fn from_draft(draft: &AssetDraft) -> Self {
        Self {
            name: draft.name.clone(),
            asset_type: draft.asset_type.clone(),
            current_value: draft
                .current_value
                .map(|v| v.to_string())
                .unwrap_or_default(),
            quantity: draft.quantity.to_string(),
            yield_percentage: draft
                .yield_percentage
                .map(|v| v.to_string())
                .unwrap_or_default(),
            currency: draft.currency.clone(),
        }
    }

    /// Coerces the form into a draft, or returns every field error.
    pub fn parse(&self) -> FormResult<AssetDraft> {
        let mut errors: Vec<FieldError> = Vec::new();

        let name = required_text("assetName", &self.name)
            .map_err(|e| errors.push(e))
            .ok();
        let currency = required_text("currency", &self.currency)
            .map_err(|e| errors.push(e))
            .ok();
        let current_value = optional_amount("currentValue", &self.current_value)
            .map_err(|e| errors.push(e))
            .ok();
        let quantity = amount_or("quantity", &self.quantity, Decimal::ZERO)
            .map_err(|e| errors.push(e))
            .ok();
        let yield_percentage = optional_amount("yieldPercentage", &self.yield_percentage)
            .map_err(|e| errors.push(e))
            .ok();

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(AssetDraft {
            name: name.unwrap_or_default(),
            asset_type: self.asset_type.clone(),
            current_value: current_value.unwrap_or_default(),
            quantity: quantity.unwrap_or_default(),
            yield_percentage: yield_percentage.unwrap_or_default(),
            currency: currency.unwrap_or_default(),
        })
    }
}
