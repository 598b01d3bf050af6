//! String-backed liability form.

use rust_decimal::Decimal;

use crate::form::{FieldError, FormResult, amount_or, optional_date, required_amount, required_text};

use super::types::LiabilityDraft;

/// Raw form state for the liability modal.
///
/// Fields hold the text exactly as typed; [`parse`](Self::parse) coerces
/// them into a [`LiabilityDraft`] or reports every field error found.
#[derive(Debug, Clone, Default)]
pub struct LiabilityForm {
    /// Display name.
    pub name: String,
    /// Selected liability category.
    pub liability_type: String,
    /// Outstanding balance.
    pub current_balance: String,
    /// Monthly payment amount.
    pub monthly_payment: String,
    /// Annual interest rate in percent.
    pub interest_rate: String,
    /// Who the debt is owed to.
    pub creditor: String,
    /// Whether the loan is secured against collateral.
    pub is_secured: bool,
    /// Optional payoff date, `YYYY-MM-DD`.
    pub end_date: String,
}

impl LiabilityForm {
    /// Builds a form pre-filled from `draft`.
    #[must_use]
    pub fn from_draft(draft: &LiabilityDraft) -> Self {
        Self {
            name: draft.name.clone(),
            liability_type: draft.liability_type.clone(),
            current_balance: draft.current_balance.to_string(),
            monthly_payment: draft.monthly_payment.to_string(),
            interest_rate: draft.interest_rate.to_string(),
            creditor: draft.creditor.clone(),
            is_secured: draft.is_secured,
            end_date: draft.end_date.map(|d| d.to_string()).unwrap_or_default(),
        }
    }

    /// Coerces the form into a draft, or returns every field error.
    pub fn parse(&self) -> FormResult<LiabilityDraft> {
        let mut errors: Vec<FieldError> = Vec::new();

        let name = required_text("name", &self.name).map_err(|e| errors.push(e)).ok();
        let creditor = required_text("creditor", &self.creditor)
            .map_err(|e| errors.push(e))
            .ok();
        let current_balance = required_amount("currentBalance", &self.current_balance)
            .map_err(|e| errors.push(e))
            .ok();
        let monthly_payment = amount_or("monthlyPayment", &self.monthly_payment, Decimal::ZERO)
            .map_err(|e| errors.push(e))
            .ok();
        let interest_rate = amount_or("interestRate", &self.interest_rate, Decimal::ZERO)
            .map_err(|e| errors.push(e))
            .ok();
        let end_date = optional_date("endDate", &self.end_date)
            .map_err(|e| errors.push(e))
            .ok();

        if !errors.is_empty() {
            return Err(errors);
        }

        // Unwraps cannot fire: errors is empty only if every field parsed.
        Ok(LiabilityDraft {
            name: name.unwrap_or_default(),
            liability_type: self.liability_type.clone(),
            current_balance: current_balance.unwrap_or_default(),
            monthly_payment: monthly_payment.unwrap_or_default(),
            interest_rate: interest_rate.unwrap_or_default(),
            creditor: creditor.unwrap_or_default(),
            is_secured: self.is_secured,
            end_date: end_date.unwrap_or_default(),
        })
    }
}
