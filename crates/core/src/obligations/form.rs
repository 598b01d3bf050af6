//! String-backed obligation form.

use crate::form::{FieldError, FormResult, optional_date, required_amount, required_text};

use super::types::ObligationDraft;

/// Raw form state for the obligation modal.
#[derive(Debug, Clone, Default)]
pub struct ObligationForm {
    /// Display name.
    pub name: String,
    /// Selected obligation category.
    pub obligation_type: String,
    /// Committed monthly amount.
    pub monthly_amount: String,
    /// Who the commitment supports.
    pub beneficiary: String,
    /// Optional end date, `YYYY-MM-DD`.
    pub end_date: String,
}

impl ObligationForm {
    /// Builds a form pre-filled from `draft`.
    #[must_use]
    pub fn from_draft(draft: &ObligationDraft) -> Self {
        Self {
            name: draft.name.clone(),
            obligation_type: draft.obligation_type.clone(),
            monthly_amount: draft.monthly_amount.to_string(),
            beneficiary: draft.beneficiary.clone(),
            end_date: draft.end_date.map(|d| d.to_string()).unwrap_or_default(),
        }
    }

    /// Coerces the form into a draft, or returns every field error.
    pub fn parse(&self) -> FormResult<ObligationDraft> {
        let mut errors: Vec<FieldError> = Vec::new();

        let name = required_text("name", &self.name).map_err(|e| errors.push(e)).ok();
        let beneficiary = required_text("beneficiary", &self.beneficiary)
            .map_err(|e| errors.push(e))
            .ok();
        let monthly_amount = required_amount("monthlyAmount", &self.monthly_amount)
            .map_err(|e| errors.push(e))
            .ok();
        let end_date = optional_date("endDate", &self.end_date)
            .map_err(|e| errors.push(e))
            .ok();

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ObligationDraft {
            name: name.unwrap_or_default(),
            obligation_type: self.obligation_type.clone(),
            monthly_amount: monthly_amount.unwrap_or_default(),
            beneficiary: beneficiary.unwrap_or_default(),
            end_date: end_date.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn valid_form() -> ObligationForm {
        ObligationForm {
            name: "School Fees".to_string(),
            obligation_type: "Kids Education".to_string(),
            monthly_amount: "450".to_string(),
            beneficiary: "Kids".to_string(),
            end_date: "2032-07-01".to_string(),
        }
    }

    #[test]
    fn test_parse_valid_form() {
        let draft = valid_form().parse().unwrap();
        assert_eq!(draft.monthly_amount, dec!(450));
        assert_eq!(
            draft.end_date,
            Some(NaiveDate::from_ymd_opt(2032, 7, 1).unwrap())
        );
    }

    #[test]
    fn test_blank_monthly_amount_rejected_before_any_request() {
        let mut form = valid_form();
        form.monthly_amount.clear();
        let errors = form.parse().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "monthlyAmount");
        assert_eq!(errors[0].message, "This field is required");
    }

    #[test]
    fn test_non_numeric_amount_rejected() {
        let mut form = valid_form();
        form.monthly_amount = "a lot".to_string();
        let errors = form.parse().unwrap_err();
        assert_eq!(errors[0].field, "monthlyAmount");
        assert_eq!(errors[0].message, "Must be a number");
    }

    #[test]
    fn test_malformed_date_rejected() {
        let mut form = valid_form();
        form.end_date = "07/01/2032".to_string();
        let errors = form.parse().unwrap_err();
        assert_eq!(errors[0].field, "endDate");
        assert_eq!(errors[0].message, "Format: YYYY-MM-DD");
    }
}
