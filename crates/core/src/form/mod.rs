//! String-backed form parsing with field-level errors.
//!
//! Terminal forms hold raw text; these helpers coerce it into typed draft
//! fields. Validation failures block submission at the call site, so a
//! rejected form never reaches the gateway.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A validation failure attached to a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The offending field.
    pub field: &'static str,
    /// Display message shown inline next to the field.
    pub message: String,
}

impl FieldError {
    /// Creates a field error.
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Result of parsing a whole form: a draft, or every field error found.
pub type FormResult<T> = Result<T, Vec<FieldError>>;

/// Parses a required text field; blank input is rejected.
pub fn required_text(field: &'static str, value: &str) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, "This field is required"));
    }
    Ok(trimmed.to_string())
}

/// Parses a required non-negative amount; blank or non-numeric input is
/// rejected.
pub fn required_amount(field: &'static str, value: &str) -> Result<Decimal, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, "This field is required"));
    }
    parse_amount(field, trimmed)
}

/// Parses an optional non-negative amount; blank input yields `default`.
pub fn amount_or(
    field: &'static str,
    value: &str,
    default: Decimal,
) -> Result<Decimal, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    parse_amount(field, trimmed)
}

/// Parses an optional non-negative amount; blank input yields `None`.
pub fn optional_amount(field: &'static str, value: &str) -> Result<Option<Decimal>, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse_amount(field, trimmed).map(Some)
}

fn parse_amount(field: &'static str, trimmed: &str) -> Result<Decimal, FieldError> {
    let amount = Decimal::from_str_exact(trimmed)
        .map_err(|_| FieldError::new(field, "Must be a number"))?;
    if amount < Decimal::ZERO {
        return Err(FieldError::new(field, "Must be zero or greater"));
    }
    Ok(amount)
}

/// Parses an optional `YYYY-MM-DD` date; blank input yields `None`.
pub fn optional_date(field: &'static str, value: &str) -> Result<Option<NaiveDate>, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| FieldError::new(field, "Format: YYYY-MM-DD"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_required_text() {
        assert_eq!(required_text("name", "  Chase  ").unwrap(), "Chase");
        let err = required_text("name", "   ").unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.message, "This field is required");
    }

    #[test]
    fn test_required_amount() {
        assert_eq!(required_amount("monthlyAmount", "450.50").unwrap(), dec!(450.50));

        let blank = required_amount("monthlyAmount", "").unwrap_err();
        assert_eq!(blank.message, "This field is required");

        let garbage = required_amount("monthlyAmount", "abc").unwrap_err();
        assert_eq!(garbage.message, "Must be a number");

        let negative = required_amount("monthlyAmount", "-5").unwrap_err();
        assert_eq!(negative.message, "Must be zero or greater");
    }

    #[test]
    fn test_amount_or_default() {
        assert_eq!(
            amount_or("interestRate", "", Decimal::ZERO).unwrap(),
            Decimal::ZERO
        );
        assert_eq!(amount_or("interestRate", "19.99", Decimal::ZERO).unwrap(), dec!(19.99));
        assert!(amount_or("interestRate", "x", Decimal::ZERO).is_err());
    }

    #[test]
    fn test_optional_amount() {
        assert_eq!(optional_amount("currentValue", "").unwrap(), None);
        assert_eq!(
            optional_amount("currentValue", "12000").unwrap(),
            Some(dec!(12000))
        );
    }

    #[test]
    fn test_optional_date() {
        assert_eq!(optional_date("endDate", "").unwrap(), None);
        assert_eq!(
            optional_date("endDate", "2030-06-01").unwrap(),
            Some(chrono::NaiveDate::from_ymd_opt(2030, 6, 1).unwrap())
        );
        let err = optional_date("endDate", "06/01/2030").unwrap_err();
        assert_eq!(err.message, "Format: YYYY-MM-DD");
    }
}
