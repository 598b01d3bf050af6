//! Property-based tests for the local filter.
//!
//! - Property 1: Subset & Order Preservation
//! - Property 2: Empty Term Identity
//! - Property 3: Case Insensitivity

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::filter::filter;
use crate::obligations::Obligation;
use arca_shared::types::ObligationId;

/// Strategy to generate short alphanumeric words.
fn word() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{0,12}"
}

/// Strategy to generate an obligation with arbitrary searchable fields.
fn obligation() -> impl Strategy<Value = Obligation> {
    (0i64..10_000, word(), word(), word()).prop_map(|(id, name, kind, beneficiary)| Obligation {
        id: ObligationId::from_raw(id),
        name,
        obligation_type: kind,
        monthly_amount: Decimal::ZERO,
        beneficiary,
        end_date: None,
    })
}

/// Strategy to generate a list of obligations (0 to 32 records).
fn obligation_list() -> impl Strategy<Value = Vec<Obligation>> {
    prop::collection::vec(obligation(), 0..32)
}

/// Strategy to generate search terms, biased toward short fragments.
fn term() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{0,6}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property 1.1: The result is a subset of the input.
    ///
    /// *For any* list and term, every record in `filter(list, term)` SHALL
    /// also appear in `list`.
    #[test]
    fn prop_filter_is_subset(list in obligation_list(), term in term()) {
        let result = filter(&list, &term);
        for record in &result {
            prop_assert!(
                list.iter().any(|r| r.id == record.id),
                "Filtered record {} must come from the source list",
                record.id
            );
        }
        prop_assert!(result.len() <= list.len());
    }

    /// Property 1.2: Source order is preserved.
    ///
    /// *For any* list and term, the result SHALL list surviving records in
    /// the same relative order as the input.
    #[test]
    fn prop_filter_preserves_order(list in obligation_list(), term in term()) {
        let result = filter(&list, &term);
        let positions: Vec<usize> = result
            .iter()
            .filter_map(|record| list.iter().position(|r| r.id == record.id))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        prop_assert_eq!(positions, sorted, "Result must preserve source order");
    }

    /// Property 2: The empty term is the identity.
    ///
    /// *For any* list, `filter(list, "")` SHALL return the list unchanged.
    #[test]
    fn prop_empty_term_identity(list in obligation_list()) {
        let result = filter(&list, "");
        prop_assert_eq!(result.len(), list.len());
        for (got, expected) in result.iter().zip(list.iter()) {
            prop_assert_eq!(got.id, expected.id);
        }
    }

    /// Property 3: Matching is case-insensitive.
    ///
    /// *For any* list and term, uppercasing the term SHALL NOT change the
    /// result.
    #[test]
    fn prop_case_insensitive(list in obligation_list(), term in term()) {
        let lower = filter(&list, &term.to_lowercase());
        let upper = filter(&list, &term.to_uppercase());
        prop_assert_eq!(lower.len(), upper.len());
        for (a, b) in lower.iter().zip(upper.iter()) {
            prop_assert_eq!(a.id, b.id);
        }
    }

    /// Property 4: Filtering is idempotent.
    ///
    /// *For any* list and term, filtering an already-filtered list with the
    /// same term SHALL return it unchanged.
    #[test]
    fn prop_filter_idempotent(list in obligation_list(), term in term()) {
        let once = filter(&list, &term);
        let twice = filter(&once, &term);
        prop_assert_eq!(once.len(), twice.len());
    }
}
