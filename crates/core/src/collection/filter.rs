//! Client-side free-text filtering of a cached collection.

use super::entity::CollectionEntity;

/// Filters `list` by a free-text search term.
///
/// A record matches when ANY of its [`search_fields`](CollectionEntity::search_fields)
/// contains `term` as a case-insensitive substring. The empty term matches
/// everything. The result is a subset of `list` preserving source order.
///
/// Pure function; re-evaluated on every term change.
#[must_use]
pub fn filter<E: CollectionEntity>(list: &[E], term: &str) -> Vec<E> {
    if term.is_empty() {
        return list.to_vec();
    }

    let needle = term.to_lowercase();
    list.iter()
        .filter(|record| {
            record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::liabilities::Liability;
    use arca_shared::types::LiabilityId;
    use rust_decimal::Decimal;

    fn liability(id: i64, name: &str, creditor: &str) -> Liability {
        Liability {
            id: LiabilityId::from_raw(id),
            name: name.to_string(),
            liability_type: "Credit Card".to_string(),
            current_balance: Decimal::ZERO,
            monthly_payment: Decimal::ZERO,
            interest_rate: Decimal::ZERO,
            creditor: creditor.to_string(),
            is_secured: false,
            end_date: None,
        }
    }

    #[test]
    fn test_empty_term_returns_list_unchanged() {
        let list = vec![
            liability(1, "Chase Card", "Chase"),
            liability(2, "Auto Loan", "Ally"),
        ];
        let result = filter(&list, "");
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, list[0].id);
        assert_eq!(result[1].id, list[1].id);
    }

    #[test]
    fn test_matches_secondary_field() {
        let list = vec![
            liability(1, "Chase Card", "Chase"),
            liability(2, "Auto Loan", "Ally"),
        ];
        let result = filter(&list, "chase");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Chase Card");
    }

    #[test]
    fn test_case_insensitive() {
        let list = vec![
            liability(1, "Chase Card", "Chase"),
            liability(2, "Auto Loan", "Ally"),
        ];
        let upper = filter(&list, "BANK");
        let lower = filter(&list, "bank");
        assert_eq!(upper.len(), lower.len());

        let upper = filter(&list, "CHASE");
        let lower = filter(&list, "chase");
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].id, lower[0].id);
    }

    #[test]
    fn test_preserves_source_order() {
        let list = vec![
            liability(3, "Loan A", "Ally"),
            liability(1, "Loan B", "Ally"),
            liability(2, "Loan C", "Ally"),
        ];
        let result = filter(&list, "loan");
        let ids: Vec<i64> = result.iter().map(|l| l.id.into_inner()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let list = vec![liability(1, "Chase Card", "Chase")];
        assert!(filter(&list, "mortgage").is_empty());
    }

    #[test]
    fn test_matches_type_field() {
        let list = vec![liability(1, "Sapphire", "Chase")];
        let result = filter(&list, "credit card");
        assert_eq!(result.len(), 1);
    }
}
