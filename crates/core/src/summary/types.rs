//! Portfolio summary data types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use arca_shared::types::AssetId;

/// One entry in the ranked top-income list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopIncomeGenerator {
    /// 1-based position in the ranking.
    pub rank: u32,
    /// ID of the ranked asset.
    pub asset_id: AssetId,
    /// Display name of the ranked asset.
    pub asset_name: String,
    /// Category of the ranked asset.
    #[serde(default)]
    pub asset_type: Option<String>,
    /// Annual income attributed to the asset.
    pub annual_income: Decimal,
    /// Monthly income attributed to the asset.
    pub monthly_income: Decimal,
    /// Share of total income, in percent.
    pub percentage_of_total: Decimal,
}

/// Backend-computed portfolio summary.
///
/// All figures are authoritative server output; nothing here is derived
/// client-side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Net worth across all holdings.
    pub total_net_worth: Decimal,
    /// Passive income per month.
    pub monthly_passive_income: Decimal,
    /// Passive income per year.
    pub total_annual_income: Decimal,
    /// Blended portfolio yield in percent.
    pub portfolio_yield: Decimal,
    /// Number of assets counted.
    pub asset_count: u32,
    /// Highest-earning assets, best first.
    #[serde(default)]
    pub top_income_generators: Vec<TopIncomeGenerator>,
    /// When the backend produced these figures.
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_summary_deserializes_from_wire() {
        let json = r#"{
            "totalNetWorth": 512000.40,
            "monthlyPassiveIncome": 1830,
            "totalAnnualIncome": 21960,
            "portfolioYield": 4.29,
            "assetCount": 9,
            "topIncomeGenerators": [
                {
                    "rank": 1,
                    "assetId": 4,
                    "assetName": "Rental Flat",
                    "assetType": "Real Estate",
                    "annualIncome": 12000,
                    "monthlyIncome": 1000,
                    "percentageOfTotal": 54.64
                }
            ],
            "generatedAt": "2026-08-24T10:15:00Z"
        }"#;
        let summary: Summary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_net_worth, dec!(512000.40));
        assert_eq!(summary.asset_count, 9);
        assert_eq!(summary.top_income_generators.len(), 1);
        assert_eq!(summary.top_income_generators[0].asset_id, AssetId::from_raw(4));
        assert_eq!(summary.top_income_generators[0].percentage_of_total, dec!(54.64));
    }

    #[test]
    fn test_missing_generator_list_defaults_empty() {
        let json = r#"{
            "totalNetWorth": 0,
            "monthlyPassiveIncome": 0,
            "totalAnnualIncome": 0,
            "portfolioYield": 0,
            "assetCount": 0,
            "generatedAt": "2026-08-24T10:15:00Z"
        }"#;
        let summary: Summary = serde_json::from_str(json).unwrap();
        assert!(summary.top_income_generators.is_empty());
    }
}
