//! Lenient wire-date handling.
//!
//! The backend is inconsistent about optional end dates: sometimes a plain
//! `YYYY-MM-DD`, sometimes a full ISO timestamp, sometimes null or empty.
//! Records deserialize through [`lenient_optional_date`], keeping only the
//! calendar day.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Deserializes an optional date, accepting `YYYY-MM-DD` or an ISO
/// timestamp (the time part is discarded). Null and empty map to `None`.
pub fn lenient_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => {
            let day = s.split('T').next().unwrap_or(s.as_str());
            NaiveDate::parse_from_str(day, "%Y-%m-%d")
                .map(Some)
                .map_err(serde::de::Error::custom)
        }
    }
}
