//! Detail record model.
//!
//! A [`DetailRecord`] describes one compensation/contract period of an
//! employee. It has no identity of its own and is always owned by an
//! [`EmployeeRecord`](super::EmployeeRecord).

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// One compensation/contract period.
///
/// The serde representation of this struct is the detail token schema:
/// `salary` is an exact JSON number, `contractType` and `year` are strings,
/// and every field is written explicitly (as `null` when absent).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailRecord {
    /// The salary for the period, if known.
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::arbitrary_precision_option::serialize",
        deserialize_with = "salary_number"
    )]
    pub salary: Option<Decimal>,
    /// The contract type (e.g., "FT", "PT").
    #[serde(default)]
    pub contract_type: Option<String>,
    /// The year the period applies to (e.g., "2024").
    #[serde(default)]
    pub year: Option<String>,
}

impl DetailRecord {
    /// Creates a detail record with every field populated.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_service::models::DetailRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let detail = DetailRecord::new(Decimal::new(100, 0), "FT", "2023");
    /// assert_eq!(detail.contract_type.as_deref(), Some("FT"));
    /// ```
    pub fn new(salary: Decimal, contract_type: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            salary: Some(salary),
            contract_type: Some(contract_type.into()),
            year: Some(year.into()),
        }
    }
}

/// Reads a salary that must be a JSON number or `null`. Strings are rejected
/// even when they hold a number.
fn salary_number<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map(Some)
        .map_err(|e| D::Error::custom(format!("invalid salary {}: {}", text, e)))
}
