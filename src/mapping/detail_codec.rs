//! Detail token encoding and decoding.
//!
//! A detail token is a JSON object with the keys `salary`, `contractType`
//! and `year`, always written in that order. Salary is an exact JSON number,
//! so the token carries the decimal value verbatim.

use crate::error::DecodeError;
use crate::models::DetailRecord;

/// Encodes a detail record as a detail token.
///
/// Encoding is total and deterministic: the same record always yields the
/// same token, and absent fields are written as `null`.
///
/// # Examples
///
/// ```
/// use roster_service::mapping::encode_detail;
/// use roster_service::models::DetailRecord;
/// use rust_decimal::Decimal;
///
/// let token = encode_detail(&DetailRecord::new(Decimal::new(100, 0), "FT", "2023"));
/// assert_eq!(token, r#"{"salary":100,"contractType":"FT","year":"2023"}"#);
/// ```
pub fn encode_detail(detail: &DetailRecord) -> String {
    serde_json::to_string(detail)
        .expect("detail fields are plain strings and decimals, which always serialize")
}

/// Decodes a detail token.
///
/// Keys missing from the token decode as `None` and unknown keys are
/// ignored. Anything that is not a JSON object, or whose known keys carry
/// values of the wrong type, is a [`DecodeError`].
///
/// # Examples
///
/// ```
/// use roster_service::mapping::decode_detail;
///
/// let detail = decode_detail(r#"{"contractType":"PT","extra":true}"#).unwrap();
/// assert_eq!(detail.contract_type.as_deref(), Some("PT"));
/// assert!(detail.salary.is_none());
///
/// assert!(decode_detail("not a token").is_err());
/// ```
pub fn decode_detail(token: &str) -> Result<DetailRecord, DecodeError> {
    // Serde would accept a positional array for a struct; tokens are keyed.
    if !token.trim_start().starts_with('{') {
        return Err(DecodeError::new("detail token must be a JSON object"));
    }

    serde_json::from_str(token).map_err(|e| DecodeError::new(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_encode_full_detail() {
        let detail = DetailRecord::new(dec("110"), "FT", "2024");
        assert_eq!(
            encode_detail(&detail),
            r#"{"salary":110,"contractType":"FT","year":"2024"}"#
        );
    }

    #[test]
    fn test_encode_all_null_detail() {
        assert_eq!(
            encode_detail(&DetailRecord::default()),
            r#"{"salary":null,"contractType":null,"year":null}"#
        );
    }

    #[test]
    fn test_encode_is_deterministic() {
        let detail = DetailRecord::new(dec("52000.75"), "PT", "2022");
        assert_eq!(encode_detail(&detail), encode_detail(&detail.clone()));
    }

    #[test]
    fn test_decode_all_null_round_trips() {
        let detail = DetailRecord::default();
        assert_eq!(decode_detail(&encode_detail(&detail)).unwrap(), detail);
    }

    #[test]
    fn test_decode_preserves_decimal_scale() {
        let detail = decode_detail(r#"{"salary":1234.50,"contractType":null,"year":null}"#).unwrap();
        assert_eq!(detail.salary, Some(dec("1234.50")));
        assert_eq!(detail.salary.unwrap().scale(), 2);
    }

    #[test]
    fn test_decode_ignores_unknown_keys() {
        let detail =
            decode_detail(r#"{"id":9,"salary":100,"contractType":"FT","year":"2023","bonus":5}"#)
                .unwrap();
        assert_eq!(detail, DetailRecord::new(dec("100"), "FT", "2023"));
    }

    #[test]
    fn test_decode_accepts_leading_whitespace() {
        let detail = decode_detail("  {\"year\":\"2021\"}").unwrap();
        assert_eq!(detail.year.as_deref(), Some("2021"));
    }

    #[test]
    fn test_decode_rejects_non_json() {
        assert!(decode_detail("salary=100;contractType=FT").is_err());
    }

    #[test]
    fn test_decode_rejects_empty_token() {
        assert!(decode_detail("").is_err());
    }

    #[test]
    fn test_decode_rejects_positional_array() {
        let err = decode_detail(r#"[100,"FT","2023"]"#).unwrap_err();
        assert!(err.message.contains("JSON object"));
    }

    #[test]
    fn test_decode_rejects_wrong_value_type() {
        assert!(decode_detail(r#"{"salary":100,"contractType":42,"year":"2023"}"#).is_err());
    }

    #[test]
    fn test_decode_rejects_string_salary() {
        let err = decode_detail(r#"{"salary":"100","contractType":"FT","year":"2023"}"#)
            .unwrap_err();
        assert!(err.message.contains("string"), "unexpected message: {}", err.message);
    }

    #[test]
    fn test_decode_rejects_boolean_salary() {
        assert!(decode_detail(r#"{"salary":true}"#).is_err());
    }

    #[test]
    fn test_decode_rejects_truncated_object() {
        assert!(decode_detail(r#"{"salary":100,"contractType":"FT""#).is_err());
    }

    fn arb_detail() -> impl Strategy<Value = DetailRecord> {
        (
            proptest::option::of((any::<i64>(), 0u32..=6).prop_map(|(m, s)| Decimal::new(m, s))),
            proptest::option::of("[A-Za-z \"\\\\]{0,12}"),
            proptest::option::of("[0-9]{4}"),
        )
            .prop_map(|(salary, contract_type, year)| DetailRecord {
                salary,
                contract_type,
                year,
            })
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(detail in arb_detail()) {
            let token = encode_detail(&detail);
            prop_assert_eq!(decode_detail(&token).unwrap(), detail);
        }
    }
}
