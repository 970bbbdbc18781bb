//! Serde helper functions for request deserialization.
//!
//! These functions handle the quirks of form and query submissions where
//! empty strings should be treated as None for optional fields.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize an optional NaiveDate, treating empty strings as None.
/// Expects format: YYYY-MM-DD
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Deserialize an optional NaiveDateTime, treating empty strings as None.
/// Accepts `YYYY-MM-DDTHH:MM[:SS]` or the same with a space separator.
pub fn deserialize_optional_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => parse_datetime(s.trim())
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Deserialize a boolean flag that may arrive as `true`/`false` or `1`/`0`.
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s.as_deref().map(str::trim) {
        None | Some("") | Some("0") | Some("false") => Ok(false),
        Some("1") | Some("true") => Ok(true),
        Some(other) => Err(serde::de::Error::custom(format!(
            "invalid flag value: {other}"
        ))),
    }
}

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

fn parse_datetime(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    DATETIME_FORMATS[1..].iter().fold(
        NaiveDateTime::parse_from_str(s, DATETIME_FORMATS[0]),
        |parsed, format| parsed.or_else(|_| NaiveDateTime::parse_from_str(s, format)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test struct that uses the deserializer functions
    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        string_field: Option<String>,
        #[serde(default, deserialize_with = "deserialize_optional_date")]
        date_field: Option<NaiveDate>,
        #[serde(default, deserialize_with = "deserialize_optional_datetime")]
        datetime_field: Option<NaiveDateTime>,
        #[serde(default, deserialize_with = "deserialize_flag")]
        flag_field: bool,
    }

    #[test]
    fn test_deserialize_optional_string_whitespace() {
        let json = r#"{"string_field": "   "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_value() {
        let json = r#"{"string_field": "hello"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, Some("hello".to_string()));
    }

    #[test]
    fn test_deserialize_optional_date_valid() {
        let json = r#"{"date_field": "2024-02-29"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.date_field, NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn test_deserialize_optional_date_impossible_day() {
        let json = r#"{"date_field": "2023-02-29"}"#;
        let result: Result<TestStruct, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_optional_datetime_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0);

        for value in [
            "2024-01-15T09:30:00",
            "2024-01-15 09:30:00",
            "2024-01-15T09:30",
            "2024-01-15 09:30",
        ] {
            let json = format!(r#"{{"datetime_field": "{value}"}}"#);
            let result: TestStruct = serde_json::from_str(&json).unwrap();
            assert_eq!(result.datetime_field, expected, "format {value}");
        }
    }

    #[test]
    fn test_deserialize_optional_datetime_empty() {
        let json = r#"{"datetime_field": ""}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.datetime_field, None);
    }

    #[test]
    fn test_deserialize_flag_values() {
        for (value, expected) in [("1", true), ("true", true), ("0", false), ("", false)] {
            let json = format!(r#"{{"flag_field": "{value}"}}"#);
            let result: TestStruct = serde_json::from_str(&json).unwrap();
            assert_eq!(result.flag_field, expected, "flag {value}");
        }

        let result: Result<TestStruct, _> = serde_json::from_str(r#"{"flag_field": "maybe"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_fields_default() {
        let result: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(
            result,
            TestStruct {
                string_field: None,
                date_field: None,
                datetime_field: None,
                flag_field: false,
            }
        );
    }
}
