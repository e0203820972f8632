//! Lenient decoding of calendar dates in request payloads.
//!
//! Responses always carry `YYYY-MM-DD`. Requests may also send an RFC 3339
//! date-time (`2010-07-16T00:00:00Z`); only its calendar date, as written in
//! the given offset, is kept.

use chrono::DateTime;
use filmotheka_core::types::Date;
use serde::{Deserialize, Deserializer};

/// Parse `YYYY-MM-DD` or an RFC 3339 date-time into a [`Date`].
pub fn parse_date(raw: &str) -> Result<Date, String> {
    let raw = raw.trim();
    if let Ok(date) = Date::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .map_err(|_| format!("invalid date '{raw}': expected YYYY-MM-DD or an RFC 3339 date-time"))
}

/// `deserialize_with` helper for optional date fields. Pair it with
/// `#[serde(default)]` so an absent field stays `None`.
pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_date(&raw).map_err(serde::de::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn plain_dates_parse() {
        assert_eq!(parse_date("1972-03-20"), Ok(ymd(1972, 3, 20)));
    }

    #[test]
    fn rfc3339_keeps_the_written_calendar_date() {
        assert_eq!(parse_date("2010-07-16T00:00:00Z"), Ok(ymd(2010, 7, 16)));
        assert_eq!(parse_date("2010-07-16T23:30:00-05:00"), Ok(ymd(2010, 7, 16)));
        assert_eq!(
            parse_date("2024-02-29T12:01:02.123456789+03:00"),
            Ok(ymd(2024, 2, 29))
        );
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_date("16/07/2010").is_err());
        assert!(parse_date("2010-13-01").is_err());
        assert!(parse_date("").is_err());
    }

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "deserialize_opt")]
        when: Option<Date>,
    }

    #[test]
    fn optional_field_handles_absent_null_and_both_formats() {
        let absent: Payload = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.when, None);
        let null: Payload = serde_json::from_str(r#"{"when": null}"#).unwrap();
        assert_eq!(null.when, None);
        let plain: Payload = serde_json::from_str(r#"{"when": "1999-03-31"}"#).unwrap();
        assert_eq!(plain.when, Some(ymd(1999, 3, 31)));
        let full: Payload = serde_json::from_str(r#"{"when": "1999-03-31T00:00:00Z"}"#).unwrap();
        assert_eq!(full.when, Some(ymd(1999, 3, 31)));
        assert!(serde_json::from_str::<Payload>(r#"{"when": "soon"}"#).is_err());
    }
}
