//! Calendar-date handling for records
//!
//! Dates are written as `YYYY-MM-DD`. Reading accepts that form or a full
//! RFC 3339 timestamp (the UTC date is kept), which is what browser-side
//! clients and webhook stores tend to send back.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serializer};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a calendar date from either supported string form
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc).date_naive())
        })
}

/// `#[serde(with = "dates::calendar")]` for `NaiveDate` fields
pub mod calendar {
    use super::*;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        use serde::de::Error;

        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date: {}", raw)))
    }
}

/// Same as [`calendar`] for optional patch fields
pub mod calendar_opt {
    use super::*;

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => super::calendar::serialize(d, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        use serde::de::Error;

        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse_date(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid date: {}", raw))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Dated {
        #[serde(with = "calendar")]
        date: NaiveDate,
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(
            parse_date("2026-01-15"),
            NaiveDate::from_ymd_opt(2026, 1, 15)
        );
    }

    #[test]
    fn test_parse_timestamp_uses_utc_date() {
        assert_eq!(
            parse_date("2026-01-15T00:00:00.000Z"),
            NaiveDate::from_ymd_opt(2026, 1, 15)
        );
        assert_eq!(
            parse_date("2026-01-15T23:30:00-02:00"),
            NaiveDate::from_ymd_opt(2026, 1, 16)
        );
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_date("yesterday").is_none());
        assert!(parse_date("2026-13-01").is_none());
    }

    #[test]
    fn test_round_trip() {
        let original = Dated {
            date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
        };
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(json, r#"{"date":"2026-12-31"}"#);

        let back: Dated = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }
}
