//! Tolerant date parsing for the timestamps the API emits.
//!
//! The API is not consistent: most fields are `2024-02-01T00:00:00`, some carry
//! fractional seconds or an offset, and a few are bare dates. All of them end
//! up as a naive timestamp in UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer, de};

const SERIALIZE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse any date or timestamp representation the API is known to produce.
#[must_use]
pub fn parse(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse the calendar date part only.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    parse(raw).map(|dt| dt.date())
}

/// serde adapter for required timestamp fields.
///
/// # Errors
/// Fails when the value is not a string or cannot be parsed as a date.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| de::Error::custom(format!("unrecognised date '{raw}'")))
}

/// serde adapter for required timestamp fields.
///
/// # Errors
/// Propagates serializer failures.
pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.format(SERIALIZE_FORMAT).to_string())
}

/// serde adapter for optional timestamp fields. Use together with `#[serde(default)]`.
pub mod option {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    /// Null, missing and blank strings all deserialize to `None`.
    ///
    /// # Errors
    /// Fails when a non-blank value cannot be parsed as a date.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => super::parse(&raw)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("unrecognised date '{raw}'"))),
        }
    }

    /// # Errors
    /// Propagates serializer failures.
    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => super::serialize(dt, serializer),
            None => serializer.serialize_none(),
        }
    }
}
