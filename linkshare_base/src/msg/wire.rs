// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serde helpers for the provider's loosely typed JSON.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Date format used on the wire for both queries and bodies.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const NAIVE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub(crate) fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a calendar date. Full timestamps are accepted and truncated to the date
/// in their own offset.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Some(date);
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.date_naive());
    }

    NaiveDateTime::parse_from_str(value, NAIVE_DATETIME_FORMAT)
        .ok()
        .map(|ts| ts.date())
}

/// Parse a timestamp. Plain dates are taken as midnight UTC.
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }

    if let Ok(ts) = NaiveDateTime::parse_from_str(value, NAIVE_DATETIME_FORMAT) {
        return Some(ts.and_utc());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|ts| ts.and_utc())
}

/// `null` becomes the default value of the field.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A boolean which may come as `true` or as `"true"`.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_flag(deserializer)?.unwrap_or_default())
}

pub(crate) fn opt_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Bool(value) => Ok(Some(value)),
        Value::String(value) => match value.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            "" => Ok(None),
            other => Err(D::Error::custom(format!("invalid boolean '{}'", other))),
        },
        other => Err(D::Error::custom(format!("invalid boolean {}", other))),
    }
}

/// A positive integer which may come as a number or as a string.
pub(crate) fn opt_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(value) => value
            .as_u64()
            .and_then(|value| u32::try_from(value).ok())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid count {}", value))),
        Value::String(value) if value.trim().is_empty() => Ok(None),
        Value::String(value) => value
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid count '{}'", value))),
        other => Err(D::Error::custom(format!("invalid count {}", other))),
    }
}

pub(crate) mod opt_date {
    use super::*;
    use serde::Serializer;

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&format_date(date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(value) if value.trim().is_empty() => Ok(None),
            Some(value) => parse_date(&value)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid date '{}'", value))),
        }
    }
}

pub(crate) mod opt_datetime {
    use super::*;
    use serde::Serializer;

    pub fn serialize<S>(ts: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match ts {
            Some(ts) => serializer.serialize_str(&ts.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(value) if value.trim().is_empty() => Ok(None),
            Some(value) => parse_datetime(&value)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp '{}'", value))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case("2024-03-01", Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()))]
    #[case("2024-03-01T23:10:00Z", Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()))]
    #[case("2024-03-01T23:10:00", Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()))]
    #[case("2024-03-01T01:00:00+05:00", Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()))]
    #[case("2024-02-29T22:30:00-03:00", Some(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()))]
    #[case("01.03.2024", None)]
    fn test_parse_date(#[case] value: &str, #[case] expected: Option<NaiveDate>) {
        assert_eq!(parse_date(value), expected);
    }

    #[rstest]
    fn test_parse_datetime() {
        assert_eq!(
            parse_datetime("2013-07-29T15:14:17+02:00"),
            Some(Utc.with_ymd_and_hms(2013, 7, 29, 13, 14, 17).unwrap())
        );
        assert_eq!(
            parse_datetime("2013-07-29"),
            Some(Utc.with_ymd_and_hms(2013, 7, 29, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_datetime("yesterday"), None);
    }
}
