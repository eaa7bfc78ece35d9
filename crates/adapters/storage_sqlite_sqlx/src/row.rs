//! Text encodings of dates, timestamps and JSON columns.
//!
//! Dates are stored as `YYYY-MM-DD`, timestamps as RFC 3339 in UTC.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use cadastro_domain::time::{DATE_FORMAT, Date, Timestamp};

fn decode_error<E>(err: E) -> sqlx::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    sqlx::Error::Decode(Box::new(err))
}

pub(crate) fn encode_date(date: Date) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(crate) fn decode_date(value: &str) -> Result<Date, sqlx::Error> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(decode_error)
}

pub(crate) fn encode_timestamp(timestamp: Timestamp) -> String {
    timestamp.to_rfc3339()
}

pub(crate) fn decode_timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(decode_error)
}

pub(crate) fn encode_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

pub(crate) fn decode_json<T: DeserializeOwned>(value: &str) -> Result<T, sqlx::Error> {
    serde_json::from_str(value).map_err(decode_error)
}

/// Row counts from `COUNT(*)` are never negative.
pub(crate) fn to_count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_nanoseconds_in_timestamps() {
        let ts = Utc::now();
        assert_eq!(decode_timestamp(&encode_timestamp(ts)).unwrap(), ts);
    }

    #[test]
    fn should_reject_malformed_date() {
        assert!(matches!(
            decode_date("01/01/1990"),
            Err(sqlx::Error::Decode(_))
        ));
    }

    #[test]
    fn should_convert_offset_timestamps_to_utc() {
        let ts = decode_timestamp("2024-05-01T12:00:00-03:00").unwrap();
        assert_eq!(encode_timestamp(ts), "2024-05-01T15:00:00+00:00");
    }
}
