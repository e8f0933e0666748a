//! Lenient field decoders for backend payloads.
//!
//! A field that is `null` or has the wrong shape decodes to its default so
//! one bad value never rejects the whole record.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `null` becomes `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// RFC 3339, a naive ISO timestamp (taken as UTC) or epoch milliseconds.
/// Anything else, `null` included, is `None`.
pub(crate) fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| parse_timestamp(&value)))
}

fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(text) => {
            let text = text.trim();
            DateTime::parse_from_rfc3339(text)
                .map(|at| at.with_timezone(&Utc))
                .ok()
                .or_else(|| {
                    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                        .ok()
                        .map(|naive| naive.and_utc())
                })
        }
        Value::Number(millis) => millis.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_forms() {
        let expected = Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap();
        assert_eq!(parse_timestamp(&Value::from("2025-03-14T09:30:00Z")), Some(expected));
        assert_eq!(parse_timestamp(&Value::from("2025-03-14T10:30:00+01:00")), Some(expected));
        assert_eq!(parse_timestamp(&Value::from("2025-03-14T09:30:00.000")), Some(expected));
        assert_eq!(parse_timestamp(&Value::from(expected.timestamp_millis())), Some(expected));
        assert_eq!(parse_timestamp(&Value::from("not a date")), None);
        assert_eq!(parse_timestamp(&Value::Bool(true)), None);
    }
}
