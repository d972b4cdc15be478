//! Serde adapter storing `DateTime<Utc>` as a fixed width RFC 3339 string.
//!
//! Fixed microsecond precision keeps stored timestamps lexicographically ordered, which both
//! storage backends rely on when sorting by `created_at`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

pub fn format(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn serialize<S: Serializer>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(timestamp))
}

pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<DateTime<Utc>, D::Error> {
    let value = String::deserialize(deserializer)?;

    DateTime::parse_from_rfc3339(&value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_with_fixed_precision() {
        let timestamp = Utc.with_ymd_and_hms(2026, 1, 1, 8, 30, 0).unwrap();

        assert_eq!(format(&timestamp), "2026-01-01T08:30:00.000000Z");
    }

    #[test]
    fn accepts_offset_timestamps() {
        let mut deserializer =
            serde_json::Deserializer::from_str(r#""2026-01-01T10:30:00+02:00""#);

        let timestamp = deserialize(&mut deserializer).unwrap();

        assert_eq!(timestamp, Utc.with_ymd_and_hms(2026, 1, 1, 8, 30, 0).unwrap());
    }
}
