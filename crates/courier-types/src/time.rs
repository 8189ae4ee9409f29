use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point in time with whole-second precision, unix seconds on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn from_unix(secs: i64) -> Self {
        Self(secs)
    }

    pub fn unix(&self) -> i64 {
        self.0
    }

    /// `None` when the value is outside chrono's representable range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }
}

/// Sub-second precision is truncated.
impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_datetime_truncates_nanoseconds() {
        let dt = DateTime::from_timestamp(1_600_000_000, 500_000_000).unwrap();
        let ts = Timestamp::from(dt);
        assert_eq!(ts.unix(), 1_600_000_000);
        assert_eq!(ts.to_datetime().unwrap().timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn test_wire_form_is_plain_seconds() {
        let ts = Timestamp::from_unix(1_600_000_000);
        assert_eq!(serde_json::to_value(ts).unwrap(), serde_json::json!(1_600_000_000));
        let back: Timestamp = serde_json::from_value(serde_json::json!(1_600_000_000)).unwrap();
        assert_eq!(back, ts);
    }
}
