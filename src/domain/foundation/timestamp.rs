//! Submission timestamp value object.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Wire format for submission timestamps: `YYYYMMDD_HHMMSS`.
pub const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Second-granularity local timestamp used to name submission records.
///
/// Serializes as the `YYYYMMDD_HHMMSS` string so it can be embedded in file
/// names and sorts lexically in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Creates a timestamp for the current local time.
    pub fn now() -> Self {
        Self::from_datetime(Local::now())
    }

    /// Creates a timestamp from any zoned datetime, dropping sub-second precision.
    pub fn from_datetime<Tz: TimeZone>(dt: DateTime<Tz>) -> Self {
        let naive = dt.naive_local();
        Self(naive.with_nanosecond(0).unwrap_or(naive))
    }

    /// Parses a `YYYYMMDD_HHMMSS` string.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        NaiveDateTime::parse_from_str(value, STAMP_FORMAT)
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("timestamp", e.to_string()))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(STAMP_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw).map_err(serde::de::Error::custom)
    }
}
