//! Timestamp type used for validator start and end times.
//!
//! The platform chain reports times as Unix epoch seconds (UTC).

use crate::error::TypesError;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Seconds from this timestamp until `end`, zero if `end` is not later.
    pub fn seconds_until(&self, end: Timestamp) -> u64 {
        end.0.saturating_sub(self.0)
    }

    fn to_utc(self) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.0).ok()?;
        DateTime::from_timestamp(secs, 0)
    }

    /// Render as a full date and time in the requested zone.
    ///
    /// Timestamps outside chrono's range fall back to the raw seconds.
    pub fn format(&self, format: TimeFormat) -> String {
        match (self.to_utc(), format) {
            (Some(utc), TimeFormat::Utc) => utc.to_string(),
            (Some(utc), TimeFormat::Local) => utc.with_timezone(&Local).to_string(),
            (None, _) => self.to_string(),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

/// Time zone used when rendering absolute timestamps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFormat {
    /// The machine's local time zone.
    #[default]
    Local,
    Utc,
}

impl FromStr for TimeFormat {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "utc" => Ok(Self::Utc),
            _ => Err(TypesError::InvalidTimeFormat(s.to_string())),
        }
    }
}
