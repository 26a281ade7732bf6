//! Time zone used to turn stored instants into wall-clock times.
//!
//! The layout engine works purely in local wall-clock time; this is the one
//! place where absolute instants are converted.

use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeZoneChoice {
    #[default]
    Local,
    Named(Tz),
}

impl TimeZoneChoice {
    pub fn utc() -> Self {
        TimeZoneChoice::Named(Tz::UTC)
    }

    /// Wall-clock time of `utc` in this zone.
    pub fn localize(&self, utc: &DateTime<Utc>) -> NaiveDateTime {
        match self {
            TimeZoneChoice::Local => utc.with_timezone(&Local).naive_local(),
            TimeZoneChoice::Named(tz) => utc.with_timezone(tz).naive_local(),
        }
    }

    /// Wall-clock time of a unix timestamp, or `None` if it is out of range.
    pub fn localize_timestamp(&self, secs: i64) -> Option<NaiveDateTime> {
        DateTime::from_timestamp(secs, 0).map(|utc| self.localize(&utc))
    }

    /// The current wall-clock time. Callers should capture this once per
    /// layout pass.
    pub fn now(&self) -> NaiveDateTime {
        self.localize(&Utc::now())
    }
}

impl FromStr for TimeZoneChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("local") {
            return Ok(TimeZoneChoice::Local);
        }

        s.parse::<Tz>()
            .map(TimeZoneChoice::Named)
            .map_err(|_| Error::UnknownTimeZone(s.to_owned()))
    }
}
