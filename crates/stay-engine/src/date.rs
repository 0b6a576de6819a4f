//! Calendar dates without a time-of-day component.
//!
//! All booking arithmetic happens on whole days. [`DateOnly`] wraps
//! `chrono::NaiveDate` so that comparisons never depend on a time zone or on
//! DST, and so that boundary arithmetic is a pure `add_days` instead of
//! in-place mutation.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StayError};

/// A calendar day.
///
/// Serialises as `YYYY-MM-DD`. Deserialisation also accepts timestamps, which
/// are truncated to their calendar day (see [`DateOnly::parse`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateOnly(NaiveDate);

impl DateOnly {
    /// The latest representable day. `add_days` saturates here.
    pub const MAX: DateOnly = DateOnly(NaiveDate::MAX);

    /// Build a date from year, month and day.
    ///
    /// # Errors
    /// Returns `StayError::InvalidDate` for impossible dates such as February 30.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(DateOnly)
            .ok_or_else(|| StayError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Parse a date from a string.
    ///
    /// Accepted forms, tried in order:
    /// - `2025-06-10`
    /// - RFC 3339 (`2025-06-10T23:30:00-05:00`) -- the day in the timestamp's own offset
    /// - naive local time (`2025-06-10T14:00:00`)
    ///
    /// # Errors
    /// Returns `StayError::InvalidDate` if none of the forms match.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(DateOnly(date));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(DateOnly(dt.date_naive()));
        }
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
            .map(|ndt| DateOnly(ndt.date()))
            .map_err(|_| StayError::InvalidDate(s.to_string()))
    }

    /// The calendar day of `dt` as seen in its own time zone.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        DateOnly(dt.date_naive())
    }

    /// This day shifted forward by `days`, saturating at [`DateOnly::MAX`].
    #[must_use]
    pub fn add_days(self, days: u32) -> Self {
        self.0
            .checked_add_days(Days::new(u64::from(days)))
            .map_or(Self::MAX, DateOnly)
    }

    /// Signed number of days from `self` to `later`.
    pub fn days_until(self, later: DateOnly) -> i64 {
        later.0.signed_duration_since(self.0).num_days()
    }

    /// The underlying `chrono` date.
    pub fn as_naive(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateOnly {
    fn from(date: NaiveDate) -> Self {
        DateOnly(date)
    }
}

impl FromStr for DateOnly {
    type Err = StayError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DateOnly {
    type Error = StayError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<DateOnly> for String {
    fn from(date: DateOnly) -> Self {
        date.to_string()
    }
}

impl fmt::Display for DateOnly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
