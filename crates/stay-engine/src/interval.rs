//! Occupied date spans and the maintenance buffer that follows them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::date::DateOnly;
use crate::error::{Result, StayError};

/// Opaque room identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        RoomId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        RoomId(id.to_string())
    }
}

impl From<String> for RoomId {
    fn from(id: String) -> Self {
        RoomId(id)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A half-open stay `[start, end)`: check-in day up to, but excluding, check-out day.
///
/// [`Interval::new`] rejects empty and inverted spans. The fields stay public so
/// snapshots can be deserialised straight from storage; the availability
/// engine re-checks every interval it is handed (see
/// [`StayError::CorruptInput`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    #[serde(alias = "check_in")]
    pub start: DateOnly,
    #[serde(alias = "check_out")]
    pub end: DateOnly,
}

impl Interval {
    /// # Errors
    /// Returns `StayError::InvalidRange` when `start >= end`.
    pub fn new(start: DateOnly, end: DateOnly) -> Result<Self> {
        if start >= end {
            return Err(StayError::InvalidRange {
                check_in: start,
                check_out: end,
            });
        }
        Ok(Interval { start, end })
    }

    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    /// Number of nights covered by the stay.
    pub fn nights(&self) -> i64 {
        self.start.days_until(self.end)
    }

    /// The span the room is unavailable for once the maintenance window is appended.
    pub fn effective_occupancy(&self, maintenance: MaintenanceWindow) -> EffectiveOccupancy {
        EffectiveOccupancy {
            start: self.start,
            blocked_until: self.end.add_days(maintenance.days()),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Whole days of turnover appended after every check-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaintenanceWindow(u32);

impl MaintenanceWindow {
    pub const NONE: MaintenanceWindow = MaintenanceWindow(0);

    pub const fn new(days: u32) -> Self {
        MaintenanceWindow(days)
    }

    pub const fn days(self) -> u32 {
        self.0
    }
}

impl Default for MaintenanceWindow {
    fn default() -> Self {
        MaintenanceWindow(1)
    }
}

impl From<u32> for MaintenanceWindow {
    fn from(days: u32) -> Self {
        MaintenanceWindow(days)
    }
}

/// `[start, blocked_until)` -- an interval plus its maintenance window.
///
/// Never stored; always derived from an [`Interval`] and the policy in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EffectiveOccupancy {
    pub start: DateOnly,
    pub blocked_until: DateOnly,
}

impl EffectiveOccupancy {
    /// Half-open overlap. Touching ranges do not overlap.
    pub fn overlaps(&self, other: &EffectiveOccupancy) -> bool {
        self.start < other.blocked_until && other.start < self.blocked_until
    }
}
