//! Error types for stay-engine operations.
//!
//! Every variant is a recoverable validation failure. Callers turn them into a
//! denied [`Decision`](crate::Decision) or surface them to the user; none of
//! them indicate a fault in the engine itself.

use thiserror::Error;

use crate::date::DateOnly;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StayError {
    /// A date string could not be parsed as a calendar date.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Check-out is not strictly after check-in.
    #[error("Invalid range: check-out {check_out} must be after check-in {check_in}")]
    InvalidRange {
        check_in: DateOnly,
        check_out: DateOnly,
    },

    /// Check-in lies before the current day.
    #[error("Check-in {check_in} is in the past (today is {today})")]
    PastDate { check_in: DateOnly, today: DateOnly },

    /// The caller supplied an existing interval with `start >= end`.
    /// `index` is its position in the snapshot as given.
    #[error("Corrupt interval at index {index}: {start}..{end}")]
    CorruptInput {
        index: usize,
        start: DateOnly,
        end: DateOnly,
    },
}

/// Convenience alias used throughout stay-engine.
pub type Result<T> = std::result::Result<T, StayError>;
