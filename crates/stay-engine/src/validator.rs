//! Request-date validation, run before any availability check.

use crate::date::DateOnly;
use crate::error::{Result, StayError};

/// `Ok(())` when the dates may be submitted to the availability engine.
pub type ValidationResult = Result<()>;

/// Check a requested stay against basic date rules.
///
/// Range is checked first, so a request that is both inverted and in the past
/// reports `InvalidRange`. Comparison is by calendar day: a check-in of today
/// is accepted.
///
/// # Errors
/// - `StayError::InvalidRange` if `check_in >= check_out`
/// - `StayError::PastDate` if `check_in < today`
pub fn validate_booking_dates(
    check_in: DateOnly,
    check_out: DateOnly,
    today: DateOnly,
) -> ValidationResult {
    if check_in >= check_out {
        return Err(StayError::InvalidRange {
            check_in,
            check_out,
        });
    }
    if check_in < today {
        return Err(StayError::PastDate { check_in, today });
    }
    Ok(())
}

/// Parse both dates, then validate them.
///
/// On success returns the parsed `(check_in, check_out)` pair.
///
/// # Errors
/// `StayError::InvalidDate` if either string is not a date, otherwise the
/// errors of [`validate_booking_dates`].
pub fn validate_raw_booking_dates(
    check_in: &str,
    check_out: &str,
    today: DateOnly,
) -> Result<(DateOnly, DateOnly)> {
    let check_in = DateOnly::parse(check_in)?;
    let check_out = DateOnly::parse(check_out)?;
    validate_booking_dates(check_in, check_out, today)?;
    Ok((check_in, check_out))
}
