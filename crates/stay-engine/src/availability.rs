//! Decide whether a requested stay fits a room's existing bookings.
//!
//! Each existing interval blocks the room from its check-in until
//! `check-out + maintenance`. A request conflicts with it when
//!
//! ```text
//! requested.start < existing.end + M  &&  requested.end > existing.start
//! ```
//!
//! Both boundaries are exclusive: a request may start on the exact day the
//! maintenance window clears, and may end on the day an existing stay begins.
//! The maintenance window is applied to the existing interval only; the
//! request's own turnover is enforced once it is itself an existing booking.

use crate::date::DateOnly;
use crate::error::{Result, StayError};
use crate::interval::{Interval, MaintenanceWindow};

/// Whether `requested` collides with `existing` once maintenance is appended.
pub fn check_overlap(
    requested: &Interval,
    existing: &Interval,
    maintenance: MaintenanceWindow,
) -> bool {
    let blocked_until = existing.end.add_days(maintenance.days());
    requested.start < blocked_until && requested.end > existing.start
}

/// Whether the room is free for `requested`.
///
/// `existing` may be in any order and may be empty.
///
/// # Errors
/// Returns `StayError::CorruptInput` if any existing interval has
/// `start >= end`. The whole snapshot is checked before any overlap test, so a
/// malformed snapshot can never yield `true`.
pub fn is_available(
    requested: &Interval,
    existing: &[Interval],
    maintenance: MaintenanceWindow,
) -> Result<bool> {
    let sorted = sorted_snapshot(existing)?;
    Ok(!sorted
        .iter()
        .any(|interval| check_overlap(requested, interval, maintenance)))
}

/// All existing intervals that collide with `requested`, ordered by start.
///
/// # Errors
/// Same as [`is_available`].
pub fn find_conflicts(
    requested: &Interval,
    existing: &[Interval],
    maintenance: MaintenanceWindow,
) -> Result<Vec<Interval>> {
    let sorted = sorted_snapshot(existing)?;
    Ok(sorted
        .into_iter()
        .filter(|interval| check_overlap(requested, interval, maintenance))
        .collect())
}

/// Suggested check-in after an existing stay: `checkout + maintenance + 1`.
///
/// This only looks at the one check-out given. Other bookings may still block
/// the returned day, so submit it through [`is_available`] before relying on it.
pub fn next_available_check_in(
    existing_checkout: DateOnly,
    maintenance: MaintenanceWindow,
) -> DateOnly {
    existing_checkout
        .add_days(maintenance.days())
        .add_days(1)
}

/// First day on which a request can start without colliding with `existing`:
/// `existing.end + maintenance`.
pub fn earliest_clear_check_in(existing: &Interval, maintenance: MaintenanceWindow) -> DateOnly {
    existing.effective_occupancy(maintenance).blocked_until
}

/// Reject malformed intervals, then return a start-ordered copy.
pub(crate) fn sorted_snapshot(existing: &[Interval]) -> Result<Vec<Interval>> {
    if let Some((index, bad)) = existing
        .iter()
        .enumerate()
        .find(|(_, interval)| !interval.is_well_formed())
    {
        tracing::warn!(index, start = %bad.start, end = %bad.end, "corrupt interval in snapshot");
        return Err(StayError::CorruptInput {
            index,
            start: bad.start,
            end: bad.end,
        });
    }

    let mut sorted = existing.to_vec();
    sorted.sort_by_key(|interval| (interval.start, interval.end));
    Ok(sorted)
}
