//! Free date ranges for a room, for calendar views and date pickers.
//!
//! Effective occupancies (stay plus maintenance) are merged, then the gaps
//! between them inside a window are reported. Any stay that fits entirely in
//! a reported vacancy is accepted by [`is_available`](crate::is_available).

use serde::{Deserialize, Serialize};

use crate::availability::sorted_snapshot;
use crate::date::DateOnly;
use crate::error::Result;
use crate::interval::{Interval, MaintenanceWindow};

/// A free range `[start, end)` in a room's calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vacancy {
    pub start: DateOnly,
    pub end: DateOnly,
    pub nights: i64,
}

impl Vacancy {
    fn new(start: DateOnly, end: DateOnly) -> Self {
        Vacancy {
            start,
            end,
            nights: start.days_until(end),
        }
    }
}

/// Merge overlapping or touching effective occupancies, clipped to the window.
///
/// Returns sorted, non-overlapping `(start, blocked_until)` pairs.
fn merge_blocked(
    existing: &[Interval],
    window_start: DateOnly,
    window_end: DateOnly,
    maintenance: MaintenanceWindow,
) -> Result<Vec<(DateOnly, DateOnly)>> {
    let sorted = sorted_snapshot(existing)?;

    let mut merged: Vec<(DateOnly, DateOnly)> = Vec::new();
    for interval in sorted {
        let occupancy = interval.effective_occupancy(maintenance);
        if occupancy.start >= window_end || occupancy.blocked_until <= window_start {
            continue;
        }
        let start = occupancy.start.max(window_start);
        let end = occupancy.blocked_until.min(window_end);

        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    Ok(merged)
}

/// Free ranges of the room within `[window_start, window_end)`, in date order.
///
/// # Errors
/// Returns `StayError::CorruptInput` if any existing interval is malformed.
pub fn find_vacancies(
    existing: &[Interval],
    window_start: DateOnly,
    window_end: DateOnly,
    maintenance: MaintenanceWindow,
) -> Result<Vec<Vacancy>> {
    if window_start >= window_end {
        // Still reject a corrupt snapshot rather than quietly answering.
        sorted_snapshot(existing)?;
        return Ok(Vec::new());
    }

    let merged = merge_blocked(existing, window_start, window_end, maintenance)?;

    let mut vacancies = Vec::new();
    let mut cursor = window_start;
    for (blocked_start, blocked_until) in merged {
        if cursor < blocked_start {
            vacancies.push(Vacancy::new(cursor, blocked_start));
        }
        cursor = cursor.max(blocked_until);
    }
    if cursor < window_end {
        vacancies.push(Vacancy::new(cursor, window_end));
    }

    Ok(vacancies)
}

/// The first vacancy in the window that is at least `min_nights` long.
///
/// # Errors
/// Same as [`find_vacancies`].
pub fn find_first_vacancy(
    existing: &[Interval],
    window_start: DateOnly,
    window_end: DateOnly,
    min_nights: u32,
    maintenance: MaintenanceWindow,
) -> Result<Option<Vacancy>> {
    Ok(find_vacancies(existing, window_start, window_end, maintenance)?
        .into_iter()
        .find(|vacancy| vacancy.nights >= i64::from(min_nights)))
}

/// Earliest check-in on or after `from` for a stay of `nights` nights,
/// checked against every existing interval.
///
/// Unlike [`next_available_check_in`](crate::next_available_check_in), the
/// returned day is guaranteed to be accepted by `is_available` for
/// `[day, day + nights)`. With no later bookings the search simply runs past
/// the last one, so there is always an answer. `nights` of zero is treated as
/// one.
///
/// # Errors
/// Returns `StayError::CorruptInput` if any existing interval is malformed.
pub fn earliest_available_check_in(
    existing: &[Interval],
    from: DateOnly,
    nights: u32,
    maintenance: MaintenanceWindow,
) -> Result<DateOnly> {
    let nights = nights.max(1);
    let sorted = sorted_snapshot(existing)?;

    let mut cursor = from;
    for interval in sorted {
        let occupancy = interval.effective_occupancy(maintenance);
        if occupancy.blocked_until <= cursor {
            continue;
        }
        if cursor.add_days(nights) <= occupancy.start {
            break;
        }
        cursor = occupancy.blocked_until;
    }

    Ok(cursor)
}
