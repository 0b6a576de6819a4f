//! Booking decisions: validation, availability and a suggested alternative.
//!
//! Everything here is stateless. Committing an allowed stay is the caller's
//! job, and the caller must serialise snapshot → decide → commit per room.

use serde::{Deserialize, Serialize};

use crate::availability::{earliest_clear_check_in, find_conflicts};
use crate::clock::Clock;
use crate::date::DateOnly;
use crate::error::StayError;
use crate::interval::{Interval, MaintenanceWindow, RoomId};
use crate::policy::SchedulingPolicy;
use crate::store::IntervalSource;
use crate::validator::validate_booking_dates;

/// A stay someone wants to book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub room_id: RoomId,
    pub check_in: DateOnly,
    pub check_out: DateOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Allowed,
    Denied,
}

/// Why a request was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    InvalidDate,
    InvalidRange,
    PastDate,
    CorruptInput,
    Conflict,
}

impl From<&StayError> for DenialReason {
    fn from(err: &StayError) -> Self {
        match err {
            StayError::InvalidDate(_) => DenialReason::InvalidDate,
            StayError::InvalidRange { .. } => DenialReason::InvalidRange,
            StayError::PastDate { .. } => DenialReason::PastDate,
            StayError::CorruptInput { .. } => DenialReason::CorruptInput,
        }
    }
}

/// The answer to one booking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub room_id: RoomId,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<DenialReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Only set on conflicts. Not re-checked against other bookings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_next_check_in: Option<DateOnly>,
}

impl Decision {
    pub fn allowed(room_id: RoomId) -> Self {
        Decision {
            room_id,
            outcome: Outcome::Allowed,
            reason: None,
            message: None,
            suggested_next_check_in: None,
        }
    }

    /// A denial carrying the error's reason code and message.
    pub fn rejected(room_id: RoomId, err: &StayError) -> Self {
        Decision {
            room_id,
            outcome: Outcome::Denied,
            reason: Some(DenialReason::from(err)),
            message: Some(err.to_string()),
            suggested_next_check_in: None,
        }
    }

    fn conflict(room_id: RoomId, blocking: &Interval, suggested: DateOnly) -> Self {
        Decision {
            room_id,
            outcome: Outcome::Denied,
            reason: Some(DenialReason::Conflict),
            message: Some(format!("Room is occupied by {blocking} (plus maintenance)")),
            suggested_next_check_in: Some(suggested),
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.outcome == Outcome::Allowed
    }
}

/// Decide a single booking request against a room snapshot.
///
/// 1. Dates are validated; failures deny with the validator's reason.
/// 2. A malformed snapshot denies with `corrupt_input` and no suggestion.
/// 3. No conflicting interval: allowed.
/// 4. Otherwise denied, suggesting the day the latest-ending conflicting stay
///    (plus maintenance) clears.
///
/// The suggestion is [`earliest_clear_check_in`] (check-out + maintenance),
/// the first day this function would accept, not [`next_available_check_in`]
/// (one day later).
///
/// [`next_available_check_in`]: crate::next_available_check_in
pub fn request_booking(
    room_id: &RoomId,
    check_in: DateOnly,
    check_out: DateOnly,
    existing: &[Interval],
    today: DateOnly,
    maintenance: MaintenanceWindow,
) -> Decision {
    if let Err(err) = validate_booking_dates(check_in, check_out, today) {
        tracing::debug!(
            room = %room_id,
            %check_in,
            %check_out,
            error = %err,
            "booking request invalid"
        );
        return Decision::rejected(room_id.clone(), &err);
    }

    let requested = Interval {
        start: check_in,
        end: check_out,
    };

    let conflicts = match find_conflicts(&requested, existing, maintenance) {
        Ok(conflicts) => conflicts,
        Err(err) => return Decision::rejected(room_id.clone(), &err),
    };

    match conflicts.iter().max_by_key(|interval| interval.end) {
        None => {
            tracing::debug!(room = %room_id, %check_in, %check_out, "booking allowed");
            Decision::allowed(room_id.clone())
        }
        Some(latest) => {
            let suggested = earliest_clear_check_in(latest, maintenance);
            tracing::debug!(
                room = %room_id,
                %check_in,
                %check_out,
                conflicts = conflicts.len(),
                %suggested,
                "booking denied"
            );
            Decision::conflict(room_id.clone(), latest, suggested)
        }
    }
}

/// [`request_booking`] bound to a room-lookup source, a clock and a policy.
#[derive(Debug, Clone)]
pub struct ReservationCoordinator<S, C> {
    source: S,
    clock: C,
    policy: SchedulingPolicy,
}

impl<S: IntervalSource, C: Clock> ReservationCoordinator<S, C> {
    pub fn new(source: S, clock: C, policy: SchedulingPolicy) -> Self {
        ReservationCoordinator {
            source,
            clock,
            policy,
        }
    }

    pub fn policy(&self) -> SchedulingPolicy {
        self.policy
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Snapshot the requested room and decide.
    pub fn request(&self, request: &BookingRequest) -> Decision {
        let existing = self.source.intervals_for(&request.room_id);
        request_booking(
            &request.room_id,
            request.check_in,
            request.check_out,
            &existing,
            self.clock.today(),
            self.policy.maintenance_days,
        )
    }

    /// One decision per candidate room, in candidate order.
    ///
    /// `today` is read once so every room is judged against the same day.
    pub fn decide_for_rooms<'a, I>(
        &self,
        candidates: I,
        check_in: DateOnly,
        check_out: DateOnly,
    ) -> Vec<Decision>
    where
        I: IntoIterator<Item = &'a RoomId>,
    {
        let today = self.clock.today();
        candidates
            .into_iter()
            .map(|room_id| {
                let existing = self.source.intervals_for(room_id);
                request_booking(
                    room_id,
                    check_in,
                    check_out,
                    &existing,
                    today,
                    self.policy.maintenance_days,
                )
            })
            .collect()
    }

    /// The candidate rooms that would accept the stay.
    pub fn available_rooms<'a, I>(
        &self,
        candidates: I,
        check_in: DateOnly,
        check_out: DateOnly,
    ) -> Vec<RoomId>
    where
        I: IntoIterator<Item = &'a RoomId>,
    {
        self.decide_for_rooms(candidates, check_in, check_out)
            .into_iter()
            .filter(Decision::is_allowed)
            .map(|decision| decision.room_id)
            .collect()
    }
}
