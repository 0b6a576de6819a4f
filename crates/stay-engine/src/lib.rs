//! # stay-engine
//!
//! Deterministic room availability with post-checkout maintenance windows.
//!
//! The engine answers one question: can this room take this stay, given the
//! stays it already has? Each existing stay blocks the room from check-in
//! until check-out plus a maintenance window. Requests are half-open date
//! ranges, so a guest may arrive the day the maintenance window clears.
//!
//! Everything is a pure function of its inputs. The engine owns no room state
//! and never reads the system clock; callers pass a snapshot of the room's
//! intervals and the current day.
//!
//! ```rust
//! use stay_engine::{request_booking, DateOnly, Interval, MaintenanceWindow, RoomId};
//!
//! let d = |s: &str| DateOnly::parse(s).unwrap();
//! let existing = [Interval::new(d("2025-06-10"), d("2025-06-15")).unwrap()];
//!
//! let decision = request_booking(
//!     &RoomId::from("101"),
//!     d("2025-06-15"),
//!     d("2025-06-18"),
//!     &existing,
//!     d("2025-06-01"),
//!     MaintenanceWindow::default(),
//! );
//! assert!(!decision.is_allowed());
//! assert_eq!(decision.suggested_next_check_in, Some(d("2025-06-16")));
//! ```
//!
//! ## Modules
//!
//! - [`date`] — `DateOnly`, day-granularity dates
//! - [`interval`] — `Interval`, `MaintenanceWindow`, `EffectiveOccupancy`, `RoomId`
//! - [`validator`] — request-date validation
//! - [`availability`] — overlap test, availability check, next check-in
//! - [`coordinator`] — `Decision`s and the `ReservationCoordinator`
//! - [`vacancy`] — free ranges and earliest fitting check-in
//! - [`store`] — `IntervalStore` and the room-lookup trait
//! - [`clock`] — the source of "today"
//! - [`policy`] — `SchedulingPolicy`
//! - [`error`] — Error types

pub mod availability;
pub mod clock;
pub mod coordinator;
pub mod date;
pub mod error;
pub mod interval;
pub mod policy;
pub mod store;
pub mod validator;
pub mod vacancy;

pub use availability::{
    check_overlap, earliest_clear_check_in, find_conflicts, is_available, next_available_check_in,
};
pub use clock::{Clock, FixedClock};
pub use coordinator::{
    request_booking, BookingRequest, Decision, DenialReason, Outcome, ReservationCoordinator,
};
pub use date::DateOnly;
pub use error::StayError;
pub use interval::{EffectiveOccupancy, Interval, MaintenanceWindow, RoomId};
pub use policy::SchedulingPolicy;
pub use store::{IntervalSource, IntervalStore, Reservation, ReservationStatus};
pub use validator::{validate_booking_dates, validate_raw_booking_dates, ValidationResult};
pub use vacancy::{earliest_available_check_in, find_first_vacancy, find_vacancies, Vacancy};
