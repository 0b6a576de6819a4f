//! Per-room interval snapshots.
//!
//! The authoritative reservation records live outside this crate. This module
//! defines how the engine looks them up ([`IntervalSource`]) and provides an
//! in-memory [`IntervalStore`] built from those records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::date::DateOnly;
use crate::interval::{Interval, RoomId};

/// Room-lookup collaborator: the current occupied intervals for a room.
///
/// Implementations return a snapshot. The engine neither caches nor mutates it.
pub trait IntervalSource {
    fn intervals_for(&self, room_id: &RoomId) -> Vec<Interval>;
}

/// Lifecycle of a reservation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    #[default]
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl ReservationStatus {
    /// Whether a reservation in this state still holds its dates.
    pub fn occupies_room(self) -> bool {
        !matches!(self, ReservationStatus::Cancelled)
    }
}

/// A reservation record as stored by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub room_id: RoomId,
    pub check_in: DateOnly,
    pub check_out: DateOnly,
    #[serde(default)]
    pub status: ReservationStatus,
}

impl Reservation {
    /// The occupied span. Not validated here; malformed records surface as
    /// `CorruptInput` when the engine evaluates them.
    pub fn interval(&self) -> Interval {
        Interval {
            start: self.check_in,
            end: self.check_out,
        }
    }
}

/// In-memory room → intervals map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntervalStore {
    rooms: BTreeMap<RoomId, Vec<Interval>>,
}

impl IntervalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from reservation records, skipping cancelled ones.
    ///
    /// Rooms whose reservations are all cancelled are still registered, with
    /// no intervals.
    pub fn from_reservations<'a, I>(reservations: I) -> Self
    where
        I: IntoIterator<Item = &'a Reservation>,
    {
        let mut store = Self::new();
        for reservation in reservations {
            let entry = store.rooms.entry(reservation.room_id.clone()).or_default();
            if reservation.status.occupies_room() {
                entry.push(reservation.interval());
            }
        }
        store
    }

    /// Register a room with no bookings.
    pub fn add_room(&mut self, room_id: RoomId) {
        self.rooms.entry(room_id).or_default();
    }

    /// Record an accepted stay.
    ///
    /// Callers must hold the room's write lock across the decision and this
    /// call, otherwise two overlapping requests can both be accepted.
    pub fn insert(&mut self, room_id: RoomId, interval: Interval) {
        self.rooms.entry(room_id).or_default().push(interval);
    }

    pub fn intervals(&self, room_id: &RoomId) -> &[Interval] {
        self.rooms.get(room_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Room ids in ascending order.
    pub fn rooms(&self) -> impl Iterator<Item = &RoomId> {
        self.rooms.keys()
    }

    pub fn contains_room(&self, room_id: &RoomId) -> bool {
        self.rooms.contains_key(room_id)
    }
}

impl IntervalSource for IntervalStore {
    fn intervals_for(&self, room_id: &RoomId) -> Vec<Interval> {
        self.intervals(room_id).to_vec()
    }
}
