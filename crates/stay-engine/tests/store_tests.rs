//! Tests for the in-memory interval store, reservations and policy loading.

use stay_engine::{
    DateOnly, Interval, IntervalSource, IntervalStore, MaintenanceWindow, Reservation,
    ReservationStatus, RoomId, SchedulingPolicy, StayError,
};

fn d(s: &str) -> DateOnly {
    DateOnly::parse(s).unwrap()
}

#[test]
fn interval_new_rejects_empty_and_inverted() {
    assert!(matches!(
        Interval::new(d("2025-06-10"), d("2025-06-10")),
        Err(StayError::InvalidRange { .. })
    ));
    assert!(matches!(
        Interval::new(d("2025-06-10"), d("2025-06-01")),
        Err(StayError::InvalidRange { .. })
    ));
}

#[test]
fn interval_nights_and_effective_occupancy() {
    let interval = Interval::new(d("2025-06-10"), d("2025-06-15")).unwrap();
    assert_eq!(interval.nights(), 5);

    let occupancy = interval.effective_occupancy(MaintenanceWindow::new(2));
    assert_eq!(occupancy.start, d("2025-06-10"));
    assert_eq!(occupancy.blocked_until, d("2025-06-17"));
}

#[test]
fn effective_occupancies_touching_do_not_overlap() {
    let a = Interval::new(d("2025-06-10"), d("2025-06-15"))
        .unwrap()
        .effective_occupancy(MaintenanceWindow::default());
    let b = Interval::new(d("2025-06-16"), d("2025-06-18"))
        .unwrap()
        .effective_occupancy(MaintenanceWindow::default());
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));

    let c = Interval::new(d("2025-06-15"), d("2025-06-18"))
        .unwrap()
        .effective_occupancy(MaintenanceWindow::default());
    assert!(a.overlaps(&c));
    assert!(c.overlaps(&a));
}

#[test]
fn interval_accepts_check_in_aliases() {
    let interval: Interval =
        serde_json::from_str(r#"{"check_in":"2025-06-10","check_out":"2025-06-15"}"#).unwrap();
    assert_eq!(
        interval,
        Interval::new(d("2025-06-10"), d("2025-06-15")).unwrap()
    );
}

#[test]
fn deserialized_intervals_are_not_validated() {
    let interval: Interval =
        serde_json::from_str(r#"{"start":"2025-06-15","end":"2025-06-10"}"#).unwrap();
    assert!(!interval.is_well_formed());
}

#[test]
fn store_skips_cancelled_reservations() {
    let json = r#"[
        {"room_id":"101","check_in":"2025-06-10","check_out":"2025-06-15"},
        {"room_id":"101","check_in":"2025-06-20","check_out":"2025-06-22","status":"cancelled"},
        {"room_id":"102","check_in":"2025-06-01","check_out":"2025-06-03","status":"checked_out"},
        {"room_id":"103","check_in":"2025-06-01","check_out":"2025-06-03","status":"cancelled"}
    ]"#;
    let reservations: Vec<Reservation> = serde_json::from_str(json).unwrap();
    assert_eq!(reservations[0].status, ReservationStatus::Confirmed);

    let store = IntervalStore::from_reservations(&reservations);
    assert_eq!(
        store.intervals(&RoomId::from("101")),
        &[Interval::new(d("2025-06-10"), d("2025-06-15")).unwrap()]
    );
    assert_eq!(store.intervals(&RoomId::from("102")).len(), 1);
    assert!(store.contains_room(&RoomId::from("103")));
    assert!(store.intervals(&RoomId::from("103")).is_empty());

    let rooms: Vec<&str> = store.rooms().map(RoomId::as_str).collect();
    assert_eq!(rooms, vec!["101", "102", "103"]);
}

#[test]
fn store_insert_and_lookup() {
    let mut store = IntervalStore::new();
    store.add_room(RoomId::from("201"));
    store.insert(
        RoomId::from("202"),
        Interval::new(d("2025-06-10"), d("2025-06-12")).unwrap(),
    );

    assert!(store.intervals_for(&RoomId::from("201")).is_empty());
    assert_eq!(store.intervals_for(&RoomId::from("202")).len(), 1);
    assert!(store.intervals_for(&RoomId::from("999")).is_empty());
}

#[test]
fn policy_defaults_to_one_maintenance_day() {
    assert_eq!(SchedulingPolicy::default().maintenance_days.days(), 1);
    assert_eq!(
        SchedulingPolicy::from_json("{}").unwrap(),
        SchedulingPolicy::default()
    );
    assert_eq!(
        SchedulingPolicy::from_json(r#"{"maintenance_days": 3}"#).unwrap(),
        SchedulingPolicy::with_maintenance_days(3)
    );
    let negative = SchedulingPolicy::from_json(r#"{"maintenance_days": -1}"#);
    assert!(negative.is_err());
}
