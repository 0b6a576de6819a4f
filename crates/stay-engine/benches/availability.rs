use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use stay_engine::{
    find_vacancies, is_available, request_booking, DateOnly, Interval, MaintenanceWindow, RoomId,
};

/// A year of back-to-back three-night stays with a one-day turnover gap.
fn busy_year() -> Vec<Interval> {
    let mut start = DateOnly::from_ymd(2025, 1, 1).unwrap();
    let mut intervals = Vec::new();
    while start < DateOnly::from_ymd(2026, 1, 1).unwrap() {
        let end = start.add_days(3);
        intervals.push(Interval::new(start, end).unwrap());
        start = end.add_days(1);
    }
    // Storage rarely hands back sorted rows.
    intervals.reverse();
    intervals
}

fn bench_availability(c: &mut Criterion) {
    let existing = busy_year();
    let maintenance = MaintenanceWindow::default();
    let requested = Interval::new(
        DateOnly::from_ymd(2025, 12, 30).unwrap(),
        DateOnly::from_ymd(2026, 1, 2).unwrap(),
    )
    .unwrap();

    c.bench_function("is_available/busy_year", |b| {
        b.iter(|| is_available(black_box(&requested), black_box(&existing), maintenance))
    });

    let room = RoomId::from("101");
    let today = DateOnly::from_ymd(2025, 1, 1).unwrap();
    c.bench_function("request_booking/busy_year", |b| {
        b.iter(|| {
            request_booking(
                &room,
                black_box(requested.start),
                black_box(requested.end),
                black_box(&existing),
                today,
                maintenance,
            )
        })
    });

    let window_start = DateOnly::from_ymd(2025, 1, 1).unwrap();
    let window_end = DateOnly::from_ymd(2026, 1, 1).unwrap();
    c.bench_function("find_vacancies/busy_year", |b| {
        b.iter(|| find_vacancies(black_box(&existing), window_start, window_end, maintenance))
    });
}

criterion_group!(benches, bench_availability);
criterion_main!(benches);
