//! Tests for request-date validation.

use stay_engine::{
    validate_booking_dates, validate_raw_booking_dates, DateOnly, StayError, ValidationResult,
};

const TODAY: &str = "2025-05-01";

fn d(s: &str) -> DateOnly {
    DateOnly::parse(s).unwrap()
}

fn validate(check_in: &str, check_out: &str) -> ValidationResult {
    validate_booking_dates(d(check_in), d(check_out), d(TODAY))
}

#[test]
fn valid_future_stay_passes() {
    assert!(validate("2025-06-10", "2025-06-15").is_ok());
}

#[test]
fn check_in_today_is_not_past() {
    assert!(validate(TODAY, "2025-05-02").is_ok());
}

#[test]
fn equal_dates_are_invalid_range() {
    let err = validate("2025-06-01", "2025-06-01").unwrap_err();
    assert_eq!(
        err,
        StayError::InvalidRange {
            check_in: d("2025-06-01"),
            check_out: d("2025-06-01"),
        }
    );
}

#[test]
fn inverted_dates_are_invalid_range() {
    let err = validate("2025-06-05", "2025-06-01").unwrap_err();
    assert!(matches!(err, StayError::InvalidRange { .. }));
}

#[test]
fn past_check_in_is_rejected() {
    let err = validate("2024-01-01", "2024-01-05").unwrap_err();
    assert_eq!(
        err,
        StayError::PastDate {
            check_in: d("2024-01-01"),
            today: d(TODAY),
        }
    );
}

#[test]
fn yesterday_is_past() {
    let err = validate("2025-04-30", "2025-05-03").unwrap_err();
    assert!(matches!(err, StayError::PastDate { .. }));
}

#[test]
fn inverted_and_past_reports_range_first() {
    let err = validate("2024-01-05", "2024-01-01").unwrap_err();
    assert!(matches!(err, StayError::InvalidRange { .. }));
}

#[test]
fn validation_is_pure() {
    let first = validate("2025-06-01", "2025-06-01");
    let second = validate("2025-06-01", "2025-06-01");
    assert_eq!(first, second);
}

#[test]
fn raw_dates_are_parsed_then_validated() {
    let raw = validate_raw_booking_dates("2025-06-10", "2025-06-12T11:00:00Z", d(TODAY));
    let (check_in, check_out) = raw.unwrap();
    assert_eq!(check_in, d("2025-06-10"));
    assert_eq!(check_out, d("2025-06-12"));
}

#[test]
fn raw_malformed_date_is_invalid_date() {
    let err = validate_raw_booking_dates("2025-06-10", "June 12th", d(TODAY)).unwrap_err();
    assert_eq!(err, StayError::InvalidDate("June 12th".to_string()));
}
