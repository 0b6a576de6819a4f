//! WASM bindings for stay-engine.
//!
//! Exposes booking validation, availability checks and vacancy search to the
//! JavaScript front ends via `wasm-bindgen`. Complex values cross the boundary
//! as JSON strings.
//!
//! Send dates as `YYYY-MM-DD` in the hotel's calendar, not `Date.toISOString()`.
//! A timestamp is cut to the day in its own offset, so the UTC string for local
//! midnight east of Greenwich (`2025-06-15T18:30:00.000Z` for the 16th in
//! UTC+05:30) names the previous day.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p stay-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/stay-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/stay_engine_wasm.wasm
//! ```
//!
//! Each export is a thin wrapper around a plain function returning
//! `Result<_, String>`, so the logic can be tested on the host target.

use serde::Serialize;
use stay_engine::{DateOnly, DenialReason, Interval, MaintenanceWindow, RoomId};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, PartialEq)]
struct ValidationDto {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<DenialReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_date(s: &str) -> Result<DateOnly, String> {
    DateOnly::parse(s).map_err(|e| e.to_string())
}

/// Parse a JSON array of `{start, end}` (or `{check_in, check_out}`) objects.
fn parse_intervals_json(json: &str) -> Result<Vec<Interval>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid intervals JSON: {}", e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// Host-testable implementations
// ---------------------------------------------------------------------------

fn validate_booking_dates_impl(
    check_in: &str,
    check_out: &str,
    today: &str,
) -> Result<String, String> {
    let today = parse_date(today)?;
    let dto = match stay_engine::validate_raw_booking_dates(check_in, check_out, today) {
        Ok(_) => ValidationDto {
            valid: true,
            reason: None,
            message: None,
        },
        Err(err) => ValidationDto {
            valid: false,
            reason: Some(DenialReason::from(&err)),
            message: Some(err.to_string()),
        },
    };
    to_json(&dto)
}

fn is_available_impl(
    requested_json: &str,
    existing_json: &str,
    maintenance_days: u32,
) -> Result<bool, String> {
    let requested: Interval = serde_json::from_str(requested_json)
        .map_err(|e| format!("Invalid requested interval JSON: {}", e))?;
    let requested = Interval::new(requested.start, requested.end).map_err(|e| e.to_string())?;
    let existing = parse_intervals_json(existing_json)?;
    let maintenance = MaintenanceWindow::new(maintenance_days);

    stay_engine::is_available(&requested, &existing, maintenance).map_err(|e| e.to_string())
}

fn next_available_check_in_impl(checkout: &str, maintenance_days: u32) -> Result<String, String> {
    let checkout = parse_date(checkout)?;
    let maintenance = MaintenanceWindow::new(maintenance_days);
    Ok(stay_engine::next_available_check_in(checkout, maintenance).to_string())
}

fn request_booking_impl(
    room_id: &str,
    check_in: &str,
    check_out: &str,
    existing_json: &str,
    today: &str,
    maintenance_days: u32,
) -> Result<String, String> {
    let room_id = RoomId::from(room_id);
    let today = parse_date(today)?;
    let existing = parse_intervals_json(existing_json)?;
    let maintenance = MaintenanceWindow::new(maintenance_days);

    let decision = match (DateOnly::parse(check_in), DateOnly::parse(check_out)) {
        (Ok(check_in), Ok(check_out)) => stay_engine::request_booking(
            &room_id,
            check_in,
            check_out,
            &existing,
            today,
            maintenance,
        ),
        (Err(err), _) | (_, Err(err)) => stay_engine::Decision::rejected(room_id, &err),
    };
    to_json(&decision)
}

fn find_vacancies_impl(
    existing_json: &str,
    from: &str,
    to: &str,
    maintenance_days: u32,
) -> Result<String, String> {
    let existing = parse_intervals_json(existing_json)?;
    let (from, to) = (parse_date(from)?, parse_date(to)?);
    let maintenance = MaintenanceWindow::new(maintenance_days);
    let vacancies =
        stay_engine::find_vacancies(&existing, from, to, maintenance).map_err(|e| e.to_string())?;
    to_json(&vacancies)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Validate requested stay dates against `today`.
///
/// Returns `{"valid": true}` or `{"valid": false, "reason": ..., "message": ...}`.
/// Only an unparseable `today` is an error.
#[wasm_bindgen(js_name = "validateBookingDates")]
pub fn validate_booking_dates(
    check_in: &str,
    check_out: &str,
    today: &str,
) -> Result<String, JsValue> {
    validate_booking_dates_impl(check_in, check_out, today).map_err(|e| JsValue::from_str(&e))
}

/// Whether `requested_json` (`{start, end}`) fits between `existing_json` intervals.
#[wasm_bindgen(js_name = "isAvailable")]
pub fn is_available(
    requested_json: &str,
    existing_json: &str,
    maintenance_days: u32,
) -> Result<bool, JsValue> {
    is_available_impl(requested_json, existing_json, maintenance_days)
        .map_err(|e| JsValue::from_str(&e))
}

/// `checkout + maintenance_days + 1` as `YYYY-MM-DD`.
#[wasm_bindgen(js_name = "nextAvailableCheckIn")]
pub fn next_available_check_in(checkout: &str, maintenance_days: u32) -> Result<String, JsValue> {
    next_available_check_in_impl(checkout, maintenance_days).map_err(|e| JsValue::from_str(&e))
}

/// Decide a booking request. Returns the `Decision` as JSON.
///
/// Unparseable stay dates produce a denied decision (`invalid_date`); an
/// unparseable `today` or intervals array is an error.
#[wasm_bindgen(js_name = "requestBooking")]
pub fn request_booking(
    room_id: &str,
    check_in: &str,
    check_out: &str,
    existing_json: &str,
    today: &str,
    maintenance_days: u32,
) -> Result<String, JsValue> {
    request_booking_impl(
        room_id,
        check_in,
        check_out,
        existing_json,
        today,
        maintenance_days,
    )
    .map_err(|e| JsValue::from_str(&e))
}

/// Free ranges between `from` and `to`, as a JSON array of `{start, end, nights}`.
#[wasm_bindgen(js_name = "findVacancies")]
pub fn find_vacancies(
    existing_json: &str,
    from: &str,
    to: &str,
    maintenance_days: u32,
) -> Result<String, JsValue> {
    find_vacancies_impl(existing_json, from, to, maintenance_days)
        .map_err(|e| JsValue::from_str(&e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    const EXISTING: &str = r#"[{"start":"2025-06-10","end":"2025-06-15"}]"#;
    const TODAY: &str = "2025-06-01";

    fn parse(json: &str) -> Value {
        serde_json::from_str(json).unwrap()
    }

    fn validate(check_in: &str, check_out: &str) -> Value {
        parse(&validate_booking_dates_impl(check_in, check_out, TODAY).unwrap())
    }

    fn request(check_in: &str, check_out: &str) -> Value {
        let decision = request_booking_impl("101", check_in, check_out, EXISTING, TODAY, 1);
        parse(&decision.unwrap())
    }

    #[test]
    fn validation_reports_reason_codes() {
        let valid = validate("2025-06-10", "2025-06-12");
        assert_eq!(valid, json!({"valid": true}));

        let equal = validate("2025-06-05", "2025-06-05");
        assert_eq!(equal["reason"], "invalid_range");
        let past = validate("2024-01-01", "2024-01-05");
        assert_eq!(past["reason"], "past_date");
        let garbage = validate("soon", "2024-01-05");
        assert_eq!(garbage["reason"], "invalid_date");
    }

    #[test]
    fn validation_requires_a_valid_today() {
        let result = validate_booking_dates_impl("2025-06-10", "2025-06-12", "today");
        assert!(result.is_err());
    }

    #[test]
    fn availability_accepts_js_timestamps() {
        let requested = r#"{"start":"2025-06-16T00:00:00.000Z","end":"2025-06-18T00:00:00.000Z"}"#;
        assert!(is_available_impl(requested, EXISTING, 1).unwrap());

        let requested = r#"{"check_in":"2025-06-15","check_out":"2025-06-18"}"#;
        assert!(!is_available_impl(requested, EXISTING, 1).unwrap());
    }

    #[test]
    fn timestamps_keep_the_day_of_their_own_offset() {
        // Local midnight on the 16th in UTC+05:30, as `toISOString()` sends it.
        let utc = r#"{"start":"2025-06-15T18:30:00.000Z","end":"2025-06-18"}"#;
        assert!(!is_available_impl(utc, EXISTING, 1).unwrap());

        let local = r#"{"start":"2025-06-16T00:00:00+05:30","end":"2025-06-18"}"#;
        assert!(is_available_impl(local, EXISTING, 1).unwrap());

        let plain = r#"{"start":"2025-06-16","end":"2025-06-18"}"#;
        assert!(is_available_impl(plain, EXISTING, 1).unwrap());
    }

    #[test]
    fn availability_rejects_bad_request_and_corrupt_snapshot() {
        let inverted = r#"{"start":"2025-06-18","end":"2025-06-16"}"#;
        assert!(is_available_impl(inverted, EXISTING, 1).is_err());

        let requested = r#"{"start":"2025-07-01","end":"2025-07-02"}"#;
        let corrupt = r#"[{"start":"2025-06-15","end":"2025-06-10"}]"#;
        let err = is_available_impl(requested, corrupt, 1).unwrap_err();
        assert!(err.contains("Corrupt interval"), "{err}");
    }

    #[test]
    fn next_check_in_formats_as_date() {
        let next = next_available_check_in_impl("2025-06-15", 1).unwrap();
        assert_eq!(next, "2025-06-17");
        assert!(next_available_check_in_impl("nope", 1).is_err());
    }

    #[test]
    fn request_booking_returns_decision_json() {
        let allowed = request("2025-06-16", "2025-06-18");
        assert_eq!(allowed, json!({"room_id": "101", "outcome": "allowed"}));

        let denied = request("2025-06-15", "2025-06-18");
        assert_eq!(denied["reason"], "conflict");
        assert_eq!(denied["suggested_next_check_in"], "2025-06-16");

        let bad_date = request("June", "2025-06-18");
        assert_eq!(bad_date["reason"], "invalid_date");
    }

    #[test]
    fn vacancies_are_listed_with_nights() {
        let json = find_vacancies_impl(EXISTING, "2025-06-01", "2025-06-30", 1).unwrap();
        assert_eq!(
            parse(&json),
            json!([
                {"start": "2025-06-01", "end": "2025-06-10", "nights": 9},
                {"start": "2025-06-16", "end": "2025-06-30", "nights": 14}
            ])
        );
    }
}
