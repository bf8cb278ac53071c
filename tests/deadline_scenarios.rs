use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use sla_clock::{compute_deadline, BusinessCalendar};

// Reference calendar used throughout: Monday to Friday, 09:00-18:00.
fn calendar() -> BusinessCalendar {
    BusinessCalendar::new(&[1, 2, 3, 4, 5], 9, 18, Tz::UTC).unwrap()
}

fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

#[test]
fn same_day_resolution() {
    // Monday 10:00 + 4h lands the same afternoon.
    let deadline = compute_deadline(utc(2023, 10, 23, 10), 4.0, &calendar()).unwrap();
    assert_eq!(deadline, utc(2023, 10, 23, 14));
}

#[test]
fn overnight_spillover() {
    // Monday 16:00 + 4h: 2h remain on Monday, 2h accrue Tuesday from 09:00.
    let deadline = compute_deadline(utc(2023, 10, 23, 16), 4.0, &calendar()).unwrap();
    assert_eq!(deadline, utc(2023, 10, 24, 11));
}

#[test]
fn weekend_is_skipped_entirely() {
    // Friday 16:00 + 4h: 2h Friday, then Monday from 09:00.
    let deadline = compute_deadline(utc(2023, 10, 27, 16), 4.0, &calendar()).unwrap();
    assert_eq!(deadline, utc(2023, 10, 30, 11));
}

#[test]
fn after_hours_start_rolls_to_next_open() {
    // Monday 20:00 is past close; counting starts Tuesday 09:00.
    let deadline = compute_deadline(utc(2023, 10, 23, 20), 4.0, &calendar()).unwrap();
    assert_eq!(deadline, utc(2023, 10, 24, 13));
}

#[test]
fn non_working_day_start_ignores_clock_time() {
    // Saturday noon normalizes to Monday 09:00 before any accrual.
    let deadline = compute_deadline(utc(2023, 10, 28, 12), 2.0, &calendar()).unwrap();
    assert_eq!(deadline, utc(2023, 10, 30, 11));
}

#[test]
fn multi_day_budget() {
    // 20h from Monday 10:00: 8h Monday, 9h Tuesday, 3h Wednesday.
    let deadline = compute_deadline(utc(2023, 10, 23, 10), 20.0, &calendar()).unwrap();
    assert_eq!(deadline, utc(2023, 10, 25, 12));
}

#[test]
fn before_open_start_snaps_to_same_day_open() {
    // Monday 07:00 snaps forward to 09:00, not to the next day.
    let deadline = compute_deadline(utc(2023, 10, 23, 7), 1.0, &calendar()).unwrap();
    assert_eq!(deadline, utc(2023, 10, 23, 10));
}
