use crate::domain::calendar::BusinessCalendar;
use crate::utils::error::{Result, SlaError};
use crate::utils::validation::validate_non_negative_hours;
use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

/// Hard cap on calendar-day advances per computation. A valid calendar has at
/// least one working day per week, so ten years of days is unreachable for
/// any realistic hour budget; hitting it means the calendar invariants were
/// bypassed and we fail instead of looping forever.
const MAX_DAY_ADVANCES: u32 = 3650;

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Advances `start` across the calendar by `hours` working hours and returns
/// the instant by which the ticket must be resolved.
///
/// Time accrues only inside the half-open window `[open_hour, close_hour)` on
/// working days. A start outside that window is first normalized forward onto
/// it; `hours == 0` returns the normalized start unchanged. All arithmetic is
/// done in whole milliseconds so multi-day spillover never compounds
/// floating-point error.
pub fn compute_deadline(
    start: DateTime<Utc>,
    hours: f64,
    calendar: &BusinessCalendar,
) -> Result<DateTime<Utc>> {
    validate_non_negative_hours("hours", hours)?;

    let mut remaining_ms = (hours * MS_PER_HOUR).round() as i64;
    let mut advances = DayAdvances::default();
    let mut cursor = normalize(start.with_timezone(&calendar.timezone()), calendar, &mut advances)?;

    loop {
        let close = calendar.close_instant(cursor);
        let available_ms = (close - cursor).num_milliseconds();

        // Covers the exact-boundary case: a deadline equal to close stays on
        // this day rather than rolling over.
        if available_ms >= remaining_ms {
            let deadline = cursor + Duration::milliseconds(remaining_ms);
            return Ok(deadline.with_timezone(&Utc));
        }

        remaining_ms -= available_ms;
        cursor = next_working_open(cursor, calendar, &mut advances)?;
    }
}

/// Step 1: map an arbitrary start onto the nearest valid business instant.
///
/// Exactly at open counts as inside the window; exactly at close counts as
/// outside. A start on a non-working day ignores its clock time entirely.
fn normalize(
    start: DateTime<Tz>,
    calendar: &BusinessCalendar,
    advances: &mut DayAdvances,
) -> Result<DateTime<Tz>> {
    if !calendar.is_working_day(start) {
        return next_working_open(start, calendar, advances);
    }

    let open = calendar.open_instant(start);
    let close = calendar.close_instant(start);

    if start >= close {
        next_working_open(start, calendar, advances)
    } else if start < open {
        Ok(open)
    } else {
        Ok(start)
    }
}

/// Step 3: walk forward one calendar day at a time until a working day, then
/// snap to its open instant.
fn next_working_open(
    from: DateTime<Tz>,
    calendar: &BusinessCalendar,
    advances: &mut DayAdvances,
) -> Result<DateTime<Tz>> {
    let mut date = from.date_naive();
    loop {
        advances.bump()?;
        date = date.succ_opt().ok_or_else(|| SlaError::ProcessingError {
            message: "Calendar date overflow while advancing to the next working day".to_string(),
        })?;
        if calendar.is_working_date(date) {
            return Ok(calendar.open_on(date));
        }
    }
}

/// Bounded day-advance counter shared across normalization and the consume
/// loop, turning a broken calendar into a detectable failure.
#[derive(Debug, Default)]
struct DayAdvances {
    count: u32,
}

impl DayAdvances {
    fn bump(&mut self) -> Result<()> {
        self.count += 1;
        if self.count > MAX_DAY_ADVANCES {
            return Err(SlaError::ProcessingError {
                message: format!(
                    "Gave up after {} day advances; no reachable working window",
                    MAX_DAY_ADVANCES
                ),
            });
        }
        Ok(())
    }
}
