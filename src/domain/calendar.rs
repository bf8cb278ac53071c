use crate::utils::error::{Result, SlaError};
use crate::utils::validation::{validate_range, validate_weekday_set};
use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;

/// An organization's recurring working pattern: which weekdays are working
/// days and the daily open/close clock hours, pinned to an explicit timezone.
///
/// Immutable once constructed; the invariants (non-empty working-day set,
/// `open_hour < close_hour`) are enforced in [`BusinessCalendar::new`] so the
/// deadline loop never has to re-check them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessCalendar {
    // Indexed by weekday identifier, Sunday=0 through Saturday=6.
    working_days: [bool; 7],
    open_hour: u32,
    close_hour: u32,
    open_time: NaiveTime,
    close_time: NaiveTime,
    timezone: Tz,
}

impl BusinessCalendar {
    pub fn new(working_days: &[u8], open_hour: u32, close_hour: u32, timezone: Tz) -> Result<Self> {
        validate_weekday_set("work_days", working_days)?;
        validate_range("business_hours_start", open_hour, 0, 23)?;
        validate_range("business_hours_end", close_hour, 0, 23)?;

        if open_hour >= close_hour {
            return Err(SlaError::InvalidConfigValueError {
                field: "business_hours_start".to_string(),
                value: open_hour.to_string(),
                reason: format!(
                    "Business day must open before it closes (close hour is {})",
                    close_hour
                ),
            });
        }

        let open_time =
            NaiveTime::from_hms_opt(open_hour, 0, 0).ok_or_else(|| SlaError::ConfigError {
                message: format!("Invalid open hour: {}", open_hour),
            })?;
        let close_time =
            NaiveTime::from_hms_opt(close_hour, 0, 0).ok_or_else(|| SlaError::ConfigError {
                message: format!("Invalid close hour: {}", close_hour),
            })?;

        let mut days = [false; 7];
        for &day in working_days {
            days[day as usize] = true;
        }

        Ok(Self {
            working_days: days,
            open_hour,
            close_hour,
            open_time,
            close_time,
            timezone,
        })
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn open_hour(&self) -> u32 {
        self.open_hour
    }

    pub fn close_hour(&self) -> u32 {
        self.close_hour
    }

    /// True iff the instant's local weekday is in the working-day set.
    pub fn is_working_day(&self, instant: DateTime<Tz>) -> bool {
        self.is_working_date(instant.date_naive())
    }

    pub fn is_working_date(&self, date: NaiveDate) -> bool {
        self.working_days[date.weekday().num_days_from_sunday() as usize]
    }

    /// The instant's local date at `open_hour:00:00.000`.
    pub fn open_instant(&self, instant: DateTime<Tz>) -> DateTime<Tz> {
        self.open_on(instant.date_naive())
    }

    /// The instant's local date at `close_hour:00:00.000`.
    pub fn close_instant(&self, instant: DateTime<Tz>) -> DateTime<Tz> {
        self.resolve_local(instant.date_naive(), self.close_time)
    }

    pub fn open_on(&self, date: NaiveDate) -> DateTime<Tz> {
        self.resolve_local(date, self.open_time)
    }

    // A local time falling into a DST gap resolves to the earliest valid
    // local time at or after it; ambiguous local times take the earlier
    // offset.
    fn resolve_local(&self, date: NaiveDate, time: NaiveTime) -> DateTime<Tz> {
        let mut candidate = date.and_time(time);
        for _ in 0..6 {
            match self.timezone.from_local_datetime(&candidate) {
                LocalResult::Single(instant) => return instant,
                LocalResult::Ambiguous(earlier, _) => return earlier,
                LocalResult::None => candidate = candidate + Duration::minutes(30),
            }
        }
        // The tz database has no gap wider than three hours; interpreting the
        // wall-clock value as UTC is the non-panicking last resort.
        self.timezone.from_utc_datetime(&date.and_time(time))
    }
}
