use crate::core::SlaEngine;
use crate::domain::calendar::BusinessCalendar;
use crate::domain::model::PriorityBudgets;
use crate::utils::error::{Result, SlaError};
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative_hours, validate_range, validate_weekday_set,
    Validate,
};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// SLA configuration as persisted by the helpdesk's configuration management.
/// This crate only consumes it; see `SlaConfig::build_engine`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlaConfig {
    pub calendar: CalendarConfig,
    pub priorities: PriorityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Working weekdays, Sunday=0 through Saturday=6.
    pub work_days: Vec<u8>,
    pub business_hours_start: u32,
    pub business_hours_end: u32,
    /// IANA timezone name the calendar is pinned to, e.g. "Europe/Oslo".
    pub timezone: String,
}

/// Working-hour budgets per ticket priority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityConfig {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
    pub critical: f64,
}

impl SlaConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SlaConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn build_calendar(&self) -> Result<BusinessCalendar> {
        let timezone = self.parse_timezone()?;
        BusinessCalendar::new(
            &self.calendar.work_days,
            self.calendar.business_hours_start,
            self.calendar.business_hours_end,
            timezone,
        )
    }

    pub fn budgets(&self) -> PriorityBudgets {
        PriorityBudgets {
            low: self.priorities.low,
            medium: self.priorities.medium,
            high: self.priorities.high,
            critical: self.priorities.critical,
        }
    }

    pub fn build_engine(&self) -> Result<SlaEngine> {
        let calendar = self.build_calendar()?;
        tracing::info!(
            timezone = %self.calendar.timezone,
            work_days = ?self.calendar.work_days,
            open = self.calendar.business_hours_start,
            close = self.calendar.business_hours_end,
            "loaded SLA calendar"
        );
        Ok(SlaEngine::new(calendar, self.budgets()))
    }

    fn parse_timezone(&self) -> Result<Tz> {
        self.calendar
            .timezone
            .parse::<Tz>()
            .map_err(|_| SlaError::InvalidConfigValueError {
                field: "calendar.timezone".to_string(),
                value: self.calendar.timezone.clone(),
                reason: "Not a known IANA timezone name".to_string(),
            })
    }
}

impl Validate for SlaConfig {
    fn validate(&self) -> Result<()> {
        validate_weekday_set("calendar.work_days", &self.calendar.work_days)?;
        validate_range(
            "calendar.business_hours_start",
            self.calendar.business_hours_start,
            0,
            23,
        )?;
        validate_range(
            "calendar.business_hours_end",
            self.calendar.business_hours_end,
            0,
            23,
        )?;
        if self.calendar.business_hours_start >= self.calendar.business_hours_end {
            return Err(SlaError::InvalidConfigValueError {
                field: "calendar.business_hours_start".to_string(),
                value: self.calendar.business_hours_start.to_string(),
                reason: format!(
                    "Business day must open before it closes (close hour is {})",
                    self.calendar.business_hours_end
                ),
            });
        }

        validate_non_empty_string("calendar.timezone", &self.calendar.timezone)?;
        self.parse_timezone()?;

        validate_non_negative_hours("priorities.low", self.priorities.low)?;
        validate_non_negative_hours("priorities.medium", self.priorities.medium)?;
        validate_non_negative_hours("priorities.high", self.priorities.high)?;
        validate_non_negative_hours("priorities.critical", self.priorities.critical)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
        [calendar]
        work_days = [1, 2, 3, 4, 5]
        business_hours_start = 9
        business_hours_end = 18
        timezone = "Europe/Oslo"

        [priorities]
        low = 72.0
        medium = 24.0
        high = 8.0
        critical = 2.0
    "#;

    #[test]
    fn parses_and_validates_a_complete_config() {
        let config = SlaConfig::from_toml_str(VALID).unwrap();
        assert_eq!(config.calendar.work_days, vec![1, 2, 3, 4, 5]);
        let engine = config.build_engine().unwrap();
        assert_eq!(engine.calendar().open_hour(), 9);
        assert_eq!(engine.calendar().close_hour(), 18);
    }

    #[test]
    fn rejects_empty_work_days() {
        let toml = VALID.replace("work_days = [1, 2, 3, 4, 5]", "work_days = []");
        let err = SlaConfig::from_toml_str(&toml).unwrap_err();
        assert!(matches!(err, SlaError::InvalidConfigValueError { field, .. } if field == "calendar.work_days"));
    }

    #[test]
    fn rejects_inverted_business_hours() {
        let toml = VALID.replace("business_hours_start = 9", "business_hours_start = 18");
        assert!(SlaConfig::from_toml_str(&toml).is_err());
    }

    #[test]
    fn rejects_unknown_timezone() {
        let toml = VALID.replace("Europe/Oslo", "Mars/Olympus_Mons");
        let err = SlaConfig::from_toml_str(&toml).unwrap_err();
        assert!(matches!(err, SlaError::InvalidConfigValueError { field, .. } if field == "calendar.timezone"));
    }

    #[test]
    fn rejects_negative_priority_budget() {
        let toml = VALID.replace("critical = 2.0", "critical = -2.0");
        assert!(SlaConfig::from_toml_str(&toml).is_err());
    }
}
