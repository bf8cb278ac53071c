use crate::utils::error::{Result, SlaError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SlaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SlaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Weekday identifiers use Sunday=0 through Saturday=6.
pub fn validate_weekday_set(field_name: &str, days: &[u8]) -> Result<()> {
    if days.is_empty() {
        return Err(SlaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "At least one working day is required".to_string(),
        });
    }

    let mut seen: HashSet<u8> = HashSet::new();
    for &day in days {
        if day > 6 {
            return Err(SlaError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: day.to_string(),
                reason: "Weekday identifiers range from 0 (Sunday) to 6 (Saturday)".to_string(),
            });
        }
        if !seen.insert(day) {
            return Err(SlaError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: day.to_string(),
                reason: "Duplicate weekday identifier".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_non_negative_hours(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SlaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Hours must be a finite, non-negative number".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(validate_range("business_hours_start", 9, 0, 23).is_ok());
        assert!(validate_range("business_hours_start", 24, 0, 23).is_err());
    }

    #[test]
    fn test_validate_weekday_set() {
        assert!(validate_weekday_set("work_days", &[1, 2, 3, 4, 5]).is_ok());
        assert!(validate_weekday_set("work_days", &[]).is_err());
        assert!(validate_weekday_set("work_days", &[7]).is_err());
        assert!(validate_weekday_set("work_days", &[1, 1]).is_err());
    }

    #[test]
    fn test_validate_non_negative_hours() {
        assert!(validate_non_negative_hours("priorities.low", 72.0).is_ok());
        assert!(validate_non_negative_hours("priorities.low", -1.0).is_err());
        assert!(validate_non_negative_hours("priorities.low", f64::NAN).is_err());
    }
}
