use crate::utils::error::{Result, TimingError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_hours(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(TimingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number greater than 0".to_string(),
        });
    }
    Ok(())
}

pub fn validate_time_zone(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    name.parse::<chrono_tz::Tz>()
        .map(|_| ())
        .map_err(|_| TimingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Not an IANA time zone name".to_string(),
        })
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(TimingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TimingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(TimingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_hours() {
        assert!(validate_positive_hours("timing.threshold_hours", 9.0).is_ok());
        assert!(validate_positive_hours("timing.threshold_hours", 0.5).is_ok());
        assert!(validate_positive_hours("timing.threshold_hours", 0.0).is_err());
        assert!(validate_positive_hours("timing.threshold_hours", -3.0).is_err());
        assert!(validate_positive_hours("timing.threshold_hours", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_time_zone() {
        assert!(validate_time_zone("timing.timezone", "UTC").is_ok());
        assert!(validate_time_zone("timing.timezone", "Asia/Taipei").is_ok());
        assert!(validate_time_zone("timing.timezone", "").is_err());
        assert!(validate_time_zone("timing.timezone", "Nowhere/City").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("timing.default_estimate_minutes", 540, 1, 10_080).is_ok());
        assert!(validate_range("timing.default_estimate_minutes", 0, 1, 10_080).is_err());
        assert!(validate_range("timing.default_estimate_minutes", 10_081, 1, 10_080).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("logging.format", "json", &["compact", "json"]).is_ok());
        assert!(validate_one_of("logging.format", "xml", &["compact", "json"]).is_err());
    }
}
