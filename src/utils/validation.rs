use crate::utils::error::{Result, SkillError};
use std::path::Path;

pub const APPLICATION_ID_PREFIX: &str = "amzn1.ask.skill.";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let text = path.to_string_lossy();
    if text.is_empty() {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: text.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if text.contains('\0') {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: text.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    if path.extension().and_then(|ext| ext.to_str()) != Some("csv") {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: text.to_string(),
            reason: "CPI data must be a .csv file".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_application_id(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if !value.starts_with(APPLICATION_ID_PREFIX) || value.len() == APPLICATION_ID_PREFIX.len() {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Application id must look like '{}<uuid>'", APPLICATION_ID_PREFIX),
        });
    }
    Ok(())
}

pub fn validate_log_level(field_name: &str, value: &str) -> Result<()> {
    const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

    if !LEVELS.contains(&value.to_ascii_lowercase().as_str()) {
        return Err(SkillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Log level must be one of: {}", LEVELS.join(", ")),
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
        return Err(SkillError::InvalidConfigValueError {
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
    fn test_validate_path() {
        assert!(validate_path("cpi_path", Path::new("data/cpi_u.csv")).is_ok());
        assert!(validate_path("cpi_path", Path::new("")).is_err());
        assert!(validate_path("cpi_path", Path::new("data/cpi_u.json")).is_err());
    }

    #[test]
    fn test_validate_application_id() {
        assert!(validate_application_id(
            "application_id",
            "amzn1.ask.skill.0f2d3c9a-1111-4e2b-9b7a-5f0e6a1d2c3b"
        )
        .is_ok());
        assert!(validate_application_id("application_id", "").is_err());
        assert!(validate_application_id("application_id", "amzn1.ask.skill.").is_err());
        assert!(validate_application_id("application_id", "my-skill").is_err());
    }

    #[test]
    fn test_validate_log_level() {
        assert!(validate_log_level("level", "INFO").is_ok());
        assert!(validate_log_level("level", "verbose").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("current_year", 2026, 1913, 9999).is_ok());
        assert!(validate_range("current_year", 1900, 1913, 9999).is_err());
    }
}
