use crate::core::inflation::ConversionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid CPI index table: {message}")]
    InvalidIndexTable { message: String },

    #[error("Request application id '{received}' does not match this skill")]
    ApplicationIdMismatch { received: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    High,
    Critical,
}

impl SkillError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SkillError::Conversion(ConversionError::IndexUnavailable { .. }) => {
                ErrorSeverity::Critical
            }
            SkillError::Conversion(_) => ErrorSeverity::Low,
            SkillError::ApplicationIdMismatch { .. } => ErrorSeverity::High,
            SkillError::InvalidConfigValueError { .. } | SkillError::TomlError(_) => {
                ErrorSeverity::High
            }
            SkillError::CsvError(_)
            | SkillError::IoError(_)
            | SkillError::SerializationError(_)
            | SkillError::InvalidIndexTable { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SkillError::Conversion(e) => e.to_string(),
            SkillError::CsvError(_) | SkillError::InvalidIndexTable { .. } => {
                format!("CPI data could not be loaded: {}", self)
            }
            SkillError::IoError(e) => format!("File access failed: {}", e),
            SkillError::TomlError(_) | SkillError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SkillError::Conversion(ConversionError::InvalidYear { .. }) => {
                "Use whole years inside the supported range"
            }
            SkillError::Conversion(ConversionError::InvalidAmount) => {
                "Pass the amount as a plain decimal number, e.g. 12.50"
            }
            SkillError::Conversion(ConversionError::IndexUnavailable { .. }) => {
                "Refresh the CPI dataset so it covers the current year"
            }
            SkillError::CsvError(_) | SkillError::InvalidIndexTable { .. } => {
                "Check that the CSV has a 'year,index' header and one row per consecutive year"
            }
            SkillError::IoError(_) => "Check that the file exists and is readable",
            SkillError::TomlError(_) => "Check the TOML syntax of the configuration file",
            SkillError::ApplicationIdMismatch { .. } => {
                "Set APP_ID to the id of the skill that invokes this function"
            }
            _ => "Review the configuration values and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, SkillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failures_are_low_severity() {
        let err = SkillError::from(ConversionError::InvalidAmount);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.recovery_suggestion().contains("decimal"));
    }

    #[test]
    fn stale_dataset_is_critical() {
        let err = SkillError::from(ConversionError::IndexUnavailable { year: 2031 });
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().contains("2031"));
    }

    #[test]
    fn invalid_config_value_is_high_severity() {
        let err = crate::utils::validation::validate_log_level("logging.level", "loud").unwrap_err();
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().starts_with("Configuration problem"));
    }
}
