use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub application_id: Option<String>,
    pub cpi_data_path: Option<PathBuf>,
    pub log_level: String,
}

impl LambdaConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            application_id: read("APP_ID"),
            cpi_data_path: read("CPI_DATA_PATH").map(PathBuf::from),
            log_level: read("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        }
    }
}

impl ConfigProvider for LambdaConfig {
    fn cpi_data_path(&self) -> Option<&Path> {
        self.cpi_data_path.as_deref()
    }

    fn application_id(&self) -> Option<&str> {
        self.application_id.as_deref()
    }

    fn log_level(&self) -> &str {
        &self.log_level
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        // 驗證技能 ID
        match &self.application_id {
            Some(id) => validation::validate_application_id("APP_ID", id)?,
            None => tracing::warn!("APP_ID is not set; requests from any skill will be accepted"),
        }

        // 驗證資料路徑
        if let Some(path) = &self.cpi_data_path {
            validation::validate_path("CPI_DATA_PATH", path)?;
        }

        validation::validate_log_level("LOG_LEVEL", &self.log_level)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> LambdaConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LambdaConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.application_id(), None);
        assert_eq!(config.cpi_data_path(), None);
        assert_eq!(config.log_level(), "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = config_from(&[
            ("APP_ID", "amzn1.ask.skill.1234"),
            ("CPI_DATA_PATH", "/opt/data/cpi_u.csv"),
            ("LOG_LEVEL", "debug"),
        ]);
        assert_eq!(config.application_id(), Some("amzn1.ask.skill.1234"));
        assert_eq!(config.cpi_data_path(), Some(Path::new("/opt/data/cpi_u.csv")));
        assert_eq!(config.log_level(), "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_app_id_is_unset() {
        let config = config_from(&[("APP_ID", "  ")]);
        assert_eq!(config.application_id(), None);
    }

    #[test]
    fn test_rejects_bad_app_id() {
        let config = config_from(&[("APP_ID", "not-a-skill")]);
        assert!(config.validate().is_err());
    }
}
