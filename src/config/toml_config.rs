use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub skill: SkillSection,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    pub cpi_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillSection {
    pub application_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl ConfigProvider for TomlConfig {
    fn cpi_data_path(&self) -> Option<&Path> {
        self.data.cpi_path.as_deref()
    }

    fn application_id(&self) -> Option<&str> {
        self.skill.application_id.as_deref()
    }

    fn log_level(&self) -> &str {
        self.logging.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.data.cpi_path {
            validation::validate_path("data.cpi_path", path)?;
        }

        if let Some(id) = &self.skill.application_id {
            validation::validate_application_id("skill.application_id", id)?;
        }

        validation::validate_log_level("logging.level", self.log_level())?;

        tracing::debug!("✅ TOML configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SkillError;

    #[test]
    fn test_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[data]
cpi_path = "data/cpi_u.csv"

[skill]
application_id = "amzn1.ask.skill.0f2d3c9a-1111-4e2b-9b7a-5f0e6a1d2c3b"

[logging]
level = "debug"
"#,
        )
        .unwrap();

        assert_eq!(config.cpi_data_path(), Some(Path::new("data/cpi_u.csv")));
        assert_eq!(
            config.application_id(),
            Some("amzn1.ask.skill.0f2d3c9a-1111-4e2b-9b7a-5f0e6a1d2c3b")
        );
        assert_eq!(config.log_level(), "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.cpi_data_path(), None);
        assert_eq!(config.application_id(), None);
        assert_eq!(config.log_level(), "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let config = TomlConfig::from_toml_str("[skill]\napplication_id = \"my-skill\"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(SkillError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            TomlConfig::from_toml_str("[data\ncpi_path = 1"),
            Err(SkillError::TomlError(_))
        ));
    }
}
