pub mod index_source;
pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::TomlConfig;
#[cfg(feature = "cli")]
use crate::core::inflation::MIN_YEAR;
#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "inflation-skill")]
#[command(about = "Convert an amount between years' purchasing power using CPI data")]
pub struct CliConfig {
    /// Year the amount is expressed in
    #[arg(long = "from")]
    pub from_year: String,

    /// Year to express the amount in
    #[arg(long = "to")]
    pub to_year: String,

    /// Amount of money, e.g. 12.50
    #[arg(long, allow_hyphen_values = true)]
    pub amount: String,

    /// CSV file with `year,index` rows instead of the embedded dataset
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Treat this year as the current year
    #[arg(long)]
    pub current_year: Option<i32>,

    #[arg(long, help = "Print the result as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// `[logging] level` from the TOML file, if any
    #[arg(skip)]
    pub log_level: Option<String>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併 TOML 配置 (命令列參數優先)
    pub fn apply_file_config(&mut self, file: &TomlConfig) {
        if self.data.is_none() {
            self.data = file.cpi_data_path().map(Path::to_path_buf);
        }
        if self.log_level.is_none() {
            self.log_level = file.logging.level.clone();
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn cpi_data_path(&self) -> Option<&Path> {
        self.data.as_deref()
    }

    fn application_id(&self) -> Option<&str> {
        None
    }

    fn log_level(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            self.log_level.as_deref().unwrap_or("warn")
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        if let Some(path) = &self.data {
            validation::validate_path("data", path)?;
        }

        validation::validate_log_level("log_level", self.log_level())?;

        if let Some(year) = self.current_year {
            validation::validate_range("current_year", year, MIN_YEAR, 9999)?;
        }

        Ok(())
    }
}
