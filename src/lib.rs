pub mod config;
pub mod core;
pub mod domain;
pub mod skill;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{lambda::LambdaConfig, toml_config::TomlConfig};
pub use crate::core::cpi_table::CpiIndexTable;
pub use crate::core::inflation::{ConversionError, InflationAdjuster, MIN_YEAR};
pub use crate::domain::ports::{FixedYear, SystemClock, YearProvider};
pub use crate::skill::envelope::{SkillRequest, SkillResponse};
pub use crate::skill::speech::format_money;
pub use crate::skill::Skill;
pub use crate::utils::error::{Result, SkillError};
