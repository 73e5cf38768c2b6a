use crate::core::cpi_table::CpiIndexTable;
use crate::utils::error::Result;
use chrono::{Datelike, Utc};
use std::path::Path;

/// Source of "the current calendar year" for the sliding validity window.
pub trait YearProvider: Send + Sync {
    fn current_year(&self) -> i32;
}

/// Reads the UTC calendar year from the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl YearProvider for SystemClock {
    fn current_year(&self) -> i32 {
        Utc::now().year()
    }
}

/// Pins the current year, for tests and for `--current-year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedYear(pub i32);

impl YearProvider for FixedYear {
    fn current_year(&self) -> i32 {
        self.0
    }
}

pub trait IndexSource: Send + Sync {
    fn load(&self) -> Result<CpiIndexTable>;
    fn describe(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn cpi_data_path(&self) -> Option<&Path>;
    fn application_id(&self) -> Option<&str>;
    fn log_level(&self) -> &str;
}
