use crate::core::cpi_table::CpiIndexTable;
use crate::domain::ports::IndexSource;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// The CPI-U series compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedIndexSource;

impl IndexSource for EmbeddedIndexSource {
    fn load(&self) -> Result<CpiIndexTable> {
        CpiIndexTable::embedded()
    }

    fn describe(&self) -> String {
        "embedded CPI-U dataset".to_string()
    }
}

/// A `year,index` CSV file on disk.
#[derive(Debug, Clone)]
pub struct FileIndexSource {
    path: PathBuf,
}

impl FileIndexSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl IndexSource for FileIndexSource {
    fn load(&self) -> Result<CpiIndexTable> {
        tracing::debug!("Reading CPI data from {}", self.path.display());
        CpiIndexTable::from_path(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// File source when a path is configured, embedded data otherwise.
pub fn index_source_for(path: Option<&Path>) -> Box<dyn IndexSource> {
    match path {
        Some(path) => Box::new(FileIndexSource::new(path)),
        None => Box::new(EmbeddedIndexSource),
    }
}
