pub mod cpi_table;
pub mod inflation;

pub use crate::domain::model::{ConversionInput, ConversionRequest, ConversionResult};
pub use crate::domain::ports::{FixedYear, IndexSource, SystemClock, YearProvider};
pub use crate::utils::error::Result;
