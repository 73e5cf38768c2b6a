use crate::utils::error::{Result, SkillError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// US CPI-U annual averages (1982-84 = 100), one row per year.
const EMBEDDED_CPI_U: &str = include_str!("../../data/cpi_u.csv");

#[derive(Debug, Deserialize)]
struct IndexRow {
    year: i32,
    index: f64,
}

/// Immutable year -> index lookup.
///
/// Years are contiguous and every index is a positive finite number; the
/// constructors refuse anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct CpiIndexTable {
    entries: BTreeMap<i32, f64>,
}

impl CpiIndexTable {
    /// Builds a table from `(year, index)` pairs given in ascending year order.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i32, f64)>,
    {
        let mut table = BTreeMap::new();
        let mut previous: Option<i32> = None;

        for (year, index) in entries {
            if !index.is_finite() || index <= 0.0 {
                return Err(SkillError::InvalidIndexTable {
                    message: format!("index for {} must be a positive number, got {}", year, index),
                });
            }

            if let Some(prev) = previous {
                if year != prev + 1 {
                    return Err(SkillError::InvalidIndexTable {
                        message: format!("expected year {} after {}, got {}", prev + 1, prev, year),
                    });
                }
            }

            table.insert(year, index);
            previous = Some(year);
        }

        if table.is_empty() {
            return Err(SkillError::InvalidIndexTable {
                message: "table has no rows".to_string(),
            });
        }

        Ok(Self { entries: table })
    }

    /// Parses CSV with a `year,index` header.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for row in csv_reader.deserialize::<IndexRow>() {
            let row = row?;
            rows.push((row.year, row.index));
        }

        Self::from_entries(rows)
    }

    pub fn from_csv_str(content: &str) -> Result<Self> {
        Self::from_reader(content.as_bytes())
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    /// The dataset compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_csv_str(EMBEDDED_CPI_U)
    }

    pub fn get(&self, year: i32) -> Option<f64> {
        self.entries.get(&year).copied()
    }

    pub fn contains(&self, year: i32) -> bool {
        self.entries.contains_key(&year)
    }

    pub fn first_year(&self) -> i32 {
        self.entries.keys().next().copied().unwrap_or_default()
    }

    pub fn last_year(&self) -> i32 {
        self.entries.keys().next_back().copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_is_contiguous_from_1913() {
        let table = CpiIndexTable::embedded().unwrap();
        assert_eq!(table.first_year(), 1913);
        assert_eq!(table.len() as i32, table.last_year() - table.first_year() + 1);
        assert_eq!(table.get(1970), Some(38.8));
        assert_eq!(table.get(2020), Some(258.8));
    }

    #[test]
    fn parses_csv_with_whitespace() {
        let table = CpiIndexTable::from_csv_str("year, index\n1913, 9.9\n1914 ,10.0\n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1914), Some(10.0));
        assert_eq!(table.get(1915), None);
    }

    #[test]
    fn rejects_gaps_and_duplicates() {
        let gap = CpiIndexTable::from_entries([(1913, 9.9), (1915, 10.1)]);
        assert!(matches!(gap, Err(SkillError::InvalidIndexTable { .. })));

        let duplicate = CpiIndexTable::from_entries([(1913, 9.9), (1913, 10.0)]);
        assert!(matches!(duplicate, Err(SkillError::InvalidIndexTable { .. })));
    }

    #[test]
    fn rejects_non_positive_and_non_finite_values() {
        assert!(CpiIndexTable::from_entries([(1913, 0.0)]).is_err());
        assert!(CpiIndexTable::from_entries([(1913, -1.0)]).is_err());
        assert!(CpiIndexTable::from_entries([(1913, f64::NAN)]).is_err());
    }

    #[test]
    fn rejects_empty_and_malformed_csv() {
        assert!(matches!(
            CpiIndexTable::from_csv_str("year,index\n"),
            Err(SkillError::InvalidIndexTable { .. })
        ));
        assert!(matches!(
            CpiIndexTable::from_csv_str("year,index\n1913,lots\n"),
            Err(SkillError::CsvError(_))
        ));
    }
}
