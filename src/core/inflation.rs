use crate::core::cpi_table::CpiIndexTable;
use crate::domain::model::{ConversionInput, ConversionRequest, ConversionResult};
use crate::domain::ports::{SystemClock, YearProvider};
use crate::utils::error::{Result, SkillError};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Earliest year of the CPI series.
pub const MIN_YEAR: i32 = 1913;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Years must be whole numbers between {min} and {max}")]
    InvalidYear { min: i32, max: i32 },

    #[error("The amount to convert is not a number")]
    InvalidAmount,

    /// The year passed validation but the dataset has not been extended to it.
    #[error("No CPI index is available for {year}")]
    IndexUnavailable { year: i32 },
}

/// Rescales amounts between years using the ratio of their CPI indices.
///
/// The upper bound of the valid year window is whatever the injected
/// [`YearProvider`] reports, so it moves forward with the calendar.
#[derive(Debug, Clone)]
pub struct InflationAdjuster<C: YearProvider = SystemClock> {
    table: CpiIndexTable,
    clock: C,
}

impl<C: YearProvider> InflationAdjuster<C> {
    pub fn new(table: CpiIndexTable, clock: C) -> Result<Self> {
        if !table.contains(MIN_YEAR) {
            return Err(SkillError::InvalidIndexTable {
                message: format!(
                    "table must start at or before {} (first year is {})",
                    MIN_YEAR,
                    table.first_year()
                ),
            });
        }
        Ok(Self { table, clock })
    }

    pub fn current_year(&self) -> i32 {
        self.clock.current_year()
    }

    pub fn supported_years(&self) -> RangeInclusive<i32> {
        MIN_YEAR..=self.current_year()
    }

    pub fn table(&self) -> &CpiIndexTable {
        &self.table
    }

    pub fn validate_year(&self, year: f64) -> bool {
        is_year_in_window(year, self.current_year())
    }

    pub fn validate_amount(value: f64) -> bool {
        value.is_finite()
    }

    /// Converts `amount` from `source_year` prices to `target_year` prices.
    pub fn convert(
        &self,
        source_year: f64,
        target_year: f64,
        amount: f64,
    ) -> std::result::Result<f64, ConversionError> {
        self.convert_input(&ConversionInput::new(source_year, target_year, amount))
            .map(|result| result.adjusted)
    }

    /// Years are checked before the amount; the first failure is returned.
    pub fn convert_input(
        &self,
        input: &ConversionInput,
    ) -> std::result::Result<ConversionResult, ConversionError> {
        let current_year = self.current_year();

        let (source_year, target_year) = match (input.source_year, input.target_year) {
            (Some(source), Some(target))
                if is_year_in_window(source, current_year)
                    && is_year_in_window(target, current_year) =>
            {
                (source as i32, target as i32)
            }
            _ => {
                tracing::debug!(
                    source_year = ?input.source_year,
                    target_year = ?input.target_year,
                    current_year,
                    "rejecting conversion: year outside supported window"
                );
                return Err(ConversionError::InvalidYear {
                    min: MIN_YEAR,
                    max: current_year,
                });
            }
        };

        let amount = input
            .amount
            .filter(|value| Self::validate_amount(*value))
            .ok_or(ConversionError::InvalidAmount)?;

        self.adjust(ConversionRequest {
            source_year,
            target_year,
            amount,
        })
    }

    fn adjust(
        &self,
        request: ConversionRequest,
    ) -> std::result::Result<ConversionResult, ConversionError> {
        let source_index = self.index_for(request.source_year)?;
        let target_index = self.index_for(request.target_year)?;

        let ratio = source_index / target_index;
        let adjusted = (request.amount * 100.0 / ratio).round() / 100.0;

        tracing::debug!(
            source_year = request.source_year,
            target_year = request.target_year,
            amount = request.amount,
            ratio,
            adjusted,
            "converted amount"
        );

        Ok(ConversionResult {
            request,
            ratio,
            adjusted,
        })
    }

    fn index_for(&self, year: i32) -> std::result::Result<f64, ConversionError> {
        self.table.get(year).ok_or_else(|| {
            tracing::error!(year, last_year = self.table.last_year(), "CPI dataset is stale");
            ConversionError::IndexUnavailable { year }
        })
    }

    /// Years in the valid window that the table cannot answer for.
    pub fn coverage_gap(&self) -> Option<RangeInclusive<i32>> {
        let current_year = self.current_year();
        let last_year = self.table.last_year();
        if last_year >= current_year {
            None
        } else {
            Some(last_year + 1..=current_year)
        }
    }
}

fn is_year_in_window(year: f64, current_year: i32) -> bool {
    year.is_finite()
        && year.fract() == 0.0
        && year >= f64::from(MIN_YEAR)
        && year <= f64::from(current_year)
}

/// Rounds to the nearest cent, halves away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FixedYear;

    fn sample_table() -> CpiIndexTable {
        CpiIndexTable::from_entries((MIN_YEAR..=2020).map(|year| {
            let index = match year {
                1970 => 38.8,
                2020 => 258.8,
                _ => 10.0 + f64::from(year - MIN_YEAR),
            };
            (year, index)
        }))
        .unwrap()
    }

    fn adjuster(current_year: i32) -> InflationAdjuster<FixedYear> {
        InflationAdjuster::new(sample_table(), FixedYear(current_year)).unwrap()
    }

    #[test]
    fn test_year_lower_boundary() {
        let adjuster = adjuster(2020);
        assert!(!adjuster.validate_year(1912.0));
        assert!(adjuster.validate_year(1913.0));
    }

    #[test]
    fn test_year_upper_boundary_follows_clock() {
        let adjuster = adjuster(2020);
        assert!(adjuster.validate_year(2020.0));
        assert!(!adjuster.validate_year(2021.0));
    }

    #[test]
    fn test_fractional_negative_and_nan_years_are_invalid() {
        let adjuster = adjuster(2020);
        assert!(!adjuster.validate_year(1920.5));
        assert!(!adjuster.validate_year(-1970.0));
        assert!(!adjuster.validate_year(f64::NAN));
        assert!(!adjuster.validate_year(f64::INFINITY));
    }

    #[test]
    fn test_validate_amount() {
        type Adjuster = InflationAdjuster<FixedYear>;
        assert!(Adjuster::validate_amount(12.5));
        assert!(Adjuster::validate_amount(0.0));
        assert!(!Adjuster::validate_amount(f64::NAN));
        assert!(!Adjuster::validate_amount(f64::INFINITY));
        assert!(!Adjuster::validate_amount(f64::NEG_INFINITY));
    }

    #[test]
    fn test_convert_1970_to_2020() {
        let adjuster = adjuster(2020);
        let expected = (100.0 * 100.0 / (38.8_f64 / 258.8)).round() / 100.0;
        assert_eq!(adjuster.convert(1970.0, 2020.0, 100.0), Ok(expected));
        assert_eq!(expected, 667.01);
    }

    #[test]
    fn test_convert_2020_to_1970() {
        let adjuster = adjuster(2020);
        assert_eq!(adjuster.convert(2020.0, 1970.0, 667.01), Ok(100.0));
    }

    #[test]
    fn test_same_year_returns_rounded_amount() {
        let adjuster = adjuster(2020);
        assert_eq!(adjuster.convert(1970.0, 1970.0, 12.345), Ok(round_to_cents(12.345)));
        assert_eq!(adjuster.convert(2020.0, 2020.0, 0.1), Ok(0.1));
    }

    #[test]
    fn test_invalid_year_reports_window() {
        let adjuster = adjuster(2020);
        assert_eq!(
            adjuster.convert(1800.0, 2020.0, 100.0),
            Err(ConversionError::InvalidYear {
                min: 1913,
                max: 2020
            })
        );
    }

    #[test]
    fn test_year_error_wins_over_amount_error() {
        let adjuster = adjuster(2020);
        assert!(matches!(
            adjuster.convert(1970.0, 2021.0, f64::NAN),
            Err(ConversionError::InvalidYear { .. })
        ));
        assert_eq!(
            adjuster.convert(1970.0, 2020.0, f64::NAN),
            Err(ConversionError::InvalidAmount)
        );
    }

    #[test]
    fn test_missing_input_values() {
        let adjuster = adjuster(2020);
        let no_amount = ConversionInput::from_text(Some("1970"), Some("2020"), None);
        assert_eq!(
            adjuster.convert_input(&no_amount),
            Err(ConversionError::InvalidAmount)
        );

        let no_year = ConversionInput::from_text(None, Some("2020"), Some("5"));
        assert!(matches!(
            adjuster.convert_input(&no_year),
            Err(ConversionError::InvalidYear { .. })
        ));
    }

    #[test]
    fn test_stale_table_reports_unavailable_index() {
        let adjuster = adjuster(2022);
        assert!(adjuster.validate_year(2022.0));
        assert_eq!(
            adjuster.convert(1970.0, 2022.0, 100.0),
            Err(ConversionError::IndexUnavailable { year: 2022 })
        );
        assert_eq!(adjuster.coverage_gap(), Some(2021..=2022));
    }

    #[test]
    fn test_current_table_has_no_gap() {
        assert_eq!(adjuster(2020).coverage_gap(), None);
        assert_eq!(adjuster(2015).coverage_gap(), None);
    }

    #[test]
    fn test_table_must_reach_min_year() {
        let late = CpiIndexTable::from_entries([(1950, 24.1), (1951, 26.0)]).unwrap();
        assert!(matches!(
            InflationAdjuster::new(late, FixedYear(2020)),
            Err(SkillError::InvalidIndexTable { .. })
        ));
    }

    #[test]
    fn test_round_to_cents_half_away_from_zero() {
        assert_eq!(round_to_cents(0.125), 0.13);
        assert_eq!(round_to_cents(2.5), 2.5);
        assert_eq!(round_to_cents(-0.125), -0.13);
    }
}
