use serde::{Deserialize, Serialize};

/// Caller input as it arrives from speech slots or the command line.
///
/// `None` means the value was missing or did not parse as a plain decimal
/// number. Nothing here is validated yet.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConversionInput {
    pub source_year: Option<f64>,
    pub target_year: Option<f64>,
    pub amount: Option<f64>,
}

impl ConversionInput {
    pub fn new(source_year: f64, target_year: f64, amount: f64) -> Self {
        Self {
            source_year: Some(source_year),
            target_year: Some(target_year),
            amount: Some(amount),
        }
    }

    pub fn from_text(
        source_year: Option<&str>,
        target_year: Option<&str>,
        amount: Option<&str>,
    ) -> Self {
        Self {
            source_year: source_year.and_then(parse_number),
            target_year: target_year.and_then(parse_number),
            amount: amount.and_then(parse_number),
        }
    }
}

/// Parses slot text as a plain decimal number.
///
/// No partial parses: "12abc" is `None`. Text such as "NaN" or "inf" does
/// parse and is rejected later by validation.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// A request whose years and amount passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub source_year: i32,
    pub target_year: i32,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub request: ConversionRequest,
    /// index[source] / index[target]
    pub ratio: f64,
    /// Amount in target-year purchasing power, rounded to cents.
    pub adjusted: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_decimals() {
        assert_eq!(parse_number("12.5"), Some(12.5));
        assert_eq!(parse_number(" 1970 "), Some(1970.0));
        assert_eq!(parse_number("-3"), Some(-3.0));
    }

    #[test]
    fn rejects_text_and_partial_numbers() {
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("12abc"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
    }

    #[test]
    fn from_text_keeps_missing_slots_as_none() {
        let input = ConversionInput::from_text(Some("1970"), None, Some("ten"));
        assert_eq!(input.source_year, Some(1970.0));
        assert_eq!(input.target_year, None);
        assert_eq!(input.amount, None);
    }
}
