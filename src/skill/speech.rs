//! Spoken phrases returned to the voice platform.

use crate::core::inflation::{round_to_cents, MIN_YEAR};

/// Speaks a dollar amount, e.g. `12.5` -> "12 dollars and 50 cents".
///
/// The value is rounded to cents the same way conversions are, rendered
/// with two decimals and split on the decimal point; a zero cent part is
/// not spoken.
pub fn format_money(value: f64) -> String {
    let rounded = round_to_cents(value);
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let cents: u32 = fraction.parse().unwrap_or(0);

    let sign = if rounded < 0.0 { "minus " } else { "" };
    let mut spoken = format!(
        "{}{} {}",
        sign,
        whole,
        plural(whole == "1", "dollar", "dollars")
    );
    if cents > 0 {
        spoken.push_str(&format!(
            " and {} {}",
            cents,
            plural(cents == 1, "cent", "cents")
        ));
    }
    spoken
}

fn plural(singular: bool, one: &'static str, many: &'static str) -> &'static str {
    if singular {
        one
    } else {
        many
    }
}

pub fn current_to_year(amount: f64, adjusted: f64, year: i32) -> String {
    format!(
        "{} was worth approximately {} in {}.",
        format_money(amount),
        format_money(adjusted),
        year
    )
}

pub fn year_to_year(amount: f64, adjusted: f64, in_year: i32, compare_year: i32) -> String {
    format!(
        "{} in {} was worth approximately {} in {}.",
        format_money(amount),
        in_year,
        format_money(adjusted),
        compare_year
    )
}

pub fn year_to_current(amount: f64, adjusted: f64, year: i32) -> String {
    format!(
        "{} in {} is worth approximately {} today.",
        format_money(amount),
        year,
        format_money(adjusted)
    )
}

pub fn need_valid_year(current_year: i32) -> String {
    format!(
        "Sorry, but I only have information for the years {} to {}.",
        MIN_YEAR, current_year
    )
}

pub fn need_valid_value() -> String {
    "Sorry, but I didn't understand the amount to calculate.".to_string()
}

pub fn data_unavailable(year: i32) -> String {
    format!(
        "Sorry, I don't have price data for {} yet. Please try an earlier year.",
        year
    )
}

pub fn welcome() -> String {
    "Welcome to Inflation Calculator. Ask me what an amount of money from one year is worth in another."
        .to_string()
}

pub fn help(current_year: i32) -> String {
    format!(
        "You can say things like: what is 100 dollars from 1970 worth today, or how much was 50 dollars in 1990 worth in 2000. I know prices from {} to {}.",
        MIN_YEAR, current_year
    )
}

pub fn goodbye() -> String {
    "Goodbye.".to_string()
}

pub fn unknown_intent() -> String {
    "Sorry, I didn't catch that. Try asking what an amount from one year is worth in another."
        .to_string()
}
