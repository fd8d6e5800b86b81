//! Display helpers consumed by the rendering layer.
//!
//! All functions are total: bad input degrades to a visible string, never an error.

use crate::LooseNumber;
use crate::series::util::parse_date;

/// Glyph rendered for a missing value.
pub const PLACEHOLDER: &str = "—";

/// Default `chrono` pattern for displayed dates, e.g. `Mar 1, 2024`.
pub const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y";

/// Format a record date for display using [`DEFAULT_DATE_FORMAT`].
///
/// Returns the input unchanged when it cannot be parsed, so bad data stays visible.
#[must_use]
pub fn format_date(input: &str) -> String {
    format_date_with(input, DEFAULT_DATE_FORMAT)
}

/// Format a record date with a custom `chrono` strftime pattern.
#[must_use]
pub fn format_date_with(input: &str, pattern: &str) -> String {
    parse_date(input).map_or_else(
        || input.to_string(),
        |d| d.date_naive().format(pattern).to_string(),
    )
}

/// Format a loosely typed number with thousands grouping and exactly `precision`
/// fraction digits.
///
/// - Missing values and blank text render as [`PLACEHOLDER`].
/// - Numbers and numeric text render grouped, e.g. `1,234.5`.
/// - Anything else renders as-is.
#[must_use]
pub fn format_number(input: &LooseNumber, precision: usize) -> String {
    match input {
        LooseNumber::Missing => PLACEHOLDER.to_string(),
        LooseNumber::Text(s) if s.trim().is_empty() => PLACEHOLDER.to_string(),
        LooseNumber::Number(n) => input
            .finite()
            .map_or_else(|| n.to_string(), |v| group_thousands(v, precision)),
        LooseNumber::Text(s) => input
            .finite()
            .map_or_else(|| s.clone(), |v| group_thousands(v, precision)),
        LooseNumber::Other(v) => v.to_string(),
    }
}

/// Format hours with the given precision; shorthand over [`format_number`].
#[must_use]
pub fn format_hours(hours: f64, precision: usize) -> String {
    format_number(&LooseNumber::Number(hours), precision)
}

/// Format a confidence percentage, keeping unknown distinct from zero.
#[must_use]
pub fn format_percent(percent: Option<i64>) -> String {
    percent.map_or_else(|| PLACEHOLDER.to_string(), |p| format!("{p}%"))
}

/// Round half away from zero at `precision` fraction digits.
///
/// `{:.N}` alone rounds exact ties to even (`2.5` -> `2`).
fn round_half_up(value: f64, precision: usize) -> f64 {
    let scale = 10f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
    let scaled = (value * scale).round();
    if scaled.is_finite() && scale.is_finite() {
        scaled / scale
    } else {
        value
    }
}

fn group_thousands(value: f64, precision: usize) -> String {
    let fixed = format!("{:.*}", precision, round_half_up(value.abs(), precision));
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    // "-0" and "-0.00" are not worth a sign
    if value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}
