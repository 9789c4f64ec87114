//! Cell text parsers.
//!
//! Both parsers are total: malformed input yields `None`, never a panic or an
//! error, so a single bad cell cannot block a whole table.

use std::sync::LazyLock;

use regex::Regex;

static EMBEDDED_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("Invalid embedded year regex"));

/// Thousands separators seen in open-data exports.
const GROUP_SEPARATORS: [char; 3] = [',', '\u{00a0}', '\u{202f}'];

/// Parses a period label into a year.
///
/// Bare integral numbers are taken as-is. Anything else is searched for an
/// embedded `19xx`/`20xx` year, so `"FY 2021"` and `"2021–2022"` both yield
/// 2021.
pub fn parse_period(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(year) = parse_integral(trimmed) {
        return Some(year);
    }
    EMBEDDED_YEAR
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<i32>().ok())
}

fn parse_integral(text: &str) -> Option<i32> {
    let value = text.parse::<f64>().ok().filter(|v| v.is_finite())?;
    if value.fract() != 0.0 || value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return None;
    }
    Some(value as i32)
}

/// Parses a signed magnitude, ignoring thousands separators.
pub fn parse_magnitude(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| !GROUP_SEPARATORS.contains(c)).collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
