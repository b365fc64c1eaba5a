//! Growth-rate string parsing.
//!
//! Profiles store follower growth as display strings such as `"+12.5%"`.
//! Dashboard stats need the numeric value back, so parsing lives here where
//! both the API and the CLI can reach it.

/// Parse a formatted percentage string (`"+12.5%"`, `"-3%"`, `"7"`).
///
/// Strips surrounding whitespace, one trailing `%` and one leading `+`.
/// Returns `None` for anything that is not a finite number afterwards;
/// unparseable values are excluded from aggregates rather than treated
/// as zero.
#[must_use]
pub fn parse_percent(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed);
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    trimmed.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format the arithmetic mean of parsed growth values as a percentage
/// string with two decimal places, or `"0%"` when no values parsed.
#[must_use]
pub fn average_growth(values: &[f64]) -> String {
    if values.is_empty() {
        return "0%".to_owned();
    }

    #[allow(clippy::cast_precision_loss)] // Profile counts stay far below f64 precision
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    format!("{mean:.2}%")
}
