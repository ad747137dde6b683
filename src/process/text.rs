// src/process/text.rs
use crate::error::{Error, Result};

/// Interval ends in the report are exclusive upper bounds; shifting down
/// by one hundredth turns them into inclusive display bounds.
const BOUNDARY_EPSILON: f64 = 0.01;

/// Remove every occurrence of each pattern from `text`.
///
/// Patterns are plain literal substrings, not regexes; removal order
/// does not matter for the glyphs we strip.
pub fn strip_characters(text: &str, patterns: &[&str]) -> String {
    let mut out = text.to_string();
    for pattern in patterns {
        out = out.replace(pattern, "");
    }
    out
}

/// Clean an interval-end cell (drop spaces and the ">" glyph), parse it
/// as a float and format the inclusive bound with two decimals.
pub fn format_boundary(raw: &str) -> Result<String> {
    let cleaned = strip_characters(raw, &[" ", ">"]);
    let value: f64 = cleaned.parse().map_err(|_| Error::BadBoundary {
        text: raw.to_string(),
    })?;
    Ok(format!("{:.2}", value - BOUNDARY_EPSILON))
}
