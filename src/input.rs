//! Parsing of the operator's raw form input.

use crate::error::{DrawError, DrawResult};

/// Split the prize textarea into names: one per non-blank line, trimmed
pub fn parse_prize_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse the people-count field. Empty input counts as zero.
pub fn parse_people_count(text: &str) -> DrawResult<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    let count: i64 = trimmed
        .parse()
        .map_err(|_| DrawError::Validation(format!("'{}' is not a whole number", trimmed)))?;
    if count < 0 {
        return Err(DrawError::Validation(format!(
            "Number of people cannot be negative ({})",
            count
        )));
    }
    Ok(count)
}
