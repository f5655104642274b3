// src/duration.rs
//
// Time-entry helpers: "1h 30m" ⇄ minutes, and splitting a long entry into
// chunks no larger than a daily maximum.

use regex::Regex;
use std::sync::LazyLock;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeParseError {
    #[error("empty time string")]
    Empty,
    #[error("invalid time string: {0:?}")]
    Invalid(String),
}

static HOURS_MINUTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)(?:(\d+(?:\.\d+)?)\s*h)?\s*(?:(\d+)\s*m)?$").unwrap()
});

/// `90 → "1h 30m"`, `120 → "2h"`, `59 → "59m"`.
pub fn format_time_display(minutes: u32) -> String {
    let (h, m) = (minutes / 60, minutes % 60);
    match (h, m) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// Parse `"1h 30m"`, `"1h30m"`, `"2h"`, `"45m"`, `"1.5h"` or a bare number of
/// minutes.
pub fn parse_time_string(input: &str) -> Result<u32, TimeParseError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(TimeParseError::Empty);
    }
    if let Ok(minutes) = s.parse::<u32>() {
        return Ok(minutes);
    }

    let invalid = || TimeParseError::Invalid(input.to_string());
    let caps = HOURS_MINUTES.captures(s).ok_or_else(invalid)?;
    let (hours, minutes) = (caps.get(1), caps.get(2));
    if hours.is_none() && minutes.is_none() {
        return Err(invalid());
    }

    let mut total: f64 = 0.0;
    if let Some(h) = hours {
        total += h.as_str().parse::<f64>().map_err(|_| invalid())? * 60.0;
    }
    if let Some(m) = minutes {
        total += m.as_str().parse::<f64>().map_err(|_| invalid())?;
    }
    let total = total.round();
    if total > f64::from(u32::MAX) {
        return Err(invalid());
    }
    Ok(total as u32)
}

/// Split `total` minutes into chunks of at most `max_chunk`, remainder last.
pub fn split_minutes(total: u32, max_chunk: u32) -> Vec<u32> {
    if total == 0 {
        return Vec::new();
    }
    if max_chunk == 0 {
        return vec![total];
    }
    let mut chunks = vec![max_chunk; (total / max_chunk) as usize];
    if total % max_chunk != 0 {
        chunks.push(total % max_chunk);
    }
    chunks
}
