use crate::clock::TimeOfDay;
use crate::error::{Error, Result};

/// Parses a 24-hour `HH:MM` time. One-digit hours and minutes are accepted
/// (`9:00`, `9:5`).
pub fn parse_time(raw_time: &str) -> Result<TimeOfDay> {
    let invalid = || Error::Parse {
        input: raw_time.to_owned(),
    };
    let parts: Vec<_> = raw_time.trim().split(':').collect();
    if parts.len() != 2 {
        return Err(invalid());
    }
    let hours = parse_field(parts[0]).ok_or_else(invalid)?;
    let minutes = parse_field(parts[1]).ok_or_else(invalid)?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    Ok(TimeOfDay::from_hms(hours, minutes, 0))
}

fn parse_field(field: &str) -> Option<u32> {
    match field.len() {
        1 | 2 if field.bytes().all(|b| b.is_ascii_digit()) => field.parse().ok(),
        _ => None,
    }
}
