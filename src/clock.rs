//! Clock-of-day arithmetic for the tracked window.
//!
//! All times are milliseconds since local midnight. Nothing here rolls over
//! at the end of the day; a window always sits inside one calendar day.

use std::fmt;

use chrono::{Local, Timelike};

use crate::error::{Error, Result};

pub const MS_IN_SECOND: u32 = 1_000;
pub const MS_IN_MINUTE: u32 = MS_IN_SECOND * 60;
pub const MS_IN_HOUR: u32 = MS_IN_MINUTE * 60;
pub const MS_IN_DAY: u32 = MS_IN_HOUR * 24;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// Callers are expected to pass an in-range clock reading
    /// (`hour < 24`, `minute < 60`, `second < 60`).
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> TimeOfDay {
        debug_assert!(hour < 24 && minute < 60 && second < 60);
        TimeOfDay(hour * MS_IN_HOUR + minute * MS_IN_MINUTE + second * MS_IN_SECOND)
    }

    /// Local wall clock, truncated to whole seconds.
    pub fn now() -> TimeOfDay {
        let now = Local::now();
        TimeOfDay::from_hms(now.hour(), now.minute(), now.second())
    }

    pub fn millis(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let hours = self.0 / MS_IN_HOUR;
        let minutes = self.0 % MS_IN_HOUR / MS_IN_MINUTE;
        let seconds = self.0 % MS_IN_MINUTE / MS_IN_SECOND;
        if seconds == 0 {
            write!(f, "{:02}:{:02}", hours, minutes)
        } else {
            write!(f, "{:02}:{:02}:{:02}", hours, minutes, seconds)
        }
    }
}

/// Proportion of `start..end` that has passed at `now`, clamped to
/// `[0.0, 1.0]`. A window with no length counts as already complete.
pub fn fraction_elapsed(now: TimeOfDay, start: TimeOfDay, end: TimeOfDay) -> f64 {
    if end <= start {
        return 1.0;
    }
    let elapsed = f64::from(now.0) - f64::from(start.0);
    let span = f64::from(end.0 - start.0);
    (elapsed / span).max(0.0).min(1.0)
}

/// Milliseconds left until `end`, clamped to `[0, end - start]`.
pub fn remaining(now: TimeOfDay, start: TimeOfDay, end: TimeOfDay) -> u32 {
    if end <= start {
        return 0;
    }
    let left = i64::from(end.0) - i64::from(now.0);
    let span = i64::from(end.0 - start.0);
    left.max(0).min(span) as u32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl Window {
    /// Windows crossing midnight are not supported.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Window> {
        if end < start {
            return Err(Error::InvertedWindow { start, end });
        }
        Ok(Window { start, end })
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn span(&self) -> u32 {
        self.end.0 - self.start.0
    }

    pub fn fraction_elapsed(&self, now: TimeOfDay) -> f64 {
        fraction_elapsed(now, self.start, self.end)
    }

    pub fn remaining(&self, now: TimeOfDay) -> u32 {
        remaining(now, self.start, self.end)
    }
}
