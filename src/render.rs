//! Layout for the progress bar and the big-digit countdown.
//!
//! Every function here is a pure mapping from the current frame size and
//! the values to show onto a list of positioned writes. Layout is redone on
//! every call so a resized terminal is picked up on the next tick; anything
//! that does not fit is dropped rather than wrapped.

use std::fmt;

use termion::cursor;

use crate::clock::{MS_IN_HOUR, MS_IN_MINUTE, MS_IN_SECOND};
use crate::glyphs::{glyph, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Rows the progress bar occupies when the terminal is tall enough.
pub const BAR_HEIGHT: usize = 5;
pub const BAR_FILL: char = '#';
pub const BAR_TRACK: char = '.';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    pub height: usize,
    pub width: usize,
}

impl Frame {
    /// From termion's `(columns, rows)` ordering.
    pub fn from_size((cols, rows): (u16, u16)) -> Frame {
        Frame {
            height: usize::from(rows),
            width: usize::from(cols),
        }
    }
}

/// Text placed at a zero-based screen position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Write {
    pub row: usize,
    pub col: usize,
    pub text: String,
}

impl fmt::Display for Write {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}",
            cursor::Goto(self.col as u16 + 1, self.row as u16 + 1),
            self.text
        )
    }
}

pub fn bar_line(width: usize, fraction: f64) -> String {
    let fraction = if fraction.is_nan() { 0.0 } else { fraction.max(0.0).min(1.0) };
    let filled = (width as f64 * fraction).round() as usize;
    let mut line = String::with_capacity(width);
    line.extend((0..filled).map(|_| BAR_FILL));
    line.extend((filled..width).map(|_| BAR_TRACK));
    line
}

/// Draws the bar one column in from each side, starting on row 1.
pub fn render_bar(frame: Frame, fraction: f64) -> Vec<Write> {
    let width = frame.width.saturating_sub(2);
    if width == 0 {
        return vec![];
    }
    let line = bar_line(width, fraction);
    let rows = frame.height.saturating_sub(2).min(BAR_HEIGHT);
    (0..rows)
        .map(|offset| Write {
            row: 1 + offset,
            col: 1,
            text: line.clone(),
        })
        .collect()
}

/// Lays `text` out in big glyphs with the top-left corner at `(row, col)`.
/// `col` may be negative when the text is wider than the frame. Glyph rows
/// that would not fit entirely inside the frame are skipped.
pub fn render_big_text(frame: Frame, row: usize, col: isize, text: &str) -> Vec<Write> {
    let mut writes = vec![];
    for glyph_row in 0..GLYPH_HEIGHT {
        let r = row + glyph_row;
        if r >= frame.height {
            break;
        }
        for (i, c) in text.chars().enumerate() {
            let c_col = col + (i * GLYPH_WIDTH) as isize;
            if c_col < 0 || c_col as usize + GLYPH_WIDTH >= frame.width {
                continue;
            }
            writes.push(Write {
                row: r,
                col: c_col as usize,
                text: glyph(c)[glyph_row].to_owned(),
            });
        }
    }
    writes
}

/// `HH:MM:SS`, dropping any leftover milliseconds.
pub fn format_countdown(millis: u32) -> String {
    let hours = millis / MS_IN_HOUR;
    let minutes = millis % MS_IN_HOUR / MS_IN_MINUTE;
    let seconds = millis % MS_IN_MINUTE / MS_IN_SECOND;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Centres the countdown horizontally, directly below the bar.
pub fn render_countdown(frame: Frame, remaining: u32) -> Vec<Write> {
    let text = format_countdown(remaining);
    let col = (frame.width / 2) as isize - (text.chars().count() * GLYPH_WIDTH / 2) as isize;
    render_big_text(frame, 1 + BAR_HEIGHT, col, &text)
}

/// Empty bar and a zeroed clock, shown before the first sample.
pub fn render_initial(frame: Frame) -> Vec<Write> {
    let mut writes = render_bar(frame, 0.0);
    writes.extend(render_countdown(frame, 0));
    writes
}
