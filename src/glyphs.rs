//! Big-digit patterns for the countdown clock.
//!
//! Every glyph is `GLYPH_HEIGHT` rows of exactly `GLYPH_WIDTH` columns.

pub const GLYPH_HEIGHT: usize = 4;
pub const GLYPH_WIDTH: usize = 5;

pub type Glyph = [&'static str; GLYPH_HEIGHT];

static DIGITS: [Glyph; 10] = [
    ["  _  ", " / \\ ", "|   |", " \\_/ "],
    ["     ", " /|  ", "  |  ", " _|_ "],
    [" ___ ", "'   |", "  /  ", "/____"],
    [" ____", "  __/", "    \\", " ___/"],
    ["  _  ", " / | ", "/__|_", "   | "],
    ["_____", "|___ ", "    \\", " ___/"],
    ["  __ ", " /__ ", "|   \\", " \\__/"],
    ["_____", "    |", "   / ", "  /  "],
    [" ___ ", "/   \\", ">---<", "\\___/"],
    [" ___ ", "/   \\", "`-- /", "   / "],
];

static COLON: Glyph = ["     ", "  O  ", "     ", "  O  "];

static BLANK: Glyph = ["     ", "     ", "     ", "     "];

/// Looks up the pattern for `c`. Anything outside `0-9`, `:` and space
/// draws as blank.
pub fn glyph(c: char) -> &'static Glyph {
    match c {
        '0'..='9' => &DIGITS[c as usize - '0' as usize],
        ':' => &COLON,
        _ => &BLANK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_row_is_glyph_width() {
        for c in "0123456789: ".chars() {
            for row in glyph(c).iter() {
                assert_eq!(row.chars().count(), GLYPH_WIDTH, "glyph {:?}", c);
            }
        }
    }

    #[test]
    fn digits_are_distinct() {
        for a in 0..10 {
            for b in (a + 1)..10 {
                assert_ne!(DIGITS[a], DIGITS[b], "{} and {}", a, b);
            }
        }
    }

    #[test]
    fn three_keeps_its_curve_within_width() {
        assert_eq!(glyph('3')[2], "    \\");
    }

    #[test]
    fn space_is_blank() {
        assert_eq!(glyph(' '), &BLANK);
    }

    #[test]
    fn unknown_characters_fall_back_to_blank() {
        for c in "aZ-.!é\n\u{1F600}".chars() {
            assert_eq!(glyph(c), &BLANK);
        }
    }

    #[test]
    fn colon_is_not_blank() {
        assert_ne!(glyph(':'), &BLANK);
    }
}
