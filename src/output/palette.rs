//! Display colors for verdicts
//!
//! Both front ends color cells and keys through these two pure functions, so
//! the mapping from verdict to color lives in one place.

use crate::core::Verdict;

/// A 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const WHITE: Rgb = Rgb(215, 218, 220);
pub const YELLOW: Rgb = Rgb(181, 159, 59);
pub const GREEN: Rgb = Rgb(83, 141, 78);
pub const DARK_GREY: Rgb = Rgb(58, 58, 60);
pub const LIGHT_GREY: Rgb = Rgb(129, 131, 132);
pub const BLACK: Rgb = Rgb(0, 0, 0);

/// How a board cell is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint {
    /// Fill; `None` leaves the cell transparent
    pub background: Option<Rgb>,
    pub border: Rgb,
    pub foreground: Rgb,
}

/// Display attributes of a board cell with the given verdict
///
/// # Examples
/// ```
/// use hordle::core::Verdict;
/// use hordle::output::palette::{classify, GREEN};
///
/// assert_eq!(classify(Verdict::Correct).background, Some(GREEN));
/// assert_eq!(classify(Verdict::NotGuessed).background, None);
/// ```
#[must_use]
pub const fn classify(verdict: Verdict) -> Tint {
    let fill = match verdict {
        Verdict::Correct => GREEN,
        Verdict::Misplaced => YELLOW,
        Verdict::Absent | Verdict::NotGuessed => DARK_GREY,
    };

    Tint {
        background: if verdict.is_scored() { Some(fill) } else { None },
        border: fill,
        foreground: WHITE,
    }
}

/// Fill color of a keyboard key whose letter has the given verdict
#[must_use]
pub const fn key_color(verdict: Verdict) -> Rgb {
    match verdict {
        Verdict::Correct => GREEN,
        Verdict::Misplaced => YELLOW,
        Verdict::Absent => DARK_GREY,
        Verdict::NotGuessed => LIGHT_GREY,
    }
}
