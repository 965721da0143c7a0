//! Terminal output formatting
//!
//! Colors, tiles and printing for the line-based modes. The TUI shares the
//! [`palette`] but draws its own widgets.

pub mod display;
pub mod formatters;
pub mod palette;

pub use display::{print_board, print_keyboard, print_score_result, print_statistics};
