//! Interactive TUI game
//!
//! A ratatui front end: typed keys and mouse clicks on the on-screen keyboard
//! fill the board, and clicking a scored tile cycles its color.

mod app;
mod layout;
mod rendering;

pub use app::{App, Message, MessageLog, MessageStyle, run_tui};
pub use layout::{ScreenLayout, Target};
