//! Game session and input handling
//!
//! [`Session`] holds the board and the rules; [`input`] maps key presses and
//! cell clicks onto it and reports outcomes through a [`Notifier`].

pub mod input;
mod session;
mod stats;

pub use input::{Key, KeyEffect, Notifier, cell_clicked, handle_key, keyboard_rows};
pub use session::{DEFAULT_ATTEMPTS, GameError, GameStatus, Session, SubmitOutcome};
pub use stats::Statistics;
