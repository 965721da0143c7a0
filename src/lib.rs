//! HORDLE
//!
//! A five-letter word guessing game with a terminal UI and a line-based mode.
//!
//! # Quick Start
//!
//! ```rust
//! use hordle::core::{Word, score, to_emoji};
//! use hordle::game::{Session, SubmitOutcome};
//! use hordle::wordlists::Dictionary;
//!
//! // Score a single guess
//! let guess = Word::new("rodeo").unwrap();
//! let secret = Word::new("hodor").unwrap();
//! assert_eq!(to_emoji(&score(&guess, &secret)), "🟨🟩🟩⬛🟨");
//!
//! // Play a session
//! let dictionary = Dictionary::embedded();
//! let mut session = Session::with_default_attempts(secret);
//! session.edit_current("hodor");
//! assert!(matches!(session.submit(&dictionary), SubmitOutcome::Won(_)));
//! ```

// Core domain types
pub mod core;

// Game sessions and input handling
pub mod game;

// Word lists
pub mod wordlists;

// Settings shared by every game of a run
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
