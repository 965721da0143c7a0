//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a word and press Enter.

use crate::config::GameConfig;
use crate::core::Word;
use crate::game::{
    Key, KeyEffect, Notifier, Session, Statistics, SubmitOutcome, cell_clicked, handle_key,
};
use crate::output::{print_board, print_keyboard, print_statistics};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Prints notifications as highlighted lines
struct PrintNotifier;

impl Notifier for PrintNotifier {
    fn notify(&mut self, message: &str) {
        println!("\n  {}\n", message.bright_yellow().bold());
    }
}

/// A line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    NewGame,
    Stats,
    Share,
    Toggle { row: usize, letter: usize },
    Guess(String),
    Help,
}

fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim();
    let Some(rest) = input.strip_prefix(':') else {
        return Some(Command::Guess(input.to_string()));
    };

    let mut parts = rest.split_whitespace();
    match parts.next()? {
        "q" | "quit" | "exit" => Some(Command::Quit),
        "n" | "new" => Some(Command::NewGame),
        "stats" => Some(Command::Stats),
        "share" => Some(Command::Share),
        "h" | "help" => Some(Command::Help),
        "t" | "toggle" => {
            // Rows and letters are 1-based on the command line
            let row = parts.next()?.parse::<usize>().ok()?.checked_sub(1)?;
            let letter = parts.next()?.parse::<usize>().ok()?.checked_sub(1)?;
            Some(Command::Toggle { row, letter })
        }
        _ => None,
    }
}

fn print_help() {
    println!("Type a five-letter word and press Enter to guess.");
    println!("Commands:");
    println!("  :toggle ROW COL   cycle a cell's color (e.g. ':toggle 1 3')");
    println!("  :new              start a new game");
    println!("  :share            print the emoji grid");
    println!("  :stats            show statistics");
    println!("  :quit             exit\n");
}

/// Type `word` into the current row and submit it
///
/// A line that is not exactly five letters is ignored and leaves the row as
/// it was.
fn submit_word(
    session: &mut Session,
    dictionary: &Dictionary,
    word: &str,
    notifier: &mut PrintNotifier,
) -> KeyEffect {
    let Ok(word) = Word::new(word.trim()) else {
        return KeyEffect::Submitted(SubmitOutcome::Ignored);
    };

    session.edit_current("");
    for c in word.text().chars() {
        handle_key(session, dictionary, Key::Letter(c), notifier);
    }
    handle_key(session, dictionary, Key::Enter, notifier)
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input fails or a new game cannot be started.
pub fn run_simple(config: &GameConfig, dictionary: &Dictionary) -> Result<()> {
    println!("\n╔══════════════════════════════════════════╗");
    println!("║              H O R D L E                 ║");
    println!("╚══════════════════════════════════════════╝\n");
    print_help();

    let mut rng = rand::rng();
    let mut session = config.new_session(dictionary, &mut rng)?;
    let mut stats = Statistics::default();
    let mut notifier = PrintNotifier;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_board(&session);
        print_keyboard(&session.letter_sets());

        print!("{} ", "guess>".bright_cyan());
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read input")?;

        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Help) => print_help(),
            Some(Command::Stats) => print_statistics(&stats),
            Some(Command::Share) => println!("\n{}\n", session.share_summary()),
            Some(Command::NewGame) => {
                stats.record_abandoned(&session);
                session = config.new_session(dictionary, &mut rng)?;
                println!("\n🔄 New game started!");
            }
            Some(Command::Toggle { row, letter }) => {
                if let Err(e) = cell_clicked(&mut session, row, letter) {
                    println!("❌ {e}");
                }
            }
            Some(Command::Guess(word)) => {
                let effect = submit_word(&mut session, dictionary, &word, &mut notifier);
                debug!(?effect, "guess handled");

                if let KeyEffect::Submitted(SubmitOutcome::Won(_) | SubmitOutcome::Lost(_)) =
                    effect
                {
                    stats.record(&session);
                    print_board(&session);
                    println!("{}\n", session.share_summary());
                    println!("Type ':new' for another game or ':quit' to exit.");
                }
            }
            None => println!("❌ Unknown command. Type ':help' for help."),
        }
    }

    print_statistics(&stats);
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}
