//! Display functions for the line-based front ends

use super::formatters::{key_cap, record_line, verdict_letters};
use crate::core::{GuessRecord, LetterSets, to_emoji};
use crate::game::{Session, Statistics, keyboard_rows};
use colored::Colorize;

/// Print every row of the board
pub fn print_board(session: &Session) {
    println!();
    for (i, record) in session.records().iter().enumerate() {
        let marker = if i == session.cursor() && !session.status().is_finished() {
            "›".bright_cyan().bold().to_string()
        } else {
            " ".to_string()
        };
        println!("  {marker} {}", record_line(record));
    }
    println!();
}

/// Print the keyboard colored by letter state
pub fn print_keyboard(sets: &LetterSets) {
    for (indent, row) in keyboard_rows().iter().enumerate() {
        let caps: Vec<String> = row.iter().map(|&k| key_cap(k, sets).to_string()).collect();
        println!("  {}{}", " ".repeat(indent * 2), caps.join(" "));
    }
    println!();
}

/// Print a single scored guess
pub fn print_score_result(record: &GuessRecord) {
    println!(
        "{}  {}  {}",
        record_line(record),
        to_emoji(record.verdicts()),
        verdict_letters(record).bright_black()
    );
}

/// Print the tally of finished games
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Games: {} | Won: {} | Win rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    );

    let widest = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let width = if widest == 0 { 0 } else { count * 20 / widest };
        println!("  {guesses}: {} {count}", "█".repeat(width).green());
    }
    println!("{}", "─".repeat(40).cyan());
}
