//! Formatting utilities for terminal output

use super::palette::{Rgb, WHITE, classify, key_color};
use crate::core::{GuessRecord, LetterSets, Verdict, WORD_LENGTH};
use crate::game::Key;
use colored::{ColoredString, Colorize};

fn paint(text: &str, fill: Option<Rgb>, fg: Rgb) -> ColoredString {
    let text = text.truecolor(fg.0, fg.1, fg.2).bold();
    match fill {
        Some(Rgb(r, g, b)) => text.on_truecolor(r, g, b),
        None => text,
    }
}

/// A single board cell, e.g. ` H ` on green
#[must_use]
pub fn tile(letter: Option<char>, verdict: Verdict) -> ColoredString {
    let tint = classify(verdict);
    let text = format!(" {} ", letter.map_or('_', |c| c.to_ascii_uppercase()));
    paint(&text, tint.background, tint.foreground)
}

/// One board row as colored tiles
#[must_use]
pub fn record_line(record: &GuessRecord) -> String {
    (0..WORD_LENGTH)
        .map(|i| tile(record.letter_at(i), record.verdicts()[i]).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One keyboard key, colored by the best verdict its letter has earned
#[must_use]
pub fn key_cap(key: Key, sets: &LetterSets) -> ColoredString {
    let fill = match key {
        Key::Letter(c) => key_color(sets.verdict_for(c)),
        Key::Enter | Key::Delete => key_color(Verdict::NotGuessed),
    };
    paint(&format!(" {} ", key.label()), Some(fill), WHITE)
}

/// Plain-text row of verdict letters: `G` correct, `Y` misplaced, `-` absent
#[must_use]
pub fn verdict_letters(record: &GuessRecord) -> String {
    record
        .verdicts()
        .iter()
        .map(|v| match v {
            Verdict::Correct => 'G',
            Verdict::Misplaced => 'Y',
            Verdict::Absent => '-',
            Verdict::NotGuessed => '.',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn rodeo_row() -> GuessRecord {
        GuessRecord::scored(&Word::new("rodeo").unwrap(), &Word::new("hodor").unwrap())
    }

    #[test]
    fn tile_shows_uppercase_letter() {
        assert!(tile(Some('h'), Verdict::Correct).to_string().contains(" H "));
        assert!(tile(None, Verdict::NotGuessed).to_string().contains(" _ "));
    }

    #[test]
    fn record_line_has_every_letter() {
        let line = record_line(&rodeo_row());
        for letter in ["R", "O", "D", "E"] {
            assert!(line.contains(letter), "{letter} missing from {line}");
        }
    }

    #[test]
    fn verdict_letters_for_scored_and_empty_rows() {
        assert_eq!(verdict_letters(&rodeo_row()), "YGG-Y");
        assert_eq!(verdict_letters(&GuessRecord::empty()), ".....");
    }

    #[test]
    fn key_caps_use_labels() {
        let sets = LetterSets::default();
        assert!(key_cap(Key::Enter, &sets).to_string().contains("ENTER"));
        assert!(key_cap(Key::Letter('q'), &sets).to_string().contains(" Q "));
    }
}
