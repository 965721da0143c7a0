//! Screen geometry
//!
//! Rendering and mouse handling both work from the same [`ScreenLayout`], so a
//! click always lands on the cell or key that was drawn under it.

use crate::core::WORD_LENGTH;
use crate::game::{Key, keyboard_rows};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const KEY_HEIGHT: u16 = 3;
const LETTER_KEY_WIDTH: u16 = 5;
const WIDE_KEY_WIDTH: u16 = 8;
const GAP: u16 = 1;

/// Something a mouse click can hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Cell { row: usize, letter: usize },
    Key(Key),
}

/// Areas of every widget on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub board: Rect,
    pub keyboard: Rect,
    pub messages: Rect,
    pub status: Rect,
    /// `cells[row][letter]`
    pub cells: Vec<[Rect; WORD_LENGTH]>,
    pub keys: Vec<(Key, Rect)>,
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Rect of `width` × `height` centered horizontally at the top of `area`,
/// clipped to it
fn centered_strip(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, height)
}

fn key_width(key: Key) -> u16 {
    match key {
        Key::Letter(_) => LETTER_KEY_WIDTH,
        Key::Enter | Key::Delete => WIDE_KEY_WIDTH,
    }
}

/// Clip `rect` to `bounds`, collapsing it when it falls outside
fn clip(rect: Rect, bounds: Rect) -> Rect {
    rect.intersection(bounds)
}

impl ScreenLayout {
    /// Lay out a screen of `area` for a board with `rows` rows
    #[must_use]
    pub fn compute(area: Rect, rows: usize) -> Self {
        let board_height = CELL_HEIGHT.saturating_mul(u16::try_from(rows).unwrap_or(u16::MAX));
        let keyboard_height = (KEY_HEIGHT + GAP) * 3;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),               // Header
                Constraint::Min(board_height),       // Board
                Constraint::Length(keyboard_height), // Keyboard
                Constraint::Length(5),               // Messages
                Constraint::Length(1),               // Status bar
            ])
            .split(area);

        let (header, board, keyboard, messages, status) =
            (chunks[0], chunks[1], chunks[2], chunks[3], chunks[4]);

        let board_width = CELL_WIDTH * WORD_LENGTH as u16 + GAP * (WORD_LENGTH as u16 - 1);
        let grid = centered_strip(board, board_width, board_height);

        let cells = (0..rows)
            .map(|row| {
                let y = grid.y.saturating_add(CELL_HEIGHT.saturating_mul(row as u16));
                std::array::from_fn(|letter| {
                    let x = grid.x + (CELL_WIDTH + GAP) * letter as u16;
                    clip(Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT), grid)
                })
            })
            .collect();

        let mut keys = Vec::new();
        for (i, row) in keyboard_rows().into_iter().enumerate() {
            let row_width: u16 =
                row.iter().map(|&k| key_width(k)).sum::<u16>() + GAP * (row.len() as u16 - 1);
            let line = Rect::new(
                keyboard.x,
                keyboard.y.saturating_add((KEY_HEIGHT + GAP) * i as u16),
                keyboard.width,
                KEY_HEIGHT,
            );
            let strip = centered_strip(line, row_width, KEY_HEIGHT);

            let mut x = strip.x;
            for key in row {
                let width = key_width(key);
                keys.push((key, clip(Rect::new(x, strip.y, width, KEY_HEIGHT), keyboard)));
                x = x.saturating_add(width + GAP);
            }
        }

        Self {
            header,
            board,
            keyboard,
            messages,
            status,
            cells,
            keys,
        }
    }

    /// What lies under the terminal position (`column`, `row`)
    #[must_use]
    pub fn hit(&self, column: u16, row: u16) -> Option<Target> {
        for (r, cells) in self.cells.iter().enumerate() {
            if let Some(letter) = cells.iter().position(|&c| contains(c, column, row)) {
                return Some(Target::Cell { row: r, letter });
            }
        }

        self.keys
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|&(key, _)| Target::Key(key))
    }
}
