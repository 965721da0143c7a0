//! TUI rendering with ratatui
//!
//! Draws the board, the keyboard, the message log and a status line.

use super::app::{App, MessageStyle};
use super::layout::ScreenLayout;
use crate::core::{GuessRecord, LetterSets, Verdict};
use crate::game::{GameStatus, Key};
use crate::output::palette::{self, Rgb, classify, key_color};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let layout = ScreenLayout::compute(f.area(), app.session.capacity());

    render_header(f, layout.header);
    render_board(f, app, &layout);
    render_keyboard(f, &app.session.letter_sets(), &layout);
    render_messages(f, app, layout.messages);
    render_status(f, app, layout.status);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HORDLE")
        .style(
            Style::default()
                .fg(color(palette::WHITE))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(color(palette::DARK_GREY))),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, layout: &ScreenLayout) {
    let active_row = (!app.session.status().is_finished()).then(|| app.session.cursor());

    for (row, (record, cells)) in app.session.records().iter().zip(&layout.cells).enumerate() {
        for (letter, &area) in cells.iter().enumerate() {
            render_cell(f, record, letter, area, active_row == Some(row));
        }
    }
}

fn render_cell(f: &mut Frame, record: &GuessRecord, letter: usize, area: Rect, active: bool) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let verdict = record.verdicts()[letter];
    let tint = classify(verdict);

    let mut style = Style::default()
        .fg(color(tint.foreground))
        .add_modifier(Modifier::BOLD);
    if let Some(fill) = tint.background {
        style = style.bg(color(fill));
    }

    let border = if active && verdict == Verdict::NotGuessed {
        color(palette::LIGHT_GREY)
    } else {
        color(tint.border)
    };

    let text = record
        .letter_at(letter)
        .map(|c| c.to_ascii_uppercase().to_string())
        .unwrap_or_default();

    let cell = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(if active { BorderType::Thick } else { BorderType::Plain })
                .border_style(Style::default().fg(border)),
        );
    f.render_widget(cell, area);
}

fn render_keyboard(f: &mut Frame, sets: &LetterSets, layout: &ScreenLayout) {
    for &(key, area) in &layout.keys {
        if area.width == 0 || area.height == 0 {
            continue;
        }

        let fill = match key {
            Key::Letter(c) => key_color(sets.verdict_for(c)),
            Key::Enter | Key::Delete => key_color(Verdict::NotGuessed),
        };

        let label = match key {
            Key::Enter => "ENTER".to_string(),
            Key::Delete => "DEL".to_string(),
            Key::Letter(_) => key.label(),
        };

        let cap = Paragraph::new(vec![Line::from(""), Line::from(label)])
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .bg(color(fill))
                    .fg(color(palette::WHITE))
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(cap, area);
    }
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .entries()
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list = List::new(messages).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let game = match app.session.status() {
        GameStatus::InProgress => format!(
            "Guess {}/{}",
            app.session.cursor() + 1,
            app.session.capacity()
        ),
        GameStatus::Won => "Solved!".to_string(),
        GameStatus::Lost => "Out of guesses".to_string(),
    };

    let text = format!(
        "{game} | Games: {} | Win Rate: {:.0}% | Ctrl-N: New Game | Esc: Quit | Click a tile to recolor",
        app.stats.total_games,
        app.stats.win_rate()
    );

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
