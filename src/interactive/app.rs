//! TUI application state and logic

use super::layout::{ScreenLayout, Target};
use crate::config::GameConfig;
use crate::game::{
    Key, KeyEffect, Session, Statistics, SubmitOutcome, cell_clicked, handle_key,
};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use tracing::debug;

/// Messages kept in the log
const MESSAGE_LIMIT: usize = 5;

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Recent messages, oldest first
#[derive(Debug, Default, Clone)]
pub struct MessageLog {
    entries: Vec<Message>,
}

impl MessageLog {
    pub fn add(&mut self, text: &str, style: MessageStyle) {
        self.entries.push(Message {
            text: text.to_string(),
            style,
        });

        if self.entries.len() > MESSAGE_LIMIT {
            self.entries.remove(0);
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[Message] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub config: GameConfig,
    pub session: Session,
    pub messages: MessageLog,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot produce a session.
    pub fn new(config: GameConfig, dictionary: &'a Dictionary) -> Result<Self> {
        let session = config.new_session(dictionary, &mut rand::rng())?;

        let mut messages = MessageLog::default();
        messages.add(
            "Welcome to HORDLE! Guess the five-letter word.",
            MessageStyle::Info,
        );
        messages.add(
            "Type letters, Enter to submit, Backspace to delete.",
            MessageStyle::Info,
        );

        Ok(Self {
            dictionary,
            config,
            session,
            messages,
            stats: Statistics::default(),
            should_quit: false,
        })
    }

    /// Apply a key of the game keyboard
    pub fn press(&mut self, key: Key) -> KeyEffect {
        let mut notices: Vec<String> = Vec::new();
        let effect = handle_key(&mut self.session, self.dictionary, key, &mut notices);

        let style = match effect {
            KeyEffect::Submitted(SubmitOutcome::Won(_)) => MessageStyle::Success,
            _ => MessageStyle::Error,
        };
        for notice in &notices {
            self.messages.add(notice, style);
        }

        if let KeyEffect::Submitted(SubmitOutcome::Won(_) | SubmitOutcome::Lost(_)) = effect {
            self.stats.record(&self.session);
            let summary = self.session.share_summary().replace('\n', " ");
            self.messages.add(&summary, MessageStyle::Info);
            self.messages
                .add("Press Ctrl-N for a new game or Esc to quit.", MessageStyle::Info);
        }

        effect
    }

    /// Handle a click on a board cell or a keyboard key
    pub fn click(&mut self, target: Target) {
        match target {
            Target::Key(key) => {
                self.press(key);
            }
            Target::Cell { row, letter } => match cell_clicked(&mut self.session, row, letter) {
                Ok(verdict) => debug!(row, letter, ?verdict, "cell clicked"),
                Err(e) => debug!("ignored click: {e}"),
            },
        }
    }

    /// Abandon the current game and start another
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot produce a session.
    pub fn new_game(&mut self) -> Result<()> {
        self.stats.record_abandoned(&self.session);

        self.session = self.config.new_session(self.dictionary, &mut rand::rng())?;
        self.messages.clear();
        self.messages.add("New game started!", MessageStyle::Info);
        Ok(())
    }

    /// Handle a keyboard event from the terminal
    ///
    /// # Errors
    ///
    /// Returns an error if starting a new game fails.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game()?,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) if c.is_ascii_alphabetic() && !ctrl => {
                self.press(Key::Letter(c.to_ascii_lowercase()));
            }
            KeyCode::Backspace | KeyCode::Delete => {
                self.press(Key::Delete);
            }
            KeyCode::Enter => {
                self.press(Key::Enter);
            }
            _ => {}
        }

        Ok(())
    }

    /// Handle a mouse event, given the area the last frame was drawn in
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let layout = ScreenLayout::compute(area, self.session.capacity());
        if let Some(target) = layout.hit(mouse.column, mouse.row) {
            self.click(target);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let area = terminal.draw(|f| super::rendering::ui(f, &app))?.area;

        match event::read()? {
            Event::Key(key) => app.handle_key_event(key)?,
            Event::Mouse(mouse) => app.handle_mouse_event(mouse, area),
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
