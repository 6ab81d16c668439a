//! TUI (Terminal User Interface) module for gordle
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Architecture
//! - `Board`: everything shown on screen, plus key handling. Holds no terminal,
//!   so it can be driven and rendered in tests.
//! - `TuiInterface`: owns the terminal and implements `GameInterface` on top of a `Board`.
//!
//! # State Machine
//! - `EnteringGuess` → (round won or lost) → `RoundOver` → (N) → `EnteringGuess`
//! - ESC exits from either state; Q also exits once the round is over.

use crate::error::GameError;
use crate::feedback::{Feedback, FullFeedback};
use crate::game::Game;
use crate::game_state::{GameInterface, RoundInfo, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LetterState {
    Empty,
    Entered,
    Correct,
    Present,
    Absent,
}

impl LetterState {
    fn colors(self) -> (Color, Color) {
        match self {
            Self::Empty | Self::Entered => (Color::DarkGray, Color::White),
            Self::Correct => (Color::Green, Color::Black),
            Self::Present => (Color::Yellow, Color::Black),
            Self::Absent => (Color::Gray, Color::White),
        }
    }
}

impl From<Feedback> for LetterState {
    fn from(feedback: Feedback) -> Self {
        match feedback {
            Feedback::Correct => Self::Correct,
            Feedback::Present => Self::Present,
            Feedback::Absent => Self::Absent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct GuessRow {
    cells: Vec<(char, LetterState)>,
}

impl GuessRow {
    fn scored(guess: &str, feedback: &FullFeedback) -> Self {
        Self {
            cells: guess
                .chars()
                .zip(feedback)
                .map(|(letter, &f)| (letter, f.into()))
                .collect(),
        }
    }

    /// The row being typed, padded to the word length.
    fn pending(input: &str, word_length: usize) -> Self {
        let mut cells: Vec<(char, LetterState)> =
            input.chars().map(|c| (c, LetterState::Entered)).collect();
        cells.resize(word_length.max(cells.len()), (' ', LetterState::Empty));
        Self { cells }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringGuess,
    /// Round won or lost - outcome text stored in `Board::message`
    RoundOver,
}

/// Screen contents and input handling, independent of the terminal.
#[derive(Debug)]
struct Board {
    rows: Vec<GuessRow>,
    current_input: String,
    state: TuiState,
    word_length: usize,
    max_attempts: usize,
    revealed: Option<String>,
    message: String,
    error_message: String,
    status: String,
}

impl Board {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            current_input: String::new(),
            state: TuiState::EnteringGuess,
            word_length: 0,
            max_attempts: 0,
            revealed: None,
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        }
    }

    fn start_round(&mut self, info: &RoundInfo) {
        self.rows.clear();
        self.current_input.clear();
        self.error_message.clear();
        self.state = TuiState::EnteringGuess;
        self.word_length = info.word_length;
        self.max_attempts = info.max_attempts;
        self.revealed.clone_from(&info.revealed);
        self.message = format!(
            "Guess the {}-letter word. You have {} attempts.",
            info.word_length, info.max_attempts
        );
        self.status = "Enter your first guess".to_string();
    }

    fn input_len(&self) -> usize {
        self.current_input.chars().count()
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        match self.state {
            TuiState::EnteringGuess => self.handle_guess_input(key),
            TuiState::RoundOver => Self::handle_round_over_input(key),
        }
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        debug_log!(
            "handle_guess_input() - Processing key: {:?}, current_input: '{}'",
            key.code,
            self.current_input
        );

        match key.code {
            KeyCode::Esc => {
                info_log!("handle_guess_input() - ESC pressed, returning Exit");
                return Some(UserAction::Exit);
            }
            KeyCode::Char(_) if Self::has_modifier_keys(&key) => {
                debug_log!(
                    "handle_guess_input() - Ignoring character with modifier: {:?}",
                    key.modifiers
                );
            }
            KeyCode::Char(c) if c.is_alphabetic() => {
                if self.input_len() < self.word_length {
                    self.current_input.extend(c.to_uppercase());
                } else {
                    self.error_message = format!("Guesses have {} letters", self.word_length);
                }
            }
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            KeyCode::Backspace => {
                self.current_input.pop();
            }
            KeyCode::Enter if self.input_len() == self.word_length => {
                let guess = std::mem::take(&mut self.current_input);
                info_log!("handle_guess_input() - Enter pressed with guess: '{}'", guess);
                return Some(UserAction::Guess(guess));
            }
            KeyCode::Enter => {
                self.error_message =
                    format!("Guess must be exactly {} letters!", self.word_length);
            }
            _ => {
                debug_log!("handle_guess_input() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    fn handle_round_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N') => Some(UserAction::NewGame),
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }

    fn record_feedback(&mut self, guess: &str, feedback: &FullFeedback, game: &Game) {
        self.rows.push(GuessRow::scored(guess, feedback));
        self.status = match game.remaining_attempts() {
            1 => "1 attempt left".to_string(),
            n => format!("{n} attempts left"),
        };
    }

    fn show_invalid_guess(&mut self, error: &GameError) {
        self.error_message = match error {
            GameError::LengthMismatch { expected, .. } => {
                format!("Guess must be exactly {expected} letters!")
            }
            GameError::GameOver => "This round is over. Press N for a new word.".to_string(),
        };
    }

    fn finish_round(&mut self, message: String, status: &str) {
        self.state = TuiState::RoundOver;
        self.current_input.clear();
        self.message = message;
        self.status = status.to_string();
    }

    /// Render the complete UI layout.
    fn render(&self, f: &mut Frame) {
        // Title, info panel, status and instructions take 13 lines.
        let board_height = u16::try_from(self.max_attempts)
            .unwrap_or(u16::MAX)
            .saturating_mul(ROW_SPACING)
            .saturating_add(2)
            .min(f.area().height.saturating_sub(13));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Title
                Constraint::Length(board_height), // Game board
                Constraint::Min(4),               // Info panel
                Constraint::Length(3),            // Status line
                Constraint::Length(3),            // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        self.render_board(f, chunks[1]);
        self.render_info(f, chunks[2]);
        Self::render_status(f, chunks[3], &self.status);
        self.render_instructions(f, chunks[4]);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("GORDLE")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(&self, f: &mut Frame, area: Rect) {
        let block = Block::default().title("Guesses").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let pending = (self.state == TuiState::EnteringGuess && self.rows.len() < self.max_attempts)
            .then(|| GuessRow::pending(&self.current_input, self.word_length));
        let empty = GuessRow::pending("", self.word_length);

        let visible_rows = usize::from(inner.height.div_ceil(ROW_SPACING));
        let rows = self
            .rows
            .iter()
            .chain(pending.as_ref())
            .chain(std::iter::repeat(&empty))
            .take(self.max_attempts.min(visible_rows));

        for (index, row) in rows.enumerate() {
            Self::render_row(f, inner, index, row);
        }
    }

    fn render_row(f: &mut Frame, area: Rect, index: usize, row: &GuessRow) {
        let Some(offset) = u16::try_from(index)
            .ok()
            .and_then(|i| i.checked_mul(ROW_SPACING))
            .filter(|&offset| offset < area.height)
        else {
            return;
        };
        let y = area.y.saturating_add(offset);

        let mut spans = vec![Span::raw("  ")];
        for &(letter, state) in &row.cells {
            let (bg_color, fg_color) = state.colors();
            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default().fg(fg_color).bg(bg_color),
            ));
            spans.push(Span::raw(" "));
        }

        f.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
        );
    }

    fn render_info(&self, f: &mut Frame, area: Rect) {
        let mut lines = Vec::new();

        if !self.message.is_empty() {
            let style = match self.state {
                TuiState::RoundOver => SUCCESS_STYLE,
                TuiState::EnteringGuess => MESSAGE_STYLE,
            };
            lines.push(Line::from(vec![Span::styled(self.message.as_str(), style)]));
        }

        if let Some(word) = &self.revealed {
            lines.push(Line::from(vec![Span::styled(
                format!("Cheat: the word is {word}"),
                INFO_STYLE,
            )]));
        }

        if !self.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(
                self.error_message.as_str(),
                ERROR_STYLE,
            )]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(&self, f: &mut Frame, area: Rect) {
        let text = match self.state {
            TuiState::EnteringGuess => "Type your guess | ENTER: Submit | BACKSPACE: Delete | ESC: Quit",
            TuiState::RoundOver => "N: New word | Q/ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}

/// Main TUI interface component.
///
/// Manages terminal setup and teardown, drawing, and reading key events.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    board: Board,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            board: Board::new(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let board = &self.board;
        self.terminal.draw(|f| board.render(f))?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            // Only process Press events, ignore Release and Repeat to avoid double input
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                // Replacement characters show up when alt-tabbing on some terminals
                if let KeyCode::Char(c) = key.code
                    && (c == '\u{FFFD}' || c.is_control())
                {
                    debug_log!("handle_input() - Ignoring invalid character: {:?}", c);
                    return Ok(None);
                }
                Ok(self.board.handle_key(key))
            }
            other => {
                debug_log!("handle_input() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_round_start(&mut self, info: &RoundInfo) {
        info_log!("display_round_start() - {:?}", info);
        self.board.start_round(info);
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_action() - Error handling input: {}, returning Exit", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_feedback(&mut self, guess: &str, feedback: &FullFeedback, game: &Game) {
        self.board.record_feedback(guess, feedback, game);
        self.draw_or_log();
    }

    fn display_invalid_guess(&mut self, error: &GameError, _game: &Game) {
        self.board.show_invalid_guess(error);
        self.draw_or_log();
    }

    fn display_won(&mut self, game: &Game) {
        let guesses = game.attempts() + 1;
        self.board
            .finish_round(format!("🎉 You won in {guesses} guesses!"), "Round won");
        self.draw_or_log();
    }

    fn display_lost(&mut self, game: &Game) {
        self.board.finish_round(
            format!("😔 You lost, the correct word was {}", game.secret()),
            "Round lost",
        );
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.board.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
