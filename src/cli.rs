use clap::{Parser, ValueEnum};
use std::fmt;
use std::io::{BufRead, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::debug_log;
use crate::error::GameError;
use crate::feedback::{FullFeedback, Glyphs};
use crate::game::Game;
use crate::game_state::{GameInterface, RoundInfo, Settings, UserAction};
use crate::wordbank::is_valid_word;

/// Guess the hidden word, one line per guess
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Word length
    #[arg(short = 'l', long = "length", default_value = "5")]
    pub word_length: NonZeroUsize,

    /// Newline-delimited dictionary file (defaults to the data directory, then a built-in list)
    #[arg(short = 'f', long = "file")]
    pub dictionary: Option<PathBuf>,

    /// Maximum number of attempts
    #[arg(short = 'm', long = "max-attempts", default_value = "5")]
    pub max_attempts: NonZeroUsize,

    /// Cheat mode (prints the word at the beginning of each round)
    #[arg(short = 'c', long = "cheat")]
    pub cheat: bool,

    /// How feedback is drawn
    #[arg(long, value_enum, default_value_t = GlyphStyle::Emoji)]
    pub glyphs: GlyphStyle,

    /// Seed for word selection, for reproducible rounds
    #[arg(long)]
    pub seed: Option<u64>,

    /// Play in a full-screen terminal UI
    #[arg(long)]
    pub tui: bool,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            word_length: self.word_length.get(),
            max_attempts: self.max_attempts,
            cheat: self.cheat,
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GlyphStyle {
    Emoji,
    Letters,
}

impl GlyphStyle {
    pub fn glyphs(self) -> Glyphs {
        match self {
            GlyphStyle::Emoji => Glyphs::EMOJI,
            GlyphStyle::Letters => Glyphs::LETTERS,
        }
    }
}

// UI Input/Output functions

#[derive(Debug, PartialEq, Eq)]
pub enum GuessInput {
    Valid(String),
    Invalid,
    Exit,
    NewGame,
}

// ':' is not a letter, so commands never collide with guesses.
pub const EXIT_COMMAND: &str = ":exit";
pub const NEXT_COMMAND: &str = ":next";

/// Classifies one line typed by the player. Guesses are uppercased.
pub fn parse_guess(line: &str) -> GuessInput {
    match line.trim() {
        command if command.eq_ignore_ascii_case(EXIT_COMMAND) => GuessInput::Exit,
        command if command.eq_ignore_ascii_case(NEXT_COMMAND) => GuessInput::NewGame,
        word if is_valid_word(word) => GuessInput::Valid(word.to_uppercase()),
        _ => GuessInput::Invalid,
    }
}

/// Line-oriented implementation of [`GameInterface`].
///
/// Reads one guess per line from `reader` and writes plain text to `writer`.
/// End of input is treated as a request to exit. Bytes that are not valid
/// UTF-8 are replaced, so such a line is rejected like any other non-word.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    glyphs: Glyphs,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            glyphs: Glyphs::default(),
        }
    }

    #[must_use]
    pub fn with_glyphs(self, glyphs: Glyphs) -> Self {
        Self { glyphs, ..self }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn say(&mut self, message: impl fmt::Display) {
        if let Err(e) = writeln!(self.writer, "{message}") {
            debug_log!("CliInterface::say() - write failed: {}", e);
        }
    }

    fn read_line(&mut self) -> Option<String> {
        let mut input = Vec::new();
        match self.reader.read_until(b'\n', &mut input) {
            Ok(0) => None,
            Ok(_) => Some(String::from_utf8_lossy(&input).into_owned()),
            Err(e) => {
                debug_log!("CliInterface::read_line() - read failed: {}", e);
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn display_round_start(&mut self, info: &RoundInfo) {
        self.say(format_args!(
            "length {} ; you have {} attempts",
            info.word_length, info.max_attempts
        ));
        if let Some(word) = &info.revealed {
            self.say(format_args!("word: {word}"));
        }
    }

    fn read_action(&mut self) -> Option<UserAction> {
        let Some(line) = self.read_line() else {
            return Some(UserAction::Exit);
        };

        match parse_guess(&line) {
            GuessInput::Valid(guess) => Some(UserAction::Guess(guess)),
            GuessInput::Exit => Some(UserAction::Exit),
            GuessInput::NewGame => Some(UserAction::NewGame),
            GuessInput::Invalid => {
                self.say("🤔 letters only, please");
                None
            }
        }
    }

    fn display_feedback(&mut self, _guess: &str, feedback: &FullFeedback, _game: &Game) {
        let rendered = feedback.render(&self.glyphs);
        self.say(rendered);
    }

    fn display_invalid_guess(&mut self, error: &GameError, _game: &Game) {
        match error {
            GameError::LengthMismatch { expected, .. } => {
                self.say(format_args!("🤔 please provide a {expected}-letters word"));
            }
            GameError::GameOver => {
                self.say(format_args!(
                    "the game is over, type '{NEXT_COMMAND}' or '{EXIT_COMMAND}'"
                ));
            }
        }
    }

    fn display_won(&mut self, _game: &Game) {
        self.say("🎉 you won");
        self.say(format_args!(
            "type '{NEXT_COMMAND}' to play again or '{EXIT_COMMAND}' to quit"
        ));
    }

    fn display_lost(&mut self, game: &Game) {
        self.say(format_args!(
            "😔 you lost, the correct word was {}",
            game.secret()
        ));
        self.say(format_args!(
            "type '{NEXT_COMMAND}' to play again or '{EXIT_COMMAND}' to quit"
        ));
    }

    fn display_exit_message(&mut self) {
        self.say("Exiting.");
    }
}
