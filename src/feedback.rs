//! Per-letter feedback for a guess against the secret word.
//!
//! Scoring walks the guess strictly left to right. Each position is first
//! checked for an exact match; otherwise the guessed letter is credited as
//! present only while the secret still has an unclaimed copy of it. Exact
//! matches claim their copy as they are visited, so an earlier misplaced
//! letter can take a copy that a later exact match would also have used.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::GameError;

/// Classification of one letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Right letter, right position.
    Correct,
    /// Right letter, wrong position.
    Present,
    /// No unclaimed copy of the letter left in the secret.
    Absent,
}

impl Feedback {
    /// Parses the letter form used in tests and logs (G/Y/X).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'G' => Some(Feedback::Correct),
            'Y' => Some(Feedback::Present),
            'X' => Some(Feedback::Absent),
            _ => None,
        }
    }

    pub fn glyph(self, glyphs: &Glyphs) -> &'static str {
        match self {
            Feedback::Correct => glyphs.correct,
            Feedback::Present => glyphs.present,
            Feedback::Absent => glyphs.absent,
        }
    }
}

/// Display strings for each kind of feedback.
///
/// Which set to use is up to the presentation layer; scoring never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub correct: &'static str,
    pub present: &'static str,
    pub absent: &'static str,
}

impl Glyphs {
    pub const EMOJI: Glyphs = Glyphs {
        correct: "💚",
        present: "🟡",
        absent: "⬜️",
    };

    pub const LETTERS: Glyphs = Glyphs {
        correct: "G",
        present: "Y",
        absent: "X",
    };
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs::EMOJI
    }
}

/// Feedback for a whole guess, one entry per letter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FullFeedback(Vec<Feedback>);

impl FullFeedback {
    /// True when every letter is [`Feedback::Correct`]. An empty sequence wins vacuously.
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|f| *f == Feedback::Correct)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Feedback] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feedback> {
        self.0.iter()
    }

    /// Renders one glyph per position.
    pub fn render(&self, glyphs: &Glyphs) -> String {
        self.0.iter().map(|f| f.glyph(glyphs)).collect()
    }
}

impl From<Vec<Feedback>> for FullFeedback {
    fn from(feedback: Vec<Feedback>) -> Self {
        Self(feedback)
    }
}

impl<'a> IntoIterator for &'a FullFeedback {
    type Item = &'a Feedback;
    type IntoIter = std::slice::Iter<'a, Feedback>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for FullFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Glyphs::default()))
    }
}

/// Error returned when a feedback string holds something other than G, Y or X.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{0}' is not one of G, Y or X")]
pub struct ParseFeedbackError(pub char);

impl FromStr for FullFeedback {
    type Err = ParseFeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| Feedback::from_char(c).ok_or(ParseFeedbackError(c)))
            .collect::<Result<Vec<_>, _>>()
            .map(FullFeedback)
    }
}

/// Scores `guess` against `secret`.
///
/// Lengths are counted in `char`s. A guess of a different length is rejected
/// with [`GameError::LengthMismatch`]; two empty strings score to an empty
/// sequence.
pub fn score(secret: &str, guess: &str) -> Result<FullFeedback, GameError> {
    let secret_chars: Vec<char> = secret.chars().collect();
    let guess_chars: Vec<char> = guess.chars().collect();

    if secret_chars.len() != guess_chars.len() {
        return Err(GameError::LengthMismatch {
            expected: secret_chars.len(),
            actual: guess_chars.len(),
        });
    }

    let mut remaining: HashMap<char, usize> = HashMap::new();
    for &c in &secret_chars {
        *remaining.entry(c).or_insert(0) += 1;
    }

    let feedback = secret_chars
        .iter()
        .zip(&guess_chars)
        .map(|(&s, &g)| {
            if s == g {
                claim(&mut remaining, s);
                Feedback::Correct
            } else if remaining.get(&g).is_some_and(|&n| n > 0) {
                claim(&mut remaining, g);
                Feedback::Present
            } else {
                Feedback::Absent
            }
        })
        .collect();

    Ok(FullFeedback(feedback))
}

// Already-claimed letters stay at zero.
fn claim(remaining: &mut HashMap<char, usize>, c: char) {
    if let Some(n) = remaining.get_mut(&c) {
        *n = n.saturating_sub(1);
    }
}
