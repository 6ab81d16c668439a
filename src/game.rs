use std::num::NonZeroUsize;

use crate::error::GameError;
use crate::feedback::{FullFeedback, score};

/// Result of one accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Continue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A single round: one secret word and a fixed attempt budget.
///
/// Once the game is won or lost it stays that way; further guesses are
/// rejected with [`GameError::GameOver`] and leave the state untouched.
#[derive(Debug, Clone)]
pub struct Game {
    secret: String,
    max_attempts: usize,
    attempts: usize,
    status: GameStatus,
}

impl Game {
    /// The secret is taken as-is; guesses are checked against its length when scored.
    pub fn new(max_attempts: NonZeroUsize, secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            max_attempts: max_attempts.get(),
            attempts: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Scores `guess` and advances the game.
    ///
    /// A guess of the wrong length is returned as an error without costing an
    /// attempt. A winning guess ends the game whatever the attempt count; any
    /// other guess uses one attempt and loses the game once the budget is spent.
    pub fn submit_guess(&mut self, guess: &str) -> Result<(FullFeedback, Outcome), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let feedback = score(&self.secret, guess)?;

        if feedback.is_win() {
            self.status = GameStatus::Won;
            return Ok((feedback, Outcome::Won));
        }

        self.attempts += 1;
        if self.attempts >= self.max_attempts {
            self.status = GameStatus::Lost;
            return Ok((feedback, Outcome::Lost));
        }

        Ok((feedback, Outcome::Continue))
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of non-winning guesses evaluated so far.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn remaining_attempts(&self) -> usize {
        self.max_attempts.saturating_sub(self.attempts)
    }

    /// Length of the secret in `char`s.
    pub fn word_length(&self) -> usize {
        self.secret.chars().count()
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}
