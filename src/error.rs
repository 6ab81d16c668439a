use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while evaluating a guess.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The guess does not have as many letters as the secret word.
    #[error("incorrect number of letters: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The game was already won or lost when the guess came in.
    #[error("the game is already over")]
    GameOver,
}

/// Errors produced while loading a dictionary or picking a word from it.
#[derive(Debug, Error)]
pub enum WordbankError {
    #[error("no word found with length {length}")]
    NoWordFound { length: usize },

    #[error("could not open dictionary {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("reading dictionary")]
    Io(#[from] std::io::Error),
}
