// Library interface for gordle
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod feedback;
pub mod game;
pub mod game_state;
pub mod logging;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::{GameError, WordbankError};
pub use feedback::{Feedback, FullFeedback, Glyphs, score};
pub use game::{Game, GameStatus, Outcome};
pub use game_state::{GameInterface, RoundInfo, Settings, UserAction, game_loop};
pub use wordbank::{
    is_valid_word, load_wordbank_from_file, load_wordbank_from_reader, load_wordbank_from_str,
    pick_word, pick_word_from_reader, resolve_wordbank,
};
