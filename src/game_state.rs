use std::num::NonZeroUsize;

use rand::Rng;

use crate::error::{GameError, WordbankError};
use crate::feedback::FullFeedback;
use crate::game::{Game, Outcome};
use crate::wordbank::pick_word;
use crate::{debug_log, info_log};

const DEFAULT_MAX_ATTEMPTS: NonZeroUsize = NonZeroUsize::new(5).unwrap();

/// Validated settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub word_length: usize,
    pub max_attempts: NonZeroUsize,
    /// Reveal the secret word when a round starts.
    pub cheat: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            word_length: 5,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            cheat: false,
        }
    }
}

/// Action requested by the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    NewGame,
    Exit,
}

/// What the interface is told when a round starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundInfo {
    pub word_length: usize,
    pub max_attempts: usize,
    pub revealed: Option<String>,
}

/// Trait for game UI interactions
/// This allows different UI implementations (CLI, TUI) to work with the same game logic
pub trait GameInterface {
    fn display_round_start(&mut self, info: &RoundInfo);

    /// Returns `None` when the input could not be used and the player should be asked again.
    fn read_action(&mut self) -> Option<UserAction>;

    fn display_feedback(&mut self, guess: &str, feedback: &FullFeedback, game: &Game);

    fn display_invalid_guess(&mut self, error: &GameError, game: &Game);

    fn display_won(&mut self, game: &Game);

    fn display_lost(&mut self, game: &Game);

    fn display_exit_message(&mut self);
}

fn start_round<I, R>(
    wordbank: &[String],
    settings: &Settings,
    rng: &mut R,
    interface: &mut I,
) -> Result<Game, WordbankError>
where
    I: GameInterface + ?Sized,
    R: Rng + ?Sized,
{
    let word = pick_word(wordbank, settings.word_length, rng)?;
    debug_log!("start_round() - picked a {}-letter word", settings.word_length);

    let game = Game::new(settings.max_attempts, word);
    interface.display_round_start(&RoundInfo {
        word_length: game.word_length(),
        max_attempts: game.max_attempts(),
        revealed: settings.cheat.then(|| game.secret().to_owned()),
    });
    Ok(game)
}

/// Runs rounds until the player exits or input runs out.
///
/// Returns the final outcome of every round that was won or lost. Rounds
/// abandoned with [`UserAction::NewGame`] are not counted. Fails before the
/// first round when the wordbank has no word of the requested length.
pub fn game_loop<I, R>(
    wordbank: &[String],
    settings: &Settings,
    rng: &mut R,
    interface: &mut I,
) -> Result<Vec<Outcome>, WordbankError>
where
    I: GameInterface + ?Sized,
    R: Rng + ?Sized,
{
    let mut outcomes = Vec::new();
    let mut game = start_round(wordbank, settings, rng, interface)?;

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => {
                if !game.is_over() {
                    info_log!("game_loop() - abandoning round after {} attempts", game.attempts());
                }
                game = start_round(wordbank, settings, rng, interface)?;
            }
            UserAction::Guess(guess) => match game.submit_guess(&guess) {
                Ok((feedback, outcome)) => {
                    interface.display_feedback(&guess, &feedback, &game);
                    match outcome {
                        Outcome::Won => interface.display_won(&game),
                        Outcome::Lost => interface.display_lost(&game),
                        Outcome::Continue => {}
                    }
                    if outcome.is_terminal() {
                        info_log!("game_loop() - round over: {:?}", outcome);
                        outcomes.push(outcome);
                    }
                }
                Err(error) => {
                    debug_log!("game_loop() - rejected guess '{}': {}", guess, error);
                    interface.display_invalid_guess(&error, &game);
                }
            },
        }
    }

    Ok(outcomes)
}
