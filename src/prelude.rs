//! Commonly used types and utilities for ease of import.

pub use crate::{
    calculate_feedback, validate_guess, Game, GameMode, GamePhase, GameSettings, GuessError,
    GuessOutcome, MultiGuessOutcome, MultiplayerGame, Session, SetupOutcome, SinglePlayerGame,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, run_game, InputSource, ScriptedInput, StdinInput};
