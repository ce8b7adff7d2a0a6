//! Common types: guess/settings errors and the validation result.

use alloc::string::String;
use alloc::string::ToString;

use crate::config::{MAX_DIGIT_COUNT, MAX_PLAYER_COUNT, MIN_PLAYER_COUNT};

/// Reasons a submitted number is rejected.
///
/// All of these are recoverable: they are shown to the player and never
/// touch attempts, turn order or history. `Display` yields the exact
/// user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessError {
    /// Nothing was entered.
    Empty,
    /// Input is negative or not a number.
    Format,
    /// Value lies outside `[0, 10^digit_count - 1]`.
    Range { digit_count: usize },
    /// Input has the wrong number of characters.
    Length { digit_count: usize },
    /// Single-player guess already in the history.
    Duplicate(String),
    /// Multiplayer guess aimed at the guesser or at an eliminated/unknown player.
    InvalidTarget(usize),
}

impl core::fmt::Display for GuessError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GuessError::Empty => write!(f, "Please enter a number before submitting."),
            GuessError::Format => write!(f, "Please enter a valid number."),
            GuessError::Range { digit_count } => {
                write!(f, "Please enter a number between ")?;
                for _ in 0..*digit_count {
                    write!(f, "0")?;
                }
                write!(f, " and ")?;
                for _ in 0..*digit_count {
                    write!(f, "9")?;
                }
                write!(f, ".")
            }
            GuessError::Length { digit_count } => {
                write!(f, "Please enter exactly {} digits.", digit_count)
            }
            GuessError::Duplicate(guess) => write!(f, "You've already guessed {}.", guess),
            GuessError::InvalidTarget(id) => {
                write!(f, "Player {} cannot be guessed right now.", id + 1)
            }
        }
    }
}

/// Errors returned when building [`crate::GameSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsError {
    DigitCount(usize),
    MaxAttempts(u32),
    PlayerCount(usize),
}

impl core::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SettingsError::DigitCount(n) => {
                write!(f, "Digit count {} must be between 1 and {}", n, MAX_DIGIT_COUNT)
            }
            SettingsError::MaxAttempts(n) => write!(f, "Max attempts {} must be at least 1", n),
            SettingsError::PlayerCount(n) => write!(
                f,
                "Player count {} must be between {} and {}",
                n, MIN_PLAYER_COUNT, MAX_PLAYER_COUNT
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GuessError {}

#[cfg(feature = "std")]
impl std::error::Error for SettingsError {}

/// Presentation-facing result of validating a guess: a flag plus the
/// message to show (empty when valid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub message: String,
}

impl Validation {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }
}

impl From<Result<(), GuessError>> for Validation {
    fn from(res: Result<(), GuessError>) -> Self {
        match res {
            Ok(()) => Validation::ok(),
            Err(e) => Validation {
                valid: false,
                message: e.to_string(),
            },
        }
    }
}
