use alloc::string::{String, ToString};
use alloc::vec::Vec;
use log::{debug, info};
use rand::Rng;

use crate::{
    common::GuessError,
    config::GameSettings,
    feedback::{calculate_feedback, Feedback},
    validator::{check_guess, normalize_input, pad_number},
};

/// One accepted guess and its score. Never modified after it is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GuessRecord {
    pub guess: String,
    pub correct_digits: usize,
    pub correct_positions: usize,
}

/// What a call to [`SinglePlayerGame::submit_guess`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The game was already over; nothing happened.
    Ignored,
    /// Input was rejected without consuming an attempt.
    Rejected(GuessError),
    /// Guess recorded; the game goes on.
    Scored(Feedback),
    /// Every digit in place.
    Won { target: String, attempts_used: u32 },
    /// Last attempt spent without finding the number.
    Lost { target: String },
}

impl GuessOutcome {
    /// User-facing text for this outcome.
    pub fn message(&self) -> String {
        match self {
            GuessOutcome::Ignored => String::new(),
            GuessOutcome::Rejected(e) => e.to_string(),
            GuessOutcome::Scored(fb) => fb.to_string(),
            GuessOutcome::Won {
                target,
                attempts_used,
            } => alloc::format!(
                "Congratulations! You guessed the number {} correctly! You won with {} attempt{}!",
                target,
                attempts_used,
                if *attempts_used == 1 { "" } else { "s" }
            ),
            GuessOutcome::Lost { target } => alloc::format!(
                "Game Over! You've used all your attempts. The correct number was: {}",
                target
            ),
        }
    }

    /// True when the guess was accepted and recorded.
    pub fn is_recorded(&self) -> bool {
        matches!(
            self,
            GuessOutcome::Scored(_) | GuessOutcome::Won { .. } | GuessOutcome::Lost { .. }
        )
    }
}

/// Single-player session: find a hidden number within an attempt budget.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SinglePlayerGame {
    settings: GameSettings,
    target: String,
    attempts_left: u32,
    game_over: bool,
    history: Vec<GuessRecord>,
}

impl SinglePlayerGame {
    /// Start a new game with a target drawn uniformly from
    /// `[0, 10^digit_count - 1]`.
    pub fn new<R: Rng + ?Sized>(settings: GameSettings, rng: &mut R) -> Self {
        let value = rng.random_range(0..=settings.max_value());
        Self::start(settings, pad_number(value, settings.digit_count()))
    }

    /// Start a game with a known target, which must be exactly
    /// `digit_count` digits.
    pub fn with_target(settings: GameSettings, target: String) -> Result<Self, GuessError> {
        check_guess(&target, settings.digit_count())?;
        Ok(Self::start(settings, target))
    }

    fn start(settings: GameSettings, target: String) -> Self {
        info!(
            "New single-player game: {} digits, {} attempts",
            settings.digit_count(),
            settings.max_attempts()
        );
        debug!("Target number: {}", target);
        Self {
            settings,
            target,
            attempts_left: settings.max_attempts(),
            game_over: false,
            history: Vec::new(),
        }
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    pub fn attempts_used(&self) -> u32 {
        self.settings.max_attempts().saturating_sub(self.attempts_left)
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Explicitly end or revive the game.
    pub fn set_game_over(&mut self, over: bool) {
        debug!("game_over overridden to {}", over);
        self.game_over = over;
    }

    /// Submit raw player input as a guess.
    pub fn submit_guess(&mut self, raw: &str) -> GuessOutcome {
        if self.game_over {
            return GuessOutcome::Ignored;
        }
        let digits = self.settings.digit_count();
        let guess = match normalize_input(raw, digits) {
            Ok(g) => g,
            Err(e) => return GuessOutcome::Rejected(e),
        };
        if self.history.iter().any(|r| r.guess == guess) {
            debug!("Duplicate guess {}", guess);
            return GuessOutcome::Rejected(GuessError::Duplicate(guess));
        }
        if let Err(e) = check_guess(&guess, digits) {
            debug!("Rejected guess {:?}: {}", guess, e);
            return GuessOutcome::Rejected(e);
        }

        let feedback = calculate_feedback(&guess, &self.target);
        self.history.push(GuessRecord {
            guess,
            correct_digits: feedback.correct_digits,
            correct_positions: feedback.correct_positions,
        });
        self.attempts_left = self.attempts_left.saturating_sub(1);
        debug!(
            "Guess #{}: {} ({} left)",
            self.history.len(),
            feedback,
            self.attempts_left
        );

        if feedback.is_solved(digits) {
            self.game_over = true;
            info!("Player won after {} attempts", self.attempts_used());
            GuessOutcome::Won {
                target: self.target.clone(),
                attempts_used: self.attempts_used(),
            }
        } else if self.attempts_left == 0 {
            self.game_over = true;
            info!("Player lost; target was {}", self.target);
            GuessOutcome::Lost {
                target: self.target.clone(),
            }
        } else {
            GuessOutcome::Scored(feedback)
        }
    }
}
