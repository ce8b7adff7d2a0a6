//! Multiplayer session: every player hides a number, players take turns
//! guessing each other's numbers, and a correct guess eliminates the target.
//! The last player standing wins.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use log::{debug, info, warn};

use crate::{
    common::GuessError,
    config::GameSettings,
    feedback::{calculate_feedback, Feedback},
    validator::prepare_guess,
};

/// Stage of a multiplayer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    Setup,
    Guessing,
    Finished,
}

/// A guess made against another player's number. Stored on the target.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiGuessRecord {
    pub guesser: usize,
    pub target: usize,
    pub guess: String,
    pub correct: bool,
    pub correct_digits: usize,
    pub correct_positions: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    id: usize,
    name: String,
    secret: String,
    guesses: Vec<MultiGuessRecord>,
    eliminated: bool,
}

impl Player {
    fn new(id: usize) -> Self {
        Self {
            id,
            name: default_name(id),
            secret: String::new(),
            guesses: Vec::new(),
            eliminated: false,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's hidden number; empty until setup is saved.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Guesses other players made against this player.
    pub fn guesses(&self) -> &[MultiGuessRecord] {
        &self.guesses
    }

    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }
}

fn default_name(id: usize) -> String {
    alloc::format!("Player {}", id + 1)
}

/// What a call to [`MultiplayerGame::save_player_setup`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    /// Not in the setup phase.
    Ignored,
    /// Secret number rejected; the same player must try again.
    Rejected(GuessError),
    /// Saved; `next` is the next player to set up.
    Saved { player: usize, next: usize },
    /// Saved the last player; guessing begins with player 0.
    Complete { player: usize },
}

impl SetupOutcome {
    pub fn message(&self) -> String {
        match self {
            SetupOutcome::Ignored => String::new(),
            SetupOutcome::Rejected(e) => e.to_string(),
            SetupOutcome::Saved { next, .. } => {
                alloc::format!("Player {}'s turn to setup", next + 1)
            }
            SetupOutcome::Complete { .. } => "Guessing Phase".to_string(),
        }
    }
}

/// What a call to [`MultiplayerGame::submit_guess`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultiGuessOutcome {
    /// Not in the guessing phase.
    Ignored,
    /// Rejected; turn and history unchanged.
    Rejected(GuessError),
    /// Wrong number; the turn passes to `next_guesser`.
    Miss {
        feedback: Feedback,
        next_guesser: usize,
    },
    /// Target found and eliminated; the game continues.
    Eliminated {
        guesser: String,
        target: String,
        next_guesser: usize,
    },
    /// Target found and only the winner remains.
    Won { winner: String },
}

impl MultiGuessOutcome {
    pub fn message(&self) -> String {
        match self {
            MultiGuessOutcome::Ignored => String::new(),
            MultiGuessOutcome::Rejected(e) => e.to_string(),
            MultiGuessOutcome::Miss { feedback, .. } => feedback.to_string(),
            MultiGuessOutcome::Eliminated {
                guesser, target, ..
            } => alloc::format!("{} found {}'s number!", guesser, target),
            MultiGuessOutcome::Won { winner } => alloc::format!("{} wins!", winner),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiplayerGame {
    settings: GameSettings,
    players: Vec<Player>,
    current_setup_player: usize,
    current_guesser: usize,
    phase: GamePhase,
    active_players: Vec<usize>,
    game_over: bool,
}

impl MultiplayerGame {
    /// Create `player_count` players with default names, all active, in
    /// the setup phase.
    pub fn new(settings: GameSettings) -> Self {
        let count = settings.player_count();
        info!(
            "New multiplayer game: {} players, {} digits",
            count,
            settings.digit_count()
        );
        Self {
            settings,
            players: (0..count).map(Player::new).collect(),
            current_setup_player: 0,
            current_guesser: 0,
            phase: GamePhase::Setup,
            active_players: (0..count).collect(),
            game_over: false,
        }
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: usize) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn current_setup_player(&self) -> usize {
        self.current_setup_player
    }

    pub fn current_guesser(&self) -> usize {
        self.current_guesser
    }

    /// Ids of players not yet eliminated, in seating order.
    pub fn active_players(&self) -> &[usize] {
        &self.active_players
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn set_game_over(&mut self, over: bool) {
        debug!("game_over overridden to {}", over);
        self.game_over = over;
    }

    /// The sole remaining player once the game has finished.
    pub fn winner(&self) -> Option<&Player> {
        if self.phase != GamePhase::Finished {
            return None;
        }
        match self.active_players.as_slice() {
            [id] => self.players.get(*id),
            _ => None,
        }
    }

    /// Players the current guesser may target.
    pub fn valid_targets(&self) -> impl Iterator<Item = &Player> + '_ {
        self.active_players
            .iter()
            .filter(move |&&id| id != self.current_guesser)
            .filter_map(move |&id| self.players.get(id))
    }

    /// Save name and secret number for the player currently in setup.
    ///
    /// A blank name falls back to "Player N". An invalid number leaves the
    /// session on the same player.
    pub fn save_player_setup(&mut self, name: &str, raw_number: &str) -> SetupOutcome {
        if self.phase != GamePhase::Setup {
            return SetupOutcome::Ignored;
        }
        let id = self.current_setup_player;
        let secret = match prepare_guess(raw_number, self.settings.digit_count()) {
            Ok(s) => s,
            Err(e) => {
                debug!("Setup for player {} rejected: {}", id, e);
                return SetupOutcome::Rejected(e);
            }
        };
        let Some(player) = self.players.get_mut(id) else {
            warn!("Setup index {} out of range", id);
            return SetupOutcome::Ignored;
        };
        let name = name.trim();
        player.name = if name.is_empty() {
            default_name(id)
        } else {
            name.to_string()
        };
        player.secret = secret;
        debug!("Player {} set up as {:?}", id, player.name);

        self.current_setup_player += 1;
        if self.current_setup_player >= self.players.len() {
            self.phase = GamePhase::Guessing;
            self.current_guesser = 0;
            info!("All players set up; guessing begins");
            SetupOutcome::Complete { player: id }
        } else {
            SetupOutcome::Saved {
                player: id,
                next: self.current_setup_player,
            }
        }
    }

    /// Current guesser tries `raw_guess` against `target`'s number.
    pub fn submit_guess(&mut self, raw_guess: &str, target: usize) -> MultiGuessOutcome {
        if self.phase != GamePhase::Guessing {
            return MultiGuessOutcome::Ignored;
        }
        if target == self.current_guesser || !self.active_players.contains(&target) {
            warn!(
                "Player {} cannot target player {}",
                self.current_guesser, target
            );
            return MultiGuessOutcome::Rejected(GuessError::InvalidTarget(target));
        }
        let guess = match prepare_guess(raw_guess, self.settings.digit_count()) {
            Ok(g) => g,
            Err(e) => return MultiGuessOutcome::Rejected(e),
        };

        let guesser = self.current_guesser;
        let guesser_name = self.players[guesser].name.clone();
        let target_player = &mut self.players[target];
        let correct = guess == target_player.secret;
        let feedback = calculate_feedback(&guess, &target_player.secret);
        debug!(
            "Player {} guessed {} against player {}: {}",
            guesser, guess, target, feedback
        );
        target_player.guesses.push(MultiGuessRecord {
            guesser,
            target,
            guess,
            correct,
            correct_digits: feedback.correct_digits,
            correct_positions: feedback.correct_positions,
        });

        if !correct {
            let next_guesser = self.next_guesser();
            return MultiGuessOutcome::Miss {
                feedback,
                next_guesser,
            };
        }

        target_player.eliminated = true;
        let target_name = target_player.name.clone();
        self.active_players.retain(|&id| id != target);
        info!("{} eliminated {}", guesser_name, target_name);

        if self.active_players.len() == 1 {
            self.phase = GamePhase::Finished;
            self.game_over = true;
            info!("{} wins", guesser_name);
            return MultiGuessOutcome::Won {
                winner: guesser_name,
            };
        }
        let next_guesser = self.next_guesser();
        MultiGuessOutcome::Eliminated {
            guesser: guesser_name,
            target: target_name,
            next_guesser,
        }
    }

    /// Pass the turn to the next non-eliminated player, wrapping around.
    /// Returns the new guesser.
    pub fn next_guesser(&mut self) -> usize {
        let count = self.players.len();
        let next = (1..=count)
            .map(|step| (self.current_guesser + step) % count)
            .find(|&id| !self.players[id].eliminated);
        match next {
            Some(id) => self.current_guesser = id,
            None => warn!("next_guesser called with every player eliminated"),
        }
        self.current_guesser
    }
}
