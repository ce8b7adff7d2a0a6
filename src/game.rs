use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    config::GameSettings,
    multi::{MultiGuessOutcome, MultiplayerGame, SetupOutcome},
    single::{GuessOutcome, SinglePlayerGame},
};

/// Which kind of session a [`Game`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameMode {
    #[default]
    Single,
    Multi,
}

/// The active session, one variant per mode.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Session {
    Single(SinglePlayerGame),
    Multi(MultiplayerGame),
}

impl Session {
    /// Create a fresh session for `mode`.
    pub fn start(mode: GameMode, settings: GameSettings, rng: &mut SmallRng) -> Self {
        match mode {
            GameMode::Single => Session::Single(SinglePlayerGame::new(settings, rng)),
            GameMode::Multi => Session::Multi(MultiplayerGame::new(settings)),
        }
    }

    pub fn mode(&self) -> GameMode {
        match self {
            Session::Single(_) => GameMode::Single,
            Session::Multi(_) => GameMode::Multi,
        }
    }

    pub fn settings(&self) -> &GameSettings {
        match self {
            Session::Single(g) => g.settings(),
            Session::Multi(g) => g.settings(),
        }
    }

    pub fn is_over(&self) -> bool {
        match self {
            Session::Single(g) => g.is_over(),
            Session::Multi(g) => g.is_over(),
        }
    }

    pub fn set_game_over(&mut self, over: bool) {
        match self {
            Session::Single(g) => g.set_game_over(over),
            Session::Multi(g) => g.set_game_over(over),
        }
    }

    pub fn as_single(&self) -> Option<&SinglePlayerGame> {
        match self {
            Session::Single(g) => Some(g),
            Session::Multi(_) => None,
        }
    }

    pub fn as_multi(&self) -> Option<&MultiplayerGame> {
        match self {
            Session::Multi(g) => Some(g),
            Session::Single(_) => None,
        }
    }
}

/// Owns the settings, the mode and the one active session.
///
/// Any change of settings or mode replaces the session wholesale; sessions
/// are never reset field by field.
pub struct Game {
    mode: GameMode,
    settings: GameSettings,
    session: Session,
    rng: SmallRng,
}

impl Game {
    /// Game seeded from the thread RNG.
    #[cfg(feature = "std")]
    pub fn new(mode: GameMode, settings: GameSettings) -> Self {
        let mut seed_rng = rand::rng();
        Self::with_rng(mode, settings, SmallRng::from_rng(&mut seed_rng))
    }

    /// Reproducible game: the same seed yields the same targets.
    pub fn with_seed(mode: GameMode, settings: GameSettings, seed: u64) -> Self {
        Self::with_rng(mode, settings, SmallRng::seed_from_u64(seed))
    }

    pub fn with_rng(mode: GameMode, settings: GameSettings, mut rng: SmallRng) -> Self {
        let session = Session::start(mode, settings, &mut rng);
        Self {
            mode,
            settings,
            session,
            rng,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }

    /// Replace the session with a fresh one for the current mode and settings.
    pub fn start_new_game(&mut self) {
        debug!("Starting new {:?} game", self.mode);
        self.session = Session::start(self.mode, self.settings, &mut self.rng);
    }

    /// Switch modes; always starts a new game.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.start_new_game();
    }

    /// Install new settings; always starts a new game.
    pub fn update_settings(&mut self, settings: GameSettings) {
        info!("Settings changed to {:?}", settings);
        self.settings = settings;
        self.start_new_game();
    }

    /// Back to default settings in single-player mode.
    pub fn reset(&mut self) {
        self.mode = GameMode::default();
        self.settings = GameSettings::default();
        self.start_new_game();
    }

    pub fn set_game_over(&mut self, over: bool) {
        self.session.set_game_over(over);
    }

    /// Single-player guess. `None` when the session is multiplayer.
    pub fn submit_guess(&mut self, raw: &str) -> Option<GuessOutcome> {
        match &mut self.session {
            Session::Single(g) => Some(g.submit_guess(raw)),
            Session::Multi(_) => {
                warn!("Single-player guess submitted to a multiplayer session");
                None
            }
        }
    }

    /// Multiplayer setup. `None` when the session is single-player.
    pub fn save_player_setup(&mut self, name: &str, number: &str) -> Option<SetupOutcome> {
        match &mut self.session {
            Session::Multi(g) => Some(g.save_player_setup(name, number)),
            Session::Single(_) => {
                warn!("Player setup submitted to a single-player session");
                None
            }
        }
    }

    /// Multiplayer guess. `None` when the session is single-player.
    pub fn submit_multi_guess(&mut self, raw: &str, target: usize) -> Option<MultiGuessOutcome> {
        match &mut self.session {
            Session::Multi(g) => Some(g.submit_guess(raw, target)),
            Session::Single(_) => {
                warn!("Multiplayer guess submitted to a single-player session");
                None
            }
        }
    }
}
