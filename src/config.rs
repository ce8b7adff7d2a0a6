//! Game settings and the constants that bound them.

use crate::common::SettingsError;

pub const DEFAULT_DIGIT_COUNT: usize = 3;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 7;
pub const DEFAULT_PLAYER_COUNT: usize = 2;

/// Largest digit count whose value range still fits in a `u64`.
pub const MAX_DIGIT_COUNT: usize = 18;
pub const MIN_PLAYER_COUNT: usize = 2;
pub const MAX_PLAYER_COUNT: usize = 10;

/// Presets offered by the settings menu.
pub const DIGIT_COUNT_OPTIONS: [usize; 4] = [2, 3, 4, 5];
pub const MAX_ATTEMPTS_OPTIONS: [u32; 6] = [3, 5, 7, 10, 15, 20];
pub const PLAYER_COUNT_OPTIONS: [usize; 3] = [2, 3, 4];

/// Immutable snapshot of the game configuration.
///
/// Settings are never edited in place: every change produces a new value,
/// and handing a new value to [`crate::Game::update_settings`] replaces the
/// running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "RawSettings"))]
pub struct GameSettings {
    digit_count: usize,
    max_attempts: u32,
    player_count: usize,
}

impl GameSettings {
    /// Build a validated settings snapshot.
    pub fn new(
        digit_count: usize,
        max_attempts: u32,
        player_count: usize,
    ) -> Result<Self, SettingsError> {
        if digit_count == 0 || digit_count > MAX_DIGIT_COUNT {
            return Err(SettingsError::DigitCount(digit_count));
        }
        if max_attempts == 0 {
            return Err(SettingsError::MaxAttempts(max_attempts));
        }
        if !(MIN_PLAYER_COUNT..=MAX_PLAYER_COUNT).contains(&player_count) {
            return Err(SettingsError::PlayerCount(player_count));
        }
        Ok(Self {
            digit_count,
            max_attempts,
            player_count,
        })
    }

    pub fn digit_count(&self) -> usize {
        self.digit_count
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    pub fn with_digit_count(self, digit_count: usize) -> Result<Self, SettingsError> {
        Self::new(digit_count, self.max_attempts, self.player_count)
    }

    pub fn with_max_attempts(self, max_attempts: u32) -> Result<Self, SettingsError> {
        Self::new(self.digit_count, max_attempts, self.player_count)
    }

    pub fn with_player_count(self, player_count: usize) -> Result<Self, SettingsError> {
        Self::new(self.digit_count, self.max_attempts, player_count)
    }

    /// Largest value a guess may take, `10^digit_count - 1`.
    pub fn max_value(&self) -> u64 {
        10u64.pow(self.digit_count as u32) - 1
    }
}

/// Unchecked wire form; deserialization goes through [`GameSettings::new`].
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct RawSettings {
    digit_count: usize,
    max_attempts: u32,
    player_count: usize,
}

#[cfg(feature = "std")]
impl TryFrom<RawSettings> for GameSettings {
    type Error = SettingsError;

    fn try_from(raw: RawSettings) -> Result<Self, Self::Error> {
        GameSettings::new(raw.digit_count, raw.max_attempts, raw.player_count)
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            digit_count: DEFAULT_DIGIT_COUNT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            player_count: DEFAULT_PLAYER_COUNT,
        }
    }
}
