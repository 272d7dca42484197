use serde::Deserialize;

use crate::error::{GameError, Result};

pub const DEFAULT_BOARD_SIZE: usize = 9;

/// Board sizes offered by the page.
pub const PRESET_SIZES: [usize; 5] = [5, 9, 11, 13, 19];

/// Settings for a new game.
///
/// Deserialized from the page as e.g. `{ "size": 11 }`; missing fields take
/// their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub size: usize,
}

impl GameConfig {
    pub fn with_size(size: usize) -> Self {
        Self { size }
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(GameError::InvalidSize(self.size));
        }
        Ok(())
    }

    pub fn presets() -> impl Iterator<Item = Self> {
        PRESET_SIZES.into_iter().map(Self::with_size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
        }
    }
}
