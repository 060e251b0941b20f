use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grid::Grid;

/// Arena width in arena units (pixels in the classic window).
pub const ARENA_WIDTH: u32 = 800;

/// Arena height in arena units.
pub const ARENA_HEIGHT: u32 = 800;

/// Edge length of one snake segment in arena units.
pub const SEGMENT_SIZE: u32 = 10;

/// Tick interval at the start of every round.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Lowest tick interval the speed curve may reach.
pub const MIN_TICK_INTERVAL_MS: u64 = 30;

/// Interval multiplier applied after every orb eaten.
pub const SPEED_INCREASE_FACTOR: f64 = 0.97;

/// Number of segments a fresh snake starts with.
pub const INITIAL_SNAKE_LENGTH: usize = 9;

/// Default grid width in cells, derived from the arena.
pub const DEFAULT_GRID_WIDTH: u16 = (ARENA_WIDTH / SEGMENT_SIZE) as u16;

/// Default grid height in cells, derived from the arena.
pub const DEFAULT_GRID_HEIGHT: u16 = (ARENA_HEIGHT / SEGMENT_SIZE) as u16;

/// Upper half-block glyph for compositing two grid rows into one terminal row.
pub const GLYPH_HALF_UPPER: &str = "▀";

/// Tunables for one game session.
///
/// Every field has a default, so a JSON file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    pub initial_snake_length: usize,
    pub initial_tick_interval_ms: u64,
    pub min_tick_interval_ms: u64,
    pub speed_multiplier: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            initial_snake_length: INITIAL_SNAKE_LENGTH,
            initial_tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            min_tick_interval_ms: MIN_TICK_INTERVAL_MS,
            speed_multiplier: SPEED_INCREASE_FACTOR,
        }
    }
}

impl GameConfig {
    /// Default tunables on a custom grid.
    #[must_use]
    pub fn with_grid(width: u16, height: u16) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Self::default()
        }
    }

    /// Reads a JSON config file and validates it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }

        // The starting snake lies on one row ending at the center column.
        let center_x = usize::from(self.grid_width / 2);
        if self.initial_snake_length == 0 || self.initial_snake_length > center_x + 1 {
            return Err(ConfigError::Invalid(format!(
                "initial snake length {} does not fit a grid {} cells wide",
                self.initial_snake_length, self.grid_width
            )));
        }

        if self.initial_tick_interval_ms == 0 || self.min_tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick intervals must be positive".to_owned(),
            ));
        }

        if !(self.speed_multiplier > 0.0 && self.speed_multiplier <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "speed multiplier must be in (0, 1], got {}",
                self.speed_multiplier
            )));
        }

        Ok(())
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }
}
