use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::grid::{Cell, Grid};

/// Food placement failure.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum PlacementError {
    #[error("no free cell left on the {width}x{height} board")]
    BoardFull { width: u16, height: u16 },
}

/// Picks random free cells for new orbs.
#[derive(Debug, Clone)]
pub struct FoodPlacer {
    rng: StdRng,
}

impl FoodPlacer {
    /// Creates a placer seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a deterministic placer for tests and reproducible runs.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Samples uniform cells until one is not in `occupied`.
    ///
    /// Returns [`PlacementError::BoardFull`] up front when `occupied` covers
    /// every cell of `grid`, so the sampling loop always has a free target.
    pub fn place(&mut self, grid: Grid, occupied: &HashSet<Cell>) -> Result<Cell, PlacementError> {
        let occupied_inside = occupied.iter().filter(|cell| grid.contains(**cell)).count();
        if occupied_inside >= grid.total_cells() {
            return Err(PlacementError::BoardFull {
                width: grid.width,
                height: grid.height,
            });
        }

        loop {
            let candidate = grid.random_cell(&mut self.rng);
            if !occupied.contains(&candidate) {
                return Ok(candidate);
            }
        }
    }
}

impl Default for FoodPlacer {
    fn default() -> Self {
        Self::new()
    }
}
