use std::time::Duration;

use log::{debug, info, warn};

use crate::collision::{self, DeathReason};
use crate::config::GameConfig;
use crate::food::FoodPlacer;
use crate::grid::{Cell, Grid};
use crate::input::{Direction, GameInput};
use crate::palette::{self, PaletteColor};
use crate::snake::Snake;

/// Top-level phase of a session. Pausing is a flag inside `Playing`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GamePhase {
    Menu,
    Playing,
    GameOver,
    /// The snake covers every cell; no food can be placed.
    Victory,
}

/// Read-only copy of everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub grid: Grid,
    /// Snake cells ordered tail to head.
    pub cells: Vec<Cell>,
    pub heading: Direction,
    pub food: Option<Cell>,
    pub score: u32,
    pub phase: GamePhase,
    pub paused: bool,
    pub color: PaletteColor,
    pub death_reason: Option<DeathReason>,
    pub tick_interval_ms: u64,
    pub tick_count: u64,
}

/// Complete mutable state for one session, from menu through game over.
#[derive(Debug, Clone)]
pub struct Session {
    pub snake: Snake,
    /// Current orb; `None` only once the board is full.
    pub food: Option<Cell>,
    pub score: u32,
    pub tick_count: u64,
    pub phase: GamePhase,
    pub paused: bool,
    pub death_reason: Option<DeathReason>,
    tick_interval_ms: u64,
    color_index: usize,
    config: GameConfig,
    grid: Grid,
    placer: FoodPlacer,
}

impl Session {
    /// Creates a session on the menu, seeding food placement from entropy.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_placer(config, FoodPlacer::new())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_placer(config, FoodPlacer::with_seed(seed))
    }

    fn with_placer(config: GameConfig, placer: FoodPlacer) -> Self {
        let grid = config.grid();
        let snake = initial_snake(&config, grid);

        let mut session = Self {
            snake,
            food: None,
            score: 0,
            tick_count: 0,
            phase: GamePhase::Menu,
            paused: false,
            death_reason: None,
            tick_interval_ms: config.initial_tick_interval_ms,
            color_index: 0,
            config,
            grid,
            placer,
        };
        session.reset_board();
        session.phase = GamePhase::Menu;
        session
    }

    /// Starts a fresh round: centered snake, default speed, score 0, new food.
    pub fn reset(&mut self) {
        self.reset_board();
        info!(
            "round started on {}x{} grid, interval {} ms",
            self.grid.width, self.grid.height, self.tick_interval_ms
        );
    }

    fn reset_board(&mut self) {
        self.snake = initial_snake(&self.config, self.grid);
        self.score = 0;
        self.tick_count = 0;
        self.tick_interval_ms = self.config.initial_tick_interval_ms;
        self.color_index = 0;
        self.paused = false;
        self.death_reason = None;
        self.phase = GamePhase::Playing;
        self.food = None;
        self.place_food();
    }

    /// Leaves the current round and returns to the menu.
    pub fn back_to_menu(&mut self) {
        self.phase = GamePhase::Menu;
        self.paused = false;
        info!("back to menu");
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) {
        if self.phase != GamePhase::Playing || self.paused {
            return;
        }

        self.tick_count += 1;
        let grow = self.food == Some(self.snake.next_head());
        self.snake.advance(grow);

        if let Some(reason) = collision::check(&self.snake, self.grid) {
            self.phase = GamePhase::GameOver;
            self.death_reason = Some(reason);
            info!(
                "game over after {} ticks: {reason:?}, score {}",
                self.tick_count, self.score
            );
            return;
        }

        if grow {
            self.eat();
        }
    }

    fn eat(&mut self) {
        self.score += 1;
        self.tick_interval_ms = next_tick_interval_ms(self.tick_interval_ms, &self.config);
        self.color_index = palette::next_index(self.color_index);
        debug!(
            "orb eaten: score {}, length {}, interval {} ms",
            self.score,
            self.snake.len(),
            self.tick_interval_ms
        );

        self.food = None;
        self.place_food();
    }

    fn place_food(&mut self) {
        if self.snake.len() >= self.grid.total_cells() {
            self.win();
            return;
        }

        match self.placer.place(self.grid, &self.snake.occupied_cells()) {
            Ok(cell) => self.food = Some(cell),
            Err(error) => {
                warn!("{error}");
                self.win();
            }
        }
    }

    fn win(&mut self) {
        self.phase = GamePhase::Victory;
        self.food = None;
        info!("board filled with score {}", self.score);
    }

    /// Flips the pause flag; only meaningful while playing.
    pub fn toggle_pause(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }

        self.paused = !self.paused;
        debug!("paused: {}", self.paused);
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                // Turns made while paused take effect on the first tick after resuming.
                if self.phase == GamePhase::Playing {
                    self.snake.set_pending_direction(direction);
                }
            }
            GameInput::TogglePause => self.toggle_pause(),
            GameInput::StartGame => {
                if self.phase == GamePhase::Menu {
                    self.reset();
                }
            }
            GameInput::PlayAgain => {
                if self.is_round_over() {
                    self.reset();
                }
            }
            GameInput::BackToMenu => {
                if self.is_round_over() || (self.phase == GamePhase::Playing && self.paused) {
                    self.back_to_menu();
                }
            }
            GameInput::Quit => {}
        }
    }

    /// True while ticks change the board.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Playing && !self.paused
    }

    #[must_use]
    pub fn is_round_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver | GamePhase::Victory)
    }

    #[must_use]
    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    #[must_use]
    pub fn color_index(&self) -> usize {
        self.color_index
    }

    #[must_use]
    pub fn color(&self) -> PaletteColor {
        palette::color_for_index(self.color_index)
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid,
            cells: self.snake.cells().copied().collect(),
            heading: self.snake.heading(),
            food: self.food,
            score: self.score,
            phase: self.phase,
            paused: self.paused,
            color: self.color(),
            death_reason: self.death_reason,
            tick_interval_ms: self.tick_interval_ms,
            tick_count: self.tick_count,
        }
    }
}

/// Interval after one more orb: scaled down and floored, clamped to the
/// configured minimum, never longer than `current`.
#[must_use]
pub fn next_tick_interval_ms(current: u64, config: &GameConfig) -> u64 {
    let scaled = (current as f64 * config.speed_multiplier).floor() as u64;
    scaled.max(config.min_tick_interval_ms).min(current)
}

fn initial_snake(config: &GameConfig, grid: Grid) -> Snake {
    Snake::new_horizontal(grid.center(), config.initial_snake_length, Direction::Right)
}
