use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::GamePhase;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Cell offset for one step, with `y` growing downwards.
    #[must_use]
    pub fn unit_vector(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    TogglePause,
    StartGame,
    PlayAgain,
    BackToMenu,
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Maps a terminal key event to a game intent for the current phase.
///
/// Unrecognized keys, releases and repeats yield `None`.
#[must_use]
pub fn map_key(key: KeyEvent, phase: GamePhase) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    let round_over = matches!(phase, GamePhase::GameOver | GamePhase::Victory);

    match key.code {
        KeyCode::Up => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Char(' ') => Some(GameInput::TogglePause),
        KeyCode::Enter if phase == GamePhase::Menu => Some(GameInput::StartGame),
        KeyCode::Enter if round_over => Some(GameInput::PlayAgain),
        KeyCode::Esc => Some(GameInput::BackToMenu),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Some(GameInput::Direction(Direction::Up)),
            'a' => Some(GameInput::Direction(Direction::Left)),
            's' => Some(GameInput::Direction(Direction::Down)),
            'd' => Some(GameInput::Direction(Direction::Right)),
            'r' if round_over => Some(GameInput::PlayAgain),
            'm' => Some(GameInput::BackToMenu),
            'q' => Some(GameInput::Quit),
            _ => None,
        },
        _ => None,
    }
}
