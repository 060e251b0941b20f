use crate::grid::Grid;
use crate::snake::Snake;

/// Why a round ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Checks the snake's head against the walls, then against its own body.
///
/// A head that is both off-grid and on the body reports a wall hit.
#[must_use]
pub fn check(snake: &Snake, grid: Grid) -> Option<DeathReason> {
    if !grid.contains(snake.head()) {
        return Some(DeathReason::WallCollision);
    }

    if snake.head_overlaps_body() {
        return Some(DeathReason::SelfCollision);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::{check, DeathReason};
    use crate::grid::{Cell, Grid};
    use crate::input::Direction;
    use crate::snake::Snake;

    #[test]
    fn head_inside_and_clear_is_no_collision() {
        let snake = Snake::new_horizontal(Cell::new(4, 2), 3, Direction::Right);
        assert_eq!(check(&snake, Grid::new(6, 4)), None);
    }

    #[test]
    fn head_past_any_edge_is_wall_collision() {
        let grid = Grid::new(6, 4);

        for head in [
            Cell::new(-1, 1),
            Cell::new(6, 1),
            Cell::new(2, -1),
            Cell::new(2, 4),
        ] {
            let snake =
                Snake::from_cells(vec![head], Direction::Right).expect("non-empty snake");
            assert_eq!(check(&snake, grid), Some(DeathReason::WallCollision));
        }
    }

    #[test]
    fn head_on_body_is_self_collision() {
        let snake = Snake::from_cells(
            vec![
                Cell::new(1, 1),
                Cell::new(2, 1),
                Cell::new(2, 2),
                Cell::new(1, 2),
                Cell::new(1, 1),
            ],
            Direction::Up,
        )
        .expect("non-empty snake");

        assert_eq!(check(&snake, Grid::new(6, 4)), Some(DeathReason::SelfCollision));
    }

    #[test]
    fn wall_is_reported_before_self() {
        // Head is off-grid and also duplicates a body cell.
        let snake = Snake::from_cells(
            vec![Cell::new(-1, 0), Cell::new(0, 0), Cell::new(-1, 0)],
            Direction::Left,
        )
        .expect("non-empty snake");

        assert_eq!(check(&snake, Grid::new(4, 4)), Some(DeathReason::WallCollision));
    }
}
