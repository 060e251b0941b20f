use std::collections::{HashSet, VecDeque};

use crate::grid::Cell;
use crate::input::{direction_change_is_valid, Direction};

/// Ordered snake body plus heading and the buffered turn for the next tick.
///
/// Cells are stored tail first; the back of the deque is the head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
    heading: Direction,
    pending: Direction,
}

impl Snake {
    /// Creates a straight snake of `length` cells ending at `head`, laid out
    /// behind the head opposite to `heading`.
    #[must_use]
    pub fn new_horizontal(head: Cell, length: usize, heading: Direction) -> Self {
        let length = length.max(1);
        let back = heading.opposite();

        let mut body = VecDeque::with_capacity(length);
        let mut cell = head;
        body.push_front(cell);
        for _ in 1..length {
            cell = cell.step(back);
            body.push_front(cell);
        }

        Self {
            body,
            heading,
            pending: heading,
        }
    }

    /// Creates a snake from explicit cells ordered tail to head.
    ///
    /// Returns `None` for an empty body.
    #[must_use]
    pub fn from_cells(cells: Vec<Cell>, heading: Direction) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }

        Some(Self {
            body: VecDeque::from(cells),
            heading,
            pending: heading,
        })
    }

    /// Requests a turn for the next move. Reversals are ignored; within one
    /// tick the last accepted request wins.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if direction_change_is_valid(self.heading, direction) {
            self.pending = direction;
        }
    }

    /// Returns the head position the next move will produce.
    #[must_use]
    pub fn next_head(&self) -> Cell {
        self.head().step(self.pending)
    }

    /// Commits the pending heading and moves one cell, keeping the tail when
    /// `grow` is set. Bounds and overlap are not checked here.
    pub fn advance(&mut self, grow: bool) -> Cell {
        self.heading = self.pending;
        let new_head = self.head().step(self.heading);

        self.body.push_back(new_head);
        if !grow {
            let _ = self.body.pop_front();
        }

        new_head
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Body cells from tail up to, but not including, the head.
    pub fn body_excluding_head(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter().take(self.body.len().saturating_sub(1))
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body_excluding_head().any(|cell| *cell == head)
    }

    #[must_use]
    pub fn occupied_cells(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Iterates over body segments from tail to head.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Direction of the most recent move.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Direction the next move will take.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::Snake;
    use crate::grid::Cell;
    use crate::input::Direction;

    fn classic() -> Snake {
        Snake::new_horizontal(Cell::new(40, 40), 9, Direction::Right)
    }

    #[test]
    fn horizontal_snake_is_laid_out_tail_first() {
        let snake = classic();
        let cells: Vec<Cell> = snake.cells().copied().collect();

        assert_eq!(snake.len(), 9);
        assert_eq!(cells.first(), Some(&Cell::new(32, 40)));
        assert_eq!(snake.head(), Cell::new(40, 40));
        assert_eq!(snake.occupied_cells().len(), 9);
    }

    #[test]
    fn snake_moves_one_cell_per_tick() {
        let mut snake = classic();

        let head = snake.advance(false);

        assert_eq!(head, Cell::new(41, 40));
        assert_eq!(snake.head(), head);
        assert_eq!(snake.len(), 9);
        assert!(!snake.occupies(Cell::new(32, 40)));
    }

    #[test]
    fn snake_growth_keeps_previous_tail() {
        let mut snake = classic();

        snake.advance(true);

        assert_eq!(snake.len(), 10);
        assert!(snake.occupies(Cell::new(32, 40)));
    }

    #[test]
    fn pending_direction_rejects_reverse() {
        let mut snake = classic();

        snake.set_pending_direction(Direction::Left);
        snake.advance(false);

        assert_eq!(snake.heading(), Direction::Right);
        assert_eq!(snake.head(), Cell::new(41, 40));
    }

    #[test]
    fn pending_direction_applies_on_next_move_only() {
        let mut snake = classic();

        snake.set_pending_direction(Direction::Up);
        assert_eq!(snake.heading(), Direction::Right);
        assert_eq!(snake.next_head(), Cell::new(40, 39));

        snake.advance(false);
        assert_eq!(snake.heading(), Direction::Up);
        assert_eq!(snake.head(), Cell::new(40, 39));
    }

    #[test]
    fn last_request_within_a_tick_wins() {
        let mut snake = classic();

        snake.set_pending_direction(Direction::Up);
        snake.set_pending_direction(Direction::Down);
        snake.advance(false);

        assert_eq!(snake.head(), Cell::new(40, 41));
    }

    #[test]
    fn reversal_checks_heading_not_pending_turn() {
        let mut snake = classic();

        // Up is queued, but Left still reverses the committed heading.
        snake.set_pending_direction(Direction::Up);
        snake.set_pending_direction(Direction::Left);

        assert_eq!(snake.pending_direction(), Direction::Up);
    }

    #[test]
    fn body_excludes_only_the_head() {
        let snake = Snake::from_cells(
            vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)],
            Direction::Right,
        )
        .expect("non-empty snake");
        let body: Vec<Cell> = snake.body_excluding_head().copied().collect();

        assert_eq!(body, vec![Cell::new(0, 0), Cell::new(1, 0)]);
        assert!(!snake.head_overlaps_body());
    }

    #[test]
    fn empty_cell_list_is_not_a_snake() {
        assert_eq!(Snake::from_cells(Vec::new(), Direction::Right), None);
    }

    #[test]
    fn single_cell_snake_has_empty_body() {
        let snake = Snake::new_horizontal(Cell::new(1, 1), 1, Direction::Up);
        assert_eq!(snake.body_excluding_head().count(), 0);
    }
}
