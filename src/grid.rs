use rand::Rng;

use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.unit_vector();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Fixed-size discrete playfield.
///
/// Cells are addressed from the top-left corner; `y` grows downwards.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    pub width: u16,
    pub height: u16,
}

impl Grid {
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Derives the grid from an arena measured in units of `segment_size`.
    ///
    /// Partial segments at the right and bottom edges are not playable.
    #[must_use]
    pub fn from_arena(arena_width: u32, arena_height: u32, segment_size: u32) -> Self {
        let segment_size = segment_size.max(1);
        let cells = |units: u32| u16::try_from(units / segment_size).unwrap_or(u16::MAX);

        Self {
            width: cells(arena_width),
            height: cells(arena_height),
        }
    }

    /// Returns true when `cell` lies inside the grid.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && cell.x < i32::from(self.width)
            && cell.y < i32::from(self.height)
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Center cell, rounding towards the top-left.
    #[must_use]
    pub fn center(self) -> Cell {
        Cell::new(i32::from(self.width / 2), i32::from(self.height / 2))
    }

    /// Samples a cell uniformly over the whole grid.
    #[must_use]
    pub fn random_cell<R: Rng + ?Sized>(self, rng: &mut R) -> Cell {
        debug_assert!(self.width > 0 && self.height > 0);

        Cell {
            x: rng.gen_range(0..i32::from(self.width)),
            y: rng.gen_range(0..i32::from(self.height)),
        }
    }

    /// Top-left arena coordinate of `cell` for a given segment size.
    #[must_use]
    pub fn cell_to_arena(cell: Cell, segment_size: u32) -> (i64, i64) {
        let size = i64::from(segment_size);
        (i64::from(cell.x) * size, i64::from(cell.y) * size)
    }

    /// Cell containing the arena coordinate `(x, y)`.
    #[must_use]
    pub fn arena_to_cell(x: i64, y: i64, segment_size: u32) -> Cell {
        let size = i64::from(segment_size.max(1));
        let to_axis = |value: i64| {
            let cell = value.div_euclid(size);
            i32::try_from(cell).unwrap_or(if cell < 0 { i32::MIN } else { i32::MAX })
        };

        Cell {
            x: to_axis(x),
            y: to_axis(y),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{Cell, Grid};
    use crate::input::Direction;

    #[test]
    fn classic_arena_is_eighty_cells_square() {
        let grid = Grid::from_arena(800, 800, 10);
        assert_eq!(grid, Grid::new(80, 80));
        assert_eq!(grid.total_cells(), 6400);
        assert_eq!(grid.center(), Cell::new(40, 40));
    }

    #[test]
    fn partial_segments_are_dropped() {
        assert_eq!(Grid::from_arena(805, 99, 10), Grid::new(80, 9));
    }

    #[test]
    fn contains_checks_all_four_edges() {
        let grid = Grid::new(5, 4);

        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(4, 3)));
        assert!(!grid.contains(Cell::new(-1, 0)));
        assert!(!grid.contains(Cell::new(0, -1)));
        assert!(!grid.contains(Cell::new(5, 0)));
        assert!(!grid.contains(Cell::new(0, 4)));
    }

    #[test]
    fn step_follows_screen_coordinates() {
        let origin = Cell::new(3, 3);

        assert_eq!(origin.step(Direction::Up), Cell::new(3, 2));
        assert_eq!(origin.step(Direction::Down), Cell::new(3, 4));
        assert_eq!(origin.step(Direction::Left), Cell::new(2, 3));
        assert_eq!(origin.step(Direction::Right), Cell::new(4, 3));
    }

    #[test]
    fn random_cells_stay_inside_and_cover_the_grid() {
        let grid = Grid::new(3, 2);
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..500 {
            let cell = grid.random_cell(&mut rng);
            assert!(grid.contains(cell));
            seen.insert(cell);
        }

        assert_eq!(seen.len(), grid.total_cells());
    }

    #[test]
    fn arena_conversion_aligns_to_segments() {
        assert_eq!(Grid::cell_to_arena(Cell::new(32, 40), 10), (320, 400));
        assert_eq!(Grid::arena_to_cell(329, 400, 10), Cell::new(32, 40));
        assert_eq!(Grid::arena_to_cell(-1, 0, 10), Cell::new(-1, 0));
    }
}
