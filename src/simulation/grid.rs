use std::fmt;

use rand::Rng;

use crate::error::GridError;
use crate::simulation::cell::Cell;

/// Dense toroidal grid of cells, stored row-major.
///
/// A `Grid` is never mutated after it has been handed out by `step`; each
/// generation produces a fresh grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Wrap existing row-major storage, failing fast when the shape does not
    /// match the declared dimensions
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        if cells.len() != width * height {
            return Err(GridError::ShapeMismatch {
                width,
                height,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Create a grid where only the listed `(x, y)` cells are alive.
    ///
    /// `x` is the row (`0 <= x < height`) and `y` the column (`0 <= y < width`).
    pub fn from_live_cells<I>(width: usize, height: usize, live: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new(width, height)?;
        for (x, y) in live {
            if x >= height || y >= width {
                return Err(GridError::OutOfBounds {
                    x,
                    y,
                    width,
                    height,
                });
            }
            grid.set(x, y, Cell::Alive);
        }
        Ok(grid)
    }

    /// Parse a grid from `#`/`.` rows. Every row must have the same length.
    pub fn from_rows(rows: &[&str]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        check_dimensions(width, height)?;

        let mut cells = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    actual: len,
                });
            }
            for (col, c) in line.chars().enumerate() {
                let cell =
                    Cell::from_char(c).ok_or(GridError::InvalidCell { row, col, found: c })?;
                cells.push(cell);
            }
        }

        Self::from_cells(width, height, cells)
    }

    /// Create a grid where each cell is independently alive with
    /// `alive_probability`
    pub fn random<R: Rng>(
        width: usize,
        height: usize,
        alive_probability: f64,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        if !(0.0..=1.0).contains(&alive_probability) {
            return Err(GridError::InvalidProbability(alive_probability));
        }

        let cells = (0..width * height)
            .map(|_| Cell::from(rng.gen_bool(alive_probability)))
            .collect();

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at `(row, col)`. Panics when out of bounds, like slice indexing.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.height && col < self.width,
            "cell ({}, {}) out of bounds",
            row,
            col
        );
        self.cells[row * self.width + col]
    }

    /// Overwrite one cell. Only constructors call this; a published grid is
    /// never mutated.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        assert!(
            row < self.height && col < self.width,
            "cell ({}, {}) out of bounds",
            row,
            col
        );
        self.cells[row * self.width + col] = cell;
    }

    /// Row-major cell storage
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Count live cells among the 8 neighbors, wrapping at every edge
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0u8;

        for row_offset in -1isize..=1 {
            for col_offset in -1isize..=1 {
                if row_offset == 0 && col_offset == 0 {
                    continue;
                }

                let neighbor_row =
                    (row as isize + row_offset).rem_euclid(self.height as isize) as usize;
                let neighbor_col =
                    (col as isize + col_offset).rem_euclid(self.width as isize) as usize;

                count += self.cells[neighbor_row * self.width + neighbor_col] as u8;
            }
        }

        count
    }

    /// Compute the next generation into a new grid; `self` is left untouched
    pub fn step(&self) -> Grid {
        let mut next = Vec::with_capacity(self.cells.len());

        for row in 0..self.height {
            for col in 0..self.width {
                let current = self.cells[row * self.width + col];
                next.push(current.next(self.count_live_neighbors(row, col)));
            }
        }

        Grid {
            width: self.width,
            height: self.height,
            cells: next,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|c| c.to_char()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::EmptyDimensions { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RANDOM_ALIVE_PROBABILITY;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(100, 50).unwrap();
        assert_eq!(grid.cells().len(), 5000);
        assert_eq!(grid.width(), 100);
        assert_eq!(grid.height(), 50);
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 4),
            Err(GridError::EmptyDimensions { width: 0, height: 4 })
        );
        assert!(Grid::from_rows(&[]).is_err());
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let err = Grid::from_cells(3, 3, vec![Cell::Dead; 8]).unwrap_err();
        assert_eq!(
            err,
            GridError::ShapeMismatch {
                width: 3,
                height: 3,
                actual: 8
            }
        );
    }

    #[test]
    fn test_from_live_cells_uses_row_column_order() {
        // 2 rows, 4 columns: x indexes rows, y indexes columns
        let grid = Grid::from_live_cells(4, 2, [(1, 3), (0, 0)]).unwrap();
        assert_eq!(grid.get(1, 3), Cell::Alive);
        assert_eq!(grid.get(0, 0), Cell::Alive);
        assert_eq!(grid.live_count(), 2);

        let err = Grid::from_live_cells(4, 2, [(2, 0)]).unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { x: 2, y: 0, .. }));
        assert!(Grid::from_live_cells(4, 2, [(0, 4)]).is_err());
    }

    #[test]
    fn test_from_rows_validation() {
        assert!(matches!(
            Grid::from_rows(&["##", "#"]),
            Err(GridError::RaggedRow { row: 1, expected: 2, actual: 1 })
        ));
        assert!(matches!(
            Grid::from_rows(&["#x"]),
            Err(GridError::InvalidCell { row: 0, col: 1, found: 'x' })
        ));
    }

    #[test]
    fn test_set_overwrites_single_cell() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(1, 2, Cell::Alive);
        assert_eq!(grid.get(1, 2), Cell::Alive);
        assert_eq!(grid.live_count(), 1);

        grid.set(1, 2, Cell::Dead);
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_out_of_bounds_panics() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(2, 0, Cell::Alive);
    }

    #[test]
    fn test_display_roundtrips_rows() {
        let grid = Grid::from_rows(&[".#.", "##."]).unwrap();
        assert_eq!(grid.to_string(), ".#.\n##.\n");
    }

    #[test]
    fn test_all_dead_stays_dead() {
        let grid = Grid::new(7, 5).unwrap();
        assert_eq!(grid.step(), grid);
    }

    #[test]
    fn test_all_alive_dies_of_overpopulation() {
        let grid = Grid::from_cells(4, 4, vec![Cell::Alive; 16]).unwrap();
        assert_eq!(grid.step().live_count(), 0);
    }

    #[test]
    fn test_corner_wraps_to_opposite_corner() {
        let grid = Grid::from_live_cells(5, 6, [(5, 4)]).unwrap();
        assert_eq!(grid.count_live_neighbors(0, 0), 1);

        let grid = Grid::from_live_cells(5, 6, [(0, 0)]).unwrap();
        assert_eq!(grid.count_live_neighbors(5, 4), 1);
    }

    #[test]
    fn test_birth_across_corners() {
        // The three cells only touch (0, 0) through wraparound
        let grid = Grid::from_live_cells(6, 6, [(0, 5), (5, 0), (5, 5)]).unwrap();
        assert_eq!(grid.count_live_neighbors(0, 0), 3);
        assert_eq!(grid.step().get(0, 0), Cell::Alive);
    }

    #[test]
    fn test_block_is_still_life() {
        let grid = Grid::from_rows(&["....", ".##.", ".##.", "...."]).unwrap();
        assert_eq!(grid.step(), grid);
    }

    #[test]
    fn test_blinker_period_two() {
        let vertical = Grid::from_rows(&[".....", "..#..", "..#..", "..#..", "....."]).unwrap();
        let horizontal = Grid::from_rows(&[".....", ".....", ".###.", ".....", "....."]).unwrap();

        let once = vertical.step();
        assert_eq!(once, horizontal);
        assert_eq!(once.step(), vertical);
    }

    #[test]
    fn test_column_on_three_by_three_torus() {
        // Every cell of a 3x3 torus neighbors the other eight
        let column = Grid::from_rows(&[".#.", ".#.", ".#."]).unwrap();
        let once = column.step();
        assert_eq!(once.live_count(), 9);
        assert_eq!(once.step().live_count(), 0);
    }

    #[test]
    fn test_glider_crosses_edge() {
        let glider = Grid::from_rows(&[
            "......", "......", "......", "...#..", "....#.", "..###.",
        ])
        .unwrap();

        // A glider returns to its shape shifted by (1, 1) every 4 generations
        let mut grid = glider.clone();
        for _ in 0..4 {
            grid = grid.step();
        }
        assert_eq!(grid.live_count(), 5);
        assert_eq!(grid.get(0, 3), Cell::Alive); // bottom row wrapped to the top
        assert_eq!(grid.get(4, 4), Cell::Alive);
        assert_eq!(grid.get(5, 5), Cell::Alive);
        assert_eq!(grid.get(0, 5), Cell::Alive);
        assert_eq!(grid.get(0, 4), Cell::Alive);
    }

    #[test]
    fn test_step_leaves_input_untouched() {
        let grid = Grid::from_rows(&[".....", "..#..", "..#..", "..#..", "....."]).unwrap();
        let before = grid.clone();
        let _ = grid.step();
        assert_eq!(grid, before);
    }

    #[test]
    fn test_step_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::random(32, 24, 0.3, &mut rng).unwrap();
        assert_eq!(grid.step(), grid.step());
    }

    #[test]
    fn test_random_probability_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(Grid::random(10, 10, 0.0, &mut rng).unwrap().live_count(), 0);
        assert_eq!(Grid::random(10, 10, 1.0, &mut rng).unwrap().live_count(), 100);
        assert_eq!(
            Grid::random(10, 10, 1.5, &mut rng),
            Err(GridError::InvalidProbability(1.5))
        );
    }

    #[test]
    fn test_random_default_density() {
        let mut rng = StdRng::seed_from_u64(2024);
        let grid = Grid::random(100, 100, RANDOM_ALIVE_PROBABILITY, &mut rng).unwrap();
        let live = grid.live_count();
        assert!((1700..=2300).contains(&live), "unexpected live count {}", live);
    }

    #[test]
    fn test_random_is_reproducible_from_seed() {
        let a = Grid::random(20, 20, 0.2, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = Grid::random(20, 20, 0.2, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }
}
