mod cell;
mod grid;

pub use cell::Cell;
pub use grid::Grid;

/// Advance `grid` one generation under the toroidal B3/S23 rule
pub fn step(grid: &Grid) -> Grid {
    grid.step()
}
