//! Conway's Game of Life on a torus, with a per-generation census of
//! well-known life forms.
//!
//! ```
//! use life_census::patterns::{Catalog, PatternRecognizer};
//! use life_census::simulation::Grid;
//!
//! let grid = Grid::from_rows(&["....", ".##.", ".##.", "...."]).unwrap();
//! let next = grid.step();
//! assert_eq!(next, grid);
//!
//! let catalog = Catalog::reference();
//! let report = PatternRecognizer::new(&catalog).classify(&next);
//! assert_eq!(report.count("block"), 1);
//! assert_eq!(report.percentage("block"), 100.0);
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod patterns;
pub mod report;
pub mod simulation;

pub use app::App;
pub use error::{GridError, InputError};
