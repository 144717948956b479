//! Simulation input file.
//!
//! ```text
//! <width> <height>
//! <generations>
//! <x> <y>        one line per initially alive cell
//! ```
//!
//! `x` is the row and `y` the column, both 0-based. Blank lines are ignored.

use std::path::Path;
use std::str::FromStr;

use crate::error::{GridError, InputError};
use crate::simulation::Grid;

/// Parsed run parameters and initial live cells
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationInput {
    pub width: usize,
    pub height: usize,
    pub generations: u64,
    pub live_cells: Vec<(usize, usize)>,
}

impl SimulationInput {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Read {} bytes from {}", text.len(), path.as_ref().display());
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, InputError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (line_no, line) = lines.next().ok_or(InputError::Empty)?;
        let (width, height): (usize, usize) = parse_pair(line_no, line)?;
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height }.into());
        }

        let (line_no, line) = lines.next().ok_or(InputError::MissingGenerations)?;
        let generations = parse_field(line_no, line, "generation count")?;

        let mut live_cells = Vec::new();
        for (line_no, line) in lines {
            let (x, y) = parse_pair(line_no, line)?;
            if x >= height || y >= width {
                return Err(InputError::malformed(
                    line_no,
                    format!("cell ({}, {}) is outside a {}x{} grid", x, y, width, height),
                ));
            }
            live_cells.push((x, y));
        }

        Ok(Self {
            width,
            height,
            generations,
            live_cells,
        })
    }

    /// Build generation 0: the listed cells alive, all others dead
    pub fn initial_grid(&self) -> Result<Grid, GridError> {
        Grid::from_live_cells(self.width, self.height, self.live_cells.iter().copied())
    }
}

fn parse_field<T: FromStr>(line_no: usize, field: &str, what: &str) -> Result<T, InputError> {
    field
        .parse()
        .map_err(|_| InputError::malformed(line_no, format!("invalid {}: {:?}", what, field)))
}

fn parse_pair(line_no: usize, line: &str) -> Result<(usize, usize), InputError> {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(a), Some(b), None) => Ok((
            parse_field(line_no, a, "number")?,
            parse_field(line_no, b, "number")?,
        )),
        _ => Err(InputError::malformed(
            line_no,
            format!("expected two numbers, got {:?}", line),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::Cell;

    #[test]
    fn test_parse_reference_layout() {
        let input = SimulationInput::parse("6 4\n10\n1 2\n3 5\n").unwrap();
        assert_eq!(input.width, 6);
        assert_eq!(input.height, 4);
        assert_eq!(input.generations, 10);
        assert_eq!(input.live_cells, vec![(1, 2), (3, 5)]);

        let grid = input.initial_grid().unwrap();
        assert_eq!(grid.width(), 6);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.get(3, 5), Cell::Alive);
        assert_eq!(grid.live_count(), 2);
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let input = SimulationInput::parse("3 3\r\n\r\n0\r\n1 1\r\n\r\n").unwrap();
        assert_eq!(input.generations, 0);
        assert_eq!(input.live_cells, vec![(1, 1)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(SimulationInput::parse(""), Err(InputError::Empty)));
        assert!(matches!(
            SimulationInput::parse("4 4\n"),
            Err(InputError::MissingGenerations)
        ));
    }

    #[test]
    fn test_zero_dimensions() {
        assert!(matches!(
            SimulationInput::parse("0 4\n1\n"),
            Err(InputError::Grid(GridError::EmptyDimensions { width: 0, height: 4 }))
        ));
    }

    #[test]
    fn test_malformed_lines_report_line_number() {
        assert!(matches!(
            SimulationInput::parse("4 4\nten\n"),
            Err(InputError::Malformed { line: 2, .. })
        ));
        assert!(matches!(
            SimulationInput::parse("4 4\n1\n1 2 3\n"),
            Err(InputError::Malformed { line: 3, .. })
        ));
        assert!(matches!(
            SimulationInput::parse("4 4\n1\n-1 2\n"),
            Err(InputError::Malformed { line: 3, .. })
        ));
    }

    #[test]
    fn test_out_of_bounds_cell() {
        // 5 columns, 2 rows: x must be below 2
        let err = SimulationInput::parse("5 2\n1\n2 0\n").unwrap_err();
        assert!(matches!(err, InputError::Malformed { line: 3, .. }));
        assert!(SimulationInput::parse("5 2\n1\n1 4\n").is_ok());
    }

    #[test]
    fn test_missing_file() {
        let err = SimulationInput::from_path("/nonexistent/input.txt").unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }
}
