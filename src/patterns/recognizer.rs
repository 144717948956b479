use crate::patterns::catalog::{Catalog, Pattern};
use crate::patterns::census::GenerationReport;
use crate::simulation::Grid;

/// Count the top-left alignments where `pattern` equals the grid exactly.
///
/// Only alignments fully inside the grid are tried; matching never wraps.
/// Overlapping matches are counted independently.
pub fn count_occurrences(grid: &Grid, pattern: &Pattern) -> usize {
    let (Some(last_row), Some(last_col)) = (
        grid.height().checked_sub(pattern.height()),
        grid.width().checked_sub(pattern.width()),
    ) else {
        return 0;
    };

    let mut found = 0;
    for top in 0..=last_row {
        for left in 0..=last_col {
            if matches_at(grid, pattern, top, left) {
                found += 1;
            }
        }
    }
    found
}

fn matches_at(grid: &Grid, pattern: &Pattern, top: usize, left: usize) -> bool {
    let cells = grid.cells();
    let width = grid.width();

    (0..pattern.height()).all(|row| {
        let offset = (top + row) * width + left;
        (0..pattern.width()).all(|col| cells[offset + col] == pattern.cell(row, col))
    })
}

/// Scans grid snapshots against a borrowed catalog.
///
/// Holds no mutable state: every `classify` call is independent, so one
/// recognizer can be shared across threads.
#[derive(Clone, Copy, Debug)]
pub struct PatternRecognizer<'a> {
    catalog: &'a Catalog,
}

impl<'a> PatternRecognizer<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Count every category's variants in `grid` and normalize to percentages
    pub fn classify(&self, grid: &Grid) -> GenerationReport {
        let counts = self.catalog.categories().iter().map(|category| {
            let count: usize = category
                .variants
                .iter()
                .map(|variant| count_occurrences(grid, variant))
                .sum();
            (category.name, category.label, count)
        });

        let report = GenerationReport::from_counts(counts);
        log::debug!(
            "Classified {}x{} grid: {} matches across {} categories",
            grid.width(),
            grid.height(),
            report.total(),
            self.catalog.len()
        );
        report
    }
}
