use std::time::{Duration, Instant};

use crate::patterns::{Catalog, GenerationReport, PatternRecognizer};
use crate::simulation::Grid;

/// Application state: the current generation plus the catalog it is scanned
/// against
pub struct App {
    grid: Grid,
    catalog: Catalog,
    generation: u64,
    rate_counter: RateCounter,
}

impl App {
    pub fn new(grid: Grid, catalog: Catalog) -> Self {
        Self {
            grid,
            catalog,
            generation: 0,
            rate_counter: RateCounter::new(),
        }
    }

    /// Current grid snapshot
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of steps applied so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Census of the current grid
    pub fn census(&self) -> GenerationReport {
        PatternRecognizer::new(&self.catalog).classify(&self.grid)
    }

    /// Replace the grid with its successor and return the new generation's
    /// census. The previous grid is dropped.
    pub fn advance(&mut self) -> GenerationReport {
        self.grid = self.grid.step();
        self.generation += 1;

        let cells = self.grid.cells().len();
        if let Some(throughput) = self.rate_counter.record(Instant::now(), cells) {
            log::info!(
                "Generation {} ({:.0} generations/s, {:.0} cell updates/s)",
                self.generation,
                throughput.generations_per_sec,
                throughput.cells_per_sec
            );
        }

        self.census()
    }

    /// Advance `generations` times, handing each new grid and its census to
    /// `on_generation` together with its generation index (1-based).
    ///
    /// Stops at the first error returned by the callback.
    pub fn run<F, E>(&mut self, generations: u64, mut on_generation: F) -> Result<(), E>
    where
        F: FnMut(u64, &Grid, &GenerationReport) -> Result<(), E>,
    {
        log::info!(
            "Running {} generations on a {}x{} grid",
            generations,
            self.grid.width(),
            self.grid.height()
        );

        for _ in 0..generations {
            let report = self.advance();
            log::debug!(
                "Generation {}: {} live cells, {} life forms",
                self.generation,
                self.grid.live_count(),
                report.total()
            );
            on_generation(self.generation, &self.grid, &report)?;
        }

        Ok(())
    }
}

const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Stepping speed measured over one reporting window
#[derive(Clone, Copy, Debug, PartialEq)]
struct Throughput {
    generations_per_sec: f64,
    cells_per_sec: f64,
}

/// Accumulates generations and cell updates between log lines
struct RateCounter {
    window_start: Instant,
    generations: u64,
    cell_updates: u64,
}

impl RateCounter {
    fn new() -> Self {
        Self {
            window_start: Instant::now(),
            generations: 0,
            cell_updates: 0,
        }
    }

    /// Record one generation of `cells` updates at `now`. Returns the window's
    /// throughput once `REPORT_INTERVAL` has elapsed, then starts a new window.
    fn record(&mut self, now: Instant, cells: usize) -> Option<Throughput> {
        self.generations += 1;
        self.cell_updates += cells as u64;

        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < REPORT_INTERVAL {
            return None;
        }

        let secs = elapsed.as_secs_f64();
        let throughput = Throughput {
            generations_per_sec: self.generations as f64 / secs,
            cells_per_sec: self.cell_updates as f64 / secs,
        };
        self.window_start = now;
        self.generations = 0;
        self.cell_updates = 0;
        Some(throughput)
    }
}
