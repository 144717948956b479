/// Input file read when no path is given on the command line
pub const DEFAULT_INPUT_PATH: &str = "input.txt";

/// Report file written when no path is given on the command line
pub const DEFAULT_OUTPUT_PATH: &str = "output.txt";

/// Probability that a cell starts alive in a random grid
pub const RANDOM_ALIVE_PROBABILITY: f64 = 0.2;

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

// ============================================
// Report Layout
// ============================================

/// Width of the category name column in the report table
pub const NAME_COLUMN_WIDTH: usize = 14;

/// Width of the count column in the report table
pub const COUNT_COLUMN_WIDTH: usize = 6;

/// Width of the percentage column in the report table
pub const PERCENT_COLUMN_WIDTH: usize = 8;

/// Decimal places printed for percentages
pub const PERCENT_PRECISION: usize = 2;
