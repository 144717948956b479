use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use life_census::config::{DEFAULT_INPUT_PATH, DEFAULT_LOG_FILTER, DEFAULT_OUTPUT_PATH};
use life_census::input::SimulationInput;
use life_census::patterns::Catalog;
use life_census::report::ReportWriter;
use life_census::App;

#[derive(Parser, Debug)]
#[command(name = "life-census")]
#[command(about = "Toroidal Game of Life with a life-form census", long_about = None)]
struct Args {
    /// Simulation input: "width height", generation count, then one "x y" per live cell
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Report file to write
    #[arg(default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER),
    )
    .init();

    let args = Args::parse();

    log::info!("Reading simulation input from {}", args.input.display());
    let input = SimulationInput::from_path(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    log::info!(
        "Universe size: {}x{}, {} generations, {} live cells",
        input.width,
        input.height,
        input.generations,
        input.live_cells.len()
    );

    let grid = input.initial_grid()?;
    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    let mut writer = ReportWriter::new(BufWriter::new(file));
    writer.write_header_today(input.width, input.height)?;

    let mut app = App::new(grid, Catalog::reference());
    app.run(input.generations, |generation, _, report| {
        writer.write_generation(generation, report)
    })
    .with_context(|| format!("failed to write {}", args.output.display()))?;
    writer.flush()?;

    log::info!(
        "Finished after {} generations, {} live cells remain; report written to {}",
        app.generation(),
        app.grid().live_count(),
        args.output.display()
    );
    Ok(())
}
