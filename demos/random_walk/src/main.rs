//! random_walk — reference scenario for the rust_cellsim framework.
//!
//! Places 200 cells uniformly in the square [700, 800]² (z = 0, diameter 7.5)
//! inside a closed cube [0, 1000]³, gives each a move module drawing a
//! displacement from [-2, 2] per axis, and runs 500 steps with a CSV snapshot
//! every 2 steps.
//!
//! ```text
//! cargo run --release -p random_walk -- --config demos/random_walk/random_walk.toml
//! RUST_LOG=debug cargo run -p random_walk -- --steps 20 --output /tmp/walk
//! ```

mod config;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use cs_agent::PopulationBuilder;
use cs_behavior::{BehaviorModule, MoveModule};
use cs_output::{CsvWriter, SimOutputObserver};
use cs_sim::SimBuilder;

use config::DemoConfig;

const DEFAULT_OUTPUT_DIR: &str = "output/random_walk";

#[derive(Parser)]
#[command(name = "random_walk")]
#[command(version, about = "Random-walk cell population in a bounded cube", long_about = None)]
struct Args {
    /// TOML configuration file (defaults reproduce the reference scenario)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for the CSV files
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of steps to simulate (overrides `sim.total_steps`)
    #[arg(short, long)]
    steps: Option<u64>,
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut cfg = match &args.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    if let Some(steps) = args.steps {
        cfg.sim.total_steps = steps;
    }
    let output_dir = args
        .output
        .or_else(|| cfg.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    println!("=== rust_cellsim random walk ===");
    println!(
        "Agents: {}  |  Steps: {}  |  Seed: {}  |  Export every {} steps",
        cfg.population.count, cfg.sim.total_steps, cfg.sim.seed, cfg.sim.export_interval_steps
    );
    println!();

    // ── Population ────────────────────────────────────────────────────────────
    let (lo, hi) = (cfg.movement.min_step, cfg.movement.max_step);
    let population = PopulationBuilder::new(cfg.population.clone(), cfg.sim.seed)
        .build_with(|_| vec![Box::new(MoveModule::with_range(lo, hi)) as Box<dyn BehaviorModule>])
        .context("failed to build population")?;

    // ── Simulation ────────────────────────────────────────────────────────────
    let mut sim = SimBuilder::new(cfg.sim.clone(), population)
        .build()
        .context("invalid simulation configuration")?;

    let writer = CsvWriter::new(&output_dir)
        .with_context(|| format!("failed to open output in {}", output_dir.display()))?;
    let mut obs = SimOutputObserver::new(writer);

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        log::error!("output error: {e}");
        return Err(e).context("writing simulation output");
    }

    let outside = sim
        .population
        .states()
        .filter(|s| !sim.boundary().contains(s.position()))
        .count();

    println!("Simulated {} steps in {:.2?} ({})", sim.current_step().0, elapsed, sim.clock());
    println!("Agents outside the boundary: {outside}");
    println!("Output written to {}", output_dir.display());
    println!("Simulation completed successfully!");

    Ok(())
}
