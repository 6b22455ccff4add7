//! coverage — command-line harness for the swarm_cover optimiser.
//!
//! Scatters users and drones uniformly over the service area, runs either
//! update variant, and prints the best layout found.  Optionally writes the
//! replay trajectory as CSV and the full outcome as JSON.
//!
//! ```text
//! coverage --variant hybrid --drones 8 --users 120 --output output/run1
//! coverage --config run.json --json outcome.json --verbose
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sc_core::{Area, SwarmConfig, Variant};
use sc_engine::{CancelToken, EngineObserver, NoopObserver, RunOutcome, StepReport, run};
use sc_output::{CsvWriter, OutputWriter, TrajectoryObserver};
use sc_population::ScenarioBuilder;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "coverage")]
#[command(about = "Optimise drone placement for user coverage")]
struct Cli {
    /// Update variant: dispersive, hybrid
    #[arg(long)]
    variant: Option<String>,

    /// JSON run configuration; missing fields keep their defaults
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Number of drones
    #[arg(long, short, default_value = "6")]
    drones: usize,

    /// Number of ground users
    #[arg(long, short, default_value = "80")]
    users: usize,

    /// Seed for scattering users and drones (engine seed comes from the config)
    #[arg(long, default_value = "7")]
    scenario_seed: u64,

    /// Override the iteration budget
    #[arg(long, short)]
    iterations: Option<u64>,

    /// Directory for trajectory.csv and iterations.csv
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Write the full outcome as JSON to this file
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print progress every N iterations (0 disables)
    #[arg(long, default_value = "10")]
    progress: u64,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn parse_variant(s: &str) -> Option<Variant> {
    match s.to_lowercase().as_str() {
        "dispersive" | "basic" => Some(Variant::Dispersive),
        "hybrid" | "advanced" => Some(Variant::Hybrid),
        _ => None,
    }
}

fn load_config(cli: &Cli) -> Result<SwarmConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => SwarmConfig::default(),
    };

    if let Some(v) = &cli.variant {
        let Some(variant) = parse_variant(v) else {
            bail!("unknown variant: {v} (expected dispersive or hybrid)");
        };
        config.variant = variant;
    }
    if let Some(n) = cli.iterations {
        config.max_iterations = n;
    }
    config.validate()?;
    Ok(config)
}

// ── Observer wrapper for progress lines ───────────────────────────────────────

struct Progress<O: EngineObserver> {
    inner:    O,
    interval: u64,
    improved: u64,
}

impl<O: EngineObserver> Progress<O> {
    fn new(inner: O, interval: u64) -> Self {
        Self { inner, interval, improved: 0 }
    }
}

impl<O: EngineObserver> EngineObserver for Progress<O> {
    fn on_iteration_start(&mut self, iteration: sc_core::Iteration) {
        self.inner.on_iteration_start(iteration);
    }

    fn on_iteration_end(&mut self, report: &StepReport) {
        if report.improved {
            self.improved += 1;
        }
        if self.interval > 0 && report.iteration.0 % self.interval == 0 {
            println!("  {:>6}  best {:.4}", report.iteration, report.best_score);
        }
        self.inner.on_iteration_end(report);
    }

    fn on_snapshot(&mut self, iteration: sc_core::Iteration, configuration: &sc_population::Configuration) {
        self.inner.on_snapshot(iteration, configuration);
    }

    fn on_run_end(&mut self, completed: sc_core::Iteration, termination: sc_engine::Termination) {
        self.inner.on_run_end(completed, termination);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = load_config(&cli)?;
    println!("=== coverage — swarm drone placement ===");
    println!(
        "Variant: {}  |  Drones: {}  |  Users: {}  |  Budget: {}  |  Seed: {}",
        config.variant, cli.drones, cli.users, config.max_iterations, config.seed
    );
    println!(
        "Area: {0} × {0}  |  Radius: {1}  |  Weights: {2}/{3}",
        config.area_side, config.coverage_radius, config.weights.coverage, config.weights.efficiency
    );
    println!();

    // 1. Scenario.
    let mut scenario = ScenarioBuilder::new(Area::new(config.area_side), cli.scenario_seed);
    let users = scenario.targets(cli.users);
    let drones = scenario.configuration(cli.drones);
    let initial = drones.clone();

    // 2. Run, with or without CSV output.
    let t0 = Instant::now();
    let outcome = match &cli.output {
        Some(dir) => run_with_csv(dir, users, drones, config, cli.progress)?,
        None => {
            let mut obs = Progress::new(NoopObserver, cli.progress);
            run(users, drones, config, CancelToken::new(), &mut obs)?
        }
    };
    let elapsed = t0.elapsed();
    info!(elapsed_ms = elapsed.as_millis() as u64, "optimisation complete");

    // 3. Summary.
    println!();
    println!("Finished in {:.3} s: {} after {} iterations", elapsed.as_secs_f64(), outcome.termination, outcome.iterations);
    println!(
        "Best: coverage {:.3}  efficiency {:.3}  fitness {:.4}",
        outcome.score.coverage, outcome.score.efficiency, outcome.score.fitness
    );
    if let Some(p) = outcome.best_point {
        println!("Global best point: {p}");
    }
    println!();

    // 4. Layout table.
    println!("{:<8} {:<22} {:<22}", "Drone", "Start", "Best");
    println!("{}", "-".repeat(52));
    for (i, (start, best)) in initial.iter().zip(outcome.best.iter()).enumerate() {
        println!("{:<8} {:<22} {:<22}", i, start.to_string(), best.to_string());
    }

    if let Some(path) = &cli.json {
        write_json(path, &outcome)?;
        println!();
        println!("Outcome written to {}", path.display());
    }

    Ok(())
}

fn run_with_csv(
    dir:      &Path,
    users:    Vec<sc_population::Target>,
    drones:   sc_population::Configuration,
    config:   SwarmConfig,
    progress: u64,
) -> Result<RunOutcome> {
    let writer = CsvWriter::new(dir)?;
    let mut obs = Progress::new(TrajectoryObserver::new(writer), progress);
    let outcome = run(users, drones, config, CancelToken::new(), &mut obs)?;

    let mut inner = obs.inner;
    if let Some(e) = inner.take_error() {
        eprintln!("output error: {e}");
    }
    let mut writer = inner.into_writer();
    writer.finish()?;

    println!();
    println!("  trajectory.csv : {} iterations", outcome.trajectory.len());
    println!("  iterations.csv : {} rows", outcome.iterations);
    println!("  improvements   : {}", obs.improved);
    Ok(outcome)
}

fn write_json(path: &Path, outcome: &RunOutcome) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let text = serde_json::to_string_pretty(outcome)?;
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
