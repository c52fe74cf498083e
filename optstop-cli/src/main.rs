mod chart;
mod config;
mod output;

use clap::Parser;
use optstop_core::{
    analyze, linspace, run_sweep, summary_text, SweepOptions, SweepResult,
    DEFAULT_GRID_POINTS, DEFAULT_TRIALS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(
    name = "optstop",
    version,
    about = "Monte Carlo simulation of the secretary (optimal stopping) problem"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Sweep rejection thresholds, report results, and render the chart
    Run(RunArgs),
    /// Print the closed-form theoretical analysis only
    Theory,
    /// Create a default config file at ~/.config/optstop/config.toml
    Init,
}

#[derive(Parser)]
struct RunArgs {
    /// Candidate pool size (repeatable; default: 100 and 1000)
    #[arg(long = "pool-size")]
    pool_sizes: Vec<usize>,

    /// Monte Carlo trials per threshold
    #[arg(long)]
    trials: Option<usize>,

    /// Number of grid points over the rejection-fraction range [0, 1]
    #[arg(long)]
    grid_points: Option<usize>,

    /// RNG seed for a reproducible run (default: seeded from the OS)
    #[arg(long)]
    seed: Option<u64>,

    /// Output path for the rendered chart
    #[arg(long)]
    output: Option<PathBuf>,

    /// Skip chart rendering
    #[arg(long)]
    no_chart: bool,

    /// Output JSON instead of the textual report
    #[arg(long)]
    json: bool,

    /// Show progress during execution
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (default: ~/.config/optstop/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run_simulation(args),
        Commands::Theory => println!("{}", summary_text(&analyze())),
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your default pool sizes, trial count, etc.");
        }
    }
}

fn run_simulation(args: RunArgs) {
    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let pool_sizes = if !args.pool_sizes.is_empty() {
        args.pool_sizes.clone()
    } else {
        cfg.pool_sizes.unwrap_or_else(|| vec![100, 1000])
    };
    let trials = args.trials.or(cfg.trials).unwrap_or(DEFAULT_TRIALS);
    let grid_points = args.grid_points.or(cfg.grid_points).unwrap_or(DEFAULT_GRID_POINTS);
    let output_path = args.output.clone()
        .or(cfg.output.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("optimal_stopping.png"));

    // Validate before any simulation work: a bad argument must never
    // produce partial statistics.
    if pool_sizes.is_empty() {
        bail("No pool sizes configured");
    }
    if let Some(&bad) = pool_sizes.iter().find(|&&n| n < 1) {
        bail(format!("Pool size must be at least 1, got {bad}"));
    }
    if trials < 1 {
        bail("Trial count must be at least 1");
    }
    if grid_points < 1 {
        bail("Grid must have at least 1 point");
    }

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let theory = analyze();
    if !args.json {
        println!("{}", summary_text(&theory));
    }

    let options = SweepOptions { trials, thresholds: linspace(grid_points) };

    let mut sweeps: Vec<SweepResult> = Vec::with_capacity(pool_sizes.len());
    for &n in &pool_sizes {
        if args.verbose {
            eprintln!(
                "Running simulation for pool size {n} ({} thresholds x {trials} trials)...",
                options.thresholds.len(),
            );
        }
        sweeps.push(run_sweep(n, &options, &mut rng));
    }

    if args.json {
        output::print_json(&theory, &sweeps);
    } else {
        for sweep in &sweeps {
            output::print_table(sweep);
        }
    }

    if !args.no_chart {
        // The sweep data above is already printed; a render failure is only
        // a warning, never a reason to discard or redo the simulation.
        match chart::render(&output_path, &sweeps, &theory) {
            Ok(()) => {
                if !args.json {
                    println!("\nPlot saved as '{}'", output_path.display());
                }
            }
            Err(e) => {
                eprintln!("Warning: failed to render chart to {}: {e}", output_path.display());
            }
        }
    }
}
