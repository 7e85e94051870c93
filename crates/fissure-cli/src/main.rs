//! Fissure CLI: crack propagation runs, scenario validation and listings.

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "fissure")]
#[command(version, about = "Fissure: crack-front propagation and crack surface reconstruction")]
struct Cli {
    /// Log per-step progress (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where to write run results.
#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Write run metrics as CSV.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Write the final crack surface as Wavefront OBJ.
    #[arg(long)]
    pub obj: Option<String>,

    /// Write every step's surface to a JSON sequence file.
    #[arg(long)]
    pub frames: Option<String>,

    /// Print metrics as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run built-in scenarios.
    Run {
        /// Which scenario to run (box_breakout, layered_box, plane_probe, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Override the scenario's step budget.
        #[arg(long)]
        steps: Option<u32>,

        /// Override the restlessness seed.
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Run a simulation from a scenario file (TOML or JSON).
    Simulate {
        /// Path to scenario config.
        #[arg(short, long, default_value = "scenario.toml")]
        config: String,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Validate a scenario file without running it.
    Validate {
        /// Path to scenario config.
        path: String,
    },

    /// List built-in scenarios and material presets.
    Scenarios {
        /// Print the named scenario as TOML.
        #[arg(long)]
        dump: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            scenario,
            steps,
            seed,
            out,
        } => commands::run(&scenario, steps, seed, &out, cli.verbose),
        Commands::Simulate { config, out } => commands::simulate(&config, &out, cli.verbose),
        Commands::Validate { path } => commands::validate(&path),
        Commands::Scenarios { dump } => commands::scenarios(dump.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
