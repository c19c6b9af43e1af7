//! Command-line entry point for `curvekit`.
//!
//! Generates a batch of random curves, prints their position and derivative
//! at the configured parameter, then the sorted circle radii and their sum.

use anyhow::Result;
use clap::Parser;
use curvekit::config::DEFAULT_COUNT;
use curvekit::operations::{CurveFactory, Pipeline};
use curvekit::PipelineConfig;
use tracing_subscriber::EnvFilter;

/// Random curve generation and circle statistics.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Number of curves to generate.
    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// Seed for reproducible runs; drawn from OS entropy when omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Install a stderr subscriber; `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "curvekit=debug",
        _ => "curvekit=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut factory = match cli.seed {
        Some(seed) => {
            tracing::info!(seed, "using fixed seed");
            CurveFactory::from_seed(seed)
        }
        None => CurveFactory::from_entropy(),
    };

    let config = PipelineConfig::new().with_count(cli.count);
    let report = Pipeline::new(config).run(&mut factory)?;
    print!("{report}");
    Ok(())
}
