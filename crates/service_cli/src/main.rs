//! esgrisk CLI - ESG Resilience Analytics from the Command Line
//!
//! This is the operational entry point for the esgrisk workspace.
//!
//! # Commands
//!
//! - `esgrisk correlate` - Correlation, significance and regression analysis
//! - `esgrisk resilience` - Shock resilience grid
//! - `esgrisk elasticity` - Resilience grid plus log-log elasticities
//! - `esgrisk report` - Elasticity run with console tables
//! - `esgrisk generate` - Write a synthetic dataset
//! - `esgrisk check` - Validate configuration against the dataset
//!
//! # Architecture
//!
//! As part of the **S**ervice layer in the A-I-P-S architecture, this crate
//! orchestrates all other layers to provide a unified command-line interface.

use clap::{Parser, Subcommand};
use infra_config::AnalysisConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod context;
mod error;
mod export;

pub use error::{CliError, Result};

use context::AnalysisContext;

/// ESG resilience analytics CLI
#[derive(Parser)]
#[command(name = "esgrisk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "esgrisk.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Correlations, significance screen, regressions and distribution charts
    Correlate,

    /// Shocked regressions over every ESG, metric and shock combination
    Resilience,

    /// Resilience grid plus ESG elasticities
    Elasticity,

    /// Elasticity run with console result tables
    Report,

    /// Write a synthetic ESG/financial dataset
    Generate {
        /// Number of companies
        #[arg(short, long, default_value = "200")]
        rows: usize,

        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Probability that a numeric cell is left empty
        #[arg(short, long, default_value = "0.0")]
        missing_rate: f64,

        /// Output CSV file (defaults to the configured file_path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check configuration and dataset columns
    Check,
}

fn init_tracing(verbose: bool, log_level: &str) {
    let fallback = if verbose { "debug" } else { log_level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AnalysisConfig::load_or_default(&cli.config)?.with_env_override()?;
    init_tracing(cli.verbose, &config.log_level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Correlate => commands::correlate::run(&AnalysisContext::new(config)?),
        Commands::Resilience => commands::resilience::run(&AnalysisContext::new(config)?),
        Commands::Elasticity => commands::elasticity::run(&AnalysisContext::new(config)?),
        Commands::Report => commands::report::run(&AnalysisContext::new(config)?),
        Commands::Generate {
            rows,
            seed,
            missing_rate,
            output,
        } => {
            let output = output.unwrap_or_else(|| config.file_path.clone());
            commands::generate::run(rows, seed, missing_rate, &output)
        }
        Commands::Check => commands::check::run(&config, &cli.config),
    }
}
