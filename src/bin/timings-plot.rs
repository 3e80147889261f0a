// EN: src/bin/timings-plot.rs

use anyhow::Result;
use clap::Parser;
use colored::*;
use timings_plot::cli::{Cli, handlers};

/// The main entry point of the `timings-plot` application.
/// It sets up logging, parses arguments, runs the pipeline,
/// and performs centralized error handling.
fn main() {
    env_logger::init();

    // Usage errors are reported by clap here, before any side effect.
    let cli = Cli::parse();

    if let Err(e) = run_cli(&cli) {
        // --- Centralized Error Handling ---
        // Every failure is fatal: print the full cause chain and exit with a failure code.
        eprintln!("\n{}: {:#}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_cli(cli: &Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);
    handlers::plot::handle(cli)?;
    Ok(())
}
