// src/main.rs

use anyhow::Result;
use clap::Parser;
use projcat::cli::Cli;
use projcat::config::path_resolve::absolutize;
use projcat::config::ConfigBuilder;
use projcat::errors::Error;
use projcat::output::{write_config_dump, write_report};
use projcat::reporter::{DecisionReporter, TraceReporter};
use projcat::run;
use projcat::signal::setup_signal_handler;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never mix into the console report. RUST_LOG,
    // when set, replaces the default level entirely.
    let default_directive = if cfg!(debug_assertions) {
        "projcat=debug"
    } else {
        "projcat=warn"
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .init();

    log::info!("Starting projcat v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Configuration ---
    let cli = Cli::parse();
    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully.");

    let token = setup_signal_handler()?;

    // --- Execution ---
    if config.verbose {
        write_config_dump(&mut io::stdout(), &config)?;
    }
    let mut trace = TraceReporter::new(io::stdout());
    let reporter: Option<&mut dyn DecisionReporter> = if config.verbose {
        Some(&mut trace)
    } else {
        None
    };

    let result = run(&config, &token, reporter);

    // --- Reporting & Error Handling ---
    match result {
        Ok(summary) => {
            let output_path = config.output_path.clone().unwrap_or_default();
            let display_path = absolutize(&output_path).unwrap_or(output_path);
            write_report(&mut io::stdout(), &summary, &display_path)?;
        }
        Err(Error::Interrupted) => {
            eprintln!("\nOperation cancelled.");
            std::process::exit(130);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
