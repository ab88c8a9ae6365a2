//! Sweeper CLI - clean tabular datasets from the terminal or a browser.

mod cli;
mod commands;
mod server;
mod web;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Clean {
            file,
            output,
            options,
            rows,
            report,
        } => commands::clean::run(file, output, options.to_options(), rows, report, cli.verbose),

        Commands::Preview { file, rows, json } => {
            commands::preview::run(file, rows, json, cli.verbose)
        }

        Commands::Serve { port, no_open } => commands::serve::run(port, no_open, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Send library logs to stderr. `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
