//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sweeper::{CleaningOptions, MissingStrategy};

/// Sweeper: clean tabular datasets
#[derive(Parser)]
#[command(name = "sweeper")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean a CSV file and write the result
    Clean {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path for cleaned data (default: cleaned_data.csv next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        options: CleanArgs,

        /// Number of rows shown in the before/after previews
        #[arg(long, default_value = "5")]
        rows: usize,

        /// Print the cleaning report as JSON
        #[arg(long)]
        report: bool,
    },

    /// Show the first rows and a per-column summary
    Preview {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Number of rows to show
        #[arg(long, default_value = "5")]
        rows: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open the web UI
    Serve {
        /// Port for web server
        #[arg(short, long, default_value = "8501")]
        port: u16,

        /// Don't automatically open browser
        #[arg(long)]
        no_open: bool,
    },
}

/// Cleaning switches shared by the `clean` command.
#[derive(clap::Args, Debug, Clone)]
pub struct CleanArgs {
    /// Keep duplicate rows
    #[arg(long)]
    pub keep_duplicates: bool,

    /// How to handle missing values (drop, fill_mean, fill_median)
    #[arg(long, default_value = "drop")]
    pub missing: MissingStrategy,

    /// Keep rows with IQR outliers
    #[arg(long)]
    pub keep_outliers: bool,
}

impl CleanArgs {
    /// Translate flags into cleaning options.
    pub fn to_options(&self) -> CleaningOptions {
        CleaningOptions::new()
            .with_remove_duplicates(!self.keep_duplicates)
            .with_missing(self.missing)
            .with_remove_outliers(!self.keep_outliers)
    }
}
