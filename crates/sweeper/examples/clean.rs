//! Example: Clean a CSV file with Sweeper.
//!
//! Usage:
//!   cargo run --example clean -- <file_path> [fill_mean|fill_median|drop]
//!
//! Example:
//!   cargo run --example clean -- data/sensors.csv fill_median

use std::env;
use std::path::Path;

use sweeper::{CleaningOptions, MissingStrategy, Sweeper};

fn main() -> sweeper::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example clean -- <file_path> [strategy]");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example clean -- data/sensors.csv fill_median");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    let strategy: MissingStrategy = match args.get(2) {
        Some(s) => s.parse()?,
        None => MissingStrategy::default(),
    };

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Sweeper: {}", file_path);
    println!("{}", separator);
    println!();

    let sweeper = Sweeper::new();
    let dataset = sweeper.load(path)?;

    println!("## Source Metadata");
    println!("  File: {}", dataset.source.file);
    println!("  Rows: {}", dataset.source.row_count);
    println!("  Columns: {}", dataset.source.column_count);
    println!();

    let preview = sweeper.preview(&dataset.table);
    println!("## Columns");
    for col in &preview.columns {
        println!(
            "  {:20} {:8} missing={:<5} unique={}",
            col.name, col.column_type, col.missing_count, col.unique_count
        );
    }
    println!();

    let options = CleaningOptions::new().with_missing(strategy);
    let outcome = sweeper.clean(&dataset, &options);
    let report = &outcome.report;

    println!("## Cleaning ({})", strategy);
    println!("  Duplicates removed: {}", report.duplicates_removed);
    println!("  Incomplete rows dropped: {}", report.missing_rows_dropped);
    for fill in &report.fills {
        match fill.fill_value {
            Some(value) => println!(
                "  Filled {} cells in {} with {}",
                fill.cells_filled, fill.column, value
            ),
            None => println!("  {} has no values to fill from", fill.column),
        }
    }
    for bounds in &report.outlier_bounds {
        println!(
            "  {}: keep [{}, {}], {} rows outside",
            bounds.column, bounds.lower, bounds.upper, bounds.rows_flagged
        );
    }
    println!("  Outlier rows removed: {}", report.outlier_rows_removed);
    println!("  Rows: {} -> {}", report.rows_before, report.rows_after);
    println!();

    let out_path = path.with_file_name(sweeper::DOWNLOAD_FILE_NAME);
    sweeper.export(&outcome.table, &out_path)?;
    println!("Wrote {}", out_path.display());
    println!("{}", separator);

    Ok(())
}
