//! Clean command - deduplicate, handle missing values, strip outliers.

use std::path::{Path, PathBuf};

use colored::Colorize;
use sweeper::{CleaningOptions, CleaningReport, DOWNLOAD_FILE_NAME, Sweeper};

use super::print_table;

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    options: CleaningOptions,
    rows: usize,
    report_json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{} {}",
        "Cleaning".cyan().bold(),
        file.display().to_string().white()
    );

    let sweeper = Sweeper::new().with_preview_rows(rows);
    let dataset = sweeper.load(&file)?;

    println!();
    println!("{}", "Raw data:".yellow().bold());
    print_table(&dataset.table, rows);

    if verbose {
        println!();
        println!("  Duplicates: {}", on_off(options.remove_duplicates));
        println!("  Missing values: {}", options.handle_missing);
        println!("  Outliers: {}", on_off(options.remove_outliers));
    }

    let outcome = sweeper.clean(&dataset, &options);

    println!();
    println!("{}", "Cleaned data:".yellow().bold());
    print_table(&outcome.table, rows);
    println!();
    print_summary(&outcome.report);

    let output_path = output.unwrap_or_else(|| default_output_path(&file));
    sweeper.export(&outcome.table, &output_path)?;

    println!();
    println!(
        "{} {}",
        "Wrote".green().bold(),
        output_path.display().to_string().white()
    );

    if report_json {
        println!("{}", serde_json::to_string_pretty(&outcome.report)?);
    }

    Ok(())
}

fn on_off(remove: bool) -> &'static str {
    if remove { "remove" } else { "keep" }
}

/// `cleaned_data.csv` in the input's directory.
fn default_output_path(input: &Path) -> PathBuf {
    input.with_file_name(DOWNLOAD_FILE_NAME)
}

fn print_summary(report: &CleaningReport) {
    println!("{}", "Summary:".yellow().bold());
    println!("  Duplicates removed:      {}", report.duplicates_removed);
    println!("  Incomplete rows dropped: {}", report.missing_rows_dropped);

    for fill in &report.fills {
        match fill.fill_value {
            Some(value) => println!(
                "  Filled {} in {} with {}",
                fill.cells_filled,
                fill.column.white(),
                value
            ),
            None => println!(
                "  {} {} has no values, {} cells left missing",
                "Note:".yellow(),
                fill.column.white(),
                fill.cells_filled
            ),
        }
    }

    for bounds in &report.outlier_bounds {
        if bounds.rows_flagged > 0 {
            println!(
                "  {}: {} rows outside [{}, {}]",
                bounds.column.white(),
                bounds.rows_flagged,
                bounds.lower,
                bounds.upper
            );
        }
    }
    println!("  Outlier rows removed:    {}", report.outlier_rows_removed);

    println!(
        "  Rows: {} -> {} ({} removed)",
        report.rows_before,
        report.rows_after.to_string().green().bold(),
        report.rows_removed().to_string().red()
    );
}
