//! Preview command - show the first rows and a per-column summary.

use std::path::PathBuf;

use colored::Colorize;
use sweeper::Sweeper;

use super::print_table;

pub fn run(
    file: PathBuf,
    rows: usize,
    json_output: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let sweeper = Sweeper::new().with_preview_rows(rows);
    let dataset = sweeper.load(&file)?;
    let preview = sweeper.preview(&dataset.table);

    if json_output {
        let output = serde_json::json!({
            "source": dataset.source,
            "preview": preview,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} {} ({} rows, {} columns)",
        "Preview of".cyan().bold(),
        file.display().to_string().white(),
        dataset.source.row_count,
        dataset.source.column_count
    );
    println!();
    print_table(&dataset.table, rows);
    println!();

    println!("{}", "Columns:".yellow().bold());
    for col in &preview.columns {
        let mut line = format!(
            "  {:20} {:8} count={:<6} missing={:<6} unique={:<6}",
            col.name,
            col.column_type.to_string(),
            col.count,
            col.missing_count,
            col.unique_count
        );
        if let Some(stats) = &col.numeric {
            line.push_str(&format!(
                " mean={:.3} median={} min={} max={}",
                stats.mean, stats.median, stats.min, stats.max
            ));
        }
        if col.missing_count > 0 {
            println!("{}", line.yellow());
        } else {
            println!("{}", line);
        }
    }

    Ok(())
}
