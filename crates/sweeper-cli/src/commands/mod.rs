//! CLI command implementations.

pub mod clean;
pub mod preview;
pub mod serve;

use colored::Colorize;
use sweeper::Table;
use sweeper::output::format_cell;

/// Print the first `limit` rows of a table as an aligned text table.
pub fn print_table(table: &Table, limit: usize) {
    let head = table.head(limit);

    let cells: Vec<Vec<String>> = head
        .records()
        .iter()
        .map(|row| {
            row.iter()
                .zip(head.columns())
                .map(|(value, column)| format_cell(value, column.column_type))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = head
        .columns()
        .iter()
        .enumerate()
        .map(|(i, column)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(column.name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = head
        .columns()
        .iter()
        .zip(&widths)
        .map(|(column, &w)| format!("{:w$}", column.name))
        .collect();
    println!("  {}", header.join("  ").bold());

    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    println!("  {}", rule.join("  ").dimmed());

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:w$}", cell))
            .collect();
        println!("  {}", line.join("  "));
    }

    if table.row_count() > head.row_count() {
        println!(
            "  {}",
            format!("... showing {} of {} rows", head.row_count(), table.row_count()).dimmed()
        );
    } else if table.is_empty() {
        println!("  {}", "(no rows)".dimmed());
    }
}
