//! `table` and `csv-to-table` commands

use std::io;
use std::path::Path;

use comfy_table::presets::ASCII_FULL_CONDENSED;
use comfy_table::Table as TextTable;

use crate::cli::{Cli, OutputFormat};
use nodeplan_core::error::Result;
use nodeplan_core::table::Table;
use tracing::debug;

/// Align a table with a border and a separator under the header.
/// The result parses back with [`Table::parse`].
pub fn render(table: &Table) -> String {
    let mut text = TextTable::new();
    text.load_preset(ASCII_FULL_CONDENSED)
        .set_header(table.header.clone())
        .add_rows(table.rows.clone());
    format!("{}\n", text)
}

fn output(cli: &Cli, table: &Table) -> Result<()> {
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(table)?),
        OutputFormat::Human => print!("{}", render(table)),
    }
    Ok(())
}

pub fn execute_search(cli: &Cli, file: &Path, phrase: &str) -> Result<()> {
    let table = Table::read(file)?;
    let found = table.search(phrase);
    debug!(rows = table.rows.len(), matches = found.rows.len(), "table_search");
    output(cli, &found)
}

pub fn execute_search_column(cli: &Cli, file: &Path, column: &str, phrase: &str) -> Result<()> {
    let table = Table::read(file)?;
    let found = table.search_column(column, phrase)?;
    debug!(rows = table.rows.len(), matches = found.rows.len(), "table_search_column");
    output(cli, &found)
}

/// Read CSV from stdin
pub fn execute_csv(cli: &Cli) -> Result<()> {
    let table = Table::from_csv(io::stdin().lock())?;
    output(cli, &table)
}
