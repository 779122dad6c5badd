//! Pipe-delimited table files
//!
//! ```text
//! +--------+------+
//! | Item   | Town |
//! +========+======+
//! | Potato | Velia |
//! +--------+------+
//! ```
//!
//! Lines 1 and 3 may be borders without any `|`. Any other line without a
//! `|` ends the table; nothing may follow it. Every row must start and end
//! with `|` and carry as many cells as the header. Cells are trimmed.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::bail_table;
use crate::error::{NodeplanError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse the pipe-delimited format. At least a header and one data row
    /// are required.
    pub fn parse(content: &str) -> Result<Self> {
        let mut data: Vec<Vec<String>> = Vec::new();
        let mut line_number = 0;
        let mut ended = false;

        for line in content.lines() {
            if ended {
                bail_table!("trailing lines after line number {}", line_number);
            }
            line_number += 1;

            let cells: Vec<&str> = line.split('|').collect();
            if cells.len() == 1 {
                if line_number != 1 && line_number != 3 {
                    ended = true;
                }
                continue;
            }
            if cells.len() < 3 {
                bail_table!("line number {} has too few columns", line_number);
            }
            if !cells[0].is_empty() || !cells[cells.len() - 1].is_empty() {
                bail_table!("line number {} is malformed", line_number);
            }

            let row: Vec<String> = cells[1..cells.len() - 1]
                .iter()
                .map(|cell| cell.trim().to_string())
                .collect();
            if let Some(first) = data.first() {
                if row.len() != first.len() {
                    bail_table!(
                        "line number {} has incorrect number of columns; had {} and expected {}",
                        line_number,
                        row.len(),
                        first.len()
                    );
                }
            }
            data.push(row);
        }

        if data.len() < 2 {
            bail_table!("no data");
        }

        let header = data.remove(0);
        Ok(Self { header, rows: data })
    }

    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| NodeplanError::io_operation("read", path.display(), e))?;
        Self::parse(&content)
    }

    /// Read CSV; the first record is the header.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self> {
        let mut records = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(reader)
            .into_records();

        let header = match records.next() {
            Some(record) => record?.iter().map(str::to_string).collect(),
            None => bail_table!("no data"),
        };
        let rows = records
            .map(|record| -> Result<Vec<String>> {
                Ok(record?.iter().map(str::to_string).collect())
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { header, rows })
    }

    /// Rows with a cell containing `phrase` (case-insensitive). A row is
    /// repeated once per matching cell.
    pub fn search(&self, phrase: &str) -> Table {
        let phrase = phrase.to_lowercase();
        let mut rows = Vec::new();
        for row in &self.rows {
            for cell in row {
                if cell.to_lowercase().contains(&phrase) {
                    rows.push(row.clone());
                }
            }
        }
        self.with_rows(rows)
    }

    /// Rows whose `column` (case-insensitive header match) contains `phrase`
    pub fn search_column(&self, column: &str, phrase: &str) -> Result<Table> {
        let column_lower = column.to_lowercase();
        let index = self
            .header
            .iter()
            .position(|h| h.to_lowercase() == column_lower)
            .ok_or_else(|| NodeplanError::UnknownColumn {
                column: column.to_string(),
            })?;

        let phrase = phrase.to_lowercase();
        let rows = self
            .rows
            .iter()
            .filter(|row| row[index].to_lowercase().contains(&phrase))
            .cloned()
            .collect();
        Ok(self.with_rows(rows))
    }

    fn with_rows(&self, rows: Vec<Vec<String>>) -> Table {
        Table {
            header: self.header.clone(),
            rows,
        }
    }
}
