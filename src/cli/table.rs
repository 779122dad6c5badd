//! Table subcommands for pipe-delimited data files

use clap::Subcommand;
use std::path::PathBuf;

/// Table subcommands
#[derive(Subcommand, Debug)]
pub enum TableCommands {
    /// Show rows with any cell containing the phrase
    Search {
        /// Table file
        file: PathBuf,

        /// Search phrase
        #[arg(required = true)]
        phrase: Vec<String>,
    },

    /// Show rows whose column contains the phrase
    SearchColumn {
        /// Table file
        file: PathBuf,

        /// Column header (case-insensitive)
        column: String,

        /// Search phrase
        #[arg(required = true)]
        phrase: Vec<String>,
    },
}
