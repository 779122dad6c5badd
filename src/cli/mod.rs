//! CLI argument parsing for nodeplan
//!
//! Supports global flags: --root, --network, --owned, --format, --quiet, --verbose

pub mod output;
pub mod table;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;
pub use table::TableCommands;

/// Nodeplan - contribution point planner for node networks
#[derive(Parser, Debug)]
#[command(name = "nodeplan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving relative paths
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Network definition file (TOML)
    #[arg(long, global = true, env = "NODEPLAN_NETWORK")]
    pub network: Option<PathBuf>,

    /// Owned node list, one node per line, optionally `<node> -- <worker city>`
    #[arg(long, global = true, env = "NODEPLAN_OWNED")]
    pub owned: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize owned nodes, or what workers from one city produce
    Nodes {
        /// Only count workers sent from this city
        city: Option<String>,
    },

    /// Cheapest way to connect a node to your network, or to another node
    Path {
        /// Node to connect
        from: String,

        /// Connect to this node instead of the owned network
        to: Option<String>,

        /// Skip branches already more expensive than the best found.
        /// Same answer on tree-shaped networks; with cycles the answer may
        /// differ from the plain search
        #[arg(long)]
        prune: bool,
    },

    /// Find nodes by name or produced item
    Search {
        /// Rank matches by the cost of connecting them
        #[arg(long)]
        costs: bool,

        /// Search phrase
        #[arg(required = true)]
        phrase: Vec<String>,
    },

    /// Search pipe-delimited table files
    Table {
        #[command(subcommand)]
        command: TableCommands,
    },

    /// Convert CSV on stdin to an aligned table
    CsvToTable,
}
