//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use nodeplan_core::config::GlobalConfig;
use nodeplan_core::error::Result;
use nodeplan_core::network::{load_network, Network};
use nodeplan_core::ownership::load_owned_file;
use tracing::debug;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    /// Load the network definition and apply the owned list.
    /// Ownership is fixed from here on.
    pub fn load_network(&self) -> Result<Network> {
        let config = GlobalConfig::load()?;
        let paths = config.resolve(
            self.root,
            self.cli.network.as_deref(),
            self.cli.owned.as_deref(),
        );

        let mut network = load_network(&paths.network)?;
        let report = load_owned_file(&mut network, &paths.owned)?;

        debug!(
            elapsed = ?self.start.elapsed(),
            nodes = network.len(),
            owned_records = report.records,
            "load_network"
        );
        Ok(network)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("nodeplan {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Plans contribution point spending across a node network.");
        println!();
        println!("Run `nodeplan --help` for usage information.");
        Ok(())
    }
}
