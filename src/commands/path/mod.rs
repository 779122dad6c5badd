//! `path` command: cheapest connection for a node

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use nodeplan_core::error::Result;
use nodeplan_core::network::Network;
use nodeplan_core::solver::{solve, SolveOptions};
use nodeplan_core::trace_time;

mod human;
mod json;

/// Execute the path command
pub fn execute(
    cli: &Cli,
    network: &Network,
    from: &str,
    to: Option<&str>,
    options: SolveOptions,
) -> Result<()> {
    let start = Instant::now();
    let solution = solve(network, from, to, options)?;
    trace_time!(start, "solve", paths = solution.paths.len());

    match cli.format {
        OutputFormat::Json => json::output_path_json(network, &solution)?,
        OutputFormat::Human => print!("{}", human::render_path(network, &solution)),
    }
    Ok(())
}
