//! Minimum contribution point connection search
//!
//! Finds the cheapest way to connect a node either to the owned network or to
//! a second node, and every path tied for that cost:
//! - `search`: depth-first search with per-call dead-end memoization
//! - `ranking`: ordering of several solutions for presentation

pub mod ranking;
pub mod search;

use serde::Serialize;

use crate::error::{NodeplanError, Result};
use crate::network::{Network, NodeId};

pub use ranking::{rank, CostEntry};
pub use search::SearchContext;

/// Knobs for a single solve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveOptions {
    /// Skip branches whose accumulated cost already exceeds the best found.
    ///
    /// Identical results on tree-shaped networks. With cycles a skipped
    /// branch leaves fewer dead ends behind, so the search can reach routes
    /// the plain search memoized away and return a different answer.
    pub prune: bool,
}

/// Result of one solve. Owns its data, so later ownership changes do not
/// alter it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub source: String,
    /// `None` when the goal was "any owned node"
    pub destination: Option<String>,
    /// `None` when no path reaches the goal
    pub best_cost: Option<u64>,
    /// Each path runs from the source to the goal node
    pub paths: Vec<Vec<String>>,
}

impl Solution {
    pub fn is_reachable(&self) -> bool {
        self.best_cost.is_some()
    }
}

/// Resolve names case-insensitively and search.
#[tracing::instrument(skip(network, options), fields(source = %source, destination = ?destination))]
pub fn solve(
    network: &Network,
    source: &str,
    destination: Option<&str>,
    options: SolveOptions,
) -> Result<Solution> {
    let from = network.resolve(source)?;
    let to = destination.map(|name| network.resolve(name)).transpose()?;

    if to == Some(from) {
        return Err(NodeplanError::SameNode {
            first: source.to_string(),
            second: destination.unwrap_or_default().to_string(),
        });
    }

    Ok(solve_ids(network, from, to, options))
}

/// Search between already-resolved nodes. `source` must differ from
/// `destination`.
pub fn solve_ids(
    network: &Network,
    source: NodeId,
    destination: Option<NodeId>,
    options: SolveOptions,
) -> Solution {
    let mut ctx = SearchContext::new(network, destination, options);
    ctx.run(source);

    let names = |path: &[NodeId]| -> Vec<String> {
        path.iter()
            .map(|&id| network.node(id).name.clone())
            .collect()
    };

    Solution {
        source: network.node(source).name.clone(),
        destination: destination.map(|id| network.node(id).name.clone()),
        best_cost: ctx.best_cost(),
        paths: ctx.best_paths().iter().map(|p| names(p)).collect(),
    }
}

/// Sum of the costs of unowned nodes along a path of node names.
/// Unknown names contribute nothing.
pub fn path_cost(network: &Network, path: &[String]) -> u64 {
    path.iter()
        .filter_map(|name| network.get(name))
        .map(|node| u64::from(node.marginal_cost()))
        .sum()
}
