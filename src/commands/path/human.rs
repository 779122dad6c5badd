//! Human-readable output for the path command

use nodeplan_core::network::Network;
use nodeplan_core::solver::Solution;

/// Headline, then each option listed from the goal back to the queried node
pub fn render_path(network: &Network, solution: &Solution) -> String {
    let mut out = String::new();

    let Some(cost) = solution.best_cost else {
        match &solution.destination {
            Some(destination) => out.push_str(&format!(
                "{} cannot be connected to {}.\n",
                solution.source, destination
            )),
            None => out.push_str(&format!(
                "{} cannot be connected to any owned node.\n",
                solution.source
            )),
        }
        return out;
    };

    match &solution.destination {
        Some(destination) => out.push_str(&format!(
            "{} contribution points are needed to connect {} to {}.\n",
            cost, solution.source, destination
        )),
        None => out.push_str(&format!(
            "{} contribution points are needed to connect to {}.\n",
            cost, solution.source
        )),
    }

    let numbered = solution.paths.len() > 1;
    for (i, path) in solution.paths.iter().enumerate() {
        if numbered {
            out.push_str(&format!("Option {}:\n", i + 1));
        }
        for name in path.iter().rev() {
            let Some(node) = network.get(name) else {
                continue;
            };
            let line = if !node.owned {
                format!("   {:2} for {}\n", node.cost, node.name)
            } else if node.is_root() {
                format!("          {} (always owned)\n", node.name)
            } else {
                format!("          {} (already owned for {})\n", node.name, node.cost)
            };
            out.push_str(&line);
        }
    }

    out
}
