//! JSON output for the path command

use nodeplan_core::error::Result;
use nodeplan_core::network::Network;
use nodeplan_core::solver::Solution;

/// Build the JSON document for a solution. Paths run source to goal.
pub fn path_json(network: &Network, solution: &Solution) -> serde_json::Value {
    let paths: Vec<Vec<serde_json::Value>> = solution
        .paths
        .iter()
        .map(|path| {
            path.iter()
                .filter_map(|name| network.get(name))
                .map(|node| {
                    serde_json::json!({
                        "name": node.name,
                        "cost": node.cost,
                        "owned": node.owned,
                    })
                })
                .collect()
        })
        .collect();

    serde_json::json!({
        "source": solution.source,
        "destination": solution.destination,
        "reachable": solution.is_reachable(),
        "best_cost": solution.best_cost,
        "paths": paths,
    })
}

pub fn output_path_json(network: &Network, solution: &Solution) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&path_json(network, solution))?
    );
    Ok(())
}
