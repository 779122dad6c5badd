//! `search` command: find nodes by name or produced item

use crate::cli::{Cli, OutputFormat};
use nodeplan_core::error::Result;
use nodeplan_core::network::{Network, NodeId};
use nodeplan_core::solver::{rank, solve_ids, CostEntry, SolveOptions};
use tracing::debug;

/// Execute the search command
pub fn execute(cli: &Cli, network: &Network, phrase: &str, costs: bool) -> Result<()> {
    let matches = network.search(phrase);
    debug!(phrase, matches = matches.len(), "search");

    if matches.is_empty() {
        match cli.format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Human if !cli.quiet => println!("No nodes match '{}'", phrase),
            OutputFormat::Human => {}
        }
        return Ok(());
    }

    let entries = if costs {
        ranked_costs(network, &matches)
    } else {
        let mut entries: Vec<CostEntry> = matches
            .iter()
            .map(|&id| CostEntry::new(network.node(id).name.clone(), None))
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    };

    match cli.format {
        OutputFormat::Json => output_json(network, &entries, costs)?,
        OutputFormat::Human => print!("{}", render_human(network, &entries, costs)),
    }
    Ok(())
}

/// Connect each match to the owned network and rank by cost
fn ranked_costs(network: &Network, matches: &[NodeId]) -> Vec<CostEntry> {
    let mut entries: Vec<CostEntry> = matches
        .iter()
        .map(|&id| {
            let solution = solve_ids(network, id, None, SolveOptions::default());
            CostEntry::new(solution.source, solution.best_cost)
        })
        .collect();
    rank(&mut entries);
    entries
}

fn render_human(network: &Network, entries: &[CostEntry], costs: bool) -> String {
    let mut out = String::new();
    for entry in entries {
        let Some(node) = network.get(&entry.name) else {
            continue;
        };
        if !costs {
            out.push_str(&format!("{}\n", node));
            continue;
        }
        match entry.cost {
            Some(cost) => out.push_str(&format!("[{}] {}\n", cost, node)),
            None => out.push_str(&format!("[-] {}\n", node)),
        }
    }
    out
}

/// One JSON object per entry; `connect_cost` is added when ranking by cost
fn search_json(
    network: &Network,
    entries: &[CostEntry],
    costs: bool,
) -> Result<Vec<serde_json::Value>> {
    entries
        .iter()
        .map(|entry| -> Result<serde_json::Value> {
            let node = network.node(network.resolve(&entry.name)?);
            let mut obj = serde_json::to_value(node)?;
            if costs {
                if let Some(obj_mut) = obj.as_object_mut() {
                    obj_mut.insert("connect_cost".to_string(), serde_json::json!(entry.cost));
                }
            }
            Ok(obj)
        })
        .collect()
}

fn output_json(network: &Network, entries: &[CostEntry], costs: bool) -> Result<()> {
    let output = search_json(network, entries, costs)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
