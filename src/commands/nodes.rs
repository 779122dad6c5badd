//! `nodes` command: what the owned network adds up to

use crate::cli::{Cli, OutputFormat};
use nodeplan_core::error::Result;
use nodeplan_core::network::Network;
use nodeplan_core::summary::{
    summarize, summarize_workers, ItemCount, NetworkSummary, WorkerSummary,
};

/// Execute the nodes command
pub fn execute(cli: &Cli, network: &Network, city: Option<&str>) -> Result<()> {
    match city {
        None => {
            let summary = summarize(network);
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
                OutputFormat::Human => print!("{}", render_summary(&summary)),
            }
        }
        Some(city) => {
            let summary = summarize_workers(network, city)?;
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
                OutputFormat::Human => print!("{}", render_workers(&summary)),
            }
        }
    }
    Ok(())
}

fn render_items(items: &[ItemCount], out: &mut String) {
    for item in items {
        if item.count > 1 {
            out.push_str(&format!("    {} x{}\n", item.item, item.count));
        } else {
            out.push_str(&format!("    {}\n", item.item));
        }
    }
}

fn render_summary(summary: &NetworkSummary) -> String {
    let mut out = format!(
        "You own {} nodes for {} contribution points.\n",
        summary.owned, summary.cost
    );

    if summary.production > 0 {
        out.push_str(&format!(
            "\n{} are production nodes, of which {} are assigned workers producing the following items:\n",
            summary.production, summary.workers
        ));
        render_items(&summary.items, &mut out);
    }

    if !summary.idle.is_empty() {
        out.push_str(&format!(
            "\nYou have {} production nodes without assigned workers:\n",
            summary.idle.len()
        ));
        for idle in &summary.idle {
            out.push_str(&format!(
                "    {} could produce: {}\n",
                idle.name,
                idle.produces.join(", ")
            ));
        }
    }

    out
}

fn render_workers(summary: &WorkerSummary) -> String {
    let mut out = format!(
        "{} workers from {} are producing the following items:\n",
        summary.workers, summary.city
    );
    render_items(&summary.items, &mut out);
    out
}
