//! Aggregates over owned nodes for the `nodes` report

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;
use crate::network::{Network, Node};

/// How many assigned workers yield an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemCount {
    pub item: String,
    pub count: usize,
}

/// Owned production node with no worker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdleNode {
    pub name: String,
    pub produces: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NetworkSummary {
    pub owned: usize,
    /// Contribution points tied up in owned nodes
    pub cost: u64,
    pub production: usize,
    pub workers: usize,
    /// Sorted by item name
    pub items: Vec<ItemCount>,
    pub idle: Vec<IdleNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerSummary {
    pub city: String,
    pub workers: usize,
    pub items: Vec<ItemCount>,
}

#[derive(Debug, Default)]
struct Tally(BTreeMap<String, usize>);

impl Tally {
    fn add(&mut self, node: &Node) {
        for item in &node.produces {
            *self.0.entry(item.clone()).or_default() += 1;
        }
    }

    fn into_counts(self) -> Vec<ItemCount> {
        self.0
            .into_iter()
            .map(|(item, count)| ItemCount { item, count })
            .collect()
    }
}

fn owned_production(network: &Network) -> impl Iterator<Item = &Node> {
    network.nodes().filter(|n| n.owned && n.is_production())
}

/// Summarize everything owned
pub fn summarize(network: &Network) -> NetworkSummary {
    let mut summary = NetworkSummary::default();
    let mut tally = Tally::default();

    for node in network.nodes().filter(|n| n.owned) {
        summary.owned += 1;
        summary.cost += u64::from(node.cost);
    }

    for node in owned_production(network) {
        summary.production += 1;
        if node.assigned_worker.is_some() {
            summary.workers += 1;
            tally.add(node);
        } else {
            summary.idle.push(IdleNode {
                name: node.name.clone(),
                produces: node.produces.clone(),
            });
        }
    }

    summary.items = tally.into_counts();
    summary
}

/// Summarize the workers sent from one city (case-insensitive node name)
pub fn summarize_workers(network: &Network, city: &str) -> Result<WorkerSummary> {
    let city = network.node(network.resolve(city)?).name.clone();
    let mut workers = 0;
    let mut tally = Tally::default();

    for node in owned_production(network) {
        if node.assigned_worker.as_deref() == Some(city.as_str()) {
            workers += 1;
            tally.add(node);
        }
    }

    Ok(WorkerSummary {
        city,
        workers,
        items: tally.into_counts(),
    })
}
