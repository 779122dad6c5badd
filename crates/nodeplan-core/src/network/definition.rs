//! Static network definition loaded from TOML
//!
//! ```toml
//! [[node]]
//! name = "Velia"
//! cost = 0
//!
//! [[node]]
//! name = "Bartali Farm"
//! cost = 1
//! connects = ["Velia"]
//!
//! [[node.production]]
//! name = "A"
//! cost = 1
//! worker = "Velia"
//! produces = ["Potato", "Corn"]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Network;
use crate::error::{NodeplanError, Result};

/// Root of a network definition file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkDefinition {
    #[serde(default, rename = "node")]
    pub nodes: Vec<NodeDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDefinition {
    pub name: String,
    pub cost: u32,
    /// Bidirectional links to other top-level nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connects: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub production: Vec<ProductionDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionDefinition {
    /// Local name, qualified with the parent as `"<parent>: <name>"`
    pub name: String,
    pub cost: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker: Option<String>,
    #[serde(default)]
    pub produces: Vec<String>,
}

impl NetworkDefinition {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(NodeplanError::invalid_network)
    }

    /// Build the network. Every node, production nodes included, is inserted
    /// before any `connects` entry is wired, so those may point forward in
    /// the file.
    pub fn build(&self) -> Result<Network> {
        let mut network = Network::new();

        for node in &self.nodes {
            network.add_node(node.name.clone(), node.cost)?;
        }

        for node in &self.nodes {
            for production in &node.production {
                network.add_production_node(
                    &node.name,
                    &production.name,
                    production.cost,
                    production.worker.as_deref(),
                    &production.produces,
                )?;
            }
        }

        for node in &self.nodes {
            for other in &node.connects {
                network.connect(&node.name, other)?;
            }
        }

        Ok(network)
    }
}

/// Read and build a network definition file
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_network(path: &Path) -> Result<Network> {
    if !path.exists() {
        return Err(NodeplanError::NetworkNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)
        .map_err(|e| NodeplanError::io_operation("read", path.display(), e))?;
    let network = NetworkDefinition::parse(&content)?.build()?;

    debug!(nodes = network.len(), "network_loaded");
    Ok(network)
}
