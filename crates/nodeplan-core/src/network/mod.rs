//! Network model: named, costed nodes joined by undirected connections
//!
//! The network is write-once: nodes and connections are inserted while the
//! definition is loaded, after which only the `owned`/`assigned_worker` fields
//! change (see [`crate::ownership`]).

pub mod definition;
pub mod node;

use std::collections::{BTreeSet, HashMap};

use crate::bail_network;
use crate::error::{NodeplanError, Result};

pub use definition::{load_network, NetworkDefinition};
pub use node::{Node, NodeId};

/// Node store plus adjacency relation
#[derive(Debug, Clone, Default)]
pub struct Network {
    nodes: Vec<Node>,
    by_name: HashMap<String, NodeId>,
    /// Lowercased name -> first node inserted with that folding
    by_folded: HashMap<String, NodeId>,
    /// Ordered by insertion so traversal order is stable
    connections: Vec<BTreeSet<NodeId>>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node. Cost 0 marks it owned immediately.
    pub fn add_node(&mut self, name: impl Into<String>, cost: u32) -> Result<NodeId> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            bail_network!("duplicate node {:?}", name);
        }

        let id = NodeId(self.nodes.len());
        self.by_folded.entry(name.to_lowercase()).or_insert(id);
        self.by_name.insert(name.clone(), id);
        self.nodes.push(Node::new(name, cost));
        self.connections.push(BTreeSet::new());
        Ok(id)
    }

    /// Insert `b` into `a`'s adjacency set. One direction only.
    pub fn add_connection(&mut self, a: &str, b: &str) -> Result<()> {
        let from = self.existing(a)?;
        let to = self.existing(b)?;
        if from == to {
            bail_network!("node {:?} cannot connect to itself", a);
        }
        self.connections[from.0].insert(to);
        Ok(())
    }

    /// Insert a bidirectional connection.
    pub fn connect(&mut self, a: &str, b: &str) -> Result<()> {
        self.add_connection(a, b)?;
        self.add_connection(b, a)
    }

    /// Insert `"<parent>: <local>"` and connect it both ways with `parent`.
    pub fn add_production_node(
        &mut self,
        parent: &str,
        local: &str,
        cost: u32,
        worker_source: Option<&str>,
        produces: &[String],
    ) -> Result<NodeId> {
        let name = format!("{}: {}", parent, local);
        let id = self.add_node(name.clone(), cost)?;
        self.connect(parent, &name)?;

        let node = &mut self.nodes[id.0];
        node.worker_source = worker_source.map(str::to_string);
        node.produces = produces.to_vec();
        Ok(id)
    }

    fn existing(&self, name: &str) -> Result<NodeId> {
        match self.id(name) {
            Some(id) => Ok(id),
            None => bail_network!("connection references unknown node {:?}", name),
        }
    }

    /// Exact-name lookup
    pub fn id(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Case-insensitive lookup
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.by_folded.get(&name.to_lowercase()).copied()
    }

    /// Case-insensitive lookup that fails with [`NodeplanError::UnknownNode`]
    pub fn resolve(&self, name: &str) -> Result<NodeId> {
        self.find(name).ok_or_else(|| NodeplanError::unknown_node(name))
    }

    /// Nodes whose name or any produced item contains `phrase`,
    /// case-insensitively, in insertion order
    pub fn search(&self, phrase: &str) -> Vec<NodeId> {
        let phrase = phrase.to_lowercase();
        self.ids()
            .filter(|&id| {
                let node = self.node(id);
                node.name.to_lowercase().contains(&phrase)
                    || node
                        .produces
                        .iter()
                        .any(|item| item.to_lowercase().contains(&phrase))
            })
            .collect()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.id(name).map(|id| self.node(id))
    }

    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.connections[id.0].iter().copied()
    }

    pub fn is_connected(&self, a: NodeId, b: NodeId) -> bool {
        self.connections[a.0].contains(&b)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests;
