use serde::Serialize;
use std::fmt;

/// Index of a node inside its [`Network`](super::Network).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// A named location in the network.
///
/// Cost is fixed at insertion; `owned` only ever flips from false to true
/// while the owned list is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub name: String,
    /// Contribution points needed to acquire the node
    pub cost: u32,
    pub owned: bool,
    /// Node a worker would most conveniently be sent from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_worker: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub produces: Vec<String>,
}

impl Node {
    pub fn new(name: impl Into<String>, cost: u32) -> Self {
        Self {
            name: name.into(),
            cost,
            owned: cost == 0,
            worker_source: None,
            assigned_worker: None,
            produces: Vec::new(),
        }
    }

    /// Cost this node adds to a path: zero once owned.
    pub fn marginal_cost(&self) -> u32 {
        if self.owned {
            0
        } else {
            self.cost
        }
    }

    pub fn is_production(&self) -> bool {
        !self.produces.is_empty()
    }

    /// Always owned, regardless of the owned list
    pub fn is_root(&self) -> bool {
        self.cost == 0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.owned {
            write!(f, "{} ({}) owned", self.name, self.cost)?;
        } else {
            write!(f, "{} [{}]", self.name, self.cost)?;
        }
        if let Some(worker) = &self.worker_source {
            write!(f, ", closest worker from {}", worker)?;
        }
        if !self.produces.is_empty() {
            write!(f, ", produces: {}", self.produces.join(", "))?;
        }
        Ok(())
    }
}
