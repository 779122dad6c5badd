use serde::Serialize;
use std::cmp::Ordering;

/// A node paired with the cost of connecting it, for ranking several solves
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostEntry {
    pub name: String,
    /// `None` when the node cannot be connected
    pub cost: Option<u64>,
}

impl CostEntry {
    pub fn new(name: impl Into<String>, cost: Option<u64>) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }
}

impl PartialOrd for CostEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Cheapest first, unreachable last, then by name
impl Ord for CostEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        let cost = match (self.cost, other.cost) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        cost.then_with(|| self.name.cmp(&other.name))
    }
}

/// Sort entries into presentation order
pub fn rank(entries: &mut [CostEntry]) {
    entries.sort();
}
