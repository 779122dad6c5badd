use std::collections::HashSet;

use tracing::trace;

use super::SolveOptions;
use crate::network::{Network, NodeId};

/// One node on the current path and how far its neighbors have been walked
#[derive(Debug)]
struct Frame {
    node: NodeId,
    neighbors: Vec<NodeId>,
    next: usize,
    /// Some neighbor led to the goal (or could not be ruled out)
    reached: bool,
}

/// Mutable state of a single search. Never shared between solves: dead-end
/// status depends on the destination.
///
/// Dead ends are memoized for the whole search. A node marked while one set
/// of nodes was on the path stays marked for later paths, which is exact on
/// tree-shaped networks but may hide alternatives on networks with several
/// independent cycles through the same node. Pruning changes which nodes
/// get marked, so with cycles a pruned search may disagree with a plain one.
#[derive(Debug)]
pub struct SearchContext<'a> {
    network: &'a Network,
    destination: Option<NodeId>,
    options: SolveOptions,
    /// Unowned cost of the nodes on `stack`
    cost: u64,
    visited: HashSet<NodeId>,
    dead_ends: HashSet<NodeId>,
    stack: Vec<Frame>,
    best_cost: Option<u64>,
    best_paths: Vec<Vec<NodeId>>,
}

impl<'a> SearchContext<'a> {
    pub fn new(network: &'a Network, destination: Option<NodeId>, options: SolveOptions) -> Self {
        Self {
            network,
            destination,
            options,
            cost: 0,
            visited: HashSet::new(),
            dead_ends: HashSet::new(),
            stack: Vec::new(),
            best_cost: None,
            best_paths: Vec::new(),
        }
    }

    pub fn best_cost(&self) -> Option<u64> {
        self.best_cost
    }

    pub fn best_paths(&self) -> &[Vec<NodeId>] {
        &self.best_paths
    }

    pub fn dead_ends(&self) -> &HashSet<NodeId> {
        &self.dead_ends
    }

    /// Walk every simple path out of `source`. The source itself is never
    /// taken as the goal; the shortest candidate path has two nodes.
    pub fn run(&mut self, source: NodeId) {
        self.enter(source);

        while let Some(frame) = self.stack.last_mut() {
            let Some(&next) = frame.neighbors.get(frame.next) else {
                self.leave();
                continue;
            };
            frame.next += 1;

            if self.dead_ends.contains(&next) || self.visited.contains(&next) {
                continue;
            }

            if self.is_goal(next) {
                self.mark_reached();
                self.record(next);
                continue;
            }

            if self.exceeds_best(next) {
                // Not proven fruitless, only too expensive from here
                self.mark_reached();
                continue;
            }

            self.enter(next);
        }

        trace!(
            best_cost = ?self.best_cost,
            paths = self.best_paths.len(),
            dead_ends = self.dead_ends.len(),
            "search_complete"
        );
    }

    fn is_goal(&self, id: NodeId) -> bool {
        match self.destination {
            Some(destination) => id == destination,
            None => self.network.node(id).owned,
        }
    }

    fn marginal(&self, id: NodeId) -> u64 {
        u64::from(self.network.node(id).marginal_cost())
    }

    fn exceeds_best(&self, id: NodeId) -> bool {
        self.options.prune
            && self
                .best_cost
                .is_some_and(|best| self.cost + self.marginal(id) > best)
    }

    fn enter(&mut self, id: NodeId) {
        self.cost += self.marginal(id);
        self.visited.insert(id);
        self.stack.push(Frame {
            node: id,
            neighbors: self.network.neighbors(id).collect(),
            next: 0,
            reached: false,
        });
    }

    /// Undo `enter` for the top frame and report to its parent.
    fn leave(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        self.cost -= self.marginal(frame.node);
        self.visited.remove(&frame.node);

        if frame.reached {
            self.mark_reached();
        } else {
            self.dead_ends.insert(frame.node);
        }
    }

    fn mark_reached(&mut self) {
        if let Some(frame) = self.stack.last_mut() {
            frame.reached = true;
        }
    }

    fn record(&mut self, goal: NodeId) {
        let candidate = self.cost + self.marginal(goal);
        match self.best_cost {
            Some(best) if candidate > best => return,
            Some(best) if candidate == best => {}
            _ => {
                self.best_cost = Some(candidate);
                self.best_paths.clear();
            }
        }

        let mut path: Vec<NodeId> = self.stack.iter().map(|f| f.node).collect();
        path.push(goal);
        self.best_paths.push(path);
    }
}
