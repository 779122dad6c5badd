//! Owned-list loader
//!
//! One record per line: `<node name>` or `<node name> -- <worker source>`.
//! Names match case-insensitively. Ownership is applied once, before any
//! solver call, and never reverted.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::{NodeplanError, Result};
use crate::network::{Network, NodeId};

const WORKER_SEPARATOR: &str = " -- ";

/// What a load applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OwnershipReport {
    /// Records read (blank lines excluded)
    pub records: usize,
    /// Records carrying a worker assignment
    pub workers: usize,
}

/// Apply an owned list to the network
pub fn load_owned(network: &mut Network, content: &str) -> Result<OwnershipReport> {
    let mut report = OwnershipReport::default();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim_end();
        if line.is_empty() {
            continue;
        }
        let line_number = index + 1;

        let (name, worker) = match line.split_once(WORKER_SEPARATOR) {
            Some((name, worker)) => (name, Some(worker)),
            None => (line, None),
        };

        let worker = worker
            .map(|w| lookup(network, w, line_number, line))
            .transpose()?
            .map(|id| network.node(id).name.clone());
        let id = lookup(network, name, line_number, line)?;

        let node = network.node_mut(id);
        node.owned = true;
        if worker.is_some() {
            node.assigned_worker = worker;
            report.workers += 1;
        }
        report.records += 1;
    }

    debug!(
        records = report.records,
        workers = report.workers,
        "owned_list_applied"
    );
    Ok(report)
}

/// Apply an owned list file. A missing file owns nothing extra.
#[tracing::instrument(skip(network), fields(path = %path.display()))]
pub fn load_owned_file(network: &mut Network, path: &Path) -> Result<OwnershipReport> {
    match fs::read_to_string(path) {
        Ok(content) => load_owned(network, &content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("owned_list_missing");
            Ok(OwnershipReport::default())
        }
        Err(e) => Err(NodeplanError::io_operation("read", path.display(), e)),
    }
}

fn lookup(network: &Network, name: &str, line: usize, text: &str) -> Result<NodeId> {
    network
        .find(name)
        .ok_or_else(|| NodeplanError::UnknownOwnedNode {
            name: name.to_string(),
            line,
            text: text.to_string(),
        })
}
