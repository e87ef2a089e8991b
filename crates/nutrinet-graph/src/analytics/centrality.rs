//! Shared centrality result type and size guards.

use std::cmp::Ordering;
use std::collections::HashMap;

use nutrinet_core::NodeId;
use serde::Serialize;
use tracing::warn;

use crate::store::{BipartiteGraph, GraphError, GraphResult};

/// Default node limit for analytics algorithms (10 million).
///
/// Algorithms that allocate per-node state refuse larger graphs unless the
/// caller raises or disables the limit in their config.
pub const DEFAULT_MAX_GRAPH_NODES: usize = 10_000_000;

/// Centrality scores keyed by node.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CentralityMap {
    /// Score for each node.
    pub scores: HashMap<NodeId, f64>,

    /// Whether scores are normalized to [0, 1].
    pub normalized: bool,
}

impl CentralityMap {
    /// Get the score for a specific node.
    pub fn score(&self, node: &str) -> Option<f64> {
        self.scores.get(node).copied()
    }

    /// Number of scored nodes.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns true if no node is scored.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Get nodes sorted by score (descending), ties by node id.
    pub fn sorted(&self) -> Vec<(&NodeId, f64)> {
        let mut pairs: Vec<_> = self.scores.iter().map(|(id, &score)| (id, score)).collect();
        pairs.sort_by(|a, b| {
            b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal).then_with(|| a.0.cmp(b.0))
        });
        pairs
    }

    /// Get the top N nodes by score.
    pub fn top_n(&self, n: usize) -> Vec<(&NodeId, f64)> {
        self.sorted().into_iter().take(n).collect()
    }

    /// Get the node with the highest score.
    pub fn max(&self) -> Option<(&NodeId, f64)> {
        self.sorted().into_iter().next()
    }

    /// Get the node with the lowest score.
    pub fn min(&self) -> Option<(&NodeId, f64)> {
        self.sorted().into_iter().next_back()
    }

    /// Get the mean score.
    pub fn mean(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        self.scores.values().sum::<f64>() / self.scores.len() as f64
    }

    /// Nodes whose score meets or exceeds `threshold`.
    pub fn at_least(&self, threshold: f64) -> impl Iterator<Item = &NodeId> + '_ {
        self.scores.iter().filter(move |(_, score)| **score >= threshold).map(|(id, _)| id)
    }
}

/// Reject graphs that are too small or too large for an algorithm.
pub(crate) fn check_graph_size(
    graph: &BipartiteGraph,
    required: usize,
    limit: Option<usize>,
    algorithm: &'static str,
) -> GraphResult<()> {
    let node_count = graph.node_count();

    if node_count < required {
        warn!(algorithm, node_count, required, "graph too small");
        return Err(GraphError::EmptyGraph { required, actual: node_count });
    }

    if let Some(limit) = limit {
        if node_count > limit {
            warn!(algorithm, node_count, limit, "graph too large");
            return Err(GraphError::GraphTooLarge { node_count, limit });
        }
    }

    Ok(())
}
