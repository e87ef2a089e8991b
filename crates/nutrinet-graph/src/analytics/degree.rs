//! Degree Centrality implementation.
//!
//! Degree centrality is the fraction of all other nodes a node is directly
//! connected to. In a bipartite graph the most a compound can reach is every
//! food, so even a fully connected compound scores below 1 unless the other
//! side is the whole rest of the graph.
//!
//! # Formula
//!
//! For a node v in a graph with n nodes:
//!
//! - DC(v) = degree(v) / (n - 1), or 0 when n = 1
//!
//! # Example
//!
//! ```
//! use nutrinet_graph::analytics::{DegreeCentrality, DegreeCentralityConfig};
//! use nutrinet_graph::store::BipartiteGraph;
//!
//! let graph = BipartiteGraph::from_pairs([("Iron", "Spinach"), ("Iron", "Lentils")])?;
//! let result = DegreeCentrality::compute(&graph, &DegreeCentralityConfig::default())?;
//!
//! assert_eq!(result.score("Iron"), Some(1.0));
//! assert_eq!(result.score("Spinach"), Some(0.5));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::HashMap;

use tracing::debug;

use super::centrality::{check_graph_size, CentralityMap, DEFAULT_MAX_GRAPH_NODES};
use crate::store::{BipartiteGraph, GraphResult};

/// Configuration for Degree Centrality computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeCentralityConfig {
    /// Maximum number of nodes allowed before returning an error.
    /// Set to `None` to disable the check.
    /// Default: 10,000,000 (10M nodes)
    pub max_graph_nodes: Option<usize>,
}

impl Default for DegreeCentralityConfig {
    fn default() -> Self {
        Self { max_graph_nodes: Some(DEFAULT_MAX_GRAPH_NODES) }
    }
}

impl DegreeCentralityConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of nodes allowed.
    ///
    /// If the graph has more nodes than this limit, the algorithm will
    /// return a [`GraphError::GraphTooLarge`] error.
    ///
    /// Set to `None` to disable the check (use with caution).
    ///
    /// [`GraphError::GraphTooLarge`]: crate::store::GraphError::GraphTooLarge
    pub const fn with_max_graph_nodes(mut self, limit: Option<usize>) -> Self {
        self.max_graph_nodes = limit;
        self
    }
}

/// Degree Centrality algorithm implementation.
pub struct DegreeCentrality;

impl DegreeCentrality {
    /// Compute degree centrality for every node in the graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyGraph`] if the graph has fewer than two
    /// nodes, or [`GraphError::GraphTooLarge`] if it exceeds the configured
    /// limit.
    ///
    /// [`GraphError::EmptyGraph`]: crate::store::GraphError::EmptyGraph
    /// [`GraphError::GraphTooLarge`]: crate::store::GraphError::GraphTooLarge
    pub fn compute(
        graph: &BipartiteGraph,
        config: &DegreeCentralityConfig,
    ) -> GraphResult<CentralityMap> {
        check_graph_size(graph, 2, config.max_graph_nodes, "degree_centrality")?;

        let n = graph.node_count();
        let adjacency = graph.adjacency();
        let factor = if n > 1 { 1.0 / (n - 1) as f64 } else { 0.0 };

        let scores: HashMap<_, _> = graph
            .nodes()
            .enumerate()
            .map(|(index, node)| (node.id.clone(), adjacency.degree(index) as f64 * factor))
            .collect();

        debug!(nodes = n, edges = graph.edge_count(), "computed degree centrality");

        Ok(CentralityMap { scores, normalized: true })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::GraphError;

    #[test]
    fn config_defaults() {
        let config = DegreeCentralityConfig::default();
        assert_eq!(config.max_graph_nodes, Some(DEFAULT_MAX_GRAPH_NODES));
    }

    #[test]
    fn config_builder() {
        let config = DegreeCentralityConfig::new().with_max_graph_nodes(Some(1000));
        assert_eq!(config.max_graph_nodes, Some(1000));
    }

    #[test]
    fn empty_graph_fails() {
        let err = DegreeCentrality::compute(&BipartiteGraph::new(), &DegreeCentralityConfig::new())
            .unwrap_err();
        assert!(matches!(err, GraphError::EmptyGraph { required: 2, actual: 0 }));
    }
}
