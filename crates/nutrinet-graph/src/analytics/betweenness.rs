//! Betweenness Centrality implementation using Brandes algorithm.
//!
//! Betweenness centrality measures the extent to which a node lies on paths
//! between other nodes. In a compound-food graph, a food shared by otherwise
//! unrelated compounds (or a compound present in otherwise unrelated foods)
//! scores highly.
//!
//! # Algorithm
//!
//! This module implements Brandes' algorithm (2001). Edges are unweighted
//! and undirected, so each single-source pass is a BFS and the whole run is
//! O(V*E).
//!
//! # Formula
//!
//! BC(v) = Σ (σ_st(v) / σ_st) over unordered pairs s≠v≠t
//!
//! Where:
//! - σ_st is the total number of shortest paths from s to t
//! - σ_st(v) is the number of those paths passing through v
//!
//! Normalized scores divide by (n-1)(n-2)/2, the number of pairs not
//! involving v.
//!
//! # Example
//!
//! ```
//! use nutrinet_graph::analytics::{BetweennessCentrality, BetweennessCentralityConfig};
//! use nutrinet_graph::store::BipartiteGraph;
//!
//! // Spinach is the only link between Iron and Folate.
//! let graph = BipartiteGraph::from_pairs([("Iron", "Spinach"), ("Folate", "Spinach")])?;
//! let result = BetweennessCentrality::compute(&graph, &BetweennessCentralityConfig::default())?;
//!
//! assert_eq!(result.score("Spinach"), Some(1.0));
//! assert_eq!(result.score("Iron"), Some(0.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use super::centrality::{check_graph_size, CentralityMap, DEFAULT_MAX_GRAPH_NODES};
use crate::store::{BipartiteGraph, GraphResult};

/// Configuration for Betweenness Centrality computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BetweennessCentralityConfig {
    /// Whether to normalize centrality values to [0, 1].
    /// Default: true
    pub normalize: bool,

    /// Maximum number of nodes allowed before returning an error.
    /// Set to `None` to disable the check.
    /// Default: 10,000,000 (10M nodes)
    pub max_graph_nodes: Option<usize>,
}

impl Default for BetweennessCentralityConfig {
    fn default() -> Self {
        Self { normalize: true, max_graph_nodes: Some(DEFAULT_MAX_GRAPH_NODES) }
    }
}

impl BetweennessCentralityConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to normalize centrality values.
    ///
    /// When normalized, values are scaled to [0, 1] by dividing by
    /// (n-1)*(n-2)/2.
    pub const fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Set the maximum number of nodes allowed.
    ///
    /// If the graph has more nodes than this limit, the algorithm will
    /// return a [`GraphError::GraphTooLarge`] error instead of attempting
    /// the O(V*E) computation.
    ///
    /// [`GraphError::GraphTooLarge`]: crate::store::GraphError::GraphTooLarge
    pub const fn with_max_graph_nodes(mut self, limit: Option<usize>) -> Self {
        self.max_graph_nodes = limit;
        self
    }
}

/// Betweenness Centrality algorithm implementation.
///
/// Betweenness centrality quantifies the number of times a node acts as a
/// bridge along the shortest path between two other nodes.
pub struct BetweennessCentrality;

impl BetweennessCentrality {
    /// Compute betweenness centrality for all nodes in the graph.
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
        config: &BetweennessCentralityConfig,
    ) -> GraphResult<CentralityMap> {
        check_graph_size(graph, 2, config.max_graph_nodes, "betweenness_centrality")?;

        let n = graph.node_count();
        let adjacency = graph.adjacency();
        let mut centrality: Vec<f64> = vec![0.0; n];

        // Reused across sources
        let mut stack: Vec<usize> = Vec::with_capacity(n);
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut sigma: Vec<f64> = vec![0.0; n];
        let mut dist: Vec<i64> = vec![-1; n];
        let mut delta: Vec<f64> = vec![0.0; n];
        let mut queue: VecDeque<usize> = VecDeque::new();

        for s in 0..n {
            stack.clear();
            for list in &mut predecessors {
                list.clear();
            }
            sigma.fill(0.0);
            dist.fill(-1);
            delta.fill(0.0);

            sigma[s] = 1.0;
            dist[s] = 0;
            queue.push_back(s);

            // BFS: count shortest paths
            while let Some(v) = queue.pop_front() {
                stack.push(v);

                for w in adjacency.neighbors(v) {
                    if dist[w] < 0 {
                        dist[w] = dist[v] + 1;
                        queue.push_back(w);
                    }

                    if dist[w] == dist[v] + 1 {
                        sigma[w] += sigma[v];
                        predecessors[w].push(v);
                    }
                }
            }

            // Accumulation: pop in order of non-increasing distance
            while let Some(w) = stack.pop() {
                for &v in &predecessors[w] {
                    delta[v] += (sigma[v] / sigma[w]) * (1.0 + delta[w]);
                }
                if w != s {
                    centrality[w] += delta[w];
                }
            }
        }

        // Each unordered pair was counted from both ends
        for score in &mut centrality {
            *score /= 2.0;
        }

        if config.normalize && n > 2 {
            let normalization_factor = 2.0 / ((n - 1) * (n - 2)) as f64;
            for score in &mut centrality {
                *score *= normalization_factor;
            }
        }

        debug!(
            nodes = n,
            edges = graph.edge_count(),
            normalized = config.normalize,
            "computed betweenness centrality"
        );

        let scores: HashMap<_, _> =
            graph.nodes().map(|node| node.id.clone()).zip(centrality).collect();

        Ok(CentralityMap { scores, normalized: config.normalize })
    }
}
