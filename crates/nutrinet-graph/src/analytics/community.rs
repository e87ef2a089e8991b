//! Greedy Modularity Community Detection.
//!
//! This module implements the Clauset-Newman-Moore (CNM) agglomerative
//! algorithm: every node starts in its own community and the pair of
//! adjacent communities whose merge raises modularity the most is merged,
//! until no merge raises it at all.
//!
//! # Algorithm
//!
//! With m edges, every gain is kept scaled by (2m)² so it stays an exact
//! integer. For two adjacent communities i and j, with L_ij edges between
//! them and degree sums d_i and d_j:
//!
//! - ΔQ_ij * (2m)² = 2 * (2m * L_ij - d_i * d_j)
//!
//! After merging j into i, L_ik becomes L_ik + L_jk, d_i becomes d_i + d_j,
//! and every gain involving i is recomputed. The scaled modularity starts at
//! -Σ d_i² and accumulates each accepted gain; it is divided by (2m)² once
//! at the end.
//!
//! Candidate merges sit in a max-heap. Entries are never removed eagerly;
//! an entry popped for a dead community or a gain that no longer matches the
//! current table is skipped.
//!
//! # Determinism
//!
//! Community indices start as node positions in first-seen order. Among
//! equal gains the pair with the lowest (smaller, larger) index wins, and a
//! merged community keeps the smaller index. The same graph therefore
//! always produces the same partition.
//!
//! # Example
//!
//! ```
//! use nutrinet_graph::analytics::{CommunityConfig, CommunityDetection};
//! use nutrinet_graph::store::BipartiteGraph;
//!
//! let graph = BipartiteGraph::from_pairs([
//!     ("Iron", "Spinach"),
//!     ("Iron", "Lentils"),
//!     ("Calcium", "Milk"),
//!     ("Calcium", "Cheese"),
//! ])?;
//!
//! let result = CommunityDetection::detect(&graph, &CommunityConfig::default())?;
//! assert_eq!(result.len(), 2);
//! assert_eq!(result.community_of("Spinach"), result.community_of("Iron"));
//! assert_ne!(result.community_of("Milk"), result.community_of("Iron"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use nutrinet_core::NodeId;
use serde::Serialize;
use tracing::debug;

use super::centrality::{check_graph_size, DEFAULT_MAX_GRAPH_NODES};
use crate::index::NodeIndex;
use crate::store::{BipartiteGraph, GraphResult};

/// Configuration for community detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityConfig {
    /// Maximum number of nodes allowed before returning an error.
    /// Set to `None` to disable the check.
    /// Default: 10,000,000 (10M nodes)
    pub max_graph_nodes: Option<usize>,
}

impl Default for CommunityConfig {
    fn default() -> Self {
        Self { max_graph_nodes: Some(DEFAULT_MAX_GRAPH_NODES) }
    }
}

impl CommunityConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of nodes allowed.
    pub const fn with_max_graph_nodes(mut self, limit: Option<usize>) -> Self {
        self.max_graph_nodes = limit;
        self
    }
}

/// A set of nodes forming one community.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Community {
    members: Vec<NodeId>,
}

impl Community {
    /// Create a community from its members.
    pub fn new(members: Vec<NodeId>) -> Self {
        Self { members }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the community has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns true if `node` is a member.
    pub fn contains(&self, node: &str) -> bool {
        self.members.iter().any(|member| member.as_str() == node)
    }

    /// Iterate over members.
    pub fn iter(&self) -> std::slice::Iter<'_, NodeId> {
        self.members.iter()
    }

    /// The members as a slice.
    pub fn members(&self) -> &[NodeId] {
        &self.members
    }
}

impl<'a> IntoIterator for &'a Community {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// Result of community detection.
///
/// Communities are ordered by descending size, ties by the position of
/// their earliest member; members are listed in graph order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunityPartition {
    /// The disjoint communities covering every node.
    pub communities: Vec<Community>,

    /// Modularity of this partition.
    pub modularity: f64,

    /// Number of merges performed.
    pub merges: usize,
}

impl CommunityPartition {
    /// Number of communities.
    pub fn len(&self) -> usize {
        self.communities.len()
    }

    /// Returns true if there are no communities.
    pub fn is_empty(&self) -> bool {
        self.communities.is_empty()
    }

    /// Iterate over communities in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Community> {
        self.communities.iter()
    }

    /// Position of the community containing `node`.
    pub fn community_of(&self, node: &str) -> Option<usize> {
        self.communities.iter().position(|community| community.contains(node))
    }

    /// Size of each community, in order.
    pub fn sizes(&self) -> Vec<usize> {
        self.communities.iter().map(Community::len).collect()
    }

    /// Total number of nodes across all communities.
    pub fn node_count(&self) -> usize {
        self.communities.iter().map(Community::len).sum()
    }
}

/// A candidate merge in the max-heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MergeCandidate {
    /// ΔQ scaled by (2m)².
    gain: i64,
    low: usize,
    high: usize,
}

impl MergeCandidate {
    fn new(gain: i64, a: usize, b: usize) -> Self {
        Self { gain, low: a.min(b), high: a.max(b) }
    }
}

impl Ord for MergeCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Larger gain first, then the lowest index pair
        self.gain
            .cmp(&other.gain)
            .then_with(|| other.low.cmp(&self.low))
            .then_with(|| other.high.cmp(&self.high))
    }
}

impl PartialOrd for MergeCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Agglomeration state for the CNM algorithm.
struct Agglomeration {
    /// Twice the edge count.
    two_m: i64,
    /// Edge count between each adjacent community pair, stored in both directions.
    links: Vec<BTreeMap<usize, i64>>,
    /// Sum of member degrees per community.
    degree: Vec<i64>,
    members: Vec<Vec<NodeIndex>>,
    alive: Vec<bool>,
    heap: BinaryHeap<MergeCandidate>,
}

impl Agglomeration {
    fn new(graph: &BipartiteGraph) -> Self {
        let n = graph.node_count();
        let adjacency = graph.adjacency();

        let mut state = Self {
            two_m: 2 * graph.edge_count() as i64,
            links: vec![BTreeMap::new(); n],
            degree: (0..n).map(|i| adjacency.degree(i) as i64).collect(),
            members: (0..n).map(|i| vec![i]).collect(),
            alive: vec![true; n],
            heap: BinaryHeap::new(),
        };

        for i in 0..n {
            for j in adjacency.neighbors(i) {
                state.links[i].insert(j, 1);
                if i < j {
                    let gain = state.gain(i, j, 1);
                    state.heap.push(MergeCandidate::new(gain, i, j));
                }
            }
        }

        state
    }

    /// Scaled gain of merging `i` and `j` with `links` edges between them.
    fn gain(&self, i: usize, j: usize, links: i64) -> i64 {
        2 * (self.two_m * links - self.degree[i] * self.degree[j])
    }

    /// Scaled modularity with every node alone.
    fn singleton_modularity(&self) -> i64 {
        -self.degree.iter().map(|d| d * d).sum::<i64>()
    }

    /// Pop the best live candidate, discarding stale entries.
    fn next_candidate(&mut self) -> Option<MergeCandidate> {
        while let Some(candidate) = self.heap.pop() {
            let (low, high) = (candidate.low, candidate.high);
            if !self.alive[low] || !self.alive[high] {
                continue;
            }
            let current = self.links[low].get(&high).map(|&links| self.gain(low, high, links));
            if current == Some(candidate.gain) {
                return Some(candidate);
            }
        }
        None
    }

    /// Merge community `j` into community `i`.
    fn merge(&mut self, i: usize, j: usize) {
        let from_j = std::mem::take(&mut self.links[j]);
        self.links[i].remove(&j);
        for (k, links) in from_j {
            if k == i {
                continue;
            }
            self.links[k].remove(&j);
            *self.links[i].entry(k).or_insert(0) += links;
        }

        self.degree[i] += self.degree[j];
        self.degree[j] = 0;
        self.alive[j] = false;

        // d_i changed, so every pair touching i gets a fresh entry
        let touching: Vec<(usize, i64)> = self.links[i].iter().map(|(&k, &l)| (k, l)).collect();
        for (k, links) in touching {
            self.links[k].insert(i, links);
            let gain = self.gain(i, k, links);
            self.heap.push(MergeCandidate::new(gain, i, k));
        }

        let moved = std::mem::take(&mut self.members[j]);
        self.members[i].extend(moved);
    }

    fn into_communities(self, graph: &BipartiteGraph) -> Vec<Community> {
        let mut groups: Vec<(usize, Vec<NodeIndex>)> = self
            .members
            .into_iter()
            .enumerate()
            .zip(self.alive)
            .filter_map(|(group, alive)| alive.then_some(group))
            .collect();

        for (_, members) in &mut groups {
            members.sort_unstable();
        }
        // Descending size, then lowest surviving index
        groups.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then_with(|| a.0.cmp(&b.0)));

        groups
            .into_iter()
            .map(|(_, members)| {
                Community::new(members.into_iter().map(|m| graph.node_at(m).id.clone()).collect())
            })
            .collect()
    }
}

/// Greedy modularity community detection.
pub struct CommunityDetection;

impl CommunityDetection {
    /// Partition the graph into communities by greedy modularity maximization.
    ///
    /// A graph without edges yields one singleton community per node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyGraph`] if the graph has no nodes, or
    /// [`GraphError::GraphTooLarge`] if it exceeds the configured limit.
    ///
    /// [`GraphError::EmptyGraph`]: crate::store::GraphError::EmptyGraph
    /// [`GraphError::GraphTooLarge`]: crate::store::GraphError::GraphTooLarge
    pub fn detect(
        graph: &BipartiteGraph,
        config: &CommunityConfig,
    ) -> GraphResult<CommunityPartition> {
        check_graph_size(graph, 1, config.max_graph_nodes, "greedy_modularity")?;

        if graph.edge_count() == 0 {
            let communities =
                graph.nodes().map(|node| Community::new(vec![node.id.clone()])).collect();
            return Ok(CommunityPartition { communities, modularity: 0.0, merges: 0 });
        }

        let mut state = Agglomeration::new(graph);
        let mut scaled = state.singleton_modularity();
        let mut merges = 0usize;

        while let Some(candidate) = state.next_candidate() {
            if candidate.gain <= 0 {
                break;
            }
            state.merge(candidate.low, candidate.high);
            scaled += candidate.gain;
            merges += 1;
        }

        let modularity = scaled as f64 / (state.two_m as f64).powi(2);
        let communities = state.into_communities(graph);

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            merges,
            communities = communities.len(),
            modularity,
            "detected communities"
        );

        Ok(CommunityPartition { communities, modularity, merges })
    }
}
