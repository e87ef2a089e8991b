//! Graph analytics algorithms.
//!
//! This module provides the structural analyses run over a built
//! [`BipartiteGraph`](crate::store::BipartiteGraph): node importance and
//! community structure. Every algorithm borrows the graph immutably and
//! returns a fresh result; nothing is cached on the graph.
//!
//! # Algorithms
//!
//! ## Centrality Measures
//!
//! - [`DegreeCentrality`] - Fraction of other nodes directly connected
//! - [`BetweennessCentrality`] - Brandes algorithm for bridge/bottleneck detection
//!
//! ## Community Detection
//!
//! - [`CommunityDetection`] - Greedy modularity maximization (Clauset-Newman-Moore)
//! - [`modularity`] - Score an arbitrary partition
//!
//! # Example
//!
//! ```
//! use nutrinet_graph::analytics::{
//!     BetweennessCentrality, BetweennessCentralityConfig, CommunityConfig, CommunityDetection,
//! };
//! use nutrinet_graph::store::BipartiteGraph;
//!
//! let graph = BipartiteGraph::from_pairs([
//!     ("VitaminC", "Orange"),
//!     ("VitaminC", "Lemon"),
//!     ("Potassium", "Orange"),
//! ])?;
//!
//! let config = BetweennessCentralityConfig::default();
//! let betweenness = BetweennessCentrality::compute(&graph, &config)?;
//! let (top, _) = betweenness.max().expect("non-empty");
//! assert!(top.as_str() == "VitaminC" || top.as_str() == "Orange");
//!
//! let communities = CommunityDetection::detect(&graph, &CommunityConfig::default())?;
//! assert_eq!(communities.node_count(), graph.node_count());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Complexity
//!
//! | Algorithm | Time Complexity | Best For |
//! |-----------|-----------------|----------|
//! | Degree | O(V) | Quick overview |
//! | Betweenness | O(V * E) | Finding bottlenecks |
//! | Greedy modularity | O(E * log V) typical | Cohesive groups |

mod betweenness;
mod centrality;
mod community;
mod degree;
mod modularity;

pub use betweenness::{BetweennessCentrality, BetweennessCentralityConfig};
pub(crate) use centrality::check_graph_size;
pub use centrality::{CentralityMap, DEFAULT_MAX_GRAPH_NODES};
pub use community::{Community, CommunityConfig, CommunityDetection, CommunityPartition};
pub use degree::{DegreeCentrality, DegreeCentralityConfig};
pub use modularity::modularity;
