//! `NutriNet` Graph
//!
//! This crate builds an in-memory bipartite graph of compounds and the foods
//! that contain them, and derives analytical results from it.
//!
//! # Modules
//!
//! - [`store`] - The bipartite graph model, row filtering, summaries
//! - [`index`] - Adjacency index kept in step with the edge set
//! - [`analytics`] - Centrality and community detection
//! - [`layout`] - Force-directed placement in two or three dimensions
//! - [`traversal`] - Layered pathway expansion from a start node
//!
//! # Example
//!
//! ```
//! use nutrinet_core::Row;
//! use nutrinet_graph::analytics::{DegreeCentrality, DegreeCentralityConfig};
//! use nutrinet_graph::store::BipartiteGraph;
//! use nutrinet_graph::traversal::PathwayTraversal;
//!
//! let rows = vec![
//!     Row::new("VitaminC", "Orange")?,
//!     Row::new("VitaminC", "Lemon")?,
//!     Row::new("Potassium", "Orange")?,
//! ];
//! let graph = BipartiteGraph::build(rows)?;
//! assert_eq!(graph.node_count(), 4);
//! assert_eq!(graph.edge_count(), 3);
//!
//! let degree = DegreeCentrality::compute(&graph, &DegreeCentralityConfig::default())?;
//! assert!((degree.score("Orange").unwrap_or_default() - 2.0 / 3.0).abs() < 1e-12);
//!
//! let frames: Vec<_> = PathwayTraversal::new(&graph, "VitaminC", 1)?.collect();
//! assert_eq!(frames.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod analytics;
pub mod index;
pub mod layout;
pub mod store;
pub mod traversal;
