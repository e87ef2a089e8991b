//! The bipartite graph model.
//!
//! This module owns the in-memory graph built from ingested rows, plus the
//! row filter and the structural summaries derived from a built graph.
//!
//! # Overview
//!
//! - [`BipartiteGraph`] - Nodes, edges, neighbour queries, induced subgraphs
//! - [`RowFilter`] - Restrict rows to selected compounds and foods before building
//! - [`GraphSummary`] - Partition sizes, edge count, density
//! - [`DegreeDistribution`] - Degree histogram counts
//!
//! # Example
//!
//! ```
//! use nutrinet_core::Row;
//! use nutrinet_graph::store::{BipartiteGraph, RowFilter};
//!
//! let rows = vec![
//!     Row::new("VitaminC", "Orange")?,
//!     Row::new("VitaminC", "Lemon")?,
//!     Row::new("Potassium", "Orange")?,
//! ];
//!
//! let filter = RowFilter::new().with_compound("VitaminC");
//! let graph = BipartiteGraph::build(filter.apply(rows))?;
//!
//! assert_eq!(graph.node_count(), 3);
//! assert!(!graph.contains("Potassium"));
//! assert_eq!(graph.degree("VitaminC")?, 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod filter;
mod graph;
mod summary;

pub use error::{GraphError, GraphResult};
pub use filter::RowFilter;
pub use graph::BipartiteGraph;
pub use summary::{DegreeDistribution, GraphSummary};
