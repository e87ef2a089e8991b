//! Force-directed layout.
//!
//! This module places graph nodes in two or three dimensions with a
//! Fruchterman-Reingold spring simulation. Placement is purely numeric: the
//! result maps each node to coordinates and leaves drawing to the caller.
//!
//! # Overview
//!
//! - [`ForceLayout`] - The spring simulation, over a whole graph or a
//!   centrality-filtered subgraph
//! - [`LayoutConfig`] - Dimensions, seed, and simulation tuning
//! - [`Layout`] / [`Coordinates`] - The computed placement
//!
//! # Example
//!
//! ```
//! use nutrinet_graph::layout::{Dimensions, ForceLayout, LayoutConfig};
//! use nutrinet_graph::store::BipartiteGraph;
//!
//! let graph = BipartiteGraph::from_pairs([("Iron", "Spinach"), ("Iron", "Lentils")])?;
//! let config = LayoutConfig::new(Dimensions::Three, 42).with_k(0.15);
//!
//! let layout = ForceLayout::compute(&graph, &config)?;
//! assert_eq!(layout.len(), 3);
//! assert_eq!(layout.position("Iron").map(|p| p.components().len()), Some(3));
//!
//! // Same seed, same placement
//! assert_eq!(layout, ForceLayout::compute(&graph, &config)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod spring;
mod types;

pub use config::{Dimensions, LayoutConfig};
pub use spring::ForceLayout;
pub use types::{Coordinates, Layout};
