//! Graph indexes.
//!
//! This module provides the adjacency index used by every analytics and
//! traversal routine. The index is addressed by [`NodeIndex`], the position
//! of a node in the graph's first-seen order.
//!
//! # Overview
//!
//! - [`AdjacencyIndex`] - Sorted neighbour lists, updated on each edge insertion

mod adjacency;

pub use adjacency::{AdjacencyIndex, NodeIndex};
