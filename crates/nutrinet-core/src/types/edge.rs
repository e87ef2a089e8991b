//! Edge types for the bipartite graph.
//!
//! Every edge joins exactly one compound and one food. The roles are named,
//! so an edge cannot be built with both endpoints on the same side.
//!
//! # Example
//!
//! ```
//! use nutrinet_core::types::Edge;
//!
//! let edge = Edge::new("VitaminC", "Orange");
//! assert_eq!(edge.compound.as_str(), "VitaminC");
//! assert_eq!(edge.food.as_str(), "Orange");
//! assert!(edge.touches("Orange"));
//! ```

use serde::{Deserialize, Serialize};

use super::NodeId;

/// An undirected edge between a compound and a food.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    /// The compound endpoint.
    pub compound: NodeId,
    /// The food endpoint.
    pub food: NodeId,
}

impl Edge {
    /// Create a new edge.
    #[inline]
    #[must_use]
    pub fn new(compound: impl Into<NodeId>, food: impl Into<NodeId>) -> Self {
        Self { compound: compound.into(), food: food.into() }
    }

    /// Returns true if `node` is one of the two endpoints.
    #[must_use]
    pub fn touches(&self, node: &str) -> bool {
        self.compound.as_str() == node || self.food.as_str() == node
    }

    /// The endpoints as a `(compound, food)` pair.
    #[inline]
    #[must_use]
    pub fn endpoints(&self) -> (&NodeId, &NodeId) {
        (&self.compound, &self.food)
    }
}
