//! Node types for the bipartite graph.
//!
//! A node is identified by its string value and tagged with the
//! [`Partition`] it belongs to.
//!
//! # Example
//!
//! ```
//! use nutrinet_core::types::{Node, NodeId, Partition};
//!
//! let node = Node::new("VitaminC", Partition::Compound);
//! assert_eq!(node.id.as_str(), "VitaminC");
//! assert!(node.is_compound());
//!
//! // Also works via From trait
//! let id: NodeId = "Orange".into();
//! assert_eq!(id.to_string(), "Orange");
//! ```

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The identity of a node: its string value.
///
/// Two nodes with the same string are the same node, regardless of which
/// row introduced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a new node identifier.
    #[inline]
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    #[inline]
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NodeId {
    #[inline]
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Which side of the bipartite graph a node lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Partition {
    /// Partition A: the compound (nutrient) side.
    Compound,
    /// Partition B: the food (item) side.
    Food,
}

impl Partition {
    /// The other partition.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Compound => Self::Food,
            Self::Food => Self::Compound,
        }
    }

    /// A lowercase name for display.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compound => "compound",
            Self::Food => "food",
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the bipartite graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    /// The node's identity.
    pub id: NodeId,
    /// The partition the node was assigned on first sight.
    pub partition: Partition,
}

impl Node {
    /// Create a new node.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<NodeId>, partition: Partition) -> Self {
        Self { id: id.into(), partition }
    }

    /// Returns true if this node is on the compound side.
    #[inline]
    #[must_use]
    pub fn is_compound(&self) -> bool {
        self.partition == Partition::Compound
    }

    /// Returns true if this node is on the food side.
    #[inline]
    #[must_use]
    pub fn is_food(&self) -> bool {
        self.partition == Partition::Food
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_borrows_as_str() {
        let mut set = std::collections::HashSet::new();
        set.insert(NodeId::new("Orange"));
        assert!(set.contains("Orange"));
        assert!(!set.contains("Lemon"));
    }

    #[test]
    fn partition_opposite() {
        assert_eq!(Partition::Compound.opposite(), Partition::Food);
        assert_eq!(Partition::Food.opposite(), Partition::Compound);
        assert_eq!(Partition::Food.to_string(), "food");
    }

    #[test]
    fn node_serializes_flat_id() {
        let node = Node::new("Potassium", Partition::Compound);
        let json = serde_json::to_string(&node).expect("serialize");
        assert_eq!(json, r#"{"id":"Potassium","partition":"compound"}"#);
    }
}
