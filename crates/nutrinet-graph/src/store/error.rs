//! Error types for graph operations.

use nutrinet_core::{CoreError, Partition};
use thiserror::Error;

/// Errors that can occur while building or analysing a graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A value was used as both a compound and a food.
    #[error("schema violation: {value:?} is already a {existing}, cannot also be a {attempted}")]
    SchemaViolation {
        /// The offending value.
        value: String,
        /// The partition the value was first assigned to.
        existing: Partition,
        /// The partition the row tried to assign.
        attempted: Partition,
    },

    /// A node was not found in the graph.
    #[error("unknown node: {0:?}")]
    UnknownNode(String),

    /// The graph has too few nodes for the requested algorithm.
    #[error("graph too small: need at least {required} node(s), found {actual}")]
    EmptyGraph {
        /// Minimum number of nodes the algorithm needs.
        required: usize,
        /// Number of nodes present.
        actual: usize,
    },

    /// An ingested row failed validation.
    #[error("invalid row: {0}")]
    InvalidRow(String),

    /// An algorithm parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Graph is too large for the requested algorithm.
    #[error("graph too large: {node_count} nodes exceeds limit of {limit}")]
    GraphTooLarge {
        /// Number of nodes in the graph.
        node_count: usize,
        /// Maximum allowed nodes.
        limit: usize,
    },
}

impl GraphError {
    /// The node or value the error refers to, if any.
    #[must_use]
    pub fn offending_value(&self) -> Option<&str> {
        match self {
            Self::SchemaViolation { value, .. } | Self::UnknownNode(value) => Some(value),
            _ => None,
        }
    }
}

impl From<CoreError> for GraphError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => Self::InvalidRow(msg),
        }
    }
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
