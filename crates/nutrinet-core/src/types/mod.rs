//! Core data types for `NutriNet`.
//!
//! This module defines the fundamental types that represent nodes, edges,
//! and ingested rows in the bipartite data model.

mod edge;
mod node;
mod row;

pub use edge::Edge;
pub use node::{Node, NodeId, Partition};
pub use row::Row;
