//! `NutriNet` Core
//!
//! This crate provides the fundamental types shared by the `NutriNet`
//! analytics crates: node identifiers, partitions, edges, and the validated
//! two-column row that ingestion hands to the graph builder.
//!
//! # Overview
//!
//! - **Identifiers**: [`NodeId`] names a node by its string value
//! - **Partitions**: [`Partition`] tags a node as a compound or a food
//! - **Graph primitives**: [`Node`] and [`Edge`]
//! - **Ingestion**: [`Row`], a `(compound, food)` pair with named roles
//!
//! # Example
//!
//! ```
//! use nutrinet_core::{Partition, Row};
//!
//! let row = Row::new("VitaminC", "Orange").expect("non-blank values");
//! assert_eq!(row.compound(), "VitaminC");
//! assert_eq!(row.food(), "Orange");
//! assert_eq!(Partition::Compound.opposite(), Partition::Food);
//!
//! assert!(Row::new("  ", "Orange").is_err());
//! ```
//!
//! # Modules
//!
//! - [`types`] - Core data types ([`NodeId`], [`Node`], [`Edge`], [`Row`])
//! - [`error`] - Error types ([`CoreError`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use types::{Edge, Node, NodeId, Partition, Row};
