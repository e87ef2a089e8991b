//! Layered pathway expansion.
//!
//! Starting from one node, each step expands the current layer to every
//! neighbour not yet visited and reports what it reached as a
//! [`TraversalFrame`]. In a bipartite graph layers alternate between
//! compounds and foods, so a run from a compound reads as "which foods carry
//! it, which other compounds do those foods carry, ...".
//!
//! The iterator is lazy and finite. It holds no rendering state and applies
//! no delays; pacing frames is up to the caller.

mod pathway;

pub use pathway::{PathwayTraversal, TraversalEdge, TraversalFrame};
