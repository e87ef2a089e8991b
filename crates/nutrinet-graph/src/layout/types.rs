//! Layout result types.

use std::collections::HashMap;

use nutrinet_core::NodeId;
use serde::Serialize;

use super::Dimensions;

/// A node's position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Coordinates {
    /// An (x, y) position.
    Planar([f64; 2]),
    /// An (x, y, z) position.
    Spatial([f64; 3]),
}

impl Coordinates {
    /// The coordinates as a slice of length 2 or 3.
    #[must_use]
    pub fn components(&self) -> &[f64] {
        match self {
            Self::Planar(c) => c.as_slice(),
            Self::Spatial(c) => c.as_slice(),
        }
    }

    /// The x coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.components()[0]
    }

    /// The y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.components()[1]
    }

    /// The z coordinate, if spatial.
    #[must_use]
    pub fn z(&self) -> Option<f64> {
        match self {
            Self::Planar(_) => None,
            Self::Spatial(c) => Some(c[2]),
        }
    }

    /// Euclidean distance to another position of the same dimensionality.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        self.components()
            .iter()
            .zip(other.components())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }
}

/// Node positions produced by a layout run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    /// Position of each node.
    pub positions: HashMap<NodeId, Coordinates>,

    /// Dimensionality of every position.
    pub dimensions: Dimensions,

    /// Number of relaxation steps actually run.
    pub iterations: usize,
}

impl Layout {
    /// Position of a node.
    #[must_use]
    pub fn position(&self, node: &str) -> Option<&Coordinates> {
        self.positions.get(node)
    }

    /// Number of placed nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if no node is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate over `(node, position)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &Coordinates)> + '_ {
        self.positions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_accessors() {
        let planar = Coordinates::Planar([1.0, 2.0]);
        assert_eq!(planar.components(), &[1.0, 2.0]);
        assert!(planar.z().is_none());

        let spatial = Coordinates::Spatial([1.0, 2.0, 3.0]);
        assert!((spatial.x() - 1.0).abs() < f64::EPSILON);
        assert!((spatial.y() - 2.0).abs() < f64::EPSILON);
        assert_eq!(spatial.z(), Some(3.0));
    }

    #[test]
    fn distance() {
        let a = Coordinates::Planar([0.0, 0.0]);
        let b = Coordinates::Planar([3.0, 4.0]);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn serializes_as_arrays() {
        let json = serde_json::to_string(&Coordinates::Planar([0.5, -0.5])).expect("serialize");
        assert_eq!(json, "[0.5,-0.5]");
    }
}
