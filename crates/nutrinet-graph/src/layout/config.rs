//! Layout configuration.

use serde::Serialize;

/// Number of spatial dimensions to lay out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimensions {
    /// Planar (x, y) placement.
    Two,
    /// Spatial (x, y, z) placement.
    Three,
}

impl Dimensions {
    /// The number of coordinates per node.
    #[inline]
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

/// Configuration for the spring layout.
///
/// The seed and dimensionality have no defaults: callers pick them
/// explicitly so that a layout is always reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Output dimensionality.
    pub dimensions: Dimensions,

    /// Seed for the initial random placement.
    pub seed: u64,

    /// Optimal distance between nodes; larger values spread nodes further.
    /// `None` uses 1/sqrt(n).
    /// Default: None
    pub k: Option<f64>,

    /// Maximum number of relaxation steps.
    /// Default: 50
    pub iterations: usize,

    /// Stop early once the norm of a step's displacement vector, divided by
    /// the node count, falls below this.
    /// Default: 1e-4
    pub threshold: f64,

    /// Largest absolute coordinate after rescaling.
    /// Default: 1.0
    pub scale: f64,

    /// Maximum number of nodes allowed before returning an error.
    /// The simulation is O(n²) per step.
    /// Default: 10,000
    pub max_graph_nodes: Option<usize>,
}

/// Default node limit for the O(n²) spring simulation.
pub(crate) const DEFAULT_MAX_LAYOUT_NODES: usize = 10_000;

impl LayoutConfig {
    /// Create a configuration for the given dimensionality and seed.
    pub fn new(dimensions: Dimensions, seed: u64) -> Self {
        Self {
            dimensions,
            seed,
            k: None,
            iterations: 50,
            threshold: 1e-4,
            scale: 1.0,
            max_graph_nodes: Some(DEFAULT_MAX_LAYOUT_NODES),
        }
    }

    /// Set the optimal node distance (repulsion strength).
    pub const fn with_k(mut self, k: f64) -> Self {
        self.k = Some(k);
        self
    }

    /// Set the maximum number of relaxation steps.
    pub const fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the early-stop threshold.
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the output scale.
    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the maximum number of nodes allowed.
    pub const fn with_max_graph_nodes(mut self, limit: Option<usize>) -> Self {
        self.max_graph_nodes = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = LayoutConfig::new(Dimensions::Two, 7);
        assert_eq!(config.dimensions, Dimensions::Two);
        assert_eq!(config.seed, 7);
        assert!(config.k.is_none());
        assert_eq!(config.iterations, 50);
        assert!((config.threshold - 1e-4).abs() < f64::EPSILON);
        assert!((config.scale - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.max_graph_nodes, Some(DEFAULT_MAX_LAYOUT_NODES));
    }

    #[test]
    fn config_builder() {
        let config = LayoutConfig::new(Dimensions::Three, 1)
            .with_k(0.15)
            .with_iterations(200)
            .with_threshold(0.0)
            .with_scale(10.0)
            .with_max_graph_nodes(None);

        assert_eq!(config.dimensions.count(), 3);
        assert_eq!(config.k, Some(0.15));
        assert_eq!(config.iterations, 200);
        assert!(config.threshold.abs() < f64::EPSILON);
        assert!((config.scale - 10.0).abs() < f64::EPSILON);
        assert!(config.max_graph_nodes.is_none());
    }
}
