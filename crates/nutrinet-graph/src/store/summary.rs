//! Structural summaries of a built graph.
//!
//! These back the data-overview panel and degree histogram of a dashboard.
//! Binning and plotting are left to the presentation layer; this module
//! only counts.

use std::collections::BTreeMap;

use nutrinet_core::Partition;
use serde::Serialize;

use super::BipartiteGraph;

/// Partition sizes and edge density of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphSummary {
    /// Number of compound nodes.
    pub compounds: usize,
    /// Number of food nodes.
    pub foods: usize,
    /// Number of distinct edges.
    pub edges: usize,
    /// Number of nodes with no edges.
    pub isolated: usize,
    /// Fraction of possible compound-food pairs that are edges.
    ///
    /// `edges / (compounds * foods)`, or 0 when either side is empty.
    pub density: f64,
}

impl GraphSummary {
    /// Total node count.
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.compounds + self.foods
    }
}

/// Number of nodes at each degree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DegreeDistribution {
    /// Degree -> number of nodes with that degree, ascending by degree.
    pub counts: BTreeMap<usize, usize>,
}

impl DegreeDistribution {
    /// Number of nodes with exactly `degree` neighbours.
    #[must_use]
    pub fn count(&self, degree: usize) -> usize {
        self.counts.get(&degree).copied().unwrap_or(0)
    }

    /// Total number of nodes counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Smallest degree present.
    #[must_use]
    pub fn min(&self) -> Option<usize> {
        self.counts.keys().next().copied()
    }

    /// Largest degree present.
    #[must_use]
    pub fn max(&self) -> Option<usize> {
        self.counts.keys().next_back().copied()
    }

    /// Mean degree, or 0 for an empty graph.
    #[must_use]
    pub fn mean(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let sum: usize = self.counts.iter().map(|(degree, count)| degree * count).sum();
        sum as f64 / total as f64
    }
}

impl BipartiteGraph {
    /// Summarise partition sizes and density.
    #[must_use]
    pub fn summary(&self) -> GraphSummary {
        let compounds = self.nodes_in(Partition::Compound).count();
        let foods = self.node_count() - compounds;
        let edges = self.edge_count();
        let isolated =
            (0..self.node_count()).filter(|&index| self.adjacency().degree(index) == 0).count();
        let possible = compounds * foods;
        let density = if possible == 0 { 0.0 } else { edges as f64 / possible as f64 };

        GraphSummary { compounds, foods, edges, isolated, density }
    }

    /// Count nodes by degree.
    #[must_use]
    pub fn degree_distribution(&self) -> DegreeDistribution {
        let mut counts = BTreeMap::new();
        for index in 0..self.node_count() {
            *counts.entry(self.adjacency().degree(index)).or_insert(0) += 1;
        }
        DegreeDistribution { counts }
    }
}
