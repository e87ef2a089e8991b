//! Fruchterman-Reingold spring layout.
//!
//! Nodes repel each other like charged particles and edges pull their
//! endpoints together like springs. Each step moves every node along its net
//! force, capped by a temperature that cools linearly to zero, so the
//! system settles instead of oscillating.
//!
//! # Forces
//!
//! With optimal distance k and separation d:
//!
//! - Repulsion between every pair: k² / d
//! - Attraction along every edge: d² / k
//!
//! Separations below 0.01 are clamped to 0.01 to keep forces finite.
//!
//! # Output
//!
//! Positions are centred on the origin and rescaled so the largest absolute
//! coordinate equals the configured scale.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::{Coordinates, Dimensions, Layout, LayoutConfig};
use crate::analytics::CentralityMap;
use crate::store::{BipartiteGraph, GraphError, GraphResult};

const MIN_DISTANCE: f64 = 0.01;

/// Spring layout algorithm implementation.
pub struct ForceLayout;

impl ForceLayout {
    /// Lay out every node of the graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyGraph`] for a graph without nodes,
    /// [`GraphError::InvalidParameter`] for a non-positive or non-finite `k`
    /// or `scale`, or [`GraphError::GraphTooLarge`] past the node limit.
    pub fn compute(graph: &BipartiteGraph, config: &LayoutConfig) -> GraphResult<Layout> {
        Self::validate(config)?;
        crate::analytics::check_graph_size(graph, 1, config.max_graph_nodes, "spring_layout")?;

        let n = graph.node_count();
        let dim = config.dimensions.count();

        if n == 1 {
            let positions = graph.nodes().map(|node| (node.id.clone(), origin(dim))).collect();
            return Ok(Layout { positions, dimensions: config.dimensions, iterations: 0 });
        }

        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut pos: Vec<[f64; 3]> = (0..n)
            .map(|_| {
                let mut p = [0.0; 3];
                for c in p.iter_mut().take(dim) {
                    *c = rng.gen::<f64>();
                }
                p
            })
            .collect();

        let k = config.k.unwrap_or_else(|| (1.0 / n as f64).sqrt());
        let iterations = Self::relax(graph, &mut pos, dim, k, config);
        rescale(&mut pos, dim, config.scale);

        let positions: HashMap<_, _> = graph
            .nodes()
            .zip(&pos)
            .map(|(node, p)| (node.id.clone(), to_coordinates(p, config.dimensions)))
            .collect();

        debug!(
            nodes = n,
            edges = graph.edge_count(),
            dimensions = dim,
            iterations,
            seed = config.seed,
            "computed spring layout"
        );

        Ok(Layout { positions, dimensions: config.dimensions, iterations })
    }

    /// Lay out the subgraph of nodes whose centrality meets `threshold`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyGraph`] if no node meets the threshold,
    /// plus the errors of [`compute`](Self::compute).
    pub fn compute_filtered(
        graph: &BipartiteGraph,
        centrality: &CentralityMap,
        threshold: f64,
        config: &LayoutConfig,
    ) -> GraphResult<Layout> {
        let sub = graph.subgraph(centrality.at_least(threshold));
        debug!(threshold, kept = sub.node_count(), "filtered nodes by centrality");
        Self::compute(&sub, config)
    }

    fn validate(config: &LayoutConfig) -> GraphResult<()> {
        if let Some(k) = config.k {
            if !k.is_finite() || k <= 0.0 {
                return Err(GraphError::InvalidParameter(format!(
                    "k must be positive and finite, got {k}"
                )));
            }
        }
        if !config.scale.is_finite() || config.scale <= 0.0 {
            return Err(GraphError::InvalidParameter(format!(
                "scale must be positive and finite, got {}",
                config.scale
            )));
        }
        Ok(())
    }

    /// Run the simulation in place; returns the number of steps taken.
    fn relax(
        graph: &BipartiteGraph,
        pos: &mut [[f64; 3]],
        dim: usize,
        k: f64,
        config: &LayoutConfig,
    ) -> usize {
        let n = pos.len();
        let adjacency = graph.adjacency();

        // Temperature starts at a tenth of the widest initial extent
        let mut temperature = (0..dim)
            .map(|d| {
                let (lo, hi) = pos
                    .iter()
                    .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                        (lo.min(p[d]), hi.max(p[d]))
                    });
                hi - lo
            })
            .fold(0.0_f64, f64::max)
            * 0.1;
        let cooling = temperature / (config.iterations as f64 + 1.0);

        let mut displacement = vec![[0.0_f64; 3]; n];
        let mut steps = 0;

        for _ in 0..config.iterations {
            steps += 1;

            for (i, disp) in displacement.iter_mut().enumerate() {
                *disp = [0.0; 3];
                for j in 0..n {
                    if i == j {
                        continue;
                    }
                    let mut delta = [0.0; 3];
                    for d in 0..dim {
                        delta[d] = pos[i][d] - pos[j][d];
                    }
                    let distance = norm(&delta).max(MIN_DISTANCE);
                    let attraction =
                        if adjacency.contains_edge(i, j) { distance / k } else { 0.0 };
                    let factor = k * k / (distance * distance) - attraction;
                    for d in 0..dim {
                        disp[d] += delta[d] * factor;
                    }
                }
            }

            let mut moved_sq = 0.0;
            for (p, disp) in pos.iter_mut().zip(&displacement) {
                let mut length = norm(disp);
                if length < MIN_DISTANCE {
                    length = 0.1;
                }
                for d in 0..dim {
                    let step = disp[d] * temperature / length;
                    p[d] += step;
                    moved_sq += step * step;
                }
            }

            temperature -= cooling;

            if moved_sq.sqrt() / (n as f64) < config.threshold {
                break;
            }
        }

        steps
    }
}

fn norm(v: &[f64; 3]) -> f64 {
    v.iter().map(|c| c * c).sum::<f64>().sqrt()
}

fn origin(dim: usize) -> Coordinates {
    if dim == 2 {
        Coordinates::Planar([0.0; 2])
    } else {
        Coordinates::Spatial([0.0; 3])
    }
}

fn to_coordinates(p: &[f64; 3], dimensions: Dimensions) -> Coordinates {
    match dimensions {
        Dimensions::Two => Coordinates::Planar([p[0], p[1]]),
        Dimensions::Three => Coordinates::Spatial(*p),
    }
}

/// Centre positions on the origin and scale the largest |coordinate| to `scale`.
fn rescale(pos: &mut [[f64; 3]], dim: usize, scale: f64) {
    let n = pos.len() as f64;
    for d in 0..dim {
        let mean = pos.iter().map(|p| p[d]).sum::<f64>() / n;
        for p in pos.iter_mut() {
            p[d] -= mean;
        }
    }

    let lim = pos.iter().flat_map(|p| p[..dim].iter()).fold(0.0_f64, |acc, c| acc.max(c.abs()));
    if lim > 0.0 {
        for p in pos.iter_mut() {
            for c in p.iter_mut().take(dim) {
                *c *= scale / lim;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rescale_centres_and_bounds() {
        let mut pos = vec![[0.0, 0.0, 0.0], [4.0, 2.0, 0.0]];
        rescale(&mut pos, 2, 1.0);

        assert!((pos[0][0] + 1.0).abs() < 1e-12);
        assert!((pos[1][0] - 1.0).abs() < 1e-12);
        assert!((pos[0][1] + 0.5).abs() < 1e-12);
        assert!((pos[1][1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn rescale_leaves_collapsed_points() {
        let mut pos = vec![[0.3, 0.3, 0.0], [0.3, 0.3, 0.0]];
        rescale(&mut pos, 2, 1.0);
        assert!(pos.iter().all(|p| p[0].abs() < 1e-12 && p[1].abs() < 1e-12));
    }

    #[test]
    fn rejects_bad_parameters() {
        let graph = BipartiteGraph::from_pairs([("Iron", "Spinach")]).expect("build");

        let config = LayoutConfig::new(Dimensions::Two, 1).with_k(0.0);
        assert!(matches!(
            ForceLayout::compute(&graph, &config),
            Err(GraphError::InvalidParameter(_))
        ));

        let config = LayoutConfig::new(Dimensions::Two, 1).with_scale(f64::NAN);
        assert!(matches!(
            ForceLayout::compute(&graph, &config),
            Err(GraphError::InvalidParameter(_))
        ));
    }

    #[test]
    fn single_node_sits_at_origin() {
        let graph = BipartiteGraph::from_pairs([("Iron", "Spinach")])
            .expect("build")
            .subgraph(["Spinach"]);
        let layout =
            ForceLayout::compute(&graph, &LayoutConfig::new(Dimensions::Three, 9)).expect("layout");

        assert_eq!(layout.position("Spinach"), Some(&Coordinates::Spatial([0.0; 3])));
        assert_eq!(layout.iterations, 0);
    }
}
