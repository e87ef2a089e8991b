//! Modularity scoring.

use super::community::Community;
use crate::store::BipartiteGraph;

/// Modularity of a partition of `graph`.
///
/// Q = (1/2m) * Σ_ij [ A_ij - k_i * k_j / 2m ] * δ(c_i, c_j)
///
/// computed per community as Σ_c [ L_c / m - (d_c / 2m)² ], where L_c is the
/// number of edges inside community c and d_c the sum of its degrees.
/// Nodes not listed in any community count as singletons; identifiers not
/// in the graph are ignored. Returns 0 for a graph without edges.
pub fn modularity(graph: &BipartiteGraph, communities: &[Community]) -> f64 {
    let m = graph.edge_count() as f64;
    if m == 0.0 {
        return 0.0;
    }

    let n = graph.node_count();
    let adjacency = graph.adjacency();

    // Unlisted nodes get their own label past the listed communities
    let mut label: Vec<usize> = (communities.len()..communities.len() + n).collect();
    for (c, community) in communities.iter().enumerate() {
        for member in community.iter() {
            if let Ok(index) = graph.index_of(member.as_str()) {
                label[index] = c;
            }
        }
    }

    let mut internal = vec![0.0_f64; communities.len() + n];
    let mut degree_sum = vec![0.0_f64; communities.len() + n];
    for i in 0..n {
        degree_sum[label[i]] += adjacency.degree(i) as f64;
        for j in adjacency.neighbors(i).filter(|&j| j > i) {
            if label[i] == label[j] {
                internal[label[i]] += 1.0;
            }
        }
    }

    internal
        .iter()
        .zip(&degree_sum)
        .map(|(&l_c, &d_c)| l_c / m - (d_c / (2.0 * m)).powi(2))
        .sum()
}
