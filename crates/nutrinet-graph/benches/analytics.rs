//! Benchmarks for graph analytics and layout.
//!
//! Run with: `cargo bench -p nutrinet-graph`

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutrinet_graph::analytics::{
    BetweennessCentrality, BetweennessCentralityConfig, CommunityConfig, CommunityDetection,
};
use nutrinet_graph::layout::{Dimensions, ForceLayout, LayoutConfig};
use nutrinet_graph::store::BipartiteGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate a random bipartite graph with roughly `per_compound` foods per compound.
fn random_graph(compounds: usize, foods: usize, per_compound: usize) -> BipartiteGraph {
    let mut rng = StdRng::seed_from_u64(7);
    let mut pairs = Vec::with_capacity(compounds * per_compound);
    for c in 0..compounds {
        for _ in 0..per_compound {
            pairs.push((format!("Compound{c}"), format!("Food{}", rng.gen_range(0..foods))));
        }
    }
    BipartiteGraph::from_pairs(pairs).expect("disjoint name pools")
}

fn bench_betweenness(c: &mut Criterion) {
    let mut group = c.benchmark_group("betweenness");
    let config = BetweennessCentralityConfig::default();

    for size in [50, 100, 200] {
        let graph = random_graph(size, size, 4);
        group.throughput(Throughput::Elements(graph.node_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |bench, graph| {
            bench.iter(|| BetweennessCentrality::compute(black_box(graph), &config));
        });
    }

    group.finish();
}

fn bench_communities(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_modularity");
    let config = CommunityConfig::default();

    for size in [50, 100, 200] {
        let graph = random_graph(size, size, 4);
        group.throughput(Throughput::Elements(graph.edge_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |bench, graph| {
            bench.iter(|| CommunityDetection::detect(black_box(graph), &config));
        });
    }

    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("spring_layout");

    let cases = [(50, Dimensions::Two), (50, Dimensions::Three), (150, Dimensions::Three)];
    for (size, dimensions) in cases {
        let graph = random_graph(size, size, 3);
        let config = LayoutConfig::new(dimensions, 42);
        let id = format!("{size}/{}d", dimensions.count());
        group.bench_with_input(BenchmarkId::from_parameter(id), &graph, |bench, graph| {
            bench.iter(|| ForceLayout::compute(black_box(graph), &config));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_betweenness, bench_communities, bench_layout);
criterion_main!(benches);
