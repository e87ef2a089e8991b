//! Integration tests for the spring layout engine.

use nutrinet_graph::analytics::{DegreeCentrality, DegreeCentralityConfig};
use nutrinet_graph::layout::{Coordinates, Dimensions, ForceLayout, Layout, LayoutConfig};
use nutrinet_graph::store::{BipartiteGraph, GraphError};

fn create_food_web() -> BipartiteGraph {
    BipartiteGraph::from_pairs([
        ("VitaminC", "Orange"),
        ("VitaminC", "Lemon"),
        ("VitaminC", "Kiwi"),
        ("Potassium", "Orange"),
        ("Potassium", "Banana"),
        ("Iron", "Spinach"),
        ("Iron", "Lentil"),
        ("Fiber", "Lentil"),
        ("Fiber", "Banana"),
    ])
    .unwrap()
}

fn max_abs(layout: &Layout) -> f64 {
    layout
        .iter()
        .flat_map(|(_, c)| c.components().to_vec())
        .fold(0.0_f64, |acc, v| acc.max(v.abs()))
}

#[test]
fn test_layout_places_every_node_in_3d() {
    let graph = create_food_web();
    let layout = ForceLayout::compute(&graph, &LayoutConfig::new(Dimensions::Three, 7)).unwrap();

    assert_eq!(layout.len(), graph.node_count());
    assert_eq!(layout.dimensions, Dimensions::Three);
    for node in graph.nodes() {
        let position = layout.position(node.id.as_str()).expect("positioned");
        assert!(matches!(position, Coordinates::Spatial(_)));
        assert!(position.components().iter().all(|c| c.is_finite()));
    }
}

#[test]
fn test_layout_2d_has_no_depth() {
    let graph = create_food_web();
    let layout = ForceLayout::compute(&graph, &LayoutConfig::new(Dimensions::Two, 7)).unwrap();

    for (_, position) in layout.iter() {
        assert_eq!(position.components().len(), 2);
        assert!(position.z().is_none());
    }
}

#[test]
fn test_layout_same_seed_same_positions() {
    let graph = create_food_web();
    let config = LayoutConfig::new(Dimensions::Three, 42).with_k(0.15);

    let first = ForceLayout::compute(&graph, &config).unwrap();
    let second = ForceLayout::compute(&graph, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_layout_is_centred_and_scaled() {
    let graph = create_food_web();
    let config = LayoutConfig::new(Dimensions::Two, 3).with_scale(2.5);
    let layout = ForceLayout::compute(&graph, &config).unwrap();

    assert!((max_abs(&layout) - 2.5).abs() < 1e-9);

    let n = layout.len() as f64;
    let mean_x: f64 = layout.iter().map(|(_, c)| c.x()).sum::<f64>() / n;
    let mean_y: f64 = layout.iter().map(|(_, c)| c.y()).sum::<f64>() / n;
    assert!(mean_x.abs() < 1e-9);
    assert!(mean_y.abs() < 1e-9);
}

#[test]
fn test_layout_respects_iteration_cap() {
    let graph = create_food_web();
    let config = LayoutConfig::new(Dimensions::Two, 1).with_iterations(3).with_threshold(0.0);
    let layout = ForceLayout::compute(&graph, &config).unwrap();

    assert_eq!(layout.iterations, 3);
}

#[test]
fn test_layout_stops_when_step_is_small() {
    // Every step moves each node by at most the starting temperature, so a
    // threshold of 1.0 is met after the first step
    let graph = create_food_web();
    let config = LayoutConfig::new(Dimensions::Two, 1).with_iterations(50).with_threshold(1.0);
    let layout = ForceLayout::compute(&graph, &config).unwrap();

    assert_eq!(layout.iterations, 1);
}

#[test]
fn test_layout_neighbours_sit_closer_than_strangers() {
    // Two disjoint pairs pull together and push apart
    let graph = BipartiteGraph::from_pairs([("Iron", "Spinach"), ("Zinc", "Oyster")]).unwrap();
    let config = LayoutConfig::new(Dimensions::Two, 11).with_iterations(200);
    let layout = ForceLayout::compute(&graph, &config).unwrap();

    let pos = |id: &str| layout.position(id).unwrap();
    let near = pos("Iron").distance(pos("Spinach"));
    let far = pos("Iron").distance(pos("Oyster"));
    assert!(near < far, "linked {near} should be closer than unlinked {far}");
}

#[test]
fn test_layout_empty_graph_fails() {
    let err = ForceLayout::compute(&BipartiteGraph::new(), &LayoutConfig::new(Dimensions::Two, 0))
        .unwrap_err();
    assert!(matches!(err, GraphError::EmptyGraph { required: 1, actual: 0 }));
}

#[test]
fn test_layout_node_limit() {
    let graph = create_food_web();
    let config = LayoutConfig::new(Dimensions::Two, 0).with_max_graph_nodes(Some(4));
    let err = ForceLayout::compute(&graph, &config).unwrap_err();
    assert!(matches!(err, GraphError::GraphTooLarge { limit: 4, .. }));
}

#[test]
fn test_layout_rejects_negative_k() {
    let graph = create_food_web();
    let config = LayoutConfig::new(Dimensions::Two, 0).with_k(-1.0);
    assert!(matches!(ForceLayout::compute(&graph, &config), Err(GraphError::InvalidParameter(_))));
}

#[test]
fn test_filtered_layout_keeps_central_nodes() {
    let graph = create_food_web();
    let degree = DegreeCentrality::compute(&graph, &DegreeCentralityConfig::default()).unwrap();
    let threshold = 2.0 / (graph.node_count() as f64 - 1.0);

    let layout = ForceLayout::compute_filtered(
        &graph,
        &degree,
        threshold,
        &LayoutConfig::new(Dimensions::Three, 42),
    )
    .unwrap();

    let expected = graph.nodes().filter(|n| graph.degree(n.id.as_str()).unwrap() >= 2).count();
    assert_eq!(layout.len(), expected);
    assert!(layout.position("VitaminC").is_some());
    assert!(layout.position("Kiwi").is_none());
}

#[test]
fn test_filtered_layout_with_nothing_kept_fails() {
    let graph = create_food_web();
    let degree = DegreeCentrality::compute(&graph, &DegreeCentralityConfig::default()).unwrap();

    let err = ForceLayout::compute_filtered(
        &graph,
        &degree,
        1.5,
        &LayoutConfig::new(Dimensions::Two, 42),
    )
    .unwrap_err();
    assert!(matches!(err, GraphError::EmptyGraph { .. }));
}
