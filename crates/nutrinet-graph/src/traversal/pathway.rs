//! Breadth-first layer iterator.

use std::collections::BTreeSet;
use std::iter::FusedIterator;

use nutrinet_core::NodeId;
use serde::Serialize;
use tracing::debug;

use crate::index::NodeIndex;
use crate::store::{BipartiteGraph, GraphResult};

/// An edge crossed during one traversal step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalEdge {
    /// Node in the expanded layer.
    pub from: NodeId,
    /// Newly visited node.
    pub to: NodeId,
}

/// Everything reached in one step of a [`PathwayTraversal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalFrame {
    /// Zero-based step number.
    pub step: usize,
    /// The layer that was expanded.
    pub origins: Vec<NodeId>,
    /// Nodes visited for the first time in this step, in graph order.
    pub nodes: Vec<NodeId>,
    /// Every edge from an origin to a newly visited node.
    pub edges: Vec<TraversalEdge>,
}

impl TraversalFrame {
    /// Check if the frame reached the given node.
    pub fn reached(&self, node: &str) -> bool {
        self.nodes.iter().any(|n| n.as_str() == node)
    }
}

/// A lazy layer-by-layer walk outward from a start node.
///
/// Yields at most `max_steps` frames and stops early once a step would
/// reach no new node. Not restartable; build a new one to replay.
///
/// Frames only report newly reached nodes, so the start node never appears
/// in a frame's `nodes`. A start without neighbours yields no frames at all.
/// Callers drawing the walk should place [`start`](Self::start) themselves.
///
/// # Example
///
/// ```
/// use nutrinet_graph::store::BipartiteGraph;
/// use nutrinet_graph::traversal::PathwayTraversal;
///
/// let graph = BipartiteGraph::from_pairs([
///     ("VitaminC", "Orange"),
///     ("VitaminC", "Lemon"),
///     ("Potassium", "Orange"),
/// ])?;
///
/// let frames: Vec<_> = PathwayTraversal::new(&graph, "VitaminC", 5)?.collect();
/// assert_eq!(frames.len(), 2);
/// assert_eq!(frames[1].nodes[0].as_str(), "Potassium");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct PathwayTraversal<'g> {
    graph: &'g BipartiteGraph,
    start: NodeIndex,
    max_steps: usize,
    step: usize,
    visited: Vec<bool>,
    current_layer: BTreeSet<NodeIndex>,
    finished: bool,
}

impl<'g> PathwayTraversal<'g> {
    /// Create a traversal from `start` that runs for at most `max_steps` steps.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`](crate::store::GraphError::UnknownNode)
    /// if `start` is not in the graph.
    pub fn new(graph: &'g BipartiteGraph, start: &str, max_steps: usize) -> GraphResult<Self> {
        let start_index = graph.index_of(start)?;

        debug!(start, max_steps, nodes = graph.node_count(), "starting pathway traversal");

        Ok(Self {
            graph,
            start: start_index,
            max_steps,
            step: 0,
            visited: vec![false; graph.node_count()],
            current_layer: BTreeSet::from([start_index]),
            finished: max_steps == 0,
        })
    }

    /// The node the walk starts from.
    pub fn start(&self) -> &'g NodeId {
        let graph = self.graph;
        &graph.node_at(self.start).id
    }

    /// Number of frames emitted so far.
    pub fn step_index(&self) -> usize {
        self.step
    }

    /// Check if the traversal has run to completion.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn id(&self, index: NodeIndex) -> NodeId {
        self.graph.node_at(index).id.clone()
    }
}

impl Iterator for PathwayTraversal<'_> {
    type Item = TraversalFrame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        for &index in &self.current_layer {
            self.visited[index] = true;
        }

        let graph = self.graph;
        let adjacency = graph.adjacency();
        let next_layer: BTreeSet<NodeIndex> = self
            .current_layer
            .iter()
            .flat_map(|&index| adjacency.neighbors(index))
            .filter(|&neighbor| !self.visited[neighbor])
            .collect();

        if next_layer.is_empty() {
            debug!(steps = self.step, "pathway traversal exhausted");
            self.finished = true;
            return None;
        }

        let mut edges = Vec::new();
        for &origin in &self.current_layer {
            for neighbor in adjacency.neighbors(origin).filter(|n| next_layer.contains(n)) {
                edges.push(TraversalEdge { from: self.id(origin), to: self.id(neighbor) });
            }
        }

        let frame = TraversalFrame {
            step: self.step,
            origins: self.current_layer.iter().map(|&index| self.id(index)).collect(),
            nodes: next_layer.iter().map(|&index| self.id(index)).collect(),
            edges,
        };

        self.current_layer = next_layer;
        self.step += 1;
        if self.step == self.max_steps {
            debug!(steps = self.step, "pathway traversal reached step limit");
            self.finished = true;
        }

        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (0, Some(self.max_steps - self.step))
        }
    }
}

impl FusedIterator for PathwayTraversal<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::GraphError;

    fn path_graph() -> BipartiteGraph {
        BipartiteGraph::from_pairs([
            ("VitaminC", "Orange"),
            ("VitaminC", "Lemon"),
            ("Potassium", "Orange"),
        ])
        .expect("build")
    }

    #[test]
    fn first_frame_expands_start() {
        let graph = path_graph();
        let mut walk = PathwayTraversal::new(&graph, "VitaminC", 1).expect("start");

        let frame = walk.next().expect("frame");
        assert_eq!(frame.step, 0);
        assert_eq!(frame.origins, vec![NodeId::from("VitaminC")]);
        assert_eq!(frame.nodes, vec![NodeId::from("Orange"), NodeId::from("Lemon")]);
        assert_eq!(frame.edges.len(), 2);
        assert!(frame.reached("Lemon"));

        assert!(walk.next().is_none());
        assert!(walk.is_finished());
        assert_eq!(walk.step_index(), 1);
    }

    #[test]
    fn stops_when_nothing_new() {
        let graph = path_graph();
        let frames: Vec<_> = PathwayTraversal::new(&graph, "Lemon", 10).expect("start").collect();

        let layers: Vec<Vec<&str>> =
            frames.iter().map(|f| f.nodes.iter().map(NodeId::as_str).collect()).collect();
        assert_eq!(layers, vec![vec!["VitaminC"], vec!["Orange"], vec!["Potassium"]]);
    }

    #[test]
    fn zero_steps_yields_nothing() {
        let graph = path_graph();
        let mut walk = PathwayTraversal::new(&graph, "Orange", 0).expect("start");
        assert_eq!(walk.size_hint(), (0, Some(0)));
        assert!(walk.next().is_none());
    }

    #[test]
    fn isolated_start_is_still_reported() {
        let graph = path_graph().subgraph(["Lemon"]);
        let mut walk = PathwayTraversal::new(&graph, "Lemon", 3).expect("start");

        assert_eq!(walk.start().as_str(), "Lemon");
        assert!(walk.next().is_none());
        assert_eq!(walk.start().as_str(), "Lemon");
    }

    #[test]
    fn unknown_start() {
        let graph = path_graph();
        let result = PathwayTraversal::new(&graph, "Zinc", 3);
        assert!(matches!(result, Err(GraphError::UnknownNode(ref n)) if n == "Zinc"));
    }
}
