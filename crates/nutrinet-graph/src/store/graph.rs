//! In-memory bipartite graph.

use std::collections::HashMap;

use nutrinet_core::{CoreError, Edge, Node, NodeId, Partition, Row};
use tracing::{debug, warn};

use super::{GraphError, GraphResult};
use crate::index::{AdjacencyIndex, NodeIndex};

/// An undirected, simple, bipartite graph of compounds and foods.
///
/// Nodes are kept in the order they were first seen in the row sequence,
/// which makes every derived result reproducible for the same input. Once
/// built, the graph is read-only: every analysis borrows it immutably.
#[derive(Debug, Clone, Default)]
pub struct BipartiteGraph {
    nodes: Vec<Node>,
    positions: HashMap<NodeId, NodeIndex>,
    adjacency: AdjacencyIndex,
}

impl BipartiteGraph {
    /// Create an empty graph.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a sequence of rows.
    ///
    /// Each row contributes its compound and food as nodes (if not already
    /// present) and an edge between them (duplicates collapse).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SchemaViolation`] if a value appears as a
    /// compound in one row and a food in another. No graph is returned on
    /// failure.
    pub fn build<I>(rows: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = Row>,
    {
        let mut graph = Self::new();
        let mut row_count = 0usize;

        for row in rows {
            row_count += 1;
            let (compound, food) = row.into_parts();
            let a = graph.ensure_node(compound, Partition::Compound)?;
            let b = graph.ensure_node(food, Partition::Food)?;
            graph.adjacency.insert_edge(a, b);
        }

        debug!(
            rows = row_count,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built bipartite graph"
        );

        Ok(graph)
    }

    /// Build a graph from raw `(compound, food)` pairs, validating each one.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidRow`] for a blank value, or
    /// [`GraphError::SchemaViolation`] as for [`build`](Self::build).
    pub fn from_pairs<I, R>(pairs: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = R>,
        R: TryInto<Row, Error = CoreError>,
    {
        let rows = pairs.into_iter().map(R::try_into).collect::<Result<Vec<Row>, _>>()?;
        Self::build(rows)
    }

    fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            positions: HashMap::with_capacity(nodes),
            adjacency: AdjacencyIndex::with_capacity(nodes),
        }
    }

    fn ensure_node(&mut self, value: String, partition: Partition) -> GraphResult<NodeIndex> {
        if let Some(&index) = self.positions.get(value.as_str()) {
            let existing = self.nodes[index].partition;
            if existing != partition {
                warn!(value = %value, %existing, attempted = %partition, "rejecting row");
                return Err(GraphError::SchemaViolation { value, existing, attempted: partition });
            }
            return Ok(index);
        }

        Ok(self.push_node(Node::new(value, partition)))
    }

    fn push_node(&mut self, node: Node) -> NodeIndex {
        let index = self.adjacency.add_node();
        self.positions.insert(node.id.clone(), index);
        self.nodes.push(node);
        index
    }

    /// Number of nodes.
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct edges.
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    /// Returns true if the graph has no nodes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in first-seen order.
    pub fn nodes(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Nodes of one partition, in first-seen order.
    pub fn nodes_in(&self, partition: Partition) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(move |node| node.partition == partition)
    }

    /// All edges, each reported once as `(compound, food)`.
    ///
    /// Edges are grouped by compound in first-seen order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.nodes.iter().enumerate().filter(|(_, node)| node.is_compound()).flat_map(
            move |(index, compound)| {
                self.adjacency.neighbors(index).map(move |neighbor| {
                    Edge::new(compound.id.clone(), self.nodes[neighbor].id.clone())
                })
            },
        )
    }

    /// Returns true if the graph contains `node`.
    #[inline]
    #[must_use]
    pub fn contains(&self, node: &str) -> bool {
        self.positions.contains_key(node)
    }

    /// Look up a node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the node is absent.
    pub fn node(&self, node: &str) -> GraphResult<&Node> {
        self.index_of(node).map(|index| &self.nodes[index])
    }

    /// The partition a node belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the node is absent.
    pub fn partition(&self, node: &str) -> GraphResult<Partition> {
        self.node(node).map(|n| n.partition)
    }

    /// The neighbours of a node, in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the node is absent.
    pub fn neighbors(&self, node: &str) -> GraphResult<Vec<&NodeId>> {
        let index = self.index_of(node)?;
        Ok(self.adjacency.neighbors(index).map(|n| &self.nodes[n].id).collect())
    }

    /// The number of neighbours of a node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the node is absent.
    pub fn degree(&self, node: &str) -> GraphResult<usize> {
        let index = self.index_of(node)?;
        Ok(self.adjacency.degree(index))
    }

    /// Returns true if `a` and `b` are joined by an edge.
    #[must_use]
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        match (self.positions.get(a), self.positions.get(b)) {
            (Some(&a), Some(&b)) => self.adjacency.contains_edge(a, b),
            _ => false,
        }
    }

    /// The subgraph induced by `subset`.
    ///
    /// Keeps the listed nodes (in this graph's order) and exactly those edges
    /// whose endpoints are both kept. Identifiers not in this graph are
    /// ignored.
    #[must_use]
    pub fn subgraph<I>(&self, subset: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut keep = vec![false; self.nodes.len()];
        for node in subset {
            if let Some(&index) = self.positions.get(node.as_ref()) {
                keep[index] = true;
            }
        }

        let kept = keep.iter().filter(|&&k| k).count();
        let mut sub = Self::with_capacity(kept);
        let mut remap: Vec<Option<NodeIndex>> = vec![None; self.nodes.len()];
        for (index, node) in self.nodes.iter().enumerate() {
            if keep[index] {
                remap[index] = Some(sub.push_node(node.clone()));
            }
        }

        for (index, mapped) in remap.iter().enumerate() {
            let Some(a) = *mapped else { continue };
            for neighbor in self.adjacency.neighbors(index).filter(|&n| n > index) {
                if let Some(b) = remap[neighbor] {
                    sub.adjacency.insert_edge(a, b);
                }
            }
        }

        debug!(
            nodes = sub.node_count(),
            edges = sub.edge_count(),
            parent_nodes = self.node_count(),
            "induced subgraph"
        );

        sub
    }

    /// The adjacency index, addressed by node position.
    #[inline]
    #[must_use]
    pub fn adjacency(&self) -> &AdjacencyIndex {
        &self.adjacency
    }

    /// The position of a node in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the node is absent.
    pub fn index_of(&self, node: &str) -> GraphResult<NodeIndex> {
        self.positions.get(node).copied().ok_or_else(|| GraphError::UnknownNode(node.to_owned()))
    }

    /// The node at a position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`node_count`](Self::node_count).
    #[inline]
    #[must_use]
    pub fn node_at(&self, index: NodeIndex) -> &Node {
        &self.nodes[index]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn row(compound: &str, food: &str) -> Row {
        Row::new(compound, food).expect("valid row")
    }

    #[test]
    fn empty_build() {
        let graph = BipartiteGraph::build(Vec::new()).expect("empty build");
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn first_seen_order() {
        let graph = BipartiteGraph::build(vec![row("Iron", "Spinach"), row("Zinc", "Beef")])
            .expect("build");
        let ids: Vec<_> = graph.nodes().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["Iron", "Spinach", "Zinc", "Beef"]);
        assert_eq!(graph.index_of("Zinc").expect("present"), 2);
        assert_eq!(graph.node_at(3).id.as_str(), "Beef");
    }

    #[test]
    fn same_value_both_sides_is_rejected() {
        let err = BipartiteGraph::build(vec![row("Salt", "Salt")]).unwrap_err();
        assert!(matches!(
            err,
            GraphError::SchemaViolation {
                existing: Partition::Compound,
                attempted: Partition::Food,
                ..
            }
        ));
    }

    #[test]
    fn has_edge_is_symmetric() {
        let graph = BipartiteGraph::build(vec![row("Iron", "Spinach")]).expect("build");
        assert!(graph.has_edge("Iron", "Spinach"));
        assert!(graph.has_edge("Spinach", "Iron"));
        assert!(!graph.has_edge("Iron", "Kale"));
    }

    #[test]
    fn subgraph_index_tracks_kept_nodes() {
        let graph = BipartiteGraph::build(vec![
            row("Iron", "Spinach"),
            row("Iron", "Lentil"),
            row("Zinc", "Lentil"),
        ])
        .expect("build");

        let sub = graph.subgraph(["Lentil", "Zinc", "Iron", "Lentil"]);
        assert_eq!(sub.adjacency().node_count(), 3);
        assert_eq!(sub.adjacency().edge_count(), 2);
        assert_eq!(sub.index_of("Iron").expect("kept"), 0);
        assert_eq!(sub.index_of("Zinc").expect("kept"), 2);
        assert!(sub.index_of("Spinach").is_err());
    }
}
