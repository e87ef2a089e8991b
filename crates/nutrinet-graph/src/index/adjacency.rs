//! Adjacency index.
//!
//! Stores, for each node position, the sorted set of neighbouring positions.
//! Because the graph is undirected each edge appears in both lists, and
//! because the graph is simple re-inserting an edge is a no-op.

use std::collections::BTreeSet;

/// Position of a node in the graph's first-seen order.
pub type NodeIndex = usize;

/// Undirected adjacency lists keyed by [`NodeIndex`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyIndex {
    lists: Vec<BTreeSet<NodeIndex>>,
    edge_count: usize,
}

impl AdjacencyIndex {
    /// Create an empty index.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index with room for `nodes` nodes.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Self { lists: Vec::with_capacity(nodes), edge_count: 0 }
    }

    /// Register a new node and return its index.
    pub fn add_node(&mut self) -> NodeIndex {
        self.lists.push(BTreeSet::new());
        self.lists.len() - 1
    }

    /// Insert the undirected edge `a -- b`.
    ///
    /// Returns `true` if the edge was not already present.
    ///
    /// # Panics
    ///
    /// Panics if either index was never registered with [`add_node`](Self::add_node).
    pub fn insert_edge(&mut self, a: NodeIndex, b: NodeIndex) -> bool {
        let inserted = self.lists[a].insert(b);
        if inserted {
            self.lists[b].insert(a);
            self.edge_count += 1;
        }
        inserted
    }

    /// Number of registered nodes.
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.lists.len()
    }

    /// Number of distinct undirected edges.
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Neighbours of `node` in ascending index order.
    ///
    /// Yields nothing for an unregistered index.
    pub fn neighbors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.lists.get(node).into_iter().flat_map(|list| list.iter().copied())
    }

    /// Number of neighbours of `node`, or 0 for an unregistered index.
    #[inline]
    #[must_use]
    pub fn degree(&self, node: NodeIndex) -> usize {
        self.lists.get(node).map_or(0, BTreeSet::len)
    }

    /// Returns true if `a` and `b` are adjacent.
    #[must_use]
    pub fn contains_edge(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.lists.get(a).is_some_and(|list| list.contains(&b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_symmetric() {
        let mut index = AdjacencyIndex::new();
        let a = index.add_node();
        let b = index.add_node();

        assert!(index.insert_edge(a, b));
        assert!(index.contains_edge(a, b));
        assert!(index.contains_edge(b, a));
        assert_eq!(index.degree(a), 1);
        assert_eq!(index.degree(b), 1);
        assert_eq!(index.edge_count(), 1);
    }

    #[test]
    fn duplicate_edges_collapse() {
        let mut index = AdjacencyIndex::new();
        let a = index.add_node();
        let b = index.add_node();

        assert!(index.insert_edge(a, b));
        assert!(!index.insert_edge(a, b));
        assert!(!index.insert_edge(b, a));
        assert_eq!(index.edge_count(), 1);
    }

    #[test]
    fn neighbors_are_sorted() {
        let mut index = AdjacencyIndex::with_capacity(4);
        let hub = index.add_node();
        let nodes: Vec<_> = (0..3).map(|_| index.add_node()).collect();
        for &n in nodes.iter().rev() {
            index.insert_edge(hub, n);
        }

        assert_eq!(index.neighbors(hub).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(index.neighbors(99).count(), 0);
        assert_eq!(index.degree(99), 0);
    }
}
