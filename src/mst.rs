//! Minimum spanning tree by Prim's algorithm.
//!
//! The tree grows from one root. Every edge leaving the tree goes into a
//! min-heap; the lightest one whose target is still outside is committed,
//! and entries whose target was admitted in the meantime are skipped when
//! they come up. This is O(E log E).
//!
//! The graph is expected to be connected. If it is not, the result spans
//! the component of the root only; run the builder once per component (see
//! [`AdjacencyList::connected_components`]) to cover everything.

use std::hash::Hash;

use tracing::{debug, trace};

use crate::{
    error::MstError,
    graph::{traits::WeightedGraph, AdjacencyList},
};

mod frontier;
mod tree;
mod weight;

use frontier::{Candidate, Frontier};
pub use tree::{SpanningTree, TreeEdge};
pub use weight::Weight;

/// Builder for a single run. Without an explicit start the first vertex in
/// insertion order is the root. The root changes which vertex an edge is
/// listed under, never the total weight.
pub struct Prim<'g, V, W: Copy> {
    graph: &'g AdjacencyList<V, W>,
    start: Option<V>,
}

impl<'g, V, W> Prim<'g, V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    pub fn new(graph: &'g AdjacencyList<V, W>) -> Self {
        Self { graph, start: None }
    }

    pub fn start(mut self, v: V) -> Self {
        self.start = Some(v);
        self
    }

    pub fn run(&self) -> Result<SpanningTree<V, W>, MstError> {
        let graph = self.graph;
        if graph.is_empty() {
            return Err(MstError::EmptyGraph);
        }
        let root = match &self.start {
            Some(v) => graph.index_of(v).ok_or(MstError::UnknownStart)?,
            None => 0,
        };
        check_weights(graph)?;

        debug!(root, vertices = graph.len(), "building minimum spanning tree");

        let mut visited = vec![false; graph.len()];
        visited[root] = true;
        let mut tree = SpanningTree::new(graph.label(root).clone());
        let mut frontier = Frontier::new();
        frontier.extend(
            graph
                .adjacency_weight(root)
                .map(|(to, weight)| (weight, root, to)),
        );

        let mut stale = 0usize;
        while let Some(Candidate { weight, from, to, .. }) = frontier.pop() {
            if visited[to] {
                stale += 1;
                continue;
            }
            visited[to] = true;
            if !tree.commit(graph.label(from).clone(), graph.label(to).clone(), weight) {
                return Err(MstError::WeightOverflow { from, to });
            }
            trace!(from, to, "edge committed");
            frontier.extend(
                graph
                    .adjacency_weight(to)
                    .filter(|&(next, _)| !visited[next])
                    .map(|(next, weight)| (weight, to, next)),
            );
        }

        debug!(
            edges = tree.edge_count(),
            pushed = frontier.pushed(),
            stale,
            spanned = tree.vertex_count(),
            complete = tree.vertex_count() == graph.len(),
            "minimum spanning tree built"
        );
        Ok(tree)
    }
}

/// Builds the tree from the first vertex in insertion order.
pub fn build_mst<V, W>(graph: &AdjacencyList<V, W>) -> Result<SpanningTree<V, W>, MstError>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    Prim::new(graph).run()
}

pub fn build_mst_from<V, W>(
    graph: &AdjacencyList<V, W>,
    start: &V,
) -> Result<SpanningTree<V, W>, MstError>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    Prim::new(graph).start(start.clone()).run()
}

// A weight that does not compare equal to itself (NaN) would break the heap order.
fn check_weights<V, W: Copy + PartialOrd>(graph: &AdjacencyList<V, W>) -> Result<(), MstError> {
    for from in 0..graph.len() {
        for (to, weight) in graph.adjacency_weight(from) {
            if weight.partial_cmp(&weight).is_none() {
                return Err(MstError::IncomparableWeight { from, to });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;

    fn sample() -> AdjacencyList<&'static str, i32> {
        AdjacencyList::from([
            ("A", vec![("B", 2), ("C", 3)]),
            ("B", vec![("A", 2), ("C", 4), ("D", 1)]),
            ("C", vec![("A", 3), ("B", 4), ("D", 5)]),
            ("D", vec![("B", 1), ("C", 5)]),
        ])
    }

    #[test]
    fn test_sample_graph() {
        let tree = build_mst(&sample()).unwrap();
        assert_eq!(*tree.root(), "A");
        assert_eq!(tree.total_weight(), 6);
        assert_eq!(tree.edge_count(), 3);
        let (owners, total) = tree.into_parts();
        assert_eq!(total, 6);
        assert_eq!(
            owners,
            HashMap::from([("A", vec![("B", 2), ("C", 3)]), ("B", vec![("D", 1)])])
        );
    }

    #[test]
    fn test_start_changes_shape_not_weight() {
        let graph = sample();
        let from_d = build_mst_from(&graph, &"D").unwrap();
        assert_eq!(*from_d.root(), "D");
        assert_eq!(from_d.total_weight(), 6);
        assert_eq!(from_d.get(&"D"), Some(&[("B", 1)][..]));
        assert_eq!(from_d.get(&"B"), Some(&[("A", 2)][..]));
        assert_eq!(from_d.get(&"A"), Some(&[("C", 3)][..]));
        assert_eq!(from_d.get(&"C"), None);
    }

    #[test]
    fn test_single_vertex() {
        let graph: AdjacencyList<&str, u32> = AdjacencyList::from([("A", vec![])]);
        let tree = build_mst(&graph).unwrap();
        assert_eq!(tree.total_weight(), 0);
        assert_eq!(tree.edge_count(), 0);
        assert_eq!(tree.get(&"A"), Some(&[][..]));
    }

    #[test]
    fn test_empty_graph_is_rejected() {
        let graph: AdjacencyList<u8, f64> = AdjacencyList::new();
        assert_eq!(build_mst(&graph).unwrap_err(), MstError::EmptyGraph);
    }

    #[test]
    fn test_unknown_start_is_rejected() {
        let result = Prim::new(&sample()).start("Q").run();
        assert_eq!(result.unwrap_err(), MstError::UnknownStart);
    }

    #[test]
    fn test_nan_weight_is_rejected() {
        let mut graph = AdjacencyList::new();
        graph.add_edge_undirected(0, 1, 1.0);
        graph.add_edge(1, 2, f64::NAN);
        assert_eq!(
            build_mst(&graph).unwrap_err(),
            MstError::IncomparableWeight { from: 1, to: 2 }
        );
    }

    #[test]
    fn test_disconnected_spans_root_component() {
        let mut graph = sample();
        graph.add_edge_undirected("X", "Y", 10);
        graph.add_edge_undirected("Y", "Z", 1);
        graph.add_edge_undirected("X", "Z", 7);

        let tree = build_mst(&graph).unwrap();
        assert_eq!(tree.total_weight(), 6);
        assert_eq!(tree.vertex_count(), 4);
        assert!(!tree.contains(&"X"));

        let other = build_mst_from(&graph, &"X").unwrap();
        assert_eq!(other.total_weight(), 8);
        assert_eq!(other.vertex_count(), 3);
    }

    #[test]
    fn test_target_without_listing_becomes_leaf() {
        let graph = AdjacencyList::from([
            ("A", vec![("B", 1), ("Z", 4)]),
            ("B", vec![("A", 1)]),
        ]);
        let tree = build_mst(&graph).unwrap();
        assert_eq!(tree.total_weight(), 5);
        assert!(tree.contains(&"Z"));
        assert_eq!(tree.get(&"Z"), None);
        assert_eq!(tree.get(&"A"), Some(&[("B", 1), ("Z", 4)][..]));
    }

    #[test]
    fn test_parallel_edges_keep_lightest() {
        let mut graph = AdjacencyList::new();
        graph.add_edge_undirected('a', 'b', 9);
        graph.add_edge_undirected('a', 'b', 2);
        graph.add_edge_undirected('b', 'c', 5);
        graph.add_edge_undirected('b', 'c', 3);
        let tree = build_mst(&graph).unwrap();
        assert_eq!(tree.total_weight(), 5);
        assert_eq!(tree.edge_count(), 2);
    }

    #[test]
    fn test_negative_and_float_weights() {
        let mut graph = AdjacencyList::new();
        graph.add_edge_undirected(0u32, 1, -1.5f64);
        graph.add_edge_undirected(1, 2, 0.25);
        graph.add_edge_undirected(0, 2, -0.5);
        graph.add_edge_undirected(2, 3, 2.0);
        let tree = build_mst(&graph).unwrap();
        assert_eq!(tree.edge_count(), 3);
        assert!((tree.total_weight() - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_total_weight_overflow_is_rejected() {
        let mut graph: AdjacencyList<u32, u8> = AdjacencyList::new();
        graph.add_edge_undirected(0, 1, 200);
        graph.add_edge_undirected(1, 2, 100);
        assert_eq!(
            build_mst(&graph).unwrap_err(),
            MstError::WeightOverflow { from: 1, to: 2 }
        );

        // same weights fit once the accumulator is wide enough
        let mut wide: AdjacencyList<u32, u16> = AdjacencyList::new();
        wide.add_edge_undirected(0, 1, 200);
        wide.add_edge_undirected(1, 2, 100);
        assert_eq!(build_mst(&wide).unwrap().total_weight(), 300);
    }

    #[test]
    fn test_self_loop_is_ignored() {
        let mut graph = AdjacencyList::new();
        graph.add_edge(0, 0, -10);
        graph.add_edge_undirected(0, 1, 3);
        let tree = build_mst(&graph).unwrap();
        assert_eq!(tree.total_weight(), 3);
        assert_eq!(tree.edges(), &[TreeEdge { from: 0, to: 1, weight: 3 }]);
    }
}
