use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
    iter,
};

use super::weight::Weight;
use crate::graph::traits::Tree;

/// An edge committed to the tree, from the vertex that was already admitted
/// to the vertex it admitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeEdge<V, W> {
    pub from: V,
    pub to: V,
    pub weight: W,
}

/// Output of the builder.
///
/// Each edge is listed once, under the vertex that admitted its other end.
/// The root is always a key, possibly with an empty list; a vertex that
/// admitted nothing is only found as a target. Use [`symmetric`] for a view
/// listing both directions.
///
/// [`symmetric`]: SpanningTree::symmetric
#[derive(Debug, Clone)]
pub struct SpanningTree<V, W> {
    root: V,
    owners: HashMap<V, Vec<(V, W)>>,
    edges: Vec<TreeEdge<V, W>>,
    members: HashSet<V>,
    total_weight: W,
}

impl<V: Eq + Hash + Clone, W: Weight> SpanningTree<V, W> {
    pub(crate) fn new(root: V) -> Self {
        Self {
            owners: HashMap::from([(root.clone(), Vec::new())]),
            edges: Vec::new(),
            members: HashSet::from([root.clone()]),
            root,
            total_weight: W::zero(),
        }
    }

    /// Adds the edge and returns `false`, leaving the tree untouched, if the
    /// total would overflow.
    #[must_use]
    pub(crate) fn commit(&mut self, from: V, to: V, weight: W) -> bool {
        let Some(total_weight) = self.total_weight.accumulate(weight) else {
            return false;
        };
        self.total_weight = total_weight;
        self.owners
            .entry(from.clone())
            .or_default()
            .push((to.clone(), weight));
        self.members.insert(to.clone());
        self.edges.push(TreeEdge { from, to, weight });
        true
    }
}

impl<V: Eq + Hash + Clone, W: Copy> SpanningTree<V, W> {
    pub fn root(&self) -> &V {
        &self.root
    }

    pub fn total_weight(&self) -> W {
        self.total_weight
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Vertices spanned, the root included.
    pub fn vertex_count(&self) -> usize {
        self.edges.len() + 1
    }

    pub fn contains(&self, v: &V) -> bool {
        self.members.contains(v)
    }

    /// Edges listed under `v`, or `None` if `v` admitted nothing and is not
    /// the root.
    pub fn get(&self, v: &V) -> Option<&[(V, W)]> {
        self.owners.get(v).map(Vec::as_slice)
    }

    /// Edges in the order they were committed.
    pub fn edges(&self) -> &[TreeEdge<V, W>] {
        &self.edges
    }

    /// Vertices in the order they were admitted, the root first.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        iter::once(&self.root).chain(self.edges.iter().map(|edge| &edge.to))
    }

    pub fn owners(&self) -> &HashMap<V, Vec<(V, W)>> {
        &self.owners
    }

    /// Undirected adjacency of the tree: every spanned vertex is a key and
    /// every edge is listed under both ends.
    pub fn symmetric(&self) -> HashMap<V, Vec<(V, W)>> {
        let mut adjacency: HashMap<V, Vec<(V, W)>> = self
            .vertices()
            .map(|v| (v.clone(), Vec::new()))
            .collect();
        for TreeEdge { from, to, weight } in &self.edges {
            if let Some(listing) = adjacency.get_mut(from) {
                listing.push((to.clone(), *weight));
            }
            if let Some(listing) = adjacency.get_mut(to) {
                listing.push((from.clone(), *weight));
            }
        }
        adjacency
    }

    pub fn into_parts(self) -> (HashMap<V, Vec<(V, W)>>, W) {
        (self.owners, self.total_weight)
    }
}

impl<V: Eq + Hash + Clone, W: Copy> Tree<V> for SpanningTree<V, W> {
    fn root(&self) -> Option<V> {
        Some(self.root.clone())
    }

    fn children(&self, n: V) -> impl Iterator<Item = V> {
        self.owners
            .get(&n)
            .into_iter()
            .flatten()
            .map(|(child, _)| child.clone())
    }
}
