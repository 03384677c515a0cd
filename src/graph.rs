use std::{
    collections::{HashMap, VecDeque},
    hash::Hash,
};

pub mod traits;

use traits::{Graph, WeightedGraph};

/// Weighted adjacency list keyed by vertex labels.
///
/// Labels are stored densely in insertion order, and every vertex owns the
/// list of `(neighbor, weight)` pairs that were added for it, in order. An
/// undirected edge is two listings; nothing checks that the listings are
/// symmetric.
#[derive(Debug, Clone)]
pub struct AdjacencyList<V, W: Copy> {
    edges: Vec<Vec<(usize, W)>>,
    vertices: Vec<V>,
    index: HashMap<V, usize>,
}

impl<V, W: Copy> AdjacencyList<V, W> {
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            vertices: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn reserved(vertices: usize) -> Self {
        Self {
            edges: Vec::with_capacity(vertices),
            vertices: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of listings, so an undirected edge counts twice.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Labels in insertion order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn label(&self, idx: usize) -> &V {
        &self.vertices[idx]
    }

    pub fn dfs(&self, start: usize) -> Dfs {
        let mut visited = vec![false; self.vertices.len()];
        let stack = vec![];
        let current = start;
        visited[current] = true;
        Dfs {
            visited,
            stack,
            current: Some(current),
        }
    }

    pub fn bfs(&self, start: usize) -> Bfs {
        let mut bfs = Bfs {
            visited: vec![false; self.vertices.len()],
            queue: VecDeque::new(),
            current: None,
        };
        bfs.restart(start);
        bfs
    }

    /// Groups the vertices by following listings from every not yet seen
    /// vertex in insertion order. For symmetric graphs these are the
    /// connected components.
    pub fn connected_components(&self) -> Vec<Vec<&V>> {
        let mut components = Vec::new();
        let mut bfs = Bfs {
            visited: vec![false; self.vertices.len()],
            queue: VecDeque::new(),
            current: None,
        };
        for start in 0..self.vertices.len() {
            if bfs.is_visited(start) {
                continue;
            }
            bfs.restart(start);
            let mut component = Vec::new();
            while let Some(current) = bfs.next(self) {
                component.push(&self.vertices[current]);
            }
            components.push(component);
        }
        components
    }
}

impl<V: Eq + Hash + Clone, W: Copy> AdjacencyList<V, W> {
    /// Registers `v` if it is new and returns its dense index.
    pub fn add_vertex(&mut self, v: V) -> usize {
        if let Some(&idx) = self.index.get(&v) {
            return idx;
        }
        let idx = self.vertices.len();
        self.index.insert(v.clone(), idx);
        self.vertices.push(v);
        self.edges.push(Vec::new());
        idx
    }

    /// Lists `to` under `from`. Unknown endpoints are registered, so a target
    /// without listings of its own is still a vertex of the graph.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) {
        let from = self.add_vertex(from);
        let to = self.add_vertex(to);
        self.edges[from].push((to, weight));
    }

    pub fn add_edge_undirected(&mut self, from: V, to: V, weight: W) {
        self.add_edge(from.clone(), to.clone(), weight);
        self.add_edge(to, from, weight);
    }

    pub fn index_of(&self, v: &V) -> Option<usize> {
        self.index.get(v).copied()
    }

    pub fn contains(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    pub fn neighbors(&self, v: &V) -> impl Iterator<Item = (&V, W)> + '_ {
        self.index_of(v).into_iter().flat_map(move |idx| {
            self.edges[idx]
                .iter()
                .map(move |&(to, weight)| (&self.vertices[to], weight))
        })
    }

    /// Vertices reachable from `v` through listings, `v` first.
    pub fn reachable_from(&self, v: &V) -> Vec<&V> {
        let Some(start) = self.index_of(v) else {
            return Vec::new();
        };
        let mut dfs = self.dfs(start);
        let mut reached = Vec::new();
        while let Some(current) = dfs.next(self) {
            reached.push(&self.vertices[current]);
        }
        reached
    }
}

impl<V, W: Copy> Default for AdjacencyList<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W: Copy> Graph<usize> for AdjacencyList<V, W> {
    fn adjacency(&self, v: usize) -> impl Iterator<Item = usize> {
        self.edges[v].iter().map(|&(to, _)| to)
    }
}

impl<V, W: Copy> WeightedGraph<usize, W> for AdjacencyList<V, W> {
    fn adjacency_weight(&self, v: usize) -> impl Iterator<Item = (usize, W)> {
        self.edges[v].iter().copied()
    }
}

pub struct Dfs {
    visited: Vec<bool>,
    stack: Vec<usize>,
    current: Option<usize>,
}

pub struct Bfs {
    visited: Vec<bool>,
    queue: VecDeque<usize>,
    current: Option<usize>,
}

impl Dfs {
    pub fn next<G: Graph<usize>>(&mut self, graph: &G) -> Option<usize> {
        self.current.map(|current| {
            self.stack
                .extend(graph.adjacency(current).filter(|&to| {
                    if self.visited[to] {
                        false
                    } else {
                        self.visited[to] = true;
                        true
                    }
                }));
            self.current = self.stack.pop();
            current
        })
    }
}

impl Bfs {
    pub fn is_visited(&self, v: usize) -> bool {
        self.visited[v]
    }

    /// Starts a new search from `start`, keeping what earlier searches visited.
    pub fn restart(&mut self, start: usize) {
        self.queue.clear();
        self.visited[start] = true;
        self.current = Some(start);
    }

    pub fn next<G: Graph<usize>>(&mut self, graph: &G) -> Option<usize> {
        self.current.map(|current| {
            self.queue
                .extend(graph.adjacency(current).filter(|&to| !self.visited[to]));
            while let Some(next) = self.queue.pop_front() {
                if self.visited[next] {
                    continue;
                }
                self.visited[next] = true;
                self.current = Some(next);
                return current;
            }
            self.current = None;
            current
        })
    }
}

impl<V: Eq + Hash + Clone, W: Copy> FromIterator<(V, Vec<(V, W)>)> for AdjacencyList<V, W> {
    /// Keys are registered before any listing, so insertion order follows
    /// the order of the keys.
    fn from_iter<I: IntoIterator<Item = (V, Vec<(V, W)>)>>(iter: I) -> Self {
        let entries: Vec<_> = iter.into_iter().collect();
        let mut graph = Self::reserved(entries.len());
        for (v, _) in &entries {
            graph.add_vertex(v.clone());
        }
        for (from, listing) in entries {
            for (to, weight) in listing {
                graph.add_edge(from.clone(), to, weight);
            }
        }
        graph
    }
}

impl<V: Eq + Hash + Clone, W: Copy, const N: usize> From<[(V, Vec<(V, W)>); N]>
    for AdjacencyList<V, W>
{
    fn from(entries: [(V, Vec<(V, W)>); N]) -> Self {
        entries.into_iter().collect()
    }
}
