use thiserror::Error;

/// Rejected input for the MST builder.
///
/// A disconnected graph is not an error: the builder spans the component
/// of the start vertex and reports that through [`SpanningTree::vertex_count`].
///
/// Vertices are reported by dense index; map them back with
/// [`AdjacencyList::label`].
///
/// [`SpanningTree::vertex_count`]: crate::mst::SpanningTree::vertex_count
/// [`AdjacencyList::label`]: crate::graph::AdjacencyList::label
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MstError {
    #[error("invalid input: graph has no vertices")]
    EmptyGraph,
    #[error("invalid input: start vertex is not in the graph")]
    UnknownStart,
    #[error("invalid input: edge from vertex index {from} to vertex index {to} has a weight without a total order")]
    IncomparableWeight { from: usize, to: usize },
    #[error("total weight overflows at edge from vertex index {from} to vertex index {to}")]
    WeightOverflow { from: usize, to: usize },
}
