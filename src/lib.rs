pub mod error;
pub mod graph;
pub mod mst;

pub use error::MstError;
pub use graph::AdjacencyList;
pub use mst::{build_mst, build_mst_from, Prim, SpanningTree, Weight};
