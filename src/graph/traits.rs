pub trait Graph<IdxV> {
    fn adjacency(&self, v: IdxV) -> impl Iterator<Item = IdxV>;
}

pub trait WeightedGraph<IdxV, Weight>: Graph<IdxV> {
    fn adjacency_weight(&self, v: IdxV) -> impl Iterator<Item = (IdxV, Weight)>;
}

/// Must not contain cycles.
pub trait Tree<IdxN> {
    fn root(&self) -> Option<IdxN>;
    fn children(&self, n: IdxN) -> impl Iterator<Item = IdxN>;
}
