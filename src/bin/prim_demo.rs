use prim_mst::{build_mst, AdjacencyList, MstError};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), MstError> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let graph = AdjacencyList::from([
        ("A", vec![("B", 2), ("C", 3)]),
        ("B", vec![("A", 2), ("C", 4), ("D", 1)]),
        ("C", vec![("A", 3), ("B", 4), ("D", 5)]),
        ("D", vec![("B", 1), ("C", 5)]),
    ]);
    for v in graph.vertices() {
        let listing: Vec<_> = graph.neighbors(v).collect();
        println!("{v}: {listing:?}");
    }

    let tree = build_mst(&graph)?;
    println!("Minimum spanning tree (root {}):", tree.root());
    for edge in tree.edges() {
        println!("  {} - {} ({})", edge.from, edge.to, edge.weight);
    }
    println!("Total weight: {}", tree.total_weight());
    Ok(())
}
