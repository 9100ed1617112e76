//! Degree centrality: raw out-degree (or total degree for
//! bidirectional graphs), plus two normalizations.

use hashbrown::HashMap;

use crate::visit::{IntoEdges, IntoNodeIdentifiers};

/// Raw degree of every vertex: `deg(v)`.
pub fn degree_centrality<G>(graph: G) -> HashMap<G::NodeId, usize>
where
    G: IntoNodeIdentifiers + IntoEdges,
    G::NodeId: core::hash::Hash + Eq,
{
    graph
        .node_identifiers()
        .map(|v| (v, graph.out_degree(v)))
        .collect()
}

/// `deg(v) / (V-1)` — the fraction of all other vertices `v` is directly
/// adjacent to. `0.0` for the single-vertex graph (no possible neighbor).
pub fn normalized_degree_centrality<G>(graph: G) -> HashMap<G::NodeId, f64>
where
    G: IntoNodeIdentifiers + IntoEdges,
    G::NodeId: core::hash::Hash + Eq,
{
    let n = graph.node_identifiers().count();
    let denom = (n.saturating_sub(1)) as f64;
    degree_centrality(graph)
        .into_iter()
        .map(|(v, d)| (v, if denom == 0.0 { 0.0 } else { d as f64 / denom }))
        .collect()
}

/// Rescale raw degree into `[0, 1]` by `(deg - min) / (max - min)`. Every
/// vertex maps to `0.0` if all degrees are equal (`max == min`).
pub fn rescaled_degree_centrality<G>(graph: G) -> HashMap<G::NodeId, f64>
where
    G: IntoNodeIdentifiers + IntoEdges,
    G::NodeId: core::hash::Hash + Eq,
{
    let degrees = degree_centrality(graph);
    let min = degrees.values().copied().min().unwrap_or(0);
    let max = degrees.values().copied().max().unwrap_or(0);
    let span = (max - min) as f64;
    degrees
        .into_iter()
        .map(|(v, d)| {
            let score = if span == 0.0 { 0.0 } else { (d - min) as f64 / span };
            (v, score)
        })
        .collect()
}
