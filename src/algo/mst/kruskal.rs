//! Kruskal's algorithm: sort all edges by weight, add each that joins two
//! distinct components, tracked by union-find. `O(E log E)`.

use std::collections::BinaryHeap;

use crate::data::Measure;
use crate::scored::MinScored;
use crate::unionfind::UnionFind;
use crate::visit::{EdgeRef, IntoEdgeReferences, NodeIndexable};

/// The edges of a minimum spanning forest of `graph`, treated as
/// undirected. One tree per connected component if `graph` is
/// disconnected.
pub fn kruskal_mst<G, F, K>(graph: G, mut edge_cost: F) -> Vec<G::EdgeRef>
where
    G: IntoEdgeReferences + NodeIndexable,
    F: FnMut(G::EdgeRef) -> K,
    K: Measure + Copy,
{
    let mut subgraphs = UnionFind::new(graph.node_bound());
    let mut heap: BinaryHeap<MinScored<K, G::EdgeRef>> = graph
        .edge_references()
        .map(|e| MinScored(edge_cost(e), e))
        .collect();

    let mut mst = Vec::new();
    while let Some(MinScored(_, edge)) = heap.pop() {
        let (a, b) = (graph.to_index(edge.source()), graph.to_index(edge.target()));
        if subgraphs.union(a, b) {
            mst.push(edge);
        }
    }
    mst
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UnGraph;

    #[test]
    fn spanning_forest_has_v_minus_c_edges() {
        // The classic six-vertex MST fixture plus a disconnected node.
        let mut g: UnGraph<(), f64> = UnGraph::new_undirected();
        let nodes: Vec<_> = (0..7).map(|_| g.add_node(())).collect();
        g.add_edge(nodes[0], nodes[1], 2.0).unwrap();
        g.add_edge(nodes[0], nodes[3], 4.0).unwrap();
        g.add_edge(nodes[1], nodes[2], 1.0).unwrap();
        g.add_edge(nodes[1], nodes[5], 7.0).unwrap();
        g.add_edge(nodes[2], nodes[4], 5.0).unwrap();
        g.add_edge(nodes[4], nodes[5], 1.0).unwrap();
        g.add_edge(nodes[3], nodes[4], 1.0).unwrap();
        // nodes[6] is isolated: one extra forest component.

        let mst = kruskal_mst(&g, |e| *e.weight());
        assert_eq!(mst.len(), g.node_count() - 2);
        let total: f64 = mst.iter().map(|e| *e.weight()).sum();
        assert_eq!(total, 5.0);
    }
}
