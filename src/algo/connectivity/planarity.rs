//! Planarity: a fast necessary-condition filter, not a full
//! Kuratowski-subdivision test. A simple graph with `E > 3V - 6` (or `E >
//! 2V - 4` when known bipartite) cannot be planar; passing the filter
//! does not prove planarity.

use crate::visit::{IntoEdgeReferences, IntoNodeIdentifiers};

/// `false` if `graph` is provably non-planar by the Euler-formula edge
/// bound; `true` otherwise (inconclusive — a full planarity test is out
/// of scope).
pub fn is_planar_by_euler_formula<G>(graph: G, bipartite: bool) -> bool
where
    G: IntoNodeIdentifiers + IntoEdgeReferences,
{
    let v = graph.node_identifiers().count();
    let e = graph.edge_references().count();
    if v < 3 {
        return true;
    }
    let bound = if bipartite { 2 * v } else { 3 * v };
    let offset = if bipartite { 4 } else { 6 };
    if bound < offset {
        return true;
    }
    e <= bound - offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UnGraph;

    #[test]
    fn k5_fails_the_euler_bound() {
        let mut g: UnGraph<(), ()> = UnGraph::new_undirected();
        let nodes: Vec<_> = (0..5).map(|_| g.add_node(())).collect();
        for i in 0..5 {
            for j in (i + 1)..5 {
                g.add_edge(nodes[i], nodes[j], ()).unwrap();
            }
        }
        assert!(!is_planar_by_euler_formula(&g, false));
    }

    #[test]
    fn sparse_tree_passes() {
        let mut g: UnGraph<(), ()> = UnGraph::new_undirected();
        let nodes: Vec<_> = (0..6).map(|_| g.add_node(())).collect();
        for i in 1..6 {
            g.add_edge(nodes[0], nodes[i], ()).unwrap();
        }
        assert!(is_planar_by_euler_formula(&g, false));
    }
}
