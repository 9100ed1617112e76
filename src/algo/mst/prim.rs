//! Prim's algorithm: grow a tree one cheapest frontier edge at a time from
//! a min-heap of edges leaving the tree so far. `O((V+E) log V)`. Restarts
//! from an arbitrary unvisited vertex whenever the current tree is
//! exhausted, so a disconnected graph yields a minimum spanning forest.

use std::collections::BinaryHeap;

use hashbrown::HashSet;

use crate::data::Measure;
use crate::scored::MinScored;
use crate::visit::{EdgeRef, IntoEdges, IntoNodeIdentifiers, NodeIndexable};

/// The edges of a minimum spanning forest of `graph`, treated as
/// undirected, built by Prim's algorithm.
pub fn prim_mst<G, F, K>(graph: G, mut edge_cost: F) -> Vec<G::EdgeRef>
where
    G: IntoNodeIdentifiers + IntoEdges + NodeIndexable,
    F: FnMut(G::EdgeRef) -> K,
    K: Measure + Copy,
{
    let mut taken: HashSet<usize> = HashSet::with_capacity(graph.node_count());
    let mut mst = Vec::new();
    let mut frontier: BinaryHeap<MinScored<K, G::EdgeRef>> = BinaryHeap::new();

    for root in graph.node_identifiers() {
        let root_index = graph.to_index(root);
        if taken.contains(&root_index) {
            continue;
        }
        taken.insert(root_index);
        for edge in graph.edges(root) {
            frontier.push(MinScored(edge_cost(edge), edge));
        }

        while let Some(MinScored(_, edge)) = frontier.pop() {
            let target_index = graph.to_index(edge.target());
            if taken.contains(&target_index) {
                continue;
            }
            taken.insert(target_index);
            mst.push(edge);
            for next_edge in graph.edges(edge.target()) {
                if !taken.contains(&graph.to_index(next_edge.target())) {
                    frontier.push(MinScored(edge_cost(next_edge), next_edge));
                }
            }
        }
    }

    mst
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UnGraph;

    #[test]
    fn agrees_with_kruskal_on_total_weight() {
        let mut g: UnGraph<(), f64> = UnGraph::new_undirected();
        let nodes: Vec<_> = (0..6).map(|_| g.add_node(())).collect();
        g.add_edge(nodes[0], nodes[1], 2.0).unwrap();
        g.add_edge(nodes[0], nodes[3], 4.0).unwrap();
        g.add_edge(nodes[1], nodes[2], 1.0).unwrap();
        g.add_edge(nodes[1], nodes[5], 7.0).unwrap();
        g.add_edge(nodes[2], nodes[4], 5.0).unwrap();
        g.add_edge(nodes[4], nodes[5], 1.0).unwrap();
        g.add_edge(nodes[3], nodes[4], 1.0).unwrap();

        let mst = prim_mst(&g, |e| *e.weight());
        assert_eq!(mst.len(), g.node_count() - 1);
        let total: f64 = mst.iter().map(|e| *e.weight()).sum();
        assert_eq!(total, 5.0);

        let kruskal = super::super::kruskal::kruskal_mst(&g, |e| *e.weight());
        let kruskal_total: f64 = kruskal.iter().map(|e| *e.weight()).sum();
        assert_eq!(total, kruskal_total);
    }

    #[test]
    fn disconnected_graph_yields_forest() {
        let mut g: UnGraph<(), f64> = UnGraph::new_undirected();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        g.add_edge(a, b, 1.0).unwrap();
        // c is isolated.

        let mst = prim_mst(&g, |e| *e.weight());
        assert_eq!(mst.len(), 1);
        let _ = c;
    }
}
