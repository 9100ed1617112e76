//! Boruvka's algorithm: each round, every component in the union-find
//! picks its own cheapest edge leaving the component, then all picks are
//! merged at once. `O(E log V)` (log V rounds, linear work per round).

use hashbrown::HashMap;

use crate::data::Measure;
use crate::unionfind::UnionFind;
use crate::visit::{EdgeRef, IntoEdgeReferences, NodeIndexable};

/// The edges of a minimum spanning forest of `graph`, treated as
/// undirected, built by Boruvka's algorithm.
pub fn boruvka_mst<G, F, K>(graph: G, mut edge_cost: F) -> Vec<G::EdgeRef>
where
    G: IntoEdgeReferences + NodeIndexable,
    F: FnMut(G::EdgeRef) -> K,
    K: Measure + Copy,
{
    let mut subgraphs = UnionFind::new(graph.node_bound());
    let mut mst = Vec::new();

    loop {
        // Cheapest edge leaving each component, keyed by component root.
        let mut cheapest: HashMap<usize, (K, G::EdgeRef)> = HashMap::new();
        for edge in graph.edge_references() {
            let (a, b) = (graph.to_index(edge.source()), graph.to_index(edge.target()));
            let (ra, rb) = (subgraphs.find(a), subgraphs.find(b));
            if ra == rb {
                continue;
            }
            let cost = edge_cost(edge);
            for root in [ra, rb] {
                cheapest
                    .entry(root)
                    .and_modify(|(best_cost, best_edge)| {
                        if cost < *best_cost {
                            *best_cost = cost;
                            *best_edge = edge;
                        }
                    })
                    .or_insert((cost, edge));
            }
        }

        if cheapest.is_empty() {
            break;
        }

        let mut merged = false;
        for (_, edge) in cheapest.into_values() {
            let (a, b) = (graph.to_index(edge.source()), graph.to_index(edge.target()));
            if subgraphs.union(a, b) {
                mst.push(edge);
                merged = true;
            }
        }
        if !merged {
            break;
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

        let mst = boruvka_mst(&g, |e| *e.weight());
        assert_eq!(mst.len(), g.node_count() - 1);
        let total: f64 = mst.iter().map(|e| *e.weight()).sum();
        assert_eq!(total, 5.0);
    }

    #[test]
    fn disconnected_graph_yields_forest() {
        let mut g: UnGraph<(), f64> = UnGraph::new_undirected();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        let d = g.add_node(());
        g.add_edge(a, b, 1.0).unwrap();
        g.add_edge(c, d, 2.0).unwrap();

        let mst = boruvka_mst(&g, |e| *e.weight());
        assert_eq!(mst.len(), 2);
    }
}
