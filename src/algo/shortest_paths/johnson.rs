//! Johnson's algorithm: all-pairs shortest paths on graphs with negative
//! (but not negative-cycle) edges, via Bellman-Ford potentials followed
//! by one Dijkstra per vertex on the reweighted graph.
//!
//! The virtual vertex `q` with zero-weight edges to every vertex is
//! never materialized: seeding every vertex's potential at `0` and
//! relaxing all edges is exactly equivalent (a vertex reachable from `q`
//! in one hop is every vertex, at distance 0).

use core::hash::Hash;

use hashbrown::HashMap;

use super::dijkstra::dijkstra;
use crate::algo::NegativeCycle;
use crate::data::FloatMeasure;
use crate::visit::{EdgeRef, IntoEdgeReferences, IntoEdges, IntoNodeIdentifiers, Visitable};

/// All-pairs shortest distance, keyed `(source, destination)`. `Err` if
/// the graph has a negative cycle (Bellman-Ford on the potentials fails).
pub fn johnson<G, F, K>(
    graph: G,
    mut edge_cost: F,
) -> Result<HashMap<(G::NodeId, G::NodeId), K>, NegativeCycle>
where
    G: IntoEdges + IntoEdgeReferences + IntoNodeIdentifiers + Visitable + Copy,
    G::NodeId: Eq + Hash + Copy,
    F: FnMut(G::EdgeRef) -> K,
    K: FloatMeasure + Copy,
{
    let mut potential: HashMap<G::NodeId, K> = HashMap::new();
    for n in graph.node_identifiers() {
        potential.insert(n, K::zero());
    }

    let node_count = graph.node_identifiers().count();
    for _ in 0..node_count {
        let mut changed = false;
        for edge in graph.edge_references() {
            let (u, v) = (edge.source(), edge.target());
            let alt = potential[&u] + edge_cost(edge);
            if alt < potential[&v] {
                potential.insert(v, alt);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    for edge in graph.edge_references() {
        let (u, v) = (edge.source(), edge.target());
        if potential[&u] + edge_cost(edge) < potential[&v] {
            return Err(NegativeCycle);
        }
    }

    let mut result = HashMap::new();
    for source in graph.node_identifiers() {
        let tree = dijkstra(graph, source, |_| false, |edge| {
            let (u, v) = (edge.source(), edge.target());
            edge_cost(edge) + potential[&u] - potential[&v]
        });
        for (node, reweighted) in tree.distance {
            let original = reweighted - potential[&source] + potential[&node];
            result.insert((source, node), original);
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;

    #[test]
    fn agrees_with_floyd_warshall() {
        let mut g: DiGraph<(), f64> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        g.add_edge(a, b, 2.0).unwrap();
        g.add_edge(b, c, -1.0).unwrap();
        g.add_edge(a, c, 100.0).unwrap();

        let all_pairs = johnson(&g, |e| *e.weight()).unwrap();
        assert_eq!(all_pairs[&(a, c)], 1.0);

        let fw = crate::algo::shortest_paths::floyd_warshall(&g, |e| *e.weight()).unwrap();
        let n = g.node_count();
        let (ia, ic) = (g.to_index(a), g.to_index(c));
        assert_eq!(all_pairs[&(a, c)], fw[ia * n + ic]);
    }

    #[test]
    fn detects_negative_cycle() {
        let mut g: DiGraph<(), f64> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        g.add_edge(a, b, 1.0).unwrap();
        g.add_edge(b, c, 1.0).unwrap();
        g.add_edge(c, a, -3.0).unwrap();
        assert!(johnson(&g, |e| *e.weight()).is_err());
    }
}
