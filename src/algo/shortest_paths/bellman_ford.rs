//! Bellman-Ford: tolerates negative weights, detects a negative cycle
//! reachable from the source.

use core::hash::Hash;

use hashbrown::HashMap;

use super::path::{reconstruct_path, Path};
use crate::algo::NegativeCycle;
use crate::data::FloatMeasure;
use crate::visit::{EdgeRef, IntoEdgeReferences, IntoNodeIdentifiers};

/// `distance[source] = 0`, every other vertex `+infinity`. Relax every
/// edge `|V|-1` times; a relaxation succeeding on one extra pass means a
/// negative cycle is reachable from `source`.
pub fn bellman_ford<G, F, K>(
    graph: G,
    source: G::NodeId,
    mut edge_cost: F,
) -> Result<(HashMap<G::NodeId, K>, HashMap<G::NodeId, G::EdgeRef>), NegativeCycle>
where
    G: IntoEdgeReferences + IntoNodeIdentifiers,
    G::NodeId: Eq + Hash + Copy,
    F: FnMut(G::EdgeRef) -> K,
    K: FloatMeasure + Copy,
{
    let mut distance: HashMap<G::NodeId, K> = HashMap::new();
    let mut predecessor: HashMap<G::NodeId, G::EdgeRef> = HashMap::new();
    for n in graph.node_identifiers() {
        distance.insert(n, K::infinite());
    }
    distance.insert(source, K::zero());

    let node_count = graph.node_identifiers().count();
    for _ in 1..node_count {
        let mut changed = false;
        for edge in graph.edge_references() {
            let (u, v) = (edge.source(), edge.target());
            let du = *distance.get(&u).unwrap_or(&K::infinite());
            if du == K::infinite() {
                continue;
            }
            let alt = du + edge_cost(edge);
            if alt < *distance.get(&v).unwrap_or(&K::infinite()) {
                distance.insert(v, alt);
                predecessor.insert(v, edge);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    for edge in graph.edge_references() {
        let (u, v) = (edge.source(), edge.target());
        let du = *distance.get(&u).unwrap_or(&K::infinite());
        if du == K::infinite() {
            continue;
        }
        if du + edge_cost(edge) < *distance.get(&v).unwrap_or(&K::infinite()) {
            return Err(NegativeCycle);
        }
    }

    Ok((distance, predecessor))
}

/// Convenience wrapper around [`bellman_ford`] reconstructing one path.
pub fn bellman_ford_path<G, F, K>(
    graph: G,
    source: G::NodeId,
    destination: G::NodeId,
    edge_cost: F,
) -> Result<Option<Path<G::NodeId, G::EdgeRef>>, NegativeCycle>
where
    G: IntoEdgeReferences + IntoNodeIdentifiers,
    G::NodeId: Eq + Hash + Copy,
    F: FnMut(G::EdgeRef) -> K,
    K: FloatMeasure + Copy,
{
    let (_, predecessor) = bellman_ford(graph, source, edge_cost)?;
    Ok(reconstruct_path(source, destination, &predecessor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;

    #[test]
    fn negative_edge_is_fine() {
        // A-B:2, B-C:-1 => dist(A,C) = 1.
        let mut g: DiGraph<&str, f64> = DiGraph::new();
        let a = g.add_node("A");
        let b = g.add_node("B");
        let c = g.add_node("C");
        g.add_edge(a, b, 2.0).unwrap();
        g.add_edge(b, c, -1.0).unwrap();

        let (dist, _) = bellman_ford(&g, a, |e| *e.weight()).unwrap();
        assert_eq!(dist[&c], 1.0);
    }

    #[test]
    fn detects_negative_cycle() {
        // A-B:1, B-C:1, C-A:-3 => negative-cycle-detected.
        let mut g: DiGraph<&str, f64> = DiGraph::new();
        let a = g.add_node("A");
        let b = g.add_node("B");
        let c = g.add_node("C");
        g.add_edge(a, b, 1.0).unwrap();
        g.add_edge(b, c, 1.0).unwrap();
        g.add_edge(c, a, -3.0).unwrap();

        assert!(bellman_ford(&g, a, |e| *e.weight()).is_err());
    }
}
