//! SPFA — the queue-based Bellman-Ford variant: only enqueue a
//! vertex whose distance just improved, instead of blindly relaxing
//! every edge every round. Detects a negative cycle by counting each
//! vertex's enqueue count; exceeding `|V|` means some vertex keeps
//! getting cheaper forever.

use core::hash::Hash;

use hashbrown::{HashMap, HashSet};
use std::collections::VecDeque;

use super::path::{reconstruct_path, Path};
use crate::algo::NegativeCycle;
use crate::data::FloatMeasure;
use crate::visit::{EdgeRef, IntoEdges, IntoNodeIdentifiers};

pub fn spfa<G, F, K>(
    graph: G,
    source: G::NodeId,
    mut edge_cost: F,
) -> Result<(HashMap<G::NodeId, K>, HashMap<G::NodeId, G::EdgeRef>), NegativeCycle>
where
    G: IntoEdges + IntoNodeIdentifiers,
    G::NodeId: Eq + Hash + Copy,
    F: FnMut(G::EdgeRef) -> K,
    K: FloatMeasure + Copy,
{
    let node_count = graph.node_identifiers().count();

    let mut distance: HashMap<G::NodeId, K> = HashMap::new();
    let mut predecessor: HashMap<G::NodeId, G::EdgeRef> = HashMap::new();
    let mut in_queue: HashSet<G::NodeId> = HashSet::new();
    let mut enqueue_count: HashMap<G::NodeId, usize> = HashMap::new();
    let mut queue = VecDeque::new();

    distance.insert(source, K::zero());
    queue.push_back(source);
    in_queue.insert(source);
    enqueue_count.insert(source, 1);

    while let Some(u) = queue.pop_front() {
        in_queue.remove(&u);
        let du = *distance.get(&u).unwrap_or(&K::infinite());
        for edge in graph.edges(u) {
            let v = edge.target();
            let alt = du + edge_cost(edge);
            if alt < *distance.get(&v).unwrap_or(&K::infinite()) {
                distance.insert(v, alt);
                predecessor.insert(v, edge);
                if in_queue.insert(v) {
                    queue.push_back(v);
                    let count = enqueue_count.entry(v).or_insert(0);
                    *count += 1;
                    if *count > node_count {
                        return Err(NegativeCycle);
                    }
                }
            }
        }
    }

    Ok((distance, predecessor))
}

pub fn spfa_path<G, F, K>(
    graph: G,
    source: G::NodeId,
    destination: G::NodeId,
    edge_cost: F,
) -> Result<Option<Path<G::NodeId, G::EdgeRef>>, NegativeCycle>
where
    G: IntoEdges + IntoNodeIdentifiers,
    G::NodeId: Eq + Hash + Copy,
    F: FnMut(G::EdgeRef) -> K,
    K: FloatMeasure + Copy,
{
    let (_, predecessor) = spfa(graph, source, edge_cost)?;
    Ok(reconstruct_path(source, destination, &predecessor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;

    #[test]
    fn matches_bellman_ford_on_negative_edge() {
        let mut g: DiGraph<&str, f64> = DiGraph::new();
        let a = g.add_node("A");
        let b = g.add_node("B");
        let c = g.add_node("C");
        g.add_edge(a, b, 2.0).unwrap();
        g.add_edge(b, c, -1.0).unwrap();

        let (dist, _) = spfa(&g, a, |e| *e.weight()).unwrap();
        assert_eq!(dist[&c], 1.0);
    }

    #[test]
    fn detects_negative_cycle() {
        let mut g: DiGraph<&str, f64> = DiGraph::new();
        let a = g.add_node("A");
        let b = g.add_node("B");
        let c = g.add_node("C");
        g.add_edge(a, b, 1.0).unwrap();
        g.add_edge(b, c, 1.0).unwrap();
        g.add_edge(c, a, -3.0).unwrap();

        assert!(spfa(&g, a, |e| *e.weight()).is_err());
    }
}
