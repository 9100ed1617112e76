//! Yen's algorithm: the `k` best loopless paths from `source` to
//! `destination`, in non-decreasing cost order.

use core::hash::Hash;

use hashbrown::{HashMap, HashSet};
use std::collections::BinaryHeap;

use super::path::Path;
use crate::data::Measure;
use crate::scored::MinScored;
use crate::visit::{EdgeRef, IntoEdges, VisitMap, Visitable};

/// Dijkstra restricted to a subgraph: `banned_nodes` may not be visited
/// (other than `source` itself) and `banned_edges` may not be taken.
fn constrained_dijkstra<G, F, K>(
    graph: G,
    source: G::NodeId,
    destination: G::NodeId,
    banned_nodes: &HashSet<G::NodeId>,
    banned_edges: &HashSet<G::EdgeId>,
    mut edge_cost: F,
) -> Option<Path<G::NodeId, G::EdgeRef>>
where
    G: IntoEdges + Visitable,
    G::NodeId: Eq + Hash + Copy,
    G::EdgeId: Eq + Hash,
    F: FnMut(G::EdgeRef) -> K,
    K: Measure + Copy,
{
    let mut distance = HashMap::new();
    let mut predecessor: HashMap<G::NodeId, G::EdgeRef> = HashMap::new();
    let mut closed = graph.visit_map();
    let mut heap = BinaryHeap::new();

    distance.insert(source, K::default());
    heap.push(MinScored(K::default(), source));

    while let Some(MinScored(d, node)) = heap.pop() {
        if !closed.visit(node) {
            continue;
        }
        if node == destination {
            break;
        }
        for edge in graph.edges(node) {
            if banned_edges.contains(&edge.id()) {
                continue;
            }
            let next = edge.target();
            if next != destination && banned_nodes.contains(&next) {
                continue;
            }
            if closed.is_visited(&next) {
                continue;
            }
            let alt = d + edge_cost(edge);
            let better = match distance.get(&next) {
                Some(&known) => alt < known,
                None => true,
            };
            if better {
                distance.insert(next, alt);
                predecessor.insert(next, edge);
                heap.push(MinScored(alt, next));
            }
        }
    }

    super::path::reconstruct_path(source, destination, &predecessor)
}

/// `k` shortest loopless paths from `source` to `destination`, cheapest
/// first. Fewer than `k` paths are returned if the candidate set empties
/// early.
pub fn yen<G, F, K>(
    graph: G,
    source: G::NodeId,
    destination: G::NodeId,
    k: usize,
    mut edge_cost: F,
) -> Vec<Path<G::NodeId, G::EdgeRef>>
where
    G: IntoEdges + Visitable,
    G::NodeId: Eq + Hash + Copy,
    G::EdgeId: Eq + Hash + Copy,
    F: FnMut(G::EdgeRef) -> K,
    K: Measure + Copy,
{
    let empty_nodes = HashSet::new();
    let empty_edges = HashSet::new();
    let Some(first) = constrained_dijkstra(
        graph,
        source,
        destination,
        &empty_nodes,
        &empty_edges,
        &mut edge_cost,
    ) else {
        return Vec::new();
    };

    let mut a: Vec<Path<G::NodeId, G::EdgeRef>> = vec![first];
    let mut candidates: BinaryHeap<MinScored<K, (Vec<G::EdgeId>, Path<G::NodeId, G::EdgeRef>)>> =
        BinaryHeap::new();
    let mut seen: HashSet<Vec<G::EdgeId>> = HashSet::new();
    seen.insert(a[0].edges.iter().map(|e| e.id()).collect());

    if k == 0 {
        return Vec::new();
    }

    while a.len() < k {
        let prev_path = a.last().unwrap().clone();
        let prev_ids: Vec<G::EdgeId> = prev_path.edges.iter().map(|e| e.id()).collect();

        for j in 0..prev_path.edges.len() {
            let spur_node = if j == 0 {
                source
            } else {
                prev_path.edges[j - 1].target()
            };
            let root_ids = &prev_ids[..j];

            let mut banned_edges: HashSet<G::EdgeId> = HashSet::new();
            for path in &a {
                let ids: Vec<G::EdgeId> = path.edges.iter().map(|e| e.id()).collect();
                if ids.len() > j && ids[..j] == *root_ids {
                    banned_edges.insert(ids[j]);
                }
            }
            let banned_nodes: HashSet<G::NodeId> =
                prev_path.edges[..j].iter().map(|e| e.source()).collect();

            if let Some(spur_path) = constrained_dijkstra(
                graph,
                spur_node,
                destination,
                &banned_nodes,
                &banned_edges,
                &mut edge_cost,
            ) {
                let mut edges = prev_path.edges[..j].to_vec();
                edges.extend(spur_path.edges);
                let candidate = Path {
                    source,
                    destination,
                    edges,
                };
                let ids: Vec<G::EdgeId> = candidate.edges.iter().map(|e| e.id()).collect();
                if seen.contains(&ids) {
                    continue;
                }
                let cost = candidate.cost(K::default(), |e| edge_cost(e));
                candidates.push(MinScored(cost, (ids, candidate)));
            }
        }

        let Some(MinScored(_, (ids, path))) = candidates.pop() else {
            break;
        };
        seen.insert(ids);
        a.push(path);
    }

    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;

    #[test]
    fn single_path_on_a_chain() {
        // Linear chain A-B-C with weights 1,2 => exactly 1 path, cost 3.
        let mut g: DiGraph<&str, u32> = DiGraph::new();
        let a = g.add_node("A");
        let b = g.add_node("B");
        let c = g.add_node("C");
        g.add_edge(a, b, 1).unwrap();
        g.add_edge(b, c, 2).unwrap();

        let paths = yen(&g, a, c, 3, |e| *e.weight());
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].cost(0u32, |e| *e.weight()), 3);
    }

    #[test]
    fn k_shortest_in_nondecreasing_order() {
        let mut g: DiGraph<(), u32> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        let d = g.add_node(());
        g.add_edge(a, b, 1).unwrap();
        g.add_edge(b, d, 1).unwrap();
        g.add_edge(a, c, 1).unwrap();
        g.add_edge(c, d, 1).unwrap();
        g.add_edge(a, d, 5).unwrap();

        let paths = yen(&g, a, d, 3, |e| *e.weight());
        assert_eq!(paths.len(), 3);
        let costs: Vec<u32> = paths.iter().map(|p| p.cost(0u32, |e| *e.weight())).collect();
        assert!(costs.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(costs[0], 2);
        assert_eq!(costs[2], 5);
    }
}
