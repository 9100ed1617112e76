//! All-shortest-paths: every optimal path between one source and
//! one destination, found by running Dijkstra while recording *every*
//! predecessor edge tying for the known-minimum cost, then backtracking
//! the resulting predecessor multigraph.

use core::hash::Hash;

use hashbrown::{HashMap, HashSet};
use std::collections::BinaryHeap;

use super::path::Path;
use crate::data::Measure;
use crate::scored::MinScored;
use crate::visit::{EdgeRef, IntoEdges, VisitMap, Visitable};

/// Every shortest (optimal-cost) path from `source` to `destination`.
/// Empty if `destination` is unreachable.
pub fn all_shortest_paths<G, F, K>(
    graph: G,
    source: G::NodeId,
    destination: G::NodeId,
    mut edge_cost: F,
) -> Vec<Path<G::NodeId, G::EdgeRef>>
where
    G: IntoEdges + Visitable,
    G::NodeId: Eq + Hash + Copy,
    F: FnMut(G::EdgeRef) -> K,
    K: Measure + Copy,
{
    let mut distance = HashMap::new();
    // Every predecessor edge achieving the known-minimum cost, not just
    // the first found (append on tie, reset on strict improvement).
    let mut predecessors: HashMap<G::NodeId, Vec<G::EdgeRef>> = HashMap::new();
    let mut closed = graph.visit_map();
    let mut heap = BinaryHeap::new();

    distance.insert(source, K::default());
    heap.push(MinScored(K::default(), source));

    while let Some(MinScored(d, node)) = heap.pop() {
        if !closed.visit(node) {
            continue;
        }
        for edge in graph.edges(node) {
            let next = edge.target();
            let alt = d + edge_cost(edge);
            if closed.is_visited(&next) {
                // `next` already has its final distance. Under
                // non-negative weights that distance is <= `alt`; the
                // only way `alt` still ties it is a zero-weight edge
                // between two vertices at the same optimal distance that
                // happened to pop in this order. That is a genuine
                // alternate optimal predecessor, not just a stale heap
                // entry — record it, but don't reopen `next` (its
                // distance is already final and it has already been
                // expanded).
                if distance.get(&next) == Some(&alt) {
                    predecessors.entry(next).or_default().push(edge);
                }
                continue;
            }
            match distance.get(&next) {
                Some(&known) if alt < known => {
                    distance.insert(next, alt);
                    predecessors.insert(next, vec![edge]);
                    heap.push(MinScored(alt, next));
                }
                Some(&known) if alt == known => {
                    predecessors.entry(next).or_default().push(edge);
                }
                None => {
                    distance.insert(next, alt);
                    predecessors.insert(next, vec![edge]);
                    heap.push(MinScored(alt, next));
                }
                _ => {}
            }
        }
    }

    if source != destination && !distance.contains_key(&destination) {
        return Vec::new();
    }

    let mut paths = Vec::new();
    // DFS backward from destination through the predecessor multigraph,
    // emitting one edge-sequence per root reached. `on_path` guards
    // against the (zero-weight-only) case where two equal-cost vertices
    // end up as each other's predecessor, which would otherwise backtrack
    // forever.
    let mut on_path = HashSet::new();
    on_path.insert(destination);
    backtrack(destination, source, &predecessors, &mut Vec::new(), &mut on_path, &mut paths);

    paths
        .into_iter()
        .map(|edges| Path {
            source,
            destination,
            edges,
        })
        .collect()
}

fn backtrack<N, ER>(
    current: N,
    source: N,
    predecessors: &HashMap<N, Vec<ER>>,
    acc: &mut Vec<ER>,
    on_path: &mut HashSet<N>,
    out: &mut Vec<Vec<ER>>,
) where
    N: Copy + Eq + Hash,
    ER: EdgeRef<NodeId = N> + Copy,
{
    if current == source {
        let mut edges = acc.clone();
        edges.reverse();
        out.push(edges);
        return;
    }
    let Some(preds) = predecessors.get(&current) else {
        return;
    };
    for &edge in preds {
        let prev = edge.source();
        if !on_path.insert(prev) {
            continue;
        }
        acc.push(edge);
        backtrack(prev, source, predecessors, acc, on_path, out);
        acc.pop();
        on_path.remove(&prev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;

    #[test]
    fn diamond_has_two_equal_cost_paths() {
        // A-B:2, B-D:1, A-C:1, C-D:2 => exactly two paths of cost 3.
        let mut g: DiGraph<&str, u32> = DiGraph::new();
        let a = g.add_node("A");
        let b = g.add_node("B");
        let c = g.add_node("C");
        let d = g.add_node("D");
        g.add_edge(a, b, 2).unwrap();
        g.add_edge(b, d, 1).unwrap();
        g.add_edge(a, c, 1).unwrap();
        g.add_edge(c, d, 2).unwrap();

        let paths = all_shortest_paths(&g, a, d, |e| *e.weight());
        assert_eq!(paths.len(), 2);
        for p in &paths {
            assert_eq!(p.cost(0u32, |e| *e.weight()), 3);
        }
    }

    #[test]
    fn zero_weight_ties_into_an_already_closed_vertex_are_not_dropped() {
        // S->A:1, S->B:1, A->B:0, B->A:0, A->D:1, B->D:1. Whichever of
        // A/B the heap happens to pop (and close) first, the zero-weight
        // edge from the other one still ties into it at the same optimal
        // distance and must be recorded as an alternate predecessor, not
        // silently dropped because its target was already closed. All
        // four source-to-destination walks through {A, B} cost exactly 2.
        let mut g: DiGraph<&str, u32> = DiGraph::new();
        let s = g.add_node("S");
        let a = g.add_node("A");
        let b = g.add_node("B");
        let d = g.add_node("D");
        g.add_edge(s, a, 1).unwrap();
        g.add_edge(s, b, 1).unwrap();
        g.add_edge(a, b, 0).unwrap();
        g.add_edge(b, a, 0).unwrap();
        g.add_edge(a, d, 1).unwrap();
        g.add_edge(b, d, 1).unwrap();

        let paths = all_shortest_paths(&g, s, d, |e| *e.weight());
        assert_eq!(paths.len(), 4);
        for p in &paths {
            assert_eq!(p.source, s);
            assert_eq!(p.destination, d);
            assert_eq!(p.cost(0u32, |e| *e.weight()), 2);
        }
    }

    #[test]
    fn unique_shortest_path_is_singleton() {
        let mut g: DiGraph<(), u32> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        g.add_edge(a, b, 1).unwrap();
        g.add_edge(b, c, 1).unwrap();
        g.add_edge(a, c, 5).unwrap();

        let paths = all_shortest_paths(&g, a, c, |e| *e.weight());
        assert_eq!(paths.len(), 1);
    }
}
