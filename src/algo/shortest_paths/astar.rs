//! A*: the same relaxation engine as Dijkstra, but the heap priority is
//! `combine(g, heuristic(v))` rather than bare `g`. An admissible
//! heuristic (never overestimates true remaining cost) is required for
//! optimality; a non-admissible one gives a best-effort path.

use core::hash::Hash;

use hashbrown::HashMap;
use std::collections::BinaryHeap;

use super::path::{reconstruct_path, Path};
use crate::data::Measure;
use crate::scored::MinScored;
use crate::visit::{EdgeRef, IntoEdges, VisitMap, Visitable};

/// Run A* from `source` to `destination`. `combine` defaults to addition
/// in the common case (see [`astar_default`]) but is injectable so `g`
/// and `h` may be heterogeneous numeric types.
pub fn astar<G, F, H, C, K>(
    graph: G,
    source: G::NodeId,
    destination: G::NodeId,
    mut edge_cost: F,
    mut heuristic: H,
    mut combine: C,
) -> Option<Path<G::NodeId, G::EdgeRef>>
where
    G: IntoEdges + Visitable,
    G::NodeId: Eq + Hash,
    F: FnMut(G::EdgeRef) -> K,
    H: FnMut(G::NodeId) -> K,
    C: FnMut(K, K) -> K,
    K: Measure + Copy,
{
    let mut g_score = HashMap::new();
    let mut predecessor = HashMap::new();
    let mut closed = graph.visit_map();
    let mut heap = BinaryHeap::new();

    g_score.insert(source, K::default());
    heap.push(MinScored(heuristic(source), source));

    while let Some(MinScored(_, node)) = heap.pop() {
        if !closed.visit(node) {
            continue;
        }
        if node == destination {
            break;
        }
        let cost = *g_score.get(&node).expect("popped node has a g-cost");
        for edge in graph.edges(node) {
            let next = edge.target();
            if closed.is_visited(&next) {
                continue;
            }
            let tentative = cost + edge_cost(edge);
            let better = match g_score.get(&next) {
                Some(&known) => tentative < known,
                None => true,
            };
            if better {
                g_score.insert(next, tentative);
                predecessor.insert(next, edge);
                let priority = combine(tentative, heuristic(next));
                heap.push(MinScored(priority, next));
            }
        }
    }

    reconstruct_path(source, destination, &predecessor)
}

/// A* with the common `f = g + h` priority.
pub fn astar_default<G, F, H, K>(
    graph: G,
    source: G::NodeId,
    destination: G::NodeId,
    edge_cost: F,
    heuristic: H,
) -> Option<Path<G::NodeId, G::EdgeRef>>
where
    G: IntoEdges + Visitable,
    G::NodeId: Eq + Hash,
    F: FnMut(G::EdgeRef) -> K,
    H: FnMut(G::NodeId) -> K,
    K: Measure + Copy,
{
    astar(graph, source, destination, edge_cost, heuristic, |g, h| g + h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;

    #[test]
    fn zero_heuristic_matches_dijkstra() {
        let mut g: DiGraph<(), u32> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        g.add_edge(a, b, 2).unwrap();
        g.add_edge(b, c, 3).unwrap();

        let path = astar_default(&g, a, c, |e| *e.weight(), |_| 0u32).unwrap();
        assert_eq!(path.cost(0u32, |e| *e.weight()), 5);
    }

    #[test]
    fn admissible_heuristic_finds_optimal_path() {
        // Grid-ish graph where straight-line heuristic is admissible for
        // a unit-weight metric.
        let mut g: DiGraph<(i32, i32), u32> = DiGraph::new();
        let nodes: Vec<_> = (0..4).map(|i| g.add_node((i, 0))).collect();
        for w in nodes.windows(2) {
            g.add_edge(w[0], w[1], 1).unwrap();
        }
        // shortcut
        g.add_edge(nodes[0], nodes[3], 10).unwrap();

        let h = |n: crate::graph::NodeIndex| {
            let (x, _) = g.node_weight(n).copied().unwrap();
            (3 - x) as u32
        };
        let path = astar_default(&g, nodes[0], nodes[3], |e| *e.weight(), h).unwrap();
        assert_eq!(path.cost(0u32, |e| *e.weight()), 3);
    }
}
