//! Dijkstra's algorithm: the relaxation engine with
//! `priority = alt`. Requires non-negative weights — violating this is a
//! precondition error, not a runtime check.

use core::hash::Hash;

use hashbrown::HashMap;
use std::collections::BinaryHeap;

use super::path::{reconstruct_path, Path};
use crate::data::Measure;
use crate::scored::MinScored;
use crate::visit::{EdgeRef, IntoEdges, VisitMap, Visitable};

/// The result of a single-source run: every reached vertex's distance,
/// and the predecessor edge that achieved it.
#[derive(Clone, Debug)]
pub struct ShortestPathTree<N, ER, K> {
    pub distance: HashMap<N, K>,
    pub predecessor: HashMap<N, ER>,
}

impl<N, ER, K> ShortestPathTree<N, ER, K>
where
    N: Copy + Eq + Hash,
    ER: EdgeRef<NodeId = N> + Copy,
    K: Copy,
{
    pub fn distance_to(&self, node: N) -> Option<K> {
        self.distance.get(&node).copied()
    }

    /// Reconstruct the path from this tree's source to `node`, or `None`
    /// (*no-path*) if `node` was never reached.
    pub fn path_to(&self, source: N, node: N) -> Option<Path<N, ER>> {
        reconstruct_path(source, node, &self.predecessor)
    }
}

/// Run Dijkstra from `source`, stopping when `until` returns `true` for a
/// vertex *popped* from the frontier (not merely discovered — popping is
/// what guarantees that vertex's distance is final).
pub fn dijkstra<G, F, U, K>(
    graph: G,
    source: G::NodeId,
    mut until: U,
    mut edge_cost: F,
) -> ShortestPathTree<G::NodeId, G::EdgeRef, K>
where
    G: IntoEdges + Visitable,
    G::NodeId: Eq + Hash,
    F: FnMut(G::EdgeRef) -> K,
    U: FnMut(G::NodeId) -> bool,
    K: Measure + Copy,
{
    let mut distance = HashMap::new();
    let mut predecessor = HashMap::new();
    let mut closed = graph.visit_map();
    let mut heap = BinaryHeap::new();

    distance.insert(source, K::default());
    heap.push(MinScored(K::default(), source));

    while let Some(MinScored(d, node)) = heap.pop() {
        if !closed.visit(node) {
            // Stale heap entry: this vertex was already finalized through
            // a cheaper pop.
            continue;
        }
        if until(node) {
            break;
        }
        for edge in graph.edges(node) {
            let next = edge.target();
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

    ShortestPathTree {
        distance,
        predecessor,
    }
}

/// Convenience wrapper: shortest path from `source` to `destination`,
/// stopping Dijkstra as soon as `destination` is popped. `None` is the
/// *no-path* outcome.
pub fn dijkstra_path<G, F, K>(
    graph: G,
    source: G::NodeId,
    destination: G::NodeId,
    edge_cost: F,
) -> Option<Path<G::NodeId, G::EdgeRef>>
where
    G: IntoEdges + Visitable,
    G::NodeId: Eq + Hash,
    F: FnMut(G::EdgeRef) -> K,
    K: Measure + Copy,
{
    let tree = dijkstra(graph, source, |n| n == destination, edge_cost);
    tree.path_to(source, destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;

    #[test]
    fn chain_cost_and_path() {
        // Dijkstra on chain: A-B:2, B-C:3 => cost 5, A-A empty path cost 0.
        let mut g: DiGraph<&str, u32> = DiGraph::new();
        let a = g.add_node("A");
        let b = g.add_node("B");
        let c = g.add_node("C");
        g.add_edge(a, b, 2).unwrap();
        g.add_edge(b, c, 3).unwrap();

        let path = dijkstra_path(&g, a, c, |e| *e.weight()).unwrap();
        assert_eq!(path.edges.len(), 2);
        assert_eq!(path.cost(0u32, |e| *e.weight()), 5);

        let trivial = dijkstra_path(&g, a, a, |e| *e.weight()).unwrap();
        assert!(trivial.edges.is_empty());
        assert_eq!(trivial.cost(0u32, |e| *e.weight()), 0);
    }

    #[test]
    fn unreachable_is_no_path() {
        let mut g: DiGraph<(), u32> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        assert!(dijkstra_path(&g, a, b, |e| *e.weight()).is_none());
    }

    #[test]
    fn picks_cheaper_of_two_routes() {
        let mut g: DiGraph<(), u32> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        g.add_edge(a, b, 10).unwrap();
        g.add_edge(a, c, 1).unwrap();
        g.add_edge(c, b, 1).unwrap();

        let path = dijkstra_path(&g, a, b, |e| *e.weight()).unwrap();
        assert_eq!(path.cost(0u32, |e| *e.weight()), 2);
    }
}
