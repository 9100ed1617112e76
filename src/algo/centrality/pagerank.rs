//! PageRank: damped iterative update,
//! `PR_{t+1}(v) = (1-d)/V + d * sum_{u->v} PR_t(u)/outdeg(u)`, with
//! dangling-vertex mass (zero out-degree) redistributed uniformly rather
//! than lost. Stops on `max_iter` rounds or once the L1 difference
//! between successive rank vectors drops below `tolerance`.

use hashbrown::HashMap;

use crate::data::UnitMeasure;
use crate::visit::{IntoEdges, IntoNodeIdentifiers};

/// PageRank of every vertex. `damping` is typically `0.85`; panics (a
/// programmer precondition, like Dijkstra's non-negative-weight
/// requirement) if it isn't in `[0, 1]`.
pub fn page_rank<G, K>(graph: G, damping: K, max_iter: usize, tolerance: K) -> HashMap<G::NodeId, K>
where
    G: IntoNodeIdentifiers + IntoEdges,
    G::NodeId: core::hash::Hash + Eq + Copy,
    K: UnitMeasure + PartialOrd + Copy,
{
    assert!(
        damping >= K::zero() && damping <= K::one(),
        "damping factor must be between 0 and 1"
    );
    let nodes: Vec<G::NodeId> = graph.node_identifiers().collect();
    let n = nodes.len();
    if n == 0 {
        return HashMap::new();
    }

    let nb = K::from_usize(n);
    let base = (K::one() - damping) / nb;
    let out_degree: HashMap<G::NodeId, usize> = nodes.iter().map(|&v| (v, graph.out_degree(v))).collect();
    let mut rank: HashMap<G::NodeId, K> = nodes.iter().map(|&v| (v, K::one() / nb)).collect();

    for _ in 0..max_iter {
        let dangling_mass: K = nodes
            .iter()
            .filter(|&&v| out_degree[&v] == 0)
            .map(|&v| rank[&v])
            .fold(K::zero(), |acc, r| acc + r);
        let dangling_share = damping * dangling_mass / nb;

        let mut next: HashMap<G::NodeId, K> = nodes.iter().map(|&v| (v, base + dangling_share)).collect();
        for &u in &nodes {
            let deg = out_degree[&u];
            if deg == 0 {
                continue;
            }
            let share = damping * rank[&u] / K::from_usize(deg);
            for edge in graph.edges(u) {
                use crate::visit::EdgeRef;
                *next.get_mut(&edge.target()).unwrap() = next[&edge.target()] + share;
            }
        }

        let mut l1 = K::zero();
        for &v in &nodes {
            let diff = next[&v] - rank[&v];
            let diff = if diff < K::zero() { K::zero() - diff } else { diff };
            l1 = l1 + diff;
        }
        rank = next;
        if l1 < tolerance {
            break;
        }
    }

    rank
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;

    #[test]
    fn ranks_sum_to_one() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        let nodes: Vec<_> = (0..5).map(|_| g.add_node(())).collect();
        g.add_edge(nodes[0], nodes[1], ()).unwrap();
        g.add_edge(nodes[0], nodes[3], ()).unwrap();
        g.add_edge(nodes[1], nodes[2], ()).unwrap();
        g.add_edge(nodes[1], nodes[3], ()).unwrap();

        let ranks: HashMap<_, f64> = page_rank(&g, 0.85, 100, 1e-10);
        let total: f64 = ranks.values().sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn dangling_vertex_mass_is_redistributed() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        g.add_edge(a, b, ()).unwrap();
        // b is dangling: no out-edges.

        let ranks: HashMap<_, f64> = page_rank(&g, 0.85, 50, 1e-12);
        let total: f64 = ranks.values().sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    #[should_panic]
    fn damping_out_of_range_panics() {
        let g: DiGraph<(), ()> = DiGraph::new();
        let _: HashMap<_, f64> = page_rank(&g, 1.5, 10, 1e-6);
    }
}
