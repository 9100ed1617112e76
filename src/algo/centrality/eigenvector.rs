//! Eigenvector centrality: power iteration on the adjacency
//! operator, `x_{t+1} = A x_t`, normalized each round by the max entry so
//! the sequence doesn't blow up or decay to zero. Converges when the
//! largest change across entries drops below `tolerance`.

use hashbrown::HashMap;

use crate::data::UnitMeasure;
use crate::visit::{IntoNeighbors, IntoNodeIdentifiers};

/// Eigenvector centrality of every vertex, via up to `max_iter` rounds of
/// power iteration or until the max per-vertex change falls below
/// `tolerance`, whichever comes first.
pub fn eigenvector_centrality<G, K>(graph: G, max_iter: usize, tolerance: K) -> HashMap<G::NodeId, K>
where
    G: IntoNodeIdentifiers + IntoNeighbors,
    G::NodeId: core::hash::Hash + Eq + Copy,
    K: UnitMeasure + PartialOrd + Copy,
{
    let nodes: Vec<G::NodeId> = graph.node_identifiers().collect();
    if nodes.is_empty() {
        return HashMap::new();
    }
    let mut x: HashMap<G::NodeId, K> = nodes.iter().map(|&v| (v, K::one())).collect();

    for _ in 0..max_iter {
        let mut next: HashMap<G::NodeId, K> = nodes.iter().map(|&v| (v, K::zero())).collect();
        for &v in &nodes {
            for u in graph.neighbors(v) {
                *next.get_mut(&u).unwrap() = next[&u] + x[&v];
            }
        }

        let mut max_entry = K::zero();
        for &value in next.values() {
            if value > max_entry {
                max_entry = value;
            }
        }
        if max_entry == K::zero() {
            return next;
        }
        for value in next.values_mut() {
            *value = *value / max_entry;
        }

        let mut max_change = K::zero();
        for &v in &nodes {
            let delta = next[&v] - x[&v];
            let delta = if delta < K::zero() { K::zero() - delta } else { delta };
            if delta > max_change {
                max_change = delta;
            }
        }

        x = next;
        if max_change < tolerance {
            break;
        }
    }

    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UnGraph;

    #[test]
    fn star_graph_center_dominates() {
        let mut g: UnGraph<(), ()> = UnGraph::new_undirected();
        let center = g.add_node(());
        let leaves: Vec<_> = (0..4).map(|_| g.add_node(())).collect();
        for &leaf in &leaves {
            g.add_edge(center, leaf, ()).unwrap();
        }

        let scores: HashMap<_, f64> = eigenvector_centrality(&g, 100, 1e-9);
        for &leaf in &leaves {
            assert!(scores[&center] > scores[&leaf]);
        }
    }

    #[test]
    fn empty_graph_yields_no_scores() {
        let g: UnGraph<(), ()> = UnGraph::new_undirected();
        let scores: HashMap<_, f64> = eigenvector_centrality(&g, 10, 1e-6);
        assert!(scores.is_empty());
    }
}
