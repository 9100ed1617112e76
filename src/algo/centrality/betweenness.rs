//! Betweenness centrality via Brandes' algorithm: for each source,
//! a BFS computes shortest-path counts sigma and predecessors, then the
//! dependency accumulation pass walks vertices in reverse BFS-finish
//! order, each one pushing its accumulated dependency back onto its
//! predecessors weighted by their share of sigma. `O(V*E)`.

use std::collections::VecDeque;

use hashbrown::HashMap;

use crate::visit::{IntoNeighbors, IntoNodeIdentifiers, VisitMap, Visitable};

/// Betweenness centrality of every vertex. Normalized for directed graphs
/// by `1 / ((V-1)(V-2))`; left unnormalized (the raw dependency sum) when
/// `V <= 2`, where that denominator would be zero or negative.
pub fn betweenness_centrality<G>(graph: G, directed: bool) -> HashMap<G::NodeId, f64>
where
    G: IntoNodeIdentifiers + IntoNeighbors + Visitable,
    G::NodeId: core::hash::Hash + Eq + Copy,
{
    let nodes: Vec<G::NodeId> = graph.node_identifiers().collect();
    let n = nodes.len();
    let mut betweenness: HashMap<G::NodeId, f64> = nodes.iter().map(|&v| (v, 0.0)).collect();

    for &s in &nodes {
        let mut sigma: HashMap<G::NodeId, f64> = HashMap::new();
        let mut distance: HashMap<G::NodeId, i64> = HashMap::new();
        let mut predecessors: HashMap<G::NodeId, Vec<G::NodeId>> = HashMap::new();
        let mut order: Vec<G::NodeId> = Vec::new();
        let mut visited = graph.visit_map();

        sigma.insert(s, 1.0);
        distance.insert(s, 0);
        visited.visit(s);
        let mut queue = VecDeque::new();
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            order.push(v);
            let dv = distance[&v];
            for w in graph.neighbors(v) {
                if !visited.is_visited(&w) {
                    let first_visit = distance.get(&w).is_none();
                    if first_visit {
                        visited.visit(w);
                        distance.insert(w, dv + 1);
                        queue.push_back(w);
                    }
                }
                if distance.get(&w) == Some(&(dv + 1)) {
                    *sigma.entry(w).or_insert(0.0) += sigma[&v];
                    predecessors.entry(w).or_default().push(v);
                }
            }
        }

        let mut delta: HashMap<G::NodeId, f64> = nodes.iter().map(|&v| (v, 0.0)).collect();
        for &w in order.iter().rev() {
            if let Some(preds) = predecessors.get(&w) {
                for &v in preds {
                    let share = sigma[&v] / sigma[&w] * (1.0 + delta[&w]);
                    *delta.get_mut(&v).unwrap() += share;
                }
            }
            if w != s {
                *betweenness.get_mut(&w).unwrap() += delta[&w];
            }
        }
    }

    if !directed {
        for value in betweenness.values_mut() {
            *value /= 2.0;
        }
    }

    if n > 2 {
        let norm = 1.0 / ((n - 1) as f64 * (n - 2) as f64);
        for value in betweenness.values_mut() {
            *value *= norm;
        }
    }

    betweenness
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UnGraph;

    #[test]
    fn path_graph_middle_vertex_has_highest_betweenness() {
        let mut g: UnGraph<(), ()> = UnGraph::new_undirected();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        g.add_edge(a, b, ()).unwrap();
        g.add_edge(b, c, ()).unwrap();

        let scores = betweenness_centrality(&g, false);
        assert!(scores[&b] > scores[&a]);
        assert!(scores[&b] > scores[&c]);
        assert_eq!(scores[&a], 0.0);
    }

    #[test]
    fn triangle_has_zero_betweenness_everywhere() {
        let mut g: UnGraph<(), ()> = UnGraph::new_undirected();
        let nodes: Vec<_> = (0..3).map(|_| g.add_node(())).collect();
        g.add_edge(nodes[0], nodes[1], ()).unwrap();
        g.add_edge(nodes[1], nodes[2], ()).unwrap();
        g.add_edge(nodes[2], nodes[0], ()).unwrap();

        let scores = betweenness_centrality(&g, false);
        for &v in &nodes {
            assert_eq!(scores[&v], 0.0);
        }
    }
}
