//! Closeness centrality: for each vertex, BFS to every reachable
//! vertex and sum the distances. `closeness(v) = reachable_count / sum`
//! when `v` reaches at least one other vertex; `0.0` by convention
//! otherwise (isolated vertex, or a directed graph where `v` has no
//! out-edges).

use std::collections::VecDeque;

use hashbrown::HashMap;

use crate::visit::{IntoNeighbors, IntoNodeIdentifiers, VisitMap, Visitable};

/// Closeness centrality of every vertex, computed via an unweighted BFS
/// from each one in turn.
pub fn closeness_centrality<G>(graph: G) -> HashMap<G::NodeId, f64>
where
    G: IntoNodeIdentifiers + IntoNeighbors + Visitable,
    G::NodeId: core::hash::Hash + Eq + Copy,
{
    let mut scores = HashMap::new();
    for source in graph.node_identifiers() {
        let mut distance: HashMap<G::NodeId, u32> = HashMap::new();
        let mut visited = graph.visit_map();
        visited.visit(source);
        distance.insert(source, 0);
        let mut queue = VecDeque::new();
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            let du = distance[&u];
            for v in graph.neighbors(u) {
                if visited.visit(v) {
                    distance.insert(v, du + 1);
                    queue.push_back(v);
                }
            }
        }

        let reachable_count = distance.len() - 1;
        let sum: u32 = distance.values().sum();
        let score = if sum == 0 { 0.0 } else { reachable_count as f64 / sum as f64 };
        scores.insert(source, score);
    }
    scores
}
