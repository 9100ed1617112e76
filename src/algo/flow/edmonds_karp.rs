//! Edmonds-Karp: Ford-Fulkerson's augmenting-path search specialized
//! to BFS, guaranteeing the shortest (fewest-edges) augmenting path each
//! round. `O(V*E^2)`.

use core::hash::Hash;
use std::collections::VecDeque;

use hashbrown::HashMap;

use super::residual::{MaxFlow, Residual};
use crate::data::BoundedMeasure;
use crate::visit::{IntoEdges, IntoNodeIdentifiers};

fn find_augmenting_path_bfs<N, K>(
    residual: &Residual<N, K>,
    source: N,
    sink: N,
) -> Option<HashMap<N, N>>
where
    N: Copy + Eq + Hash,
    K: BoundedMeasure + Copy,
{
    let mut predecessor: HashMap<N, N> = HashMap::new();
    let mut visited: hashbrown::HashSet<N> = hashbrown::HashSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(source);
    visited.insert(source);

    while let Some(u) = queue.pop_front() {
        if u == sink {
            return Some(predecessor);
        }
        for v in residual.neighbors(u) {
            if !visited.contains(&v) && residual.capacity(u, v) > K::zero() {
                visited.insert(v);
                predecessor.insert(v, u);
                queue.push_back(v);
            }
        }
    }
    None
}

/// Maximum flow from `source` to `sink` via Edmonds-Karp. Same shape as
/// [`super::ford_fulkerson`] but the augmenting path is the shortest
/// (by edge count) available one each round, which bounds the number of
/// augmentations polynomially regardless of capacity magnitudes.
pub fn edmonds_karp<G, F, K>(
    graph: G,
    source: G::NodeId,
    sink: G::NodeId,
    edge_cost: F,
) -> MaxFlow<G::NodeId, K>
where
    G: IntoNodeIdentifiers + IntoEdges,
    G::NodeId: Copy + Eq + Hash,
    F: FnMut(G::EdgeRef) -> K,
    K: BoundedMeasure + Copy,
{
    let mut residual = Residual::build(graph, edge_cost);
    let mut max_flow = K::zero();

    while let Some(predecessor) = find_augmenting_path_bfs(&residual, source, sink) {
        let mut bottleneck = K::max();
        let mut v = sink;
        while v != source {
            let u = predecessor[&v];
            let c = residual.capacity(u, v);
            if c < bottleneck {
                bottleneck = c;
            }
            v = u;
        }

        let mut v = sink;
        while v != source {
            let u = predecessor[&v];
            residual.push_flow(u, v, bottleneck);
            v = u;
        }
        max_flow = max_flow + bottleneck;
    }

    MaxFlow {
        value: max_flow,
        residual,
    }
}
