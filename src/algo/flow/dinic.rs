//! Dinic's algorithm: repeatedly build a level graph by BFS, then
//! push a blocking flow through it by DFS, until the sink is no longer
//! reachable in the level graph. `O(V^2*E)` in general, faster on
//! unit-capacity networks.

use core::hash::Hash;
use std::collections::VecDeque;

use hashbrown::HashMap;

use super::residual::{MaxFlow, Residual};
use crate::data::BoundedMeasure;
use crate::visit::{IntoEdges, IntoNodeIdentifiers};

/// BFS from `source` over arcs with positive residual capacity, each
/// node's level its BFS distance from `source`. `None` if `sink` isn't
/// reached — Dinic is done once that happens.
fn build_level_graph<N, K>(residual: &Residual<N, K>, source: N, sink: N) -> Option<HashMap<N, u32>>
where
    N: Copy + Eq + Hash,
    K: BoundedMeasure + Copy,
{
    let mut level: HashMap<N, u32> = HashMap::new();
    level.insert(source, 0);
    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        let lu = level[&u];
        for v in residual.neighbors(u) {
            if !level.contains_key(&v) && residual.capacity(u, v) > K::zero() {
                level.insert(v, lu + 1);
                queue.push_back(v);
            }
        }
    }

    if level.contains_key(&sink) {
        Some(level)
    } else {
        None
    }
}

/// DFS a blocking flow through the level graph: only advance along arcs
/// whose target is exactly one level deeper, so a path never backtracks
/// to an earlier level. `iter` tracks, per node, how many neighbors have
/// already been tried this round (classic "current-arc" optimization).
fn send_blocking_flow<N, K>(
    residual: &mut Residual<N, K>,
    level: &HashMap<N, u32>,
    iter: &mut HashMap<N, usize>,
    u: N,
    sink: N,
    pushed: K,
) -> K
where
    N: Copy + Eq + Hash,
    K: BoundedMeasure + Copy,
{
    if u == sink {
        return pushed;
    }
    let neighbors: Vec<N> = residual.neighbors(u).collect();
    let start = *iter.get(&u).unwrap_or(&0);
    for i in start..neighbors.len() {
        let v = neighbors[i];
        let cap = residual.capacity(u, v);
        if cap > K::zero() && level.get(&v) == Some(&(level[&u] + 1)) {
            let limit = if pushed < cap { pushed } else { cap };
            let sent = send_blocking_flow(residual, level, iter, v, sink, limit);
            if sent > K::zero() {
                residual.push_flow(u, v, sent);
                iter.insert(u, i);
                return sent;
            }
        }
        iter.insert(u, i + 1);
    }
    K::zero()
}

/// Maximum flow from `source` to `sink` via Dinic's algorithm.
pub fn dinic<G, F, K>(graph: G, source: G::NodeId, sink: G::NodeId, edge_cost: F) -> MaxFlow<G::NodeId, K>
where
    G: IntoNodeIdentifiers + IntoEdges,
    G::NodeId: Copy + Eq + Hash,
    F: FnMut(G::EdgeRef) -> K,
    K: BoundedMeasure + Copy,
{
    let mut residual = Residual::build(graph, edge_cost);
    let mut max_flow = K::zero();

    while let Some(level) = build_level_graph(&residual, source, sink) {
        let mut iter: HashMap<G::NodeId, usize> = HashMap::new();
        loop {
            let sent = send_blocking_flow(&mut residual, &level, &mut iter, source, sink, K::max());
            if sent == K::zero() {
                break;
            }
            max_flow = max_flow + sent;
        }
    }

    MaxFlow {
        value: max_flow,
        residual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;

    #[test]
    fn agrees_with_edmonds_karp_on_spec_network() {
        let mut g: DiGraph<&str, i64> = DiGraph::new();
        let s = g.add_node("s");
        let v1 = g.add_node("v1");
        let v2 = g.add_node("v2");
        let t = g.add_node("t");
        g.add_edge(s, v1, 10).unwrap();
        g.add_edge(s, v2, 5).unwrap();
        g.add_edge(v1, t, 8).unwrap();
        g.add_edge(v2, t, 3).unwrap();
        g.add_edge(v1, v2, 2).unwrap();

        let result = dinic(&g, s, t, |e| *e.weight());
        assert_eq!(result.value, 11);
    }

    #[test]
    fn unit_capacity_bipartite_style_network() {
        let mut g: DiGraph<(), i64> = DiGraph::new();
        let s = g.add_node(());
        let a = g.add_node(());
        let b = g.add_node(());
        let t = g.add_node(());
        for (u, v) in [(s, a), (s, b), (a, t), (b, t)] {
            g.add_edge(u, v, 1).unwrap();
        }
        let result = dinic(&g, s, t, |e| *e.weight());
        assert_eq!(result.value, 2);
    }
}
