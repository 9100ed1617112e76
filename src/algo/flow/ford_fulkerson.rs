//! Ford-Fulkerson: repeatedly find *any* source-to-sink path in
//! the residual graph by DFS, push its bottleneck capacity, and repeat
//! until no augmenting path remains.

use core::hash::Hash;

use hashbrown::HashMap;

use super::residual::{MaxFlow, Residual};
use crate::data::BoundedMeasure;
use crate::visit::{IntoEdges, IntoNodeIdentifiers};

/// DFS for any `source -> sink` path with positive residual capacity.
/// Returns the predecessor map of the path found, if any.
fn find_augmenting_path_dfs<N, K>(
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
    let mut stack = vec![source];
    visited.insert(source);

    while let Some(u) = stack.pop() {
        if u == sink {
            return Some(predecessor);
        }
        for v in residual.neighbors(u) {
            if !visited.contains(&v) && residual.capacity(u, v) > K::zero() {
                visited.insert(v);
                predecessor.insert(v, u);
                stack.push(v);
            }
        }
    }
    None
}

/// Maximum flow from `source` to `sink` via Ford-Fulkerson's DFS
/// augmenting-path strategy. `edge_cost` supplies each edge's capacity;
/// negative capacities are a precondition violation (not checked,
/// undefined result).
pub fn ford_fulkerson<G, F, K>(
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

    while let Some(predecessor) = find_augmenting_path_dfs(&residual, source, sink) {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;

    #[test]
    fn simple_network_from_spec() {
        // s->v1:10, s->v2:5, v1->t:8, v2->t:3, v1->v2:2 => max flow 11.
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

        let result = ford_fulkerson(&g, s, t, |e| *e.weight());
        assert_eq!(result.value, 11);
    }

    #[test]
    fn disconnected_sink_is_zero_flow() {
        let mut g: DiGraph<(), i64> = DiGraph::new();
        let s = g.add_node(());
        let t = g.add_node(());
        let result = ford_fulkerson(&g, s, t, |e| *e.weight());
        assert_eq!(result.value, 0);
    }
}
