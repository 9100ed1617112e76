//! Min-cut extraction: BFS from `source` over the terminal
//! residual graph of a completed max-flow run. Reachable vertices are the
//! source side; everything else is the sink side; the cut edges are the
//! original edges crossing from one side to the other. By max-flow/
//! min-cut duality the sum of their capacities equals the flow value.

use core::hash::Hash;
use std::collections::VecDeque;

use hashbrown::HashSet;

use super::residual::{MaxFlow, Residual};
use crate::data::BoundedMeasure;
use crate::visit::{EdgeRef, IntoEdgeReferences};

/// The two sides of a minimum cut, and the original edges crossing from
/// `source_side` to `sink_side`.
#[derive(Clone, Debug)]
pub struct MinCut<N, ER> {
    pub source_side: HashSet<N>,
    pub sink_side: HashSet<N>,
    pub cut_edges: Vec<ER>,
}

fn reachable_from_source<N, K>(residual: &Residual<N, K>, source: N) -> HashSet<N>
where
    N: Copy + Eq + Hash,
    K: BoundedMeasure + Copy,
{
    let mut seen = HashSet::new();
    seen.insert(source);
    let mut queue = VecDeque::new();
    queue.push_back(source);
    while let Some(u) = queue.pop_front() {
        for v in residual.neighbors(u) {
            if !seen.contains(&v) && residual.capacity(u, v) > K::zero() {
                seen.insert(v);
                queue.push_back(v);
            }
        }
    }
    seen
}

/// Extract the minimum cut from a completed [`MaxFlow`] run: every
/// vertex still reachable from `source` in the residual graph is the
/// source side, everything else the sink side, and the cut is every
/// original edge crossing from the former into the latter.
pub fn min_cut<G, K>(graph: G, flow: &MaxFlow<G::NodeId, K>, source: G::NodeId) -> MinCut<G::NodeId, G::EdgeRef>
where
    G: IntoEdgeReferences,
    G::NodeId: Copy + Eq + Hash,
    K: BoundedMeasure + Copy,
{
    let source_side = reachable_from_source(&flow.residual, source);
    let mut sink_side = HashSet::new();
    let mut cut_edges = Vec::new();

    for edge in graph.edge_references() {
        let (u, v) = (edge.source(), edge.target());
        if source_side.contains(&u) && !source_side.contains(&v) {
            cut_edges.push(edge);
        }
        if !source_side.contains(&u) {
            sink_side.insert(u);
        }
        if !source_side.contains(&v) {
            sink_side.insert(v);
        }
    }

    MinCut {
        source_side,
        sink_side,
        cut_edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::flow::edmonds_karp;
    use crate::graph::DiGraph;
    use crate::visit::EdgeRef as _;

    #[test]
    fn cut_capacity_equals_flow_value() {
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

        let flow = edmonds_karp(&g, s, t, |e| *e.weight());
        let cut = min_cut(&g, &flow, s);
        let cut_capacity: i64 = cut.cut_edges.iter().map(|e| *e.weight()).sum();
        assert_eq!(cut_capacity, flow.value);
        assert!(cut.source_side.contains(&s));
        assert!(!cut.source_side.contains(&t));
    }
}
