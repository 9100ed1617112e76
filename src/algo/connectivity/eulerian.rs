//! Eulerian path/cycle via Hierholzer's algorithm.
//!
//! A cycle exists iff the graph restricted to non-isolated vertices is
//! connected and every vertex has equal in/out degree (directed) or even
//! degree (undirected). A path exists iff exactly two vertices are
//! imbalanced — directed: one with `out - in == 1` (start), one with
//! `in - out == 1` (end); undirected: exactly two vertices of odd
//! degree.
//!
//! Hierholzer's walk is written iteratively over an explicit node/edge
//! stack: extend the current walk through any unused incident edge;
//! when stuck, pop the dead end onto the finished circuit. Reversing the
//! finished order gives the Euler tour — the same splice-on-backtrack
//! idea the recursive formulation uses, without recursion.

use hashbrown::HashSet;

use super::components::connected_components_dfs;
use super::scc::tarjan_scc;
use crate::visit::{
    EdgeRef, IntoEdges, IntoEdgesDirected, IntoNeighbors, IntoNodeIdentifiers, NodeIndexable,
    Visitable,
};
use crate::Direction::Incoming;

fn non_isolated<G>(graph: G) -> HashSet<G::NodeId>
where
    G: IntoNodeIdentifiers + IntoEdges,
    G::NodeId: core::hash::Hash + Eq,
{
    graph
        .node_identifiers()
        .filter(|&n| graph.edges(n).next().is_some())
        .collect()
}

fn hierholzer<G>(graph: G, start: G::NodeId) -> Vec<G::EdgeRef>
where
    G: IntoEdges,
    G::NodeId: core::hash::Hash + Eq + Copy,
    G::EdgeId: core::hash::Hash + Eq,
{
    let mut used: HashSet<G::EdgeId> = HashSet::new();
    let mut node_stack = vec![start];
    let mut edge_stack: Vec<G::EdgeRef> = Vec::new();
    let mut circuit = Vec::new();

    while let Some(&node) = node_stack.last() {
        let next_edge = graph.edges(node).find(|e| !used.contains(&e.id()));
        match next_edge {
            Some(edge) => {
                used.insert(edge.id());
                node_stack.push(edge.target());
                edge_stack.push(edge);
            }
            None => {
                node_stack.pop();
                if let Some(edge) = edge_stack.pop() {
                    circuit.push(edge);
                }
            }
        }
    }

    circuit.reverse();
    circuit
}

/// An Eulerian circuit of `graph`, or `None` if one doesn't exist.
pub fn eulerian_cycle<G>(graph: G, directed: bool) -> Option<Vec<G::EdgeRef>>
where
    G: IntoNodeIdentifiers + IntoEdges + IntoEdgesDirected + IntoNeighbors + NodeIndexable + Visitable,
    G::NodeId: core::hash::Hash + Eq + Copy,
    G::EdgeId: core::hash::Hash + Eq,
{
    let active = non_isolated(graph);
    if active.is_empty() {
        return Some(Vec::new());
    }

    for &v in &active {
        let out = graph.edges(v).count();
        if directed {
            let inn = graph.edges_directed(v, Incoming).count();
            if out != inn {
                return None;
            }
        } else if out % 2 != 0 {
            return None;
        }
    }

    if !restricted_is_connected(graph, &active, directed) {
        return None;
    }

    let start = *active.iter().next().unwrap();
    let circuit = hierholzer(graph, start);
    let total_edges: usize = active.iter().map(|&v| graph.edges(v).count()).sum::<usize>()
        / if directed { 1 } else { 2 };
    if circuit.len() == total_edges {
        Some(circuit)
    } else {
        None
    }
}

/// An Eulerian path of `graph` (a walk using every edge exactly once,
/// not necessarily closed), or `None` if one doesn't exist.
pub fn eulerian_path<G>(graph: G, directed: bool) -> Option<Vec<G::EdgeRef>>
where
    G: IntoNodeIdentifiers + IntoEdges + IntoEdgesDirected + IntoNeighbors + NodeIndexable + Visitable,
    G::NodeId: core::hash::Hash + Eq + Copy,
    G::EdgeId: core::hash::Hash + Eq,
{
    let active = non_isolated(graph);
    if active.is_empty() {
        return Some(Vec::new());
    }

    let mut starts = Vec::new();
    let mut ends = Vec::new();
    for &v in &active {
        let out = graph.edges(v).count();
        if directed {
            let inn = graph.edges_directed(v, Incoming).count();
            match out as i64 - inn as i64 {
                0 => {}
                1 => starts.push(v),
                -1 => ends.push(v),
                _ => return None,
            }
        } else if out % 2 != 0 {
            starts.push(v);
        }
    }

    let start = if directed {
        match (starts.len(), ends.len()) {
            (0, 0) => *active.iter().next().unwrap(),
            (1, 1) => starts[0],
            _ => return None,
        }
    } else {
        match starts.len() {
            0 => *active.iter().next().unwrap(),
            2 => starts[0],
            _ => return None,
        }
    };

    if !restricted_is_connected(graph, &active, directed) {
        return None;
    }

    let path = hierholzer(graph, start);
    let total_edges: usize = active.iter().map(|&v| graph.edges(v).count()).sum::<usize>()
        / if directed { 1 } else { 2 };
    if path.len() == total_edges {
        Some(path)
    } else {
        None
    }
}

/// Whether `active` forms a single component: strongly connected for a
/// directed graph, connected for an undirected one. A cheap underlying
/// check, not a full strong-connectivity proof for the directed path
/// case (sufficient together with the degree conditions above).
fn restricted_is_connected<G>(graph: G, active: &HashSet<G::NodeId>, directed: bool) -> bool
where
    G: IntoNodeIdentifiers + IntoNeighbors + NodeIndexable + Visitable,
    G::NodeId: core::hash::Hash + Eq + Copy,
{
    if directed {
        let sccs = tarjan_scc(graph);
        sccs.into_iter()
            .any(|component| active.iter().all(|v| component.contains(v)))
    } else {
        let components = connected_components_dfs(graph);
        components
            .into_iter()
            .any(|component| active.iter().all(|v| component.contains(v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DiGraph, UnGraph};

    #[test]
    fn square_undirected_has_eulerian_cycle() {
        let mut g: UnGraph<(), ()> = UnGraph::new_undirected();
        let nodes: Vec<_> = (0..4).map(|_| g.add_node(())).collect();
        g.add_edge(nodes[0], nodes[1], ()).unwrap();
        g.add_edge(nodes[1], nodes[2], ()).unwrap();
        g.add_edge(nodes[2], nodes[3], ()).unwrap();
        g.add_edge(nodes[3], nodes[0], ()).unwrap();

        let cycle = eulerian_cycle(&g, false).unwrap();
        assert_eq!(cycle.len(), 4);
    }

    #[test]
    fn path_graph_has_eulerian_path_not_cycle() {
        let mut g: UnGraph<(), ()> = UnGraph::new_undirected();
        let nodes: Vec<_> = (0..4).map(|_| g.add_node(())).collect();
        g.add_edge(nodes[0], nodes[1], ()).unwrap();
        g.add_edge(nodes[1], nodes[2], ()).unwrap();
        g.add_edge(nodes[2], nodes[3], ()).unwrap();

        assert!(eulerian_cycle(&g, false).is_none());
        let path = eulerian_path(&g, false).unwrap();
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn directed_cycle_has_eulerian_circuit() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        let nodes: Vec<_> = (0..3).map(|_| g.add_node(())).collect();
        g.add_edge(nodes[0], nodes[1], ()).unwrap();
        g.add_edge(nodes[1], nodes[2], ()).unwrap();
        g.add_edge(nodes[2], nodes[0], ()).unwrap();

        let cycle = eulerian_cycle(&g, true).unwrap();
        assert_eq!(cycle.len(), 3);
    }

    #[test]
    fn unbalanced_directed_graph_has_no_circuit() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        g.add_edge(a, b, ()).unwrap();
        g.add_edge(a, c, ()).unwrap();

        assert!(eulerian_cycle(&g, true).is_none());
    }
}
