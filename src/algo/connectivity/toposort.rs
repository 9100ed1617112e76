//! Topological sort, by two routes: Kahn's in-degree-queue
//! algorithm and a DFS-finish-order reversal. Both report
//! [`CycleDetected`] with the vertices already ordered and those left
//! over when the graph isn't a DAG.

use std::collections::VecDeque;

use hashbrown::HashMap;

use crate::algo::CycleDetected;
use crate::visit::{IntoNeighbors, IntoNeighborsDirected, IntoNodeIdentifiers, NodeIndexable, Visitable};
use crate::Direction::{Incoming, Outgoing};

/// Topological order via Kahn's algorithm: repeatedly remove a
/// zero-in-degree vertex, decrementing its out-neighbors' in-degrees.
/// `O(V + E)`.
pub fn toposort_kahn<G>(graph: G) -> Result<Vec<G::NodeId>, CycleDetected<G::NodeId>>
where
    G: IntoNodeIdentifiers + IntoNeighborsDirected + NodeIndexable,
{
    let n = graph.node_bound();
    let mut in_degree = vec![0usize; n];
    for node in graph.node_identifiers() {
        for _ in graph.neighbors_directed(node, Incoming) {
            in_degree[graph.to_index(node)] += 1;
        }
    }

    let mut queue: VecDeque<G::NodeId> = graph
        .node_identifiers()
        .filter(|&n| in_degree[graph.to_index(n)] == 0)
        .collect();

    let mut order = Vec::with_capacity(n);
    while let Some(node) = queue.pop_front() {
        order.push(node);
        for next in graph.neighbors_directed(node, Outgoing) {
            let idx = graph.to_index(next);
            in_degree[idx] -= 1;
            if in_degree[idx] == 0 {
                queue.push_back(next);
            }
        }
    }

    if order.len() == n {
        Ok(order)
    } else {
        let ordered: HashMap<usize, ()> = order.iter().map(|&n| (graph.to_index(n), ())).collect();
        let remaining = graph
            .node_identifiers()
            .filter(|&n| !ordered.contains_key(&graph.to_index(n)))
            .collect();
        Err(CycleDetected { ordered: order, remaining })
    }
}

/// Topological order via DFS: run a DFS over every unvisited vertex,
/// emit each vertex on finish, reverse the emission sequence. A back
/// edge (an edge into an ancestor still on the current DFS path) proves
/// a cycle.
pub fn toposort_dfs<G>(graph: G) -> Result<Vec<G::NodeId>, CycleDetected<G::NodeId>>
where
    G: IntoNodeIdentifiers + IntoNeighbors + Visitable,
{
    let mut discovered = graph.visit_map();
    let mut finished = graph.visit_map();
    let mut order = Vec::new();

    for root in graph.node_identifiers() {
        if discovered.is_visited(&root) {
            continue;
        }
        let mut stack: Vec<(G::NodeId, bool)> = vec![(root, false)];
        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                finished.visit(node);
                order.push(node);
                continue;
            }
            if discovered.is_visited(&node) {
                continue;
            }
            discovered.visit(node);
            stack.push((node, true));
            for next in graph.neighbors(node) {
                if finished.is_visited(&next) {
                    continue;
                }
                if discovered.is_visited(&next) && !finished.is_visited(&next) {
                    // `next` is an ancestor still being explored: a back edge.
                    return Err(CycleDetected {
                        ordered: Vec::new(),
                        remaining: graph.node_identifiers().collect(),
                    });
                }
                stack.push((next, false));
            }
        }
    }

    order.reverse();
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;

    #[test]
    fn kahn_orders_a_dag() {
        let mut g: DiGraph<&str, ()> = DiGraph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let c = g.add_node("c");
        g.add_edge(a, b, ()).unwrap();
        g.add_edge(b, c, ()).unwrap();

        let order = toposort_kahn(&g).unwrap();
        let pos = |n| order.iter().position(|&x| x == n).unwrap();
        assert!(pos(a) < pos(b));
        assert!(pos(b) < pos(c));
    }

    #[test]
    fn kahn_detects_cycle() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        g.add_edge(a, b, ()).unwrap();
        g.add_edge(b, a, ()).unwrap();

        assert!(toposort_kahn(&g).is_err());
    }

    #[test]
    fn dfs_orders_a_dag() {
        let mut g: DiGraph<&str, ()> = DiGraph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let c = g.add_node("c");
        g.add_edge(a, b, ()).unwrap();
        g.add_edge(a, c, ()).unwrap();
        g.add_edge(b, c, ()).unwrap();

        let order = toposort_dfs(&g).unwrap();
        let pos = |n| order.iter().position(|&x| x == n).unwrap();
        assert!(pos(a) < pos(b));
        assert!(pos(b) < pos(c));
    }

    #[test]
    fn dfs_detects_cycle() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        g.add_edge(a, b, ()).unwrap();
        g.add_edge(b, c, ()).unwrap();
        g.add_edge(c, a, ()).unwrap();

        assert!(toposort_dfs(&g).is_err());
    }
}
