//! Strongly-connected components, by two routes: Tarjan's
//! single-DFS algorithm with an explicit low-link stack, and Kosaraju's
//! two-pass algorithm over the graph and its transpose. Both are written
//! iteratively (an explicit call stack standing in for recursion), the
//! same style this crate's [`crate::unionfind`] favors over a recursive
//! `find`.

use crate::visit::{
    IntoNeighbors, IntoNeighborsDirected, IntoNodeIdentifiers, NodeIndexable, VisitMap, Visitable,
};
use crate::Direction::{Incoming, Outgoing};

enum Action<N> {
    Visit(N, N),
    Finish(N),
}

/// Strongly connected components via Tarjan's algorithm. Each inner
/// `Vec` is one SCC; components are emitted in reverse topological order
/// (a component's predecessors in the condensation come later in the
/// output). `O(V + E)`.
pub fn tarjan_scc<G>(graph: G) -> Vec<Vec<G::NodeId>>
where
    G: IntoNodeIdentifiers + IntoNeighbors + NodeIndexable,
{
    let n = graph.node_bound();
    let mut disc: Vec<Option<usize>> = vec![None; n];
    let mut low: Vec<usize> = vec![0; n];
    let mut on_stack: Vec<bool> = vec![false; n];
    let mut tstack: Vec<G::NodeId> = Vec::new();
    let mut counter = 0usize;
    let mut sccs = Vec::new();

    for start in graph.node_identifiers() {
        let start_index = graph.to_index(start);
        if disc[start_index].is_some() {
            continue;
        }

        disc[start_index] = Some(counter);
        low[start_index] = counter;
        counter += 1;
        tstack.push(start);
        on_stack[start_index] = true;

        let mut call_stack: Vec<(G::NodeId, G::Neighbors)> =
            vec![(start, graph.neighbors(start))];

        loop {
            let action = match call_stack.last_mut() {
                Some((node, iter)) => match iter.next() {
                    Some(next) => Action::Visit(*node, next),
                    None => Action::Finish(*node),
                },
                None => break,
            };

            match action {
                Action::Visit(node, next) => {
                    let node_index = graph.to_index(node);
                    let next_index = graph.to_index(next);
                    if disc[next_index].is_none() {
                        disc[next_index] = Some(counter);
                        low[next_index] = counter;
                        counter += 1;
                        tstack.push(next);
                        on_stack[next_index] = true;
                        call_stack.push((next, graph.neighbors(next)));
                    } else if on_stack[next_index] {
                        low[node_index] = low[node_index].min(disc[next_index].unwrap());
                    }
                }
                Action::Finish(node) => {
                    let node_index = graph.to_index(node);
                    call_stack.pop();
                    if let Some((parent, _)) = call_stack.last() {
                        let parent_index = graph.to_index(*parent);
                        low[parent_index] = low[parent_index].min(low[node_index]);
                    }
                    if low[node_index] == disc[node_index].unwrap() {
                        let mut component = Vec::new();
                        loop {
                            let w = tstack.pop().unwrap();
                            let w_index = graph.to_index(w);
                            on_stack[w_index] = false;
                            component.push(w);
                            if w_index == node_index {
                                break;
                            }
                        }
                        sccs.push(component);
                    }
                }
            }
        }
    }

    sccs
}

/// Strongly connected components via Kosaraju's algorithm: a DFS over
/// `graph` recording finish order, then a DFS over the transpose
/// (walking in-edges) in reverse finish order, one tree per SCC. `O(V +
/// E)`. Requires [`IntoNeighborsDirected`] to walk in-edges without
/// materializing a transposed graph.
pub fn kosaraju_scc<G>(graph: G) -> Vec<Vec<G::NodeId>>
where
    G: IntoNodeIdentifiers + IntoNeighborsDirected + Visitable,
{
    let mut discovered = graph.visit_map();
    let mut finish_order = Vec::new();

    for root in graph.node_identifiers() {
        if discovered.is_visited(&root) {
            continue;
        }
        let mut post_stack: Vec<G::NodeId> = Vec::new();
        // Iterative post-order: push a node twice — once to expand its
        // children, once (after them) to record its finish time.
        let mut pending = vec![(root, false)];
        while let Some((node, expanded)) = pending.pop() {
            if expanded {
                post_stack.push(node);
                continue;
            }
            pending.push((node, true));
            for next in graph.neighbors_directed(node, Outgoing) {
                if discovered.visit(next) {
                    pending.push((next, false));
                }
            }
        }
        finish_order.extend(post_stack);
    }

    finish_order.reverse();

    let mut visited = graph.visit_map();
    let mut sccs = Vec::new();
    for root in finish_order {
        if visited.is_visited(&root) {
            continue;
        }
        let mut component = Vec::new();
        let mut stack = vec![root];
        visited.visit(root);
        while let Some(node) = stack.pop() {
            component.push(node);
            for next in graph.neighbors_directed(node, Incoming) {
                if visited.visit(next) {
                    stack.push(next);
                }
            }
        }
        sccs.push(component);
    }

    sccs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;

    #[test]
    fn tarjan_finds_cycle_as_one_scc() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        let d = g.add_node(());
        g.add_edge(a, b, ()).unwrap();
        g.add_edge(b, c, ()).unwrap();
        g.add_edge(c, a, ()).unwrap();
        g.add_edge(c, d, ()).unwrap();

        let sccs = tarjan_scc(&g);
        assert_eq!(sccs.len(), 2);
        let sizes: Vec<usize> = {
            let mut s: Vec<usize> = sccs.iter().map(|c| c.len()).collect();
            s.sort_unstable();
            s
        };
        assert_eq!(sizes, vec![1, 3]);
    }

    #[test]
    fn kosaraju_agrees_with_tarjan_on_component_count() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        g.add_edge(a, b, ()).unwrap();
        g.add_edge(b, c, ()).unwrap();
        g.add_edge(c, a, ()).unwrap();

        assert_eq!(tarjan_scc(&g).len(), kosaraju_scc(&g).len());
        assert_eq!(kosaraju_scc(&g).len(), 1);
    }

    #[test]
    fn dag_has_one_scc_per_vertex() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        g.add_edge(a, b, ()).unwrap();
        g.add_edge(b, c, ()).unwrap();

        assert_eq!(tarjan_scc(&g).len(), 3);
        assert_eq!(kosaraju_scc(&g).len(), 3);
    }
}
