//! Hamiltonian path/cycle search: backtracking DFS over a
//! visited-set, with candidate moves ordered by a Warnsdorff-like
//! heuristic (fewest remaining options first) so the greedy choice tends
//! to avoid dead ends, falling back to ordinary backtracking whenever it
//! doesn't. Worst case is exponential — this problem is NP-complete in
//! general; no polynomial guarantee is claimed.

use hashbrown::HashSet;

use crate::visit::{IntoNeighbors, IntoNodeIdentifiers, NodeCount};

/// A Hamiltonian path (visits every vertex exactly once), if one exists.
pub fn hamiltonian_path<G>(graph: G) -> Option<Vec<G::NodeId>>
where
    G: IntoNodeIdentifiers + IntoNeighbors + NodeCount,
    G::NodeId: core::hash::Hash + Eq + Copy,
{
    let n = graph.node_count();
    if n == 0 {
        return Some(Vec::new());
    }
    for start in graph.node_identifiers() {
        let mut path = vec![start];
        let mut visited = HashSet::new();
        visited.insert(start);
        if search(graph, &mut path, &mut visited, n, None) {
            return Some(path);
        }
    }
    None
}

/// A Hamiltonian cycle (a Hamiltonian path whose last vertex is adjacent
/// back to the first), if one exists.
pub fn hamiltonian_cycle<G>(graph: G) -> Option<Vec<G::NodeId>>
where
    G: IntoNodeIdentifiers + IntoNeighbors + NodeCount,
    G::NodeId: core::hash::Hash + Eq + Copy,
{
    let n = graph.node_count();
    if n == 0 {
        return Some(Vec::new());
    }
    for start in graph.node_identifiers() {
        let mut path = vec![start];
        let mut visited = HashSet::new();
        visited.insert(start);
        if search(graph, &mut path, &mut visited, n, Some(start)) {
            return Some(path);
        }
    }
    None
}

fn search<G>(
    graph: G,
    path: &mut Vec<G::NodeId>,
    visited: &mut HashSet<G::NodeId>,
    target_len: usize,
    close_at: Option<G::NodeId>,
) -> bool
where
    G: IntoNeighbors,
    G::NodeId: core::hash::Hash + Eq + Copy,
{
    if path.len() == target_len {
        return match close_at {
            Some(start) => graph.neighbors(*path.last().unwrap()).any(|n| n == start),
            None => true,
        };
    }

    let current = *path.last().unwrap();
    let mut candidates: Vec<G::NodeId> = graph
        .neighbors(current)
        .filter(|n| !visited.contains(n))
        .collect();
    candidates.sort_by_key(|&n| {
        graph
            .neighbors(n)
            .filter(|m| !visited.contains(m))
            .count()
    });

    for next in candidates {
        visited.insert(next);
        path.push(next);
        if search(graph, path, visited, target_len, close_at) {
            return true;
        }
        path.pop();
        visited.remove(&next);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UnGraph;

    #[test]
    fn complete_graph_has_hamiltonian_cycle() {
        let mut g: UnGraph<(), ()> = UnGraph::new_undirected();
        let nodes: Vec<_> = (0..5).map(|_| g.add_node(())).collect();
        for i in 0..5 {
            for j in (i + 1)..5 {
                g.add_edge(nodes[i], nodes[j], ()).unwrap();
            }
        }
        let cycle = hamiltonian_cycle(&g).unwrap();
        assert_eq!(cycle.len(), 5);
        let unique: HashSet<_> = cycle.iter().copied().collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn path_graph_has_hamiltonian_path_not_cycle() {
        let mut g: UnGraph<(), ()> = UnGraph::new_undirected();
        let nodes: Vec<_> = (0..4).map(|_| g.add_node(())).collect();
        g.add_edge(nodes[0], nodes[1], ()).unwrap();
        g.add_edge(nodes[1], nodes[2], ()).unwrap();
        g.add_edge(nodes[2], nodes[3], ()).unwrap();

        assert!(hamiltonian_path(&g).is_some());
        assert!(hamiltonian_cycle(&g).is_none());
    }

    #[test]
    fn disconnected_graph_has_no_hamiltonian_path() {
        let mut g: UnGraph<(), ()> = UnGraph::new_undirected();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        g.add_edge(a, b, ()).unwrap();
        let _ = c;
        assert!(hamiltonian_path(&g).is_none());
    }
}
