//! Bipartite check: two-color the graph via BFS, treated as
//! undirected; fail as soon as an edge joins two same-colored vertices.

use std::collections::VecDeque;

use hashbrown::HashMap;

use crate::visit::{IntoNeighbors, IntoNodeIdentifiers, VisitMap, Visitable};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// `true` if `graph`, treated as undirected, is bipartite.
pub fn is_bipartite<G>(graph: G) -> bool
where
    G: IntoNodeIdentifiers + IntoNeighbors + Visitable,
    G::NodeId: core::hash::Hash + Eq,
{
    bipartite_partition(graph).is_some()
}

/// The two-coloring of `graph` if it is bipartite, `None` otherwise.
/// Treated as undirected; disconnected graphs are colored component by
/// component.
pub fn bipartite_partition<G>(graph: G) -> Option<HashMap<G::NodeId, Side>>
where
    G: IntoNodeIdentifiers + IntoNeighbors + Visitable,
    G::NodeId: core::hash::Hash + Eq,
{
    let mut color: HashMap<G::NodeId, Side> = HashMap::new();
    let mut seen = graph.visit_map();

    for root in graph.node_identifiers() {
        if seen.is_visited(&root) {
            continue;
        }
        seen.visit(root);
        color.insert(root, Side::Left);
        let mut queue = VecDeque::new();
        queue.push_back(root);

        while let Some(node) = queue.pop_front() {
            let node_color = color[&node];
            for next in graph.neighbors(node) {
                match color.get(&next) {
                    Some(&next_color) => {
                        if next_color == node_color {
                            return None;
                        }
                    }
                    None => {
                        color.insert(next, node_color.flip());
                        seen.visit(next);
                        queue.push_back(next);
                    }
                }
            }
        }
    }

    Some(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UnGraph;

    #[test]
    fn even_cycle_is_bipartite() {
        let mut g: UnGraph<(), ()> = UnGraph::new_undirected();
        let nodes: Vec<_> = (0..4).map(|_| g.add_node(())).collect();
        g.add_edge(nodes[0], nodes[1], ()).unwrap();
        g.add_edge(nodes[1], nodes[2], ()).unwrap();
        g.add_edge(nodes[2], nodes[3], ()).unwrap();
        g.add_edge(nodes[3], nodes[0], ()).unwrap();

        assert!(is_bipartite(&g));
        let partition = bipartite_partition(&g).unwrap();
        assert_ne!(partition[&nodes[0]], partition[&nodes[1]]);
    }

    #[test]
    fn odd_cycle_is_not_bipartite() {
        let mut g: UnGraph<(), ()> = UnGraph::new_undirected();
        let nodes: Vec<_> = (0..3).map(|_| g.add_node(())).collect();
        g.add_edge(nodes[0], nodes[1], ()).unwrap();
        g.add_edge(nodes[1], nodes[2], ()).unwrap();
        g.add_edge(nodes[2], nodes[0], ()).unwrap();

        assert!(!is_bipartite(&g));
    }
}
