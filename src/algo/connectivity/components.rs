//! Connected components, treating the graph as undirected, by two
//! routes: union-find over every edge, and a DFS sweep that assigns a
//! component id per unvisited root.

use hashbrown::HashMap;

use crate::unionfind::UnionFind;
use crate::visit::{
    EdgeRef, IntoEdgeReferences, IntoNeighbors, IntoNodeIdentifiers, NodeIndexable, Visitable,
};

/// Group every vertex by connected component, via union-find over the
/// edge list. `O(E * alpha(V) + V)`.
pub fn connected_components_union_find<G>(graph: G) -> Vec<Vec<G::NodeId>>
where
    G: NodeIndexable + IntoNodeIdentifiers + IntoEdgeReferences,
{
    let mut sets = UnionFind::new(graph.node_bound());
    for edge in graph.edge_references() {
        sets.union(graph.to_index(edge.source()), graph.to_index(edge.target()));
    }

    let mut groups: HashMap<usize, Vec<G::NodeId>> = HashMap::new();
    for node in graph.node_identifiers() {
        let root = sets.find(graph.to_index(node));
        groups.entry(root).or_default().push(node);
    }
    groups.into_values().collect()
}

/// Group every vertex by connected component via a DFS from each
/// unvisited vertex. `O(V + E)`.
pub fn connected_components_dfs<G>(graph: G) -> Vec<Vec<G::NodeId>>
where
    G: IntoNodeIdentifiers + IntoNeighbors + Visitable,
{
    let mut visited = graph.visit_map();
    let mut components = Vec::new();

    for root in graph.node_identifiers() {
        if visited.is_visited(&root) {
            continue;
        }
        let mut component = Vec::new();
        let mut stack = vec![root];
        visited.visit(root);
        while let Some(node) = stack.pop() {
            component.push(node);
            for next in graph.neighbors(node) {
                if visited.visit(next) {
                    stack.push(next);
                }
            }
        }
        components.push(component);
    }

    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UnGraph;

    #[test]
    fn two_triangles_are_two_components() {
        let mut g: UnGraph<(), ()> = UnGraph::new_undirected();
        let nodes: Vec<_> = (0..6).map(|_| g.add_node(())).collect();
        g.add_edge(nodes[0], nodes[1], ()).unwrap();
        g.add_edge(nodes[1], nodes[2], ()).unwrap();
        g.add_edge(nodes[2], nodes[0], ()).unwrap();
        g.add_edge(nodes[3], nodes[4], ()).unwrap();
        g.add_edge(nodes[4], nodes[5], ()).unwrap();
        g.add_edge(nodes[5], nodes[3], ()).unwrap();

        let uf = connected_components_union_find(&g);
        assert_eq!(uf.len(), 2);
        let dfs = connected_components_dfs(&g);
        assert_eq!(dfs.len(), 2);
    }

    #[test]
    fn isolated_vertex_is_its_own_component() {
        let mut g: UnGraph<(), ()> = UnGraph::new_undirected();
        g.add_node(());
        g.add_node(());
        assert_eq!(connected_components_union_find(&g).len(), 2);
        assert_eq!(connected_components_dfs(&g).len(), 2);
    }
}
