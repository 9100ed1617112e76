//! Graph properties: the small yes/no predicates
//! built atop the connectivity family — cyclic, tree, connected,
//! bipartite, planar-by-Euler-formula, Eulerian, Hamiltonian. The latter
//! four are re-exported from [`crate::algo::connectivity`] directly;
//! this module supplies the remaining three thin wrappers.

use crate::unionfind::UnionFind;
use crate::visit::{
    Control, IntoEdgeReferences, IntoEdges, IntoNodeIdentifiers, NodeIndexable, Visitable,
};

pub use crate::algo::connectivity::{
    bipartite_partition, eulerian_cycle, eulerian_path, hamiltonian_cycle, hamiltonian_path,
    is_bipartite, is_planar_by_euler_formula,
};

/// `true` if `graph`, treated as undirected, contains a cycle: union
/// every edge's endpoints, and report a cycle as soon as an edge joins
/// two vertices already in the same set.
pub fn is_cyclic_undirected<G>(graph: G) -> bool
where
    G: NodeIndexable + IntoEdgeReferences,
{
    let mut sets = UnionFind::new(graph.node_bound());
    for edge in graph.edge_references() {
        use crate::visit::EdgeRef;
        let (a, b) = (edge.source(), edge.target());
        if !sets.union(graph.to_index(a), graph.to_index(b)) {
            return true;
        }
    }
    false
}

/// `true` if `graph` contains a directed cycle (a back edge in any DFS
/// tree rooted at an unvisited vertex).
pub fn is_cyclic_directed<G>(graph: G) -> bool
where
    G: IntoNodeIdentifiers + IntoEdges + Visitable + NodeIndexable,
{
    use crate::visit::{depth_first_search, DfsEvent};

    depth_first_search(graph, graph.node_identifiers(), |event| match event {
        DfsEvent::BackEdge(_) => Control::Break,
        _ => Control::Continue,
    })
    .should_break()
}

/// `true` if `graph`, treated as undirected, is a tree: connected and
/// exactly `V - 1` edges (equivalently, connected and acyclic).
pub fn is_tree<G>(graph: G) -> bool
where
    G: IntoNodeIdentifiers + IntoEdgeReferences + NodeIndexable,
{
    let v = graph.node_identifiers().count();
    if v == 0 {
        return true;
    }
    let e = graph.edge_references().count();
    e == v - 1 && !is_cyclic_undirected(graph)
}

/// `true` if `graph`, treated as undirected, is connected (a single
/// component, or empty).
pub fn is_connected<G>(graph: G) -> bool
where
    G: NodeIndexable + IntoNodeIdentifiers + IntoEdgeReferences,
{
    let mut sets = UnionFind::new(graph.node_bound());
    for edge in graph.edge_references() {
        use crate::visit::EdgeRef;
        let (a, b) = (edge.source(), edge.target());
        sets.union(graph.to_index(a), graph.to_index(b));
    }
    let mut nodes = graph.node_identifiers();
    let Some(first) = nodes.next() else {
        return true;
    };
    let root = sets.find(graph.to_index(first));
    nodes.all(|n| sets.find(graph.to_index(n)) == root)
}
