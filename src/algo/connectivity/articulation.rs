//! Articulation points and bridges, via Tarjan's `disc`/`low`
//! single DFS, iterative. A vertex `v` is an articulation point if it is
//! the DFS root with at least two children, or a non-root with a child
//! `c` such that `low[c] >= disc[v]`. An edge `(v, c)` is a bridge iff
//! `low[c] > disc[v]`. The graph is treated as undirected.

use hashbrown::HashSet;

use crate::visit::{EdgeRef, IntoEdges, NodeIndexable};

enum Action<N, ER> {
    Visit(N, ER),
    Finish(N),
}

/// The set of articulation (cut) vertices of `graph`, treated as
/// undirected. `O(V + E)`.
pub fn articulation_points<G>(graph: G) -> HashSet<G::NodeId>
where
    G: IntoEdges + NodeIndexable,
    G::NodeId: core::hash::Hash + Eq,
{
    let (points, _) = compute(graph);
    points
}

/// The set of bridge edges of `graph`, treated as undirected. `O(V + E)`.
pub fn bridges<G>(graph: G) -> Vec<G::EdgeRef>
where
    G: IntoEdges + NodeIndexable,
    G::NodeId: core::hash::Hash + Eq,
{
    let (_, bridges) = compute(graph);
    bridges
}

fn compute<G>(graph: G) -> (HashSet<G::NodeId>, Vec<G::EdgeRef>)
where
    G: IntoEdges + NodeIndexable,
    G::NodeId: core::hash::Hash + Eq,
{
    let n = graph.node_bound();
    let mut disc: Vec<Option<usize>> = vec![None; n];
    let mut low: Vec<usize> = vec![0; n];
    let mut counter = 0usize;
    let mut articulation = HashSet::new();
    let mut bridge_edges = Vec::new();

    for start in 0..n {
        let start_id = graph.from_index(start);
        if disc[start].is_some() {
            continue;
        }

        disc[start] = Some(counter);
        low[start] = counter;
        counter += 1;
        let mut children_of_root = 0usize;
        // The edge used to reach each frame's node, to skip walking straight
        // back along it (a single parent edge is not itself "already visited"
        // in the graph-theoretic sense for multigraphs, but this algorithm
        // assumes simple-graph input).
        let mut call_stack: Vec<(G::NodeId, G::Edges)> = vec![(start_id, graph.edges(start_id))];

        loop {
            let action = match call_stack.last_mut() {
                Some((node, iter)) => match iter.next() {
                    Some(edge) => Action::Visit(*node, edge),
                    None => Action::Finish(*node),
                },
                None => break,
            };

            match action {
                Action::Visit(node, edge) => {
                    let node_index = graph.to_index(node);
                    let other = if edge.source() == node {
                        edge.target()
                    } else {
                        edge.source()
                    };
                    let other_index = graph.to_index(other);
                    if call_stack.len() >= 2 && other_index == parent_index(&call_stack, graph) {
                        // Skip the single edge back to the immediate parent
                        // frame (handled once, not re-used as a back edge).
                        continue;
                    }
                    if disc[other_index].is_none() {
                        disc[other_index] = Some(counter);
                        low[other_index] = counter;
                        counter += 1;
                        if call_stack.len() == 1 {
                            children_of_root += 1;
                        }
                        call_stack.push((other, graph.edges(other)));
                    } else {
                        low[node_index] = low[node_index].min(disc[other_index].unwrap());
                    }
                }
                Action::Finish(node) => {
                    let node_index = graph.to_index(node);
                    let child_low = low[node_index];
                    call_stack.pop();
                    if let Some((parent, _)) = call_stack.last() {
                        let parent_index = graph.to_index(*parent);
                        let parent_disc = disc[parent_index].unwrap();
                        if child_low >= parent_disc && call_stack.len() > 1 {
                            articulation.insert(*parent);
                        }
                        if child_low > parent_disc {
                            for edge in graph.edges(*parent) {
                                if edge.target() == node || edge.source() == node {
                                    bridge_edges.push(edge);
                                    break;
                                }
                            }
                        }
                        low[parent_index] = low[parent_index].min(child_low);
                    }
                }
            }
        }

        if children_of_root > 1 {
            articulation.insert(start_id);
        }
    }

    (articulation, bridge_edges)
}

/// The node id one frame below the top of `call_stack`, i.e. the current
/// frame's parent — used to avoid immediately walking back along the
/// edge that discovered the current frame.
fn parent_index<G>(call_stack: &[(G::NodeId, G::Edges)], graph: G) -> usize
where
    G: IntoEdges + NodeIndexable,
{
    if call_stack.len() < 2 {
        return usize::MAX;
    }
    graph.to_index(call_stack[call_stack.len() - 2].0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UnGraph;

    #[test]
    fn bridge_in_a_barbell_graph() {
        // Two triangles joined by a single bridge edge.
        let mut g: UnGraph<(), ()> = UnGraph::new_undirected();
        let nodes: Vec<_> = (0..6).map(|_| g.add_node(())).collect();
        g.add_edge(nodes[0], nodes[1], ()).unwrap();
        g.add_edge(nodes[1], nodes[2], ()).unwrap();
        g.add_edge(nodes[2], nodes[0], ()).unwrap();
        g.add_edge(nodes[3], nodes[4], ()).unwrap();
        g.add_edge(nodes[4], nodes[5], ()).unwrap();
        g.add_edge(nodes[5], nodes[3], ()).unwrap();
        g.add_edge(nodes[0], nodes[3], ()).unwrap();

        let bridge_edges = bridges(&g);
        assert_eq!(bridge_edges.len(), 1);

        let cuts = articulation_points(&g);
        assert!(cuts.contains(&nodes[0]));
        assert!(cuts.contains(&nodes[3]));
        assert_eq!(cuts.len(), 2);
    }

    #[test]
    fn simple_cycle_has_no_cut_vertices_or_bridges() {
        let mut g: UnGraph<(), ()> = UnGraph::new_undirected();
        let nodes: Vec<_> = (0..4).map(|_| g.add_node(())).collect();
        g.add_edge(nodes[0], nodes[1], ()).unwrap();
        g.add_edge(nodes[1], nodes[2], ()).unwrap();
        g.add_edge(nodes[2], nodes[3], ()).unwrap();
        g.add_edge(nodes[3], nodes[0], ()).unwrap();

        assert!(articulation_points(&g).is_empty());
        assert!(bridges(&g).is_empty());
    }
}
