//! Floyd-Warshall: dense all-pairs shortest paths, O(V^3).

use crate::data::FloatMeasure;
use crate::visit::{EdgeRef, IntoEdgeReferences, NodeCompactIndexable};

use crate::algo::NegativeCycle;

/// `dist[i * n + j]` is the shortest distance from the `i`-th to the
/// `j`-th node in the graph's dense index space (`NodeIndexable`). `Err`
/// if any diagonal entry ends negative — a negative cycle.
pub fn floyd_warshall<G, F, K>(graph: G, mut edge_cost: F) -> Result<Vec<K>, NegativeCycle>
where
    G: IntoEdgeReferences + NodeCompactIndexable,
    F: FnMut(G::EdgeRef) -> K,
    K: FloatMeasure + Copy,
{
    let n = graph.node_count();
    let mut dist = vec![K::infinite(); n * n];
    for i in 0..n {
        dist[i * n + i] = K::zero();
    }
    for edge in graph.edge_references() {
        let i = graph.to_index(edge.source());
        let j = graph.to_index(edge.target());
        let w = edge_cost(edge);
        if w < dist[i * n + j] {
            dist[i * n + j] = w;
        }
    }

    for k in 0..n {
        for i in 0..n {
            let dik = dist[i * n + k];
            if dik == K::infinite() {
                continue;
            }
            for j in 0..n {
                let dkj = dist[k * n + j];
                if dkj == K::infinite() {
                    continue;
                }
                let through = dik + dkj;
                if through < dist[i * n + j] {
                    dist[i * n + j] = through;
                }
            }
        }
    }

    for i in 0..n {
        if dist[i * n + i] < K::zero() {
            return Err(NegativeCycle);
        }
    }
    Ok(dist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;

    #[test]
    fn agrees_with_repeated_dijkstra() {
        let mut g: DiGraph<(), f64> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        g.add_edge(a, b, 2.0).unwrap();
        g.add_edge(b, c, 3.0).unwrap();
        g.add_edge(a, c, 100.0).unwrap();

        let dist = floyd_warshall(&g, |e| *e.weight()).unwrap();
        let n = g.node_count();
        let (ia, ic) = (g.to_index(a), g.to_index(c));
        assert_eq!(dist[ia * n + ic], 5.0);

        let tree = crate::algo::shortest_paths::dijkstra(&g, a, |_| false, |e| *e.weight());
        assert_eq!(dist[ia * n + ic], tree.distance_to(c).unwrap());
    }

    #[test]
    fn detects_negative_cycle() {
        let mut g: DiGraph<(), f64> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        g.add_edge(a, b, 1.0).unwrap();
        g.add_edge(b, c, 1.0).unwrap();
        g.add_edge(c, a, -3.0).unwrap();
        assert!(floyd_warshall(&g, |e| *e.weight()).is_err());
    }
}
