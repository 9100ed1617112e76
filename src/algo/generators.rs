//! Random graph generators, gated behind the `generators`
//! feature. Every generator takes an injectable [`rand::Rng`] so a
//! caller can seed (and replay) generation deterministically rather than
//! reaching for a global source of randomness.

use hashbrown::HashSet;
use rand::Rng;

use crate::graph::{DiGraph, UnGraph};

/// Erdos-Renyi G(n, p): each of the `n*(n-1)/2` possible undirected
/// edges is included independently with probability `p`.
pub fn erdos_renyi<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> UnGraph<(), ()> {
    let mut g = UnGraph::new_undirected();
    let nodes: Vec<_> = (0..n).map(|_| g.add_node(())).collect();
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(p) {
                g.add_edge(nodes[i], nodes[j], ()).unwrap();
            }
        }
    }
    g
}

/// Erdos-Renyi G(n, p), directed: each of the `n*(n-1)` possible ordered
/// edges is included independently with probability `p`.
pub fn erdos_renyi_directed<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> DiGraph<(), ()> {
    let mut g = DiGraph::new();
    let nodes: Vec<_> = (0..n).map(|_| g.add_node(())).collect();
    for i in 0..n {
        for j in 0..n {
            if i != j && rng.gen_bool(p) {
                g.add_edge(nodes[i], nodes[j], ()).unwrap();
            }
        }
    }
    g
}

/// Barabasi-Albert preferential attachment: seed an `(m+1)`-vertex
/// complete graph, then attach each further vertex to `m` existing
/// vertices chosen with probability proportional to their current
/// degree, producing the scale-free degree distribution the model is
/// named for.
pub fn barabasi_albert<R: Rng + ?Sized>(n: usize, m: usize, rng: &mut R) -> UnGraph<(), ()> {
    assert!(m >= 1 && m < n, "barabasi_albert requires 1 <= m < n");
    let mut g = UnGraph::new_undirected();
    let nodes: Vec<_> = (0..n).map(|_| g.add_node(())).collect();

    // `repeated_targets` holds one entry per existing edge endpoint, so
    // an index chosen uniformly from it samples proportional to degree.
    let mut repeated_targets: Vec<usize> = Vec::new();
    for i in 0..=m {
        for j in (i + 1)..=m {
            g.add_edge(nodes[i], nodes[j], ()).unwrap();
            repeated_targets.push(i);
            repeated_targets.push(j);
        }
    }

    for new_idx in (m + 1)..n {
        let mut targets = HashSet::new();
        while targets.len() < m {
            let pick = repeated_targets[rng.gen_range(0..repeated_targets.len())];
            targets.insert(pick);
        }
        for &t in &targets {
            g.add_edge(nodes[new_idx], nodes[t], ()).unwrap();
            repeated_targets.push(t);
            repeated_targets.push(new_idx);
        }
    }

    g
}

fn normalize(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Watts-Strogatz small-world: start from a ring lattice where each
/// vertex connects to its `k` nearest neighbors (`k` even), then rewire
/// each edge's far endpoint to a uniformly random vertex with
/// probability `beta`, skipping self-loops and duplicate edges. A
/// rewire that can't find a free target within a bounded number of
/// attempts is left in place rather than looping forever.
pub fn watts_strogatz<R: Rng + ?Sized>(n: usize, k: usize, beta: f64, rng: &mut R) -> UnGraph<(), ()> {
    assert!(k % 2 == 0 && k < n, "watts_strogatz requires an even k < n");
    let mut g = UnGraph::new_undirected();
    let nodes: Vec<_> = (0..n).map(|_| g.add_node(())).collect();

    let mut edges: Vec<(usize, usize)> = Vec::new();
    for i in 0..n {
        for step in 1..=(k / 2) {
            edges.push((i, (i + step) % n));
        }
    }

    let mut existing: HashSet<(usize, usize)> = edges.iter().map(|&(a, b)| normalize(a, b)).collect();

    const REWIRE_ATTEMPTS: usize = 100;
    for edge in &mut edges {
        if !rng.gen_bool(beta) {
            continue;
        }
        let anchor = edge.0;
        for _ in 0..REWIRE_ATTEMPTS {
            let candidate = rng.gen_range(0..n);
            let key = normalize(anchor, candidate);
            if candidate != anchor && !existing.contains(&key) {
                existing.remove(&normalize(edge.0, edge.1));
                existing.insert(key);
                *edge = (anchor, candidate);
                break;
            }
        }
    }

    for &(a, b) in &edges {
        g.add_edge(nodes[a], nodes[b], ()).unwrap();
    }
    g
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn erdos_renyi_with_p_one_is_complete() {
        let mut rng = StdRng::seed_from_u64(7);
        let g = erdos_renyi(5, 1.0, &mut rng);
        assert_eq!(g.edge_count(), 5 * 4 / 2);
    }

    #[test]
    fn erdos_renyi_with_p_zero_has_no_edges() {
        let mut rng = StdRng::seed_from_u64(7);
        let g = erdos_renyi(5, 0.0, &mut rng);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn barabasi_albert_grows_to_requested_size() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = barabasi_albert(20, 3, &mut rng);
        assert_eq!(g.node_count(), 20);
        // seed clique (4 choose 2) plus 3 edges per attached vertex.
        assert_eq!(g.edge_count(), 4 * 3 / 2 + 3 * (20 - 4));
    }

    #[test]
    fn watts_strogatz_preserves_vertex_and_edge_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let g = watts_strogatz(10, 4, 0.3, &mut rng);
        assert_eq!(g.node_count(), 10);
        assert_eq!(g.edge_count(), 10 * 4 / 2);
    }

    #[test]
    fn watts_strogatz_with_zero_beta_is_the_ring_lattice() {
        use crate::graph::NodeIndex;
        let mut rng = StdRng::seed_from_u64(3);
        let g = watts_strogatz(8, 2, 0.0, &mut rng);
        for i in 0..8u32 {
            let next = (i + 1) % 8;
            let neighbors: Vec<_> = g.neighbors(NodeIndex::new(i as usize)).collect();
            assert!(neighbors.contains(&NodeIndex::new(next as usize)));
        }
    }
}
