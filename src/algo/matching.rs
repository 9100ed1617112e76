//! Hopcroft-Karp: maximum matching on a bipartite graph. Repeatedly
//! runs a layered BFS from every unmatched left vertex to find the
//! shortest augmenting-path length, then DFS-augments along vertex-
//! disjoint shortest paths of exactly that length, until a BFS phase
//! finds no unmatched right vertex at all. `O(E*sqrt(V))`.

use core::hash::Hash;
use std::collections::VecDeque;

use hashbrown::HashMap;

use crate::visit::IntoNeighbors;

/// A maximum matching between `left` and `right`: each matched left
/// vertex's partner, and the total number of matched pairs.
#[derive(Clone, Debug)]
pub struct Matching<N> {
    pair_left: HashMap<N, N>,
    pair_right: HashMap<N, N>,
}

impl<N: Copy + Eq + Hash> Matching<N> {
    /// The right-side partner of `v`, if `v` is matched.
    pub fn mate(&self, v: N) -> Option<N> {
        self.pair_left.get(&v).or_else(|| self.pair_right.get(&v)).copied()
    }

    /// `true` if `v` (either side) is matched.
    pub fn contains(&self, v: N) -> bool {
        self.pair_left.contains_key(&v) || self.pair_right.contains_key(&v)
    }

    /// Number of matched pairs.
    pub fn len(&self) -> usize {
        self.pair_left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pair_left.is_empty()
    }

    /// Every matched `(left, right)` pair.
    pub fn edges(&self) -> impl Iterator<Item = (N, N)> + '_ {
        self.pair_left.iter().map(|(&l, &r)| (l, r))
    }
}

const NIL_DIST: u32 = u32::MAX;

/// Maximum bipartite matching between `left` and `right` via
/// Hopcroft-Karp. `neighbors_of_left` must only return vertices on the
/// `right` side for a left-side vertex (the caller's bipartite
/// partition, e.g. from [`crate::algo::connectivity::bipartite_partition`],
/// is the contract — the graph itself need not know which side is
/// which).
pub fn hopcroft_karp<G, F>(left: &[G::NodeId], right: &[G::NodeId], graph: G, mut neighbors_of_left: F) -> Matching<G::NodeId>
where
    G: IntoNeighbors,
    G::NodeId: Copy + Eq + Hash,
    F: FnMut(G, G::NodeId) -> Vec<G::NodeId>,
{
    let right_set: hashbrown::HashSet<G::NodeId> = right.iter().copied().collect();
    let adjacency: HashMap<G::NodeId, Vec<G::NodeId>> = left
        .iter()
        .map(|&u| {
            let neighbors: Vec<G::NodeId> = neighbors_of_left(graph, u)
                .into_iter()
                .filter(|v| right_set.contains(v))
                .collect();
            (u, neighbors)
        })
        .collect();

    let mut pair_left: HashMap<G::NodeId, G::NodeId> = HashMap::new();
    let mut pair_right: HashMap<G::NodeId, G::NodeId> = HashMap::new();

    loop {
        let mut dist: HashMap<G::NodeId, u32> = HashMap::new();
        let mut queue = VecDeque::new();
        for &u in left {
            if !pair_left.contains_key(&u) {
                dist.insert(u, 0);
                queue.push_back(u);
            } else {
                dist.insert(u, NIL_DIST);
            }
        }
        let mut found_augmenting_path = false;

        while let Some(u) = queue.pop_front() {
            let du = dist[&u];
            for &v in &adjacency[&u] {
                match pair_right.get(&v) {
                    Some(&next_u) => {
                        if dist.get(&next_u).copied().unwrap_or(NIL_DIST) == NIL_DIST {
                            dist.insert(next_u, du + 1);
                            queue.push_back(next_u);
                        }
                    }
                    None => found_augmenting_path = true,
                }
            }
        }

        if !found_augmenting_path {
            break;
        }

        for &u in left {
            if !pair_left.contains_key(&u) {
                try_augment(u, &adjacency, &dist, &mut pair_left, &mut pair_right);
            }
        }
    }

    Matching { pair_left, pair_right }
}

fn try_augment<N>(
    u: N,
    adjacency: &HashMap<N, Vec<N>>,
    dist: &HashMap<N, u32>,
    pair_left: &mut HashMap<N, N>,
    pair_right: &mut HashMap<N, N>,
) -> bool
where
    N: Copy + Eq + Hash,
{
    for &v in &adjacency[&u] {
        let augments = match pair_right.get(&v) {
            None => true,
            Some(&next_u) => {
                dist.get(&next_u).copied().unwrap_or(NIL_DIST) == dist[&u] + 1
                    && try_augment(next_u, adjacency, dist, pair_left, pair_right)
            }
        };
        if augments {
            pair_left.insert(u, v);
            pair_right.insert(v, u);
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UnGraph;

    #[test]
    fn two_by_two_perfect_matching() {
        // 2-left x 2-right, L1-R1, L2-R2 => matching size 2.
        let mut g: UnGraph<(), ()> = UnGraph::new_undirected();
        let l1 = g.add_node(());
        let l2 = g.add_node(());
        let r1 = g.add_node(());
        let r2 = g.add_node(());
        g.add_edge(l1, r1, ()).unwrap();
        g.add_edge(l2, r2, ()).unwrap();

        let left = vec![l1, l2];
        let right = vec![r1, r2];
        let matching = hopcroft_karp(&left, &right, &g, |g, v| g.neighbors(v).collect());
        assert_eq!(matching.len(), 2);
        assert_eq!(matching.mate(l1), Some(r1));
        assert_eq!(matching.mate(l2), Some(r2));
    }

    #[test]
    fn matching_bound_is_min_partition_size() {
        // K(2,3): every left vertex adjacent to every right vertex.
        let mut g: UnGraph<(), ()> = UnGraph::new_undirected();
        let left: Vec<_> = (0..2).map(|_| g.add_node(())).collect();
        let right: Vec<_> = (0..3).map(|_| g.add_node(())).collect();
        for &l in &left {
            for &r in &right {
                g.add_edge(l, r, ()).unwrap();
            }
        }
        let matching = hopcroft_karp(&left, &right, &g, |g, v| g.neighbors(v).collect());
        assert_eq!(matching.len(), left.len().min(right.len()));
    }

    #[test]
    fn unmatched_vertex_has_no_mate() {
        let mut g: UnGraph<(), ()> = UnGraph::new_undirected();
        let l1 = g.add_node(());
        let l2 = g.add_node(());
        let r1 = g.add_node(());
        g.add_edge(l1, r1, ()).unwrap();

        let left = vec![l1, l2];
        let right = vec![r1];
        let matching = hopcroft_karp(&left, &right, &g, |g, v| g.neighbors(v).collect());
        assert_eq!(matching.len(), 1);
        assert_eq!(matching.mate(l2), None);
    }
}
