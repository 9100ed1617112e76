//! The residual-capacity map shared by all three augmenting
//! strategies: `cap'(u, v)` keyed by node pair rather than edge id, so
//! parallel edges between the same pair of vertices accumulate into one
//! capacity the way a textbook capacity matrix would. Built once from the
//! input network; each augmenting step only mutates it.

use core::hash::Hash;

use hashbrown::HashMap;

use crate::data::BoundedMeasure;
use crate::visit::{EdgeRef, IntoEdges, IntoNodeIdentifiers};

/// The residual graph of a flow network: forward capacity minus flow
/// already pushed, and the reverse arc's capacity equal to the flow
/// pushed forward so far (so cancelling flow is just another augmenting
/// path). `adjacency` is the fixed candidate neighbor list — the union of
/// each vertex's original out- and in-neighbors — that every augmenting
/// search walks; capacities on it change, the list of who might be
/// reachable does not.
#[derive(Clone, Debug)]
pub struct Residual<N, K> {
    cap: HashMap<(N, N), K>,
    adjacency: HashMap<N, Vec<N>>,
}

impl<N, K> Residual<N, K>
where
    N: Copy + Eq + Hash,
    K: BoundedMeasure + Copy,
{
    /// Build the residual graph of `graph` under `edge_cost`. `graph`'s
    /// edges are read as directed arcs (an undirected graph's `edges`
    /// already presents both directions as distinct `EdgeRef`s with
    /// `source() == a`).
    pub fn build<G, F>(graph: G, mut edge_cost: F) -> Self
    where
        G: IntoNodeIdentifiers + IntoEdges<NodeId = N>,
        F: FnMut(G::EdgeRef) -> K,
    {
        Self::from_edges(graph.node_identifiers().flat_map(|a| {
            graph
                .edges(a)
                .map(|e| (e.source(), e.target(), edge_cost(e)))
                .collect::<Vec<_>>()
        }))
    }

    /// Build directly from an edge list `(source, target, weight)` — the
    /// shape every flow entry point normalizes its graph into before
    /// handing off to the shared augmenting loop.
    pub fn from_edges(edges: impl IntoIterator<Item = (N, N, K)>) -> Self {
        let mut cap: HashMap<(N, N), K> = HashMap::new();
        let mut adjacency: HashMap<N, Vec<N>> = HashMap::new();
        let mut link = |adjacency: &mut HashMap<N, Vec<N>>, a: N, b: N| {
            let list = adjacency.entry(a).or_default();
            if !list.contains(&b) {
                list.push(b);
            }
        };
        for (u, v, w) in edges {
            let entry = cap.entry((u, v)).or_insert_with(K::zero);
            *entry = *entry + w;
            cap.entry((v, u)).or_insert_with(K::zero);
            link(&mut adjacency, u, v);
            link(&mut adjacency, v, u);
        }
        Residual { cap, adjacency }
    }

    pub fn capacity(&self, u: N, v: N) -> K {
        self.cap.get(&(u, v)).copied().unwrap_or_else(K::zero)
    }

    pub fn neighbors(&self, u: N) -> impl Iterator<Item = N> + '_ {
        self.adjacency.get(&u).into_iter().flatten().copied()
    }

    /// Push `amount` of flow along the arc `u -> v`: decrease the forward
    /// residual, increase the reverse residual by the same amount.
    pub fn push_flow(&mut self, u: N, v: N, amount: K) {
        if let Some(c) = self.cap.get_mut(&(u, v)) {
            *c = *c - amount;
        }
        let back = self.cap.entry((v, u)).or_insert_with(K::zero);
        *back = *back + amount;
    }
}

/// The result of running a max-flow algorithm: the flow value and the
/// terminal residual graph, from which [`super::min_cut`] reads the
/// source-side reachable set.
#[derive(Clone, Debug)]
pub struct MaxFlow<N, K> {
    pub value: K,
    pub residual: Residual<N, K>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_edges_accumulate_capacity() {
        let r: Residual<u32, i64> = Residual::from_edges([(0, 1, 3), (0, 1, 4)]);
        assert_eq!(r.capacity(0, 1), 7);
        assert_eq!(r.capacity(1, 0), 0);
    }

    #[test]
    fn push_flow_updates_both_directions() {
        let mut r: Residual<u32, i64> = Residual::from_edges([(0, 1, 5)]);
        r.push_flow(0, 1, 2);
        assert_eq!(r.capacity(0, 1), 3);
        assert_eq!(r.capacity(1, 0), 2);
    }
}
