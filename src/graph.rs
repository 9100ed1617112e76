//! A minimal adjacency-list graph: the one concrete, capability-trait-
//! implementing storage this crate ships, kept around to anchor the
//! algorithms and their doctests. General-purpose storage back-ends
//! (adjacency matrices, CSR, grids, bipartite adjacency, ...) are out of
//! this crate's scope — anything implementing [`crate::visit`] works with
//! [`crate::algo`] just as well as this type does.

use std::marker::PhantomData;

use fixedbitset::FixedBitSet;

use crate::visit::{
    Build, Data, DataMap, EdgeCount, EdgeRef as EdgeRefTrait, GetAdjacencyMatrix, GraphBase,
    IntoEdgeReferences, IntoEdges, IntoEdgesDirected, IntoNeighbors, IntoNeighborsDirected,
    IntoNodeIdentifiers, NodeCompactIndexable, NodeCount, NodeIndexable, VisitMap, Visitable,
};
use crate::{Directed, EdgeType, Undirected};

/// An index type used by [`NodeIndex`]/[`EdgeIndex`] — anything
/// `Copy`-able, hashable, and densely convertible to/from `usize`.
pub trait IndexType: Copy + Default + Eq + Ord + std::hash::Hash + std::fmt::Debug {
    fn new(x: usize) -> Self;
    fn index(&self) -> usize;
    fn max() -> Self;
}

macro_rules! impl_index_type {
    ($($t:ty),*) => {
        $(
            impl IndexType for $t {
                #[inline]
                fn new(x: usize) -> Self { x as $t }
                #[inline]
                fn index(&self) -> usize { *self as usize }
                #[inline]
                fn max() -> Self { <$t>::MAX }
            }
        )*
    };
}

impl_index_type!(u8, u16, u32, u64, usize);

/// A vertex descriptor: an opaque, `Copy`, equality-comparable handle.
/// Valid for the graph that minted it until explicit removal.
pub struct NodeIndex<Ix = u32>(Ix);

impl<Ix: IndexType> NodeIndex<Ix> {
    pub fn new(x: usize) -> Self {
        NodeIndex(IndexType::new(x))
    }
    pub fn index(self) -> usize {
        self.0.index()
    }
    pub fn end() -> Self {
        NodeIndex(IndexType::max())
    }
}

impl<Ix: IndexType> Clone for NodeIndex<Ix> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<Ix: IndexType> Copy for NodeIndex<Ix> {}
impl<Ix: IndexType> PartialEq for NodeIndex<Ix> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<Ix: IndexType> Eq for NodeIndex<Ix> {}
impl<Ix: IndexType> std::hash::Hash for NodeIndex<Ix> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}
impl<Ix: IndexType> std::fmt::Debug for NodeIndex<Ix> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeIndex({:?})", self.0)
    }
}

/// An edge descriptor: an opaque handle; removal frees it.
pub struct EdgeIndex<Ix = u32>(Ix);

impl<Ix: IndexType> EdgeIndex<Ix> {
    pub fn new(x: usize) -> Self {
        EdgeIndex(IndexType::new(x))
    }
    pub fn index(self) -> usize {
        self.0.index()
    }
}

impl<Ix: IndexType> Clone for EdgeIndex<Ix> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<Ix: IndexType> Copy for EdgeIndex<Ix> {}
impl<Ix: IndexType> PartialEq for EdgeIndex<Ix> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<Ix: IndexType> Eq for EdgeIndex<Ix> {}
impl<Ix: IndexType> std::hash::Hash for EdgeIndex<Ix> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}
impl<Ix: IndexType> std::fmt::Debug for EdgeIndex<Ix> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EdgeIndex({:?})", self.0)
    }
}

#[inline]
pub fn node_index<Ix: IndexType>(x: usize) -> NodeIndex<Ix> {
    NodeIndex::new(x)
}

#[inline]
pub fn edge_index<Ix: IndexType>(x: usize) -> EdgeIndex<Ix> {
    EdgeIndex::new(x)
}

struct NodeData<N, Ix> {
    weight: N,
    out: Vec<EdgeIndex<Ix>>,
    inn: Vec<EdgeIndex<Ix>>,
}

struct EdgeData<E, Ix> {
    source: NodeIndex<Ix>,
    target: NodeIndex<Ix>,
    weight: E,
}

/// A directed or undirected graph with arbitrary associated node and edge
/// data, stored as a node list each carrying its incident edge indices.
///
/// Node and edge descriptors are plain indices with **no** generation
/// counter: `remove_node`/`remove_edge` use swap-remove, so removing a
/// vertex or edge invalidates the descriptor of whichever vertex/edge
/// previously held the last slot (documented on the removal methods, the
/// same contract `petgraph::Graph` documents).
pub struct Graph<N, E, Ty = Directed, Ix = u32> {
    nodes: Vec<NodeData<N, Ix>>,
    edges: Vec<EdgeData<E, Ix>>,
    ty: PhantomData<Ty>,
}

pub type DiGraph<N, E, Ix = u32> = Graph<N, E, Directed, Ix>;
pub type UnGraph<N, E, Ix = u32> = Graph<N, E, Undirected, Ix>;

impl<N, E, Ty, Ix> Graph<N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    pub fn new() -> Self {
        Graph {
            nodes: Vec::new(),
            edges: Vec::new(),
            ty: PhantomData,
        }
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            ty: PhantomData,
        }
    }

    /// An empty graph, explicit about its edge type at the call site
    /// (`UnGraph::new_undirected()`/`DiGraph::new_undirected()`) the way
    /// `new()` alone is not.
    pub fn new_undirected() -> Self {
        Self::new()
    }

    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn add_node(&mut self, weight: N) -> NodeIndex<Ix> {
        let index = NodeIndex::new(self.nodes.len());
        self.nodes.push(NodeData {
            weight,
            out: Vec::new(),
            inn: Vec::new(),
        });
        index
    }

    /// Add an edge `a -> b`. Returns `None` (`invalid-endpoint`) if either
    /// index is out of bounds — never silently creates a vertex.
    pub fn add_edge(&mut self, a: NodeIndex<Ix>, b: NodeIndex<Ix>, weight: E) -> Option<EdgeIndex<Ix>> {
        if a.index() >= self.nodes.len() || b.index() >= self.nodes.len() {
            return None;
        }
        let ei = EdgeIndex::new(self.edges.len());
        self.edges.push(EdgeData {
            source: a,
            target: b,
            weight,
        });
        if Ty::is_directed() {
            self.nodes[a.index()].out.push(ei);
            self.nodes[b.index()].inn.push(ei);
        } else {
            self.nodes[a.index()].out.push(ei);
            if b != a {
                self.nodes[b.index()].out.push(ei);
            }
        }
        Some(ei)
    }

    pub fn node_weight(&self, a: NodeIndex<Ix>) -> Option<&N> {
        self.nodes.get(a.index()).map(|n| &n.weight)
    }

    pub fn node_weight_mut(&mut self, a: NodeIndex<Ix>) -> Option<&mut N> {
        self.nodes.get_mut(a.index()).map(|n| &mut n.weight)
    }

    pub fn edge_weight(&self, e: EdgeIndex<Ix>) -> Option<&E> {
        self.edges.get(e.index()).map(|ed| &ed.weight)
    }

    pub fn edge_weight_mut(&mut self, e: EdgeIndex<Ix>) -> Option<&mut E> {
        self.edges.get_mut(e.index()).map(|ed| &mut ed.weight)
    }

    pub fn edge_endpoints(&self, e: EdgeIndex<Ix>) -> Option<(NodeIndex<Ix>, NodeIndex<Ix>)> {
        self.edges.get(e.index()).map(|ed| (ed.source, ed.target))
    }

    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex<Ix>> + '_ {
        (0..self.nodes.len()).map(NodeIndex::new)
    }

    pub fn edge_indices(&self) -> impl Iterator<Item = EdgeIndex<Ix>> + '_ {
        (0..self.edges.len()).map(EdgeIndex::new)
    }

    fn other_endpoint(&self, e: EdgeIndex<Ix>, from: NodeIndex<Ix>) -> NodeIndex<Ix> {
        let ed = &self.edges[e.index()];
        if ed.source == from {
            ed.target
        } else {
            ed.source
        }
    }

    /// Iterate the out-edges of `a` (for undirected graphs: every edge
    /// incident to `a`), each presented with `source() == a`.
    pub fn edges(&self, a: NodeIndex<Ix>) -> impl Iterator<Item = EdgeReference<'_, E, Ix>> + '_ {
        self.nodes[a.index()].out.iter().map(move |&e| {
            let ed = &self.edges[e.index()];
            let target = self.other_endpoint(e, a);
            EdgeReference {
                index: e,
                source: a,
                target,
                weight: &ed.weight,
            }
        })
    }

    pub fn neighbors(&self, a: NodeIndex<Ix>) -> impl Iterator<Item = NodeIndex<Ix>> + '_ {
        self.edges(a).map(|e| e.target)
    }

    pub fn neighbors_directed(
        &self,
        a: NodeIndex<Ix>,
        dir: crate::visit::Direction,
    ) -> Box<dyn Iterator<Item = NodeIndex<Ix>> + '_> {
        if !Ty::is_directed() {
            return Box::new(self.neighbors(a));
        }
        match dir {
            crate::visit::Direction::Outgoing => Box::new(self.neighbors(a)),
            crate::visit::Direction::Incoming => Box::new(
                self.nodes[a.index()]
                    .inn
                    .iter()
                    .map(move |&e| self.other_endpoint(e, a)),
            ),
        }
    }

    /// Edges incident to `a` in the given direction: for a directed graph,
    /// out-edges (`source() == a`) or in-edges (`target() == a`); for an
    /// undirected graph, every incident edge either way, each presented
    /// with `source() == a`.
    pub fn edges_directed(
        &self,
        a: NodeIndex<Ix>,
        dir: crate::visit::Direction,
    ) -> Box<dyn Iterator<Item = EdgeReference<'_, E, Ix>> + '_> {
        if !Ty::is_directed() || dir == crate::visit::Direction::Outgoing {
            return Box::new(self.edges(a));
        }
        Box::new(self.nodes[a.index()].inn.iter().map(move |&e| {
            let ed = &self.edges[e.index()];
            EdgeReference {
                index: e,
                source: ed.source,
                target: ed.target,
                weight: &ed.weight,
            }
        }))
    }

    pub fn out_degree(&self, a: NodeIndex<Ix>) -> usize {
        self.nodes[a.index()].out.len()
    }

    pub fn in_degree(&self, a: NodeIndex<Ix>) -> usize {
        if Ty::is_directed() {
            self.nodes[a.index()].inn.len()
        } else {
            self.nodes[a.index()].out.len()
        }
    }

    /// Remove the edge, freeing its descriptor. Invalidates the
    /// descriptor of whatever edge previously occupied the last slot
    /// (swap-remove).
    pub fn remove_edge(&mut self, e: EdgeIndex<Ix>) -> Option<E> {
        if e.index() >= self.edges.len() {
            return None;
        }
        let ed = &self.edges[e.index()];
        let (src, dst) = (ed.source, ed.target);
        Self::unlink(&mut self.nodes[src.index()].out, e);
        if Ty::is_directed() {
            Self::unlink(&mut self.nodes[dst.index()].inn, e);
        } else if dst != src {
            Self::unlink(&mut self.nodes[dst.index()].out, e);
        }

        let removed = self.edges.swap_remove(e.index());
        // The edge that used to be last now lives at `e`'s old slot;
        // fix up whichever node lists still point at its old index.
        if e.index() < self.edges.len() {
            let moved = &self.edges[e.index()];
            let old = EdgeIndex::new(self.edges.len());
            let new = e;
            Self::relink(&mut self.nodes[moved.source.index()].out, old, new);
            if Ty::is_directed() {
                Self::relink(&mut self.nodes[moved.target.index()].inn, old, new);
            } else if moved.target != moved.source {
                Self::relink(&mut self.nodes[moved.target.index()].out, old, new);
            }
        }
        Some(removed.weight)
    }

    fn unlink(list: &mut Vec<EdgeIndex<Ix>>, e: EdgeIndex<Ix>) {
        if let Some(pos) = list.iter().position(|&x| x == e) {
            list.swap_remove(pos);
        }
    }

    fn relink(list: &mut Vec<EdgeIndex<Ix>>, old: EdgeIndex<Ix>, new: EdgeIndex<Ix>) {
        if let Some(pos) = list.iter().position(|&x| x == old) {
            list[pos] = new;
        }
    }

    /// Remove the vertex and every edge incident to it, then free its
    /// descriptor. Invalidates the descriptor of whatever vertex
    /// previously occupied the last slot (swap-remove), and of any edge
    /// moved during the incident-edge cleanup.
    pub fn remove_node(&mut self, a: NodeIndex<Ix>) -> Option<N> {
        if a.index() >= self.nodes.len() {
            return None;
        }
        let mut incident: Vec<EdgeIndex<Ix>> = self.nodes[a.index()].out.clone();
        incident.extend(self.nodes[a.index()].inn.clone());
        incident.sort_by_key(|e| std::cmp::Reverse(e.index()));
        incident.dedup();
        for e in incident {
            self.remove_edge(e);
        }

        let removed = self.nodes.swap_remove(a.index());
        if a.index() < self.nodes.len() {
            let old = NodeIndex::new(self.nodes.len());
            let new = a;
            for e in self.nodes[a.index()].out.clone() {
                let ed = &mut self.edges[e.index()];
                if ed.source == old {
                    ed.source = new;
                }
                if ed.target == old {
                    ed.target = new;
                }
            }
            for e in self.nodes[a.index()].inn.clone() {
                let ed = &mut self.edges[e.index()];
                if ed.source == old {
                    ed.source = new;
                }
                if ed.target == old {
                    ed.target = new;
                }
            }
        }
        Some(removed.weight)
    }
}

impl<N, E, Ty, Ix> Default for Graph<N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    fn default() -> Self {
        Self::new()
    }
}

/// A reference to one edge of a [`Graph`]: its endpoints, id, and weight.
#[derive(Debug)]
pub struct EdgeReference<'a, E, Ix> {
    index: EdgeIndex<Ix>,
    source: NodeIndex<Ix>,
    target: NodeIndex<Ix>,
    weight: &'a E,
}

impl<'a, E, Ix: IndexType> Clone for EdgeReference<'a, E, Ix> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, E, Ix: IndexType> Copy for EdgeReference<'a, E, Ix> {}

impl<'a, E, Ix: IndexType> EdgeRefTrait for EdgeReference<'a, E, Ix> {
    type NodeId = NodeIndex<Ix>;
    type EdgeId = EdgeIndex<Ix>;
    type Weight = E;

    fn source(&self) -> NodeIndex<Ix> {
        self.source
    }
    fn target(&self) -> NodeIndex<Ix> {
        self.target
    }
    fn id(&self) -> EdgeIndex<Ix> {
        self.index
    }
    fn weight(&self) -> &E {
        self.weight
    }
}

// --- capability trait implementations -------------------------------------

impl<N, E, Ty, Ix> GraphBase for Graph<N, E, Ty, Ix>
where
    Ix: IndexType,
{
    type NodeId = NodeIndex<Ix>;
    type EdgeId = EdgeIndex<Ix>;
}

impl<N, E, Ty, Ix> NodeCount for Graph<N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    fn node_count(&self) -> usize {
        Graph::node_count(self)
    }
}

impl<N, E, Ty, Ix> EdgeCount for Graph<N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    fn edge_count(&self) -> usize {
        Graph::edge_count(self)
    }
}

impl<N, E, Ty, Ix> Data for Graph<N, E, Ty, Ix>
where
    Ix: IndexType,
{
    type NodeWeight = N;
    type EdgeWeight = E;
}

impl<N, E, Ty, Ix> DataMap for Graph<N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    fn node_weight(&self, id: Self::NodeId) -> Option<&N> {
        Graph::node_weight(self, id)
    }
    fn edge_weight(&self, id: Self::EdgeId) -> Option<&E> {
        Graph::edge_weight(self, id)
    }
}

impl<N, E, Ty, Ix> Build for Graph<N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    fn add_node(&mut self, weight: N) -> Self::NodeId {
        Graph::add_node(self, weight)
    }
    fn add_edge(&mut self, a: Self::NodeId, b: Self::NodeId, weight: E) -> Option<Self::EdgeId> {
        Graph::add_edge(self, a, b, weight)
    }
}

impl<'a, N, E, Ty, Ix> IntoNodeIdentifiers for &'a Graph<N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    type NodeIdentifiers = Box<dyn Iterator<Item = NodeIndex<Ix>> + 'a>;
    fn node_identifiers(self) -> Self::NodeIdentifiers {
        Box::new(self.node_indices())
    }
}

impl<'a, N, E, Ty, Ix> IntoEdgeReferences for &'a Graph<N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    type EdgeRef = EdgeReference<'a, E, Ix>;
    type EdgeReferences = Box<dyn Iterator<Item = EdgeReference<'a, E, Ix>> + 'a>;
    fn edge_references(self) -> Self::EdgeReferences {
        Box::new(self.edges.iter().enumerate().map(move |(i, ed)| EdgeReference {
            index: EdgeIndex::new(i),
            source: ed.source,
            target: ed.target,
            weight: &ed.weight,
        }))
    }
}

impl<'a, N, E, Ty, Ix> IntoEdges for &'a Graph<N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    type Edges = Box<dyn Iterator<Item = EdgeReference<'a, E, Ix>> + 'a>;
    fn edges(self, a: Self::NodeId) -> Self::Edges {
        Box::new(Graph::edges(self, a))
    }
    fn out_degree(self, a: Self::NodeId) -> usize {
        Graph::out_degree(self, a)
    }
}

impl<'a, N, E, Ty, Ix> IntoNeighbors for &'a Graph<N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    type Neighbors = Box<dyn Iterator<Item = NodeIndex<Ix>> + 'a>;
    fn neighbors(self, a: Self::NodeId) -> Self::Neighbors {
        Box::new(Graph::neighbors(self, a))
    }
}

impl<'a, N, E, Ty, Ix> IntoNeighborsDirected for &'a Graph<N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    type NeighborsDirected = Box<dyn Iterator<Item = NodeIndex<Ix>> + 'a>;
    fn neighbors_directed(self, a: Self::NodeId, dir: crate::visit::Direction) -> Self::NeighborsDirected {
        Graph::neighbors_directed(self, a, dir)
    }
}

impl<'a, N, E, Ty, Ix> IntoEdgesDirected for &'a Graph<N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    type EdgesDirected = Box<dyn Iterator<Item = EdgeReference<'a, E, Ix>> + 'a>;
    fn edges_directed(self, a: Self::NodeId, dir: crate::visit::Direction) -> Self::EdgesDirected {
        Graph::edges_directed(self, a, dir)
    }
}

impl<N, E, Ty, Ix> NodeIndexable for Graph<N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    fn node_bound(&self) -> usize {
        self.node_count()
    }
    fn to_index(&self, a: Self::NodeId) -> usize {
        a.index()
    }
    fn from_index(&self, i: usize) -> Self::NodeId {
        NodeIndex::new(i)
    }
}

impl<N, E, Ty, Ix> NodeCompactIndexable for Graph<N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
}

/// The [`VisitMap`] this crate's reference graph hands out: a bitset
/// keyed by a node's dense index.
#[derive(Clone)]
pub struct NodeBitSet<Ix> {
    bits: FixedBitSet,
    _ix: PhantomData<Ix>,
}

impl<Ix: IndexType> VisitMap<NodeIndex<Ix>> for NodeBitSet<Ix> {
    fn visit(&mut self, a: NodeIndex<Ix>) -> bool {
        !self.bits.put(a.index())
    }
    fn is_visited(&self, a: &NodeIndex<Ix>) -> bool {
        self.bits.contains(a.index())
    }
}

impl<N, E, Ty, Ix> Visitable for Graph<N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    type Map = NodeBitSet<Ix>;
    fn visit_map(&self) -> Self::Map {
        NodeBitSet {
            bits: FixedBitSet::with_capacity(self.node_count()),
            _ix: PhantomData,
        }
    }
    fn reset_map(&self, map: &mut Self::Map) {
        map.bits.clear();
        map.bits.grow(self.node_count());
    }
}

impl<N, E, Ty, Ix> GetAdjacencyMatrix for Graph<N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    type AdjMatrix = FixedBitSet;

    fn adjacency_matrix(&self) -> Self::AdjMatrix {
        let n = self.node_count();
        let mut bits = FixedBitSet::with_capacity(n * n);
        for ed in &self.edges {
            bits.insert(ed.source.index() * n + ed.target.index());
            if !Ty::is_directed() {
                bits.insert(ed.target.index() * n + ed.source.index());
            }
        }
        bits
    }

    fn is_adjacent(&self, matrix: &Self::AdjMatrix, a: Self::NodeId, b: Self::NodeId) -> bool {
        matrix.contains(a.index() * self.node_count() + b.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visit::Direction;

    #[test]
    fn add_and_remove_edges_directed() {
        let mut g: DiGraph<&str, u32> = Graph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let c = g.add_node("c");
        let ab = g.add_edge(a, b, 1).unwrap();
        g.add_edge(b, c, 2).unwrap();
        assert_eq!(g.out_degree(a), 1);
        assert_eq!(g.in_degree(b), 1);
        assert_eq!(g.neighbors(a).collect::<Vec<_>>(), vec![b]);
        g.remove_edge(ab);
        assert_eq!(g.out_degree(a), 0);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn undirected_neighbors_are_symmetric() {
        let mut g: UnGraph<(), ()> = Graph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        g.add_edge(a, b, ()).unwrap();
        assert_eq!(g.neighbors(a).collect::<Vec<_>>(), vec![b]);
        assert_eq!(g.neighbors(b).collect::<Vec<_>>(), vec![a]);
        assert_eq!(
            g.neighbors_directed(a, Direction::Incoming).collect::<Vec<_>>(),
            vec![b]
        );
    }

    #[test]
    fn add_edge_rejects_invalid_endpoint() {
        let mut g: DiGraph<(), ()> = Graph::new();
        let a = g.add_node(());
        let ghost = NodeIndex::<u32>::new(42);
        assert!(g.add_edge(a, ghost, ()).is_none());
    }

    #[test]
    fn remove_node_drops_incident_edges() {
        let mut g: DiGraph<(), ()> = Graph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        g.add_edge(a, b, ()).unwrap();
        g.add_edge(b, c, ()).unwrap();
        g.remove_node(b);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 0);
    }
}
