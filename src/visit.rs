//! Graph-capability contracts and lazy traversal/search.
//!
//! Every trait here is deliberately small and orthogonal — algorithms
//! state the minimum set they need as a trait bound, and a type need only
//! implement the subset its storage actually supports. This replaces any
//! deep graph-interface hierarchy with composition of small traits, the
//! way [`petgraph::visit`] does it.

mod traversal;
mod visitor;

pub use traversal::{
    breadth_first_search, depth_first_search, depth_first_search_visitor, AStarSearch, Bfs,
    BestFirstSearch, Dfs, DfsEvent, DfsPostOrder, IterativeDeepeningDfs, SearchState, Topo,
    UniformCostSearch,
};
pub use visitor::{Combine, Control, NullVisitor, OnDiscover, Visitor};

/// An edge direction: `Outgoing` edges point away from a node, `Incoming`
/// edges point toward it. For undirected graphs the two coincide.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Outgoing = 0,
    Incoming = 1,
}

pub use Direction::{Incoming, Outgoing};

impl Direction {
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Outgoing => Incoming,
            Incoming => Outgoing,
        }
    }
}

/// The associated node/edge identifier types of a graph.
///
/// `NodeId`/`EdgeId` are opaque, `Copy`, equality-comparable handles —
/// they carry no algorithm-specific metadata (predecessor maps and
/// distance maps are owned by the algorithm invocation, never threaded
/// through the graph itself).
pub trait GraphBase {
    type NodeId: Copy + PartialEq;
    type EdgeId: Copy + PartialEq;
}

impl<'a, G> GraphBase for &'a G
where
    G: GraphBase,
{
    type NodeId = G::NodeId;
    type EdgeId = G::EdgeId;
}

/// A cheaply-copyable reference to a graph — the "self" type every
/// capability trait below is generic over (so algorithms take `G: Trait`
/// rather than `&G: Trait` and work uniformly for `&Graph` and other
/// `Copy` graph handles).
pub trait GraphRef: Copy + GraphBase {}

impl<'a, G> GraphRef for &'a G where G: GraphBase {}

/// **VertexList** capability: enumerate all vertices, and count them.
pub trait IntoNodeIdentifiers: GraphRef {
    type NodeIdentifiers: Iterator<Item = Self::NodeId>;
    fn node_identifiers(self) -> Self::NodeIdentifiers;
}

/// Total number of vertices, in O(1).
pub trait NodeCount: GraphBase {
    fn node_count(&self) -> usize;
}

/// Total number of edges, in O(1).
pub trait EdgeCount: GraphBase {
    fn edge_count(&self) -> usize;
}

/// A reference to one edge: its endpoints, id, and weight.
pub trait EdgeRef: Copy {
    type NodeId;
    type EdgeId;
    type Weight;
    fn source(&self) -> Self::NodeId;
    fn target(&self) -> Self::NodeId;
    fn id(&self) -> Self::EdgeId;
    fn weight(&self) -> &Self::Weight;
}

/// **EdgeList** capability: enumerate all edges of the graph.
pub trait IntoEdgeReferences: GraphRef + Data {
    type EdgeRef: EdgeRef<NodeId = Self::NodeId, EdgeId = Self::EdgeId, Weight = Self::EdgeWeight>;
    type EdgeReferences: Iterator<Item = Self::EdgeRef>;
    fn edge_references(self) -> Self::EdgeReferences;
}

/// **Incidence** capability: out-edges of a vertex.
pub trait IntoEdges: IntoEdgeReferences {
    type Edges: Iterator<Item = Self::EdgeRef>;
    fn edges(self, a: Self::NodeId) -> Self::Edges;

    /// Out-degree of `a`. The default walks `edges`; implementors with a
    /// cheaper count should override.
    fn out_degree(self, a: Self::NodeId) -> usize {
        self.edges(a).count()
    }
}

/// **Adjacency** capability: the vertices adjacent to a vertex.
pub trait IntoNeighbors: GraphRef {
    type Neighbors: Iterator<Item = Self::NodeId>;
    fn neighbors(self, a: Self::NodeId) -> Self::Neighbors;
}

/// **BidirectionalIncidence** capability: neighbors filtered by direction.
pub trait IntoNeighborsDirected: IntoNeighbors {
    type NeighborsDirected: Iterator<Item = Self::NodeId>;
    fn neighbors_directed(self, a: Self::NodeId, dir: Direction) -> Self::NeighborsDirected;
}

/// **BidirectionalIncidence** capability, edge-reference form: in-edges of
/// a vertex as well as out-edges. Required by bidirectional search (a
/// backward frontier walks in-edges) and by flow algorithms (residual
/// graphs need to see both directions).
pub trait IntoEdgesDirected: IntoEdges + IntoNeighborsDirected {
    type EdgesDirected: Iterator<Item = Self::EdgeRef>;
    fn edges_directed(self, a: Self::NodeId, dir: Direction) -> Self::EdgesDirected;
}

/// Maps a graph's node identifiers to a dense `0..node_bound()` index
/// space and back. Required by algorithms that allocate per-node arrays
/// (distance vectors, disjoint-set forests, dense coloring tables).
pub trait NodeIndexable: GraphBase {
    /// An upper bound on the node index space: `to_index(a) < node_bound()`
    /// for every live node `a`.
    fn node_bound(&self) -> usize;
    fn to_index(&self, a: Self::NodeId) -> usize;
    fn from_index(&self, i: usize) -> Self::NodeId;
}

/// A `NodeIndexable` whose index space is exactly `0..node_count()` with
/// no gaps — required by algorithms (Floyd-Warshall, coloring) that build
/// dense `V x V` or `V`-length tables with no wasted slots.
pub trait NodeCompactIndexable: NodeIndexable + NodeCount {}

/// **AdjacencyMatrix** capability: O(1) edge lookup between two vertices.
pub trait GetAdjacencyMatrix: GraphBase {
    type AdjMatrix;
    fn adjacency_matrix(&self) -> Self::AdjMatrix;
    fn is_adjacent(&self, matrix: &Self::AdjMatrix, a: Self::NodeId, b: Self::NodeId) -> bool;
}

/// **BinaryIncidence** capability: left/right child access for binary
/// graph traversal orders (in-order DFS).
pub trait IntoChildren: GraphRef {
    fn left_child(self, a: Self::NodeId) -> Option<Self::NodeId>;
    fn right_child(self, a: Self::NodeId) -> Option<Self::NodeId>;
}

/// Associated vertex/edge weight types (the storage a graph attaches to
/// each node/edge — not the *property-map* attachment system, which is
/// out of this crate's scope beyond this contract).
pub trait Data: GraphBase {
    type NodeWeight;
    type EdgeWeight;
}

impl<'a, G> Data for &'a G
where
    G: Data,
{
    type NodeWeight = G::NodeWeight;
    type EdgeWeight = G::EdgeWeight;
}

/// Typed, total (returns `None` only for a dead id, never "unset") lookup
/// of node/edge weights.
pub trait DataMap: Data {
    fn node_weight(&self, id: Self::NodeId) -> Option<&Self::NodeWeight>;
    fn edge_weight(&self, id: Self::EdgeId) -> Option<&Self::EdgeWeight>;
}

/// **Mutable** capability: add/remove vertices and edges.
///
/// `add_edge` referencing an unknown endpoint returns `None`
/// (`invalid-endpoint`, never silently creating a vertex).
pub trait Build: Data + NodeCount {
    fn add_node(&mut self, weight: Self::NodeWeight) -> Self::NodeId;
    fn add_edge(
        &mut self,
        a: Self::NodeId,
        b: Self::NodeId,
        weight: Self::EdgeWeight,
    ) -> Option<Self::EdgeId>;
}

/// A boolean "have I seen this node" map, reusable across traversal
/// restarts without reallocating.
pub trait VisitMap<N> {
    /// Mark `a` visited; return `true` if this is the first time.
    fn visit(&mut self, a: N) -> bool;
    fn is_visited(&self, a: &N) -> bool;
}

impl VisitMap<usize> for fixedbitset::FixedBitSet {
    fn visit(&mut self, a: usize) -> bool {
        !self.put(a)
    }
    fn is_visited(&self, a: &usize) -> bool {
        self.contains(*a)
    }
}

impl<N> VisitMap<N> for hashbrown::HashSet<N>
where
    N: core::hash::Hash + Eq,
{
    fn visit(&mut self, a: N) -> bool {
        self.insert(a)
    }
    fn is_visited(&self, a: &N) -> bool {
        self.contains(a)
    }
}

/// A graph that can hand out a fresh [`VisitMap`] sized to its own node
/// space — the source of the "discovered" / "closed" sets every
/// traversal and relaxation-based algorithm needs.
pub trait Visitable: GraphBase {
    type Map: VisitMap<Self::NodeId>;
    fn visit_map(&self) -> Self::Map;
    fn reset_map(&self, map: &mut Self::Map);
}
