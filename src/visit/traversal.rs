//! Lazy, restartable traversal and search.
//!
//! Every type here is a state machine whose `.next(graph)` method advances
//! the frontier by exactly one examination and returns the next node (or
//! a richer [`SearchState`] for the cost-aware searches). Dropping the
//! traversal is how a caller cancels it — there is no separate cancel
//! method (see the crate's concurrency/resource notes).

use std::collections::{BinaryHeap, VecDeque};

use super::visitor::{Control, Visitor};
use super::{Direction, EdgeRef, GraphRef, IntoEdges, IntoNeighbors, IntoNeighborsDirected,
    IntoNodeIdentifiers, NodeIndexable, Visitable, VisitMap};
use crate::scored::MinScored;

/// A depth-first-search, preorder, node-id-only traversal.
///
/// Not recursive: the frontier is an explicit `Vec` used as a stack. Does
/// not borrow the graph, so a caller may retain mutable access between
/// calls to `next`, as in `petgraph::visit::Dfs`.
#[derive(Clone, Debug)]
pub struct Dfs<N, VM> {
    pub stack: Vec<N>,
    pub discovered: VM,
}

impl<N, VM> Dfs<N, VM>
where
    N: Copy,
    VM: VisitMap<N>,
{
    pub fn new<G>(graph: G, start: N) -> Self
    where
        G: GraphRef + Visitable<NodeId = N, Map = VM>,
    {
        let mut dfs = Self::empty(graph);
        dfs.move_to(start);
        dfs
    }

    pub fn empty<G>(graph: G) -> Self
    where
        G: GraphRef + Visitable<NodeId = N, Map = VM>,
    {
        Dfs {
            stack: Vec::new(),
            discovered: graph.visit_map(),
        }
    }

    pub fn move_to(&mut self, start: N) {
        self.discovered.visit(start);
        self.stack.clear();
        self.stack.push(start);
    }

    /// Return the next node in preorder, or `None` when the traversal from
    /// the current frontier is exhausted.
    pub fn next<G>(&mut self, graph: G) -> Option<N>
    where
        G: IntoNeighbors<NodeId = N>,
    {
        let node = self.stack.pop()?;
        for succ in graph.neighbors(node) {
            if self.discovered.visit(succ) {
                self.stack.push(succ);
            }
        }
        Some(node)
    }
}

/// A depth-first-search, postorder (each node emitted once every
/// descendant has finished) traversal. Not recursive.
#[derive(Clone, Debug)]
pub struct DfsPostOrder<N, VM> {
    pub stack: Vec<N>,
    pub discovered: VM,
    pub finished: VM,
}

impl<N, VM> DfsPostOrder<N, VM>
where
    N: Copy,
    VM: VisitMap<N>,
{
    pub fn new<G>(graph: G, start: N) -> Self
    where
        G: GraphRef + Visitable<NodeId = N, Map = VM>,
    {
        let mut dfs = Self::empty(graph);
        dfs.move_to(start);
        dfs
    }

    pub fn empty<G>(graph: G) -> Self
    where
        G: GraphRef + Visitable<NodeId = N, Map = VM>,
    {
        DfsPostOrder {
            stack: Vec::new(),
            discovered: graph.visit_map(),
            finished: graph.visit_map(),
        }
    }

    pub fn move_to(&mut self, start: N) {
        self.stack.clear();
        self.stack.push(start);
    }

    pub fn next<G>(&mut self, graph: G) -> Option<N>
    where
        G: IntoNeighbors<NodeId = N>,
    {
        while let Some(&nx) = self.stack.last() {
            if self.discovered.visit(nx) {
                for succ in graph.neighbors(nx) {
                    if !self.discovered.is_visited(&succ) {
                        self.stack.push(succ);
                    }
                }
            } else {
                self.stack.pop();
                if self.finished.visit(nx) {
                    return Some(nx);
                }
            }
        }
        None
    }
}

/// A breadth-first-search traversal. FIFO frontier, level-order discovery.
///
/// Does not track per-node depth itself — callers who need `depth(v)`
/// (the BFS level) pair this with their own `V -> usize` map, set to `0`
/// for the start and `depth[u] + 1` whenever `next` discovers `v` via a
/// tree edge from `u`; see [`crate::algo::centrality::closeness`] for an
/// example.
#[derive(Clone, Debug)]
pub struct Bfs<N, VM> {
    pub queue: VecDeque<N>,
    pub discovered: VM,
}

impl<N, VM> Bfs<N, VM>
where
    N: Copy,
    VM: VisitMap<N>,
{
    pub fn new<G>(graph: G, start: N) -> Self
    where
        G: GraphRef + Visitable<NodeId = N, Map = VM>,
    {
        let mut discovered = graph.visit_map();
        discovered.visit(start);
        let mut queue = VecDeque::new();
        queue.push_back(start);
        Bfs { queue, discovered }
    }

    /// Return the next node in level order, or `None` if exhausted.
    pub fn next<G>(&mut self, graph: G) -> Option<N>
    where
        G: IntoNeighbors<NodeId = N>,
    {
        let node = self.queue.pop_front()?;
        for succ in graph.neighbors(node) {
            if self.discovered.visit(succ) {
                self.queue.push_back(succ);
            }
        }
        Some(node)
    }
}

/// A topological-order traversal of a (supposed) DAG.
///
/// Only visits nodes that are not part of a cycle; use [`Topo`] to
/// observe whether the full node set was produced, or
/// [`crate::algo::connectivity::toposort`] for the cycle-detecting form
/// that reports the residual set.
#[derive(Clone, Debug)]
pub struct Topo<N, VM> {
    tovisit: Vec<N>,
    ordered: VM,
}

impl<N, VM> Topo<N, VM>
where
    N: Copy,
    VM: VisitMap<N>,
{
    pub fn new<G>(graph: G) -> Self
    where
        G: IntoNodeIdentifiers<NodeId = N> + IntoNeighborsDirected<NodeId = N>
            + Visitable<NodeId = N, Map = VM>,
    {
        let mut topo = Topo {
            ordered: graph.visit_map(),
            tovisit: Vec::new(),
        };
        topo.tovisit.extend(
            graph
                .node_identifiers()
                .filter(|&n| graph.neighbors_directed(n, Direction::Incoming).next().is_none()),
        );
        topo
    }

    pub fn next<G>(&mut self, graph: G) -> Option<N>
    where
        G: IntoNeighborsDirected<NodeId = N> + Visitable<NodeId = N, Map = VM>,
    {
        while let Some(nix) = self.tovisit.pop() {
            if self.ordered.is_visited(&nix) {
                continue;
            }
            self.ordered.visit(nix);
            for neigh in graph.neighbors_directed(nix, Direction::Outgoing) {
                if graph
                    .neighbors_directed(neigh, Direction::Incoming)
                    .all(|b| self.ordered.is_visited(&b))
                {
                    self.tovisit.push(neigh);
                }
            }
            return Some(nix);
        }
        None
    }
}

/// The event stream of a full depth-first search with edge classification
/// — the basis the [`Visitor`](super::Visitor) protocol is built on.
/// [`depth_first_search_visitor`] adapts this stream into `Visitor` calls.
#[derive(Copy, Clone, Debug)]
pub enum DfsEvent<N, E> {
    Discover(N),
    ExamineVertex(N),
    Examine(E),
    TreeEdge(E),
    BackEdge(E),
    ForwardEdge(E),
    CrossEdge(E),
    Finish(N),
}

/// Run a full depth-first search from `starts`, classifying every
/// non-tree edge as a back/forward/cross edge (requires [`NodeIndexable`]
/// to track discovery order densely). `visit` is called once per event;
/// returning [`Control::Break`] stops the whole search early.
pub fn depth_first_search<G, I, F>(graph: G, starts: I, mut visit: F) -> Control
where
    G: IntoEdges + Visitable + NodeIndexable,
    I: IntoIterator<Item = G::NodeId>,
    F: FnMut(DfsEvent<G::NodeId, G::EdgeId>) -> Control,
{
    let mut discovered = graph.visit_map();
    let mut finished = graph.visit_map();
    let mut disc_order: Vec<Option<u32>> = vec![None; graph.node_bound()];
    let mut counter: u32 = 0;
    let mut stack: Vec<(G::NodeId, G::Edges)> = Vec::new();

    for start in starts {
        if !discovered.visit(start) {
            continue;
        }
        disc_order[graph.to_index(start)] = Some(counter);
        counter += 1;
        if visit(DfsEvent::Discover(start)).should_break() {
            return Control::Break;
        }
        if visit(DfsEvent::ExamineVertex(start)).should_break() {
            return Control::Break;
        }
        stack.push((start, graph.edges(start)));

        while let Some(frame) = stack.last_mut() {
            let edges = &mut frame.1;
            let mut pushed = None;
            for edge in edges {
                match visit(DfsEvent::Examine(edge.id())) {
                    Control::Break => return Control::Break,
                    Control::Prune => continue,
                    Control::Continue => {}
                }
                let v = edge.target();
                if discovered.visit(v) {
                    disc_order[graph.to_index(v)] = Some(counter);
                    counter += 1;
                    if visit(DfsEvent::TreeEdge(edge.id())).should_break() {
                        return Control::Break;
                    }
                    if visit(DfsEvent::Discover(v)).should_break() {
                        return Control::Break;
                    }
                    if visit(DfsEvent::ExamineVertex(v)).should_break() {
                        return Control::Break;
                    }
                    pushed = Some(v);
                    break;
                } else if !finished.is_visited(&v) {
                    if visit(DfsEvent::BackEdge(edge.id())).should_break() {
                        return Control::Break;
                    }
                } else {
                    let u = frame.0;
                    let forward = disc_order[graph.to_index(u)] < disc_order[graph.to_index(v)];
                    let event = if forward {
                        DfsEvent::ForwardEdge(edge.id())
                    } else {
                        DfsEvent::CrossEdge(edge.id())
                    };
                    if visit(event).should_break() {
                        return Control::Break;
                    }
                }
            }
            match pushed {
                Some(v) => stack.push((v, graph.edges(v))),
                None => {
                    let (u, _) = stack.pop().unwrap();
                    finished.visit(u);
                    if visit(DfsEvent::Finish(u)).should_break() {
                        return Control::Break;
                    }
                }
            }
        }
    }
    Control::Continue
}

/// Adapts a [`Visitor`] into [`depth_first_search`]'s event-callback shape,
/// so the visitor protocol's DFS callbacks (`discover-vertex`,
/// `examine-vertex`, `examine-edge`, `tree-edge`, `back-edge`,
/// `forward-edge`, `cross-edge`, `finish-vertex`) are reachable without
/// hand-rolling a `DfsEvent` match at every call site.
pub fn depth_first_search_visitor<G, I, Vis>(graph: G, starts: I, visitor: &mut Vis) -> Control
where
    G: IntoEdges + Visitable + NodeIndexable,
    I: IntoIterator<Item = G::NodeId>,
    Vis: Visitor<G::NodeId, G::EdgeId>,
{
    depth_first_search(graph, starts, |event| match event {
        DfsEvent::Discover(v) => visitor.discover_vertex(v),
        DfsEvent::ExamineVertex(v) => visitor.examine_vertex(v),
        DfsEvent::Examine(e) => visitor.examine_edge(e),
        DfsEvent::TreeEdge(e) => visitor.tree_edge(e),
        DfsEvent::BackEdge(e) => visitor.back_edge(e),
        DfsEvent::ForwardEdge(e) => visitor.forward_edge(e),
        DfsEvent::CrossEdge(e) => visitor.cross_edge(e),
        DfsEvent::Finish(v) => visitor.finish_vertex(v),
    })
}

/// A breadth-first search driven directly by a [`Visitor`]: fires
/// `discover_vertex` the first time a node enters the FIFO frontier,
/// `examine_vertex` when it's popped, and `examine_edge`/`tree_edge` for
/// each out-edge considered from the examined vertex. Returning
/// [`Control::Prune`] from `examine_vertex` skips that vertex's out-edges;
/// [`Control::Break`] from any callback stops the search and returns
/// immediately.
pub fn breadth_first_search<G, I, Vis>(graph: G, starts: I, visitor: &mut Vis) -> Control
where
    G: IntoEdges + Visitable,
    I: IntoIterator<Item = G::NodeId>,
    Vis: Visitor<G::NodeId, G::EdgeId>,
{
    let mut discovered = graph.visit_map();
    let mut queue: VecDeque<G::NodeId> = VecDeque::new();

    for start in starts {
        if !discovered.visit(start) {
            continue;
        }
        if visitor.discover_vertex(start).should_break() {
            return Control::Break;
        }
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            let control = visitor.examine_vertex(node);
            if control.should_break() {
                return Control::Break;
            }
            if control.should_prune() {
                continue;
            }
            for edge in graph.edges(node) {
                if visitor.examine_edge(edge.id()).should_break() {
                    return Control::Break;
                }
                let next = edge.target();
                if discovered.visit(next) {
                    if visitor.tree_edge(edge.id()).should_break() {
                        return Control::Break;
                    }
                    if visitor.discover_vertex(next).should_break() {
                        return Control::Break;
                    }
                    queue.push_back(next);
                }
            }
        }
    }
    Control::Continue
}

/// An immutable snapshot produced at each step of a cost-aware search
/// (uniform-cost search / best-first / A*): the vertex examined, its
/// cost from the source, and the number of examinations so far.
#[derive(Copy, Clone, Debug)]
pub struct SearchState<N, K> {
    pub node: N,
    pub cost: K,
    pub examined: usize,
}

/// Shared engine behind uniform-cost search, best-first search, and A*:
/// a min-heap frontier keyed by a caller-supplied priority, a `g`-cost map,
/// and a closed set. See [`crate::algo::shortest_paths`] for the
/// shortest-path specializations built on the same shape.
struct PriorityFrontier<N, K> {
    heap: BinaryHeap<MinScored<K, N>>,
    g: hashbrown::HashMap<N, K>,
    closed: hashbrown::HashSet<N>,
    examined: usize,
}

impl<N, K> PriorityFrontier<N, K>
where
    N: Copy + core::hash::Hash + Eq,
    K: Copy + PartialOrd,
{
    fn new(start: N, zero: K) -> Self {
        let mut heap = BinaryHeap::new();
        heap.push(MinScored(zero, start));
        let mut g = hashbrown::HashMap::new();
        g.insert(start, zero);
        PriorityFrontier {
            heap,
            g,
            closed: hashbrown::HashSet::new(),
            examined: 0,
        }
    }
}

/// Uniform-cost search: a restartable lazy sequence of [`SearchState`]s in
/// non-decreasing cost order from the source. Equivalent to Dijkstra
/// driven one pop at a time.
pub struct UniformCostSearch<N, K> {
    frontier: PriorityFrontier<N, K>,
}

impl<N, K> UniformCostSearch<N, K>
where
    N: Copy + core::hash::Hash + Eq,
    K: Copy + PartialOrd + core::ops::Add<Output = K> + Default,
{
    pub fn new(start: N) -> Self {
        UniformCostSearch {
            frontier: PriorityFrontier::new(start, K::default()),
        }
    }

    pub fn next<G, F>(&mut self, graph: G, mut edge_cost: F) -> Option<SearchState<N, K>>
    where
        G: IntoEdges<NodeId = N>,
        F: FnMut(G::EdgeRef) -> K,
    {
        loop {
            let MinScored(cost, node) = self.frontier.heap.pop()?;
            if !self.frontier.closed.insert(node) {
                continue;
            }
            self.frontier.examined += 1;
            for edge in graph.edges(node) {
                let next = edge.target();
                if self.frontier.closed.contains(&next) {
                    continue;
                }
                let next_cost = cost + edge_cost(edge);
                let better = match self.frontier.g.get(&next) {
                    Some(&known) => next_cost < known,
                    None => true,
                };
                if better {
                    self.frontier.g.insert(next, next_cost);
                    self.frontier.heap.push(MinScored(next_cost, next));
                }
            }
            return Some(SearchState {
                node,
                cost,
                examined: self.frontier.examined,
            });
        }
    }
}

/// A* search: like [`UniformCostSearch`], but the heap priority is
/// `combine(g, heuristic(v))` instead of bare `g`. `combine` defaults to
/// addition but can be any function, to support a `g`/`h` of different
/// numeric types.
pub struct AStarSearch<N, K> {
    frontier: PriorityFrontier<N, K>,
}

impl<N, K> AStarSearch<N, K>
where
    N: Copy + core::hash::Hash + Eq,
    K: Copy + PartialOrd + core::ops::Add<Output = K> + Default,
{
    pub fn new(start: N) -> Self {
        AStarSearch {
            frontier: PriorityFrontier::new(start, K::default()),
        }
    }

    pub fn next<G, F, H, C>(
        &mut self,
        graph: G,
        mut edge_cost: F,
        mut heuristic: H,
        mut combine: C,
    ) -> Option<SearchState<N, K>>
    where
        G: IntoEdges<NodeId = N>,
        F: FnMut(G::EdgeRef) -> K,
        H: FnMut(N) -> K,
        C: FnMut(K, K) -> K,
    {
        loop {
            let MinScored(_, node) = self.frontier.heap.pop()?;
            if !self.frontier.closed.insert(node) {
                continue;
            }
            self.frontier.examined += 1;
            let cost = *self.frontier.g.get(&node).expect("popped node has a g-cost");
            for edge in graph.edges(node) {
                let next = edge.target();
                if self.frontier.closed.contains(&next) {
                    continue;
                }
                let next_cost = cost + edge_cost(edge);
                let better = match self.frontier.g.get(&next) {
                    Some(&known) => next_cost < known,
                    None => true,
                };
                if better {
                    self.frontier.g.insert(next, next_cost);
                    let priority = combine(next_cost, heuristic(next));
                    self.frontier.heap.push(MinScored(priority, next));
                }
            }
            return Some(SearchState {
                node,
                cost,
                examined: self.frontier.examined,
            });
        }
    }
}

/// Best-first search: frontier priority is `heuristic(v)` alone, ignoring
/// accumulated path cost. Not guaranteed optimal; useful when only a
/// plausible-looking path, not the cheapest one, is wanted.
pub struct BestFirstSearch<N, K> {
    heap: BinaryHeap<MinScored<K, N>>,
    discovered: hashbrown::HashSet<N>,
    closed: hashbrown::HashSet<N>,
    examined: usize,
}

impl<N, K> BestFirstSearch<N, K>
where
    N: Copy + core::hash::Hash + Eq,
    K: Copy + PartialOrd,
{
    pub fn new(start: N, h_start: K) -> Self {
        let mut heap = BinaryHeap::new();
        heap.push(MinScored(h_start, start));
        let mut discovered = hashbrown::HashSet::new();
        discovered.insert(start);
        BestFirstSearch {
            heap,
            discovered,
            closed: hashbrown::HashSet::new(),
            examined: 0,
        }
    }

    pub fn next<G, H>(&mut self, graph: G, mut heuristic: H) -> Option<N>
    where
        G: IntoNeighbors<NodeId = N>,
        H: FnMut(N) -> K,
    {
        loop {
            let MinScored(_, node) = self.heap.pop()?;
            if !self.closed.insert(node) {
                continue;
            }
            self.examined += 1;
            for next in graph.neighbors(node) {
                if self.discovered.insert(next) {
                    self.heap.push(MinScored(heuristic(next), next));
                }
            }
            return Some(node);
        }
    }
}

/// Depth-limited DFS: like [`Dfs`], but never expands a node beyond
/// `max_depth` edges from the start. Tracks whether any node at
/// `max_depth` had an undiscovered neighbor the limit kept it from
/// reaching, via [`DepthLimitedDfs::hit_depth_limit`] — the signal
/// [`iterative_deepening_dfs`] uses to know whether deepening further
/// could still discover something new.
#[derive(Clone, Debug)]
pub struct DepthLimitedDfs<N, VM> {
    stack: Vec<(N, usize)>,
    discovered: VM,
    max_depth: usize,
    hit_limit: bool,
}

impl<N, VM> DepthLimitedDfs<N, VM>
where
    N: Copy,
    VM: VisitMap<N>,
{
    pub fn new<G>(graph: G, start: N, max_depth: usize) -> Self
    where
        G: GraphRef + Visitable<NodeId = N, Map = VM>,
    {
        let mut discovered = graph.visit_map();
        discovered.visit(start);
        DepthLimitedDfs {
            stack: vec![(start, 0)],
            discovered,
            max_depth,
            hit_limit: false,
        }
    }

    /// `true` if some node at `max_depth` had a neighbor this pass never
    /// discovered because the depth limit cut it off. `false` means this
    /// pass explored everything reachable from the start without being
    /// truncated — deepening further would find nothing new.
    pub fn hit_depth_limit(&self) -> bool {
        self.hit_limit
    }

    pub fn next<G>(&mut self, graph: G) -> Option<N>
    where
        G: IntoNeighbors<NodeId = N>,
    {
        let (node, depth) = self.stack.pop()?;
        if depth < self.max_depth {
            for succ in graph.neighbors(node) {
                if self.discovered.visit(succ) {
                    self.stack.push((succ, depth + 1));
                }
            }
        } else if graph.neighbors(node).any(|succ| !self.discovered.is_visited(&succ)) {
            self.hit_limit = true;
        }
        Some(node)
    }
}

/// Iterative-deepening DFS: runs [`DepthLimitedDfs`] for
/// `d = 0, 1, 2, ...` until `is_done` returns `true` for the last-visited
/// node, or a full sweep at the current depth reaches every reachable
/// node without the depth limit cutting anything off (the graph is
/// exhausted — see [`DepthLimitedDfs::hit_depth_limit`]). Nodes may
/// repeat across iterations by design — this is the expected IDDFS trade
/// of repeated shallow work for bounded memory.
pub fn iterative_deepening_dfs<G, D>(
    graph: G,
    start: G::NodeId,
    mut is_done: D,
) -> Option<(G::NodeId, usize)>
where
    G: IntoNeighbors + Visitable + Copy,
    D: FnMut(G::NodeId) -> bool,
{
    for depth in 0.. {
        let mut dl = DepthLimitedDfs::<G::NodeId, G::Map>::new(graph, start, depth);
        while let Some(node) = dl.next(graph) {
            if is_done(node) {
                return Some((node, depth));
            }
        }
        if !dl.hit_depth_limit() {
            return None;
        }
    }
    None
}

/// Type alias used by [`iterative_deepening_dfs`]'s callers who want the
/// named traversal type rather than the free function, mirroring the
/// struct-based shape of the other searches in this module.
pub struct IterativeDeepeningDfs;

impl IterativeDeepeningDfs {
    pub fn run<G, D>(graph: G, start: G::NodeId, is_done: D) -> Option<(G::NodeId, usize)>
    where
        G: IntoNeighbors + Visitable + Copy,
        D: FnMut(G::NodeId) -> bool,
    {
        iterative_deepening_dfs(graph, start, is_done)
    }
}
