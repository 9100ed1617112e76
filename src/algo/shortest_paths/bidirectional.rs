//! Bidirectional Dijkstra: two Dijkstra frontiers, forward from
//! the source and backward from the destination over in-edges, meeting
//! in the middle.
//!
//! A subtlety in the backward-path reconstruction: the backward
//! predecessor map is walked via `edge.target()`, the side nearer the
//! original destination, not `edge.source()`.

use core::hash::Hash;

use hashbrown::HashMap;
use std::collections::BinaryHeap;

use super::path::Path;
use crate::data::Measure;
use crate::scored::MinScored;
use crate::visit::{Direction, EdgeRef, IntoEdgesDirected, VisitMap, Visitable};

/// Shortest path from `source` to `destination`, or `None` (*no-path*).
pub fn bidirectional_dijkstra<G, F, K>(
    graph: G,
    source: G::NodeId,
    destination: G::NodeId,
    mut edge_cost: F,
) -> Option<Path<G::NodeId, G::EdgeRef>>
where
    G: IntoEdgesDirected + Visitable,
    G::NodeId: Eq + Hash + Copy,
    F: FnMut(G::EdgeRef) -> K,
    K: Measure + Copy,
{
    if source == destination {
        return Some(Path {
            source,
            destination,
            edges: Vec::new(),
        });
    }

    let mut forward_dist = HashMap::new();
    let mut forward_pred: HashMap<G::NodeId, G::EdgeRef> = HashMap::new();
    let mut forward_closed = graph.visit_map();
    let mut forward_heap = BinaryHeap::new();
    forward_dist.insert(source, K::default());
    forward_heap.push(MinScored(K::default(), source));

    let mut backward_dist = HashMap::new();
    let mut backward_pred: HashMap<G::NodeId, G::EdgeRef> = HashMap::new();
    let mut backward_closed = graph.visit_map();
    let mut backward_heap = BinaryHeap::new();
    backward_dist.insert(destination, K::default());
    backward_heap.push(MinScored(K::default(), destination));

    let mut mu: Option<K> = None;
    let mut meeting: Option<G::NodeId> = None;

    loop {
        let forward_min = forward_heap.peek().map(|MinScored(d, _)| *d);
        let backward_min = backward_heap.peek().map(|MinScored(d, _)| *d);
        let (forward_min, backward_min) = match (forward_min, backward_min) {
            (Some(f), Some(b)) => (f, b),
            _ => break,
        };
        if let Some(best) = mu {
            if forward_min + backward_min >= best {
                break;
            }
        }

        if forward_min <= backward_min {
            let MinScored(d, node) = forward_heap.pop().unwrap();
            if !forward_closed.visit(node) {
                continue;
            }
            for edge in graph.edges_directed(node, Direction::Outgoing) {
                let next = edge.target();
                if forward_closed.is_visited(&next) {
                    continue;
                }
                let alt = d + edge_cost(edge);
                let better = match forward_dist.get(&next) {
                    Some(&known) => alt < known,
                    None => true,
                };
                if better {
                    forward_dist.insert(next, alt);
                    forward_pred.insert(next, edge);
                    forward_heap.push(MinScored(alt, next));
                }
                if let Some(&bd) = backward_dist.get(&next) {
                    let candidate = alt + bd;
                    if mu.map_or(true, |m| candidate < m) {
                        mu = Some(candidate);
                        meeting = Some(next);
                    }
                }
            }
        } else {
            let MinScored(d, node) = backward_heap.pop().unwrap();
            if !backward_closed.visit(node) {
                continue;
            }
            for edge in graph.edges_directed(node, Direction::Incoming) {
                let prev = edge.source();
                if backward_closed.is_visited(&prev) {
                    continue;
                }
                let alt = d + edge_cost(edge);
                let better = match backward_dist.get(&prev) {
                    Some(&known) => alt < known,
                    None => true,
                };
                if better {
                    backward_dist.insert(prev, alt);
                    backward_pred.insert(prev, edge);
                    backward_heap.push(MinScored(alt, prev));
                }
                if let Some(&fd) = forward_dist.get(&prev) {
                    let candidate = alt + fd;
                    if mu.map_or(true, |m| candidate < m) {
                        mu = Some(candidate);
                        meeting = Some(prev);
                    }
                }
            }
        }
    }

    let meeting = meeting?;

    let mut edges = Vec::new();
    let mut current = meeting;
    while current != source {
        let edge = *forward_pred.get(&current)?;
        edges.push(edge);
        current = edge.source();
    }
    edges.reverse();

    let mut current = meeting;
    while current != destination {
        // The backward predecessor map was built walking in-edges, so
        // `backward_pred[v]` is the edge `v -> next` where `next` is
        // already known on the destination side; step toward the
        // destination via the edge's target.
        let edge = *backward_pred.get(&current)?;
        edges.push(edge);
        current = edge.target();
    }

    Some(Path {
        source,
        destination,
        edges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraph;

    #[test]
    fn matches_plain_dijkstra() {
        let mut g: DiGraph<(), u32> = DiGraph::new();
        let nodes: Vec<_> = (0..5).map(|_| g.add_node(())).collect();
        g.add_edge(nodes[0], nodes[1], 1).unwrap();
        g.add_edge(nodes[1], nodes[2], 1).unwrap();
        g.add_edge(nodes[2], nodes[3], 1).unwrap();
        g.add_edge(nodes[3], nodes[4], 1).unwrap();
        g.add_edge(nodes[0], nodes[4], 10).unwrap();

        let path = bidirectional_dijkstra(&g, nodes[0], nodes[4], |e| *e.weight()).unwrap();
        assert_eq!(path.cost(0u32, |e| *e.weight()), 4);
        assert_eq!(path.edges.len(), 4);
        assert_eq!(path.edges.first().unwrap().source(), nodes[0]);
        assert_eq!(path.edges.last().unwrap().target(), nodes[4]);
    }

    #[test]
    fn no_path_when_unreachable() {
        let mut g: DiGraph<(), u32> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        assert!(bidirectional_dijkstra(&g, a, b, |e| *e.weight()).is_none());
    }
}
