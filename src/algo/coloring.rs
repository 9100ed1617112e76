//! Graph coloring: greedy, DSatur, Welsh-Powell, and sequential
//! coloring driven by an injected vertex order (smallest-last or
//! reverse Cuthill-McKee). A *coloring* is total map `V ->
//! color-id`; *proper* means no edge joins two same-colored vertices.
//! All four return a `HashMap<NodeId, usize>` plus the count of distinct
//! colors used (the achieved chromatic number, not necessarily minimal —
//! these are all heuristics).

use hashbrown::{HashMap, HashSet};

use crate::visit::{IntoNeighbors, IntoNodeIdentifiers, NodeIndexable};

/// The result of a coloring heuristic: the color assigned to each
/// vertex, and the count of distinct colors used.
#[derive(Clone, Debug)]
pub struct Coloring<N> {
    pub colors: HashMap<N, usize>,
    pub color_count: usize,
}

fn smallest_feasible_color<N>(
    neighbor_colors: impl Iterator<Item = N>,
    colors: &HashMap<N, usize>,
) -> usize
where
    N: core::hash::Hash + Eq,
{
    let used: HashSet<usize> = neighbor_colors.filter_map(|n| colors.get(&n).copied()).collect();
    let mut candidate = 0;
    while used.contains(&candidate) {
        candidate += 1;
    }
    candidate
}

/// Greedy coloring in the given vertex order: assign each vertex the
/// smallest color id not already used by a colored neighbor.
pub fn greedy_coloring<G, I>(graph: G, order: I) -> Coloring<G::NodeId>
where
    G: IntoNeighbors,
    I: IntoIterator<Item = G::NodeId>,
    G::NodeId: core::hash::Hash + Eq + Copy,
{
    let mut colors = HashMap::new();
    let mut max_color = 0usize;
    for v in order {
        let c = smallest_feasible_color(graph.neighbors(v), &colors);
        max_color = max_color.max(c + 1);
        colors.insert(v, c);
    }
    Coloring {
        colors,
        color_count: max_color,
    }
}

/// Greedy coloring in a caller-supplied vertex order — the "sequential
/// with ordering" strategy, meant to be driven by
/// [`crate::algo::ordering::smallest_last_order`] or
/// [`crate::algo::ordering::reverse_cuthill_mckee`].
pub fn sequential_with_ordering<G>(graph: G, order: Vec<G::NodeId>) -> Coloring<G::NodeId>
where
    G: IntoNeighbors,
    G::NodeId: core::hash::Hash + Eq + Copy,
{
    greedy_coloring(graph, order)
}

/// DSatur: repeatedly color the uncolored vertex with the highest
/// saturation degree (distinct colors among colored neighbors), ties
/// broken by highest remaining degree, then by node index.
pub fn dsatur_coloring<G>(graph: G) -> Coloring<G::NodeId>
where
    G: IntoNodeIdentifiers + IntoNeighbors + NodeIndexable,
{
    let mut colors: HashMap<G::NodeId, usize> = HashMap::new();
    let mut saturation: HashMap<G::NodeId, HashSet<usize>> = HashMap::new();
    let mut degree: HashMap<G::NodeId, usize> = HashMap::new();
    let mut uncolored: HashSet<G::NodeId> = HashSet::new();

    for v in graph.node_identifiers() {
        degree.insert(v, graph.neighbors(v).count());
        saturation.insert(v, HashSet::new());
        uncolored.insert(v);
    }

    let mut max_color = 0usize;
    while !uncolored.is_empty() {
        let next = *uncolored
            .iter()
            .max_by(|&&a, &&b| {
                let sat_a = saturation[&a].len();
                let sat_b = saturation[&b].len();
                sat_a
                    .cmp(&sat_b)
                    .then(degree[&a].cmp(&degree[&b]))
                    .then(graph.to_index(b).cmp(&graph.to_index(a)))
            })
            .unwrap();

        let c = smallest_feasible_color(graph.neighbors(next), &colors);
        max_color = max_color.max(c + 1);
        colors.insert(next, c);
        uncolored.remove(&next);

        for u in graph.neighbors(next) {
            if let Some(sat) = saturation.get_mut(&u) {
                sat.insert(c);
            }
        }
    }

    Coloring {
        colors,
        color_count: max_color,
    }
}

/// Welsh-Powell: sort vertices by descending degree; repeatedly pick the
/// first uncolored vertex, open a new color, and sweep the remaining
/// sorted order assigning that color to every vertex not adjacent to any
/// vertex already colored this round.
pub fn welsh_powell_coloring<G>(graph: G) -> Coloring<G::NodeId>
where
    G: IntoNodeIdentifiers + IntoNeighbors,
    G::NodeId: core::hash::Hash + Eq + Copy,
{
    let mut order: Vec<G::NodeId> = graph.node_identifiers().collect();
    order.sort_by_key(|&v| core::cmp::Reverse(graph.neighbors(v).count()));

    let mut colors: HashMap<G::NodeId, usize> = HashMap::new();
    let mut color = 0usize;

    loop {
        let Some(&start) = order.iter().find(|v| !colors.contains_key(v)) else {
            break;
        };
        let mut this_color_class: HashSet<G::NodeId> = HashSet::new();
        colors.insert(start, color);
        this_color_class.insert(start);

        for &v in &order {
            if colors.contains_key(&v) {
                continue;
            }
            let adjacent_to_class = graph.neighbors(v).any(|u| this_color_class.contains(&u));
            if !adjacent_to_class {
                colors.insert(v, color);
                this_color_class.insert(v);
            }
        }
        color += 1;
    }

    Coloring {
        colors,
        color_count: color,
    }
}

/// `true` if `coloring` is proper for `graph`: no edge joins two
/// same-colored vertices.
pub fn is_proper<G>(graph: G, coloring: &Coloring<G::NodeId>) -> bool
where
    G: IntoNodeIdentifiers + IntoNeighbors,
    G::NodeId: core::hash::Hash + Eq,
{
    graph.node_identifiers().all(|v| {
        let Some(&cv) = coloring.colors.get(&v) else {
            return false;
        };
        graph
            .neighbors(v)
            .all(|u| coloring.colors.get(&u).map_or(true, |&cu| cu != cv))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::ordering::smallest_last_order;
    use crate::graph::UnGraph;

    fn hexagon() -> (UnGraph<(), ()>, Vec<crate::graph::NodeIndex>) {
        let mut g: UnGraph<(), ()> = UnGraph::new_undirected();
        let nodes: Vec<_> = (0..6).map(|_| g.add_node(())).collect();
        for i in 0..6 {
            g.add_edge(nodes[i], nodes[(i + 1) % 6], ()).unwrap();
        }
        (g, nodes)
    }

    #[test]
    fn greedy_properly_colors_a_cycle() {
        let (g, nodes) = hexagon();
        let result = greedy_coloring(&g, nodes.clone());
        assert!(is_proper(&g, &result));
        assert_eq!(result.color_count, 2);
    }

    #[test]
    fn dsatur_properly_colors_a_cycle() {
        let (g, _) = hexagon();
        let result = dsatur_coloring(&g);
        assert!(is_proper(&g, &result));
    }

    #[test]
    fn welsh_powell_properly_colors_a_cycle() {
        let (g, _) = hexagon();
        let result = welsh_powell_coloring(&g);
        assert!(is_proper(&g, &result));
    }

    #[test]
    fn sequential_with_smallest_last_order_is_proper() {
        let (g, _) = hexagon();
        let order = smallest_last_order(&g);
        let result = sequential_with_ordering(&g, order);
        assert!(is_proper(&g, &result));
    }

    #[test]
    fn triangle_needs_three_colors() {
        let mut g: UnGraph<(), ()> = UnGraph::new_undirected();
        let nodes: Vec<_> = (0..3).map(|_| g.add_node(())).collect();
        g.add_edge(nodes[0], nodes[1], ()).unwrap();
        g.add_edge(nodes[1], nodes[2], ()).unwrap();
        g.add_edge(nodes[2], nodes[0], ()).unwrap();

        let result = dsatur_coloring(&g);
        assert_eq!(result.color_count, 3);
    }
}
