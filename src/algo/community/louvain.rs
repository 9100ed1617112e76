//! Louvain community detection: repeat two phases until neither
//! changes anything. Phase 1 (local moving) starts every vertex in its
//! own community and repeatedly moves a vertex into whichever neighbor
//! community yields the greatest modularity gain, until no move helps.
//! Phase 2 contracts each community into a super-vertex, with inter-
//! community edge weight the sum across merged edges and intra-community
//! edges folded into a weighted self-loop. Modularity is generalized by
//! an injectable resolution parameter gamma (`Q = (1/2m) sum_ij [A_ij -
//! gamma*k_i*k_j/2m] delta(c_i, c_j)`).

use core::hash::Hash;

use hashbrown::{HashMap, HashSet};

use crate::visit::{EdgeRef, IntoEdgeReferences, IntoNodeIdentifiers, NodeCompactIndexable};

/// The partition a Louvain run settles on: each final community's
/// members, the per-vertex membership lookup, and the modularity the
/// partition achieves.
#[derive(Clone, Debug)]
pub struct LouvainResult<N> {
    pub communities: Vec<HashSet<N>>,
    pub membership: HashMap<N, usize>,
    pub modularity: f64,
}

/// Build a symmetric weighted-adjacency map plus a degree vector over
/// the dense index space `0..n`. A self-loop's weight is stored doubled
/// (`2w`) on its own diagonal entry so that `degree[v] == sum(adj[v])`
/// holds uniformly at every contraction level — the same convention a
/// contracted self-loop naturally produces.
fn build_adjacency<G, F>(graph: G, mut edge_cost: F) -> (Vec<HashMap<usize, f64>>, Vec<f64>)
where
    G: NodeCompactIndexable + IntoEdgeReferences,
    F: FnMut(G::EdgeRef) -> f64,
{
    let n = graph.node_count();
    let mut adj = vec![HashMap::new(); n];
    let mut degree = vec![0.0; n];
    for edge in graph.edge_references() {
        let a = graph.to_index(edge.source());
        let b = graph.to_index(edge.target());
        let w = edge_cost(edge);
        if a == b {
            *adj[a].entry(a).or_insert(0.0) += 2.0 * w;
        } else {
            *adj[a].entry(b).or_insert(0.0) += w;
            *adj[b].entry(a).or_insert(0.0) += w;
        }
        degree[a] += w;
        degree[b] += w;
    }
    (adj, degree)
}

/// Phase 1: repeatedly move each vertex into the neighbor community
/// (including staying put) maximizing modularity gain, until a full
/// pass makes no move. Returns `true` if any vertex ever moved.
fn local_moving(adj: &[HashMap<usize, f64>], degree: &[f64], m: f64, resolution: f64, community: &mut [usize]) -> bool {
    let n = adj.len();
    let mut sum_tot = vec![0.0; n];
    for (i, &c) in community.iter().enumerate() {
        sum_tot[c] += degree[i];
    }

    let mut moved_any = false;
    let mut moved = true;
    while moved {
        moved = false;
        for i in 0..n {
            let ci = community[i];
            let mut neighbor_weight: HashMap<usize, f64> = HashMap::new();
            for (&j, &w) in &adj[i] {
                if j == i {
                    continue;
                }
                *neighbor_weight.entry(community[j]).or_insert(0.0) += w;
            }

            sum_tot[ci] -= degree[i];
            let k_i = degree[i];
            let mut best_c = ci;
            let mut best_gain = neighbor_weight.get(&ci).copied().unwrap_or(0.0)
                - resolution * sum_tot[ci] * k_i / (2.0 * m);
            for (&c, &w_in) in &neighbor_weight {
                if c == ci {
                    continue;
                }
                let gain = w_in - resolution * sum_tot[c] * k_i / (2.0 * m);
                if gain > best_gain + 1e-12 {
                    best_gain = gain;
                    best_c = c;
                }
            }
            sum_tot[best_c] += k_i;
            if best_c != ci {
                community[i] = best_c;
                moved = true;
                moved_any = true;
            }
        }
    }
    moved_any
}

/// Relabel a (possibly sparse) community assignment into `0..k`.
fn relabel(community: &[usize]) -> (Vec<usize>, usize) {
    let mut label: HashMap<usize, usize> = HashMap::new();
    let mut next = 0;
    let mut out = vec![0; community.len()];
    for (i, &c) in community.iter().enumerate() {
        let id = *label.entry(c).or_insert_with(|| {
            let id = next;
            next += 1;
            id
        });
        out[i] = id;
    }
    (out, next)
}

/// Phase 2: contract every community into a super-vertex. Edge weight
/// between two super-vertices is the sum of edges crossing between the
/// two communities; a community's internal edges fold into its
/// super-vertex's self-loop.
fn contract(adj: &[HashMap<usize, f64>], relabeled: &[usize], k: usize) -> (Vec<HashMap<usize, f64>>, Vec<f64>) {
    let mut new_adj = vec![HashMap::new(); k];
    for (i, row) in adj.iter().enumerate() {
        let ci = relabeled[i];
        for (&j, &w) in row {
            let cj = relabeled[j];
            *new_adj[ci].entry(cj).or_insert(0.0) += w;
        }
    }
    let new_degree: Vec<f64> = new_adj.iter().map(|row| row.values().sum()).collect();
    (new_adj, new_degree)
}

/// Run Louvain over `graph` with resolution `resolution` (`1.0` is
/// standard modularity). `edge_cost` supplies each edge's weight (use
/// `|_| 1.0` for an unweighted graph).
pub fn louvain<G, F>(graph: G, resolution: f64, mut edge_cost: F) -> LouvainResult<G::NodeId>
where
    G: NodeCompactIndexable + IntoNodeIdentifiers + IntoEdgeReferences,
    G::NodeId: Copy + Eq + Hash,
    F: FnMut(G::EdgeRef) -> f64,
{
    let n = graph.node_count();
    let index_to_node: Vec<G::NodeId> = {
        let mut v = vec![None; n];
        for node in graph.node_identifiers() {
            v[graph.to_index(node)] = Some(node);
        }
        v.into_iter().map(|x| x.expect("NodeCompactIndexable has no index gaps")).collect()
    };

    if n == 0 {
        return LouvainResult {
            communities: Vec::new(),
            membership: HashMap::new(),
            modularity: 0.0,
        };
    }

    let (adj, degree) = build_adjacency(graph, &mut edge_cost);
    let m = degree.iter().sum::<f64>() / 2.0;

    // `membership[i]` tracks, for original vertex `i`, which node of the
    // *current* contraction level it now belongs to.
    let mut membership: Vec<usize> = (0..n).collect();
    let mut level_adj = adj;
    let mut level_degree = degree;

    if m > 0.0 {
        loop {
            let mut community: Vec<usize> = (0..level_adj.len()).collect();
            let improved = local_moving(&level_adj, &level_degree, m, resolution, &mut community);
            if !improved {
                break;
            }
            let (relabeled, k) = relabel(&community);
            for slot in membership.iter_mut() {
                *slot = relabeled[*slot];
            }
            if k == level_adj.len() {
                // Every vertex kept its own singleton community: no
                // further contraction is possible.
                break;
            }
            let (new_adj, new_degree) = contract(&level_adj, &relabeled, k);
            level_adj = new_adj;
            level_degree = new_degree;
        }
    }

    let mut communities_by_id: HashMap<usize, HashSet<G::NodeId>> = HashMap::new();
    let mut membership_map: HashMap<G::NodeId, usize> = HashMap::new();
    for (i, &node) in index_to_node.iter().enumerate() {
        let c = membership[i];
        communities_by_id.entry(c).or_default().insert(node);
        membership_map.insert(node, c);
    }
    let communities: Vec<HashSet<G::NodeId>> = communities_by_id.into_values().collect();
    let modularity_score = modularity(graph, &membership_map, resolution, edge_cost);

    LouvainResult {
        communities,
        modularity: modularity_score,
        membership: membership_map,
    }
}

/// Modularity of a partition: `Q = sum_c [L_c/m - gamma*(d_c/2m)^2]`,
/// where `L_c` is the total weight of edges with both endpoints in
/// community `c`, `d_c` is the summed degree of `c`'s members, `m` is
/// the graph's total edge weight, and `gamma` is the resolution. `0.0`
/// on an edgeless graph, where modularity is undefined.
pub fn modularity<G, F>(graph: G, communities: &HashMap<G::NodeId, usize>, resolution: f64, mut edge_cost: F) -> f64
where
    G: IntoEdgeReferences,
    G::NodeId: Copy + Eq + Hash,
    F: FnMut(G::EdgeRef) -> f64,
{
    let mut degree: HashMap<G::NodeId, f64> = HashMap::new();
    let mut internal: HashMap<usize, f64> = HashMap::new();
    let mut m = 0.0;

    for edge in graph.edge_references() {
        let (a, b) = (edge.source(), edge.target());
        let w = edge_cost(edge);
        *degree.entry(a).or_insert(0.0) += w;
        *degree.entry(b).or_insert(0.0) += w;
        m += w;
        if communities.get(&a) == communities.get(&b) {
            *internal.entry(communities[&a]).or_insert(0.0) += w;
        }
    }
    if m == 0.0 {
        return 0.0;
    }

    let mut community_degree: HashMap<usize, f64> = HashMap::new();
    for (&node, &c) in communities {
        *community_degree.entry(c).or_insert(0.0) += degree.get(&node).copied().unwrap_or(0.0);
    }

    community_degree
        .iter()
        .map(|(c, &d_c)| {
            let l_c = internal.get(c).copied().unwrap_or(0.0);
            l_c / m - resolution * (d_c / (2.0 * m)).powi(2)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UnGraph;

    #[test]
    fn two_disjoint_triangles_form_two_communities() {
        // Two well-separated cliques bridged by a single light edge.
        let mut g: UnGraph<(), f64> = UnGraph::new_undirected();
        let nodes: Vec<_> = (0..6).map(|_| g.add_node(())).collect();
        for &(a, b) in &[(0, 1), (1, 2), (2, 0)] {
            g.add_edge(nodes[a], nodes[b], 1.0).unwrap();
        }
        for &(a, b) in &[(3, 4), (4, 5), (5, 3)] {
            g.add_edge(nodes[a], nodes[b], 1.0).unwrap();
        }
        g.add_edge(nodes[0], nodes[3], 0.01).unwrap();

        let result = louvain(&g, 1.0, |e| *e.weight());
        assert_eq!(result.communities.len(), 2);
        let left = result.membership[&nodes[0]];
        let right = result.membership[&nodes[3]];
        assert_ne!(left, right);
        for &n in &nodes[0..3] {
            assert_eq!(result.membership[&n], left);
        }
        for &n in &nodes[3..6] {
            assert_eq!(result.membership[&n], right);
        }
    }

    #[test]
    fn higher_resolution_favors_more_communities() {
        let mut g: UnGraph<(), f64> = UnGraph::new_undirected();
        let nodes: Vec<_> = (0..4).map(|_| g.add_node(())).collect();
        g.add_edge(nodes[0], nodes[1], 1.0).unwrap();
        g.add_edge(nodes[2], nodes[3], 1.0).unwrap();
        g.add_edge(nodes[1], nodes[2], 0.2).unwrap();

        let low_res = louvain(&g, 0.5, |e| *e.weight());
        let high_res = louvain(&g, 4.0, |e| *e.weight());
        assert!(high_res.communities.len() >= low_res.communities.len());
    }

    #[test]
    fn empty_graph_has_no_communities() {
        let g: UnGraph<(), f64> = UnGraph::new_undirected();
        let result = louvain(&g, 1.0, |e| *e.weight());
        assert!(result.communities.is_empty());
        assert_eq!(result.modularity, 0.0);
    }

    #[test]
    fn modularity_of_single_all_in_one_community_partition_is_nonpositive() {
        let mut g: UnGraph<(), f64> = UnGraph::new_undirected();
        let nodes: Vec<_> = (0..4).map(|_| g.add_node(())).collect();
        g.add_edge(nodes[0], nodes[1], 1.0).unwrap();
        g.add_edge(nodes[1], nodes[2], 1.0).unwrap();
        g.add_edge(nodes[2], nodes[3], 1.0).unwrap();

        let trivial: HashMap<_, usize> = nodes.iter().map(|&n| (n, 0)).collect();
        let q = modularity(&g, &trivial, 1.0, |e| *e.weight());
        assert!(q <= 0.0);
    }
}
