//! Flow: a shared residual-capacity representation plus three
//! augmenting strategies over it — [`ford_fulkerson`] (DFS augmenting
//! path), [`edmonds_karp`] (BFS augmenting path, `O(V*E^2)`), and
//! [`dinic`] (level-graph BFS + blocking-flow DFS, `O(V^2*E)`) — and
//! [`min_cut`], which reads the source-side reachable set off the
//! terminal residual graph.

mod dinic;
mod edmonds_karp;
mod ford_fulkerson;
mod min_cut;
mod residual;

pub use dinic::dinic;
pub use edmonds_karp::edmonds_karp;
pub use ford_fulkerson::ford_fulkerson;
pub use min_cut::min_cut;
pub use residual::{MaxFlow, Residual};
