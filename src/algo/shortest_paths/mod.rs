//! The shortest-path family: a single relaxation engine underlies
//! [`dijkstra`], [`astar`], and the two Bellman-Ford-family variants
//! ([`bellman_ford`], [`spfa`]); [`floyd_warshall`] and [`johnson`] solve
//! all-pairs, [`bidirectional`] and [`yen`] build on top of plain
//! Dijkstra, and [`all_shortest_paths`] backtracks a predecessor
//! multigraph to enumerate every optimal path between one pair.

pub mod all_shortest_paths;
pub mod astar;
pub mod bellman_ford;
pub mod bidirectional;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod johnson;
pub mod path;
pub mod spfa;
pub mod yen;

pub use all_shortest_paths::all_shortest_paths;
pub use astar::astar;
pub use bellman_ford::bellman_ford;
pub use bidirectional::bidirectional_dijkstra;
pub use dijkstra::{dijkstra, dijkstra_path, ShortestPathTree};
pub use floyd_warshall::floyd_warshall;
pub use johnson::johnson;
pub use path::{reconstruct_path, Path};
pub use spfa::spfa;
pub use yen::yen;
