//! Connectivity family: connected components, strongly-connected
//! components, articulation points/bridges, topological sort, bipartite
//! check, planarity filter, and Eulerian/Hamiltonian path-and-cycle
//! search. Every algorithm here treats direction according to what the
//! trait bound actually requires — undirected algorithms take
//! `IntoEdgeReferences`/`IntoNeighbors` (direction-blind on a directed
//! graph only if the caller means it that way), directed ones take
//! `IntoNeighborsDirected`/`IntoEdgesDirected`.

pub mod articulation;
pub mod bipartite;
pub mod components;
pub mod eulerian;
pub mod hamiltonian;
pub mod planarity;
pub mod scc;
pub mod toposort;

pub use articulation::{articulation_points, bridges};
pub use bipartite::{bipartite_partition, is_bipartite};
pub use components::{connected_components_dfs, connected_components_union_find};
pub use eulerian::{eulerian_cycle, eulerian_path};
pub use hamiltonian::{hamiltonian_cycle, hamiltonian_path};
pub use planarity::is_planar_by_euler_formula;
pub use scc::{kosaraju_scc, tarjan_scc};
pub use toposort::{toposort_dfs, toposort_kahn};
