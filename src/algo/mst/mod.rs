//! Minimum spanning tree / forest algorithms: Kruskal, Prim, and
//! Boruvka, each treating the input graph as undirected and returning a
//! minimum spanning *forest* (one tree per connected component) when the
//! input is disconnected.

pub mod boruvka;
pub mod kruskal;
pub mod prim;

pub use boruvka::boruvka_mst;
pub use kruskal::kruskal_mst;
pub use prim::prim_mst;
