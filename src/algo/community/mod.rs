//! Community detection: Louvain's two-phase local-move-then-
//! contract loop, optimizing modularity.

mod louvain;

pub use louvain::{louvain, modularity};
