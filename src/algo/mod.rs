//! The algorithm layer: the classical graph algorithms built atop the
//! capability contracts in [`crate::visit`] and the shared primitives in
//! [`crate::unionfind`] and [`crate::scored`].
//!
//! Every algorithm states its minimum capability set as a trait bound on
//! its generic graph parameter `G`; a caller passing a graph lacking a
//! required capability is rejected at the call site, not at run time —
//! `capability-missing` is a compile-time outcome.

pub mod centrality;
pub mod coloring;
pub mod community;
pub mod connectivity;
pub mod flow;
#[cfg(feature = "generators")]
pub mod generators;
pub mod isomorphism;
pub mod matching;
pub mod mst;
pub mod ordering;
pub mod properties;
pub mod shortest_paths;

pub use crate::data::{BoundedMeasure, FloatMeasure, Measure, UnitMeasure};

/// A negative cycle reachable from the algorithm's source was detected.
/// Returned by the Bellman-Ford family (Bellman-Ford, SPFA, Johnson);
/// carries no data because distances are undefined once this fires.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NegativeCycle;

impl std::fmt::Display for NegativeCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "negative cycle detected")
    }
}

impl std::error::Error for NegativeCycle {}

/// Topological sort found a cycle. Carries the partial order computed
/// before the cycle was detected and the set of vertices that remain
/// unordered (the cycle participants, possibly along with vertices only
/// reachable through the cycle).
#[derive(Clone, Debug)]
pub struct CycleDetected<N> {
    pub ordered: Vec<N>,
    pub remaining: Vec<N>,
}
