//! Isomorphism: exact structural/semantic matching via VF2, plus
//! a Weisfeiler-Lehman color refinement used as a cheap pre-filter (a
//! mismatched label histogram proves non-isomorphism without paying for
//! a full VF2 search; a matching histogram is inconclusive).

mod vf2;
mod weisfeiler_lehman;

pub use vf2::{is_isomorphic, is_isomorphic_matching};
pub use weisfeiler_lehman::{could_be_isomorphic, weisfeiler_lehman_labels};
