//! Centrality: degree, closeness, betweenness (Brandes), PageRank,
//! and eigenvector centrality. Every measure returns one score per
//! vertex; callers compare scores to rank vertices by importance under
//! whichever notion fits their graph.

mod betweenness;
mod closeness;
mod degree;
mod eigenvector;
mod pagerank;

pub use betweenness::betweenness_centrality;
pub use closeness::closeness_centrality;
pub use degree::{degree_centrality, normalized_degree_centrality, rescaled_degree_centrality};
pub use eigenvector::eigenvector_centrality;
pub use pagerank::page_rank;
