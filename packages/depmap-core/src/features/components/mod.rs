//! Component Analysis
//!
//! Post-processing pass over a finished dependency graph:
//! - Partition nodes into connected components (edges treated as undirected)
//! - Score each component by size, internal edges and density
//! - Rank by score and write the ranking back onto member nodes
//!
//! # Score
//! ```text
//! score(n, e) = n * log2(n + 1)            size, logarithmic
//!             + 2 * e                      connectivity, linear
//!             + 5 * n * e / (n * (n - 1))  density bonus (only when n > 1)
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::{component_score, Component};
pub use infrastructure::ComponentAnalyzer;
