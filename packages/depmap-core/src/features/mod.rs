//! Feature slices
//!
//! - `semantic_model`: port to the upstream declaration/resolution source
//! - `graph_builder`: definition collection + reference resolution → graph
//! - `components`: connected components, scoring, ranking

pub mod components;
pub mod graph_builder;
pub mod semantic_model;
