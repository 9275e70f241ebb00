//! Graph Builder
//!
//! Turns a semantic program model into a project-scoped dependency graph:
//!
//! 1. [`DefinitionCollector`]: declaration records → nodes + `DeclId` lookup
//! 2. [`ReferenceResolver`]: per-definition occurrences → deduplicated edges
//! 3. [`DependencyAnalyzer`]: runs both, in that order, over one graph
//!
//! Component analysis is a separate, explicit pass over the finished graph
//! (see [`crate::features::components`]).

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::DependencyAnalyzer;
pub use domain::{DependencyGraph, GraphStats};
pub use infrastructure::{DefinitionCollector, DefinitionLookup, ReferenceResolver};
