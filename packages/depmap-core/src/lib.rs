/*
 * depmap-core - Symbol Dependency Graph Engine
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Node, NodeKind, Receiver, SourcePosition)
 * - features/    : Vertical slices (semantic model port → graph builder → components)
 * - config/      : Presets + YAML configuration
 *
 * Pipeline:
 * - Definition collection: declaration records → project-scoped nodes
 * - Reference resolution: identifier occurrences → deduplicated edges (rayon)
 * - Component analysis: connected components, scored and ranked
 */

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{DepmapConfig, Preset};
pub use errors::{DepmapError, Result};
pub use features::components::{component_score, Component, ComponentAnalyzer};
pub use features::graph_builder::{DependencyAnalyzer, DependencyGraph, GraphStats};
pub use features::semantic_model::{
    DeclId, DeclKind, DeclarationRecord, InMemorySemanticModel, Occurrence, Origin, Resolution,
    SemanticModel,
};
pub use shared::models::{Node, NodeId, NodeKind, Receiver, SourcePosition};
