//! Shared module - Common types and utilities
//!
//! Types here are used by every feature slice (semantic model port,
//! graph builder, component analysis).

pub mod constants;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use models::*;
pub use utils::id_generator::IdGenerator;
