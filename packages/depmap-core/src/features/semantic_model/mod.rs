//! Semantic program model
//!
//! The graph builder does not parse or type-check anything. It consumes an
//! already-resolved view of the program through the [`SemanticModel`] port:
//! a sequence of declaration records, and a use→definition mapping for the
//! identifier occurrences inside each definition.

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::{DeclId, DeclKind, DeclarationRecord, Occurrence, Origin, Resolution};
pub use infrastructure::InMemorySemanticModel;
pub use ports::SemanticModel;
