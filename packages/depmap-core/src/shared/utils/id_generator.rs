//! ID generation utilities
//!
//! Node ids are composite strings, not hashes, so downstream consumers can
//! read the owning scope back out of them.

use crate::shared::constants::identity::ID_SEPARATOR;

/// ID Generator for creating stable node IDs
pub struct IdGenerator;

impl IdGenerator {
    /// Generate a node ID from components
    ///
    /// Format: `scope::name`
    pub fn node_id(scope: &str, name: &str) -> String {
        format!("{}{}{}", scope, ID_SEPARATOR, name)
    }
}
