//! Port to the upstream semantic program model

use super::domain::{DeclId, DeclarationRecord, Occurrence, Resolution};

/// Source of declarations and use→definition resolution
///
/// Implementations must be `Sync`: reference resolution may query the model
/// from several worker threads at once.
pub trait SemanticModel: Sync {
    /// Every declaration the model knows about, project and external alike
    fn declarations(&self) -> Vec<DeclarationRecord>;

    /// Identifier occurrences inside the body and signature of `decl`
    fn occurrences(&self, decl: DeclId) -> Vec<Occurrence>;

    /// Declaration denoted by `occurrence`, read inside the scope of `within`
    fn resolve(&self, within: DeclId, occurrence: &Occurrence) -> Resolution;
}
