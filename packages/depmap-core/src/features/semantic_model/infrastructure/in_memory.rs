//! In-memory semantic model
//!
//! Holds declarations and pre-resolved occurrences. Used by callers that
//! already ran their own front end, and by tests.

use rustc_hash::FxHashMap;

use crate::features::semantic_model::domain::{
    DeclId, DeclKind, DeclarationRecord, Occurrence, Origin, Resolution,
};
use crate::features::semantic_model::ports::SemanticModel;
use crate::shared::models::{Receiver, SourcePosition};

/// Semantic model backed by plain maps
///
/// # Example
/// ```
/// use depmap_core::features::semantic_model::{InMemorySemanticModel, SemanticModel};
///
/// let mut model = InMemorySemanticModel::new();
/// let run = model.function("app", "Run", "main.go", 10);
/// let load = model.function("app", "Load", "load.go", 3);
/// model.add_reference(run, load);
///
/// assert_eq!(model.declarations().len(), 2);
/// assert_eq!(model.occurrences(run).len(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemorySemanticModel {
    declarations: Vec<DeclarationRecord>,
    index: FxHashMap<DeclId, usize>,
    occurrences: FxHashMap<DeclId, Vec<Occurrence>>,
    uses: FxHashMap<(DeclId, Occurrence), DeclId>,
    next_id: u64,
}

impl InMemorySemanticModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh declaration identity
    pub fn next_decl_id(&mut self) -> DeclId {
        let id = DeclId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Register a declaration record as-is
    ///
    /// Re-declaring a known id replaces its record in place.
    pub fn declare(&mut self, record: DeclarationRecord) -> DeclId {
        let id = record.decl_id;
        if id.0 >= self.next_id {
            self.next_id = id.0 + 1;
        }
        match self.index.get(&id) {
            Some(&slot) => self.declarations[slot] = record,
            None => {
                self.index.insert(id, self.declarations.len());
                self.declarations.push(record);
            }
        }
        id
    }

    /// Declare a project function
    pub fn function(&mut self, scope: &str, name: &str, path: &str, line: u32) -> DeclId {
        let id = self.next_decl_id();
        self.declare(DeclarationRecord::new(
            id,
            scope,
            name,
            DeclKind::Function,
            SourcePosition::new(path, line),
            "func()",
        ))
    }

    /// Declare a project method
    pub fn method(
        &mut self,
        scope: &str,
        receiver: Receiver,
        name: &str,
        path: &str,
        line: u32,
    ) -> DeclId {
        let id = self.next_decl_id();
        self.declare(DeclarationRecord::new(
            id,
            scope,
            name,
            DeclKind::Method { receiver },
            SourcePosition::new(path, line),
            "func()",
        ))
    }

    /// Declare a project type
    pub fn type_decl(&mut self, scope: &str, name: &str, path: &str, line: u32) -> DeclId {
        let id = self.next_decl_id();
        self.declare(DeclarationRecord::new(
            id,
            scope,
            name,
            DeclKind::TypeDecl,
            SourcePosition::new(path, line),
            format!("{}.{}", scope, name),
        ))
    }

    /// Declare a function that lives outside the project
    pub fn external_function(&mut self, scope: &str, name: &str) -> DeclId {
        let id = self.next_decl_id();
        self.declare(
            DeclarationRecord::new(
                id,
                scope,
                name,
                DeclKind::Function,
                SourcePosition::new(format!("{}/{}.go", scope, name.to_lowercase()), 1),
                "func()",
            )
            .with_origin(Origin::External),
        )
    }

    /// Record an occurrence inside `source` together with its resolution
    ///
    /// Resolutions are scoped to `source`; the same occurrence recorded again
    /// in `source` takes the latest resolution.
    pub fn add_occurrence(
        &mut self,
        source: DeclId,
        occurrence: Occurrence,
        resolution: Resolution,
    ) {
        let key = (source, occurrence.clone());
        match resolution {
            Resolution::Resolved(target) => {
                self.uses.insert(key, target);
            }
            Resolution::Unresolved => {
                self.uses.remove(&key);
            }
        }
        self.occurrences.entry(source).or_default().push(occurrence);
    }

    /// Record that `source` mentions `target`
    pub fn add_reference(&mut self, source: DeclId, target: DeclId) {
        let name = self
            .record(target)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| target.to_string());
        let occurrence = self.synthetic_occurrence(source, name);
        self.add_occurrence(source, occurrence, Resolution::Resolved(target));
    }

    /// Record an identifier in `source` that the model cannot resolve
    pub fn add_unresolved(&mut self, source: DeclId, name: &str) {
        let occurrence = self.synthetic_occurrence(source, name.to_string());
        self.add_occurrence(source, occurrence, Resolution::Unresolved);
    }

    pub fn record(&self, id: DeclId) -> Option<&DeclarationRecord> {
        self.index.get(&id).map(|&i| &self.declarations[i])
    }

    /// Occurrence positioned on the line after the previous one in `source`
    fn synthetic_occurrence(&self, source: DeclId, name: String) -> Occurrence {
        let (path, base_line) = self
            .record(source)
            .map(|r| (r.position.path.clone(), r.position.line))
            .unwrap_or_default();
        let offset = self.occurrences.get(&source).map_or(0, Vec::len) as u32 + 1;
        Occurrence::new(name, SourcePosition::new(path, base_line + offset))
    }
}

impl SemanticModel for InMemorySemanticModel {
    fn declarations(&self) -> Vec<DeclarationRecord> {
        self.declarations.clone()
    }

    fn occurrences(&self, decl: DeclId) -> Vec<Occurrence> {
        self.occurrences.get(&decl).cloned().unwrap_or_default()
    }

    fn resolve(&self, within: DeclId, occurrence: &Occurrence) -> Resolution {
        self.uses.get(&(within, occurrence.clone())).copied().into()
    }
}
