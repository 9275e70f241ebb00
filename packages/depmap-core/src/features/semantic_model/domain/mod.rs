//! Declaration and occurrence records produced by the semantic model

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::models::{NodeKind, Receiver, SourcePosition};

/// Semantic identity of a declaration
///
/// Two records with the same display name (e.g. build-tagged variants of the
/// same function) still have distinct `DeclId`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeclId(pub u64);

impl fmt::Display for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decl#{}", self.0)
    }
}

/// Kind classification signal of a declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclKind {
    Function,
    Method { receiver: Receiver },
    TypeDecl,
}

impl DeclKind {
    pub fn node_kind(&self) -> NodeKind {
        match self {
            Self::Function => NodeKind::Function,
            Self::Method { .. } => NodeKind::Method,
            Self::TypeDecl => NodeKind::TypeDecl,
        }
    }
}

/// Whether a declaration belongs to the analyzed project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Origin {
    #[default]
    Project,
    /// Standard library, third-party or otherwise out-of-module code
    External,
}

/// One declaration as reported by the semantic model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationRecord {
    pub decl_id: DeclId,

    /// Owning module/package identifier
    pub scope: String,

    /// Declared (short) name; methods carry the bare method name
    pub name: String,

    pub kind: DeclKind,

    pub origin: Origin,

    pub position: SourcePosition,

    pub signature: String,
}

impl DeclarationRecord {
    pub fn new(
        decl_id: DeclId,
        scope: impl Into<String>,
        name: impl Into<String>,
        kind: DeclKind,
        position: SourcePosition,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            decl_id,
            scope: scope.into(),
            name: name.into(),
            kind,
            origin: Origin::Project,
            position,
            signature: signature.into(),
        }
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    pub fn is_external(&self) -> bool {
        self.origin == Origin::External
    }
}

/// An identifier occurrence inside a definition's body or signature
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occurrence {
    /// Identifier text as written
    pub name: String,

    pub position: SourcePosition,
}

impl Occurrence {
    pub fn new(name: impl Into<String>, position: SourcePosition) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// Outcome of resolving an occurrence to its declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    Resolved(DeclId),
    Unresolved,
}

impl Resolution {
    pub fn decl_id(self) -> Option<DeclId> {
        match self {
            Self::Resolved(id) => Some(id),
            Self::Unresolved => None,
        }
    }
}

impl From<Option<DeclId>> for Resolution {
    fn from(value: Option<DeclId>) -> Self {
        value.map_or(Self::Unresolved, Self::Resolved)
    }
}
