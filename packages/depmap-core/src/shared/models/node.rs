//! Symbol node model
//!
//! A node is one tracked declaration: a free function, a method, or a type
//! declaration. Its kind is fixed at collection time and carried as data.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::utils::id_generator::IdGenerator;

/// Node kind (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeKind {
    #[serde(rename = "function")]
    Function,
    #[serde(rename = "method")]
    Method,
    #[serde(rename = "type")]
    TypeDecl,
}

impl NodeKind {
    /// Functions and methods have a body whose references can be scanned
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Function | Self::Method)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Method => "method",
            Self::TypeDecl => "type",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Method receiver
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Receiver {
    /// Receiver type name without any pointer/reference marker
    pub type_name: String,

    /// Whether the method is declared on a reference to the type
    pub by_reference: bool,
}

impl Receiver {
    pub fn by_value(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            by_reference: false,
        }
    }

    pub fn by_reference(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            by_reference: true,
        }
    }

    /// Display name of a method declared on this receiver
    ///
    /// `(*Type).Method` for reference receivers, `Type.Method` otherwise.
    pub fn qualify(&self, method: &str) -> String {
        if self.by_reference {
            format!("(*{}).{}", self.type_name, method)
        } else {
            format!("{}.{}", self.type_name, method)
        }
    }
}

/// Symbol node in the dependency graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// `scope` + `::` + `name`
    pub id: String,

    /// Display name (receiver-qualified for methods)
    pub name: String,

    pub kind: NodeKind,

    /// Owning module/package identifier
    pub scope: String,

    /// Source file base name
    pub file: String,

    /// 1-based source line
    pub line: u32,

    /// Human-readable type signature
    pub signature: String,

    /// Structured receiver (methods only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<Receiver>,

    /// Post-sort component id, written by component analysis
    #[serde(rename = "componentID", default)]
    pub component_id: usize,

    /// Score of the owning component, written by component analysis
    #[serde(rename = "componentScore", default)]
    pub component_score: f64,
}

impl Node {
    pub fn new(
        scope: impl Into<String>,
        name: impl Into<String>,
        kind: NodeKind,
        file: impl Into<String>,
        line: u32,
        signature: impl Into<String>,
    ) -> Self {
        let scope = scope.into();
        let name = name.into();
        Self {
            id: IdGenerator::node_id(&scope, &name),
            name,
            kind,
            scope,
            file: file.into(),
            line,
            signature: signature.into(),
            receiver: None,
            component_id: 0,
            component_score: 0.0,
        }
    }

    /// Create a method node; the display name is derived from the receiver
    pub fn method(
        scope: impl Into<String>,
        receiver: Receiver,
        method_name: &str,
        file: impl Into<String>,
        line: u32,
        signature: impl Into<String>,
    ) -> Self {
        let name = receiver.qualify(method_name);
        let mut node = Self::new(scope, name, NodeKind::Method, file, line, signature);
        node.receiver = Some(receiver);
        node
    }

    /// Receiver type name, if this node is a method
    pub fn receiver_type(&self) -> Option<&str> {
        self.receiver.as_ref().map(|r| r.type_name.as_str())
    }
}
