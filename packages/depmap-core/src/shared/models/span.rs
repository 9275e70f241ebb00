use serde::{Deserialize, Serialize};
use std::path::Path;

/// Source location of a declaration or identifier occurrence
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SourcePosition {
    /// Path of the source file as reported by the semantic model
    pub path: String,

    /// 1-based line number
    pub line: u32,
}

impl SourcePosition {
    pub fn new(path: impl Into<String>, line: u32) -> Self {
        Self {
            path: path.into(),
            line,
        }
    }

    /// Base name of the source file (`pkg/graph/types.go` → `types.go`)
    pub fn file_name(&self) -> String {
        Path::new(&self.path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.clone())
    }
}
