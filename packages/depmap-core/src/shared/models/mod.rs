//! Shared models

mod node;
mod span;

pub use node::{Node, NodeKind, Receiver};
pub use span::SourcePosition;

/// Node identifier type alias
pub type NodeId = String;
