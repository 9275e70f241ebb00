mod definition_collector;
mod reference_resolver;

pub use definition_collector::{Definition, DefinitionCollector, DefinitionLookup};
pub use reference_resolver::{ReferenceResolver, ResolvedEdges};
