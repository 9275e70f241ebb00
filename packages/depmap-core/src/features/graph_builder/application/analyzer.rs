//! Dependency analysis use case
//!
//! Runs the two build phases over one graph: definition collection first,
//! then reference resolution (which needs the collector's lookup).

use std::time::Instant;
use tracing::info;

use crate::config::DepmapConfig;
use crate::errors::Result;
use crate::features::graph_builder::domain::DependencyGraph;
use crate::features::graph_builder::infrastructure::{DefinitionCollector, ReferenceResolver};
use crate::features::semantic_model::ports::SemanticModel;

/// Builds a dependency graph from a semantic model
///
/// # Example
/// ```
/// use depmap_core::config::{DepmapConfig, Preset};
/// use depmap_core::features::graph_builder::DependencyAnalyzer;
/// use depmap_core::features::semantic_model::InMemorySemanticModel;
///
/// let mut model = InMemorySemanticModel::new();
/// let main = model.function("app", "main", "main.go", 3);
/// let run = model.function("app", "run", "main.go", 9);
/// model.add_reference(main, run);
///
/// let analyzer = DependencyAnalyzer::new(DepmapConfig::preset(Preset::Sequential)).unwrap();
/// let mut graph = analyzer.analyze(&model).unwrap();
/// assert_eq!(graph.count_edges(), 1);
///
/// graph.compute_components();
/// assert_eq!(graph.top_component().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DependencyAnalyzer {
    config: DepmapConfig,
}

impl DependencyAnalyzer {
    /// Create an analyzer; the configuration is validated up front
    pub fn new(config: DepmapConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DepmapConfig {
        &self.config
    }

    /// Perform the full dependency analysis
    ///
    /// Components are not computed here; call
    /// [`DependencyGraph::compute_components`] on the result.
    pub fn analyze<M>(&self, model: &M) -> Result<DependencyGraph>
    where
        M: SemanticModel + ?Sized,
    {
        let start = Instant::now();
        let mut graph = DependencyGraph::new();

        let lookup = DefinitionCollector::new(&self.config.scope)
            .collect(model.declarations(), &mut graph);

        ReferenceResolver::new(&lookup).resolve_into(model, &self.config.parallel, &mut graph)?;

        info!(
            "Analysis complete. Nodes: {}, Edges: {} ({} ms)",
            graph.nodes.len(),
            graph.count_edges(),
            start.elapsed().as_millis()
        );
        Ok(graph)
    }
}
