//! Reference resolution
//!
//! Second build phase. For each collected function/method, resolve every
//! identifier occurrence through the semantic model and keep the ones that
//! land on another in-project node. Everything else is filtered, never
//! reported:
//! - unresolved occurrences
//! - declarations outside the project (standard library, dependencies)
//! - self references
//! - repeated references to the same target from the same source
//!
//! Definitions are independent of each other, so with the `parallel`
//! feature they are resolved on a rayon pool into per-definition results
//! that are merged into the graph afterwards.

use rustc_hash::FxHashSet;
use tracing::{debug, info, trace};

use super::definition_collector::{Definition, DefinitionLookup};
use crate::config::ParallelConfig;
use crate::errors::Result;
use crate::features::graph_builder::domain::DependencyGraph;
use crate::features::semantic_model::ports::SemanticModel;
use crate::shared::models::NodeId;

#[cfg(feature = "parallel")]
use crate::errors::DepmapError;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Outgoing edges found for one definition
pub type ResolvedEdges = (NodeId, Vec<NodeId>);

/// Resolves definition bodies to edges between known nodes
pub struct ReferenceResolver<'a> {
    lookup: &'a DefinitionLookup,
}

impl<'a> ReferenceResolver<'a> {
    pub fn new(lookup: &'a DefinitionLookup) -> Self {
        Self { lookup }
    }

    /// Resolve every definition and append the edges to `graph`
    pub fn resolve_into<M>(
        &self,
        model: &M,
        parallel: &ParallelConfig,
        graph: &mut DependencyGraph,
    ) -> Result<()>
    where
        M: SemanticModel + ?Sized,
    {
        info!("Analyzing function dependencies...");
        let resolved = self.resolve_all(model, parallel)?;
        Self::merge(resolved, graph);
        Ok(())
    }

    /// Resolve every definition, in collection order
    pub fn resolve_all<M>(&self, model: &M, parallel: &ParallelConfig) -> Result<Vec<ResolvedEdges>>
    where
        M: SemanticModel + ?Sized,
    {
        let definitions = self.lookup.definitions();
        if parallel.should_parallelize(definitions.len()) {
            self.resolve_parallel(model, definitions, parallel)
        } else {
            Ok(self.resolve_sequential(model, definitions))
        }
    }

    fn resolve_sequential<M>(&self, model: &M, definitions: &[Definition]) -> Vec<ResolvedEdges>
    where
        M: SemanticModel + ?Sized,
    {
        definitions
            .iter()
            .map(|def| (def.node_id.clone(), self.resolve_definition(model, def)))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn resolve_parallel<M>(
        &self,
        model: &M,
        definitions: &[Definition],
        parallel: &ParallelConfig,
    ) -> Result<Vec<ResolvedEdges>>
    where
        M: SemanticModel + ?Sized,
    {
        let workers = parallel.effective_workers();
        debug!(
            "Resolving {} definitions on {} workers",
            definitions.len(),
            workers
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("depmap-resolve-{}", i))
            .build()
            .map_err(|e| DepmapError::ThreadPool(e.to_string()))?;

        Ok(pool.install(|| {
            definitions
                .par_iter()
                .map(|def| (def.node_id.clone(), self.resolve_definition(model, def)))
                .collect()
        }))
    }

    #[cfg(not(feature = "parallel"))]
    fn resolve_parallel<M>(
        &self,
        model: &M,
        definitions: &[Definition],
        _parallel: &ParallelConfig,
    ) -> Result<Vec<ResolvedEdges>>
    where
        M: SemanticModel + ?Sized,
    {
        Ok(self.resolve_sequential(model, definitions))
    }

    /// Deduplicated in-project targets referenced from one definition
    ///
    /// Target order follows first occurrence.
    pub fn resolve_definition<M>(&self, model: &M, definition: &Definition) -> Vec<NodeId>
    where
        M: SemanticModel + ?Sized,
    {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut targets = Vec::new();

        for occurrence in model.occurrences(definition.decl_id) {
            let Some(decl) = model.resolve(definition.decl_id, &occurrence).decl_id() else {
                trace!("Unresolved identifier {} in {}", occurrence.name, definition.node_id);
                continue;
            };

            // Not collected: outside the project
            let Some(target) = self.lookup.get(decl) else {
                continue;
            };

            if *target == definition.node_id {
                continue;
            }

            if seen.insert(target.as_str()) {
                targets.push(target.clone());
            }
        }

        targets
    }

    /// Append resolved edges to the graph
    ///
    /// Definitions that share a node id contribute to one edge list; targets
    /// already present for that id are not appended again.
    pub fn merge(resolved: Vec<ResolvedEdges>, graph: &mut DependencyGraph) {
        for (source, targets) in resolved {
            if targets.is_empty() {
                continue;
            }
            trace!("{} -> {} dependencies", source, targets.len());

            let fresh: Vec<NodeId> = match graph.edges.get(&source) {
                Some(existing) => {
                    let existing: FxHashSet<&str> = existing.iter().map(String::as_str).collect();
                    targets
                        .into_iter()
                        .filter(|t| !existing.contains(t.as_str()))
                        .collect()
                }
                None => targets,
            };
            graph.add_edges(&source, fresh);
        }
        debug!("Graph now has {} edges", graph.count_edges());
    }
}
