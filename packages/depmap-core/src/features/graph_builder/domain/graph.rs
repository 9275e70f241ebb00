//! Dependency graph storage
//!
//! Directed graph where:
//! - Nodes are symbols, keyed by their composite id
//! - Edges are `source id → [target id, ...]` (A → B means A uses B)
//!
//! Populated by the collector and resolver, then treated as read-only except
//! for the component fields written by component analysis.

use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::features::components::domain::Component;
use crate::features::components::infrastructure::ComponentAnalyzer;
use crate::shared::models::{Node, NodeId, NodeKind};

/// Symbol-level dependency graph
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependencyGraph {
    pub nodes: HashMap<NodeId, Node>,

    /// SourceID → TargetIDs (insertion order, duplicate-free per source)
    pub edges: HashMap<NodeId, Vec<NodeId>>,

    /// Components sorted by score, empty until `compute_components` runs
    #[serde(default)]
    pub components: Vec<Component>,
}

impl DependencyGraph {
    /// Create empty dependency graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, replacing any existing node with the same id
    ///
    /// Returns the replaced node, if any.
    pub fn put_node(&mut self, node: Node) -> Option<Node> {
        self.nodes.insert(node.id.clone(), node)
    }

    /// Append targets to a source's edge list
    ///
    /// The caller guarantees no self-loops and no duplicate targets.
    pub fn add_edges<I>(&mut self, source_id: &str, target_ids: I)
    where
        I: IntoIterator<Item = NodeId>,
    {
        let mut targets = target_ids.into_iter().peekable();
        if targets.peek().is_none() {
            return;
        }
        self.edges
            .entry(source_id.to_string())
            .or_default()
            .extend(targets);
    }

    /// Total number of edges in the graph
    pub fn count_edges(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Ids this node depends on (outgoing edges)
    pub fn dependencies_of(&self, id: &str) -> &[NodeId] {
        self.edges.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ids that depend on this node (incoming edges), sorted
    pub fn dependents_of(&self, id: &str) -> Vec<NodeId> {
        let mut dependents: Vec<NodeId> = self
            .edges
            .iter()
            .filter(|(_, targets)| targets.iter().any(|t| t == id))
            .map(|(source, _)| source.clone())
            .collect();
        dependents.sort();
        dependents
    }

    // ------------------------------------------------------------------
    // Components
    // ------------------------------------------------------------------

    /// Partition into connected components, score, rank and relabel
    ///
    /// Recomputes everything from scratch on every call.
    pub fn compute_components(&mut self) {
        ComponentAnalyzer::new().analyze(self);
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Component by its post-sort id
    pub fn component(&self, id: usize) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Component containing `node_id`
    pub fn component_of(&self, node_id: &str) -> Option<&Component> {
        let node = self.nodes.get(node_id)?;
        self.component(node.component_id)
            .filter(|c| c.contains(node_id))
    }

    /// Highest-scored component
    pub fn top_component(&self) -> Option<&Component> {
        self.components.first()
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    /// Get graph statistics
    pub fn stats(&self) -> GraphStats {
        let mut nodes_by_kind = BTreeMap::new();
        for node in self.nodes.values() {
            *nodes_by_kind.entry(node.kind).or_insert(0) += 1;
        }

        GraphStats {
            total_nodes: self.nodes.len(),
            total_edges: self.count_edges(),
            total_components: self.components.len(),
            nodes_by_kind,
        }
    }

    /// Export as a petgraph `DiGraph` whose weights are node ids
    ///
    /// Nodes are added in id order so the indices are reproducible. Edges
    /// with an endpoint missing from the node map are left out.
    pub fn to_petgraph(&self) -> DiGraph<NodeId, ()> {
        let mut graph = DiGraph::with_capacity(self.nodes.len(), self.count_edges());
        let mut ids: Vec<&NodeId> = self.nodes.keys().collect();
        ids.sort();

        let mut index: HashMap<&str, NodeIndex> = HashMap::with_capacity(ids.len());
        for id in ids {
            index.insert(id.as_str(), graph.add_node(id.clone()));
        }

        for (source, targets) in &self.edges {
            let Some(&from) = index.get(source.as_str()) else {
                continue;
            };
            for target in targets {
                if let Some(&to) = index.get(target.as_str()) {
                    graph.add_edge(from, to, ());
                }
            }
        }

        graph
    }
}

/// Graph statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub total_components: usize,
    pub nodes_by_kind: BTreeMap<NodeKind, usize>,
}
