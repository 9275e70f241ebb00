//! Connected component discovery and ranking
//!
//! # Algorithm
//! 1. Build an undirected adjacency list from the directed edge map
//! 2. Depth-first search with an explicit stack from each unvisited node
//! 3. Count internal directed edges per component and score it
//! 4. Sort by score descending, ties by smallest member id
//! 5. Relabel components 0..k and write id/score onto member nodes
//!
//! # Performance
//! - **Complexity**: O(N + E) for discovery, O(k log k) for ranking
//! - **Memory**: O(N + E) for the adjacency list; traversal depth is bounded
//!   by the heap-allocated stack, not the call stack

use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use tracing::{debug, info};

use crate::features::components::domain::Component;
use crate::features::graph_builder::domain::DependencyGraph;

type Adjacency<'g> = FxHashMap<&'g str, Vec<&'g str>>;

/// Component analyzer
///
/// Stateless: every call to [`ComponentAnalyzer::analyze`] recomputes the
/// partition from the graph alone and overwrites previous results.
#[derive(Debug, Default, Clone, Copy)]
pub struct ComponentAnalyzer;

impl ComponentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Compute, rank and store components on `graph`
    pub fn analyze(&self, graph: &mut DependencyGraph) {
        let mut components = Self::discover(graph);
        Self::rank(&mut components);
        Self::write_back(graph, components);

        if let Some(top) = graph.top_component() {
            info!(
                "Found {} components (top: {} nodes, {} edges, score {:.2})",
                graph.components.len(),
                top.len(),
                top.edge_count,
                top.score
            );
        } else {
            debug!("Empty graph, no components");
        }
    }

    /// Discover components in seed order (node ids ascending)
    fn discover(graph: &DependencyGraph) -> Vec<Component> {
        if graph.nodes.is_empty() {
            return Vec::new();
        }

        let adjacency = Self::undirected_adjacency(graph);

        let mut seeds: Vec<&str> = graph.nodes.keys().map(String::as_str).collect();
        seeds.sort_unstable();

        let mut visited: FxHashSet<&str> =
            FxHashSet::with_capacity_and_hasher(seeds.len(), Default::default());
        let mut components = Vec::new();

        for seed in seeds {
            if visited.contains(seed) {
                continue;
            }
            let members = Self::collect_component(seed, &adjacency, &mut visited);
            let edge_count = Self::count_internal_edges(graph, &members);
            let member_ids = members.into_iter().map(str::to_string).collect();
            components.push(Component::new(components.len(), member_ids, edge_count));
        }

        debug!("Discovered {} components", components.len());
        components
    }

    /// Edges in both directions; edges touching an unknown id are ignored
    fn undirected_adjacency(graph: &DependencyGraph) -> Adjacency<'_> {
        let mut adjacency: Adjacency<'_> =
            FxHashMap::with_capacity_and_hasher(graph.nodes.len(), Default::default());
        for id in graph.nodes.keys() {
            adjacency.insert(id.as_str(), Vec::new());
        }

        for (source, targets) in &graph.edges {
            if !graph.nodes.contains_key(source) {
                continue;
            }
            for target in targets {
                if !graph.nodes.contains_key(target) {
                    continue;
                }
                if let Some(forward) = adjacency.get_mut(source.as_str()) {
                    forward.push(target.as_str());
                }
                if let Some(reverse) = adjacency.get_mut(target.as_str()) {
                    reverse.push(source.as_str());
                }
            }
        }

        adjacency
    }

    /// Iterative DFS from `seed`, marking everything it reaches
    fn collect_component<'g>(
        seed: &'g str,
        adjacency: &Adjacency<'g>,
        visited: &mut FxHashSet<&'g str>,
    ) -> Vec<&'g str> {
        let mut component = Vec::new();
        let mut stack = vec![seed];
        visited.insert(seed);

        while let Some(current) = stack.pop() {
            component.push(current);
            if let Some(neighbors) = adjacency.get(current) {
                for &neighbor in neighbors {
                    if visited.insert(neighbor) {
                        stack.push(neighbor);
                    }
                }
            }
        }

        component
    }

    /// Directed edges with both endpoints in `members`
    fn count_internal_edges(graph: &DependencyGraph, members: &[&str]) -> usize {
        let member_set: FxHashSet<&str> = members.iter().copied().collect();
        members
            .iter()
            .filter_map(|id| graph.edges.get(*id))
            .flat_map(|targets| targets.iter())
            .filter(|target| member_set.contains(target.as_str()))
            .count()
    }

    /// Score descending, then smallest member id; relabel 0..k
    fn rank(components: &mut [Component]) {
        components.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.first_member().cmp(&b.first_member()))
        });
        for (rank, component) in components.iter_mut().enumerate() {
            component.id = rank;
        }
    }

    fn write_back(graph: &mut DependencyGraph, components: Vec<Component>) {
        for component in &components {
            for member in &component.member_ids {
                if let Some(node) = graph.nodes.get_mut(member) {
                    node.component_id = component.id;
                    node.component_score = component.score;
                }
            }
        }
        graph.components = components;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{Node, NodeKind};

    fn graph_with(nodes: &[&str], edges: &[(&str, &str)]) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        for id in nodes {
            let mut node = Node::new("", *id, NodeKind::Function, "x.go", 1, "func()");
            node.id = id.to_string();
            graph.put_node(node);
        }
        for (source, target) in edges {
            graph.add_edges(source, vec![target.to_string()]);
        }
        graph
    }

    #[test]
    fn test_empty_graph() {
        let mut graph = DependencyGraph::new();
        ComponentAnalyzer::new().analyze(&mut graph);
        assert!(graph.components().is_empty());
        assert!(graph.top_component().is_none());
    }

    #[test]
    fn test_single_cycle() {
        let mut graph = graph_with(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")]);
        ComponentAnalyzer::new().analyze(&mut graph);

        assert_eq!(graph.components().len(), 1);
        let component = &graph.components()[0];
        assert_eq!(component.member_ids, vec!["A", "B", "C"]);
        assert_eq!(component.edge_count, 3);
        assert!(component.score > 0.0);

        for node in graph.nodes.values() {
            assert_eq!(node.component_id, 0);
            assert_eq!(node.component_score, component.score);
        }
    }

    #[test]
    fn test_two_components_ranked_by_score() {
        let mut graph = graph_with(
            &["A", "B", "C", "D", "E"],
            &[("A", "B"), ("B", "C"), ("D", "E")],
        );
        ComponentAnalyzer::new().analyze(&mut graph);

        let components = graph.components();
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].len(), 3);
        assert_eq!(components[1].len(), 2);
        assert!(components[0].score > components[1].score);
        assert_eq!(components[0].id, 0);
        assert_eq!(components[1].id, 1);
        assert_eq!(graph.nodes["D"].component_id, 1);
        assert_eq!(graph.nodes["A"].component_id, 0);
    }

    #[test]
    fn test_reverse_only_edge_connects() {
        // B is reachable from A only against the edge direction
        let mut graph = graph_with(&["A", "B"], &[("B", "A")]);
        ComponentAnalyzer::new().analyze(&mut graph);
        assert_eq!(graph.components().len(), 1);
        assert_eq!(graph.components()[0].edge_count, 1);
    }

    #[test]
    fn test_mutual_edges_count_twice() {
        let mut graph = graph_with(&["A", "B"], &[("A", "B"), ("B", "A")]);
        ComponentAnalyzer::new().analyze(&mut graph);
        assert_eq!(graph.components()[0].edge_count, 2);
    }

    #[test]
    fn test_isolated_nodes_tie_broken_by_member_id() {
        let mut graph = graph_with(&["c", "a", "b"], &[]);
        ComponentAnalyzer::new().analyze(&mut graph);

        let firsts: Vec<_> = graph
            .components()
            .iter()
            .map(|c| c.first_member().unwrap())
            .collect();
        assert_eq!(firsts, vec!["a", "b", "c"]);
        for component in graph.components() {
            assert_eq!(component.edge_count, 0);
            assert_eq!(component.score, 1.0);
        }
    }

    #[test]
    fn test_dangling_edges_ignored() {
        let mut graph = graph_with(&["A"], &[("A", "Ghost"), ("Ghost", "A")]);
        ComponentAnalyzer::new().analyze(&mut graph);
        assert_eq!(graph.components().len(), 1);
        assert_eq!(graph.components()[0].member_ids, vec!["A"]);
        assert_eq!(graph.components()[0].edge_count, 0);
    }

    #[test]
    fn test_long_chain_does_not_recurse() {
        let ids: Vec<String> = (0..100_000).map(|i| format!("n{:06}", i)).collect();
        let mut graph = DependencyGraph::new();
        for id in &ids {
            let mut node = Node::new("", id.as_str(), NodeKind::Function, "x.go", 1, "");
            node.id = id.clone();
            graph.put_node(node);
        }
        for pair in ids.windows(2) {
            graph.add_edges(&pair[0], vec![pair[1].clone()]);
        }

        ComponentAnalyzer::new().analyze(&mut graph);
        assert_eq!(graph.components().len(), 1);
        assert_eq!(graph.components()[0].len(), ids.len());
        assert_eq!(graph.components()[0].edge_count, ids.len() - 1);
    }

    #[test]
    fn test_reanalysis_overwrites_previous_state() {
        let mut graph = graph_with(&["A", "B"], &[]);
        ComponentAnalyzer::new().analyze(&mut graph);
        assert_eq!(graph.components().len(), 2);

        graph.add_edges("A", vec!["B".to_string()]);
        ComponentAnalyzer::new().analyze(&mut graph);
        assert_eq!(graph.components().len(), 1);
        assert_eq!(graph.nodes["B"].component_id, 0);
    }
}
