use depmap_core::{DependencyGraph, Node, NodeKind};

/// Graph with bare ids (no scope prefix) and the given directed edges
pub fn graph_from_edges(nodes: &[&str], edges: &[(&str, &str)]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for id in nodes {
        let mut node = Node::new("test", *id, NodeKind::Function, "test.go", 1, "func()");
        node.id = id.to_string();
        graph.put_node(node);
    }
    for (source, target) in edges {
        graph.add_edges(source, vec![target.to_string()]);
    }
    graph
}

/// Graph of `n` nodes named `n0..n{n-1}` with edges given by index pairs
///
/// Self-loops and repeated pairs are dropped so the graph satisfies the
/// resolver's invariants.
pub fn graph_from_index_pairs(n: usize, pairs: &[(usize, usize)]) -> DependencyGraph {
    let names: Vec<String> = (0..n).map(|i| format!("n{}", i)).collect();
    let mut graph = DependencyGraph::new();
    for name in &names {
        let mut node = Node::new("test", name.as_str(), NodeKind::Function, "test.go", 1, "");
        node.id = name.clone();
        graph.put_node(node);
    }
    for &(s, t) in pairs {
        if n == 0 || s % n == t % n {
            continue;
        }
        let (source, target) = (&names[s % n], &names[t % n]);
        if graph.dependencies_of(source).contains(target) {
            continue;
        }
        graph.add_edges(source, vec![target.clone()]);
    }
    graph
}
