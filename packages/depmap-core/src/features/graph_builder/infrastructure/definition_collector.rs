//! Definition collection
//!
//! First build phase. Every in-project declaration becomes a node; the
//! `DeclId → node id` lookup it leaves behind is what the reference resolver
//! uses to decide whether a resolved occurrence points into the project.

use rustc_hash::FxHashMap;
use tracing::{debug, info, trace};

use crate::config::ScopeConfig;
use crate::features::graph_builder::domain::DependencyGraph;
use crate::features::semantic_model::domain::{DeclId, DeclKind, DeclarationRecord};
use crate::shared::models::{Node, NodeId};

/// A collected declaration that has a body to scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub decl_id: DeclId,
    pub node_id: NodeId,
}

/// Declarations known to be inside the project
#[derive(Debug, Default, Clone)]
pub struct DefinitionLookup {
    by_decl: FxHashMap<DeclId, NodeId>,
    definitions: Vec<Definition>,
}

impl DefinitionLookup {
    /// Node id created for `decl`, if it is an in-project declaration
    pub fn get(&self, decl: DeclId) -> Option<&NodeId> {
        self.by_decl.get(&decl)
    }

    pub fn contains(&self, decl: DeclId) -> bool {
        self.by_decl.contains_key(&decl)
    }

    /// Functions and methods, in collection order
    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    /// Number of in-project declarations (all kinds)
    pub fn len(&self) -> usize {
        self.by_decl.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_decl.is_empty()
    }

    fn insert(&mut self, decl: DeclId, node: &Node) {
        self.by_decl.insert(decl, node.id.clone());
        if node.kind.has_body() {
            self.definitions.push(Definition {
                decl_id: decl,
                node_id: node.id.clone(),
            });
        }
    }
}

/// Turns declaration records into graph nodes
pub struct DefinitionCollector<'c> {
    scope: &'c ScopeConfig,
}

impl<'c> DefinitionCollector<'c> {
    pub fn new(scope: &'c ScopeConfig) -> Self {
        Self { scope }
    }

    /// Collect every in-project record into `graph`
    ///
    /// A record whose id is already present replaces the earlier node; both
    /// declarations stay in the lookup and map to the same id.
    pub fn collect<I>(&self, records: I, graph: &mut DependencyGraph) -> DefinitionLookup
    where
        I: IntoIterator<Item = DeclarationRecord>,
    {
        info!("Scanning definitions...");

        let mut lookup = DefinitionLookup::default();
        let mut skipped = 0usize;

        for record in records {
            if !self.in_scope(&record) {
                trace!("Skipping out-of-project declaration {}.{}", record.scope, record.name);
                skipped += 1;
                continue;
            }

            let node = Self::create_node(&record);
            lookup.insert(record.decl_id, &node);
            if let Some(previous) = graph.put_node(node) {
                debug!(
                    "Node {} redeclared at {}:{}, replacing {}:{}",
                    previous.id,
                    record.position.path,
                    record.position.line,
                    previous.file,
                    previous.line
                );
            }
        }

        debug!("Skipped {} out-of-project declarations", skipped);
        info!("Found {} definitions inside the project.", lookup.len());
        lookup
    }

    /// Build the node for one record (no scope filtering)
    pub fn create_node(record: &DeclarationRecord) -> Node {
        let file = record.position.file_name();
        let line = record.position.line;

        match &record.kind {
            DeclKind::Method { receiver } => Node::method(
                record.scope.as_str(),
                receiver.clone(),
                &record.name,
                file,
                line,
                record.signature.as_str(),
            ),
            kind => Node::new(
                record.scope.as_str(),
                record.name.as_str(),
                kind.node_kind(),
                file,
                line,
                record.signature.as_str(),
            ),
        }
    }

    fn in_scope(&self, record: &DeclarationRecord) -> bool {
        !record.is_external() && !self.scope.is_excluded(&record.scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::semantic_model::domain::Origin;
    use crate::shared::models::{NodeKind, Receiver, SourcePosition};

    fn record(id: u64, scope: &str, name: &str, kind: DeclKind) -> DeclarationRecord {
        DeclarationRecord::new(
            DeclId(id),
            scope,
            name,
            kind,
            SourcePosition::new(format!("src/{}/file.go", scope), id as u32 + 1),
            "func()",
        )
    }

    #[test]
    fn test_collect_creates_nodes_and_lookup() {
        let scope = ScopeConfig::default();
        let mut graph = DependencyGraph::new();
        let records = vec![
            record(0, "app", "Run", DeclKind::Function),
            record(1, "app", "Config", DeclKind::TypeDecl),
        ];

        let lookup = DefinitionCollector::new(&scope).collect(records, &mut graph);

        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.get(DeclId(0)).map(String::as_str), Some("app::Run"));
        assert_eq!(lookup.get(DeclId(1)).map(String::as_str), Some("app::Config"));

        // Types have no body to scan
        assert_eq!(lookup.definitions().len(), 1);
        assert_eq!(lookup.definitions()[0].node_id, "app::Run");

        let run = graph.node("app::Run").unwrap();
        assert_eq!(run.file, "file.go");
        assert_eq!(run.line, 1);
        assert_eq!(run.scope, "app");
        assert_eq!(graph.node("app::Config").unwrap().kind, NodeKind::TypeDecl);
    }

    #[test]
    fn test_external_records_dropped() {
        let scope = ScopeConfig::default();
        let mut graph = DependencyGraph::new();
        let records =
            vec![record(0, "fmt", "Println", DeclKind::Function).with_origin(Origin::External)];

        let lookup = DefinitionCollector::new(&scope).collect(records, &mut graph);

        assert!(graph.nodes.is_empty());
        assert!(lookup.is_empty());
        assert!(!lookup.contains(DeclId(0)));
    }

    #[test]
    fn test_excluded_scope_prefix_dropped() {
        let scope = ScopeConfig {
            exclude_scope_prefixes: vec!["app/vendor".to_string()],
        };
        let mut graph = DependencyGraph::new();
        let records = vec![
            record(0, "app/vendor/yaml", "Marshal", DeclKind::Function),
            record(1, "app/core", "Run", DeclKind::Function),
        ];

        let lookup = DefinitionCollector::new(&scope).collect(records, &mut graph);

        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.node("app/core::Run").is_some());
        assert!(!lookup.contains(DeclId(0)));
    }

    #[test]
    fn test_method_names_encode_receiver() {
        let scope = ScopeConfig::default();
        let mut graph = DependencyGraph::new();
        let records = vec![
            record(
                0,
                "app",
                "Close",
                DeclKind::Method {
                    receiver: Receiver::by_reference("Conn"),
                },
            ),
            record(
                1,
                "app",
                "Close",
                DeclKind::Method {
                    receiver: Receiver::by_value("File"),
                },
            ),
        ];

        let lookup = DefinitionCollector::new(&scope).collect(records, &mut graph);

        assert_eq!(graph.nodes.len(), 2);
        let conn = graph.node("app::(*Conn).Close").unwrap();
        assert_eq!(conn.kind, NodeKind::Method);
        assert_eq!(conn.receiver_type(), Some("Conn"));
        assert!(graph.node("app::File.Close").is_some());
        assert_eq!(lookup.definitions().len(), 2);
    }

    #[test]
    fn test_id_collision_later_record_wins() {
        let scope = ScopeConfig::default();
        let mut graph = DependencyGraph::new();
        let mut first = record(0, "app", "Open", DeclKind::Function);
        first.position = SourcePosition::new("open_unix.go", 10);
        let mut second = record(1, "app", "Open", DeclKind::Function);
        second.position = SourcePosition::new("open_windows.go", 20);

        let lookup = DefinitionCollector::new(&scope).collect(vec![first, second], &mut graph);

        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.node("app::Open").unwrap().file, "open_windows.go");
        assert_eq!(lookup.get(DeclId(0)), lookup.get(DeclId(1)));
    }
}
