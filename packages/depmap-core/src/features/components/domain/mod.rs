//! Component model and scoring

use serde::{Deserialize, Serialize};

use crate::shared::constants::scoring::{DENSITY_WEIGHT, EDGE_WEIGHT};
use crate::shared::models::NodeId;

/// Maximal set of nodes connected when edges are read as undirected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// 0-based rank after sorting by score
    pub id: usize,

    /// Member node ids, sorted ascending
    #[serde(rename = "memberIDs")]
    pub member_ids: Vec<NodeId>,

    /// Directed edges with both endpoints inside the component
    #[serde(rename = "edgeCount")]
    pub edge_count: usize,

    pub score: f64,
}

impl Component {
    /// Build a component from unsorted members; the score is derived
    pub fn new(id: usize, mut member_ids: Vec<NodeId>, edge_count: usize) -> Self {
        member_ids.sort();
        let score = component_score(member_ids.len(), edge_count);
        Self {
            id,
            member_ids,
            edge_count,
            score,
        }
    }

    pub fn len(&self) -> usize {
        self.member_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.member_ids.is_empty()
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.member_ids
            .binary_search_by(|m| m.as_str().cmp(node_id))
            .is_ok()
    }

    /// Smallest member id, used to break score ties
    pub fn first_member(&self) -> Option<&str> {
        self.member_ids.first().map(String::as_str)
    }

    /// Internal edges relative to the `n * (n - 1)` possible directed edges
    pub fn density(&self) -> f64 {
        let n = self.len();
        let max_possible = n * n.saturating_sub(1);
        if max_possible == 0 {
            0.0
        } else {
            self.edge_count as f64 / max_possible as f64
        }
    }
}

/// Score a component with `node_count` members and `edge_count` internal edges
pub fn component_score(node_count: usize, edge_count: usize) -> f64 {
    if node_count == 0 {
        return 0.0;
    }

    let n = node_count as f64;
    let node_score = n * (n + 1.0).log2();
    let edge_score = edge_count as f64 * EDGE_WEIGHT;

    let max_possible_edges = node_count * (node_count - 1);
    if max_possible_edges > 0 {
        let density = edge_count as f64 / max_possible_edges as f64;
        let density_bonus = density * n * DENSITY_WEIGHT;
        return node_score + edge_score + density_bonus;
    }

    node_score + edge_score
}
