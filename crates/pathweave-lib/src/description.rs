//! JSON graph descriptions.
//!
//! A description lists nodes (optionally with planar coordinates) and
//! weighted edges:
//!
//! ```json
//! {
//!   "directed": true,
//!   "nodes": [{ "id": 1, "x": 0.0, "y": 0.0 }, { "id": 2 }],
//!   "edges": [{ "from": 1, "to": 2, "weight": 2.5 }, { "from": 2, "to": 1 }]
//! }
//! ```
//!
//! Edges without a weight cost `1`. Loading a description yields a
//! [`LoadedGraph`], which exposes the node positions as an A* heuristic.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, GraphKind, NodeId, WeightedGraph};
use crate::weight::{Heuristic, Weighted};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDescription {
    #[serde(default = "default_directed")]
    pub directed: bool,
    #[serde(default)]
    pub nodes: Vec<NodeDescription>,
    #[serde(default)]
    pub edges: Vec<EdgeDescription>,
}

fn default_directed() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDescription {
    pub id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDescription {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Planar node coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Known node positions, usable as a straight-line A* heuristic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Positions {
    positions: HashMap<NodeId, Position>,
}

impl Positions {
    pub fn get(&self, id: NodeId) -> Option<Position> {
        self.positions.get(&id).copied()
    }

    pub fn insert(&mut self, id: NodeId, position: Position) {
        self.positions.insert(id, position);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl Heuristic for Positions {
    /// Euclidean distance, or `0` when either endpoint has no position.
    fn estimate(&self, from: NodeId, to: NodeId) -> f64 {
        let Some(goal) = self.get(to) else {
            return 0.0;
        };
        self.get(from)
            .map_or(0.0, |current| current.distance_to(&goal))
    }
}

/// A graph built from a description, together with its node positions.
#[derive(Debug, Clone, Default)]
pub struct LoadedGraph {
    pub graph: WeightedGraph,
    pub positions: Positions,
}

impl Graph for LoadedGraph {
    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.nodes()
    }

    fn from(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.from(id)
    }

    fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.graph.has_edge(u, v)
    }

    fn has_node(&self, id: NodeId) -> bool {
        self.graph.has_node(id)
    }

    fn weighting(&self) -> Option<&dyn Weighted> {
        Some(&self.graph)
    }

    fn heuristic_coster(&self) -> Option<&dyn Heuristic> {
        if self.positions.is_empty() {
            None
        } else {
            Some(&self.positions)
        }
    }
}

impl TryFrom<GraphDescription> for LoadedGraph {
    type Error = Error;

    fn try_from(description: GraphDescription) -> Result<Self> {
        let kind = if description.directed {
            GraphKind::Directed
        } else {
            GraphKind::Undirected
        };
        let mut graph = WeightedGraph::new(kind);
        let mut positions = Positions::default();
        let mut seen = HashSet::new();

        for node in &description.nodes {
            if !seen.insert(node.id) {
                return Err(Error::DuplicateNode { id: node.id });
            }
            graph.add_node(node.id);
            if let (Some(x), Some(y)) = (node.x, node.y) {
                positions.insert(node.id, Position { x, y });
            }
        }

        for edge in &description.edges {
            graph.add_node(edge.from);
            graph.set_edge(edge.from, edge.to, edge.weight.unwrap_or(1.0))?;
        }

        Ok(Self { graph, positions })
    }
}

/// Parse a JSON graph description.
pub fn parse_graph(json: &str) -> Result<LoadedGraph> {
    let description: GraphDescription = serde_json::from_str(json)?;
    LoadedGraph::try_from(description)
}

/// Read and parse a JSON graph description from `path`.
pub fn load_graph(path: &Path) -> Result<LoadedGraph> {
    let json = fs::read_to_string(path).map_err(|source| Error::GraphRead {
        path: path.to_path_buf(),
        source,
    })?;
    let loaded = parse_graph(&json)?;
    debug!(
        path = %path.display(),
        nodes = loaded.graph.node_count(),
        edges = loaded.graph.edge_count(),
        positions = loaded.positions.len(),
        "loaded graph description"
    );
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_directed_unit_weights() {
        let loaded = parse_graph(r#"{ "edges": [{ "from": 1, "to": 2 }] }"#).expect("valid json");

        assert_eq!(loaded.graph.kind(), GraphKind::Directed);
        assert_eq!(loaded.graph.weight(1, 2), Some(1.0));
        assert_eq!(loaded.graph.weight(2, 1), None);
        assert!(loaded.heuristic_coster().is_none());
    }

    #[test]
    fn undirected_edges_are_mirrored() {
        let loaded = parse_graph(
            r#"{ "directed": false, "edges": [{ "from": 1, "to": 2, "weight": 2.5 }] }"#,
        )
        .expect("valid json");

        assert_eq!(loaded.graph.weight(2, 1), Some(2.5));
        assert_eq!(loaded.graph.edge_count(), 1);
    }

    #[test]
    fn duplicate_nodes_are_rejected() {
        let err = parse_graph(r#"{ "nodes": [{ "id": 4 }, { "id": 4 }] }"#).unwrap_err();
        assert!(matches!(err, Error::DuplicateNode { id: 4 }));
    }

    #[test]
    fn positions_drive_the_heuristic() {
        let loaded = parse_graph(
            r#"{
                "nodes": [
                    { "id": 1, "x": 0.0, "y": 0.0 },
                    { "id": 2, "x": 3.0, "y": 4.0 },
                    { "id": 3 }
                ]
            }"#,
        )
        .expect("valid json");

        let heuristic = loaded.heuristic_coster().expect("positions present");
        assert_eq!(heuristic.estimate(1, 2), 5.0);
        assert_eq!(heuristic.estimate(3, 2), 0.0);
        assert_eq!(loaded.graph.node_count(), 3);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(parse_graph("{ nodes"), Err(Error::Json(_))));
    }
}
