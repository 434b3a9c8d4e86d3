use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::weight::{Heuristic, Weighted};

/// Opaque node identifier, unique within a graph.
///
/// Identifiers carry no ordering semantics; engines only compare them to make
/// heap tie-breaking deterministic.
pub type NodeId = i64;

/// Read-only graph capability consumed by every path engine.
///
/// Only `nodes`, `from` and `has_edge` are required. Weights and heuristics
/// are optional capabilities discovered through [`Graph::weighting`] and
/// [`Graph::heuristic_coster`]; a graph without a weighting is treated as
/// unit-cost (see [`crate::UniformCost`]).
///
/// `nodes` and `from` must yield the same sequence on every call while the
/// graph is not mutated, otherwise results are not reproducible. Engines
/// borrow the graph for the whole call, so it cannot change underneath them.
pub trait Graph {
    /// Every node in the graph.
    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_;

    /// Nodes reachable from `id` over a single outgoing edge.
    fn from(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_;

    /// Whether an edge `u -> v` exists.
    fn has_edge(&self, u: NodeId, v: NodeId) -> bool;

    /// Whether `id` names a node of the graph.
    fn has_node(&self, id: NodeId) -> bool {
        self.nodes().any(|node| node == id)
    }

    /// Edge weights, when the graph carries them.
    fn weighting(&self) -> Option<&dyn Weighted> {
        None
    }

    /// A heuristic supplied by the graph itself, used by A* when the caller
    /// does not pass one.
    fn heuristic_coster(&self) -> Option<&dyn Heuristic> {
        None
    }
}

/// Edge direction semantics of a [`WeightedGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphKind {
    #[default]
    Directed,
    Undirected,
}

/// In-memory weighted graph with deterministic iteration order.
///
/// Undirected graphs store every edge in both directions. Self loops are
/// allowed; without one, the weight from a node to itself is `self_weight`
/// (zero unless configured).
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    kind: GraphKind,
    self_weight: f64,
    adjacency: BTreeMap<NodeId, BTreeMap<NodeId, f64>>,
}

impl WeightedGraph {
    /// Create an empty graph of the given kind.
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            self_weight: 0.0,
            adjacency: BTreeMap::new(),
        }
    }

    /// Create an empty directed graph.
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// Create an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Build a graph from `(from, to, weight)` triples.
    pub fn from_edges(kind: GraphKind, edges: &[(NodeId, NodeId, f64)]) -> Result<Self> {
        let mut graph = Self::new(kind);
        for &(u, v, weight) in edges {
            graph.set_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Override the weight reported from a node to itself.
    pub fn with_self_weight(mut self, weight: f64) -> Self {
        self.self_weight = weight;
        self
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Add an isolated node. Existing nodes are left untouched.
    pub fn add_node(&mut self, id: NodeId) {
        self.adjacency.entry(id).or_default();
    }

    /// Insert or replace the edge `u -> v` (and `v -> u` when undirected).
    pub fn set_edge(&mut self, u: NodeId, v: NodeId, weight: f64) -> Result<()> {
        if weight.is_nan() {
            return Err(Error::InvalidWeight { from: u, to: v });
        }

        self.adjacency.entry(u).or_default().insert(v, weight);
        let reverse = self.adjacency.entry(v).or_default();
        if self.kind == GraphKind::Undirected {
            reverse.insert(u, weight);
        }
        Ok(())
    }

    /// Remove the edge `u -> v` (and `v -> u` when undirected). Returns the
    /// removed weight.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId) -> Option<f64> {
        let removed = self.adjacency.get_mut(&u)?.remove(&v);
        if self.kind == GraphKind::Undirected {
            if let Some(reverse) = self.adjacency.get_mut(&v) {
                reverse.remove(&u);
            }
        }
        removed
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges; undirected edges are counted once.
    pub fn edge_count(&self) -> usize {
        let directed: usize = self.adjacency.values().map(BTreeMap::len).sum();
        match self.kind {
            GraphKind::Directed => directed,
            GraphKind::Undirected => {
                let loops = self
                    .adjacency
                    .iter()
                    .filter(|(id, targets)| targets.contains_key(*id))
                    .count();
                (directed - loops) / 2 + loops
            }
        }
    }

    /// View of this graph that hides its weights, so engines fall back to
    /// unit costs.
    pub fn unweighted(&self) -> Unweighted<'_> {
        Unweighted { graph: self }
    }
}

impl Default for WeightedGraph {
    fn default() -> Self {
        Self::directed()
    }
}

impl Graph for WeightedGraph {
    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    fn from(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flat_map(|targets| targets.keys().copied())
    }

    fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.adjacency
            .get(&u)
            .is_some_and(|targets| targets.contains_key(&v))
    }

    fn has_node(&self, id: NodeId) -> bool {
        self.adjacency.contains_key(&id)
    }

    fn weighting(&self) -> Option<&dyn Weighted> {
        Some(self)
    }
}

impl Weighted for WeightedGraph {
    fn weight(&self, u: NodeId, v: NodeId) -> Option<f64> {
        if let Some(weight) = self.adjacency.get(&u).and_then(|targets| targets.get(&v)) {
            return Some(*weight);
        }
        (u == v).then_some(self.self_weight)
    }
}

/// A [`WeightedGraph`] with its weighting capability hidden.
#[derive(Debug, Clone, Copy)]
pub struct Unweighted<'a> {
    graph: &'a WeightedGraph,
}

impl Graph for Unweighted<'_> {
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_edges_are_mirrored() {
        let graph = WeightedGraph::from_edges(GraphKind::Undirected, &[(1, 2, 4.0), (2, 3, 1.5)])
            .expect("valid graph");

        assert!(graph.has_edge(2, 1));
        assert_eq!(graph.weight(3, 2), Some(1.5));
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.from(2).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn self_weight_applies_without_a_loop() {
        let mut graph = WeightedGraph::directed().with_self_weight(0.5);
        graph.add_node(7);
        assert_eq!(graph.weight(7, 7), Some(0.5));

        graph.set_edge(7, 7, -1.0).expect("loop accepted");
        assert_eq!(graph.weight(7, 7), Some(-1.0));
    }

    #[test]
    fn missing_edge_has_no_weight() {
        let graph =
            WeightedGraph::from_edges(GraphKind::Directed, &[(1, 2, 1.0)]).expect("valid graph");
        assert_eq!(graph.weight(2, 1), None);
        assert!(graph.has_node(2), "targets are registered as nodes");
    }

    #[test]
    fn nan_weight_is_rejected() {
        let mut graph = WeightedGraph::directed();
        let err = graph.set_edge(1, 2, f64::NAN).unwrap_err();
        assert!(matches!(err, Error::InvalidWeight { from: 1, to: 2 }));
    }

    #[test]
    fn remove_edge_clears_both_directions() {
        let mut graph = WeightedGraph::from_edges(GraphKind::Undirected, &[(1, 2, 1.0)])
            .expect("valid graph");
        assert_eq!(graph.remove_edge(2, 1), Some(1.0));
        assert!(!graph.has_edge(1, 2));
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn unweighted_view_hides_weights() {
        let graph =
            WeightedGraph::from_edges(GraphKind::Directed, &[(1, 2, 9.0)]).expect("valid graph");
        assert!(graph.weighting().is_some());
        assert!(graph.unweighted().weighting().is_none());
    }
}
