//! Edge weightings and A* heuristics.

use crate::graph::{Graph, NodeId};

/// Weight lookup for an ordered pair of nodes.
///
/// `None` means there is no edge from `u` to `v` and the pair is not an
/// identity pair.
pub trait Weighted {
    fn weight(&self, u: NodeId, v: NodeId) -> Option<f64>;
}

/// Unit-cost weighting for graphs that carry no weights.
///
/// Identity pairs cost `0`, existing edges cost `1`, anything else is absent.
#[derive(Debug, Clone, Copy)]
pub struct UniformCost<'a, G> {
    graph: &'a G,
}

impl<'a, G: Graph> UniformCost<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }
}

impl<G: Graph> Weighted for UniformCost<'_, G> {
    fn weight(&self, u: NodeId, v: NodeId) -> Option<f64> {
        if u == v {
            return Some(0.0);
        }
        self.graph.has_edge(u, v).then_some(1.0)
    }
}

/// Weighting resolved for a particular graph: its own weights when it has
/// them, unit costs otherwise.
pub enum Weighting<'a, G> {
    Graph(&'a dyn Weighted),
    Uniform(UniformCost<'a, G>),
}

impl<G: Graph> Weighted for Weighting<'_, G> {
    fn weight(&self, u: NodeId, v: NodeId) -> Option<f64> {
        match self {
            Weighting::Graph(weighted) => weighted.weight(u, v),
            Weighting::Uniform(uniform) => uniform.weight(u, v),
        }
    }
}

/// Resolve the weighting every engine uses for `graph`.
pub fn weighting_for<G: Graph>(graph: &G) -> Weighting<'_, G> {
    match graph.weighting() {
        Some(weighted) => Weighting::Graph(weighted),
        None => Weighting::Uniform(UniformCost::new(graph)),
    }
}

/// Sum the weights along `path`. Returns `+inf` when an edge is missing.
pub(crate) fn path_weight(weighting: &impl Weighted, path: &[NodeId]) -> f64 {
    path.windows(2)
        .map(|pair| weighting.weight(pair[0], pair[1]).unwrap_or(f64::INFINITY))
        .sum()
}

/// Estimated remaining cost from a node to the search target.
///
/// The estimate should be admissible (never above the true remaining cost).
/// Because [`crate::a_star`] never reopens a closed node, an optimal path is
/// only guaranteed when it is also consistent: `h(u) <= w(u, v) + h(v)` for
/// every edge. Any `Fn(NodeId, NodeId) -> f64` closure is a heuristic.
pub trait Heuristic {
    fn estimate(&self, from: NodeId, to: NodeId) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(NodeId, NodeId) -> f64,
{
    fn estimate(&self, from: NodeId, to: NodeId) -> f64 {
        self(from, to)
    }
}

/// Zero heuristic; turns A* into Dijkstra with early exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHeuristic;

impl Heuristic for NullHeuristic {
    fn estimate(&self, _from: NodeId, _to: NodeId) -> f64 {
        0.0
    }
}
