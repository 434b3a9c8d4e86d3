// Test utilities used across `pathweave-cli` unit tests.
// Kept under `#[cfg(test)]` so it is not part of the public crate API.
use pathweave_lib::description::{EdgeDescription, NodeDescription};
use pathweave_lib::{GraphDescription, LoadedGraph, NodeId};

/// Builder for tests that constructs a graph description with sensible
/// defaults (directed, unit weights, no positions).
pub struct GraphBuilder {
    description: GraphDescription,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            description: GraphDescription {
                directed: true,
                nodes: Vec::new(),
                edges: Vec::new(),
            },
        }
    }

    pub fn undirected(mut self) -> Self {
        self.description.directed = false;
        self
    }

    pub fn node(mut self, id: NodeId) -> Self {
        self.description.nodes.push(NodeDescription {
            id,
            x: None,
            y: None,
        });
        self
    }

    pub fn positioned(mut self, id: NodeId, x: f64, y: f64) -> Self {
        self.description.nodes.push(NodeDescription {
            id,
            x: Some(x),
            y: Some(y),
        });
        self
    }

    pub fn edge(mut self, from: NodeId, to: NodeId, weight: f64) -> Self {
        self.description.edges.push(EdgeDescription {
            from,
            to,
            weight: Some(weight),
        });
        self
    }

    pub fn build(self) -> LoadedGraph {
        LoadedGraph::try_from(self.description).expect("valid test graph")
    }
}

/// Six-node directed graph whose shortest path from 1 to 5 is
/// `1 -> 3 -> 6 -> 5` with weight 20.
pub fn sample_graph() -> LoadedGraph {
    GraphBuilder::new()
        .edge(1, 2, 7.0)
        .edge(1, 3, 9.0)
        .edge(1, 6, 14.0)
        .edge(2, 3, 10.0)
        .edge(2, 4, 15.0)
        .edge(3, 4, 11.0)
        .edge(3, 6, 2.0)
        .edge(4, 5, 6.0)
        .edge(6, 5, 9.0)
        .build()
}

/// Directed graph with a negative cycle `2 -> 3 -> 2` reachable from 1.
pub fn cyclic_graph() -> LoadedGraph {
    GraphBuilder::new()
        .edge(1, 2, 1.0)
        .edge(2, 3, -3.0)
        .edge(3, 2, 1.0)
        .edge(1, 4, 2.0)
        .build()
}
