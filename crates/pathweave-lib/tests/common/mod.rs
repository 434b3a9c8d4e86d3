//! Common test utilities and fixture graphs.
//!
//! Letters in the fixture descriptions map to node identifiers in order
//! (`a = 1`, `b = 2`, ...); the auxiliary node `Q` of the negative cycle
//! fixture is `0`.

use pathweave_lib::{GraphKind, NodeId, Weighted, WeightedGraph};

pub const C: NodeId = 3;
pub const D: NodeId = 4;
pub const E: NodeId = 5;
pub const F: NodeId = 6;
pub const G: NodeId = 7;
pub const H: NodeId = 8;

/// Directed weighted graph used for the K shortest paths scenario.
#[allow(dead_code)]
pub fn yen_graph() -> WeightedGraph {
    WeightedGraph::from_edges(
        GraphKind::Directed,
        &[
            (C, D, 3.0),
            (C, E, 2.0),
            (E, D, 1.0),
            (D, F, 4.0),
            (E, F, 2.0),
            (E, G, 3.0),
            (F, G, 2.0),
            (F, H, 1.0),
            (G, H, 2.0),
        ],
    )
    .expect("valid fixture graph")
}

/// Directed graph with the negative cycle `a -> b -> c -> a` (total -1),
/// a node `f` downstream of the cycle, and an auxiliary node `Q` (0) with a
/// zero-weight edge to every other node.
#[allow(dead_code)]
pub fn negative_cycle_graph() -> WeightedGraph {
    let (a, b, c, d, e, f) = (1, 2, 3, 4, 5, 6);
    let mut graph = WeightedGraph::from_edges(
        GraphKind::Directed,
        &[
            (a, b, -2.0),
            (b, c, 6.0),
            (c, a, -5.0),
            (d, c, -3.0),
            (d, e, 8.0),
            (e, b, 9.0),
            (e, c, 2.0),
            (a, f, 1.0),
        ],
    )
    .expect("valid fixture graph");
    for id in [a, b, c, d, e, f] {
        graph.set_edge(0, id, 0.0).expect("valid edge");
    }
    graph
}

/// Undirected `side x side` grid with unit weights. Node `(row, col)` has
/// identifier `row * side + col`.
#[allow(dead_code)]
pub fn grid(side: i64) -> WeightedGraph {
    let mut graph = WeightedGraph::undirected();
    for row in 0..side {
        for col in 0..side {
            let id = row * side + col;
            graph.add_node(id);
            if col + 1 < side {
                graph.set_edge(id, id + 1, 1.0).expect("valid edge");
            }
            if row + 1 < side {
                graph.set_edge(id, id + side, 1.0).expect("valid edge");
            }
        }
    }
    graph
}

/// Manhattan distance between two grid nodes, an admissible heuristic for
/// [`grid`].
#[allow(dead_code)]
pub fn manhattan(side: i64) -> impl Fn(NodeId, NodeId) -> f64 {
    move |from, to| {
        let (fr, fc) = (from / side, from % side);
        let (tr, tc) = (to / side, to % side);
        ((fr - tr).abs() + (fc - tc).abs()) as f64
    }
}

/// Deterministic pseudo-random directed graph with non-negative integer
/// weights in `0..=9`.
#[allow(dead_code)]
pub fn random_graph(nodes: i64, edges_per_node: usize, seed: u64) -> WeightedGraph {
    seeded_graph(nodes, edges_per_node, seed, |draw| (draw % 10) as f64)
}

/// Like [`random_graph`] with weights `k / 10 + 0.1` for `k` in `0..10`,
/// whose sums are generally not exact in binary floating point.
#[allow(dead_code)]
pub fn fractional_graph(nodes: i64, edges_per_node: usize, seed: u64) -> WeightedGraph {
    seeded_graph(nodes, edges_per_node, seed, |draw| {
        (draw % 10) as f64 / 10.0 + 0.1
    })
}

/// Like [`random_graph`] with weights in `-1.0..=3.75` in steps of `0.25`.
/// Negative cycles, self loops included, are common. Quarters add up
/// exactly, so engines can be compared bit for bit.
#[allow(dead_code)]
pub fn signed_graph(nodes: i64, edges_per_node: usize, seed: u64) -> WeightedGraph {
    seeded_graph(nodes, edges_per_node, seed, |draw| {
        (draw % 20) as f64 / 4.0 - 1.0
    })
}

/// Uses a fixed linear congruential sequence so every run sees the same
/// graph for a given seed.
#[allow(dead_code)]
fn seeded_graph(
    nodes: i64,
    edges_per_node: usize,
    seed: u64,
    weight: impl Fn(u64) -> f64,
) -> WeightedGraph {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        state >> 33
    };

    let mut graph = WeightedGraph::directed();
    for id in 0..nodes {
        graph.add_node(id);
    }
    for from in 0..nodes {
        for _ in 0..edges_per_node {
            let to = (next() % nodes as u64) as i64;
            let w = weight(next());
            graph.set_edge(from, to, w).expect("valid edge");
        }
    }
    graph
}

/// Sum of the edge weights along `path`, accumulated from the source.
#[allow(dead_code)]
pub fn path_sum(graph: &WeightedGraph, path: &[NodeId]) -> f64 {
    path.windows(2)
        .map(|pair| graph.weight(pair[0], pair[1]).expect("path follows edges"))
        .fold(0.0, |sum, w| sum + w)
}
