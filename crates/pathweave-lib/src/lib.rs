//! Pathweave library entry points.
//!
//! This crate provides shortest path engines over any graph that implements
//! the [`Graph`] capability trait: Dijkstra, Bellman-Ford, A*,
//! Floyd-Warshall, Johnson and Yen's K shortest loopless paths. Results are
//! returned as a [`ShortestTree`] (single source) or an [`AllPairs`] matrix,
//! both of which reconstruct paths and enumerate tied alternatives.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod description;
pub mod error;
pub mod graph;
pub mod path;
pub mod shortest;
pub mod weight;

pub use description::{load_graph, parse_graph, GraphDescription, LoadedGraph, Positions};
pub use error::{Error, Result};
pub use graph::{Graph, GraphKind, NodeId, Unweighted, WeightedGraph};
pub use path::{
    a_star, bellman_ford_all_from, bellman_ford_from, dijkstra_all_from, dijkstra_all_paths,
    dijkstra_from, floyd_warshall, johnson_all_paths, yen_k_shortest_paths,
    yen_k_shortest_paths_within, AStarResult, WeightedPath,
};
pub use shortest::{AllPairs, ShortestTree};
pub use weight::{weighting_for, Heuristic, NullHeuristic, UniformCost, Weighted, Weighting};
