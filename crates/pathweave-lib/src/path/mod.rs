//! Shortest path engines.
//!
//! Every engine reads a graph through [`crate::Graph`] and resolves weights
//! with [`crate::weight::weighting_for`]. Single-source engines return a
//! [`crate::ShortestTree`], all-pairs engines an [`crate::AllPairs`].
//! Engines that cannot handle negative weights fail with
//! [`crate::Error::NegativeWeight`]; the others report negative cycles through
//! a boolean flag next to their result.

mod a_star;
mod bellman_ford;
mod dijkstra;
mod floyd_warshall;
mod johnson;
mod queue;
mod yen;

pub use a_star::{a_star, AStarResult};
pub use bellman_ford::{bellman_ford_all_from, bellman_ford_from};
pub use dijkstra::{dijkstra_all_from, dijkstra_all_paths, dijkstra_from};
pub use floyd_warshall::floyd_warshall;
pub use johnson::johnson_all_paths;
pub use yen::{yen_k_shortest_paths, yen_k_shortest_paths_within, WeightedPath};
