//! All-pairs command handlers: `floyd-warshall`, `johnson` and `dijkstra-all`.

use anyhow::{Context, Result};

use pathweave_lib::{dijkstra_all_paths, floyd_warshall, johnson_all_paths, LoadedGraph, NodeId};

use crate::commands::ensure_node;
use crate::output::{render, MatrixReport, OutputFormat, PathReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllPairsAlgorithm {
    FloydWarshall,
    Johnson,
    Dijkstra,
}

impl AllPairsAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            AllPairsAlgorithm::FloydWarshall => "floyd-warshall",
            AllPairsAlgorithm::Johnson => "johnson",
            AllPairsAlgorithm::Dijkstra => "dijkstra-all",
        }
    }
}

/// Arguments for the all-pairs commands. With a pair given only that pair
/// is reported, otherwise every reachable pair is.
#[derive(Debug, Clone)]
pub struct AllPairsArgs {
    pub algorithm: AllPairsAlgorithm,
    pub pair: Option<(NodeId, NodeId)>,
}

/// Handle the all-pairs subcommands.
pub fn handle_all_pairs(
    graph: &LoadedGraph,
    args: &AllPairsArgs,
    format: OutputFormat,
) -> Result<String> {
    if let Some((from, to)) = args.pair {
        ensure_node(graph, from)?;
        ensure_node(graph, to)?;
    }

    let (paths, ok) = match args.algorithm {
        AllPairsAlgorithm::FloydWarshall => floyd_warshall(graph),
        AllPairsAlgorithm::Johnson => johnson_all_paths(graph),
        AllPairsAlgorithm::Dijkstra => (
            dijkstra_all_paths(graph).context("all-pairs dijkstra failed")?,
            true,
        ),
    };

    let Some((from, to)) = args.pair else {
        return render(
            &MatrixReport::from_all_pairs(args.algorithm.name(), &paths, ok),
            format,
        );
    };

    let (all, weight) = paths.all_between(from, to);
    let (_, _, unique) = paths.between(from, to);
    render(
        &PathReport::new(args.algorithm.name(), from, to, all, weight).with_unique(unique),
        format,
    )
}
