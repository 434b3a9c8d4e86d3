//! Single-source command handlers: `dijkstra` and `bellman-ford`.

use anyhow::{Context, Result};

use pathweave_lib::{
    bellman_ford_all_from, bellman_ford_from, dijkstra_all_from, dijkstra_from, LoadedGraph,
    NodeId, ShortestTree,
};
use tracing::info;

use crate::commands::ensure_node;
use crate::output::{render, DistanceReport, OutputFormat, PathReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleSourceAlgorithm {
    Dijkstra,
    BellmanFord,
}

impl SingleSourceAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            SingleSourceAlgorithm::Dijkstra => "dijkstra",
            SingleSourceAlgorithm::BellmanFord => "bellman-ford",
        }
    }
}

/// Arguments for the single-source commands.
#[derive(Debug, Clone)]
pub struct SingleSourceArgs {
    pub algorithm: SingleSourceAlgorithm,
    pub from: NodeId,
    /// Report the path to this node instead of every distance.
    pub to: Option<NodeId>,
    /// Keep every tied predecessor and list all shortest paths.
    pub all_ties: bool,
}

/// Handle the `dijkstra` and `bellman-ford` subcommands.
pub fn handle_single_source(
    graph: &LoadedGraph,
    args: &SingleSourceArgs,
    format: OutputFormat,
) -> Result<String> {
    ensure_node(graph, args.from)?;
    if let Some(to) = args.to {
        ensure_node(graph, to)?;
    }

    let tree = search(graph, args)?;
    if tree.has_negative_cycle() {
        info!(source = args.from, "distances include negative cycle sentinels");
    }

    let Some(to) = args.to else {
        return render(&DistanceReport::from_tree(args.algorithm.name(), &tree), format);
    };

    let (paths, weight) = if args.all_ties {
        tree.all_to(to)
    } else {
        let (path, weight) = tree.to(to);
        let paths = if path.is_empty() { Vec::new() } else { vec![path] };
        (paths, weight)
    };
    render(
        &PathReport::new(args.algorithm.name(), args.from, to, paths, weight),
        format,
    )
}

fn search(graph: &LoadedGraph, args: &SingleSourceArgs) -> Result<ShortestTree> {
    let tree = match (args.algorithm, args.all_ties) {
        (SingleSourceAlgorithm::Dijkstra, false) => dijkstra_from(args.from, graph)
            .with_context(|| format!("dijkstra search from {} failed", args.from))?,
        (SingleSourceAlgorithm::Dijkstra, true) => dijkstra_all_from(args.from, graph)
            .with_context(|| format!("dijkstra search from {} failed", args.from))?,
        (SingleSourceAlgorithm::BellmanFord, false) => bellman_ford_from(args.from, graph).0,
        (SingleSourceAlgorithm::BellmanFord, true) => bellman_ford_all_from(args.from, graph).0,
    };
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{cyclic_graph, sample_graph, GraphBuilder};

    fn args(algorithm: SingleSourceAlgorithm, from: NodeId, to: Option<NodeId>) -> SingleSourceArgs {
        SingleSourceArgs {
            algorithm,
            from,
            to,
            all_ties: false,
        }
    }

    #[test]
    fn test_dijkstra_path_json() {
        let out = handle_single_source(
            &sample_graph(),
            &args(SingleSourceAlgorithm::Dijkstra, 1, Some(5)),
            OutputFormat::Json,
        )
        .expect("search succeeds");
        let json: serde_json::Value = serde_json::from_str(&out).expect("valid json");

        assert_eq!(json["weight"], 20.0);
        assert_eq!(json["paths"][0], serde_json::json!([1, 3, 6, 5]));
    }

    #[test]
    fn test_bellman_ford_reports_cycle() {
        let out = handle_single_source(
            &cyclic_graph(),
            &args(SingleSourceAlgorithm::BellmanFord, 1, None),
            OutputFormat::Json,
        )
        .expect("cycles are reported, not errors");
        let json: serde_json::Value = serde_json::from_str(&out).expect("valid json");

        assert_eq!(json["negative_cycle"], true);
        let statuses: Vec<_> = json["distances"]
            .as_array()
            .expect("distance list")
            .iter()
            .map(|entry| entry["status"].as_str().unwrap_or_default().to_string())
            .collect();
        assert_eq!(
            statuses,
            vec!["found", "negative_cycle", "negative_cycle", "found"]
        );
    }

    #[test]
    fn test_dijkstra_rejects_negative_edges() {
        let err = handle_single_source(
            &cyclic_graph(),
            &args(SingleSourceAlgorithm::Dijkstra, 1, None),
            OutputFormat::Text,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("negative edge weight"));
    }

    #[test]
    fn test_unknown_node_is_an_error() {
        let err = handle_single_source(
            &sample_graph(),
            &args(SingleSourceAlgorithm::Dijkstra, 1, Some(42)),
            OutputFormat::Text,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown node: 42"));
    }

    #[test]
    fn test_all_ties_lists_every_path() {
        let graph = GraphBuilder::new()
            .edge(1, 2, 1.0)
            .edge(1, 3, 1.0)
            .edge(2, 4, 1.0)
            .edge(3, 4, 1.0)
            .build();
        let mut tied = args(SingleSourceAlgorithm::Dijkstra, 1, Some(4));
        tied.all_ties = true;

        let out = handle_single_source(&graph, &tied, OutputFormat::Json).expect("search succeeds");
        let json: serde_json::Value = serde_json::from_str(&out).expect("valid json");
        assert_eq!(json["paths"].as_array().map(Vec::len), Some(2));
    }
}
