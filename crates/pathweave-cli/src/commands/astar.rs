//! `astar` command handler.

use anyhow::{Context, Result};

use pathweave_lib::{a_star, Graph, Heuristic, LoadedGraph, NodeId, NullHeuristic};

use crate::commands::ensure_node;
use crate::output::{render, OutputFormat, PathReport};

#[derive(Debug, Clone)]
pub struct AStarArgs {
    pub from: NodeId,
    pub to: NodeId,
    /// Ignore node positions and search with the zero heuristic.
    pub no_heuristic: bool,
}

/// Handle the `astar` subcommand.
///
/// Node positions from the graph description, when present, provide a
/// straight-line heuristic.
pub fn handle_astar(graph: &LoadedGraph, args: &AStarArgs, format: OutputFormat) -> Result<String> {
    ensure_node(graph, args.from)?;
    ensure_node(graph, args.to)?;

    let heuristic: Option<&dyn Heuristic> = if args.no_heuristic {
        Some(&NullHeuristic)
    } else {
        None
    };
    tracing::debug!(
        guided = !args.no_heuristic && graph.heuristic_coster().is_some(),
        "running a* search"
    );

    let result = a_star(args.from, args.to, graph, heuristic)
        .with_context(|| format!("a* search from {} to {} failed", args.from, args.to))?;
    let (path, weight) = result.to(args.to);
    let paths = if path.is_empty() { Vec::new() } else { vec![path] };

    render(
        &PathReport::new("astar", args.from, args.to, paths, weight).with_expanded(result.expanded),
        format,
    )
}
