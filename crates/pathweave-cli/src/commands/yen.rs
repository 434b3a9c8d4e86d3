//! `yen` command handler.

use anyhow::{ensure, Context, Result};

use pathweave_lib::{yen_k_shortest_paths_within, LoadedGraph, NodeId};

use crate::commands::ensure_node;
use crate::output::{render, KShortestReport, OutputFormat};

#[derive(Debug, Clone)]
pub struct YenArgs {
    pub from: NodeId,
    pub to: NodeId,
    /// Maximum number of paths.
    pub k: usize,
    /// Only report paths at most this much heavier than the shortest one.
    pub slack: Option<f64>,
}

/// Handle the `yen` subcommand.
pub fn handle_yen(graph: &LoadedGraph, args: &YenArgs, format: OutputFormat) -> Result<String> {
    ensure_node(graph, args.from)?;
    ensure_node(graph, args.to)?;
    let slack = args.slack.unwrap_or(f64::INFINITY);
    ensure!(slack >= 0.0, "--slack must not be negative (got {slack})");

    let paths = yen_k_shortest_paths_within(graph, Some(args.k), slack, args.from, args.to)
        .with_context(|| format!("k shortest paths from {} to {} failed", args.from, args.to))?;

    render(
        &KShortestReport {
            from: args.from,
            to: args.to,
            paths,
        },
        format,
    )
}
