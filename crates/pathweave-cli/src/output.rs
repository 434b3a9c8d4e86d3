//! Output formatting for command results.
//!
//! Every command builds a report struct that serializes to JSON and renders
//! to plain (optionally colored) text. Infinite weights are not valid JSON
//! numbers, so reports carry a [`PathStatus`] next to an optional weight.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use pathweave_lib::{AllPairs, NodeId, ShortestTree, WeightedPath};

use crate::terminal::{format_weight, ColorPalette};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Reachability of a target as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStatus {
    Found,
    Unreachable,
    NegativeCycle,
}

impl PathStatus {
    pub fn of(weight: f64) -> Self {
        if weight == f64::INFINITY {
            PathStatus::Unreachable
        } else if weight == f64::NEG_INFINITY {
            PathStatus::NegativeCycle
        } else {
            PathStatus::Found
        }
    }
}

fn finite(weight: f64) -> Option<f64> {
    weight.is_finite().then_some(weight)
}

/// Text rendering of a report.
pub trait TextReport {
    fn to_text(&self, palette: &ColorPalette) -> String;
}

/// Render `report` in the requested format.
pub fn render<R: Serialize + TextReport>(report: &R, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.to_text(&ColorPalette::detect())),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("failed to serialize report as JSON")
        }
    }
}

fn format_path(nodes: &[NodeId], palette: &ColorPalette) -> String {
    let arrow = format!(" {}->{} ", palette.gray, palette.reset);
    nodes
        .iter()
        .map(|id| format!("{}{id}{}", palette.white_bold, palette.reset))
        .collect::<Vec<_>>()
        .join(&arrow)
}

fn colored_weight(weight: f64, palette: &ColorPalette) -> String {
    let color = match PathStatus::of(weight) {
        PathStatus::Found => palette.green,
        PathStatus::Unreachable => palette.yellow,
        PathStatus::NegativeCycle => palette.red,
    };
    format!("{color}{}{}", format_weight(weight), palette.reset)
}

/// Path (or tied paths) between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport {
    pub algorithm: &'static str,
    pub from: NodeId,
    pub to: NodeId,
    pub status: PathStatus,
    pub weight: Option<f64>,
    pub paths: Vec<Vec<NodeId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded: Option<usize>,
    #[serde(skip)]
    raw_weight: f64,
}

impl PathReport {
    pub fn new(
        algorithm: &'static str,
        from: NodeId,
        to: NodeId,
        paths: Vec<Vec<NodeId>>,
        weight: f64,
    ) -> Self {
        Self {
            algorithm,
            from,
            to,
            status: PathStatus::of(weight),
            weight: finite(weight),
            paths,
            unique: None,
            expanded: None,
            raw_weight: weight,
        }
    }

    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = Some(unique);
        self
    }

    pub fn with_expanded(mut self, expanded: usize) -> Self {
        self.expanded = Some(expanded);
        self
    }
}

impl TextReport for PathReport {
    fn to_text(&self, palette: &ColorPalette) -> String {
        let mut out = format!(
            "{} {} -> {}: {}",
            self.algorithm,
            self.from,
            self.to,
            colored_weight(self.raw_weight, palette)
        );
        for path in &self.paths {
            out.push_str(&format!("\n  path: {}", format_path(path, palette)));
        }
        if self.unique == Some(false) {
            out.push_str(&format!("\n  {}shortest path is not unique{}", palette.gray, palette.reset));
        }
        if let Some(expanded) = self.expanded {
            out.push_str(&format!("\n  expanded: {expanded}"));
        }
        out
    }
}

/// Distance to a single node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceEntry {
    pub node: NodeId,
    pub status: PathStatus,
    pub weight: Option<f64>,
}

/// Distances from one source to every node of the graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceReport {
    pub algorithm: &'static str,
    pub source: NodeId,
    pub negative_cycle: bool,
    pub distances: Vec<DistanceEntry>,
}

impl DistanceReport {
    pub fn from_tree(algorithm: &'static str, tree: &ShortestTree) -> Self {
        let distances = tree
            .nodes()
            .iter()
            .map(|&node| {
                let weight = tree.weight_to(node);
                DistanceEntry {
                    node,
                    status: PathStatus::of(weight),
                    weight: finite(weight),
                }
            })
            .collect();
        Self {
            algorithm,
            source: tree.source(),
            negative_cycle: tree.has_negative_cycle(),
            distances,
        }
    }
}

fn entry_weight(status: PathStatus, weight: Option<f64>) -> f64 {
    match status {
        PathStatus::Found => weight.unwrap_or_default(),
        PathStatus::Unreachable => f64::INFINITY,
        PathStatus::NegativeCycle => f64::NEG_INFINITY,
    }
}

fn cycle_warning(palette: &ColorPalette) -> String {
    format!(
        "\n{}warning: negative cycle detected{}",
        palette.red, palette.reset
    )
}

impl TextReport for DistanceReport {
    fn to_text(&self, palette: &ColorPalette) -> String {
        let mut out = format!("{} from {}", self.algorithm, self.source);
        if self.negative_cycle {
            out.push_str(&cycle_warning(palette));
        }
        for entry in &self.distances {
            out.push_str(&format!(
                "\n  {}{}{}: {}",
                palette.white_bold,
                entry.node,
                palette.reset,
                colored_weight(entry_weight(entry.status, entry.weight), palette)
            ));
        }
        out
    }
}

/// Distance between an ordered pair of nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairEntry {
    pub from: NodeId,
    pub to: NodeId,
    pub status: PathStatus,
    pub weight: Option<f64>,
}

/// All-pairs distances. Unreachable pairs are omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixReport {
    pub algorithm: &'static str,
    pub negative_cycle: bool,
    pub nodes: Vec<NodeId>,
    pub pairs: Vec<PairEntry>,
}

impl MatrixReport {
    pub fn from_all_pairs(algorithm: &'static str, paths: &AllPairs, ok: bool) -> Self {
        let nodes = paths.nodes().to_vec();
        let mut pairs = Vec::new();
        for &from in &nodes {
            for &to in &nodes {
                let weight = paths.weight(from, to);
                if weight == f64::INFINITY {
                    continue;
                }
                pairs.push(PairEntry {
                    from,
                    to,
                    status: PathStatus::of(weight),
                    weight: finite(weight),
                });
            }
        }
        Self {
            algorithm,
            negative_cycle: !ok,
            nodes,
            pairs,
        }
    }
}

impl TextReport for MatrixReport {
    fn to_text(&self, palette: &ColorPalette) -> String {
        let mut out = format!("{} all pairs ({} nodes)", self.algorithm, self.nodes.len());
        if self.negative_cycle {
            out.push_str(&cycle_warning(palette));
        }
        for pair in &self.pairs {
            out.push_str(&format!(
                "\n  {} -> {}: {}",
                pair.from,
                pair.to,
                colored_weight(entry_weight(pair.status, pair.weight), palette)
            ));
        }
        out
    }
}

/// Result of a K shortest paths query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KShortestReport {
    pub from: NodeId,
    pub to: NodeId,
    pub paths: Vec<WeightedPath>,
}

impl TextReport for KShortestReport {
    fn to_text(&self, palette: &ColorPalette) -> String {
        let mut out = format!(
            "yen {} -> {}: {} path(s)",
            self.from,
            self.to,
            self.paths.len()
        );
        for (rank, path) in self.paths.iter().enumerate() {
            out.push_str(&format!(
                "\n  #{} {}: {}",
                rank + 1,
                colored_weight(path.weight, palette),
                format_path(&path.nodes, palette)
            ));
        }
        out
    }
}
