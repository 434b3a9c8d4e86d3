use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};

use pathweave_cli::commands::all_pairs::{handle_all_pairs, AllPairsAlgorithm, AllPairsArgs};
use pathweave_cli::commands::astar::{handle_astar, AStarArgs};
use pathweave_cli::commands::single_source::{
    handle_single_source, SingleSourceAlgorithm, SingleSourceArgs,
};
use pathweave_cli::commands::yen::{handle_yen, YenArgs};
use pathweave_cli::logging::{init_logging, LogFormat, LoggingConfig};
use pathweave_cli::output::OutputFormat;
use pathweave_lib::{load_graph, NodeId};

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest path engines over JSON graph descriptions")]
struct Cli {
    /// Graph description file (JSON).
    #[arg(long, global = true, env = "PATHWEAVE_GRAPH")]
    graph: Option<PathBuf>,

    /// Output format for command results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log output format (logs are written to stderr).
    #[arg(
        long,
        global = true,
        value_enum,
        env = "PATHWEAVE_LOG_FORMAT",
        default_value_t = LogFormat::Text
    )]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Single-source shortest paths for non-negative weights.
    Dijkstra(SourceArgs),
    /// Single-source shortest paths allowing negative weights.
    BellmanFord(SourceArgs),
    /// Shortest path between two nodes guided by node positions.
    Astar {
        #[arg(long, allow_hyphen_values = true)]
        from: NodeId,
        #[arg(long, allow_hyphen_values = true)]
        to: NodeId,
        /// Ignore node positions.
        #[arg(long)]
        no_heuristic: bool,
    },
    /// All-pairs shortest paths by dynamic programming.
    FloydWarshall(PairArgs),
    /// All-pairs shortest paths by reweighting and Dijkstra.
    Johnson(PairArgs),
    /// All-pairs shortest paths by Dijkstra from every node.
    DijkstraAll(PairArgs),
    /// K shortest loopless paths between two nodes.
    Yen {
        #[arg(long, allow_hyphen_values = true)]
        from: NodeId,
        #[arg(long, allow_hyphen_values = true)]
        to: NodeId,
        /// Maximum number of paths to report.
        #[arg(short = 'k', long, default_value_t = 3)]
        k: usize,
        /// Only report paths at most this much heavier than the shortest.
        #[arg(long)]
        slack: Option<f64>,
    },
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Source node.
    #[arg(long, allow_hyphen_values = true)]
    from: NodeId,
    /// Report only the path to this node.
    #[arg(long, allow_hyphen_values = true)]
    to: Option<NodeId>,
    /// List every tied shortest path.
    #[arg(long)]
    all_ties: bool,
}

#[derive(Args, Debug)]
struct PairArgs {
    /// Report only the path starting here (requires --to).
    #[arg(long, allow_hyphen_values = true, requires = "to")]
    from: Option<NodeId>,
    /// Report only the path ending here (requires --from).
    #[arg(long, allow_hyphen_values = true, requires = "from")]
    to: Option<NodeId>,
}

impl PairArgs {
    fn into_args(self, algorithm: AllPairsAlgorithm) -> AllPairsArgs {
        AllPairsArgs {
            algorithm,
            pair: self.from.zip(self.to),
        }
    }
}

impl SourceArgs {
    fn into_args(self, algorithm: SingleSourceAlgorithm) -> SingleSourceArgs {
        SingleSourceArgs {
            algorithm,
            from: self.from,
            to: self.to,
            all_ties: self.all_ties,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LoggingConfig::new(cli.log_format));

    let path = cli
        .graph
        .ok_or_else(|| anyhow!("no graph given; pass --graph or set PATHWEAVE_GRAPH"))?;
    let graph = load_graph(&path)
        .with_context(|| format!("failed to load graph from {}", path.display()))?;
    let format = cli.format;

    let output = match cli.command {
        Command::Dijkstra(args) => handle_single_source(
            &graph,
            &args.into_args(SingleSourceAlgorithm::Dijkstra),
            format,
        ),
        Command::BellmanFord(args) => handle_single_source(
            &graph,
            &args.into_args(SingleSourceAlgorithm::BellmanFord),
            format,
        ),
        Command::Astar {
            from,
            to,
            no_heuristic,
        } => handle_astar(
            &graph,
            &AStarArgs {
                from,
                to,
                no_heuristic,
            },
            format,
        ),
        Command::FloydWarshall(args) => handle_all_pairs(
            &graph,
            &args.into_args(AllPairsAlgorithm::FloydWarshall),
            format,
        ),
        Command::Johnson(args) => {
            handle_all_pairs(&graph, &args.into_args(AllPairsAlgorithm::Johnson), format)
        }
        Command::DijkstraAll(args) => {
            handle_all_pairs(&graph, &args.into_args(AllPairsAlgorithm::Dijkstra), format)
        }
        Command::Yen { from, to, k, slack } => {
            handle_yen(&graph, &YenArgs { from, to, k, slack }, format)
        }
    }?;

    println!("{output}");
    Ok(())
}
