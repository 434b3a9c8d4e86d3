// Handlers for the CLI subcommands.
//
// Each module handles one family of engines. main.rs parses arguments and
// loads the graph, then dispatches to these handlers, which return the
// rendered output.

pub mod all_pairs;
pub mod astar;
pub mod single_source;
pub mod yen;

use anyhow::Result;

use pathweave_lib::{Error, Graph, NodeId};

/// Fail with [`Error::UnknownNode`] unless `id` is part of `graph`.
pub(crate) fn ensure_node(graph: &impl Graph, id: NodeId) -> Result<()> {
    if graph.has_node(id) {
        Ok(())
    } else {
        Err(Error::UnknownNode { id }.into())
    }
}
