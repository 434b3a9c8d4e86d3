//! Pathweave CLI library.
//!
//! Command handlers, output formatting, logging setup and terminal styling
//! for the `pathweave` binary. Handlers return rendered output so they can be
//! exercised without spawning the binary.

pub mod commands;
pub mod logging;
pub mod output;
pub mod terminal;

#[cfg(test)]
pub(crate) mod test_helpers;
