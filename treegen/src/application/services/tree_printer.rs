//! Debug printer for the raw edge stream

use std::io::Write;

use tracing::{info, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::level_order_edges;

/// Prints `parent, child` lines, preceded by a line echoing the arguments.
#[derive(Debug, Default)]
pub struct TreePrinter;

impl TreePrinter {
    pub fn new() -> Self {
        Self
    }

    /// Returns the number of edges written.
    #[instrument(skip(self, out))]
    pub fn print(&self, n: u64, n_nodes: u64, out: &mut dyn Write) -> ApplicationResult<u64> {
        let edges = level_order_edges(n, n_nodes)?;

        writeln!(out, "n: {}, n_nodes: {}", n, n_nodes).write_context("tree arguments")?;
        let mut written = 0;
        for edge in edges {
            writeln!(out, "{}", edge).write_context("tree edge")?;
            written += 1;
        }
        out.flush().write_context("tree")?;

        info!("wrote {} edges", written);
        Ok(written)
    }
}
