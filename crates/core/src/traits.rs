use super::csr::CsrGraph;
use common::{error::Error, types::ShortestPaths};

/// Trait for solvers producing single-source shortest paths.
pub trait ShortestPathSolver {
    /// Computes shortest paths from `source` to every vertex of `graph`.
    ///
    /// Returns the distance and predecessor arrays together with the
    /// negative-cycle flag, or `Err(e)` if `source` is not a vertex of
    /// `graph`.
    fn shortest_paths(&self, graph: &CsrGraph, source: usize) -> Result<ShortestPaths, Error>;
}
