/// Type alias for a single edge: (source, target, weight)
pub type Edge = (usize, usize, i64);

/// Output of one single-source shortest-path solve.
///
/// All three fields describe the same solve and are read together:
/// - `distances`: per-vertex best-known total weight from the source;
///   `None` is the sentinel for "unreachable".
/// - `predecessors`: per-vertex upstream vertex on the recorded best path;
///   `None` for the source itself and for unreachable vertices.
/// - `has_negative_cycle`: when `true`, a negative-weight cycle is reachable
///   from the source and distances for affected vertices are meaningless.
///   Callers must check this flag before trusting distances or routes.
///
/// A value is produced fresh per solve and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    pub distances: Vec<Option<i64>>,
    pub predecessors: Vec<Option<usize>>,
    pub has_negative_cycle: bool,
}

impl ShortestPaths {
    /// Result of solving a graph with no vertices.
    pub fn empty() -> Self {
        ShortestPaths {
            distances: Vec::new(),
            predecessors: Vec::new(),
            has_negative_cycle: false,
        }
    }

    /// Number of vertices in the solved graph.
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Returns true if `vertex` has a finite recorded distance.
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distances.get(vertex).is_some_and(Option::is_some)
    }
}
