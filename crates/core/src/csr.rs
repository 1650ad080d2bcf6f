use common::error::Error;
use common::types::Edge;

/// Directed weighted graph in Compressed Sparse Row (CSR) format.
///
/// CSR format stores outgoing edges of each vertex contiguously in memory:
/// - `node_pointers[u]..node_pointers[u+1]` → edges leaving vertex `u`
/// - `edge_targets[i]` -> target vertex of edge `i`
/// - `edge_weights[i]` -> weight of edge `i`
///
/// Within a vertex's block, edges keep the order in which they were added.
/// The edge count is derived: it is always `node_pointers[num_vertices]`.
///
/// The store is append-only. Once built it is frozen for querying; there is
/// no edge removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrGraph {
    pub num_vertices: usize,
    pub node_pointers: Vec<usize>,
    pub edge_targets: Vec<usize>,
    pub edge_weights: Vec<i64>,
}

impl CsrGraph {
    /// Creates an edgeless graph over vertices `0..num_vertices`.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            node_pointers: vec![0; num_vertices + 1],
            edge_targets: Vec::new(),
            edge_weights: Vec::new(),
        }
    }

    /// Builds a graph from a list of `(source, target, weight)` edges.
    ///
    /// Uses the two-pass counting technique: one pass to size each vertex's
    /// block, a prefix sum over `node_pointers`, then a placement pass. The
    /// placement is stable, so each block preserves the insertion order of
    /// `edges` and no sorting is needed.
    ///
    /// Parallel edges and self-loops are kept as distinct entries.
    ///
    /// # Errors
    /// Returns `Error::InvalidVertex` for the first endpoint outside
    /// `[0, num_vertices)`; nothing is constructed in that case.
    pub fn from_edges(num_vertices: usize, edges: &[Edge]) -> Result<Self, Error> {
        for &(source, target, _) in edges {
            check_vertex(source, num_vertices)?;
            check_vertex(target, num_vertices)?;
        }

        let m = edges.len();
        let mut node_pointers = vec![0; num_vertices + 1];

        for &(source, _, _) in edges {
            node_pointers[source + 1] += 1;
        }

        for i in 1..=num_vertices {
            node_pointers[i] += node_pointers[i - 1];
        }

        let mut edge_targets = vec![0; m];
        let mut edge_weights = vec![0; m];

        let mut cursor = node_pointers.clone();

        for &(source, target, weight) in edges {
            let pos = cursor[source]; // Next free slot in `source`'s block
            edge_targets[pos] = target;
            edge_weights[pos] = weight;

            cursor[source] += 1;
        }

        Ok(Self {
            num_vertices,
            node_pointers,
            edge_targets,
            edge_weights,
        })
    }

    /// Appends one edge to the end of `source`'s block.
    ///
    /// Inserting into the flat arrays shifts every later block, so a single
    /// append costs O(V + E); use [`CsrGraph::from_edges`] for bulk
    /// construction. A graph grown edge by edge is identical to one built in
    /// bulk from the same list.
    ///
    /// # Errors
    /// Returns `Error::InvalidVertex` if either endpoint is out of range;
    /// the graph is left untouched.
    pub fn add_edge(&mut self, source: usize, target: usize, weight: i64) -> Result<(), Error> {
        check_vertex(source, self.num_vertices)?;
        check_vertex(target, self.num_vertices)?;

        let pos = self.node_pointers[source + 1];
        self.edge_targets.insert(pos, target);
        self.edge_weights.insert(pos, weight);

        for pointer in &mut self.node_pointers[source + 1..] {
            *pointer += 1;
        }

        Ok(())
    }

    /// Number of edges currently stored.
    pub fn num_edges(&self) -> usize {
        self.edge_targets.len()
    }

    /// Iterates `vertex`'s outgoing edges as `(target, weight)` pairs, in
    /// insertion order.
    ///
    /// # Errors
    /// Returns `Error::InvalidVertex` if `vertex` is out of range.
    pub fn out_edges(
        &self,
        vertex: usize,
    ) -> Result<impl Iterator<Item = (usize, i64)> + '_, Error> {
        check_vertex(vertex, self.num_vertices)?;

        let start = self.node_pointers[vertex];
        let end = self.node_pointers[vertex + 1];

        Ok(self.edge_targets[start..end]
            .iter()
            .copied()
            .zip(self.edge_weights[start..end].iter().copied()))
    }
}

fn check_vertex(vertex: usize, num_vertices: usize) -> Result<(), Error> {
    if vertex >= num_vertices {
        return Err(Error::InvalidVertex(vertex));
    }
    Ok(())
}
