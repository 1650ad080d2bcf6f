use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Indicates a vertex index outside `[0, V)` passed to graph
    /// construction, edge addition, the solve source, or a path query.
    #[error("Vertex index {0} is out of bounds.")]
    InvalidVertex(usize),

    /// A predecessor walk failed to terminate within `V` steps, usually
    /// because the chain was queried inside a negative-cycle-affected region.
    #[error("Predecessor chain did not terminate within the vertex count.")]
    CorruptPredecessorChain,
}
