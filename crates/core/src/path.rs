use common::{error::Error, types::ShortestPaths};

/// Materializes the source→target vertex sequence recorded in `paths`.
///
/// The walk follows `predecessors` backward from `target` until a vertex
/// with no predecessor (the solve's source), collecting vertices, then
/// reverses them into forward order. `paths` is only read; the same result
/// can be queried for any number of targets.
///
/// Returns `Ok(None)` when `target` has no finite distance, i.e. it was not
/// reachable from the source.
///
/// # Errors
/// - `Error::InvalidVertex` if `target` is not a vertex of the solved graph.
/// - `Error::CorruptPredecessorChain` if the walk would exceed `V` steps
///   without terminating, which means the predecessors form a cycle. This is
///   the expected failure when reconstructing into a negative-cycle-affected
///   region; check `has_negative_cycle` before trusting routes.
pub fn reconstruct_path(paths: &ShortestPaths, target: usize) -> Result<Option<Vec<usize>>, Error> {
    let num_vertices = paths.vertex_count();
    if target >= num_vertices {
        return Err(Error::InvalidVertex(target));
    }
    if paths.distances[target].is_none() {
        return Ok(None);
    }

    let mut route = vec![target];
    let mut current = target;
    let mut steps = 0;

    while let Some(previous) = paths.predecessors[current] {
        steps += 1;
        if steps > num_vertices {
            return Err(Error::CorruptPredecessorChain);
        }

        route.push(previous);
        current = previous;
    }

    route.reverse();
    Ok(Some(route))
}
