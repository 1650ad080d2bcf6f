use common::{error::Error, types::ShortestPaths};
use path_solver_core::{CsrGraph, reconstruct_path};

/// One-line summary of a loaded graph.
pub fn render_summary(graph: &CsrGraph) -> String {
    format!(
        "Graph loaded: {} vertices, {} edges.",
        graph.num_vertices,
        graph.num_edges()
    )
}

/// Renders one adjacency row per vertex: its outgoing edges as
/// `target[weight]` entries in insertion order, header included.
pub fn render_adjacency(graph: &CsrGraph) -> Result<Vec<String>, Error> {
    let mut rows = vec![format!("{}\t{}", "vertex", "out-edges target[weight]")];

    for vertex in 0..graph.num_vertices {
        let entries: Vec<String> = graph
            .out_edges(vertex)?
            .map(|(target, weight)| format!("{}[{}]", target, weight))
            .collect();

        rows.push(format!("{}\t{}", vertex, entries.join(" ")));
    }

    Ok(rows)
}

/// Renders one `{vertex, distance, route}` row per vertex, header included.
///
/// Unreachable vertices get a placeholder row when `show_unreachable` is
/// set, and are omitted otherwise.
///
/// Callers are expected to have checked `has_negative_cycle` already; when
/// the flag is set, route reconstruction into an affected region fails with
/// `Error::CorruptPredecessorChain`, which is propagated as-is.
pub fn render_report(paths: &ShortestPaths, show_unreachable: bool) -> Result<Vec<String>, Error> {
    let mut rows = vec![format!("{}\t{}\t{}", "vertex", "distance", "route")];

    for vertex in 0..paths.vertex_count() {
        match paths.distances[vertex] {
            Some(distance) => {
                if let Some(route) = reconstruct_path(paths, vertex)? {
                    rows.push(format!("{}\t{}\t{}", vertex, distance, render_route(&route)));
                }
            }
            None if show_unreachable => {
                rows.push(format!("{}\tinf\tunreachable", vertex));
            }
            None => {}
        }
    }

    Ok(rows)
}

fn render_route(route: &[usize]) -> String {
    route
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
