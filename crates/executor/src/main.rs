pub mod config;
pub mod error;
pub mod loader;
pub mod report;

use std::env;
use std::process;

use error::Error;
use loader::CsvLoader;
use path_solver_core::CsrGraph;
use path_solver_core::solver::BellmanFordSolver;
use path_solver_core::traits::ShortestPathSolver;

fn main() {
    let (path, start_override) = parse_args();

    if let Err(e) = run(&path, start_override) {
        eprintln!("Executor failed: {}", e);
        process::exit(1);
    }
}

/// Parse command-line arguments: the edge CSV path and an optional start vertex
fn parse_args() -> (String, Option<usize>) {
    let args: Vec<String> = env::args().collect();

    let Some(path) = args.get(1).cloned() else {
        usage_and_exit(&args[0]);
    };

    let start_override = args.get(2).map(|raw| match raw.parse::<usize>() {
        Ok(vertex) => vertex,
        Err(_) => usage_and_exit(&args[0]),
    });

    (path, start_override)
}

fn usage_and_exit(program: &str) -> ! {
    eprintln!(
        "Usage: {} <path_to_csv> [start_vertex]\n  - CSV columns: from,to,weight\n  - start_vertex defaults to the configured value",
        program
    );
    process::exit(1);
}

fn run(path: &str, start_override: Option<usize>) -> Result<(), Error> {
    let config = config::load_config()?;
    let start = start_override.unwrap_or(config.solver.start_vertex);

    let loader = CsvLoader::new(path.to_string());
    let edges = loader.load_edges()?;
    let graph = CsrGraph::from_edges(loader::infer_vertex_count(&edges), &edges)?;

    println!("{}", report::render_summary(&graph));

    if config.report.show_adjacency {
        for row in report::render_adjacency(&graph)? {
            println!("{}", row);
        }
    }

    let paths = BellmanFordSolver.shortest_paths(&graph, start)?;

    if paths.has_negative_cycle {
        println!(
            "Negative cycle reachable from vertex {}; distances are not meaningful.",
            start
        );
        return Ok(());
    }

    for row in report::render_report(&paths, config.report.show_unreachable)? {
        println!("{}", row);
    }

    Ok(())
}
