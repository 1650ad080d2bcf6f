use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;

use super::error::Error;
use common::types::Edge;

// Helper struct for CSV parsing
#[derive(Debug, Deserialize, Default)]
pub struct CsvRecord {
    #[serde(rename = "from")]
    pub from_vertex: usize,

    #[serde(rename = "to")]
    pub to_vertex: usize,

    #[serde(rename = "weight")]
    pub weight_value: i64,
}

/// Reads a whole edge-list CSV into memory for one-shot graph construction.
pub struct CsvLoader {
    path: String,
}

impl CsvLoader {
    pub fn new(path: String) -> Self {
        CsvLoader { path }
    }

    /// Parses the file into an edge list. Only the `from`, `to` and `weight`
    /// columns are read; extra columns are ignored. Row order is preserved,
    /// which fixes the edge enumeration order of the solve.
    pub fn load_edges(&self) -> Result<Vec<Edge>, Error> {
        let file = File::open(&self.path).map_err(|e| {
            eprintln!("Failed to read file {}: {:?}", self.path, e);
            Error::IoError(e)
        })?;

        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

        let mut edges = Vec::new();

        for result in rdr.deserialize() {
            let record: CsvRecord = result?;
            edges.push((record.from_vertex, record.to_vertex, record.weight_value));
        }
        Ok(edges)
    }
}

/// Smallest vertex count that covers every endpoint in `edges`.
pub fn infer_vertex_count(edges: &[Edge]) -> usize {
    edges
        .iter()
        .flat_map(|&(source, target, _)| [source, target])
        .max()
        .map_or(0, |max_id| max_id + 1)
}
