//! Build a graph from a CSV file of connections
//!
//! The file needs a header row with `source`, `dest` and `dist` columns, any
//! other columns are ignored. Every row is an undirected connection and is
//! added as two directed edges.

use crate::errors::ImportError;
use crate::graph::Graph;

use std::{fmt::Debug, fs::File, io::Read, path::Path, str::FromStr};
use num_traits::Zero;
use tracing::info;

const SOURCE_COLUMN: &str = "source";
const DEST_COLUMN: &str = "dest";
const DIST_COLUMN: &str = "dist";


/// Read connections from any CSV reader into a new graph
pub fn import_csv<C, R>(reader: R) -> Result<Graph<C>, ImportError>
where
    C: Zero + Ord + Copy + Debug + FromStr,
    R: Read,
{
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(ImportError::MissingColumn(name))
    };
    let (source_idx, dest_idx, dist_idx) = (column(SOURCE_COLUMN)?, column(DEST_COLUMN)?, column(DIST_COLUMN)?);

    // Parse everything first so a bad row leaves nothing half built
    let mut rows: Vec<(usize, String, String, C)> = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let row = record.position().map_or(i + 2, |p| p.line() as usize);

        let field = |idx: usize| record.get(idx).unwrap_or_default();
        let raw_dist = field(dist_idx);
        let dist = raw_dist.parse::<C>().map_err(|_| ImportError::InvalidDistance {
            row,
            value: raw_dist.to_string(),
        })?;

        rows.push((row, field(source_idx).to_string(), field(dest_idx).to_string(), dist));
    }

    let mut graph = Graph::new();
    for (_, from, to, _) in &rows {
        graph.add_node(from.as_str());
        graph.add_node(to.as_str());
    }
    for (row, from, to, dist) in rows {
        graph
            .add_connection(&from, &to, dist)
            .map_err(|source| ImportError::Graph { row, source })?;
    }

    info!(nodes = graph.node_count(), edges = graph.edge_count(), "imported graph from csv");
    Ok(graph)
}

/// Read connections from a CSV file on disk
pub fn import_csv_file<C>(path: impl AsRef<Path>) -> Result<Graph<C>, ImportError>
where
    C: Zero + Ord + Copy + Debug + FromStr,
{
    let file = File::open(path.as_ref())?;
    import_csv(file)
}
