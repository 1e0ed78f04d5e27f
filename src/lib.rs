//! Shortest routes between named places
//!
//! A [`Graph`] of labeled places joined by positive length edges, searched
//! with Dijkstra's algorithm. The `import`, `input` and `session` modules
//! build graphs from CSV files or typed answers and drive the interactive
//! query loop of the `wayfinder` binary.

mod collections;
pub mod errors;
pub mod graph;
pub mod graph_algos;
pub mod import;
pub mod input;
pub mod length;
pub mod session;

pub use errors::{GraphError, ImportError, InputError, ParseDecimalError, RouteError};
pub use graph::{Edge, Graph, Node};
pub use length::Decimal;
pub use graph_algos::{dijkstra, find_route, shortest_path, Distance, Route, ShortestPaths};
