use std::fmt::Debug;
use thiserror::Error;


/// Errors raised while building a graph
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// Edge lengths must be strictly positive
    #[error("invalid edge length {length} for {from} -> {to}: distance must be positive")]
    InvalidEdgeLength { from: String, to: String, length: String },
}

impl GraphError {
    pub(crate) fn invalid_length<C: Debug>(from: &str, to: &str, length: C) -> Self {
        GraphError::InvalidEdgeLength {
            from: from.to_string(),
            to: to.to_string(),
            length: format!("{length:?}"),
        }
    }
}


/// Errors surfaced by route queries
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("'{0}' is not a known location")]
    UnknownLocation(String),
    #[error("no path found from {from} to {to}")]
    NoPathFound { from: String, to: String }, // destination never reached
}


/// Errors raised while importing a graph from CSV
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: invalid distance '{value}'")]
    InvalidDistance { row: usize, value: String },
    #[error("row {row}: {source}")]
    Graph { row: usize, source: GraphError },
}


/// Errors raised while reading interactive input
#[derive(Debug, Error)]
pub enum InputError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed")]
    EndOfInput,
}


/// Text that is not a finite decimal number
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid decimal '{0}'")]
pub struct ParseDecimalError(pub String);
