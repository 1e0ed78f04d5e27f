use crate::collections::{FxIndexMap, FxIndexSet};
use crate::errors::GraphError;

use std::{borrow::Borrow, fmt::{self, Debug}};
use num_traits::Zero;


/// Place on the graph, identified only by its label
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node {
    label: String,
}

impl Node {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

// Lets the node set be queried with a plain &str
impl Borrow<str> for Node {
    fn borrow(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}


/// Directed edge, owned by the adjacency entry of its origin
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<C> {
    pub to: String, // lookup key into the node set
    pub length: C,
}


/// Weighted directed graph of labeled places
/// Append only: nodes and edges can be added or overwritten, never removed
#[derive(Clone, Debug)]
pub struct Graph<C> {
    nodes: FxIndexSet<Node>,
    edges: FxIndexMap<String, FxIndexMap<String, Edge<C>>>, // from -> (to -> edge)
}

impl<C> Default for Graph<C> {
    fn default() -> Self {
        Self {
            nodes: FxIndexSet::default(),
            edges: FxIndexMap::default(),
        }
    }
}

impl<C> Graph<C>
where
    C: Zero + Ord + Copy + Debug,
{

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, returns false if a node with the same label already exists
    pub fn add_node(&mut self, label: impl Into<String>) -> bool {
        self.nodes.insert(Node::new(label))
    }

    /// Add the directed edge from -> to, replacing any previous edge for the pair
    /// Endpoints are not checked against the node set, callers add nodes first
    pub fn add_edge(&mut self, from: &str, to: &str, length: C) -> Result<(), GraphError> {
        if length <= C::zero() {
            return Err(GraphError::invalid_length(from, to, length));
        }

        self.edges
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), Edge { to: to.to_string(), length });

        Ok(())
    }

    /// Add an undirected connection as two directed edges of equal length
    pub fn add_connection(&mut self, a: &str, b: &str, length: C) -> Result<(), GraphError> {
        // validate before touching either direction
        if length <= C::zero() {
            return Err(GraphError::invalid_length(a, b, length));
        }
        self.add_edge(a, b, length)?;
        self.add_edge(b, a, length)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.nodes.contains(label)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(|out| out.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Outgoing edges of a node, empty when it has none
    pub fn neighbors<'a>(&'a self, label: &str) -> impl Iterator<Item = &'a Edge<C>> + use<'a, C> {
        self.edges
            .get(label)
            .into_iter()
            .flat_map(|out| out.values())
    }

    pub fn edge(&self, from: &str, to: &str) -> Option<&Edge<C>> {
        self.edges.get(from).and_then(|out| out.get(to))
    }

    /// Index of a node in the node set
    pub(crate) fn node_index(&self, label: &str) -> Option<usize> {
        self.nodes.get_index_of(label)
    }
}
