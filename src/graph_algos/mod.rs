pub mod dijkstra;
mod shortest_path;

pub use dijkstra::dijkstra;
pub use shortest_path::shortest_path;

use crate::collections::FxIndexMap;
use crate::errors::RouteError;
use crate::graph::Graph;

use std::{fmt::{self, Debug, Display}, ops::Index};
use num_traits::{CheckedAdd, Zero};

/// Type alias for the node map used in path planning algorithms
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the total cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;

/// Parent index of the source and of nodes never reached
pub(crate) const NO_PARENT: usize = usize::MAX;


/// Distance from the source
/// Infinite sorts after every finite value and absorbs any addition
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<C> {
    Finite(C),
    Infinite,
}

impl<C> Distance<C>
where
    C: CheckedAdd + Copy,
{
    /// Extend the distance by an edge length
    /// An overflowing sum becomes Infinite rather than wrapping
    pub fn saturating_add(self, length: C) -> Self {
        match self {
            Distance::Finite(d) => d.checked_add(&length).map_or(Distance::Infinite, Distance::Finite),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl<C: Copy> Distance<C> {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(&self) -> Option<C> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Infinite => None,
        }
    }
}

impl<C: Display> Display for Distance<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => Display::fmt(d, f),
            Distance::Infinite => f.write_str("Infinity"),
        }
    }
}


/// A reachable destination: total distance and the labels from source to target
#[derive(Clone, Debug, PartialEq)]
pub struct Route<C> {
    pub distance: C,
    pub labels: Vec<String>,
}


/// Distances and predecessors produced by one solver run
/// Holds an entry for every node of the graph, unreached nodes stay Infinite
#[derive(Clone, Debug)]
pub struct ShortestPaths<C> {
    source: String,
    node_map: GraphNodeMap<String, Distance<C>>,
}

impl<C: Copy> ShortestPaths<C> {

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Distance to a node, Infinite when unreached or unknown
    pub fn distance(&self, label: &str) -> Distance<C> {
        self.node_map
            .get(label)
            .map_or(Distance::Infinite, |&(_, distance)| distance)
    }

    /// Node preceding `label` on its shortest path
    pub fn predecessor(&self, label: &str) -> Option<&str> {
        let &(parent_index, _) = self.node_map.get(label)?;
        self.node_map
            .get_index(parent_index)
            .map(|(parent, _)| parent.as_str())
    }

    pub fn is_reachable(&self, label: &str) -> bool {
        self.distance(label).is_finite()
    }

    /// All (label, distance) pairs, graph nodes first in insertion order
    pub fn distances(&self) -> impl Iterator<Item = (&str, Distance<C>)> {
        self.node_map.iter().map(|(label, &(_, distance))| (label.as_str(), distance))
    }

    /// Route to a target, None when it was never reached
    pub fn route_to(&self, target: &str) -> Option<Route<C>> {
        let distance = self.distance(target).finite()?;
        Some(Route {
            distance,
            labels: shortest_path(self, target),
        })
    }

    pub(crate) fn node_map(&self) -> &GraphNodeMap<String, Distance<C>> {
        &self.node_map
    }
}

impl<C: Copy> Index<&str> for ShortestPaths<C> {
    type Output = Distance<C>;

    /// Panics if `label` has no entry
    fn index(&self, label: &str) -> &Self::Output {
        &self.node_map[label].1
    }
}


/// Shortest route between two known places
/// Both labels must be nodes of the graph, a destination never reached is NoPathFound
pub fn find_route<C>(graph: &Graph<C>, from: &str, to: &str) -> Result<Route<C>, RouteError>
where
    C: Zero + Ord + Copy + CheckedAdd + Debug,
{
    for label in [from, to] {
        if !graph.contains(label) {
            return Err(RouteError::UnknownLocation(label.to_string()));
        }
    }

    dijkstra(graph, from)
        .route_to(to)
        .ok_or_else(|| RouteError::NoPathFound {
            from: from.to_string(),
            to: to.to_string(),
        })
}
