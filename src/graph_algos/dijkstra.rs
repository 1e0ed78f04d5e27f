use crate::graph::Graph;
use super::{Distance, GraphNodeMap, ShortestPaths, NO_PARENT};

use std::{collections::BinaryHeap, cmp::Ordering, fmt::Debug};
use num_traits::{CheckedAdd, Zero};
use indexmap::map::Entry::{Occupied, Vacant};
use tracing::{debug, trace, warn};




/// Shortest distances from `source` to every node using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Edge lengths are strictly positive, so a node's cost is final once popped with its best cost
/// An unknown source reaches nothing: every node is left Infinite
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn dijkstra<C>(graph: &Graph<C>, source: &str) -> ShortestPaths<C>
where
    C: Zero + Ord + Copy + CheckedAdd + Debug,
    {

    // Every node starts unreached with no parent
    let mut node_map: GraphNodeMap<String, Distance<C>> = graph
        .nodes()
        .map(|node| (node.label().to_string(), (NO_PARENT, Distance::Infinite)))
        .collect();

    let Some(source_index) = graph.node_index(source) else {
        warn!(source, "source is not a node of the graph");
        return ShortestPaths { source: source.to_string(), node_map };
    };
    node_map[source_index].1 = Distance::Finite(Zero::zero());

    // Nodes to visit - binary heap sorts Biggest to Smallest, NodeId reverses it
    // Stale entries stay in the heap and are skipped when popped
    let mut nodes_to_visit: BinaryHeap<NodeId<Distance<C>>> = BinaryHeap::new();
    nodes_to_visit.push(NodeId {
        index: source_index,
        cost: Distance::Finite(Zero::zero()),
    });

    let mut settled = 0usize;

    while let Some(NodeId { index, cost }) = nodes_to_visit.pop() {

        // fetch current best cost for node
        let Some((node, &(_, best))) = node_map.get_index(index) else {
            continue;
        };

        // A better path to this node was already found
        if cost > best {
            continue;
        }
        settled += 1;

        let node = node.clone();
        for edge in graph.neighbors(&node) {

            let new_cost = best.saturating_add(edge.length);
            if !new_cost.is_finite() {
                continue;
            }

            let neighbor_index = match node_map.entry(edge.to.clone()) {
                Vacant(e) => {
                    // edge target missing from the node set
                    let i = e.index();
                    e.insert((index, new_cost));
                    i
                }
                Occupied(mut e) => {
                    if new_cost < e.get().1 {
                        e.insert((index, new_cost));
                        e.index()
                    } else {
                        continue;
                    }
                }
            };

            trace!(from = %node, to = %edge.to, cost = ?new_cost, "relaxed");
            nodes_to_visit.push(NodeId {
                index: neighbor_index,
                cost: new_cost,
            });
        }
    }

    debug!(settled, "dijkstra finished");
    ShortestPaths { source: source.to_string(), node_map }
}


/// Node identifier
/// - for ordering we only need cost and a way to identify the node
#[derive(Debug)]
struct NodeId<T> {
    index: usize,
    cost: T
}

impl<T: Ord> Ord for NodeId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}
impl<T: Ord> PartialOrd for NodeId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for NodeId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}
impl<T: PartialEq> Eq for NodeId<T> {}


#[cfg(test)]
mod tests {
    use super::*;

    // Helper function to create an undirected graph from (a, b, length) triples
    fn create_graph(nodes: &[&str], connections: &[(&str, &str, u64)]) -> Graph<u64> {
        let mut graph = Graph::new();
        for node in nodes {
            graph.add_node(*node);
        }
        for &(a, b, length) in connections {
            graph.add_connection(a, b, length).unwrap();
        }
        graph
    }

    // A-B:1, B-C:2, A-C:5, C-D:1
    fn create_test_graph() -> Graph<u64> {
        create_graph(
            &["A", "B", "C", "D"],
            &[("A", "B", 1), ("B", "C", 2), ("A", "C", 5), ("C", "D", 1)],
        )
    }

    #[test]
    fn test_dijkstra_finds_optimal_path() {
        let graph = create_test_graph();

        let paths = dijkstra(&graph, "A");

        assert_eq!(paths["D"], Distance::Finite(4));
        let route = paths.route_to("D").unwrap();
        assert_eq!(route.distance, 4);
        assert_eq!(route.labels, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_dijkstra_all_distances() {
        let graph = create_test_graph();

        let paths = dijkstra(&graph, "A");

        assert_eq!(paths.distance("A"), Distance::Finite(0));
        assert_eq!(paths.distance("B"), Distance::Finite(1));
        assert_eq!(paths.distance("C"), Distance::Finite(3));
        assert_eq!(paths.predecessor("C"), Some("B"));
        assert_eq!(paths.predecessor("A"), None);
        assert_eq!(paths.source(), "A");
    }

    #[test]
    fn test_dijkstra_handles_unreachable_node() {
        let graph = create_graph(&["X", "Y"], &[]);

        let paths = dijkstra(&graph, "X");

        assert_eq!(paths.distance("Y"), Distance::Infinite);
        assert!(paths.is_reachable("X"));
        assert!(!paths.is_reachable("Y"));
        assert_eq!(paths.predecessor("Y"), None);
        assert!(paths.route_to("Y").is_none());
    }

    #[test]
    fn test_dijkstra_directed_edges() {
        let mut graph: Graph<u64> = Graph::new();
        graph.add_node("A");
        graph.add_node("B");
        graph.add_edge("A", "B", 3).unwrap();

        assert_eq!(dijkstra(&graph, "A").distance("B"), Distance::Finite(3));
        assert_eq!(dijkstra(&graph, "B").distance("A"), Distance::Infinite);
    }

    #[test]
    fn test_dijkstra_unknown_source() {
        let graph = create_test_graph();

        let paths = dijkstra(&graph, "Q");

        assert!(paths.distances().all(|(_, d)| d == Distance::Infinite));
        assert_eq!(paths.distances().count(), 4);
    }

    #[test]
    fn test_dijkstra_with_cycle() {
        let mut graph: Graph<u64> = Graph::new();
        for node in ["A", "B", "C", "D"] {
            graph.add_node(node);
        }
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_edge("B", "C", 1).unwrap();
        graph.add_edge("C", "A", 1).unwrap();
        graph.add_edge("C", "D", 2).unwrap();

        let paths = dijkstra(&graph, "A");

        assert_eq!(paths.distance("C"), Distance::Finite(2));
        assert_eq!(paths.distance("D"), Distance::Finite(4));
        assert_eq!(paths.route_to("D").unwrap().labels, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_dijkstra_reflects_overwritten_edge() {
        let mut graph = create_test_graph();
        assert_eq!(dijkstra(&graph, "A").distance("D"), Distance::Finite(4));

        // Shorten A-C so the direct route wins
        graph.add_connection("A", "C", 1).unwrap();

        let paths = dijkstra(&graph, "A");
        assert_eq!(paths.distance("D"), Distance::Finite(2));
        assert_eq!(paths.route_to("D").unwrap().labels, vec!["A", "C", "D"]);
        assert_eq!(graph.edge_count(), 8);
    }

    #[test]
    fn test_dijkstra_symmetric_distances() {
        let graph = create_graph(&["A", "B", "C"], &[("A", "B", 6), ("B", "C", 2)]);

        assert_eq!(dijkstra(&graph, "A").distance("B"), Distance::Finite(6));
        assert_eq!(dijkstra(&graph, "B").distance("A"), Distance::Finite(6));
    }

    #[test]
    fn test_dijkstra_triangle_inequality() {
        let graph = create_graph(
            &["A", "B", "C", "D", "E", "F"],
            &[
                ("A", "B", 4), ("A", "C", 2), ("B", "C", 1), ("B", "D", 5),
                ("C", "D", 8), ("C", "E", 10), ("D", "E", 2), ("D", "F", 6),
                ("E", "F", 3),
            ],
        );

        let paths = dijkstra(&graph, "A");

        assert_eq!(paths.distance("A"), Distance::Finite(0));
        for node in graph.nodes() {
            let du = paths.distance(node.label());
            for edge in graph.neighbors(node.label()) {
                assert!(paths.distance(&edge.to) <= du.saturating_add(edge.length));
            }
        }
        // A->C->B->D->E->F
        assert_eq!(paths.distance("F"), Distance::Finite(13));
    }

    #[test]
    fn test_dijkstra_overflow_is_not_a_path() {
        let mut graph: Graph<u8> = Graph::new();
        for node in ["A", "B", "C"] {
            graph.add_node(node);
        }
        graph.add_edge("A", "B", 200).unwrap();
        graph.add_edge("B", "C", 100).unwrap();

        let paths = dijkstra(&graph, "A");

        assert_eq!(paths.distance("B"), Distance::Finite(200));
        assert_eq!(paths.distance("C"), Distance::Infinite);
    }

    #[test]
    fn test_dijkstra_reaches_dangling_target() {
        let mut graph: Graph<u64> = Graph::new();
        graph.add_node("A");
        graph.add_edge("A", "Ghost", 2).unwrap();

        let paths = dijkstra(&graph, "A");

        assert_eq!(paths.distance("Ghost"), Distance::Finite(2));
    }

    #[test]
    fn test_concurrent_solves_share_graph() {
        let graph = create_test_graph();

        let results: Vec<_> = std::thread::scope(|s| {
            let handles: Vec<_> = ["A", "B", "C", "D"]
                .into_iter()
                .map(|source| {
                    let graph = &graph;
                    s.spawn(move || dijkstra(graph, source).distance("D"))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(
            results,
            vec![Distance::Finite(4), Distance::Finite(3), Distance::Finite(1), Distance::Finite(0)]
        );
    }
}
