use std::collections::BinaryHeap;

use hashbrown::{HashMap, HashSet};
use log::debug;
use petgraph::{graph::NodeIndex, visit::EdgeRef};
use rust_decimal::Decimal;

use super::PathFinder;
use super::path::{LinkLookup, PathResult, reconstruct};
use super::state::State;
use crate::model::NetworkGraph;

/// Dijkstra's algorithm minimising total link cost.
///
/// Nodes missing from the tentative cost map are at infinite cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraPathFinder;

impl PathFinder for DijkstraPathFinder {
    fn find_path(&self, graph: &NetworkGraph, from: &str, to: &str) -> PathResult {
        let currency = graph.currency();
        let (Some(start), Some(goal)) = (graph.lookup(from), graph.lookup(to)) else {
            debug!("Dijkstra: unknown endpoint {from} or {to}");
            return PathResult::empty(currency);
        };
        if start == goal {
            return PathResult::trivial(from, currency);
        }

        let node_count = graph.node_count();
        let mut costs: HashMap<NodeIndex, Decimal> = HashMap::with_capacity(node_count);
        let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(node_count);
        let mut visited: HashSet<NodeIndex> = HashSet::with_capacity(node_count);
        let mut heap = BinaryHeap::with_capacity(node_count);

        // Start node has cost 0
        costs.insert(start, Decimal::ZERO);
        heap.push(State {
            cost: Decimal::ZERO,
            node: start,
        });

        while let Some(State { cost, node }) = heap.pop() {
            if node == goal {
                let path = reconstruct(&predecessors, start, goal);
                let lookup = LinkLookup::new(graph, |link| link.cost.amount());
                return lookup
                    .replay(graph, &path)
                    .unwrap_or_else(|| PathResult::empty(currency));
            }

            if !visited.insert(node) {
                continue;
            }

            for edge in graph.graph.edges(node) {
                let next = edge.target();
                if visited.contains(&next) {
                    continue;
                }
                let next_cost = cost.saturating_add(edge.weight().cost.amount());

                match costs.entry(next) {
                    hashbrown::hash_map::Entry::Vacant(entry) => {
                        entry.insert(next_cost);
                        predecessors.insert(next, node);
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                    }
                    hashbrown::hash_map::Entry::Occupied(mut entry) => {
                        if next_cost < *entry.get() {
                            *entry.get_mut() = next_cost;
                            predecessors.insert(next, node);
                            heap.push(State {
                                cost: next_cost,
                                node: next,
                            });
                        }
                    }
                }
            }
        }

        debug!("Dijkstra: no path from {from} to {to}");
        PathResult::empty(currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::test_graphs::{diamond, disconnected, hub, link, parallel_links};
    use rust_decimal_macros::dec;

    #[test]
    fn finds_cheapest_path() {
        let graph = diamond();
        let path = DijkstraPathFinder.find_path(&graph, "A", "D");
        assert_eq!(path.nodes, vec!["A", "C", "D"]);
        assert_eq!(path.cost.amount(), dec!(250));
        assert_eq!(path.distance_km, dec!(370));
        assert_eq!(path.duration.num_hours(), 6);
    }

    #[test]
    fn same_node_is_trivial() {
        let graph = diamond();
        let path = DijkstraPathFinder.find_path(&graph, "C", "C");
        assert_eq!(path.nodes, vec!["C"]);
        assert!(path.cost.is_zero());
    }

    #[test]
    fn unreachable_target_gives_empty_result() {
        let graph = disconnected();
        assert!(DijkstraPathFinder.find_path(&graph, "A", "B").is_empty());
        assert!(DijkstraPathFinder.find_path(&graph, "A", "nowhere").is_empty());
    }

    #[test]
    fn replays_the_cheaper_of_parallel_links() {
        let graph = parallel_links();
        let path = DijkstraPathFinder.find_path(&graph, "A", "B");
        assert_eq!(path.nodes, vec!["A", "B"]);
        assert_eq!(path.cost.amount(), dec!(40));
        assert_eq!(path.distance_km, dec!(300));
    }

    #[test]
    fn overflowing_totals_yield_no_path() {
        let mut graph = NetworkGraph::new();
        hub(&mut graph, "A", 0.0, 0.0);
        hub(&mut graph, "B", 0.0, 1.0);
        hub(&mut graph, "C", 0.0, 2.0);
        link(&mut graph, "A", "B", dec!(120), 1, Decimal::MAX);
        link(&mut graph, "B", "C", dec!(120), 1, Decimal::MAX);

        assert!(DijkstraPathFinder.find_path(&graph, "A", "C").is_empty());
        assert!(!DijkstraPathFinder.find_path(&graph, "A", "B").is_empty());
    }
}
