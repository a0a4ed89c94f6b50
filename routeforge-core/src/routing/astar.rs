use std::collections::BinaryHeap;

use hashbrown::{HashMap, HashSet};
use log::debug;
use petgraph::{graph::NodeIndex, visit::EdgeRef};
use rust_decimal::Decimal;

use super::PathFinder;
use super::path::{LinkLookup, PathResult, reconstruct};
use super::state::State;
use crate::model::NetworkGraph;

/// A* search minimising total link distance.
///
/// The heuristic is the great-circle distance to the target rounded down,
/// while link distances are rounded up, so it never overestimates and the
/// first time the target is dequeued its path is optimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarPathFinder;

impl PathFinder for AStarPathFinder {
    fn find_path(&self, graph: &NetworkGraph, from: &str, to: &str) -> PathResult {
        let currency = graph.currency();
        let (Some(start), Some(goal)) = (graph.lookup(from), graph.lookup(to)) else {
            debug!("A*: unknown endpoint {from} or {to}");
            return PathResult::empty(currency);
        };
        if start == goal {
            return PathResult::trivial(from, currency);
        }

        let target = graph.hub_at(goal).location;
        let heuristic = |node: NodeIndex| graph.hub_at(node).location.distance_km_floor(&target);

        let node_count = graph.node_count();
        let mut g_score: HashMap<NodeIndex, Decimal> = HashMap::with_capacity(node_count);
        let mut came_from: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(node_count);
        let mut closed: HashSet<NodeIndex> = HashSet::with_capacity(node_count);
        let mut open = BinaryHeap::with_capacity(node_count);

        g_score.insert(start, Decimal::ZERO);
        open.push(State {
            cost: heuristic(start),
            node: start,
        });

        while let Some(State { node, .. }) = open.pop() {
            if node == goal {
                let path = reconstruct(&came_from, start, goal);
                let lookup = LinkLookup::new(graph, |link| link.distance_km);
                return lookup
                    .replay(graph, &path)
                    .unwrap_or_else(|| PathResult::empty(currency));
            }

            // Stale entry of an already settled node
            if !closed.insert(node) {
                continue;
            }

            let g = g_score.get(&node).copied().unwrap_or(Decimal::MAX);

            for edge in graph.graph.edges(node) {
                let next = edge.target();
                if closed.contains(&next) {
                    continue;
                }
                let tentative = g.saturating_add(edge.weight().distance_km);
                if g_score.get(&next).is_none_or(|&best| tentative < best) {
                    g_score.insert(next, tentative);
                    came_from.insert(next, node);
                    open.push(State {
                        cost: tentative.saturating_add(heuristic(next)),
                        node: next,
                    });
                }
            }
        }

        debug!("A*: no path from {from} to {to}");
        PathResult::empty(currency)
    }
}
