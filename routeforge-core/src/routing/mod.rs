//! Path search over a [`NetworkGraph`] and scoring of the results

mod astar;
mod dijkstra;
mod path;
pub mod scoring;
mod state;

#[cfg(test)]
pub(crate) mod test_graphs;

pub use astar::AStarPathFinder;
pub use dijkstra::DijkstraPathFinder;
pub use path::PathResult;
pub use scoring::{Baseline, CompositeScorer};

use crate::model::NetworkGraph;

/// Single-pair shortest path search.
///
/// Implementations never fail: an unknown endpoint or an unreachable
/// target yields [`PathResult::empty`], and `from == to` yields a
/// one-node path with zero totals.
pub trait PathFinder: Send + Sync {
    fn find_path(&self, graph: &NetworkGraph, from: &str, to: &str) -> PathResult;
}
