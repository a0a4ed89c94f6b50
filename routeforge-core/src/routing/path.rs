use chrono::TimeDelta;
use hashbrown::HashMap;
use petgraph::{graph::NodeIndex, visit::EdgeRef};
use rust_decimal::Decimal;

use crate::model::{Currency, Link, Money, NetworkGraph};

/// Output of a path search.
///
/// An empty `nodes` list means no path exists. A single node means the
/// search started at its own target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    pub nodes: Vec<String>,
    pub distance_km: Decimal,
    pub duration: TimeDelta,
    pub cost: Money,
}

impl PathResult {
    pub fn empty(currency: Currency) -> Self {
        Self {
            nodes: Vec::new(),
            distance_km: Decimal::ZERO,
            duration: TimeDelta::zero(),
            cost: Money::zero(currency),
        }
    }

    pub fn trivial(node: impl Into<String>, currency: Currency) -> Self {
        Self {
            nodes: vec![node.into()],
            ..Self::empty(currency)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// `(from, to) -> link` map used to replay a found path.
///
/// For parallel links the one with the smallest `weight` is kept, which is
/// the one the search relaxed through.
pub(crate) struct LinkLookup<'g> {
    links: HashMap<(NodeIndex, NodeIndex), &'g Link>,
}

impl<'g> LinkLookup<'g> {
    pub(crate) fn new(graph: &'g NetworkGraph, weight: impl Fn(&Link) -> Decimal) -> Self {
        let mut links: HashMap<(NodeIndex, NodeIndex), &'g Link> =
            HashMap::with_capacity(graph.link_count());
        for edge in graph.graph.edge_references() {
            let key = (edge.source(), edge.target());
            let link = edge.weight();
            match links.entry(key) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(link);
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if weight(link) < weight(entry.get()) {
                        entry.insert(link);
                    }
                }
            }
        }
        Self { links }
    }

    /// Sum the path's links in order. Returns `None` if two consecutive
    /// nodes are not linked or a total overflows.
    pub(crate) fn replay(&self, graph: &NetworkGraph, path: &[NodeIndex]) -> Option<PathResult> {
        let mut distance_km = Decimal::ZERO;
        let mut duration = TimeDelta::zero();
        let mut cost = Decimal::ZERO;

        for pair in path.windows(2) {
            let link = self.links.get(&(pair[0], pair[1]))?;
            distance_km = distance_km.checked_add(link.distance_km)?;
            duration = duration.checked_add(&link.duration)?;
            cost = cost.checked_add(link.cost.amount())?;
        }

        let currency = graph.currency();
        Some(PathResult {
            nodes: path
                .iter()
                .map(|&idx| graph.hub_at(idx).id.clone())
                .collect(),
            distance_km,
            duration,
            cost: Money::new(cost, currency).unwrap_or_else(|_| Money::zero(currency)),
        })
    }
}

/// Walk predecessors back from `goal` to `start`
pub(crate) fn reconstruct(
    came_from: &HashMap<NodeIndex, NodeIndex>,
    start: NodeIndex,
    goal: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match came_from.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
