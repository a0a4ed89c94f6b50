use std::cmp::Ordering;

use petgraph::graph::NodeIndex;
use rust_decimal::Decimal;

#[derive(Copy, Clone, Eq, PartialEq)]
pub(crate) struct State {
    pub(crate) cost: Decimal,
    pub(crate) node: NodeIndex,
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap),
        // equal costs pop in node insertion order
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
