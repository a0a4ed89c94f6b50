//! Small hand-built graphs shared by the search tests.
//! Link distances are never below the straight-line distance.

use chrono::TimeDelta;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::{Coordinate, Currency, Hub, Link, Money, NetworkGraph};

pub(crate) fn hub(graph: &mut NetworkGraph, id: &str, lat: f64, lon: f64) {
    graph
        .add_hub(Hub::new(id, id, Coordinate::from_degrees(lat, lon).unwrap()))
        .unwrap();
}

pub(crate) fn link(
    graph: &mut NetworkGraph,
    from: &str,
    to: &str,
    km: Decimal,
    hours: i64,
    cost: Decimal,
) {
    graph
        .add_link(Link {
            from: from.into(),
            to: to.into(),
            distance_km: km,
            duration: TimeDelta::hours(hours),
            cost: Money::new(cost, Currency::CNY).unwrap(),
        })
        .unwrap();
}

/// A -> B -> D is short and expensive, A -> C -> D is long and cheap
pub(crate) fn diamond() -> NetworkGraph {
    let mut graph = NetworkGraph::new();
    hub(&mut graph, "A", 0.0, 0.0);
    hub(&mut graph, "B", 0.0, 1.0);
    hub(&mut graph, "C", -1.0, 1.0);
    hub(&mut graph, "D", 0.0, 2.0);
    link(&mut graph, "A", "B", dec!(120), 2, dec!(500));
    link(&mut graph, "B", "D", dec!(130), 2, dec!(400));
    link(&mut graph, "A", "C", dec!(200), 3, dec!(100));
    link(&mut graph, "C", "D", dec!(170), 3, dec!(150));
    graph
}

pub(crate) fn disconnected() -> NetworkGraph {
    let mut graph = NetworkGraph::new();
    hub(&mut graph, "A", 0.0, 0.0);
    hub(&mut graph, "B", 0.0, 1.0);
    graph
}

/// Two links A -> B: short but expensive, long but cheap
pub(crate) fn parallel_links() -> NetworkGraph {
    let mut graph = NetworkGraph::new();
    hub(&mut graph, "A", 0.0, 0.0);
    hub(&mut graph, "B", 0.0, 1.0);
    link(&mut graph, "A", "B", dec!(120), 2, dec!(90));
    link(&mut graph, "A", "B", dec!(300), 5, dec!(40));
    graph
}
