//! Directed logistics network: hubs and transport links

use chrono::TimeDelta;
use hashbrown::HashMap;
use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};
use rust_decimal::Decimal;

use super::{Coordinate, Currency, Money};
use crate::Error;

/// Network node: a logistics hub or a synthetic endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct Hub {
    pub id: String,
    pub name: String,
    pub location: Coordinate,
}

impl Hub {
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
        }
    }
}

/// Directed transport link. Reverse travel needs its own link.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub from: String,
    pub to: String,
    pub distance_km: Decimal,
    pub duration: TimeDelta,
    pub cost: Money,
}

/// Graph snapshot built for a single calculation.
///
/// Nodes are addressed by their string id; the petgraph indices are an
/// implementation detail of the search algorithms. All link costs share the
/// graph currency.
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
    pub(crate) graph: DiGraph<Hub, Link>,
    index: HashMap<String, NodeIndex>,
    currency: Currency,
}

impl NetworkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_currency(currency: Currency) -> Self {
        Self {
            currency,
            ..Self::default()
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// # Errors
    ///
    /// Returns `Error::DuplicateNode` if a hub with the same id exists
    pub fn add_hub(&mut self, hub: Hub) -> Result<NodeIndex, Error> {
        if self.index.contains_key(&hub.id) {
            return Err(Error::DuplicateNode(hub.id));
        }
        Ok(self.push_hub(hub))
    }

    /// # Errors
    ///
    /// Returns `Error::UnknownNode` if either endpoint is missing and
    /// `Error::CurrencyMismatch` if the cost is not in the graph currency
    pub fn add_link(&mut self, link: Link) -> Result<(), Error> {
        let from = self.node_index(&link.from)?;
        let to = self.node_index(&link.to)?;
        if link.cost.currency() != self.currency {
            return Err(Error::CurrencyMismatch {
                left: self.currency.to_string(),
                right: link.cost.currency().to_string(),
            });
        }
        if link.distance_km.is_sign_negative() && !link.distance_km.is_zero() {
            return Err(Error::InvalidRequest(format!(
                "link {} -> {} has negative distance",
                link.from, link.to
            )));
        }
        self.connect(from, to, link);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn hub(&self, id: &str) -> Option<&Hub> {
        self.index.get(id).and_then(|&idx| self.graph.node_weight(idx))
    }

    pub fn hubs(&self) -> impl Iterator<Item = &Hub> {
        self.graph.node_weights()
    }

    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.graph.edge_weights()
    }

    /// Outgoing links of a hub, empty for unknown ids
    pub fn links_from<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a Link> + 'a {
        self.index
            .get(id)
            .copied()
            .into_iter()
            .flat_map(move |idx| self.graph.edges(idx).map(|edge| edge.weight()))
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Insert without the duplicate check, for callers that own the id space
    pub(crate) fn push_hub(&mut self, hub: Hub) -> NodeIndex {
        let id = hub.id.clone();
        let idx = self.graph.add_node(hub);
        self.index.insert(id, idx);
        idx
    }

    pub(crate) fn connect(&mut self, from: NodeIndex, to: NodeIndex, link: Link) {
        self.graph.add_edge(from, to, link);
    }

    pub(crate) fn lookup(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub(crate) fn hub_at(&self, idx: NodeIndex) -> &Hub {
        &self.graph[idx]
    }

    fn node_index(&self, id: &str) -> Result<NodeIndex, Error> {
        self.lookup(id)
            .ok_or_else(|| Error::UnknownNode(id.to_string()))
    }
}
