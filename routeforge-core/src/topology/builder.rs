use chrono::TimeDelta;
use itertools::Itertools;
use log::debug;
use petgraph::graph::NodeIndex;
use rand::{Rng, rngs::StdRng};
use rust_decimal::{
    Decimal,
    prelude::{FromPrimitive, ToPrimitive},
};

use super::hubs::{CORRIDORS, DESTINATION_ID, HUBS, ORIGIN_ID};
use super::seed::seeded_rng;
use crate::{
    EngineConfig, Error,
    model::{Coordinate, Hub, Link, Money, NetworkGraph},
};

const SECONDS_PER_HOUR: i64 = 3600;

/// Builds the per-request network: the fixed hub topology plus synthetic
/// `ORIGIN` and `DESTINATION` nodes at the requested coordinates.
///
/// Link parameters are drawn from a generator seeded by the request
/// coordinates, so equal requests always produce equal graphs.
#[derive(Debug, Clone)]
pub struct NetworkBuilder {
    config: EngineConfig,
    hubs: Vec<Hub>,
}

impl NetworkBuilder {
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: EngineConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            config,
            hubs: fixed_hubs()?,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Fixed hubs, in table order
    pub fn hubs(&self) -> &[Hub] {
        &self.hubs
    }

    pub fn build_graph(&self, origin: &Coordinate, destination: &Coordinate) -> NetworkGraph {
        let mut rng = seeded_rng(origin, destination);
        let mut graph = NetworkGraph::with_currency(self.config.currency);

        let indices: Vec<NodeIndex> = self
            .hubs
            .iter()
            .map(|hub| graph.push_hub(hub.clone()))
            .collect();

        for &(a, b) in &CORRIDORS {
            let (Some(from), Some(to)) = (graph.lookup(a), graph.lookup(b)) else {
                continue;
            };
            self.connect_both_ways(&mut graph, &mut rng, from, to);
        }

        let origin_idx = graph.push_hub(Hub::new(ORIGIN_ID, "Origin", *origin));
        for hub_idx in self.nearest_hubs(&graph, &indices, origin) {
            self.connect_both_ways(&mut graph, &mut rng, origin_idx, hub_idx);
        }

        let destination_idx =
            graph.push_hub(Hub::new(DESTINATION_ID, "Destination", *destination));
        for hub_idx in self.nearest_hubs(&graph, &indices, destination) {
            self.connect_both_ways(&mut graph, &mut rng, destination_idx, hub_idx);
        }

        debug!(
            "Built network {} -> {} with {} nodes and {} links",
            origin,
            destination,
            graph.node_count(),
            graph.link_count()
        );
        graph
    }

    /// Closest fixed hubs to `point`; ties keep table order
    fn nearest_hubs(
        &self,
        graph: &NetworkGraph,
        indices: &[NodeIndex],
        point: &Coordinate,
    ) -> Vec<NodeIndex> {
        indices
            .iter()
            .map(|&idx| (idx, graph.hub_at(idx).location.haversine_km(point)))
            .sorted_by(|a, b| a.1.total_cmp(&b.1))
            .take(self.config.endpoint_connections)
            .map(|(idx, _)| idx)
            .collect()
    }

    fn connect_both_ways(
        &self,
        graph: &mut NetworkGraph,
        rng: &mut StdRng,
        a: NodeIndex,
        b: NodeIndex,
    ) {
        let forward = self.make_link(graph.hub_at(a), graph.hub_at(b), rng);
        let reverse = self.make_link(graph.hub_at(b), graph.hub_at(a), rng);
        graph.connect(a, b, forward);
        graph.connect(b, a, reverse);
    }

    fn make_link(&self, from: &Hub, to: &Hub, rng: &mut StdRng) -> Link {
        let config = &self.config;
        let distance_km = from.location.distance_km_ceil(&to.location);

        let speed = if distance_km < config.long_haul_threshold_km {
            config.short_haul_speed_kmh
        } else {
            config.long_haul_speed_kmh
        };
        // Fallbacks saturate; a validated config never reaches them
        let travel_seconds = distance_km
            .checked_mul(Decimal::from(SECONDS_PER_HOUR))
            .and_then(|d| d.checked_div(speed))
            .and_then(|seconds| seconds.trunc().to_i64())
            .unwrap_or(i64::MAX);
        let delay_hours = rng.gen_range(0.0..=config.max_transfer_delay_hours);
        #[allow(clippy::cast_possible_truncation)]
        let delay_seconds = (delay_hours * SECONDS_PER_HOUR as f64) as i64;
        let duration = TimeDelta::try_seconds(travel_seconds.saturating_add(delay_seconds))
            .unwrap_or(TimeDelta::MAX);

        let multiplier = rng.gen_range(config.cost_multiplier_min..=config.cost_multiplier_max);
        let multiplier = Decimal::from_f64(multiplier).unwrap_or(Decimal::ONE);
        let amount = distance_km
            .checked_mul(config.cost_per_km)
            .and_then(|base| base.checked_mul(multiplier))
            .unwrap_or(Decimal::MAX);
        let cost = Money::new(amount, config.currency)
            .unwrap_or_else(|_| Money::zero(config.currency));

        Link {
            from: from.id.clone(),
            to: to.id.clone(),
            distance_km,
            duration,
            cost,
        }
    }
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            hubs: fixed_hubs().unwrap_or_default(),
        }
    }
}

fn fixed_hubs() -> Result<Vec<Hub>, Error> {
    HUBS.iter()
        .map(|spec| {
            Coordinate::from_degrees(spec.latitude, spec.longitude)
                .map(|location| Hub::new(spec.id, spec.name, location))
        })
        .collect()
}
