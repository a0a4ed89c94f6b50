use std::sync::Arc;

use super::{BALANCED, RouteStrategy, into_route};
use crate::{
    Error,
    model::{Route, RouteRequest},
    routing::{AStarPathFinder, CompositeScorer, DijkstraPathFinder, PathFinder, PathResult},
    topology::{DESTINATION_ID, NetworkBuilder, ORIGIN_ID},
};

/// Runs both searches and keeps the better time/cost trade-off
#[derive(Debug, Clone)]
pub struct BalancedStrategy {
    builder: Arc<NetworkBuilder>,
    scorer: CompositeScorer,
}

impl BalancedStrategy {
    pub fn new(builder: Arc<NetworkBuilder>) -> Self {
        let config = builder.config();
        let scorer = CompositeScorer::new(config.time_weight, config.cost_weight);
        Self { builder, scorer }
    }

    pub fn with_scorer(builder: Arc<NetworkBuilder>, scorer: CompositeScorer) -> Self {
        Self { builder, scorer }
    }

    /// Pick between the distance-optimal and the cost-optimal path.
    ///
    /// An empty candidate loses to a non-empty one; on equal scores the
    /// time-optimised path wins.
    pub fn choose(&self, time_optimized: PathResult, cost_optimized: PathResult) -> PathResult {
        match (time_optimized.is_empty(), cost_optimized.is_empty()) {
            (true, _) => cost_optimized,
            (false, true) => time_optimized,
            (false, false) => {
                let candidates = [time_optimized, cost_optimized];
                let winner = self.scorer.select_index(&candidates).unwrap_or(0);
                let [time_optimized, cost_optimized] = candidates;
                if winner == 0 {
                    time_optimized
                } else {
                    cost_optimized
                }
            }
        }
    }
}

impl RouteStrategy for BalancedStrategy {
    fn name(&self) -> &str {
        BALANCED
    }

    fn calculate(&self, request: &RouteRequest) -> Result<Route, Error> {
        let graph = self
            .builder
            .build_graph(&request.origin, &request.destination);
        let fastest = AStarPathFinder.find_path(&graph, ORIGIN_ID, DESTINATION_ID);
        let cheapest = DijkstraPathFinder.find_path(&graph, ORIGIN_ID, DESTINATION_ID);
        Ok(into_route(
            BALANCED,
            self.choose(fastest, cheapest),
            graph.currency(),
        ))
    }
}
