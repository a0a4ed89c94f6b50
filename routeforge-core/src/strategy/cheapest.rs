use std::sync::Arc;

use super::{CHEAPEST, RouteStrategy, into_route};
use crate::{
    Error,
    model::{Route, RouteRequest},
    routing::{DijkstraPathFinder, PathFinder},
    topology::{DESTINATION_ID, NetworkBuilder, ORIGIN_ID},
};

/// Lowest cost route found with Dijkstra
#[derive(Debug, Clone)]
pub struct CheapestStrategy {
    builder: Arc<NetworkBuilder>,
    finder: DijkstraPathFinder,
}

impl CheapestStrategy {
    pub fn new(builder: Arc<NetworkBuilder>) -> Self {
        Self {
            builder,
            finder: DijkstraPathFinder,
        }
    }
}

impl RouteStrategy for CheapestStrategy {
    fn name(&self) -> &str {
        CHEAPEST
    }

    fn calculate(&self, request: &RouteRequest) -> Result<Route, Error> {
        let graph = self
            .builder
            .build_graph(&request.origin, &request.destination);
        let path = self.finder.find_path(&graph, ORIGIN_ID, DESTINATION_ID);
        Ok(into_route(CHEAPEST, path, graph.currency()))
    }
}
