use std::sync::Arc;

use super::{FASTEST, RouteStrategy, into_route};
use crate::{
    Error,
    model::{Route, RouteRequest},
    routing::{AStarPathFinder, PathFinder},
    topology::{DESTINATION_ID, NetworkBuilder, ORIGIN_ID},
};

/// Shortest distance route found with A*
#[derive(Debug, Clone)]
pub struct FastestStrategy {
    builder: Arc<NetworkBuilder>,
    finder: AStarPathFinder,
}

impl FastestStrategy {
    pub fn new(builder: Arc<NetworkBuilder>) -> Self {
        Self {
            builder,
            finder: AStarPathFinder,
        }
    }
}

impl RouteStrategy for FastestStrategy {
    fn name(&self) -> &str {
        FASTEST
    }

    fn calculate(&self, request: &RouteRequest) -> Result<Route, Error> {
        let graph = self
            .builder
            .build_graph(&request.origin, &request.destination);
        let path = self.finder.find_path(&graph, ORIGIN_ID, DESTINATION_ID);
        Ok(into_route(FASTEST, path, graph.currency()))
    }
}
