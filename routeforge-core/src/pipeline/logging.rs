use std::time::Instant;

use log::{info, warn};

use crate::{
    Error,
    model::{Route, RouteRequest},
    strategy::RouteStrategy,
};

/// Logs every calculation with its inputs, totals and elapsed time
#[derive(Debug, Clone)]
pub struct LoggingStrategy<S> {
    inner: S,
}

impl<S> LoggingStrategy<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: RouteStrategy> RouteStrategy for LoggingStrategy<S> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn calculate(&self, request: &RouteRequest) -> Result<Route, Error> {
        let name = self.inner.name();
        info!(
            "[{name}] calculating route {} -> {} ({}, {})",
            request.origin, request.destination, request.weight, request.service_level
        );

        let started = Instant::now();
        let result = self.inner.calculate(request);
        let elapsed = started.elapsed();

        match &result {
            Ok(route) if route.is_empty() => {
                info!("[{name}] no route found in {elapsed:?}");
            }
            Ok(route) => {
                info!(
                    "[{name}] route found: {} km, {} min, {}, {} waypoints in {elapsed:?}",
                    route.distance_km,
                    route.duration.num_minutes(),
                    route.cost,
                    route.waypoints.len()
                );
            }
            Err(e) => warn!("[{name}] calculation failed after {elapsed:?}: {e}"),
        }
        result
    }
}
