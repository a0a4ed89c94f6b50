//! Named routing policies
//!
//! A strategy builds the request's network and runs one or both path
//! searches between the synthetic endpoints.

mod balanced;
mod cheapest;
mod fastest;

use std::sync::Arc;

pub use balanced::BalancedStrategy;
pub use cheapest::CheapestStrategy;
pub use fastest::FastestStrategy;

use crate::{
    Error,
    model::{Currency, Route, RouteRequest},
    routing::PathResult,
};

pub const FASTEST: &str = "Fastest";
pub const CHEAPEST: &str = "Cheapest";
pub const BALANCED: &str = "Balanced";

/// A named routing policy.
///
/// Implementations are stateless with respect to requests and can be shared
/// between threads.
pub trait RouteStrategy: Send + Sync {
    fn name(&self) -> &str;

    /// Calculate a route. An empty [`Route`] means no path was found.
    ///
    /// # Errors
    ///
    /// Plain strategies never fail; decorators may reject the request
    fn calculate(&self, request: &RouteRequest) -> Result<Route, Error>;
}

impl<T: RouteStrategy + ?Sized> RouteStrategy for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn calculate(&self, request: &RouteRequest) -> Result<Route, Error> {
        (**self).calculate(request)
    }
}

impl<T: RouteStrategy + ?Sized> RouteStrategy for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn calculate(&self, request: &RouteRequest) -> Result<Route, Error> {
        (**self).calculate(request)
    }
}

pub(crate) fn into_route(strategy: &str, path: PathResult, currency: Currency) -> Route {
    if path.is_empty() {
        return Route::empty(strategy, currency);
    }
    Route {
        strategy: strategy.to_string(),
        waypoints: path.nodes,
        distance_km: path.distance_km,
        duration: path.duration,
        cost: path.cost,
    }
}
