//! Application services on top of `routeforge_core`
//!
//! [`RouteCalculationService`] is the entry point used by the HTTP server and
//! the CLI. [`FulfillmentRoutePort`] is the narrow view order fulfilment
//! depends on, and [`RouteSummary`] is the presentation form of a route.

pub mod fulfillment;
pub mod service;
pub mod summary;

pub use fulfillment::{FulfillmentRoutePort, FulfillmentRoutes};
pub use service::RouteCalculationService;
pub use summary::RouteSummary;

pub use routeforge_core as core;
