//! Logistics route planning over a synthetic hub network.
//!
//! A request is routed by a named [`strategy::RouteStrategy`]. Each
//! calculation builds a network from the fixed hub set plus two synthetic
//! endpoints, runs A* or Dijkstra over it and reports the totals of the
//! resulting path. Strategies are looked up through a
//! [`registry::StrategyRegistry`] and wrapped by the [`pipeline`] decorators.

pub mod config;
mod error;
pub mod model;
pub mod pipeline;
pub mod prelude;
pub mod registry;
pub mod routing;
pub mod strategy;
pub mod topology;

pub use config::EngineConfig;
pub use error::Error;
