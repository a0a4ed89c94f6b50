//! Cross-cutting wrappers around a [`RouteStrategy`]
//!
//! Each wrapper is itself a strategy, so they nest freely. [`decorate`]
//! assembles the standard order: validation outermost, then logging, then
//! the result cache around the bare strategy.

mod caching;
mod logging;
mod validation;

use std::sync::Arc;

pub use caching::{CacheKey, CachingStrategy};
pub use logging::LoggingStrategy;
pub use validation::{ValidatingStrategy, validate_request};

use crate::{config::EngineConfig, strategy::RouteStrategy};

/// Fluent wrapping for any strategy
pub trait StrategyExt: RouteStrategy + Sized {
    fn cached(self, capacity: usize) -> CachingStrategy<Self> {
        CachingStrategy::new(self, capacity)
    }

    fn logged(self) -> LoggingStrategy<Self> {
        LoggingStrategy::new(self)
    }

    fn validated(self) -> ValidatingStrategy<Self> {
        ValidatingStrategy::new(self)
    }
}

impl<S: RouteStrategy> StrategyExt for S {}

/// Wrap `strategy` in the standard validation, logging and caching stack
pub fn decorate<S>(strategy: S, config: &EngineConfig) -> Arc<dyn RouteStrategy>
where
    S: RouteStrategy + 'static,
{
    Arc::new(
        strategy
            .cached(config.cache_capacity)
            .logged()
            .validated(),
    )
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::TimeDelta;
    use rust_decimal_macros::dec;

    use crate::{
        Error,
        model::{Coordinate, Currency, Money, Route, RouteRequest, ServiceLevel, Weight},
        strategy::RouteStrategy,
    };

    pub fn request() -> RouteRequest {
        RouteRequest::new(
            Coordinate::new(dec!(31.2304), dec!(121.4737)).unwrap(),
            Coordinate::new(dec!(39.9042), dec!(116.4074)).unwrap(),
            Weight::kilograms(dec!(2.5)),
            ServiceLevel::Standard,
        )
    }

    /// Returns a fixed route and counts invocations
    pub struct CountingStrategy {
        name: String,
        route: Route,
        calls: AtomicUsize,
    }

    impl CountingStrategy {
        pub fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                route: Route {
                    strategy: name.to_string(),
                    waypoints: vec!["ORIGIN".into(), "SHA".into(), "DESTINATION".into()],
                    distance_km: dec!(1067.5),
                    duration: TimeDelta::hours(14),
                    cost: Money::new(dec!(1601.25), Currency::CNY).unwrap(),
                },
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn route(&self) -> &Route {
            &self.route
        }
    }

    impl RouteStrategy for CountingStrategy {
        fn name(&self) -> &str {
            &self.name
        }

        fn calculate(&self, _request: &RouteRequest) -> Result<Route, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.route.clone())
        }
    }

    /// Always fails and counts invocations
    #[derive(Default)]
    pub struct FailingStrategy {
        calls: AtomicUsize,
    }

    impl FailingStrategy {
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl RouteStrategy for FailingStrategy {
        fn name(&self) -> &str {
            "Failing"
        }

        fn calculate(&self, _request: &RouteRequest) -> Result<Route, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(Error::InvalidRequest("rejected by test double".into()))
        }
    }
}
