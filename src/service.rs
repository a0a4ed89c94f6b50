use std::sync::Arc;

use log::debug;
use rayon::prelude::*;
use routeforge_core::{
    EngineConfig, Error,
    model::{Route, RouteRequest},
    registry::StrategyRegistry,
    strategy::RouteStrategy,
};

/// Calculates routes by strategy name
#[derive(Clone)]
pub struct RouteCalculationService {
    registry: Arc<StrategyRegistry>,
}

impl RouteCalculationService {
    pub fn new(registry: StrategyRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Service over the built-in strategies
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if `config` fails validation
    pub fn with_defaults(config: &EngineConfig) -> Result<Self, Error> {
        StrategyRegistry::with_defaults(config).map(Self::new)
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    pub fn available(&self) -> Vec<&str> {
        self.registry.available()
    }

    /// # Errors
    ///
    /// `Error::StrategyNotFound` for an unknown name, otherwise whatever the
    /// strategy pipeline reports
    pub fn calculate(&self, strategy: &str, request: &RouteRequest) -> Result<Route, Error> {
        self.registry.create(strategy)?.calculate(request)
    }

    /// Run every registered strategy on the same request.
    ///
    /// Strategies run in parallel; results keep registration order.
    ///
    /// # Errors
    ///
    /// Fails as a whole if any strategy fails
    pub fn compare_all(&self, request: &RouteRequest) -> Result<Vec<Route>, Error> {
        debug!(
            "comparing {} strategies for {} -> {}",
            self.registry.len(),
            request.origin,
            request.destination
        );
        self.registry
            .strategies()
            .par_iter()
            .map(|strategy| strategy.calculate(request))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routeforge_core::model::{Coordinate, ServiceLevel, Weight};
    use rust_decimal_macros::dec;

    fn service() -> RouteCalculationService {
        RouteCalculationService::with_defaults(&EngineConfig::default()).unwrap()
    }

    fn request() -> RouteRequest {
        RouteRequest::new(
            Coordinate::new(dec!(23.1291), dec!(113.2644)).unwrap(),
            Coordinate::new(dec!(30.5728), dec!(104.0668)).unwrap(),
            Weight::kilograms(dec!(12)),
            ServiceLevel::Economy,
        )
    }

    #[test]
    fn calculate_dispatches_by_name() {
        let route = service().calculate("cheapest", &request()).unwrap();
        assert_eq!(route.strategy, "Cheapest");
        assert!(!route.is_empty());
    }

    #[test]
    fn unknown_strategy_is_an_error() {
        let err = service().calculate("teleport", &request()).unwrap_err();
        assert_eq!(err, Error::StrategyNotFound("teleport".into()));
    }

    #[test]
    fn compare_all_keeps_registration_order() {
        let routes = service().compare_all(&request()).unwrap();
        let names: Vec<&str> = routes.iter().map(|r| r.strategy.as_str()).collect();
        assert_eq!(names, vec!["Fastest", "Cheapest", "Balanced"]);
    }

    #[test]
    fn compare_all_fails_on_invalid_request() {
        let mut req = request();
        req.weight = Weight::kilograms(dec!(0));
        assert!(matches!(
            service().compare_all(&req),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn compare_all_agrees_with_single_calculations() {
        let service = service();
        let compared = service.compare_all(&request()).unwrap();
        for route in compared {
            let single = service.calculate(&route.strategy, &request()).unwrap();
            assert_eq!(single, route);
        }
    }
}
