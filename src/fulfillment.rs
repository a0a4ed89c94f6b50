//! Route lookup as seen by order fulfilment

use routeforge_core::{
    Error,
    model::{Route, RouteRequest},
    strategy::FASTEST,
};

use crate::RouteCalculationService;

/// Routing dependency of the fulfilment workflow
pub trait FulfillmentRoutePort: Send + Sync {
    /// # Errors
    ///
    /// Propagates the routing engine's error unchanged
    fn route_for(&self, request: &RouteRequest) -> Result<Route, Error>;
}

/// Port backed by a [`RouteCalculationService`]. Always routes with the
/// fastest strategy; callers that need a choice use the service directly.
#[derive(Clone)]
pub struct FulfillmentRoutes {
    service: RouteCalculationService,
}

impl FulfillmentRoutes {
    pub fn new(service: RouteCalculationService) -> Self {
        Self { service }
    }
}

impl FulfillmentRoutePort for FulfillmentRoutes {
    fn route_for(&self, request: &RouteRequest) -> Result<Route, Error> {
        self.service.calculate(FASTEST, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routeforge_core::EngineConfig;
    use routeforge_core::model::{Coordinate, ServiceLevel, Weight};
    use rust_decimal_macros::dec;

    fn service() -> RouteCalculationService {
        RouteCalculationService::with_defaults(&EngineConfig::default()).unwrap()
    }

    fn request() -> RouteRequest {
        RouteRequest::new(
            Coordinate::new(dec!(22.5431), dec!(114.0579)).unwrap(),
            Coordinate::new(dec!(30.2741), dec!(120.1551)).unwrap(),
            Weight::kilograms(dec!(1)),
            ServiceLevel::Overnight,
        )
    }

    #[test]
    fn default_port_uses_fastest() {
        let port = FulfillmentRoutes::new(service());
        let route = port.route_for(&request()).unwrap();
        assert_eq!(route.strategy, "Fastest");
        assert_eq!(route, service().calculate("Fastest", &request()).unwrap());
    }

    #[test]
    fn trait_object_always_routes_fastest() {
        let port: Box<dyn FulfillmentRoutePort> = Box::new(FulfillmentRoutes::new(service()));
        for level in [ServiceLevel::Economy, ServiceLevel::Express] {
            let mut req = request();
            req.service_level = level;
            assert_eq!(port.route_for(&req).unwrap().strategy, "Fastest");
        }
    }
}
