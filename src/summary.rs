use routeforge_core::model::Route;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Presentation form of a [`Route`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub strategy: String,
    pub found: bool,
    pub waypoints: Vec<String>,
    /// Kilometres, one decimal place
    pub distance_km: Decimal,
    pub duration_minutes: i64,
    /// Whole hours, rounded down
    pub duration_hours: i64,
    pub cost: Decimal,
    pub currency: String,
}

impl From<&Route> for RouteSummary {
    fn from(route: &Route) -> Self {
        Self {
            strategy: route.strategy.clone(),
            found: !route.is_empty(),
            waypoints: route.waypoints.clone(),
            distance_km: route
                .distance_km
                .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero),
            duration_minutes: route.duration.num_minutes(),
            duration_hours: route.duration.num_hours(),
            cost: route.cost.amount(),
            currency: route.cost.currency().to_string(),
        }
    }
}

impl From<Route> for RouteSummary {
    fn from(route: Route) -> Self {
        Self::from(&route)
    }
}
