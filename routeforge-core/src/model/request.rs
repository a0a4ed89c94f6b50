//! Route requests and calculated routes

use std::{fmt, str::FromStr};

use chrono::TimeDelta;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Coordinate, Currency, Money, Weight};
use crate::Error;

/// Requested service tier. Recorded and logged, does not change routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceLevel {
    Economy,
    #[default]
    Standard,
    Express,
    Overnight,
}

impl ServiceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceLevel::Economy => "economy",
            ServiceLevel::Standard => "standard",
            ServiceLevel::Express => "express",
            ServiceLevel::Overnight => "overnight",
        }
    }
}

impl FromStr for ServiceLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "economy" => Ok(ServiceLevel::Economy),
            "standard" => Ok(ServiceLevel::Standard),
            "express" => Ok(ServiceLevel::Express),
            "overnight" => Ok(ServiceLevel::Overnight),
            other => Err(Error::Parse(format!("unknown service level '{other}'"))),
        }
    }
}

impl fmt::Display for ServiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input of a route calculation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteRequest {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub weight: Weight,
    #[serde(default)]
    pub service_level: ServiceLevel,
}

impl RouteRequest {
    pub fn new(
        origin: Coordinate,
        destination: Coordinate,
        weight: Weight,
        service_level: ServiceLevel,
    ) -> Self {
        Self {
            origin,
            destination,
            weight,
            service_level,
        }
    }
}

/// Calculated route.
///
/// An empty `waypoints` list means that no route exists between the two
/// endpoints. This is not an error: callers must check [`Route::is_empty`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub strategy: String,
    pub waypoints: Vec<String>,
    pub distance_km: Decimal,
    #[serde(with = "duration_seconds")]
    pub duration: TimeDelta,
    pub cost: Money,
}

impl Route {
    /// Route signalling that no path was found
    pub fn empty(strategy: impl Into<String>, currency: Currency) -> Self {
        Self {
            strategy: strategy.into(),
            waypoints: Vec::new(),
            distance_km: Decimal::ZERO,
            duration: TimeDelta::zero(),
            cost: Money::zero(currency),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn origin(&self) -> Option<&str> {
        self.waypoints.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.waypoints.last().map(String::as_str)
    }
}

/// Durations travel as whole seconds
pub(crate) mod duration_seconds {
    use chrono::TimeDelta;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(value.num_seconds())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TimeDelta, D::Error> {
        let seconds = i64::deserialize(deserializer)?;
        TimeDelta::try_seconds(seconds)
            .ok_or_else(|| serde::de::Error::custom("duration out of range"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn service_level_parses_case_insensitively() {
        assert_eq!("EXPRESS".parse::<ServiceLevel>().unwrap(), ServiceLevel::Express);
        assert!("teleport".parse::<ServiceLevel>().is_err());
    }

    #[test]
    fn empty_route_has_zero_metrics() {
        let route = Route::empty("Fastest", Currency::CNY);
        assert!(route.is_empty());
        assert_eq!(route.distance_km, Decimal::ZERO);
        assert_eq!(route.duration, TimeDelta::zero());
        assert!(route.cost.is_zero());
        assert_eq!(route.origin(), None);
    }

    #[test]
    fn route_serializes_duration_as_seconds() {
        let route = Route {
            strategy: "Fastest".into(),
            waypoints: vec!["ORIGIN".into(), "DESTINATION".into()],
            distance_km: dec!(12.5),
            duration: TimeDelta::minutes(90),
            cost: Money::new(dec!(18.75), Currency::CNY).unwrap(),
        };
        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(json["duration"], 5400);
        let back: Route = serde_json::from_value(json).unwrap();
        assert_eq!(back, route);
    }
}
