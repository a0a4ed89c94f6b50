//! Wire types of the HTTP API

use routeforge::RouteSummary;
use routeforge_core::{
    Error,
    model::{Coordinate, RouteRequest, ServiceLevel, Weight, WeightUnit},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct CoordinateDto {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightDto {
    pub value: Decimal,
    #[serde(default = "default_unit")]
    pub unit: WeightUnit,
}

fn default_unit() -> WeightUnit {
    WeightUnit::Kilogram
}

/// Body of `POST /v1/routes` and `POST /v1/routes/compare`.
///
/// Every part is optional on the wire so that a missing field is reported
/// as an invalid request rather than a decoding failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteRequestDto {
    pub origin: Option<CoordinateDto>,
    pub destination: Option<CoordinateDto>,
    pub weight: Option<WeightDto>,
    pub service_level: Option<ServiceLevel>,
    pub strategy: Option<String>,
}

impl RouteRequestDto {
    /// # Errors
    ///
    /// `Error::InvalidRequest` for a missing part, `Error::InvalidCoordinate`
    /// for an out of range position
    pub fn to_request(&self) -> Result<RouteRequest, Error> {
        let origin = required(self.origin.as_ref(), "origin")?;
        let destination = required(self.destination.as_ref(), "destination")?;
        let weight = required(self.weight.as_ref(), "weight")?;
        Ok(RouteRequest::new(
            Coordinate::new(origin.latitude, origin.longitude)?,
            Coordinate::new(destination.latitude, destination.longitude)?,
            Weight::new(weight.value, weight.unit),
            self.service_level.unwrap_or_default(),
        ))
    }
}

fn required<'a, T>(value: Option<&'a T>, field: &str) -> Result<&'a T, Error> {
    value.ok_or_else(|| Error::InvalidRequest(format!("{field} is required")))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategiesResponse {
    pub strategies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResponse {
    pub routes: Vec<RouteSummary>,
}
