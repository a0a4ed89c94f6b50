//! Geographic coordinates and great-circle distance

use std::fmt;

use geo::{Distance, Haversine, Point};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Decimal places kept for distances in kilometres
pub const DISTANCE_SCALE: u32 = 3;

/// A point on Earth in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    latitude: Decimal,
    longitude: Decimal,
}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude: Decimal,
    longitude: Decimal,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = Error;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.latitude, raw.longitude)
    }
}

impl Coordinate {
    /// # Errors
    ///
    /// Returns `Error::InvalidCoordinate` if latitude is outside [-90, 90]
    /// or longitude is outside [-180, 180]
    pub fn new(latitude: Decimal, longitude: Decimal) -> Result<Self, Error> {
        let lat_ok = (Decimal::from(-90)..=Decimal::from(90)).contains(&latitude);
        let lon_ok = (Decimal::from(-180)..=Decimal::from(180)).contains(&longitude);
        if !lat_ok || !lon_ok {
            return Err(Error::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude: latitude.normalize(),
            longitude: longitude.normalize(),
        })
    }

    /// Convenience constructor for literal degrees
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCoordinate` for non-finite or out of range values
    pub fn from_degrees(latitude: f64, longitude: f64) -> Result<Self, Error> {
        match (Decimal::from_f64(latitude), Decimal::from_f64(longitude)) {
            (Some(lat), Some(lon)) => Self::new(lat, lon),
            _ => Err(Error::InvalidCoordinate {
                latitude: Decimal::ZERO,
                longitude: Decimal::ZERO,
            }),
        }
    }

    pub fn latitude(&self) -> Decimal {
        self.latitude
    }

    pub fn longitude(&self) -> Decimal {
        self.longitude
    }

    /// `geo` point (x = longitude, y = latitude)
    pub fn to_point(&self) -> Point<f64> {
        Point::new(
            self.longitude.to_f64().unwrap_or_default(),
            self.latitude.to_f64().unwrap_or_default(),
        )
    }

    /// Raw great-circle distance in kilometres
    pub fn haversine_km(&self, other: &Coordinate) -> f64 {
        Haversine.distance(self.to_point(), other.to_point()) / 1000.0
    }

    /// Great-circle distance rounded up to [`DISTANCE_SCALE`] places.
    /// Used for link lengths so that a link is never shorter than the
    /// straight line it spans.
    pub fn distance_km_ceil(&self, other: &Coordinate) -> Decimal {
        to_decimal_km(self.haversine_km(other), RoundingStrategy::AwayFromZero)
    }

    /// Great-circle distance rounded down to [`DISTANCE_SCALE`] places.
    /// Used as the search heuristic, never exceeds any link chain.
    pub fn distance_km_floor(&self, other: &Coordinate) -> Decimal {
        to_decimal_km(self.haversine_km(other), RoundingStrategy::ToZero)
    }
}

fn to_decimal_km(km: f64, strategy: RoundingStrategy) -> Decimal {
    Decimal::from_f64(km)
        .unwrap_or_default()
        .round_dp_with_strategy(DISTANCE_SCALE, strategy)
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
