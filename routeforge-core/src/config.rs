use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Error, model::Currency};

/// Largest accepted `max_transfer_delay_hours`
pub const MAX_TRANSFER_DELAY_HOURS: f64 = 24.0;
/// Largest accepted `cost_per_km`
pub const MAX_COST_PER_KM: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);
/// Accepted link speed range in km/h
pub const MIN_SPEED_KMH: Decimal = Decimal::ONE;
pub const MAX_SPEED_KMH: Decimal = Decimal::from_parts(2_000, 0, 0, false, 0);
/// Largest accepted `cost_multiplier_max`
pub const MAX_COST_MULTIPLIER: f64 = 100.0;
/// Largest accepted scoring weight
pub const MAX_SCORING_WEIGHT: Decimal = Decimal::ONE_THOUSAND;

/// Parameters of network synthesis, scoring and caching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Currency of every generated link cost
    pub currency: Currency,
    /// Base cost per kilometre before the random multiplier
    pub cost_per_km: Decimal,
    /// Assumed speed for links shorter than `long_haul_threshold_km`
    pub short_haul_speed_kmh: Decimal,
    pub long_haul_speed_kmh: Decimal,
    pub long_haul_threshold_km: Decimal,
    /// Upper bound of the random transfer delay added to each link
    pub max_transfer_delay_hours: f64,
    pub cost_multiplier_min: f64,
    pub cost_multiplier_max: f64,
    /// Hubs each synthetic endpoint is connected to
    pub endpoint_connections: usize,
    pub time_weight: Decimal,
    pub cost_weight: Decimal,
    /// Maximum number of memoised routes
    pub cache_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            currency: Currency::CNY,
            cost_per_km: Decimal::new(15, 1),
            short_haul_speed_kmh: Decimal::from(65),
            long_haul_speed_kmh: Decimal::from(80),
            long_haul_threshold_km: Decimal::from(500),
            max_transfer_delay_hours: 2.0,
            cost_multiplier_min: 0.8,
            cost_multiplier_max: 1.2,
            endpoint_connections: 3,
            time_weight: Decimal::new(6, 1),
            cost_weight: Decimal::new(4, 1),
            cache_capacity: 10_000,
        }
    }
}

impl EngineConfig {
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` describing the first invalid field
    pub fn validate(&self) -> Result<(), Error> {
        if self.cost_per_km.is_sign_negative() || self.cost_per_km > MAX_COST_PER_KM {
            return Err(invalid(format!(
                "cost_per_km must be between 0 and {MAX_COST_PER_KM}"
            )));
        }
        let speed_range = MIN_SPEED_KMH..=MAX_SPEED_KMH;
        if !speed_range.contains(&self.short_haul_speed_kmh)
            || !speed_range.contains(&self.long_haul_speed_kmh)
        {
            return Err(invalid(format!(
                "speeds must be between {MIN_SPEED_KMH} and {MAX_SPEED_KMH} km/h"
            )));
        }
        if !(0.0..=MAX_TRANSFER_DELAY_HOURS).contains(&self.max_transfer_delay_hours) {
            return Err(invalid(format!(
                "max_transfer_delay_hours must be between 0 and {MAX_TRANSFER_DELAY_HOURS}"
            )));
        }
        if !((0.0..=MAX_COST_MULTIPLIER).contains(&self.cost_multiplier_min)
            && (0.0..=MAX_COST_MULTIPLIER).contains(&self.cost_multiplier_max)
            && self.cost_multiplier_min <= self.cost_multiplier_max)
        {
            return Err(invalid(format!(
                "cost multiplier range must satisfy 0 <= min <= max <= {MAX_COST_MULTIPLIER}"
            )));
        }
        if self.endpoint_connections == 0 {
            return Err(invalid("endpoint_connections must be at least 1"));
        }
        let weight_range = Decimal::ZERO..=MAX_SCORING_WEIGHT;
        if !weight_range.contains(&self.time_weight) || !weight_range.contains(&self.cost_weight) {
            return Err(invalid(format!(
                "scoring weights must be between 0 and {MAX_SCORING_WEIGHT}"
            )));
        }
        if self.cache_capacity == 0 {
            return Err(invalid("cache_capacity must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidConfig(message.into())
}
