//! Package weight with unit conversion

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[serde(alias = "kg")]
    Kilogram,
    #[serde(alias = "g")]
    Gram,
    /// Traditional Chinese catty, 0.5 kg
    Jin,
    #[serde(alias = "lb")]
    Pound,
}

impl WeightUnit {
    /// Kilograms per one unit
    pub fn kilograms_per_unit(self) -> Decimal {
        match self {
            WeightUnit::Kilogram => Decimal::ONE,
            WeightUnit::Gram => Decimal::new(1, 3),
            WeightUnit::Jin => Decimal::new(5, 1),
            WeightUnit::Pound => Decimal::new(45_359_237, 8),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "kg",
            WeightUnit::Gram => "g",
            WeightUnit::Jin => "jin",
            WeightUnit::Pound => "lb",
        }
    }
}

impl FromStr for WeightUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kg" | "kilogram" | "kilograms" => Ok(WeightUnit::Kilogram),
            "g" | "gram" | "grams" => Ok(WeightUnit::Gram),
            "jin" => Ok(WeightUnit::Jin),
            "lb" | "lbs" | "pound" | "pounds" => Ok(WeightUnit::Pound),
            other => Err(Error::Parse(format!("unknown weight unit '{other}'"))),
        }
    }
}

/// Package mass.
///
/// Not self-validating, unlike [`Coordinate`](super::Coordinate) and
/// [`Money`](super::Money): the fields are public and [`Weight::new`] accepts
/// zero and negative values so a rejected request can still be described in
/// logs. Positivity is enforced by the validation layer through
/// [`Weight::ensure_positive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Weight {
    pub value: Decimal,
    pub unit: WeightUnit,
}

impl Weight {
    pub fn new(value: Decimal, unit: WeightUnit) -> Self {
        Self { value, unit }
    }

    pub fn kilograms(value: Decimal) -> Self {
        Self::new(value, WeightUnit::Kilogram)
    }

    /// Canonical value in kilograms, trailing zeros stripped
    pub fn to_kilograms(&self) -> Decimal {
        (self.value * self.unit.kilograms_per_unit()).normalize()
    }

    pub fn is_positive(&self) -> bool {
        self.value > Decimal::ZERO
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidWeight` when the value is zero or negative
    pub fn ensure_positive(&self) -> Result<(), Error> {
        if self.is_positive() {
            Ok(())
        } else {
            Err(Error::InvalidWeight(format!(
                "package weight must be positive, got {self}"
            )))
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}
