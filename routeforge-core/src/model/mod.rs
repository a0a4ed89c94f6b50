//! Data model for route calculation
//!
//! Value types (coordinates, weights, money), the network graph and the
//! request/response pair exchanged with callers.

pub mod location;
pub mod money;
pub mod network;
pub mod quantity;
pub mod request;

pub use location::{Coordinate, DISTANCE_SCALE};
pub use money::{Currency, MONEY_SCALE, Money};
pub use network::{Hub, Link, NetworkGraph};
pub use quantity::{Weight, WeightUnit};
pub use request::{Route, RouteRequest, ServiceLevel};
