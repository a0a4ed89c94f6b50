//! Synthetic logistics network used for every calculation

mod builder;
pub mod hubs;
mod seed;

pub use builder::NetworkBuilder;
pub use hubs::{CORRIDORS, DESTINATION_ID, HUBS, HubSpec, ORIGIN_ID};
pub use seed::{coordinate_seed, seeded_rng};
