pub use crate::Error;
pub use crate::config::EngineConfig;

// Request and result types
pub use crate::model::{
    Coordinate, Currency, Money, Route, RouteRequest, ServiceLevel, Weight, WeightUnit,
};

// Strategies and their composition
pub use crate::pipeline::{StrategyExt, decorate};
pub use crate::registry::StrategyRegistry;
pub use crate::strategy::{
    BALANCED, BalancedStrategy, CHEAPEST, CheapestStrategy, FASTEST, FastestStrategy,
    RouteStrategy,
};

// Network and search
pub use crate::routing::{AStarPathFinder, DijkstraPathFinder, PathFinder, PathResult};
pub use crate::topology::NetworkBuilder;
