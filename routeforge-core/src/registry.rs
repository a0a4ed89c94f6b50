//! Lookup of strategies by name

use std::sync::Arc;

use hashbrown::HashMap;
use log::debug;

use crate::{
    Error,
    config::EngineConfig,
    pipeline::decorate,
    strategy::{BalancedStrategy, CheapestStrategy, FastestStrategy, RouteStrategy},
    topology::NetworkBuilder,
};

/// Strategies keyed by case-insensitive name, in registration order
#[derive(Clone)]
pub struct StrategyRegistry {
    strategies: Vec<Arc<dyn RouteStrategy>>,
    by_name: HashMap<String, usize>,
}

impl StrategyRegistry {
    /// Later registrations replace earlier ones with the same name
    pub fn new(strategies: Vec<Arc<dyn RouteStrategy>>) -> Self {
        let mut registry = Self {
            strategies: Vec::with_capacity(strategies.len()),
            by_name: HashMap::with_capacity(strategies.len()),
        };
        for strategy in strategies {
            registry.register(strategy);
        }
        registry
    }

    /// The three built-in strategies, each wrapped in the standard pipeline
    /// and sharing one network builder
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if `config` fails validation
    pub fn with_defaults(config: &EngineConfig) -> Result<Self, Error> {
        let builder = Arc::new(NetworkBuilder::new(config.clone())?);
        Ok(Self::new(vec![
            decorate(FastestStrategy::new(Arc::clone(&builder)), config),
            decorate(CheapestStrategy::new(Arc::clone(&builder)), config),
            decorate(BalancedStrategy::new(builder), config),
        ]))
    }

    pub fn register(&mut self, strategy: Arc<dyn RouteStrategy>) {
        let key = strategy.name().to_lowercase();
        debug!("registering strategy '{}'", strategy.name());
        match self.by_name.get(&key) {
            Some(&idx) => self.strategies[idx] = strategy,
            None => {
                self.by_name.insert(key, self.strategies.len());
                self.strategies.push(strategy);
            }
        }
    }

    /// # Errors
    ///
    /// Returns `Error::StrategyNotFound` for an unknown name
    pub fn create(&self, name: &str) -> Result<Arc<dyn RouteStrategy>, Error> {
        self.by_name
            .get(&name.trim().to_lowercase())
            .map(|&idx| Arc::clone(&self.strategies[idx]))
            .ok_or_else(|| Error::StrategyNotFound(name.to_string()))
    }

    pub fn available(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn strategies(&self) -> &[Arc<dyn RouteStrategy>] {
        &self.strategies
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
