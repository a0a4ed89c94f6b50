use std::{collections::VecDeque, sync::Arc};

use dashmap::DashMap;
use log::trace;
use parking_lot::Mutex;
use rust_decimal::Decimal;

use crate::{
    Error,
    model::{Coordinate, Route, RouteRequest, ServiceLevel},
    strategy::RouteStrategy,
};

/// Identity of a cached calculation.
///
/// Weights are compared in kilograms so `500 g` and `0.5 kg` share an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    strategy: String,
    origin: Coordinate,
    destination: Coordinate,
    weight_kg: Decimal,
    service_level: ServiceLevel,
}

impl CacheKey {
    pub fn new(strategy: &str, request: &RouteRequest) -> Self {
        Self {
            strategy: strategy.to_string(),
            origin: request.origin,
            destination: request.destination,
            weight_kg: request.weight.to_kilograms(),
            service_level: request.service_level,
        }
    }
}

/// Per-key result slot. Callers of the same key serialize on its mutex.
type Slot = Arc<Mutex<Option<Route>>>;

/// Memoizes successful results of the wrapped strategy.
///
/// The cache holds at most `capacity` routes and evicts in insertion order.
/// Errors are passed through and never stored. Concurrent callers with the
/// same key compute once; other keys are never blocked by a computation.
pub struct CachingStrategy<S> {
    inner: S,
    entries: DashMap<CacheKey, Slot>,
    insertion_order: Mutex<VecDeque<CacheKey>>,
    capacity: usize,
}

impl<S> CachingStrategy<S> {
    pub fn new(inner: S, capacity: usize) -> Self {
        Self {
            inner,
            entries: DashMap::new(),
            insertion_order: Mutex::new(VecDeque::new()),
            capacity: capacity.max(1),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        let mut order = self.insertion_order.lock();
        order.clear();
        self.entries.clear();
    }

    // Must not be called while holding a map guard or a slot lock.
    fn record_insert(&self, key: CacheKey) {
        let mut order = self.insertion_order.lock();
        order.push_back(key);
        while order.len() > self.capacity {
            if let Some(oldest) = order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
    }
}

impl<S: RouteStrategy> RouteStrategy for CachingStrategy<S> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn calculate(&self, request: &RouteRequest) -> Result<Route, Error> {
        let key = CacheKey::new(self.inner.name(), request);
        // The map guard is released at the end of this statement.
        let slot: Slot = Arc::clone(self.entries.entry(key.clone()).or_default().value());

        let mut cached = slot.lock();
        if let Some(route) = cached.as_ref() {
            trace!("[{}] cache hit for {:?}", self.inner.name(), key);
            return Ok(route.clone());
        }

        match self.inner.calculate(request) {
            Ok(route) => {
                *cached = Some(route.clone());
                drop(cached);
                self.record_insert(key);
                Ok(route)
            }
            Err(e) => {
                drop(cached);
                // Drop the unfilled slot unless another caller is filling it
                self.entries.remove_if(&key, |_, current| {
                    Arc::ptr_eq(current, &slot)
                        && current.try_lock().is_some_and(|route| route.is_none())
                });
                Err(e)
            }
        }
    }
}
