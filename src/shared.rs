//! Thread-safe handle around a [`Simulation`].

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use dronefleet_core::{Allocation, Allocator, FleetConfig, Order, OrderDraft, Priority};
use dronefleet_report::Report;
use dronefleet_solver_binpack::BinPackingAllocator;
use geo::Coord;

use crate::Simulation;

/// Cloneable handle that serializes every operation on one [`Simulation`].
///
/// A single lock guards the registry and the allocation together, so no
/// caller observes a half-replaced allocation. Results are returned by value.
/// A poisoned lock is recovered: every operation leaves the simulation
/// consistent before it can panic.
///
/// # Examples
/// ```
/// use std::thread;
/// use dronefleet::{Coord, Priority, SharedSimulation};
///
/// let shared = SharedSimulation::new();
/// let worker = shared.clone();
/// thread::spawn(move || {
///     worker.register_order(2.0, Coord { x: 1.0, y: 1.0 }, Priority::Low);
/// })
/// .join()
/// .expect("worker should not panic");
/// assert_eq!(shared.list_orders().len(), 1);
/// ```
#[derive(Debug)]
pub struct SharedSimulation<A = BinPackingAllocator> {
    inner: Arc<Mutex<Simulation<A>>>,
}

impl<A> Clone for SharedSimulation<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for SharedSimulation {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedSimulation {
    /// A shared simulation using the default allocator and fleet.
    #[must_use]
    pub fn new() -> Self {
        Self::from_simulation(Simulation::new())
    }
}

impl<A: Allocator> SharedSimulation<A> {
    /// Wrap an existing simulation.
    #[must_use]
    pub fn from_simulation(simulation: Simulation<A>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(simulation)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Simulation<A>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`Simulation::fleet`].
    #[must_use]
    pub fn fleet(&self) -> FleetConfig {
        *self.lock().fleet()
    }

    /// See [`Simulation::register_order`].
    pub fn register_order(
        &self,
        weight_kg: f64,
        destination: Coord<f64>,
        priority: Priority,
    ) -> Order {
        self.lock().register_order(weight_kg, destination, priority)
    }

    /// See [`Simulation::register_draft`].
    pub fn register_draft(&self, draft: OrderDraft) -> Order {
        self.lock().register_draft(draft)
    }

    /// See [`Simulation::list_orders`].
    #[must_use]
    pub fn list_orders(&self) -> Vec<Order> {
        self.lock().list_orders().to_vec()
    }

    /// See [`Simulation::pending_orders`].
    #[must_use]
    pub fn pending_orders(&self) -> Vec<Order> {
        self.lock().pending_orders()
    }

    /// See [`Simulation::delivered_orders`].
    #[must_use]
    pub fn delivered_orders(&self) -> Vec<Order> {
        self.lock().delivered_orders()
    }

    /// See [`Simulation::simulate`].
    pub fn simulate(&self) -> Allocation {
        self.lock().simulate().clone()
    }

    /// See [`Simulation::allocation`].
    #[must_use]
    pub fn allocation(&self) -> Option<Allocation> {
        self.lock().allocation().cloned()
    }

    /// See [`Simulation::generate_report`].
    #[must_use]
    pub fn generate_report(&self) -> Report {
        self.lock().generate_report()
    }

    /// See [`Simulation::delivery_estimates`].
    #[must_use]
    pub fn delivery_estimates(&self) -> BTreeMap<i64, u64> {
        self.lock().delivery_estimates()
    }

    /// See [`Simulation::reset`].
    pub fn reset(&self) {
        self.lock().reset();
    }
}
