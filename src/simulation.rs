//! The simulation orchestrator.

use std::collections::BTreeMap;

use dronefleet_core::{
    Allocation, Allocator, FleetConfig, Order, OrderDraft, OrderRegistry, Priority,
};
use dronefleet_report::{Report, generate_report, out_and_back_estimates};
use dronefleet_solver_binpack::BinPackingAllocator;
use geo::Coord;
use log::info;

/// Owner of the order registry and the current allocation.
///
/// Orders accumulate through [`Simulation::register_order`]. Each call to
/// [`Simulation::simulate`] allocates a snapshot of every registered order
/// and replaces the previous allocation wholesale; reports read whatever
/// allocation is current. [`Simulation::reset`] discards both.
#[derive(Debug)]
pub struct Simulation<A = BinPackingAllocator> {
    registry: OrderRegistry,
    allocation: Option<Allocation>,
    allocator: A,
    fleet: FleetConfig,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    /// A simulation using [`BinPackingAllocator`] and the default fleet.
    #[must_use]
    pub fn new() -> Self {
        Self::with_allocator(BinPackingAllocator::new())
    }
}

impl<A: Allocator> Simulation<A> {
    /// A simulation using `allocator` and the default fleet.
    pub fn with_allocator(allocator: A) -> Self {
        Self::with_config(allocator, FleetConfig::default())
    }

    /// A simulation using `allocator` and `fleet`.
    pub const fn with_config(allocator: A, fleet: FleetConfig) -> Self {
        Self {
            registry: OrderRegistry::new(),
            allocation: None,
            allocator,
            fleet,
        }
    }

    /// Fleet limits applied by [`Self::simulate`] and [`Self::generate_report`].
    #[must_use]
    pub const fn fleet(&self) -> &FleetConfig {
        &self.fleet
    }

    /// Register an order and return it with its assigned identifier.
    pub fn register_order(
        &mut self,
        weight_kg: f64,
        destination: Coord<f64>,
        priority: Priority,
    ) -> Order {
        self.registry.register(weight_kg, destination, priority)
    }

    /// Register an order described by `draft`.
    ///
    /// The draft is not validated; call [`OrderDraft::validate`] first when
    /// the input comes from an untrusted source.
    pub fn register_draft(&mut self, draft: OrderDraft) -> Order {
        self.registry.register_draft(draft)
    }

    /// Every registered order in insertion order.
    #[must_use]
    pub fn list_orders(&self) -> &[Order] {
        self.registry.as_slice()
    }

    /// Orders awaiting delivery.
    #[must_use]
    pub fn pending_orders(&self) -> Vec<Order> {
        self.registry.pending()
    }

    /// Orders flagged as delivered.
    #[must_use]
    pub fn delivered_orders(&self) -> Vec<Order> {
        self.registry.delivered()
    }

    /// Allocate every registered order, replacing the current allocation.
    pub fn simulate(&mut self) -> &Allocation {
        let allocation = self.allocator.allocate(self.registry.as_slice(), &self.fleet);
        info!(
            "simulated {} orders: {} allocated, {} unallocated",
            self.registry.len(),
            allocation.assigned_count(),
            allocation.overflow().len()
        );
        self.allocation.insert(allocation)
    }

    /// The allocation produced by the last [`Self::simulate`], if any.
    #[must_use]
    pub const fn allocation(&self) -> Option<&Allocation> {
        self.allocation.as_ref()
    }

    /// Report on the current allocation.
    ///
    /// Before the first simulation, and after a reset, this is
    /// [`Report::empty`].
    #[must_use]
    pub fn generate_report(&self) -> Report {
        self.allocation
            .as_ref()
            .map_or_else(Report::empty, |allocation| {
                generate_report(allocation, &self.fleet)
            })
    }

    /// Whole-minute out-and-back estimates per bucket of the current
    /// allocation; empty before the first simulation.
    #[must_use]
    pub fn delivery_estimates(&self) -> BTreeMap<i64, u64> {
        self.allocation
            .as_ref()
            .map(out_and_back_estimates)
            .unwrap_or_default()
    }

    /// Discard every order and the current allocation; identifiers restart at 1.
    pub fn reset(&mut self) {
        self.registry.reset();
        self.allocation = None;
    }
}
