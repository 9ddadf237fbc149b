//! Test-only order builders shared by unit and behaviour tests.

use geo::Coord;

use crate::{Allocation, Allocator, FleetConfig, Order, Priority};

/// Build an undelivered order.
#[must_use]
pub const fn order(id: u64, weight_kg: f64, x: f64, y: f64, priority: Priority) -> Order {
    Order::new(id, weight_kg, Coord { x, y }, priority)
}

/// Build orders numbered from 1 from `(weight, x, y, priority)` tuples.
#[must_use]
pub fn orders(specs: &[(f64, f64, f64, Priority)]) -> Vec<Order> {
    (1..)
        .zip(specs)
        .map(|(id, &(weight, x, y, priority))| order(id, weight, x, y, priority))
        .collect()
}

/// Allocator that leaves every order unallocated.
///
/// Useful for exercising reporting and orchestration paths that must cope
/// with an all-overflow allocation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RejectAllAllocator;

impl Allocator for RejectAllAllocator {
    fn allocate(&self, orders: &[Order], fleet: &FleetConfig) -> Allocation {
        Allocation::from_bins(
            fleet.fleet_size,
            Vec::new(),
            orders.to_vec(),
            crate::AllocationDiagnostics::default(),
        )
    }
}
