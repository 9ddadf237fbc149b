//! Single-pass allocation onto the least busy carrier.

use dronefleet_core::{Allocation, AllocationDiagnostics, Allocator, FleetConfig, Order};
use log::{debug, info};

use crate::partition::Bin;
use crate::presort::priority_presort;

/// Allocator that walks the presorted orders once, giving each to the carrier
/// with the fewest orders that can still take its weight.
///
/// Carriers with equal order counts are tried in ascending id order. Orders
/// beyond the range limit, or too heavy for every carrier's remaining
/// capacity, go to overflow.
///
/// # Examples
/// ```
/// use dronefleet_core::{Allocator, FleetConfig, Priority};
/// use dronefleet_core::test_support::orders;
/// use dronefleet_solver_binpack::LeastLoadedAllocator;
///
/// let input = orders(&[
///     (2.0, 1.0, 0.0, Priority::Low),
///     (2.0, 2.0, 0.0, Priority::Low),
/// ]);
/// let allocation = LeastLoadedAllocator.allocate(&input, &FleetConfig::default());
/// assert_eq!(allocation.active_carriers(), 2);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LeastLoadedAllocator;

/// Index of the carrier with the fewest members that accepts `order`.
fn least_loaded_carrier(bins: &[Bin], order: &Order, fleet: &FleetConfig) -> Option<usize> {
    let mut candidates: Vec<(usize, &Bin)> = bins.iter().enumerate().collect();
    candidates.sort_by_key(|(_, bin)| bin.members().len());
    candidates
        .into_iter()
        .find(|(_, bin)| bin.accepts(order, fleet))
        .map(|(index, _)| index)
}

#[expect(
    clippy::float_arithmetic,
    reason = "utilization is a ratio of floating-point weights"
)]
fn utilization(bins: &[Bin], capacity_kg: f64) -> f64 {
    let used: Vec<&Bin> = bins.iter().filter(|bin| !bin.is_empty()).collect();
    if used.is_empty() || capacity_kg <= 0.0 {
        return 0.0;
    }
    let load: f64 = used.iter().map(|bin| bin.load_kg()).sum();
    let count = u32::try_from(used.len()).unwrap_or(u32::MAX);
    load / (f64::from(count) * capacity_kg)
}

impl Allocator for LeastLoadedAllocator {
    fn allocate(&self, orders: &[Order], fleet: &FleetConfig) -> Allocation {
        let presorted = priority_presort(orders);
        let mut bins = vec![Bin::default(); fleet.fleet_size];
        let mut overflow = Vec::new();

        for (index, order) in presorted.iter().enumerate() {
            match least_loaded_carrier(&bins, order, fleet) {
                Some(carrier) => {
                    if let Some(bin) = bins.get_mut(carrier) {
                        bin.push(index, order);
                    }
                }
                None => {
                    debug!("order {} fits no carrier; leaving it unallocated", order.id);
                    overflow.push(order.clone());
                }
            }
        }

        let carriers: Vec<Vec<Order>> = bins
            .iter()
            .map(|bin| {
                bin.members()
                    .iter()
                    .filter_map(|&index| presorted.get(index).cloned())
                    .collect()
            })
            .collect();
        let diagnostics = AllocationDiagnostics {
            strategy: Some("least-loaded"),
            candidates_evaluated: 1,
            candidates_rejected: 0,
            utilization: utilization(&bins, fleet.capacity_kg),
        };
        info!(
            "least-loaded allocation placed {} orders ({} unallocated)",
            presorted.len().saturating_sub(overflow.len()),
            overflow.len()
        );
        Allocation::from_bins(fleet.fleet_size, carriers, overflow, diagnostics)
    }
}
