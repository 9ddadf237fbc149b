//! `BinPackingAllocator`: multi-strategy allocation selected by utilization.

use std::collections::HashSet;

use dronefleet_core::{Allocation, AllocationDiagnostics, Allocator, FleetConfig, Order};
use log::{debug, info, warn};

use crate::partition::Partition;
use crate::presort::priority_presort;
use crate::strategy::Strategy;

/// Allocator that evaluates several greedy strategies and keeps the best.
///
/// Candidates are evaluated in the configured order. Each is validated
/// against the fleet limits and scored by capacity utilization; the first
/// candidate with the strictly highest utilization wins.
///
/// # Examples
/// ```
/// use dronefleet_core::{Allocator, CarrierKey, FleetConfig, Priority};
/// use dronefleet_core::test_support::orders;
/// use dronefleet_solver_binpack::BinPackingAllocator;
///
/// let input = orders(&[
///     (8.0, 10.0, 0.0, Priority::High),
///     (12.0, 5.0, 5.0, Priority::Low),
/// ]);
/// let allocation = BinPackingAllocator::new().allocate(&input, &FleetConfig::default());
/// assert_eq!(allocation.carrier(1).map(|orders| orders.len()), Some(1));
/// assert_eq!(allocation.get(CarrierKey::Unallocated).map(|orders| orders[0].id), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinPackingAllocator {
    strategies: Vec<Strategy>,
}

impl Default for BinPackingAllocator {
    fn default() -> Self {
        Self::new()
    }
}

struct Selected {
    strategy: Strategy,
    partition: Partition,
    utilization: f64,
}

impl BinPackingAllocator {
    /// Construct an allocator evaluating every [`Strategy`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_strategies(Strategy::ALL)
    }

    /// Construct an allocator evaluating only `strategies`, in the given order.
    #[must_use]
    pub fn with_strategies<I>(strategies: I) -> Self
    where
        I: IntoIterator<Item = Strategy>,
    {
        Self {
            strategies: strategies.into_iter().collect(),
        }
    }

    /// Strategies evaluated by this allocator, in evaluation order.
    #[must_use]
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    fn select(
        &self,
        presorted: &[Order],
        fleet: &FleetConfig,
        diagnostics: &mut AllocationDiagnostics,
    ) -> Option<Selected> {
        let mut best: Option<Selected> = None;
        for &strategy in &self.strategies {
            let partition = strategy.build(presorted, fleet);
            diagnostics.candidates_evaluated = diagnostics.candidates_evaluated.saturating_add(1);
            if !partition.is_valid(presorted, fleet) {
                diagnostics.candidates_rejected = diagnostics.candidates_rejected.saturating_add(1);
                warn!("strategy {strategy} produced an invalid partition; discarding it");
                continue;
            }
            let utilization = partition.utilization(fleet.capacity_kg);
            debug!(
                "strategy {strategy}: {} bins, utilization {utilization:.4}",
                partition.len()
            );
            if best
                .as_ref()
                .is_none_or(|current| utilization > current.utilization)
            {
                best = Some(Selected {
                    strategy,
                    partition,
                    utilization,
                });
            }
        }
        best
    }
}

impl Allocator for BinPackingAllocator {
    fn allocate(&self, orders: &[Order], fleet: &FleetConfig) -> Allocation {
        let presorted = priority_presort(orders);
        let mut diagnostics = AllocationDiagnostics::default();
        let Some(selected) = self.select(&presorted, fleet, &mut diagnostics) else {
            if !presorted.is_empty() {
                warn!(
                    "no valid partition for {} orders; all left unallocated",
                    presorted.len()
                );
            }
            return Allocation::from_bins(fleet.fleet_size, Vec::new(), presorted, diagnostics);
        };

        diagnostics.strategy = Some(selected.strategy.name());
        diagnostics.utilization = selected.utilization;
        let bins = selected.partition.bins();
        if bins.len() > fleet.fleet_size {
            warn!(
                "strategy {} opened {} bins for a fleet of {}; excess bins become overflow",
                selected.strategy,
                bins.len(),
                fleet.fleet_size
            );
        }

        let carriers: Vec<Vec<Order>> = bins
            .iter()
            .take(fleet.fleet_size)
            .map(|bin| {
                bin.members()
                    .iter()
                    .filter_map(|&index| presorted.get(index).cloned())
                    .collect()
            })
            .collect();
        let placed: HashSet<usize> = bins
            .iter()
            .take(fleet.fleet_size)
            .flat_map(|bin| bin.members().iter().copied())
            .collect();
        let overflow: Vec<Order> = presorted
            .iter()
            .enumerate()
            .filter(|(index, _)| !placed.contains(index))
            .map(|(_, order)| order.clone())
            .collect();

        info!(
            "allocated {} orders with {} ({} unallocated, utilization {:.4})",
            placed.len(),
            selected.strategy,
            overflow.len(),
            selected.utilization
        );
        Allocation::from_bins(fleet.fleet_size, carriers, overflow, diagnostics)
    }
}
