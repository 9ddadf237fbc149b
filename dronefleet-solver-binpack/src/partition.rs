//! Candidate partitions produced by the allocation strategies.

use dronefleet_core::{FleetConfig, Order};

/// Orders placed on one carrier by a candidate partition.
///
/// Members are indices into the order slice the partition was built from, in
/// the order they were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bin {
    members: Vec<usize>,
    load_kg: f64,
}

impl Bin {
    /// Indices of the orders in this bin, in placement order.
    #[must_use]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Total weight placed in the bin.
    #[must_use]
    pub const fn load_kg(&self) -> f64 {
        self.load_kg
    }

    /// Whether the bin holds no orders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether `order` can join without breaking the capacity or range limit.
    #[expect(
        clippy::float_arithmetic,
        reason = "capacity checks sum floating-point weights"
    )]
    pub(crate) fn accepts(&self, order: &Order, fleet: &FleetConfig) -> bool {
        self.load_kg + order.weight_kg <= fleet.capacity_kg
            && fleet.in_range(order.distance_from_origin())
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "bin load accumulates floating-point weights"
    )]
    pub(crate) fn push(&mut self, index: usize, order: &Order) {
        self.members.push(index);
        self.load_kg += order.weight_kg;
    }
}

/// A candidate assignment of orders to bins.
///
/// Orders not referenced by any bin are left out of the candidate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    bins: Vec<Bin>,
}

impl Partition {
    pub(crate) const fn new(bins: Vec<Bin>) -> Self {
        Self { bins }
    }

    /// The bins in the order they were opened.
    #[must_use]
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Number of bins opened.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Whether no bin was opened.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Check every bin against the fleet limits.
    ///
    /// A partition is valid when each bin's total weight is within capacity
    /// and every member's destination is within range. Members are resolved
    /// against `orders`; an index outside the slice invalidates the partition.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums floating-point weights"
    )]
    pub fn is_valid(&self, orders: &[Order], fleet: &FleetConfig) -> bool {
        self.bins.iter().all(|bin| {
            let mut total = 0.0;
            for &index in bin.members() {
                let Some(order) = orders.get(index) else {
                    return false;
                };
                if !fleet.in_range(order.distance_from_origin()) {
                    return false;
                }
                total += order.weight_kg;
            }
            total <= fleet.capacity_kg
        })
    }

    /// Total weight placed across all bins.
    #[must_use]
    pub fn assigned_weight_kg(&self) -> f64 {
        self.bins.iter().map(Bin::load_kg).sum()
    }

    /// Assigned weight divided by the capacity of the bins used.
    ///
    /// A partition without bins has a utilization of `0.0`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "utilization is a floating-point ratio over a small bin count"
    )]
    pub fn utilization(&self, capacity_kg: f64) -> f64 {
        if self.bins.is_empty() {
            return 0.0;
        }
        self.assigned_weight_kg() / (self.bins.len() as f64 * capacity_kg)
    }
}
