//! Coarse out-and-back delivery estimates.

use std::collections::BTreeMap;

use dronefleet_core::Allocation;

/// Distance units covered per estimated minute.
pub const ESTIMATE_DIVISOR: f64 = 10.0;

/// Whole-minute estimate per bucket key, overflow included.
///
/// Each order is priced as its own trip to the destination and back, so the
/// estimate for a bucket is `ceil(Σ 2·d / 10)` where `d` is each order's
/// distance from the origin. Keys follow
/// [`Allocation::to_keyed`](dronefleet_core::Allocation::to_keyed).
///
/// # Examples
/// ```
/// use dronefleet_core::{Allocation, AllocationDiagnostics, Priority};
/// use dronefleet_core::test_support::orders;
/// use dronefleet_report::out_and_back_estimates;
///
/// let bins = vec![orders(&[(1.0, 3.0, 4.0, Priority::Low)])];
/// let allocation = Allocation::from_bins(2, bins, Vec::new(), AllocationDiagnostics::default());
/// let estimates = out_and_back_estimates(&allocation);
/// assert_eq!(estimates.get(&1), Some(&1));
/// assert_eq!(estimates.get(&2), Some(&0));
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "estimates sum floating-point distances"
)]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "ceil of a non-negative finite sum converts to whole minutes"
)]
pub fn out_and_back_estimates(allocation: &Allocation) -> BTreeMap<i64, u64> {
    allocation
        .buckets()
        .map(|(key, orders)| {
            let minutes: f64 = orders
                .iter()
                .map(|order| order.distance_from_origin() * 2.0 / ESTIMATE_DIVISOR)
                .sum();
            (key.as_i64(), minutes.ceil().max(0.0) as u64)
        })
        .collect()
}
