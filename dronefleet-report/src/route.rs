//! Round-trip route pricing.

use dronefleet_core::{ORIGIN, Order, distance};

/// Length of the round trip visiting `orders` in stored order.
///
/// The route starts at the depot, visits each destination in turn and
/// returns to the depot. No reordering is attempted. An empty slice yields a
/// zero-length route.
///
/// # Examples
/// ```
/// use dronefleet_core::Priority;
/// use dronefleet_core::test_support::orders;
/// use dronefleet_report::route_distance;
///
/// let stops = orders(&[(1.0, 3.0, 4.0, Priority::Low), (1.0, 3.0, 0.0, Priority::Low)]);
/// assert!((route_distance(&stops) - 12.0).abs() < 1e-9);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "route length sums floating-point segment lengths"
)]
pub fn route_distance(orders: &[Order]) -> f64 {
    let Some(last) = orders.last() else {
        return 0.0;
    };
    let (outbound, _) = orders
        .iter()
        .fold((0.0, ORIGIN), |(total, from), order| {
            (total + distance(from, order.destination), order.destination)
        });
    outbound + distance(last.destination, ORIGIN)
}

/// Minutes needed to fly `distance` at `speed_units_per_minute`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "flight time divides distance by speed"
)]
pub fn route_minutes(distance: f64, speed_units_per_minute: f64) -> f64 {
    distance / speed_units_per_minute
}
