//! Priority presort applied before any strategy runs.

use std::cmp::Ordering;

use dronefleet_core::Order;

/// Order in which orders are fed to the allocation strategies.
///
/// Higher priority first; within a priority, nearer destinations first. The
/// sort is stable, so orders that tie on both keys keep their input order.
///
/// # Examples
/// ```
/// use dronefleet_core::Priority;
/// use dronefleet_core::test_support::orders;
/// use dronefleet_solver_binpack::priority_presort;
///
/// let input = orders(&[
///     (1.0, 50.0, 0.0, Priority::Low),
///     (1.0, 30.0, 0.0, Priority::High),
///     (1.0, 10.0, 0.0, Priority::High),
/// ]);
/// let ids: Vec<_> = priority_presort(&input).iter().map(|o| o.id).collect();
/// assert_eq!(ids, vec![3, 2, 1]);
/// ```
#[must_use]
pub fn priority_presort(orders: &[Order]) -> Vec<Order> {
    let mut sorted = orders.to_vec();
    sorted.sort_by(presort_ordering);
    sorted
}

pub(crate) fn presort_ordering(lhs: &Order, rhs: &Order) -> Ordering {
    rhs.priority
        .rank()
        .cmp(&lhs.priority.rank())
        .then_with(|| nearest_first(lhs, rhs))
}

pub(crate) fn nearest_first(lhs: &Order, rhs: &Order) -> Ordering {
    lhs.distance_from_origin()
        .total_cmp(&rhs.distance_from_origin())
}

pub(crate) fn heaviest_first(lhs: &Order, rhs: &Order) -> Ordering {
    rhs.weight_kg.total_cmp(&lhs.weight_kg)
}
