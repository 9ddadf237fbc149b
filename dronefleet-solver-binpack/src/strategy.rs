//! Greedy partition-building heuristics.
//!
//! Each [`Strategy`] opens bins one at a time and fills the open bin from the
//! remaining orders before opening the next. A strategy stops when every
//! order is placed or when a freshly opened bin stays empty; orders still
//! remaining at that point are simply absent from the partition.

use std::fmt;

use dronefleet_core::{FleetConfig, Order};

use crate::partition::{Bin, Partition};
use crate::presort::{heaviest_first, nearest_first};

type Entry<'a> = (usize, &'a Order);

/// A named partition-building heuristic.
///
/// # Examples
/// ```
/// use dronefleet_core::{FleetConfig, Priority};
/// use dronefleet_core::test_support::orders;
/// use dronefleet_solver_binpack::Strategy;
///
/// let input = orders(&[
///     (6.0, 1.0, 0.0, Priority::Low),
///     (4.0, 2.0, 0.0, Priority::Low),
///     (5.0, 3.0, 0.0, Priority::Low),
/// ]);
/// let partition = Strategy::ByWeight.build(&input, &FleetConfig::default());
/// assert_eq!(partition.len(), 2);
/// assert_eq!(partition.bins()[0].members(), &[0, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Fill each bin scanning heaviest orders first.
    ByWeight,
    /// Fill each bin scanning nearest destinations first.
    ByDistance,
    /// Fill each bin scanning highest priorities first.
    ByPriority,
    /// Fill each bin from the orders that still fit, heaviest then nearest.
    GreedyImproved,
    /// As [`Strategy::ByWeight`], but never open more bins than the fleet has.
    MaxCapacityFirst,
}

impl Strategy {
    /// Every strategy in evaluation order. Earlier strategies win ties.
    pub const ALL: [Self; 5] = [
        Self::ByWeight,
        Self::ByDistance,
        Self::ByPriority,
        Self::GreedyImproved,
        Self::MaxCapacityFirst,
    ];

    /// Stable kebab-case name used in logs and diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ByWeight => "by-weight",
            Self::ByDistance => "by-distance",
            Self::ByPriority => "by-priority",
            Self::GreedyImproved => "greedy-improved",
            Self::MaxCapacityFirst => "max-capacity-first",
        }
    }

    /// Build a candidate partition of `orders`.
    ///
    /// Bin members index into `orders`.
    #[must_use]
    pub fn build(self, orders: &[Order], fleet: &FleetConfig) -> Partition {
        let mut entries: Vec<Entry<'_>> = orders.iter().enumerate().collect();
        match self {
            Self::ByWeight => {
                entries.sort_by(|(_, lhs), (_, rhs)| heaviest_first(lhs, rhs));
                fill_in_scan_order(entries, fleet, None)
            }
            Self::ByDistance => {
                entries.sort_by(|(_, lhs), (_, rhs)| nearest_first(lhs, rhs));
                fill_in_scan_order(entries, fleet, None)
            }
            Self::ByPriority => {
                entries.sort_by(|(_, lhs), (_, rhs)| {
                    rhs.priority.rank().cmp(&lhs.priority.rank())
                });
                fill_in_scan_order(entries, fleet, None)
            }
            Self::GreedyImproved => fill_from_fitting(entries, fleet),
            Self::MaxCapacityFirst => {
                entries.sort_by(|(_, lhs), (_, rhs)| heaviest_first(lhs, rhs));
                fill_in_scan_order(entries, fleet, Some(fleet.fleet_size))
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Open bins in turn, adding every remaining order that fits in scan order.
fn fill_in_scan_order(
    mut remaining: Vec<Entry<'_>>,
    fleet: &FleetConfig,
    max_bins: Option<usize>,
) -> Partition {
    let mut bins = Vec::new();
    while !remaining.is_empty() && max_bins.is_none_or(|max| bins.len() < max) {
        let mut bin = Bin::default();
        remaining.retain(|&(index, order)| {
            if bin.accepts(order, fleet) {
                bin.push(index, order);
                false
            } else {
                true
            }
        });
        if bin.is_empty() {
            break;
        }
        bins.push(bin);
    }
    Partition::new(bins)
}

/// Open bins in turn, considering only orders that fit an empty bin, sorted
/// heaviest first and nearest second, re-checking capacity as each is added.
fn fill_from_fitting(mut remaining: Vec<Entry<'_>>, fleet: &FleetConfig) -> Partition {
    let mut bins = Vec::new();
    while !remaining.is_empty() {
        let mut bin = Bin::default();
        let mut candidates: Vec<Entry<'_>> = remaining
            .iter()
            .copied()
            .filter(|&(_, order)| bin.accepts(order, fleet))
            .collect();
        candidates.sort_by(|(_, lhs), (_, rhs)| {
            heaviest_first(lhs, rhs).then_with(|| nearest_first(lhs, rhs))
        });
        for (index, order) in candidates {
            if bin.accepts(order, fleet) {
                bin.push(index, order);
            }
        }
        if bin.is_empty() {
            break;
        }
        remaining.retain(|(index, _)| !bin.members().contains(index));
        bins.push(bin);
    }
    Partition::new(bins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dronefleet_core::Priority;
    use dronefleet_core::test_support::orders;
    use rstest::rstest;

    fn members(partition: &Partition) -> Vec<Vec<usize>> {
        partition
            .bins()
            .iter()
            .map(|bin| bin.members().to_vec())
            .collect()
    }

    #[rstest]
    fn by_weight_packs_heaviest_first() {
        let input = orders(&[
            (3.0, 1.0, 0.0, Priority::High),
            (8.0, 2.0, 0.0, Priority::High),
            (5.0, 3.0, 0.0, Priority::High),
        ]);
        let partition = Strategy::ByWeight.build(&input, &FleetConfig::default());
        assert_eq!(members(&partition), vec![vec![1], vec![2, 0]]);
    }

    #[rstest]
    fn by_distance_packs_nearest_first() {
        let input = orders(&[
            (6.0, 30.0, 0.0, Priority::Low),
            (5.0, 10.0, 0.0, Priority::Low),
            (5.0, 20.0, 0.0, Priority::Low),
        ]);
        let partition = Strategy::ByDistance.build(&input, &FleetConfig::default());
        assert_eq!(members(&partition), vec![vec![1, 2], vec![0]]);
    }

    #[rstest]
    fn by_priority_packs_urgent_orders_first() {
        let input = orders(&[
            (6.0, 1.0, 0.0, Priority::Low),
            (6.0, 1.0, 0.0, Priority::High),
            (4.0, 1.0, 0.0, Priority::Medium),
        ]);
        let partition = Strategy::ByPriority.build(&input, &FleetConfig::default());
        assert_eq!(members(&partition), vec![vec![1, 2], vec![0]]);
    }

    #[rstest]
    fn greedy_improved_breaks_weight_ties_by_distance() {
        let input = orders(&[
            (5.0, 40.0, 0.0, Priority::Low),
            (5.0, 10.0, 0.0, Priority::Low),
            (5.0, 20.0, 0.0, Priority::Low),
        ]);
        let partition = Strategy::GreedyImproved.build(&input, &FleetConfig::default());
        assert_eq!(members(&partition), vec![vec![1, 2], vec![0]]);
    }

    #[rstest]
    fn max_capacity_first_never_exceeds_fleet() {
        let input = orders(&[(7.0, 1.0, 0.0, Priority::High); 5]);
        let fleet = FleetConfig::default();
        let partition = Strategy::MaxCapacityFirst.build(&input, &fleet);
        assert_eq!(partition.len(), fleet.fleet_size);
        let unbounded = Strategy::ByWeight.build(&input, &fleet);
        assert_eq!(unbounded.len(), 5);
    }

    #[rstest]
    #[case(Strategy::ByWeight)]
    #[case(Strategy::ByDistance)]
    #[case(Strategy::ByPriority)]
    #[case(Strategy::GreedyImproved)]
    #[case(Strategy::MaxCapacityFirst)]
    fn unplaceable_orders_are_left_out(#[case] strategy: Strategy) {
        let input = orders(&[
            (12.0, 1.0, 0.0, Priority::High),
            (1.0, 150.0, 0.0, Priority::High),
            (2.0, 3.0, 4.0, Priority::Low),
        ]);
        let fleet = FleetConfig::default();
        let partition = strategy.build(&input, &fleet);
        assert_eq!(members(&partition), vec![vec![2]]);
        assert!(partition.is_valid(&input, &fleet));
    }

    #[rstest]
    #[case(Strategy::ByWeight)]
    #[case(Strategy::GreedyImproved)]
    #[case(Strategy::MaxCapacityFirst)]
    fn empty_input_opens_no_bins(#[case] strategy: Strategy) {
        assert!(strategy.build(&[], &FleetConfig::default()).is_empty());
    }

    #[rstest]
    fn names_are_unique() {
        let mut names: Vec<_> = Strategy::ALL.iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Strategy::ALL.len());
    }
}
