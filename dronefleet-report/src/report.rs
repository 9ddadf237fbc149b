//! Fleet-wide delivery report.

use dronefleet_core::{Allocation, FleetConfig, Order};
use log::debug;

use crate::route::{route_distance, route_minutes};

/// Added to a carrier's total weight before dividing by its delivery count.
pub const EFFICIENCY_EPSILON: f64 = 0.1;

/// Label reported when no carrier made a delivery.
pub const NO_DELIVERIES_LABEL: &str = "no deliveries performed";

const NO_CARRIER_LABEL: &str = "none";

/// Route metrics for one carrier that received orders.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct CarrierStats {
    /// Carrier number, starting at 1.
    pub carrier_id: usize,
    /// Orders carried.
    pub deliveries: usize,
    /// Total weight carried in kilograms.
    #[cfg_attr(feature = "serde", serde(rename = "totalWeight"))]
    pub total_weight_kg: f64,
    /// Round-trip route length.
    pub total_distance: f64,
    /// Round-trip flight time in minutes.
    #[cfg_attr(feature = "serde", serde(rename = "totalTime"))]
    pub total_minutes: f64,
}

impl CarrierStats {
    #[expect(
        clippy::float_arithmetic,
        reason = "carrier totals sum floating-point weights"
    )]
    fn from_orders(carrier_id: usize, orders: &[Order], fleet: &FleetConfig) -> Self {
        let total_distance = route_distance(orders);
        Self {
            carrier_id,
            deliveries: orders.len(),
            total_weight_kg: orders.iter().map(|o| o.weight_kg).sum(),
            total_distance,
            total_minutes: route_minutes(total_distance, fleet.speed_units_per_minute),
        }
    }

    /// Deliveries per kilogram carried, softened by [`EFFICIENCY_EPSILON`].
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "efficiency is a ratio of floating-point quantities"
    )]
    pub fn efficiency(&self) -> f64 {
        count_as_f64(self.deliveries) / (self.total_weight_kg + EFFICIENCY_EPSILON)
    }

    /// Human-readable summary used as the most-efficient carrier label.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "Carrier {} ({} deliveries, {:.1}kg total)",
            self.carrier_id, self.deliveries, self.total_weight_kg
        )
    }
}

/// Summary metrics for an allocation.
///
/// # Examples
/// ```
/// use dronefleet_core::{Allocation, AllocationDiagnostics, FleetConfig, Priority};
/// use dronefleet_core::test_support::orders;
/// use dronefleet_report::generate_report;
///
/// let bins = vec![orders(&[(2.0, 3.0, 4.0, Priority::High)])];
/// let allocation = Allocation::from_bins(3, bins, Vec::new(), AllocationDiagnostics::default());
/// let report = generate_report(&allocation, &FleetConfig::default());
/// assert_eq!(report.total_deliveries, 1);
/// assert_eq!(report.most_efficient_carrier, "Carrier 1 (1 deliveries, 2.0kg total)");
/// assert_eq!(report.per_carrier.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Report {
    /// Orders placed on carriers.
    pub total_deliveries: usize,
    /// Mean flight minutes per delivery, rounded half-to-even to one decimal.
    #[cfg_attr(feature = "serde", serde(rename = "meanTimePerDelivery"))]
    pub mean_minutes_per_delivery: f64,
    /// Label of the carrier with the best efficiency.
    #[cfg_attr(feature = "serde", serde(rename = "mostEfficientCarrierLabel"))]
    pub most_efficient_carrier: String,
    /// Metrics for each carrier that received orders, by ascending id.
    pub per_carrier: Vec<CarrierStats>,
}

impl Report {
    /// The zero-valued report for allocations without deliveries.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_deliveries: 0,
            mean_minutes_per_delivery: 0.0,
            most_efficient_carrier: NO_DELIVERIES_LABEL.to_owned(),
            per_carrier: Vec::new(),
        }
    }
}

/// Compute the delivery report for `allocation`.
///
/// Only non-empty carriers contribute; the overflow bucket is ignored. The
/// most efficient carrier maximises [`CarrierStats::efficiency`], keeping the
/// lowest carrier id on ties.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "mean time is a ratio of floating-point minutes"
)]
pub fn generate_report(allocation: &Allocation, fleet: &FleetConfig) -> Report {
    let per_carrier: Vec<CarrierStats> = allocation
        .carriers()
        .filter(|(_, orders)| !orders.is_empty())
        .map(|(id, orders)| CarrierStats::from_orders(id, orders, fleet))
        .collect();
    if per_carrier.is_empty() {
        debug!("no carrier made a delivery; reporting zero metrics");
        return Report::empty();
    }

    let total_deliveries: usize = per_carrier.iter().map(|s| s.deliveries).sum();
    let total_minutes: f64 = per_carrier.iter().map(|s| s.total_minutes).sum();
    let mean = if total_deliveries == 0 {
        0.0
    } else {
        round_one_decimal(total_minutes / count_as_f64(total_deliveries))
    };
    let most_efficient_carrier = most_efficient(&per_carrier)
        .map_or_else(|| NO_CARRIER_LABEL.to_owned(), CarrierStats::label);

    Report {
        total_deliveries,
        mean_minutes_per_delivery: mean,
        most_efficient_carrier,
        per_carrier,
    }
}

fn most_efficient(stats: &[CarrierStats]) -> Option<&CarrierStats> {
    stats.iter().fold(None, |best: Option<&CarrierStats>, candidate| match best {
        Some(current) if candidate.efficiency() <= current.efficiency() => Some(current),
        _ => Some(candidate),
    })
}

#[expect(
    clippy::float_arithmetic,
    reason = "rounding scales by a power of ten"
)]
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

fn count_as_f64(count: usize) -> f64 {
    u32::try_from(count).map_or(f64::from(u32::MAX), f64::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dronefleet_core::test_support::orders;
    use dronefleet_core::{AllocationDiagnostics, Priority};
    use rstest::{fixture, rstest};

    #[fixture]
    fn fleet() -> FleetConfig {
        FleetConfig::default()
    }

    fn allocation(bins: Vec<Vec<Order>>, overflow: Vec<Order>) -> Allocation {
        Allocation::from_bins(3, bins, overflow, AllocationDiagnostics::default())
    }

    #[rstest]
    fn empty_allocation_is_degenerate(fleet: FleetConfig) {
        assert_eq!(generate_report(&Allocation::empty(3), &fleet), Report::empty());
    }

    #[rstest]
    fn overflow_only_allocation_is_degenerate(fleet: FleetConfig) {
        let overflow = orders(&[(12.0, 1.0, 1.0, Priority::High)]);
        let report = generate_report(&allocation(Vec::new(), overflow), &fleet);
        assert_eq!(report.total_deliveries, 0);
        assert_eq!(report.most_efficient_carrier, NO_DELIVERIES_LABEL);
        assert!(report.per_carrier.is_empty());
    }

    #[rstest]
    fn single_delivery_metrics(fleet: FleetConfig) {
        let bins = vec![orders(&[(10.0, 10.0, 10.0, Priority::High)])];
        let report = generate_report(&allocation(bins, Vec::new()), &fleet);

        let Some(stats) = report.per_carrier.first() else {
            panic!("one carrier expected");
        };
        let expected_distance = 2.0 * 200.0_f64.sqrt();
        assert!((stats.total_distance - expected_distance).abs() < 1e-9);
        assert!((stats.total_minutes - expected_distance / 0.333).abs() < 1e-9);
        assert!((report.mean_minutes_per_delivery - 84.9).abs() < 1e-9);
        assert_eq!(report.most_efficient_carrier, "Carrier 1 (1 deliveries, 10.0kg total)");
    }

    #[rstest]
    fn overflow_is_ignored(fleet: FleetConfig) {
        let bins = vec![orders(&[(2.0, 3.0, 4.0, Priority::Low)])];
        let overflow = vec![dronefleet_core::test_support::order(9, 12.0, 1.0, 1.0, Priority::Low)];
        let report = generate_report(&allocation(bins, overflow), &fleet);
        assert_eq!(report.total_deliveries, 1);
        assert_eq!(report.per_carrier.len(), 1);
    }

    #[rstest]
    fn lighter_loads_per_delivery_are_more_efficient(fleet: FleetConfig) {
        let bins = vec![
            orders(&[(8.0, 1.0, 0.0, Priority::Low)]),
            orders(&[(1.0, 1.0, 0.0, Priority::Low), (2.0, 2.0, 0.0, Priority::Low)]),
        ];
        let report = generate_report(&allocation(bins, Vec::new()), &fleet);
        assert_eq!(report.most_efficient_carrier, "Carrier 2 (2 deliveries, 3.0kg total)");
        assert_eq!(report.total_deliveries, 3);
    }

    #[rstest]
    fn efficiency_ties_keep_lowest_id(fleet: FleetConfig) {
        let bins = vec![
            Vec::new(),
            orders(&[(4.0, 1.0, 0.0, Priority::Low)]),
            orders(&[(4.0, 50.0, 0.0, Priority::High)]),
        ];
        let report = generate_report(&allocation(bins, Vec::new()), &fleet);
        assert!(report.most_efficient_carrier.starts_with("Carrier 2 "));
        let ids: Vec<_> = report.per_carrier.iter().map(|s| s.carrier_id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[rstest]
    fn zero_weight_load_is_finite(fleet: FleetConfig) {
        let bins = vec![orders(&[(0.0, 1.0, 0.0, Priority::Low)])];
        let report = generate_report(&allocation(bins, Vec::new()), &fleet);
        let efficiency = report.per_carrier.first().map(CarrierStats::efficiency);
        assert_eq!(efficiency.map(f64::is_finite), Some(true));
    }

    #[rstest]
    #[case(0.25, 0.2)]
    #[case(2.25, 2.2)]
    #[case(0.75, 0.8)]
    #[case(84.925, 84.9)]
    #[case(1.0, 1.0)]
    fn rounds_to_one_decimal(#[case] value: f64, #[case] expected: f64) {
        assert!((round_one_decimal(value) - expected).abs() < 1e-9);
    }

    #[rstest]
    fn report_is_idempotent(fleet: FleetConfig) {
        let bins = vec![orders(&[(3.0, 5.0, 5.0, Priority::Medium)])];
        let allocation = allocation(bins, Vec::new());
        assert_eq!(
            generate_report(&allocation, &fleet),
            generate_report(&allocation, &fleet)
        );
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[expect(clippy::expect_used, reason = "test serializes a known report")]
    fn serializes_with_wire_names(fleet: FleetConfig) {
        let bins = vec![orders(&[(2.0, 3.0, 4.0, Priority::High)])];
        let report = generate_report(&allocation(bins, Vec::new()), &fleet);
        let value = serde_json::to_value(&report).expect("report serializes");
        assert_eq!(value["totalDeliveries"], 1);
        assert!(value["meanTimePerDelivery"].is_number());
        assert!(value["mostEfficientCarrierLabel"].is_string());
        assert_eq!(value["perCarrier"][0]["carrierId"], 1);
        assert_eq!(value["perCarrier"][0]["totalWeight"], 2.0);
        assert!(value["perCarrier"][0]["totalTime"].is_number());
        assert!(value["perCarrier"][0]["totalDistance"].is_number());
    }
}
