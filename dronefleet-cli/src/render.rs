//! Plain-text rendering of a simulation outcome.

use std::io::{self, Write};

use dronefleet::Order;

use crate::simulate::SimulationOutcome;

fn order_line(order: &Order) -> String {
    format!(
        "  - Order #{} (weight {}kg, destination ({}, {}), {} priority)",
        order.id, order.weight_kg, order.destination.x, order.destination.y, order.priority
    )
}

/// Write one block per loaded carrier, the unallocated orders, then the
/// report summary.
#[expect(
    clippy::float_arithmetic,
    reason = "carrier headers sum floating-point weights"
)]
pub(crate) fn write_text(writer: &mut dyn Write, outcome: &SimulationOutcome) -> io::Result<()> {
    let allocation = &outcome.allocation;
    if allocation.is_empty() {
        writeln!(writer, "No pending orders to dispatch.")?;
    }
    for (id, orders) in allocation.carriers().filter(|(_, orders)| !orders.is_empty()) {
        let load: f64 = orders.iter().map(|o| o.weight_kg).sum();
        writeln!(
            writer,
            "Carrier {id} delivered {} order(s), total weight {load:.1}kg:",
            orders.len()
        )?;
        for order in orders {
            writeln!(writer, "{}", order_line(order))?;
        }
    }
    if !allocation.overflow().is_empty() {
        writeln!(writer)?;
        writeln!(
            writer,
            "The following orders could not be allocated within carrier capacity or range:"
        )?;
        for order in allocation.overflow() {
            writeln!(writer, "{}", order_line(order))?;
        }
    }

    let report = &outcome.report;
    writeln!(writer)?;
    writeln!(writer, "Total deliveries: {}", report.total_deliveries)?;
    writeln!(
        writer,
        "Mean time per delivery: {:.1} min",
        report.mean_minutes_per_delivery
    )?;
    writeln!(writer, "Most efficient carrier: {}", report.most_efficient_carrier)?;
    for stats in &report.per_carrier {
        writeln!(
            writer,
            "  Carrier {}: {:.1} units, {:.1} min",
            stats.carrier_id, stats.total_distance, stats.total_minutes
        )?;
    }
    Ok(())
}
