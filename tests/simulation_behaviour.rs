//! Behavioural tests for the `Simulation` orchestrator using rstest-bdd.

use std::cell::RefCell;

use dronefleet::{Coord, Priority, Simulation};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Simulation shared across the steps of a scenario.
#[fixture]
pub fn simulation() -> RefCell<Simulation> {
    RefCell::new(Simulation::new())
}

#[given("a fresh simulation")]
fn fresh_simulation(simulation: &RefCell<Simulation>) {
    assert!(simulation.borrow().list_orders().is_empty());
}

#[when("an order of {weight} kg for ({x}, {y}) is registered")]
fn register(simulation: &RefCell<Simulation>, weight: f64, x: f64, y: f64) {
    simulation
        .borrow_mut()
        .register_order(weight, Coord { x, y }, Priority::Medium);
}

#[when("the simulation runs")]
fn run(simulation: &RefCell<Simulation>) {
    simulation.borrow_mut().simulate();
}

#[when("the simulation is reset")]
fn reset(simulation: &RefCell<Simulation>) {
    simulation.borrow_mut().reset();
}

#[then("{count} orders are dispatched to carriers")]
fn dispatched(simulation: &RefCell<Simulation>, count: usize) {
    let assigned = simulation
        .borrow()
        .allocation()
        .map(dronefleet::Allocation::assigned_count);
    assert_eq!(assigned, Some(count));
}

#[then("{count} orders are left unallocated")]
fn unallocated(simulation: &RefCell<Simulation>, count: usize) {
    let overflow = simulation
        .borrow()
        .allocation()
        .map(|allocation| allocation.overflow().len());
    assert_eq!(overflow, Some(count));
}

#[then("the report counts {count} deliveries")]
fn report_counts(simulation: &RefCell<Simulation>, count: usize) {
    assert_eq!(simulation.borrow().generate_report().total_deliveries, count);
}

#[then("no allocation is recorded")]
fn no_allocation(simulation: &RefCell<Simulation>) {
    assert!(simulation.borrow().allocation().is_none());
}

#[scenario(path = "tests/features/simulation.feature", index = 0)]
fn mixed_orders(simulation: RefCell<Simulation>) {
    let _ = simulation;
}

#[scenario(path = "tests/features/simulation.feature", index = 1)]
fn reset_discards_allocation(simulation: RefCell<Simulation>) {
    let _ = simulation;
}
