//! Facade crate for the dronefleet dispatch engine.
//!
//! The crate re-exports the domain types from `dronefleet-core`, the
//! allocators from `dronefleet-solver-binpack` and the reporting API from
//! `dronefleet-report`, and adds the [`Simulation`] orchestrator that ties
//! them together: register orders, simulate an allocation, report on it and
//! reset.
//!
//! # Examples
//! ```
//! use dronefleet::{Coord, Priority, Simulation};
//!
//! let mut simulation = Simulation::new();
//! simulation.register_order(8.0, Coord { x: 10.0, y: 10.0 }, Priority::High);
//! simulation.register_order(12.0, Coord { x: 5.0, y: 5.0 }, Priority::Low);
//! let allocation = simulation.simulate();
//! assert_eq!(allocation.overflow().len(), 1);
//! assert_eq!(simulation.generate_report().total_deliveries, 1);
//! ```

#![forbid(unsafe_code)]

mod shared;
mod simulation;

pub use dronefleet_core::{
    Allocation, AllocationDiagnostics, Allocator, CarrierKey, DEFAULT_CAPACITY_KG,
    DEFAULT_FLEET_SIZE, DEFAULT_MAX_RANGE, DEFAULT_SPEED_UNITS_PER_MINUTE, FleetConfig, Order,
    OrderDraft, OrderDraftError, OrderId, OrderRegistry, Priority, PriorityParseError,
};
pub use dronefleet_report::{CarrierStats, Report, generate_report, out_and_back_estimates};
pub use dronefleet_solver_binpack::{BinPackingAllocator, LeastLoadedAllocator, Strategy};
pub use geo::Coord;
pub use shared::SharedSimulation;
pub use simulation::Simulation;
