//! Core domain types for the dronefleet dispatch engine.
//!
//! The crate defines delivery [`Order`]s and their [`Priority`], the
//! [`OrderRegistry`] that issues order identifiers, the fleet limits in
//! [`FleetConfig`], and the [`Allocation`] produced by an [`Allocator`].
//! Allocation strategies and reporting live in sibling crates and only depend
//! on the types declared here.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod allocation;
pub mod fleet;
pub mod geometry;
pub mod order;
pub mod priority;
pub mod registry;

pub use allocation::{Allocation, AllocationDiagnostics, Allocator, CarrierKey};
pub use fleet::{
    DEFAULT_CAPACITY_KG, DEFAULT_FLEET_SIZE, DEFAULT_MAX_RANGE, DEFAULT_SPEED_UNITS_PER_MINUTE,
    FleetConfig,
};
pub use geometry::{ORIGIN, distance, distance_from_origin};
pub use order::{Order, OrderDraft, OrderDraftError, OrderId};
pub use priority::{Priority, PriorityParseError};
pub use registry::OrderRegistry;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
