//! Delivery metrics derived from an [`Allocation`](dronefleet_core::Allocation).
//!
//! [`generate_report`] walks every carrier that received orders, prices its
//! round trip from the depot with [`route_distance`] and [`route_minutes`],
//! and summarizes the fleet: total deliveries, mean minutes per delivery and
//! the most efficient carrier. [`out_and_back_estimates`] gives a coarser
//! per-bucket estimate that treats every order as its own round trip.
//!
//! Reporting never mutates the allocation and never fails: an empty or
//! all-overflow allocation yields [`Report::empty`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod estimate;
mod report;
mod route;

pub use estimate::{ESTIMATE_DIVISOR, out_and_back_estimates};
pub use report::{CarrierStats, EFFICIENCY_EPSILON, NO_DELIVERIES_LABEL, Report, generate_report};
pub use route::{route_distance, route_minutes};
