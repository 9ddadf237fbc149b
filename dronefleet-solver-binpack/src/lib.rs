//! Capacity- and range-constrained bin packing for the dronefleet engine.
//!
//! This crate provides [`BinPackingAllocator`], the default implementation of
//! the [`Allocator`](dronefleet_core::Allocator) trait. Orders are presorted by
//! priority and distance, a fixed set of greedy [`Strategy`] heuristics each
//! build a candidate [`Partition`], invalid candidates are discarded, and the
//! candidate with the highest capacity utilization wins. Orders left out of
//! the winning partition, or placed beyond the fleet size, are overflow.
//!
//! [`LeastLoadedAllocator`] offers a simpler single-pass alternative that
//! assigns each order to the least busy carrier able to take it.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod allocator;
mod least_loaded;
mod partition;
mod presort;
mod strategy;

pub use allocator::BinPackingAllocator;
pub use least_loaded::LeastLoadedAllocator;
pub use partition::{Bin, Partition};
pub use presort::priority_presort;
pub use strategy::Strategy;
