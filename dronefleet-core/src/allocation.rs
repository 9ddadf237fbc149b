//! Allocation results and the [`Allocator`] trait.
//!
//! An [`Allocation`] assigns every order it was given either to one of the
//! fleet's carriers (keys `1..=fleet_size`) or to the overflow bucket, which
//! is exposed under the reserved key `-1`.

use std::collections::BTreeMap;
use std::fmt;

use crate::{FleetConfig, Order};

/// Key of a bucket in an [`Allocation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CarrierKey {
    /// Orders that could not be placed on any carrier.
    Unallocated,
    /// A carrier, numbered from 1.
    Carrier(usize),
}

impl CarrierKey {
    /// Integer key used for the overflow bucket in keyed views.
    pub const SENTINEL: i64 = -1;

    /// Integer form of the key: the carrier number, or [`Self::SENTINEL`].
    #[must_use]
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Unallocated => Self::SENTINEL,
            Self::Carrier(id) => i64::try_from(id).unwrap_or(i64::MAX),
        }
    }
}

impl fmt::Display for CarrierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unallocated => f.write_str("unallocated"),
            Self::Carrier(id) => write!(f, "carrier {id}"),
        }
    }
}

/// How an allocation was chosen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllocationDiagnostics {
    /// Name of the strategy whose partition was selected, if any.
    pub strategy: Option<&'static str>,
    /// Number of candidate partitions built.
    pub candidates_evaluated: usize,
    /// Number of candidates discarded by validation.
    pub candidates_rejected: usize,
    /// Capacity utilization of the selected partition, `0.0` when none.
    pub utilization: f64,
}

/// Orders assigned to each carrier plus the overflow bucket.
///
/// Carrier buckets always exist for `1..=fleet_size`, even when empty.
///
/// # Examples
/// ```
/// use dronefleet_core::{Allocation, CarrierKey};
///
/// let allocation = Allocation::empty(3);
/// let keyed = allocation.to_keyed();
/// assert_eq!(keyed.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert!(allocation.get(CarrierKey::Unallocated).is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    carriers: Vec<Vec<Order>>,
    overflow: Vec<Order>,
    diagnostics: AllocationDiagnostics,
}

impl Allocation {
    /// An allocation with `fleet_size` empty carriers and no overflow.
    #[must_use]
    pub fn empty(fleet_size: usize) -> Self {
        Self {
            carriers: vec![Vec::new(); fleet_size],
            overflow: Vec::new(),
            diagnostics: AllocationDiagnostics::default(),
        }
    }

    /// Assemble an allocation from per-carrier bins and overflow.
    ///
    /// `carriers[0]` becomes carrier 1. Bins are padded with empty carriers
    /// up to `fleet_size`; bins beyond `fleet_size` are moved to overflow.
    #[must_use]
    pub fn from_bins(
        fleet_size: usize,
        mut carriers: Vec<Vec<Order>>,
        mut overflow: Vec<Order>,
        diagnostics: AllocationDiagnostics,
    ) -> Self {
        if carriers.len() > fleet_size {
            for excess in carriers.split_off(fleet_size) {
                overflow.extend(excess);
            }
        }
        carriers.resize_with(fleet_size, Vec::new);
        Self {
            carriers,
            overflow,
            diagnostics,
        }
    }

    /// Orders assigned to carrier `id` (1-based).
    #[must_use]
    pub fn carrier(&self, id: usize) -> Option<&[Order]> {
        id.checked_sub(1)
            .and_then(|index| self.carriers.get(index))
            .map(Vec::as_slice)
    }

    /// Orders stored under `key`.
    ///
    /// The overflow bucket is reported only when it holds orders.
    #[must_use]
    pub fn get(&self, key: CarrierKey) -> Option<&[Order]> {
        match key {
            CarrierKey::Carrier(id) => self.carrier(id),
            CarrierKey::Unallocated if self.overflow.is_empty() => None,
            CarrierKey::Unallocated => Some(&self.overflow),
        }
    }

    /// Carrier numbers paired with their orders, in ascending order.
    pub fn carriers(&self) -> impl Iterator<Item = (usize, &[Order])> + '_ {
        (1..).zip(self.carriers.iter().map(Vec::as_slice))
    }

    /// Every bucket in key order: carriers first, then overflow when non-empty.
    pub fn buckets(&self) -> impl Iterator<Item = (CarrierKey, &[Order])> + '_ {
        let overflow = (!self.overflow.is_empty())
            .then_some((CarrierKey::Unallocated, self.overflow.as_slice()));
        self.carriers()
            .map(|(id, orders)| (CarrierKey::Carrier(id), orders))
            .chain(overflow)
    }

    /// Orders that no carrier could take.
    #[must_use]
    pub fn overflow(&self) -> &[Order] {
        &self.overflow
    }

    /// Every order in the allocation, carriers first.
    pub fn orders(&self) -> impl Iterator<Item = &Order> + '_ {
        self.carriers.iter().flatten().chain(self.overflow.iter())
    }

    /// Number of carrier buckets.
    #[must_use]
    pub const fn fleet_size(&self) -> usize {
        self.carriers.len()
    }

    /// Number of carriers with at least one order.
    #[must_use]
    pub fn active_carriers(&self) -> usize {
        self.carriers.iter().filter(|bin| !bin.is_empty()).count()
    }

    /// Number of orders placed on carriers.
    #[must_use]
    pub fn assigned_count(&self) -> usize {
        self.carriers.iter().map(Vec::len).sum()
    }

    /// Whether the allocation holds no orders at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders().next().is_none()
    }

    /// Details about how the allocation was chosen.
    #[must_use]
    pub const fn diagnostics(&self) -> &AllocationDiagnostics {
        &self.diagnostics
    }

    /// Keyed view: carriers `1..=fleet_size` plus `-1` when overflow exists.
    #[must_use]
    pub fn to_keyed(&self) -> BTreeMap<i64, Vec<Order>> {
        self.buckets()
            .map(|(key, orders)| (key.as_i64(), orders.to_vec()))
            .collect()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Allocation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.buckets().map(|(key, orders)| (key.as_i64(), orders)))
    }
}

/// Partition orders across a fleet.
///
/// Implementations are total: orders that cannot be placed end up in the
/// overflow bucket instead of producing an error. Every input order must
/// appear exactly once in the returned [`Allocation`].
pub trait Allocator: Send + Sync {
    /// Allocate `orders` to the carriers described by `fleet`.
    fn allocate(&self, orders: &[Order], fleet: &FleetConfig) -> Allocation;
}
