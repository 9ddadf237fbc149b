//! Delivery orders.
//!
//! An [`Order`] is created by the [`OrderRegistry`](crate::OrderRegistry),
//! which assigns its identifier. Callers describe a new order with an
//! [`OrderDraft`], optionally validating it at the transport boundary first.

use geo::Coord;
use thiserror::Error;

use crate::{Priority, distance_from_origin};

/// Identifier assigned by the registry; starts at 1 after every reset.
pub type OrderId = u64;

/// A registered delivery order.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dronefleet_core::{Order, Priority};
///
/// let order = Order::new(1, 2.5, Coord { x: 3.0, y: 4.0 }, Priority::High);
/// assert_eq!(order.distance_from_origin(), 5.0);
/// assert!(!order.delivered);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Order {
    /// Registry-assigned identifier.
    pub id: OrderId,
    /// Parcel weight in kilograms.
    #[cfg_attr(feature = "serde", serde(rename = "weight"))]
    pub weight_kg: f64,
    /// Destination relative to the depot at the origin.
    pub destination: Coord<f64>,
    /// Delivery urgency.
    #[cfg_attr(feature = "serde", serde(default))]
    pub priority: Priority,
    /// Reporting flag; no dispatch operation sets it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub delivered: bool,
}

impl Order {
    /// Construct an undelivered order.
    #[must_use]
    pub const fn new(
        id: OrderId,
        weight_kg: f64,
        destination: Coord<f64>,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            weight_kg,
            destination,
            priority,
            delivered: false,
        }
    }

    /// Euclidean distance from the depot to the destination.
    #[must_use]
    pub fn distance_from_origin(&self) -> f64 {
        distance_from_origin(self.destination)
    }
}

/// An order as submitted, before the registry assigns an identifier.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct OrderDraft {
    /// Parcel weight in kilograms.
    #[cfg_attr(feature = "serde", serde(rename = "weight"))]
    pub weight_kg: f64,
    /// Destination relative to the depot.
    pub destination: Coord<f64>,
    /// Delivery urgency, `low` when omitted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub priority: Priority,
}

/// Reasons an [`OrderDraft`] is rejected by [`OrderDraft::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum OrderDraftError {
    /// The weight was below zero.
    #[error("order weight must not be negative (got {weight_kg})")]
    NegativeWeight {
        /// Offending weight.
        weight_kg: f64,
    },
    /// The weight was NaN or infinite.
    #[error("order weight must be finite")]
    NonFiniteWeight,
    /// A destination coordinate was NaN or infinite.
    #[error("destination coordinates must be finite")]
    NonFiniteCoordinate,
}

impl OrderDraft {
    /// Construct a draft.
    #[must_use]
    pub const fn new(weight_kg: f64, destination: Coord<f64>, priority: Priority) -> Self {
        Self {
            weight_kg,
            destination,
            priority,
        }
    }

    /// Check the draft for values no carrier could ever represent.
    ///
    /// Registration never calls this; it is offered to transport layers that
    /// want to reject malformed input before it reaches the registry. Heavy or
    /// distant orders are still valid: they simply end up unallocated.
    ///
    /// # Errors
    /// Returns [`OrderDraftError`] describing the first problem found.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use dronefleet_core::{OrderDraft, OrderDraftError, Priority};
    ///
    /// let draft = OrderDraft::new(-1.0, Coord { x: 0.0, y: 0.0 }, Priority::Low);
    /// assert!(matches!(draft.validate(), Err(OrderDraftError::NegativeWeight { .. })));
    /// ```
    pub fn validate(&self) -> Result<(), OrderDraftError> {
        if !self.weight_kg.is_finite() {
            return Err(OrderDraftError::NonFiniteWeight);
        }
        if self.weight_kg < 0.0 {
            return Err(OrderDraftError::NegativeWeight {
                weight_kg: self.weight_kg,
            });
        }
        if !(self.destination.x.is_finite() && self.destination.y.is_finite()) {
            return Err(OrderDraftError::NonFiniteCoordinate);
        }
        Ok(())
    }

    /// Attach an identifier, producing an undelivered [`Order`].
    #[must_use]
    pub const fn into_order(self, id: OrderId) -> Order {
        Order::new(id, self.weight_kg, self.destination, self.priority)
    }
}
