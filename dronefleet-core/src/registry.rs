//! In-memory registry of submitted orders.

use geo::Coord;
use log::{debug, info};

use crate::{Order, OrderDraft, OrderId, Priority};

/// Holds the submitted orders and issues their identifiers.
///
/// Identifiers are sequential and restart at 1 after [`reset`](Self::reset).
/// Registration performs no validation.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dronefleet_core::{OrderRegistry, Priority};
///
/// let mut registry = OrderRegistry::new();
/// let first = registry.register(2.0, Coord { x: 1.0, y: 1.0 }, Priority::Low);
/// let second = registry.register(3.0, Coord { x: 2.0, y: 2.0 }, Priority::High);
/// assert_eq!((first.id, second.id), (1, 2));
///
/// registry.reset();
/// assert!(registry.is_empty());
/// assert_eq!(registry.register(1.0, Coord { x: 0.0, y: 0.0 }, Priority::Low).id, 1);
/// ```
#[derive(Debug, Clone)]
pub struct OrderRegistry {
    orders: Vec<Order>,
    next_id: OrderId,
}

impl Default for OrderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderRegistry {
    /// Create an empty registry whose first order receives id 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            orders: Vec::new(),
            next_id: 1,
        }
    }

    /// Register an order and return the stored copy.
    pub fn register(
        &mut self,
        weight_kg: f64,
        destination: Coord<f64>,
        priority: Priority,
    ) -> Order {
        self.register_draft(OrderDraft::new(weight_kg, destination, priority))
    }

    /// Register a prepared draft and return the stored copy.
    pub fn register_draft(&mut self, draft: OrderDraft) -> Order {
        let order = draft.into_order(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        debug!(
            "registered order {} ({} kg, {} priority)",
            order.id, order.weight_kg, order.priority
        );
        self.orders.push(order.clone());
        order
    }

    /// Snapshot of every order in insertion order.
    #[must_use]
    pub fn all(&self) -> Vec<Order> {
        self.orders.clone()
    }

    /// Borrow the registered orders in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Order] {
        &self.orders
    }

    /// Orders awaiting dispatch.
    ///
    /// Every order counts as pending: dispatch simulations never mark orders
    /// as delivered, so the flag does not filter this view.
    #[must_use]
    pub fn pending(&self) -> Vec<Order> {
        self.all()
    }

    /// Orders whose delivered flag is set.
    #[must_use]
    pub fn delivered(&self) -> Vec<Order> {
        self.orders.iter().filter(|o| o.delivered).cloned().collect()
    }

    /// Look up an order by identifier.
    #[must_use]
    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Number of registered orders.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether no orders are registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Drop every order and restart identifiers at 1.
    pub fn reset(&mut self) {
        let dropped = self.orders.len();
        self.orders.clear();
        self.next_id = 1;
        info!("order registry reset; {dropped} orders cleared");
    }
}
