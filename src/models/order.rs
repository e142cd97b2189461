//! Production order payload.
//!
//! The concrete payload carried by tasks on a pharmaceutical planning
//! board: what to make, how much, how urgently, and by when. The board
//! itself never inspects it; ordering helpers here serve the
//! presentation of the unscheduled queue.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::Task;

/// Urgency of a production order.
///
/// Ordered so that `Critical` compares greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    /// Routine production.
    Normal,
    /// Expedited, ahead of routine work.
    Urgent,
    /// Must be scheduled first.
    Critical,
}

/// A production order awaiting scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOrder {
    /// Product name (e.g. "Lisinopril 10mg Tablets").
    pub product: String,
    /// Quantity in units.
    pub quantity: u64,
    /// Scheduling urgency.
    pub priority: Priority,
    /// Requested completion date (ISO date string), if any.
    pub due_date: Option<String>,
}

impl ProductOrder {
    /// Creates an order for the given product.
    pub fn new(product: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            quantity: 0,
            priority: Priority::Normal,
            due_date: None,
        }
    }

    /// Sets the quantity in units.
    pub fn with_quantity(mut self, quantity: u64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the urgency.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the requested completion date.
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }
}

/// Presentation order for the unscheduled queue.
///
/// Highest priority first, then earliest due date (orders without a due
/// date sort last), then task id for a stable listing.
pub fn queue_order(a: &Task<ProductOrder>, b: &Task<ProductOrder>) -> Ordering {
    b.payload
        .priority
        .cmp(&a.payload.priority)
        .then_with(|| match (&a.payload.due_date, &b.payload.due_date) {
            (Some(da), Some(db)) => da.cmp(db),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| a.id.cmp(&b.id))
}
