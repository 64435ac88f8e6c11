//! Order types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::CartLineItem;
use crate::checkout::ShippingInfo;
use crate::ids::OrderId;
use crate::money::Money;
use crate::pricing::{compute_totals, Totals};

/// Order status.
///
/// Every order is created `Pending`. The later states are written by the
/// back office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    /// Order being prepared.
    Processing,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

/// A placed order.
///
/// Stored as `{ orderId, cart, shipping, status, date, total }`. The cart is
/// a snapshot taken at placement and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Tracking code.
    pub order_id: OrderId,
    /// Line items as they were at checkout.
    pub cart: Vec<CartLineItem>,
    /// Delivery details.
    pub shipping: ShippingInfo,
    /// Order status.
    #[serde(default)]
    pub status: OrderStatus,
    /// When the order was placed.
    pub date: DateTime<Utc>,
    /// Grand total including tax.
    pub total: Money,
}

impl Order {
    /// Create a pending order for a cart snapshot.
    ///
    /// The stored total is computed from `cart`.
    pub fn new(
        order_id: OrderId,
        cart: Vec<CartLineItem>,
        shipping: ShippingInfo,
        date: DateTime<Utc>,
    ) -> Self {
        let total = compute_totals(&cart).total;
        Self {
            order_id,
            cart,
            shipping,
            status: OrderStatus::Pending,
            date,
            total,
        }
    }

    /// Recompute the pricing breakdown from the snapshot.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.cart)
    }

    /// Total number of units ordered.
    pub fn item_count(&self) -> u64 {
        self.cart.iter().map(|item| u64::from(item.quantity)).sum()
    }
}
