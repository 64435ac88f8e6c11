//! Persisted orders and order placement.

use chrono::Utc;
use espr_storage::{keys, Storage};

use crate::cart::{CartLineItem, CartRepository};
use crate::checkout::{Order, ShippingInfo};
use crate::config::TrackingConfig;
use crate::error::CommerceError;

/// Order list stored under [`keys::ORDERS`], plus the checkout step that
/// turns a cart into an order.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    storage: Storage,
    cart: CartRepository,
    tracking: TrackingConfig,
}

impl OrderRepository {
    /// Create a repository over `storage` with the default tracking format.
    ///
    /// The cart cleared after placement lives in the same storage.
    pub fn new(storage: Storage) -> Self {
        Self::with_tracking(storage, TrackingConfig::default())
    }

    /// Create a repository with a custom tracking code format.
    pub fn with_tracking(storage: Storage, tracking: TrackingConfig) -> Self {
        let cart = CartRepository::new(storage.clone());
        Self {
            storage,
            cart,
            tracking,
        }
    }

    /// Tracking code format in use.
    pub fn tracking(&self) -> &TrackingConfig {
        &self.tracking
    }

    /// All placed orders, oldest first.
    ///
    /// Empty if none were placed or the list can't be read.
    pub fn orders(&self) -> Vec<Order> {
        self.storage.get_or_default(keys::ORDERS)
    }

    /// All placed orders, failing if the stored list is unreadable.
    pub fn try_orders(&self) -> Result<Vec<Order>, CommerceError> {
        Ok(self.storage.try_get(keys::ORDERS)?.unwrap_or_default())
    }

    /// Place an order for `cart` shipped to `shipping`.
    ///
    /// Shipping fields are trimmed before validation and storage. The order
    /// is appended to the stored list before the cart is cleared.
    /// If the append fails nothing changes and [`CommerceError::OrderNotSaved`]
    /// is returned. A failure to clear the cart afterwards is logged and
    /// otherwise ignored.
    pub fn place_order(
        &self,
        cart: Vec<CartLineItem>,
        shipping: ShippingInfo,
    ) -> Result<Order, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        let shipping = shipping.normalized();
        shipping.validate()?;

        let order = Order::new(self.tracking.generate(), cart, shipping, Utc::now());

        // An unreadable list must not be replaced by a one-order list.
        let mut orders: Vec<Order> = self
            .storage
            .try_get(keys::ORDERS)
            .map_err(CommerceError::OrderNotSaved)?
            .unwrap_or_default();
        orders.push(order.clone());
        self.storage
            .try_set(keys::ORDERS, &orders)
            .map_err(CommerceError::OrderNotSaved)?;

        tracing::info!(
            order_id = %order.order_id,
            items = order.cart.len(),
            total = %order.total,
            "order placed"
        );

        if !self.cart.clear() {
            tracing::warn!(order_id = %order.order_id, "order placed but cart was not cleared");
        }

        Ok(order)
    }

    /// Place an order for whatever is in the cart right now.
    pub fn checkout(&self, shipping: ShippingInfo) -> Result<Order, CommerceError> {
        self.place_order(self.cart.get_cart(), shipping)
    }

    /// Find an order by its exact tracking code.
    pub fn find_order(&self, order_id: &str) -> Option<Order> {
        self.orders()
            .into_iter()
            .find(|order| order.order_id.as_str() == order_id)
    }
}
