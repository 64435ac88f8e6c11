//! Persisted cart.

use espr_storage::{keys, Storage};

use crate::cart::CartLineItem;
use crate::ids::ProductId;
use crate::pricing::{compute_totals, Totals};
use crate::product::Product;

/// CRUD over the cart stored under [`keys::CART`].
///
/// Every mutation is a single read-modify-write of the whole list and is
/// persisted immediately. Storage faults never surface as errors: reads fall
/// back to an empty cart and writes report `false`.
#[derive(Debug, Clone)]
pub struct CartRepository {
    storage: Storage,
}

impl CartRepository {
    /// Create a repository over `storage`.
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Current line items, in insertion order.
    ///
    /// Empty if the cart was never created or can't be read.
    pub fn get_cart(&self) -> Vec<CartLineItem> {
        self.storage.get_or_default(keys::CART)
    }

    /// Check if the cart has no line items.
    pub fn is_empty(&self) -> bool {
        self.get_cart().is_empty()
    }

    /// Add `quantity` units of `product`.
    ///
    /// If the product is already in the cart its quantity grows by
    /// `quantity`; otherwise a new line item is appended. A quantity of 0
    /// counts as 1. Returns `false` only if the cart could not be saved.
    pub fn add_item(&self, product: &Product, quantity: u32) -> bool {
        let quantity = quantity.max(1);
        let mut cart = self.get_cart();

        if let Some(existing) = cart.iter_mut().find(|item| item.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            cart.push(CartLineItem::new(product, quantity));
        }

        tracing::debug!(product_id = %product.id, quantity, "adding to cart");
        self.save(&cart)
    }

    /// Set the quantity of a line item, clamped to at least 1.
    ///
    /// Returns `false` without writing if `id` is not in the cart.
    pub fn update_quantity(&self, id: &ProductId, quantity: i64) -> bool {
        let mut cart = self.get_cart();

        let Some(item) = cart.iter_mut().find(|item| &item.id == id) else {
            tracing::debug!(product_id = %id, "update for item not in cart");
            return false;
        };

        item.quantity = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);
        self.save(&cart)
    }

    /// Remove the line item for `id`.
    ///
    /// The filtered cart is saved whether or not `id` was present, so
    /// removing an absent item is a successful no-op.
    pub fn remove_item(&self, id: &ProductId) -> bool {
        let mut cart = self.get_cart();
        cart.retain(|item| &item.id != id);
        self.save(&cart)
    }

    /// Delete the cart entirely.
    pub fn clear(&self) -> bool {
        self.storage.remove(keys::CART)
    }

    /// Total number of units across all line items.
    pub fn count(&self) -> u64 {
        self.get_cart()
            .iter()
            .map(|item| u64::from(item.quantity))
            .sum()
    }

    /// Totals for the current cart.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.get_cart())
    }

    fn save(&self, cart: &[CartLineItem]) -> bool {
        let saved = self.storage.set(keys::CART, cart);
        if !saved {
            tracing::warn!(items = cart.len(), "failed to save cart");
        }
        saved
    }
}
