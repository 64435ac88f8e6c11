//! Cart line item type.

use crate::ids::ProductId;
use crate::money::Money;
use crate::product::Product;
use serde::{Deserialize, Serialize};

/// One product entry in the cart, with an accumulated quantity.
///
/// The stored shape is `{ "id", "name", "price", "quantity" }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLineItem {
    /// Product ID; unique within a cart.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Quantity, never below 1.
    pub quantity: u32,
}

impl CartLineItem {
    /// Create a line item for `quantity` units of a product.
    ///
    /// A quantity of 0 is raised to 1.
    pub fn new(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity: quantity.max(1),
        }
    }

    /// Price times quantity.
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let product = Product::new("latte", "Latte", Money::new(15000)).unwrap();
        let item = CartLineItem::new(&product, 3);
        assert_eq!(item.line_total().amount_cents, 45000);
    }

    #[test]
    fn test_zero_quantity_is_raised_to_one() {
        let product = Product::new("latte", "Latte", Money::new(15000)).unwrap();
        assert_eq!(CartLineItem::new(&product, 0).quantity, 1);
    }

    #[test]
    fn test_stored_shape() {
        let json = r#"{"id":"product-1","name":"Cold Brew","price":180,"quantity":2}"#;
        let item: CartLineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.price.amount_cents, 18000);
        assert_eq!(item.quantity, 2);
    }
}
