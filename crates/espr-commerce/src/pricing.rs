//! Cart totals.
//!
//! [`compute_totals`] is the only place subtotal, tax and total are worked
//! out. The cart view, checkout, order placement and order tracking all go
//! through it.

use crate::cart::CartLineItem;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Flat VAT rate applied to every order, in percent.
///
/// Not configurable per item or jurisdiction.
pub const TAX_RATE_PERCENT: i64 = 12;

/// Pricing breakdown for a list of line items.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Totals {
    /// Sum of price times quantity.
    pub subtotal: Money,
    /// VAT on the subtotal.
    pub tax: Money,
    /// Subtotal plus tax.
    pub total: Money,
}

/// Compute subtotal, tax and total for `items`.
pub fn compute_totals(items: &[CartLineItem]) -> Totals {
    let subtotal: Money = items.iter().map(CartLineItem::line_total).sum();
    let tax = subtotal.percent(TAX_RATE_PERCENT);
    Totals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    fn item(id: &str, pesos: i64, quantity: u32) -> CartLineItem {
        CartLineItem {
            id: ProductId::new(id),
            name: id.to_string(),
            price: Money::new(pesos * 100),
            quantity,
        }
    }

    #[test]
    fn test_compute_totals() {
        let totals = compute_totals(&[item("a", 100, 2), item("b", 50, 1)]);
        assert_eq!(totals.subtotal, Money::new(25000));
        assert_eq!(totals.tax, Money::new(3000));
        assert_eq!(totals.total, Money::new(28000));
    }

    #[test]
    fn test_empty_cart_totals() {
        assert_eq!(compute_totals(&[]), Totals::default());
    }

    #[test]
    fn test_tax_rounds_to_centavo() {
        let cheap = CartLineItem {
            id: ProductId::new("sugar"),
            name: "Sugar".to_string(),
            price: Money::new(99),
            quantity: 1,
        };
        let totals = compute_totals(&[cheap]);
        // 12% of 0.99 is 0.1188
        assert_eq!(totals.tax, Money::new(12));
        assert_eq!(totals.total, Money::new(111));
    }
}
