//! Product type.

use crate::ids::ProductId;
use crate::money::Money;
use crate::CommerceError;
use serde::{Deserialize, Serialize};

/// A product that can be put in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
}

impl Product {
    /// Create a new product. Rejects negative prices.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
    ) -> Result<Self, CommerceError> {
        if price.is_negative() {
            return Err(CommerceError::InvalidPrice(price.to_string()));
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            price,
        })
    }

    /// Create a product from a decimal peso price, as typed into a form.
    pub fn from_decimal(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
    ) -> Result<Self, CommerceError> {
        if !price.is_finite() || price < 0.0 {
            return Err(CommerceError::InvalidPrice(price.to_string()));
        }
        Self::new(id, name, Money::from_decimal(price))
    }
}
