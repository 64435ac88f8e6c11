//! Commerce error types.

use espr_storage::StoreError;
use thiserror::Error;

use crate::checkout::FieldError;

/// Errors that can occur in storefront operations.
///
/// Most repository calls fail soft and never produce one of these; they are
/// reserved for validation and for order placement, where silently dropping
/// a write is not acceptable.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// A product price that is negative or not a number.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// A decimal amount that cannot be represented as money.
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),

    /// Checkout was attempted with nothing in the cart.
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// Shipping details failed validation.
    #[error("Invalid shipping information: {}", format_field_errors(.0))]
    InvalidShipping(Vec<FieldError>),

    /// The order list could not be read or written, so the order was not placed.
    #[error("Order could not be saved: {0}")]
    OrderNotSaved(#[source] StoreError),

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl CommerceError {
    /// Check if this is a validation failure the user can fix.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CommerceError::InvalidPrice(_)
                | CommerceError::InvalidAmount(_)
                | CommerceError::EmptyCart
                | CommerceError::InvalidShipping(_)
        )
    }
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::ShippingInfo;

    #[test]
    fn test_validation_errors() {
        assert!(CommerceError::EmptyCart.is_validation());
        assert!(CommerceError::InvalidPrice("-1".into()).is_validation());

        let shipping = ShippingInfo::new("", "1234567", "12 Elm St").validate().unwrap_err();
        assert!(shipping.is_validation());
        assert_eq!(
            shipping.to_string(),
            "Invalid shipping information: name: Full name is required"
        );
    }

    #[test]
    fn test_storage_errors_are_not_validation() {
        let not_saved = CommerceError::OrderNotSaved(StoreError::Poisoned);
        assert!(!not_saved.is_validation());
        assert!(!CommerceError::from(StoreError::Poisoned).is_validation());
    }
}
