//! Cart, checkout and order tracking for the Espressionist storefront.
//!
//! - **Cart**: line items persisted under the `cart` key
//! - **Checkout**: shipping validation, order placement, tracking codes
//! - **Pricing**: the single totals calculator (12% VAT)
//! - **Admin**: the admin login record and its expiry window
//!
//! All state goes through an [`espr_storage::Storage`] handle, so the same
//! code runs over an in-memory store in tests and a file on disk in the CLI.
//!
//! # Example
//!
//! ```rust
//! use espr_commerce::prelude::*;
//!
//! let shop = Storefront::in_memory();
//! let latte = Product::from_decimal("latte", "Spanish Latte", 150.0).unwrap();
//! shop.cart().add_item(&latte, 2);
//!
//! let order = shop
//!     .orders()
//!     .checkout(ShippingInfo::new("Ana Cruz", "09171234567", "12 Elm St, Quezon City"))
//!     .unwrap();
//! assert_eq!(order.total.to_string(), "\u{20b1}336.00");
//! assert!(shop.orders().find_order(order.order_id.as_str()).is_some());
//! ```

pub mod admin;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod pricing;
pub mod product;
pub mod storefront;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;
    pub use crate::product::Product;
    pub use crate::storefront::Storefront;

    // Cart
    pub use crate::cart::{CartLineItem, CartRepository};
    pub use crate::pricing::{compute_totals, Totals, TAX_RATE_PERCENT};

    // Checkout
    pub use crate::checkout::{
        FieldError, Order, OrderRepository, OrderStatus, ShippingField, ShippingInfo,
    };

    // Admin
    pub use crate::admin::{AdminSession, AdminSessionStore};
    pub use crate::config::StorefrontConfig;
}
