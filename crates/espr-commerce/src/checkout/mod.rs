//! Checkout module.
//!
//! Contains shipping details, orders, tracking codes and the order
//! repository that places them.

mod order;
mod repository;
mod shipping;
mod tracking;

pub use order::{Order, OrderStatus};
pub use repository::OrderRepository;
pub use shipping::{FieldError, ShippingField, ShippingInfo};
pub use tracking::{
    generate_tracking_code, is_well_formed, sanitize_tracking_code, ALPHABET, DEFAULT_LENGTH,
    DEFAULT_PREFIX,
};
