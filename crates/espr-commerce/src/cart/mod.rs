//! Shopping cart module.
//!
//! Contains the cart line item type and the persisted cart repository.

mod line_item;
mod repository;

pub use line_item::CartLineItem;
pub use repository::CartRepository;
