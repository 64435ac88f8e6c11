//! One handle over every repository that shares a store.

use espr_storage::Storage;

use crate::admin::AdminSessionStore;
use crate::cart::CartRepository;
use crate::checkout::OrderRepository;
use crate::config::StorefrontConfig;

/// Cart, orders and admin session over the same [`Storage`].
#[derive(Debug, Clone)]
pub struct Storefront {
    cart: CartRepository,
    orders: OrderRepository,
    admin: AdminSessionStore,
}

impl Storefront {
    pub fn new(storage: Storage, config: &StorefrontConfig) -> Self {
        Self {
            cart: CartRepository::new(storage.clone()),
            orders: OrderRepository::with_tracking(storage.clone(), config.tracking.clone()),
            admin: AdminSessionStore::with_config(storage, &config.admin),
        }
    }

    /// A storefront over a fresh in-memory store with default settings.
    pub fn in_memory() -> Self {
        Self::new(Storage::in_memory(), &StorefrontConfig::default())
    }

    pub fn cart(&self) -> &CartRepository {
        &self.cart
    }

    pub fn orders(&self) -> &OrderRepository {
        &self.orders
    }

    pub fn admin(&self) -> &AdminSessionStore {
        &self.admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::ShippingInfo;
    use crate::money::Money;
    use crate::product::Product;

    #[test]
    fn test_repositories_share_storage() {
        let shop = Storefront::in_memory();
        let beans = Product::new("beans", "Benguet Beans", Money::new(45000)).unwrap();
        shop.cart().add_item(&beans, 1);

        let order = shop
            .orders()
            .checkout(ShippingInfo::new("Ana", "1234567", "12 Elm St"))
            .unwrap();
        assert_eq!(order.total, Money::new(50400));
        assert!(shop.cart().is_empty());
    }
}
