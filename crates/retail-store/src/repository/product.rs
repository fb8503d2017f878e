//! # Product Repository
//!
//! Products are only ever appended here. Stock changes go through
//! [`Store::create_sale`].

use retail_core::{EntityId, NewProduct, Product};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::store::{next_id, Store};

impl Store {
    /// All products in insertion order, with current stock.
    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn get_product(&self, id: EntityId) -> StoreResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(StoreError::not_found("Product", id))
    }

    /// Appends a product and returns it with its assigned id.
    pub fn add_product(&mut self, product: NewProduct) -> Product {
        let product = Product {
            id: next_id(self.products.iter().map(|p| p.id)),
            name: product.name,
            price: product.price,
            stock: product.stock,
        };

        debug!(id = product.id, price = %product.price, stock = product.stock, "Product added");
        self.products.push(product.clone());
        product
    }

    /// Removes `qty` units from a product's stock.
    pub(crate) fn take_stock(&mut self, id: EntityId, qty: i64) -> StoreResult<()> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::not_found("Product", id))?;

        product.stock -= qty;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retail_core::Money;

    fn mouse() -> NewProduct {
        NewProduct {
            name: "Wireless Mouse".to_string(),
            price: Money::from_cents(99_900),
            stock: 50,
        }
    }

    #[test]
    fn test_add_and_get_product() {
        let mut store = Store::default();

        let product = store.add_product(mouse());
        assert_eq!(product.id, 1);
        assert_eq!(store.add_product(mouse()).id, 2);

        let fetched = store.get_product(1).unwrap();
        assert_eq!(fetched.price, Money::from_cents(99_900));
        assert_eq!(fetched.stock, 50);
    }

    #[test]
    fn test_missing_product() {
        let store = Store::default();
        assert!(matches!(
            store.get_product(3),
            Err(StoreError::NotFound { entity: "Product", id: 3 })
        ));
    }

    #[test]
    fn test_take_stock() {
        let mut store = Store::default();
        store.add_product(mouse());

        store.take_stock(1, 2).unwrap();
        assert_eq!(store.get_product(1).unwrap().stock, 48);
        assert!(store.take_stock(9, 1).is_err());
    }
}
