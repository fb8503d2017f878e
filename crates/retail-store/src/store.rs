//! # Store and Shared Access
//!
//! `Store` is the plain owner of the three collections. `SharedStore` is the
//! cloneable handle the HTTP layer holds; it serializes writers with a
//! `tokio::sync::RwLock`.
//!
//! ## Locking Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      SharedStore (Arc<RwLock<Store>>)                   │
//! │                                                                         │
//! │  GET /api/products ──► read()  ─┐                                       │
//! │  GET /api/sales    ──► read()  ─┼─► many readers at once                │
//! │                                  │                                       │
//! │  POST /api/sales   ──► write() ──► exclusive: plan + apply in one guard │
//! │                                                                         │
//! │  No await point inside a guard: every store operation is synchronous.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use retail_core::{Customer, EntityId, NewCustomer, NewProduct, NewSale, Product, Sale};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

use crate::error::StoreResult;
use crate::seed;

// =============================================================================
// Store Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust
/// use retail_store::StoreConfig;
///
/// let config = StoreConfig::default().seed_demo_data(false);
/// assert!(!config.seed_demo_data);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Load the demo customers, products and sale at startup.
    pub seed_demo_data: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            seed_demo_data: true,
        }
    }
}

impl StoreConfig {
    /// A store that starts with three empty collections.
    pub fn empty() -> Self {
        StoreConfig {
            seed_demo_data: false,
        }
    }

    /// Sets whether demo data is loaded.
    pub fn seed_demo_data(mut self, seed: bool) -> Self {
        self.seed_demo_data = seed;
        self
    }
}

// =============================================================================
// Store
// =============================================================================

/// The three collections, in insertion order.
///
/// Operations live in [`crate::repository`], one file per collection.
#[derive(Debug, Default, Clone)]
pub struct Store {
    pub(crate) customers: Vec<Customer>,
    pub(crate) products: Vec<Product>,
    pub(crate) sales: Vec<Sale>,
}

impl Store {
    /// Creates a store according to `config`.
    pub fn new(config: &StoreConfig) -> Self {
        let mut store = Store::default();

        if config.seed_demo_data {
            seed::load_demo_data(&mut store);
            info!(
                customers = store.customers.len(),
                products = store.products.len(),
                sales = store.sales.len(),
                "Demo data loaded"
            );
        }

        store
    }
}

/// Next id for a collection: one past the largest id, or 1 when empty.
pub(crate) fn next_id(ids: impl Iterator<Item = EntityId>) -> EntityId {
    ids.max().map_or(1, |max| max + 1)
}

// =============================================================================
// Shared Store
// =============================================================================

/// Cloneable, thread-safe handle to a [`Store`].
#[derive(Debug, Clone)]
pub struct SharedStore {
    inner: Arc<RwLock<Store>>,
}

impl SharedStore {
    /// Creates a new shared store.
    pub fn new(config: StoreConfig) -> Self {
        SharedStore {
            inner: Arc::new(RwLock::new(Store::new(&config))),
        }
    }

    /// Shared read access.
    pub async fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.inner.read().await
    }

    /// Exclusive write access.
    pub async fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.inner.write().await
    }

    // =========================================================================
    // Customer Operations
    // =========================================================================

    pub async fn list_customers(&self) -> Vec<Customer> {
        self.read().await.list_customers().to_vec()
    }

    pub async fn get_customer(&self, id: EntityId) -> StoreResult<Customer> {
        self.read().await.get_customer(id).cloned()
    }

    pub async fn add_customer(&self, customer: NewCustomer) -> Customer {
        self.write().await.add_customer(customer)
    }

    // =========================================================================
    // Product Operations
    // =========================================================================

    pub async fn list_products(&self) -> Vec<Product> {
        self.read().await.list_products().to_vec()
    }

    pub async fn get_product(&self, id: EntityId) -> StoreResult<Product> {
        self.read().await.get_product(id).cloned()
    }

    pub async fn add_product(&self, product: NewProduct) -> Product {
        self.write().await.add_product(product)
    }

    // =========================================================================
    // Sale Operations
    // =========================================================================

    pub async fn list_sales(&self) -> Vec<Sale> {
        self.read().await.list_sales().to_vec()
    }

    /// Validates and applies a sale atomically with respect to other requests.
    pub async fn create_sale(&self, sale: NewSale) -> StoreResult<Sale> {
        self.write().await.create_sale(sale)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id() {
        assert_eq!(next_id(std::iter::empty()), 1);
        assert_eq!(next_id([1, 2, 3].into_iter()), 4);
        assert_eq!(next_id([5, 2].into_iter()), 6);
    }

    #[test]
    fn test_empty_config_starts_empty() {
        let store = Store::new(&StoreConfig::empty());
        assert!(store.list_customers().is_empty());
        assert!(store.list_products().is_empty());
        assert!(store.list_sales().is_empty());
    }

    #[test]
    fn test_default_config_seeds() {
        let store = Store::new(&StoreConfig::default());
        assert_eq!(store.list_customers().len(), 2);
        assert_eq!(store.list_products().len(), 2);
        assert_eq!(store.list_sales().len(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = SharedStore::new(StoreConfig::empty());
        let other = store.clone();

        other
            .add_customer(NewCustomer {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            })
            .await;

        assert_eq!(store.list_customers().await.len(), 1);
    }
}
