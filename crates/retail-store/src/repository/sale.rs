//! # Sale Repository
//!
//! ## Sale Transaction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Creating a Sale                                      │
//! │                                                                         │
//! │  create_sale(NewSale)            (caller holds the write lock)         │
//! │       │                                                                 │
//! │       ├── plan_sale(customers, products)                               │
//! │       │       empty items, unknown customer/product, qty ≤ 0, stock    │
//! │       │       any error             → Rejected, nothing changed        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  apply: stock -= qty for each product in the plan                      │
//! │  append: Sale { id: max + 1, total, timestamp: now }                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use retail_core::{plan_sale, NewSale, Sale};
use tracing::{debug, info};

use crate::error::StoreResult;
use crate::store::{next_id, Store};

impl Store {
    /// All sales in insertion order.
    pub fn list_sales(&self) -> &[Sale] {
        &self.sales
    }

    /// Validates `sale`, removes the sold units from stock and records it.
    ///
    /// Either every product's stock changes and the sale is appended, or
    /// nothing changes at all.
    pub fn create_sale(&mut self, sale: NewSale) -> StoreResult<Sale> {
        let plan = plan_sale(&sale, &self.customers, &self.products).map_err(|err| {
            debug!(customer_id = sale.customer_id, error = %err, "Sale rejected");
            err
        })?;

        for &(product_id, qty) in &plan.stock_takes {
            self.take_stock(product_id, qty)?;
        }

        let sale = Sale {
            id: next_id(self.sales.iter().map(|s| s.id)),
            customer_id: plan.customer_id,
            items: plan.items,
            total: plan.total,
            timestamp: Utc::now(),
        };

        info!(
            id = sale.id,
            customer_id = sale.customer_id,
            lines = sale.items.len(),
            total = %sale.total,
            "Sale recorded"
        );

        self.sales.push(sale.clone());
        Ok(sale)
    }

    /// Appends a sale record as-is, leaving stock alone.
    pub(crate) fn push_sale_record(&mut self, sale: Sale) {
        self.sales.push(sale);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreError;
    use retail_core::{CoreError, EntityId, Money, NewCustomer, NewProduct, SaleItem};

    fn store() -> Store {
        let mut store = Store::default();
        store.add_customer(NewCustomer {
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
        });
        store.add_product(NewProduct {
            name: "Wireless Mouse".to_string(),
            price: Money::from_cents(99_900),
            stock: 50,
        });
        store.add_product(NewProduct {
            name: "Mechanical Keyboard".to_string(),
            price: Money::from_cents(349_900),
            stock: 20,
        });
        store
    }

    fn sale(customer_id: EntityId, lines: &[(EntityId, i64)]) -> NewSale {
        NewSale {
            customer_id,
            items: lines
                .iter()
                .map(|&(product_id, qty)| SaleItem { product_id, qty })
                .collect(),
        }
    }

    fn stocks(store: &Store) -> Vec<i64> {
        store.list_products().iter().map(|p| p.stock).collect()
    }

    #[test]
    fn test_sale_decrements_stock_and_totals() {
        let mut store = store();

        let recorded = store.create_sale(sale(1, &[(1, 2)])).unwrap();

        assert_eq!(recorded.id, 1);
        assert_eq!(recorded.total, Money::from_cents(199_800));
        assert_eq!(recorded.items, vec![SaleItem { product_id: 1, qty: 2 }]);
        assert_eq!(stocks(&store), vec![48, 20]);
        assert_eq!(store.list_sales().len(), 1);
    }

    #[test]
    fn test_sale_ids_increase() {
        let mut store = store();

        let first = store.create_sale(sale(1, &[(1, 1)])).unwrap();
        let second = store.create_sale(sale(1, &[(2, 1)])).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(second.timestamp >= first.timestamp);
    }

    #[test]
    fn test_exact_stock_can_be_sold() {
        let mut store = store();
        store.create_sale(sale(1, &[(2, 20)])).unwrap();
        assert_eq!(store.get_product(2).unwrap().stock, 0);

        let err = store.create_sale(sale(1, &[(2, 1)])).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Rejected(CoreError::InsufficientStock { product_id: 2, .. })
        ));
    }

    #[test]
    fn test_empty_items_rejected() {
        let mut store = store();
        let err = store.create_sale(sale(1, &[])).unwrap_err();

        assert_eq!(err.to_string(), "items is required");
        assert!(store.list_sales().is_empty());
    }

    #[test]
    fn test_invalid_customer_changes_nothing() {
        let mut store = store();
        let err = store.create_sale(sale(42, &[(1, 2)])).unwrap_err();

        assert!(matches!(err, StoreError::Rejected(CoreError::InvalidCustomer(42))));
        assert_eq!(stocks(&store), vec![50, 20]);
        assert!(store.list_sales().is_empty());
    }

    #[test]
    fn test_later_failing_line_changes_nothing() {
        let mut store = store();

        // First line is fine on its own; the second asks for too many.
        let err = store.create_sale(sale(1, &[(1, 2), (2, 21)])).unwrap_err();
        assert!(err.to_string().contains("productId 2"));
        assert_eq!(stocks(&store), vec![50, 20]);

        let err = store.create_sale(sale(1, &[(1, 2), (99, 1)])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid productId 99");
        assert_eq!(stocks(&store), vec![50, 20]);
        assert!(store.list_sales().is_empty());
    }

    #[test]
    fn test_non_positive_qty_changes_nothing() {
        let mut store = store();

        for qty in [0, -5] {
            let err = store.create_sale(sale(1, &[(1, qty)])).unwrap_err();
            assert_eq!(err.to_string(), "qty must be positive");
        }

        assert_eq!(stocks(&store), vec![50, 20]);
        assert!(store.list_sales().is_empty());
    }

    #[test]
    fn test_insufficient_stock_message() {
        let mut store = store();
        let err = store.create_sale(sale(1, &[(1, 51)])).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("productId 1"));
        assert_eq!(store.get_product(1).unwrap().stock, 50);
    }
}
