//! # Domain Types
//!
//! Core domain types used throughout the retail back-office.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │    Product      │   │      Sale       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u64)       │   │  id (u64)       │   │  id (u64)       │       │
//! │  │  name           │   │  name           │   │  customer_id ───┼──► Customer
//! │  │  email          │   │  price (Money)  │   │  items[] ───────┼──► Product
//! │  └─────────────────┘   │  stock          │   │  total (Money)  │       │
//! │                        └─────────────────┘   │  timestamp      │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Ids are small positive integers assigned per collection by the store
//! (`max + 1`, starting at 1). A customer and a product may share an id.
//!
//! ## Inputs vs Records
//! `New*` types are validated inputs: every required field is present and
//! well-formed. The store turns them into records by assigning an id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Identifier of a record within its own collection.
pub type EntityId = u64;

// =============================================================================
// Customer
// =============================================================================

/// A customer of the store. Never mutated or deleted once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: EntityId,
    pub name: String,
    pub email: String,
}

/// Validated input for creating a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,

    /// Display name shown in the UI.
    pub name: String,

    /// Unit price. Never negative.
    pub price: Money,

    /// Units on hand. Only sale processing changes it, and never below zero.
    pub stock: i64,
}

impl Product {
    /// Checks if `quantity` units can be taken from stock.
    #[inline]
    pub fn can_sell(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }
}

/// Validated input for creating a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub price: Money,
    pub stock: i64,
}

// =============================================================================
// Sale
// =============================================================================

/// One line of a sale: which product, how many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    pub product_id: EntityId,
    pub qty: i64,
}

/// A completed sale. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: EntityId,
    pub customer_id: EntityId,

    /// Lines in the order they were submitted.
    pub items: Vec<SaleItem>,

    /// Σ price × qty at the time of the sale.
    pub total: Money,

    pub timestamp: DateTime<Utc>,
}

/// Validated input for creating a sale.
///
/// Shape only: references to customers/products and stock levels are
/// checked against the store by [`crate::sale::plan_sale`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSale {
    pub customer_id: EntityId,
    pub items: Vec<SaleItem>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_can_sell() {
        let product = Product {
            id: 1,
            name: "Wireless Mouse".to_string(),
            price: Money::from_cents(99_900),
            stock: 50,
        };

        assert!(product.can_sell(50));
        assert!(!product.can_sell(51));
    }

    #[test]
    fn test_sale_serializes_camel_case() {
        let sale = Sale {
            id: 1,
            customer_id: 1,
            items: vec![SaleItem {
                product_id: 1,
                qty: 2,
            }],
            total: Money::from_cents(199_800),
            timestamp: "2026-01-31T10:00:00Z".parse().unwrap(),
        };

        let value = serde_json::to_value(&sale).unwrap();
        assert_eq!(value["customerId"], json!(1));
        assert_eq!(value["items"][0], json!({ "productId": 1, "qty": 2 }));
        assert_eq!(value["total"], json!(1998));
        assert_eq!(value["timestamp"], json!("2026-01-31T10:00:00Z"));
    }
}
