//! # Demo Seed Data
//!
//! A small, fixed set of records so a fresh server has something to show.
//!
//! ## Seeded Records
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Customers   1 Alice Johnson <alice@example.com>                        │
//! │              2 Bob Singh     <bob@example.com>                          │
//! │                                                                         │
//! │  Products    1 Wireless Mouse        999.00   stock 50                 │
//! │              2 Mechanical Keyboard  3499.00   stock 20                 │
//! │                                                                         │
//! │  Sales       1 customer 1, [product 1 × 2], total 1998.00              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The seeded sale is a historical record: it is inserted directly and does
//! not move stock.

use chrono::Utc;
use retail_core::{Money, NewCustomer, NewProduct, Sale, SaleItem};

use crate::store::{next_id, Store};

/// Demo customers as (name, email).
const CUSTOMERS: &[(&str, &str)] = &[
    ("Alice Johnson", "alice@example.com"),
    ("Bob Singh", "bob@example.com"),
];

/// Demo products as (name, price in cents, stock).
const PRODUCTS: &[(&str, i64, i64)] = &[
    ("Wireless Mouse", 99_900, 50),
    ("Mechanical Keyboard", 349_900, 20),
];

/// Loads the demo records into `store`.
pub fn load_demo_data(store: &mut Store) {
    for &(name, email) in CUSTOMERS {
        store.add_customer(NewCustomer {
            name: name.to_string(),
            email: email.to_string(),
        });
    }

    for &(name, cents, stock) in PRODUCTS {
        store.add_product(NewProduct {
            name: name.to_string(),
            price: Money::from_cents(cents),
            stock,
        });
    }

    let id = next_id(store.list_sales().iter().map(|s| s.id));
    store.push_sale_record(Sale {
        id,
        customer_id: 1,
        items: vec![SaleItem { product_id: 1, qty: 2 }],
        total: Money::from_cents(199_800),
        timestamp: Utc::now(),
    });
}
