//! # Repository Module
//!
//! Per-collection operations on [`Store`](crate::Store).
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One File Per Collection                              │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  store.write().await.create_sale(new_sale)                     │
//! │       ▼                                                                 │
//! │  impl Store (sale.rs)                                                  │
//! │  ├── list_sales(&self)                                                 │
//! │  └── create_sale(&mut self, sale)                                      │
//! │       │                                                                 │
//! │       │  plan_sale() from retail-core, then apply                      │
//! │       ▼                                                                 │
//! │  Vec<Customer> / Vec<Product> / Vec<Sale>                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation is synchronous. Callers take the lock once and run the
//! whole operation inside it.

pub mod customer;
pub mod product;
pub mod sale;
