//! # retail-store: In-Memory Entity Store
//!
//! This crate owns the customer, product and sale collections and is the
//! only place product stock changes.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Retail Back-Office Data Flow                         │
//! │                                                                         │
//! │  HTTP handler (POST /api/sales)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  retail-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  SharedStore  │    │  Repositories │    │    Seed      │  │   │
//! │  │   │  (store.rs)   │    │ (customer.rs) │    │  (seed.rs)   │  │   │
//! │  │   │               │    │ (product.rs)  │    │              │  │   │
//! │  │   │ Arc<RwLock<   │◄───│ (sale.rs)     │    │ demo records │  │   │
//! │  │   │   Store>>     │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Process memory (lost on restart)                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - `Store` (the collections) and `SharedStore` (the lock)
//! - [`repository`] - Per-collection operations on `Store`
//! - [`seed`] - Demo records loaded at startup
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use retail_core::NewCustomer;
//! use retail_store::{SharedStore, StoreConfig};
//!
//! let store = SharedStore::new(StoreConfig::empty());
//!
//! let alice = store
//!     .add_customer(NewCustomer {
//!         name: "Alice".to_string(),
//!         email: "alice@example.com".to_string(),
//!     })
//!     .await;
//!
//! assert_eq!(alice.id, 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::{SharedStore, Store, StoreConfig};
