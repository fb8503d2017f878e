//! # Routes
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET  /                    ui::index                                    │
//! │  GET  /api                 health::greeting                             │
//! │  GET  /api/health          health::health                               │
//! │  GET  /api/customers       customers::list     POST customers::create   │
//! │  GET  /api/customers/{id}  customers::get                               │
//! │  GET  /api/products        products::list      POST products::create    │
//! │  GET  /api/products/{id}   products::get                                │
//! │  GET  /api/sales           sales::list         POST sales::create       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod customers;
pub mod health;
pub mod products;
pub mod sales;
pub mod ui;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Routes under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::greeting))
        .route("/health", get(health::health))
        .route("/customers", get(customers::list).post(customers::create))
        .route("/customers/{id}", get(customers::get))
        .route("/products", get(products::list).post(products::create))
        .route("/products/{id}", get(products::get))
        .route("/sales", get(sales::list).post(sales::create))
}
