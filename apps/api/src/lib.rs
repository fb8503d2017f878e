//! # Retail API
//!
//! REST server over the in-memory retail store, plus the single-page UI.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Retail API Layers                               │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  tower-http: TraceLayer (one log line per request)               │  │
//! │  │              CorsLayer  (any origin)                             │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  Extractors    │  │  Handlers      │  │  ApiError                  ││
//! │  │                │  │                │  │                            ││
//! │  │ • ApiJson<T>   │─►│ • customers    │─►│ • 404 {"error":"Not found"}││
//! │  │ • PathId       │  │ • products     │  │ • 400 {"error": message}   ││
//! │  │                │  │ • sales        │  │ • 500 (logged)             ││
//! │  └────────────────┘  └────────────────┘  └────────────────────────────┘│
//! │                              │                                          │
//! │                              ▼                                          │
//! │                     SharedStore (retail-store)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `PORT` - HTTP port (default: 5000)
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `SEED_DEMO_DATA` - Load demo records at startup (default: true)
//! - `RUST_LOG` - Log filter (default: info)

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;
pub use state::AppState;

/// Builds the full application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::ui::index))
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
