//! # Error Types
//!
//! Domain-specific error types for retail-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  retail-core errors (this file)                                        │
//! │  ├── CoreError        - Business rule rejections                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  retail-store errors (separate crate)                                  │
//! │  └── StoreError       - NotFound + wrapped CoreError                   │
//! │                                                                         │
//! │  retail-api errors (in app)                                            │
//! │  └── ApiError         - What the HTTP client sees ({ "error": ... })   │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → HTTP      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every `CoreError` ends up as a 400 response. A request that is malformed
//! and a sale that is rejected for lack of stock are the same class of error
//! to the client.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations raised while validating a sale.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The sale references a customer id that does not exist.
    #[error("Invalid customerId {0}")]
    InvalidCustomer(u64),

    /// A sale line references a product id that does not exist.
    #[error("Invalid productId {0}")]
    InvalidProduct(u64),

    /// Not enough stock to cover the requested quantity.
    ///
    /// ## When This Occurs
    /// ```text
    /// Product #1 stock: 50
    ///      │
    ///      ▼
    /// Sale line { productId: 1, qty: 51 }
    ///      │
    ///      ▼
    /// InsufficientStock { product_id: 1, available: 50, requested: 51 }
    /// ```
    ///
    /// `requested` is the combined quantity of every line in the request
    /// that names the product.
    #[error("Insufficient stock for productId {product_id}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: u64,
        available: i64,
        requested: i64,
    },

    /// The computed total does not fit in the money representation.
    #[error("Sale total is too large")]
    TotalOverflow,

    /// Validation error (wraps ValidationError).
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a request field doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., an email without `@`, a non-numeric id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates a Required error for a field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
