//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  get_customer(999)          create_sale(...)                           │
//! │       │                          │                                      │
//! │       ▼                          ▼                                      │
//! │  StoreError::NotFound      CoreError (retail-core)                     │
//! │       │                          │                                      │
//! │       │                          ▼                                      │
//! │       │                    StoreError::Rejected                        │
//! │       ▼                          ▼                                      │
//! │  ApiError (retail-api) ← 404 / 400 with { "error": ... }               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use retail_core::{CoreError, EntityId, ValidationError};
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with this id in the collection.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: EntityId },

    /// A business rule rejected the operation (unknown reference,
    /// insufficient stock, bad input).
    #[error(transparent)]
    Rejected(#[from] CoreError),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: &'static str, id: EntityId) -> Self {
        StoreError::NotFound { entity, id }
    }
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Rejected(CoreError::Validation(err))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            StoreError::not_found("Customer", 999).to_string(),
            "Customer not found: 999"
        );
    }

    #[test]
    fn test_rejection_keeps_core_message() {
        let err: StoreError = CoreError::InvalidProduct(4).into();
        assert_eq!(err.to_string(), "Invalid productId 4");

        let err: StoreError = ValidationError::required("items").into();
        assert_eq!(err.to_string(), "items is required");
    }
}
