//! # Validation Module
//!
//! Field-level validation for the retail back-office.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Browser form                                                 │
//! │  ├── required / min attributes                                         │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: HTTP boundary (retail-api)                                   │
//! │  ├── Type validation (serde deserialization)                           │
//! │  └── THIS MODULE: presence, sign, length                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Sale planning (sale.rs)                                      │
//! │  ├── Customer / product references exist                               │
//! │  ├── Each line has a positive quantity                                 │
//! │  └── Stock covers the requested quantity                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use retail_core::validation::{validate_quantity, validate_required};
//!
//! assert_eq!(validate_required("name", "  Alice ").unwrap(), "Alice");
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{EntityId, NewCustomer, NewProduct, NewSale, SaleItem};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted customer or product name.
pub const MAX_NAME_LEN: usize = 200;

/// Longest accepted email address (RFC 5321 path limit).
pub const MAX_EMAIL_LEN: usize = 254;

// =============================================================================
// String Validators
// =============================================================================

/// Trims `value` and rejects it when nothing is left.
///
/// ## Returns
/// The trimmed string.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::required(field));
    }

    Ok(value.to_string())
}

/// Validates a customer or product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_NAME_LEN`] characters
pub fn validate_name(name: &str) -> ValidationResult<String> {
    let name = validate_required("name", name)?;

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(name)
}

/// Validates an email address.
///
/// Presence and length only.
pub fn validate_email(email: &str) -> ValidationResult<String> {
    let email = validate_required("email", email)?;

    if email.chars().count() > MAX_EMAIL_LEN {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: MAX_EMAIL_LEN,
        });
    }

    Ok(email)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use retail_core::money::Money;
/// use retail_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(99_900)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates an initial stock level (>= 0).
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "stock".to_string(),
        });
    }

    Ok(())
}

/// Validates a sale line quantity (> 0).
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "qty".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Identifier Validators
// =============================================================================

/// Parses an id taken from a URL path segment.
///
/// ## Rules
/// - Decimal digits only (no sign, no whitespace)
/// - Must be positive: ids start at 1
///
/// ## Example
/// ```rust
/// use retail_core::validation::parse_id;
///
/// assert_eq!(parse_id("id", "42").unwrap(), 42);
/// assert!(parse_id("id", "abc").is_err());
/// assert!(parse_id("id", "0").is_err());
/// ```
pub fn parse_id(field: &str, raw: &str) -> ValidationResult<EntityId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a positive integer".to_string(),
        });
    }

    let id: EntityId = raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "is out of range".to_string(),
    })?;

    validate_id(field, id)?;
    Ok(id)
}

/// Rejects the zero id, which is never assigned.
pub fn validate_id(field: &str, id: EntityId) -> ValidationResult<()> {
    if id == 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Input Builders
// =============================================================================

/// Builds a [`NewCustomer`] from optional request fields.
pub fn new_customer(name: Option<&str>, email: Option<&str>) -> ValidationResult<NewCustomer> {
    let name = validate_name(name.unwrap_or_default())?;
    let email = validate_email(email.unwrap_or_default())?;

    Ok(NewCustomer { name, email })
}

/// Builds a [`NewProduct`] from optional request fields.
pub fn new_product(
    name: Option<&str>,
    price: Option<Money>,
    stock: Option<i64>,
) -> ValidationResult<NewProduct> {
    let name = validate_name(name.unwrap_or_default())?;

    let price = price.ok_or_else(|| ValidationError::required("price"))?;
    validate_price(price)?;

    let stock = stock.ok_or_else(|| ValidationError::required("stock"))?;
    validate_stock(stock)?;

    Ok(NewProduct { name, price, stock })
}

/// Builds a [`NewSale`] from optional request fields.
///
/// ## Rules
/// - `customerId` present and positive
/// - `items` present and non-empty
///
/// Lines are checked by [`crate::sale::plan_sale`], after the customer.
pub fn new_sale(
    customer_id: Option<EntityId>,
    items: Option<Vec<SaleItem>>,
) -> ValidationResult<NewSale> {
    let customer_id = customer_id.ok_or_else(|| ValidationError::required("customerId"))?;
    validate_id("customerId", customer_id)?;

    let items = items.unwrap_or_default();
    if items.is_empty() {
        return Err(ValidationError::required("items"));
    }

    Ok(NewSale { customer_id, items })
}

// =============================================================================
// Unit Tests
// =============================================================================
