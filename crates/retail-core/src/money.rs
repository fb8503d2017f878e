//! # Money Module
//!
//! Integer-cent amounts for prices and sale totals.
//!
//! ## Where Floats Stop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  JSON price 999.0 ──► from_major_units ──► Money(99_900)   (round once)│
//! │                                                 │                       │
//! │  price × qty, Σ lines ──► checked i64 math ◄────┘   (exact from here)  │
//! │                                                 │                       │
//! │  Serialize ──► 999 (whole) or 10.5 (fractional) ◄┘                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! The HTTP API speaks plain JSON numbers in major units, so `Money` has a
//! hand-written serde implementation:
//!
//! | cents    | JSON      |
//! |----------|-----------|
//! | `99900`  | `999`     |
//! | `1050`   | `10.5`    |
//! | `0`      | `0`       |
//!
//! ## Usage
//! ```rust
//! use retail_core::money::Money;
//!
//! let price = Money::from_cents(1099); // 10.99
//! let total = price.checked_add(Money::from_cents(500)).unwrap();
//! assert_eq!(total.cents(), 1599);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents / paise).
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic stays closed; validation rejects negatives
///   where the domain forbids them (prices, totals)
/// - **Single field tuple struct**: zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use retail_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a major-unit amount (as received on the wire) to Money,
    /// rounding to the nearest cent.
    ///
    /// Returns `None` for NaN, infinities, or values outside the i64 cents
    /// range. This is the only place a float becomes Money.
    ///
    /// ## Example
    /// ```rust
    /// use retail_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_units(999.0).unwrap().cents(), 99_900);
    /// assert_eq!(Money::from_major_units(0.125).unwrap().cents(), 13);
    /// assert!(Money::from_major_units(f64::NAN).is_none());
    /// ```
    pub fn from_major_units(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }

        let cents = (amount * 100.0).round();
        if cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return None;
        }

        Some(Money(cents as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the value in major units as a float (for the wire only).
    #[inline]
    pub fn to_major_units(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use retail_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.checked_multiply_quantity(3).unwrap().cents(), 897);
    /// assert!(Money::from_cents(i64::MAX).checked_multiply_quantity(2).is_none());
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two Money values, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `major.minor` with two decimals, e.g. `1998.00`.
///
/// No currency symbol: the UI decides how to present it.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.cents_part())
    }
}

// Whole amounts go out as integers so `1998` stays `1998` rather than `1998.0`.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.to_major_units())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Money::from_major_units(amount)
            .ok_or_else(|| serde::de::Error::custom("amount is not a finite number"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_units_rounds_to_cents() {
        assert_eq!(Money::from_major_units(3499.0).unwrap().cents(), 349_900);
        assert_eq!(Money::from_major_units(0.1 + 0.2).unwrap().cents(), 30);
        assert_eq!(Money::from_major_units(-5.5).unwrap().cents(), -550);
        assert!(Money::from_major_units(f64::INFINITY).is_none());
        assert!(Money::from_major_units(1e300).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(199_800).to_string(), "1998.00");
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_cents(1000);
        assert_eq!(a.checked_add(Money::from_cents(500)).unwrap().cents(), 1500);
        assert!(Money::from_cents(i64::MAX)
            .checked_add(Money::from_cents(1))
            .is_none());
        assert_eq!(a.checked_multiply_quantity(3).unwrap().cents(), 3000);
    }

    #[test]
    fn test_serialize_whole_amount_as_integer() {
        let value = serde_json::to_value(Money::from_cents(199_800)).unwrap();
        assert_eq!(value, json!(1998));
    }

    #[test]
    fn test_serialize_fractional_amount_as_float() {
        let value = serde_json::to_value(Money::from_cents(1050)).unwrap();
        assert_eq!(value, json!(10.5));
    }

    #[test]
    fn test_deserialize_accepts_integers_and_floats() {
        let whole: Money = serde_json::from_value(json!(999)).unwrap();
        assert_eq!(whole.cents(), 99_900);

        let fractional: Money = serde_json::from_value(json!(12.34)).unwrap();
        assert_eq!(fractional.cents(), 1234);
    }

    #[test]
    fn test_deserialize_rejects_strings() {
        assert!(serde_json::from_value::<Money>(json!("999")).is_err());
    }
}
