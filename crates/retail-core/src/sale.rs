//! # Sale Planning
//!
//! Validates a proposed sale against current customers and products and
//! computes everything needed to apply it, without touching anything.
//!
//! ## Validate First, Then Mutate
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  NewSale { customerId: 1, items: [A×2, B×1, A×3] }                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  plan_sale() ← THIS MODULE (pure, read-only)                           │
//! │       │                                                                 │
//! │       ├── customer 1 exists?           no → InvalidCustomer            │
//! │       ├── line 1: A exists, 2 ≤ stock?  no → InvalidProduct / Insuff.  │
//! │       ├── line 2: B exists, 1 ≤ stock?                                 │
//! │       ├── line 3: A exists, 2+3 ≤ stock? (demand is cumulative)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SalePlan { total, stock_takes: [(A, 5), (B, 1)] }                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store applies the plan under one write lock (retail-store)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A rejected sale leaves every product's stock exactly as it was, including
//! products named by lines before the one that failed.

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Customer, EntityId, NewSale, Product, SaleItem};
use crate::validation::validate_quantity;

/// The outcome of a successful sale validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalePlan {
    pub customer_id: EntityId,

    /// Lines exactly as submitted.
    pub items: Vec<SaleItem>,

    /// Σ price × qty using prices at planning time.
    pub total: Money,

    /// Units to remove per product, in order of first appearance.
    pub stock_takes: Vec<(EntityId, i64)>,
}

/// Checks `sale` against `customers` and `products` and prices it.
///
/// ## Errors
/// - [`CoreError::Validation`] if there are no lines
/// - [`CoreError::InvalidCustomer`] if the customer does not exist
/// - [`CoreError::InvalidProduct`] for the first line naming an unknown product
/// - [`CoreError::Validation`] for the first line whose `qty` is not positive
/// - [`CoreError::InsufficientStock`] for the first line whose cumulative
///   demand on its product exceeds that product's stock
/// - [`CoreError::TotalOverflow`] if the total does not fit
pub fn plan_sale(
    sale: &NewSale,
    customers: &[Customer],
    products: &[Product],
) -> CoreResult<SalePlan> {
    if sale.items.is_empty() {
        return Err(ValidationError::required("items").into());
    }

    if !customers.iter().any(|c| c.id == sale.customer_id) {
        return Err(CoreError::InvalidCustomer(sale.customer_id));
    }

    let mut total = Money::zero();
    let mut stock_takes: Vec<(EntityId, i64)> = Vec::new();

    for item in &sale.items {
        let product = products
            .iter()
            .find(|p| p.id == item.product_id)
            .ok_or(CoreError::InvalidProduct(item.product_id))?;
        validate_quantity(item.qty)?;

        let demand = match stock_takes.iter_mut().find(|(id, _)| *id == product.id) {
            Some((_, taken)) => {
                *taken = taken.checked_add(item.qty).ok_or(CoreError::InsufficientStock {
                    product_id: product.id,
                    available: product.stock,
                    requested: i64::MAX,
                })?;
                *taken
            }
            None => {
                stock_takes.push((product.id, item.qty));
                item.qty
            }
        };

        if !product.can_sell(demand) {
            return Err(CoreError::InsufficientStock {
                product_id: product.id,
                available: product.stock,
                requested: demand,
            });
        }

        let line_total = product
            .price
            .checked_multiply_quantity(item.qty)
            .ok_or(CoreError::TotalOverflow)?;
        total = total.checked_add(line_total).ok_or(CoreError::TotalOverflow)?;
    }

    Ok(SalePlan {
        customer_id: sale.customer_id,
        items: sale.items.clone(),
        total,
        stock_takes,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn customers() -> Vec<Customer> {
        vec![Customer {
            id: 1,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
        }]
    }

    fn products() -> Vec<Product> {
        vec![
            Product {
                id: 1,
                name: "Wireless Mouse".to_string(),
                price: Money::from_cents(99_900),
                stock: 50,
            },
            Product {
                id: 2,
                name: "Mechanical Keyboard".to_string(),
                price: Money::from_cents(349_900),
                stock: 20,
            },
        ]
    }

    fn sale(customer_id: EntityId, lines: &[(EntityId, i64)]) -> NewSale {
        NewSale {
            customer_id,
            items: lines
                .iter()
                .map(|&(product_id, qty)| SaleItem { product_id, qty })
                .collect(),
        }
    }

    #[test]
    fn test_total_is_sum_of_lines() {
        let plan = plan_sale(&sale(1, &[(1, 2), (2, 1)]), &customers(), &products()).unwrap();

        // 2 × 999.00 + 1 × 3499.00
        assert_eq!(plan.total, Money::from_cents(549_700));
        assert_eq!(plan.stock_takes, vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn test_unknown_customer_is_rejected_first() {
        let err = plan_sale(&sale(9, &[(7, 1)]), &customers(), &products()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidCustomer(9)));
    }

    #[test]
    fn test_unknown_product_names_the_id() {
        let err = plan_sale(&sale(1, &[(1, 1), (7, 1)]), &customers(), &products()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid productId 7");
    }

    #[test]
    fn test_insufficient_stock_names_the_id() {
        let err = plan_sale(&sale(1, &[(1, 51)]), &customers(), &products()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                product_id: 1,
                available: 50,
                requested: 51
            }
        ));
    }

    #[test]
    fn test_repeated_product_demand_is_cumulative() {
        let err = plan_sale(&sale(1, &[(1, 30), (2, 1), (1, 30)]), &customers(), &products())
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                product_id: 1,
                requested: 60,
                ..
            }
        ));

        let plan = plan_sale(&sale(1, &[(1, 25), (1, 25)]), &customers(), &products()).unwrap();
        assert_eq!(plan.stock_takes, vec![(1, 50)]);
        assert_eq!(plan.items.len(), 2);
    }

    #[test]
    fn test_non_positive_qty_is_rejected() {
        for qty in [0, -5] {
            let err = plan_sale(&sale(1, &[(1, 2), (2, qty)]), &customers(), &products())
                .unwrap_err();
            assert_eq!(err.to_string(), "qty must be positive");
        }
    }

    #[test]
    fn test_lines_checked_after_customer() {
        let err = plan_sale(&sale(99, &[(1, 0)]), &customers(), &products()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidCustomer(99)));
    }

    #[test]
    fn test_empty_sale_is_rejected() {
        let err = plan_sale(&sale(1, &[]), &customers(), &products()).unwrap_err();
        assert_eq!(err.to_string(), "items is required");
    }

    #[test]
    fn test_total_overflow_is_rejected() {
        let mut products = products();
        products[0].price = Money::from_cents(i64::MAX / 2);

        let err = plan_sale(&sale(1, &[(1, 3)]), &customers(), &products).unwrap_err();
        assert!(matches!(err, CoreError::TotalOverflow));
    }
}
