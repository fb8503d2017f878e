//! # Customer Repository

use retail_core::{Customer, EntityId, NewCustomer};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::store::{next_id, Store};

impl Store {
    /// All customers in insertion order.
    pub fn list_customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Looks up a customer by id.
    pub fn get_customer(&self, id: EntityId) -> StoreResult<&Customer> {
        self.customers
            .iter()
            .find(|c| c.id == id)
            .ok_or(StoreError::not_found("Customer", id))
    }

    /// Appends a customer and returns it with its assigned id.
    pub fn add_customer(&mut self, customer: NewCustomer) -> Customer {
        let customer = Customer {
            id: next_id(self.customers.iter().map(|c| c.id)),
            name: customer.name,
            email: customer.email,
        };

        debug!(id = customer.id, "Customer added");
        self.customers.push(customer.clone());
        customer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_customer(name: &str) -> NewCustomer {
        NewCustomer {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    #[test]
    fn test_ids_increase_from_one() {
        let mut store = Store::default();

        let alice = store.add_customer(new_customer("Alice"));
        let bob = store.add_customer(new_customer("Bob"));

        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
        assert_eq!(store.list_customers().len(), 2);
        assert_eq!(store.list_customers()[1].name, "Bob");
    }

    #[test]
    fn test_get_customer() {
        let mut store = Store::default();
        store.add_customer(new_customer("Alice"));

        assert_eq!(store.get_customer(1).unwrap().email, "alice@example.com");
        assert!(matches!(
            store.get_customer(999),
            Err(StoreError::NotFound { entity: "Customer", id: 999 })
        ));
    }
}
