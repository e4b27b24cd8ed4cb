// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use eco_ride_domain::{Customer, CustomerId, DomainError, validate_customer_fields};
use std::collections::HashMap;

/// Owns all registered customers, keyed by identifier.
///
/// Customers are write-once: there is no update or removal operation in
/// this core.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomerRegistry {
    /// All registered customers.
    customers: HashMap<CustomerId, Customer>,
}

impl CustomerRegistry {
    /// Creates a new empty `CustomerRegistry`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            customers: HashMap::new(),
        }
    }

    /// Registers a new customer.
    ///
    /// # Arguments
    ///
    /// * `id` - The externally assigned identifier
    /// * `name` - The customer's name
    /// * `contact` - The customer's contact number
    /// * `email` - The customer's email address
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The identifier or name is empty
    /// - A customer with this identifier is already registered
    pub fn register(
        &mut self,
        id: CustomerId,
        name: String,
        contact: String,
        email: String,
    ) -> Result<(), DomainError> {
        validate_customer_fields(&id, &name)?;

        if self.customers.contains_key(&id) {
            return Err(DomainError::DuplicateCustomer(id));
        }

        self.customers
            .insert(id.clone(), Customer::new(id, name, contact, email));
        Ok(())
    }

    /// Looks up a customer by identifier.
    #[must_use]
    pub fn find(&self, id: &CustomerId) -> Option<&Customer> {
        self.customers.get(id)
    }

    /// Returns whether a customer with this identifier is registered.
    #[must_use]
    pub fn contains(&self, id: &CustomerId) -> bool {
        self.customers.contains_key(id)
    }

    /// Returns a snapshot of all customers, unspecified order.
    #[must_use]
    pub fn customers(&self) -> Vec<&Customer> {
        self.customers.values().collect()
    }

    /// Returns the number of registered customers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Returns whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
