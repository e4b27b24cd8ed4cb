// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Represents a customer identifier.
///
/// Identifiers are externally assigned (e.g., NIC or passport number)
/// and immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId {
    /// The identifier value.
    value: String,
}

impl CustomerId {
    /// Creates a new `CustomerId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The externally assigned identifier
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a registered customer.
///
/// Customers are created once and never mutated or deleted; there is no
/// update or removal operation in this core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// The externally assigned identifier (immutable).
    pub id: CustomerId,
    /// The customer's name.
    pub name: String,
    /// The customer's contact number.
    pub contact: String,
    /// The customer's email address.
    pub email: String,
}

impl Customer {
    /// Creates a new `Customer`.
    ///
    /// # Arguments
    ///
    /// * `id` - The externally assigned identifier
    /// * `name` - The customer's name
    /// * `contact` - The customer's contact number
    /// * `email` - The customer's email address
    #[must_use]
    pub const fn new(id: CustomerId, name: String, contact: String, email: String) -> Self {
        Self {
            id,
            name,
            contact,
            email,
        }
    }
}
