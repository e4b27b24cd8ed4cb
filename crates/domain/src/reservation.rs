// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::customer::CustomerId;
use crate::vehicle::VehicleId;
use rand::RngExt;
use serde::{Deserialize, Serialize};
use time::Date;

/// Length of a generated booking identifier.
pub const BOOKING_ID_LEN: usize = 8;

/// Characters a generated booking identifier is drawn from.
const BOOKING_ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Represents a booking identifier.
///
/// Booking identifiers are short uppercase tokens generated when a
/// reservation is created. Values are normalized to uppercase so lookups
/// are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId {
    /// The token value (uppercase).
    value: String,
}

impl BookingId {
    /// Creates a new `BookingId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The token value (will be normalized to uppercase)
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_uppercase(),
        }
    }

    /// Generates a random booking identifier.
    ///
    /// Tokens are [`BOOKING_ID_LEN`] characters drawn uniformly from
    /// uppercase letters and digits. Collision probability is negligible
    /// but callers inserting into a ledger should still regenerate on a
    /// collision.
    #[must_use]
    pub fn random() -> Self {
        let mut rng = rand::rng();
        let value: String = (0..BOOKING_ID_LEN)
            .map(|_| {
                let idx: usize = rng.random_range(0..BOOKING_ID_CHARSET.len());
                char::from(BOOKING_ID_CHARSET[idx])
            })
            .collect();
        Self { value }
    }

    /// Returns the token value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents an active reservation.
///
/// A reservation refers to its customer and vehicle by id; the owning
/// registries remain authoritative for both, so status changes on the
/// vehicle are visible to every holder of the reservation.
///
/// ## Invariants
///
/// - A reservation exists only while its vehicle's status is `Reserved`.
/// - At most one active reservation references a given vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// The system-generated booking identifier.
    pub booking_id: BookingId,
    /// The customer holding this reservation.
    pub customer_id: CustomerId,
    /// The reserved vehicle.
    pub vehicle_id: VehicleId,
    /// The date the booking was made.
    pub booking_date: Date,
    /// The date the rental begins.
    pub rental_start: Date,
    /// The rental length in days (always at least 1).
    pub days: u32,
    /// Expected total distance in kilometers (informational only; not
    /// used in pricing).
    pub expected_km: u32,
    /// Whether the refundable deposit was taken (always true at
    /// creation in this core).
    pub deposit_taken: bool,
}

impl Reservation {
    /// Creates a new `Reservation` with the deposit taken.
    ///
    /// # Arguments
    ///
    /// * `booking_id` - The system-generated booking identifier
    /// * `customer_id` - The customer holding the reservation
    /// * `vehicle_id` - The reserved vehicle
    /// * `booking_date` - The date the booking was made
    /// * `rental_start` - The date the rental begins
    /// * `days` - The rental length in days
    /// * `expected_km` - Expected total distance in kilometers
    #[must_use]
    pub const fn new(
        booking_id: BookingId,
        customer_id: CustomerId,
        vehicle_id: VehicleId,
        booking_date: Date,
        rental_start: Date,
        days: u32,
        expected_km: u32,
    ) -> Self {
        Self {
            booking_id,
            customer_id,
            vehicle_id,
            booking_date,
            rental_start,
            days,
            expected_km,
            deposit_taken: true,
        }
    }
}
