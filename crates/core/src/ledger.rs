// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use eco_ride_domain::{BookingId, Reservation, VehicleId};
use std::collections::HashMap;
use time::Date;

/// Owns all active reservations, keyed by booking identifier.
///
/// A reservation lives in the ledger from creation until it is either
/// finalized or cancelled. The ledger never holds a completed or
/// cancelled reservation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReservationLedger {
    /// All active reservations.
    reservations: HashMap<BookingId, Reservation>,
}

impl ReservationLedger {
    /// Creates a new empty `ReservationLedger`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            reservations: HashMap::new(),
        }
    }

    /// Generates a booking identifier not currently in the ledger,
    /// regenerating on collision.
    #[must_use]
    pub(crate) fn next_booking_id(&self) -> BookingId {
        loop {
            let candidate: BookingId = BookingId::random();
            if !self.reservations.contains_key(&candidate) {
                return candidate;
            }
        }
    }

    /// Inserts a reservation into the ledger.
    pub(crate) fn insert(&mut self, reservation: Reservation) {
        self.reservations
            .insert(reservation.booking_id.clone(), reservation);
    }

    /// Removes and returns a reservation by booking identifier.
    pub(crate) fn take(&mut self, booking_id: &BookingId) -> Option<Reservation> {
        self.reservations.remove(booking_id)
    }

    /// Looks up a reservation by booking identifier.
    #[must_use]
    pub fn find(&self, booking_id: &BookingId) -> Option<&Reservation> {
        self.reservations.get(booking_id)
    }

    /// Returns the active reservation referencing a vehicle, if any.
    ///
    /// At most one reservation may reference a given vehicle, so a
    /// linear scan returning the first match is sufficient.
    #[must_use]
    pub fn reservation_for_vehicle(&self, vehicle_id: &VehicleId) -> Option<&Reservation> {
        self.reservations
            .values()
            .find(|reservation| &reservation.vehicle_id == vehicle_id)
    }

    /// Returns all reservations whose rental starts on the given date.
    #[must_use]
    pub fn bookings_on(&self, date: Date) -> Vec<&Reservation> {
        self.reservations
            .values()
            .filter(|reservation| reservation.rental_start == date)
            .collect()
    }

    /// Returns a snapshot of all active reservations, unspecified order.
    #[must_use]
    pub fn reservations(&self) -> Vec<&Reservation> {
        self.reservations.values().collect()
    }

    /// Returns the number of active reservations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    /// Returns whether the ledger is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }
}
