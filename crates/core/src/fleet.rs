// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ledger::ReservationLedger;
use eco_ride_domain::{
    DomainError, Vehicle, VehicleCategory, VehicleId, VehicleStatus, validate_vehicle_fields,
};
use std::collections::HashMap;

/// Owns all fleet vehicles, keyed by identifier.
///
/// The registry is the single authority for a vehicle's availability
/// status; the reservation ledger mutates status only through it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FleetRegistry {
    /// All registered vehicles.
    vehicles: HashMap<VehicleId, Vehicle>,
}

impl FleetRegistry {
    /// Creates a new empty `FleetRegistry`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vehicles: HashMap::new(),
        }
    }

    /// Adds a vehicle to the fleet with status `Available`.
    ///
    /// # Arguments
    ///
    /// * `id` - The externally assigned identifier
    /// * `model` - The vehicle model
    /// * `category` - The pricing category
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The identifier or model is empty
    /// - A vehicle with this identifier is already registered
    pub fn add(
        &mut self,
        id: VehicleId,
        model: String,
        category: VehicleCategory,
    ) -> Result<(), DomainError> {
        validate_vehicle_fields(&id, &model)?;

        if self.vehicles.contains_key(&id) {
            return Err(DomainError::DuplicateVehicle(id));
        }

        self.vehicles
            .insert(id.clone(), Vehicle::new(id, model, category));
        Ok(())
    }

    /// Overwrites a vehicle's model, category and status.
    ///
    /// The overwrite is unconditional: it can force a vehicle out of the
    /// `Reserved` state while a reservation still references it. That
    /// permissive behavior is deliberate (operator override); callers
    /// that care about the desynchronization must check the ledger
    /// themselves.
    ///
    /// # Arguments
    ///
    /// * `id` - The vehicle to update
    /// * `model` - The new model
    /// * `category` - The new category
    /// * `status` - The new status
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The model is empty
    /// - No vehicle with this identifier exists
    pub fn update(
        &mut self,
        id: &VehicleId,
        model: String,
        category: VehicleCategory,
        status: VehicleStatus,
    ) -> Result<(), DomainError> {
        validate_vehicle_fields(id, &model)?;

        let Some(vehicle) = self.vehicles.get_mut(id) else {
            return Err(DomainError::VehicleNotFound(id.clone()));
        };

        vehicle.model = model;
        vehicle.category = category;
        vehicle.status = status;
        Ok(())
    }

    /// Removes a vehicle from the fleet.
    ///
    /// # Arguments
    ///
    /// * `id` - The vehicle to remove
    /// * `ledger` - The reservation ledger, scanned for live references
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No vehicle with this identifier exists
    /// - An active reservation references the vehicle
    pub fn remove(
        &mut self,
        id: &VehicleId,
        ledger: &ReservationLedger,
    ) -> Result<(), DomainError> {
        if !self.vehicles.contains_key(id) {
            return Err(DomainError::VehicleNotFound(id.clone()));
        }

        if let Some(reservation) = ledger.reservation_for_vehicle(id) {
            return Err(DomainError::VehicleInUse {
                vehicle_id: id.clone(),
                booking_id: reservation.booking_id.clone(),
            });
        }

        self.vehicles.remove(id);
        Ok(())
    }

    /// Sets a vehicle's availability status.
    ///
    /// Used by the booking service when reservations are created and
    /// released.
    ///
    /// # Errors
    ///
    /// Returns an error if no vehicle with this identifier exists.
    pub(crate) fn set_status(
        &mut self,
        id: &VehicleId,
        status: VehicleStatus,
    ) -> Result<(), DomainError> {
        let Some(vehicle) = self.vehicles.get_mut(id) else {
            return Err(DomainError::VehicleNotFound(id.clone()));
        };
        vehicle.status = status;
        Ok(())
    }

    /// Looks up a vehicle by identifier.
    #[must_use]
    pub fn find(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(id)
    }

    /// Returns a snapshot of all vehicles, unspecified order.
    #[must_use]
    pub fn vehicles(&self) -> Vec<&Vehicle> {
        self.vehicles.values().collect()
    }

    /// Returns the number of vehicles in the fleet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Returns whether the fleet is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
