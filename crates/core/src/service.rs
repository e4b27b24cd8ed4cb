// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::customers::CustomerRegistry;
use crate::error::CoreError;
use crate::fleet::FleetRegistry;
use crate::ledger::ReservationLedger;
use eco_ride_audit::{InvoiceLog, InvoiceRecord};
use eco_ride_domain::{
    BookingId, Customer, CustomerId, DomainError, Invoice, RateCard, RateTable, Reservation,
    Vehicle, VehicleCategory, VehicleId, VehicleStatus, compute_invoice,
    validate_cancellation_window, validate_lead_time, validate_rental_days,
};
use time::{Date, Duration};
use tracing::{debug, info};

/// The façade exposing every booking use-case.
///
/// A `BookingService` owns the fleet registry, the customer registry,
/// the reservation ledger, the rate table and the invoice log. It is
/// constructed once at startup and passed explicitly to callers; there
/// is no ambient global state.
///
/// Failures from the registries and the ledger propagate unchanged; the
/// service never retries, reinterprets or swallows them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingService {
    /// The fleet registry.
    fleet: FleetRegistry,
    /// The customer registry.
    customers: CustomerRegistry,
    /// The reservation ledger.
    ledger: ReservationLedger,
    /// The pricing catalog.
    rates: RateTable,
    /// Append-only history of finalized invoices.
    invoice_log: InvoiceLog,
}

impl BookingService {
    /// Creates a new `BookingService` with the standard rate table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rates(RateTable::standard())
    }

    /// Creates a new `BookingService` with a caller-supplied rate table.
    ///
    /// # Arguments
    ///
    /// * `rates` - The pricing catalog to use
    #[must_use]
    pub fn with_rates(rates: RateTable) -> Self {
        Self {
            fleet: FleetRegistry::new(),
            customers: CustomerRegistry::new(),
            ledger: ReservationLedger::new(),
            rates,
            invoice_log: InvoiceLog::new(),
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
    /// Returns an error if the fields are invalid or the identifier is
    /// already registered.
    pub fn register_customer(
        &mut self,
        id: CustomerId,
        name: String,
        contact: String,
        email: String,
    ) -> Result<(), CoreError> {
        self.customers.register(id.clone(), name, contact, email)?;
        info!(customer_id = %id, "customer registered");
        Ok(())
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
    /// Returns an error if the fields are invalid or the identifier is
    /// already registered.
    pub fn add_vehicle(
        &mut self,
        id: VehicleId,
        model: String,
        category: VehicleCategory,
    ) -> Result<(), CoreError> {
        self.fleet.add(id.clone(), model, category)?;
        info!(vehicle_id = %id, "vehicle added");
        Ok(())
    }

    /// Overwrites a vehicle's model, category and status.
    ///
    /// The overwrite is unconditional, including forcing a vehicle out
    /// of `Reserved` while a reservation still references it; see
    /// [`FleetRegistry::update`].
    ///
    /// # Errors
    ///
    /// Returns an error if the model is empty or the vehicle does not
    /// exist.
    pub fn update_vehicle(
        &mut self,
        id: &VehicleId,
        model: String,
        category: VehicleCategory,
        status: VehicleStatus,
    ) -> Result<(), CoreError> {
        self.fleet.update(id, model, category, status)?;
        info!(vehicle_id = %id, status = %status, "vehicle updated");
        Ok(())
    }

    /// Removes a vehicle from the fleet.
    ///
    /// # Errors
    ///
    /// Returns an error if the vehicle does not exist or an active
    /// reservation references it.
    pub fn remove_vehicle(&mut self, id: &VehicleId) -> Result<(), CoreError> {
        self.fleet.remove(id, &self.ledger)?;
        info!(vehicle_id = %id, "vehicle removed");
        Ok(())
    }

    /// Creates a reservation for a customer and an available vehicle.
    ///
    /// Validation is fail-fast, first failing check wins:
    /// 1. the customer must exist;
    /// 2. the vehicle must exist;
    /// 3. the vehicle must be `Available`;
    /// 4. the rental must start at least 3 whole days after `today`;
    /// 5. the rental must be at least 1 day long.
    ///
    /// On success the reservation is inserted into the ledger with a
    /// fresh booking identifier and the deposit taken, and the vehicle
    /// moves to `Reserved`.
    ///
    /// # Arguments
    ///
    /// * `customer_id` - The customer making the booking
    /// * `vehicle_id` - The vehicle to reserve
    /// * `today` - The booking date
    /// * `rental_start` - The date the rental begins
    /// * `days` - The rental length in days
    /// * `expected_km` - Expected total distance (informational)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the checks above fails.
    pub fn make_reservation(
        &mut self,
        customer_id: CustomerId,
        vehicle_id: VehicleId,
        today: Date,
        rental_start: Date,
        days: u32,
        expected_km: u32,
    ) -> Result<Reservation, CoreError> {
        if !self.customers.contains(&customer_id) {
            return Err(CoreError::DomainViolation(DomainError::CustomerNotFound(
                customer_id,
            )));
        }

        let Some(vehicle) = self.fleet.find(&vehicle_id) else {
            return Err(CoreError::DomainViolation(DomainError::VehicleNotFound(
                vehicle_id,
            )));
        };

        if !vehicle.status.is_available() {
            return Err(CoreError::DomainViolation(DomainError::VehicleUnavailable {
                status: vehicle.status,
                vehicle_id,
            }));
        }

        validate_lead_time(today, rental_start)?;
        validate_rental_days(days)?;

        let booking_id: BookingId = self.ledger.next_booking_id();
        let reservation: Reservation = Reservation::new(
            booking_id.clone(),
            customer_id,
            vehicle_id.clone(),
            today,
            rental_start,
            days,
            expected_km,
        );

        self.ledger.insert(reservation.clone());
        self.fleet.set_status(&vehicle_id, VehicleStatus::Reserved)?;

        info!(
            booking_id = %booking_id,
            vehicle_id = %vehicle_id,
            %rental_start,
            days,
            "reservation created"
        );
        Ok(reservation)
    }

    /// Searches active reservations.
    ///
    /// Matches are case-insensitive substring matches against the
    /// booking identifier OR the customer's name. Order is unspecified.
    ///
    /// # Arguments
    ///
    /// * `query` - The text to match
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Reservation> {
        let needle: String = query.to_lowercase();
        let matches: Vec<&Reservation> = self
            .ledger
            .reservations()
            .into_iter()
            .filter(|reservation| {
                if reservation
                    .booking_id
                    .value()
                    .to_lowercase()
                    .contains(&needle)
                {
                    return true;
                }
                self.customers
                    .find(&reservation.customer_id)
                    .is_some_and(|customer| customer.name.to_lowercase().contains(&needle))
            })
            .collect();
        debug!(query, matches = matches.len(), "reservation search");
        matches
    }

    /// Returns all reservations whose rental starts on the given date.
    #[must_use]
    pub fn bookings_on(&self, date: Date) -> Vec<&Reservation> {
        self.ledger.bookings_on(date)
    }

    /// Finalizes a reservation and computes its invoice.
    ///
    /// On success the vehicle returns to `Available`, the reservation
    /// leaves the ledger and a record is appended to the invoice log.
    /// The invoice itself is returned to the caller and not otherwise
    /// retained by the core.
    ///
    /// # Arguments
    ///
    /// * `booking_id` - The reservation to finalize
    /// * `actual_km` - The actual distance driven in kilometers
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ReservationNotFound` if the booking
    /// identifier is not in the ledger.
    pub fn finalize_invoice(
        &mut self,
        booking_id: &BookingId,
        actual_km: u32,
    ) -> Result<Invoice, CoreError> {
        let Some(reservation) = self.ledger.find(booking_id) else {
            return Err(CoreError::DomainViolation(
                DomainError::ReservationNotFound(booking_id.clone()),
            ));
        };
        let reservation: Reservation = reservation.clone();

        let Some(vehicle) = self.fleet.find(&reservation.vehicle_id) else {
            return Err(CoreError::DomainViolation(DomainError::VehicleNotFound(
                reservation.vehicle_id,
            )));
        };

        let rate: RateCard = self.rates.rate_of(vehicle.category);
        let invoice: Invoice = compute_invoice(&rate, reservation.days, actual_km);

        self.fleet
            .set_status(&reservation.vehicle_id, VehicleStatus::Available)?;
        self.ledger.take(booking_id);

        let settled_on: Date =
            reservation.rental_start + Duration::days(i64::from(reservation.days));
        self.invoice_log.append(InvoiceRecord::new(
            reservation.booking_id.clone(),
            reservation.customer_id.clone(),
            reservation.vehicle_id.clone(),
            settled_on,
            invoice.clone(),
        ));

        info!(
            %booking_id,
            vehicle_id = %reservation.vehicle_id,
            actual_km,
            final_payable = invoice.final_payable,
            "invoice finalized"
        );
        Ok(invoice)
    }

    /// Cancels a reservation before its rental starts.
    ///
    /// Returns `Ok(false)` if no reservation with this booking
    /// identifier exists; an unknown booking is not an error here. On
    /// success the vehicle returns to `Available` and the reservation
    /// leaves the ledger.
    ///
    /// # Arguments
    ///
    /// * `booking_id` - The reservation to cancel
    /// * `today` - The date cancellation is attempted
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CancellationWindowClosed` if `today` is on
    /// or after the reservation's rental start date.
    pub fn cancel_reservation(
        &mut self,
        booking_id: &BookingId,
        today: Date,
    ) -> Result<bool, CoreError> {
        let Some(reservation) = self.ledger.find(booking_id) else {
            debug!(%booking_id, "cancellation requested for unknown booking");
            return Ok(false);
        };

        validate_cancellation_window(today, reservation.rental_start)?;

        let vehicle_id: VehicleId = reservation.vehicle_id.clone();
        self.fleet.set_status(&vehicle_id, VehicleStatus::Available)?;
        self.ledger.take(booking_id);

        info!(%booking_id, %vehicle_id, "reservation cancelled");
        Ok(true)
    }

    /// Returns a snapshot of all active reservations, unspecified order.
    #[must_use]
    pub fn reservations(&self) -> Vec<&Reservation> {
        self.ledger.reservations()
    }

    /// Returns a snapshot of all fleet vehicles, unspecified order.
    #[must_use]
    pub fn vehicles(&self) -> Vec<&Vehicle> {
        self.fleet.vehicles()
    }

    /// Looks up a vehicle by identifier.
    #[must_use]
    pub fn vehicle(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.fleet.find(id)
    }

    /// Looks up a customer by identifier.
    #[must_use]
    pub fn customer(&self, id: &CustomerId) -> Option<&Customer> {
        self.customers.find(id)
    }

    /// Returns a snapshot of all registered customers, unspecified order.
    #[must_use]
    pub fn customers(&self) -> Vec<&Customer> {
        self.customers.customers()
    }

    /// Looks up an active reservation by booking identifier.
    #[must_use]
    pub fn reservation(&self, booking_id: &BookingId) -> Option<&Reservation> {
        self.ledger.find(booking_id)
    }

    /// Returns the pricing catalog in use.
    #[must_use]
    pub const fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Returns the append-only invoice history.
    #[must_use]
    pub const fn invoice_log(&self) -> &InvoiceLog {
        &self.invoice_log
    }
}
