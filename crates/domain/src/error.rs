// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::customer::CustomerId;
use crate::pricing::MIN_LEAD_TIME_DAYS;
use crate::reservation::BookingId;
use crate::vehicle::{VehicleId, VehicleStatus};
use time::Date;

/// Errors that can occur while applying booking rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A vehicle with this identifier is already registered.
    DuplicateVehicle(VehicleId),
    /// A customer with this identifier is already registered.
    DuplicateCustomer(CustomerId),
    /// No customer with this identifier exists.
    CustomerNotFound(CustomerId),
    /// No vehicle with this identifier exists.
    VehicleNotFound(VehicleId),
    /// No reservation with this booking identifier exists.
    ReservationNotFound(BookingId),
    /// The vehicle exists but cannot be reserved in its current state.
    VehicleUnavailable {
        /// The vehicle identifier.
        vehicle_id: VehicleId,
        /// The vehicle's current status.
        status: VehicleStatus,
    },
    /// The rental starts too soon after the booking date.
    LeadTimeViolation {
        /// Whole days between the booking date and the rental start.
        lead_days: i64,
    },
    /// The vehicle is referenced by an active reservation.
    VehicleInUse {
        /// The vehicle identifier.
        vehicle_id: VehicleId,
        /// The reservation holding the vehicle.
        booking_id: BookingId,
    },
    /// Cancellation was attempted on or after the rental start date.
    CancellationWindowClosed {
        /// The rental start date.
        rental_start: Date,
        /// The date cancellation was attempted.
        today: Date,
    },
    /// Vehicle identifier is empty or invalid.
    InvalidVehicleId(String),
    /// Customer identifier is empty or invalid.
    InvalidCustomerId(String),
    /// A required name field (customer name, vehicle model) is empty.
    InvalidName(String),
    /// Rental length is not at least one day.
    InvalidRentalDays(u32),
    /// Vehicle category string is not recognized.
    InvalidCategory(String),
    /// Vehicle status string is not recognized.
    InvalidStatus(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateVehicle(id) => {
                write!(f, "Vehicle '{id}' is already registered")
            }
            Self::DuplicateCustomer(id) => {
                write!(f, "Customer '{id}' is already registered")
            }
            Self::CustomerNotFound(id) => write!(f, "Customer '{id}' not found"),
            Self::VehicleNotFound(id) => write!(f, "Vehicle '{id}' not found"),
            Self::ReservationNotFound(id) => write!(f, "Reservation '{id}' not found"),
            Self::VehicleUnavailable { vehicle_id, status } => {
                write!(
                    f,
                    "Vehicle '{vehicle_id}' is not available (status: {status})"
                )
            }
            Self::LeadTimeViolation { lead_days } => {
                write!(
                    f,
                    "Booking must be at least {MIN_LEAD_TIME_DAYS} days before the rental start, got a lead of {lead_days} day(s)"
                )
            }
            Self::VehicleInUse {
                vehicle_id,
                booking_id,
            } => {
                write!(
                    f,
                    "Vehicle '{vehicle_id}' is referenced by active reservation '{booking_id}'"
                )
            }
            Self::CancellationWindowClosed {
                rental_start,
                today,
            } => {
                write!(
                    f,
                    "Cannot cancel on or after the rental start date {rental_start} (today is {today})"
                )
            }
            Self::InvalidVehicleId(msg) => write!(f, "Invalid vehicle id: {msg}"),
            Self::InvalidCustomerId(msg) => write!(f, "Invalid customer id: {msg}"),
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidRentalDays(days) => {
                write!(f, "Rental period must be at least 1 day, got {days}")
            }
            Self::InvalidCategory(value) => write!(f, "Unknown vehicle category: {value}"),
            Self::InvalidStatus(value) => write!(f, "Unknown vehicle status: {value}"),
        }
    }
}

impl std::error::Error for DomainError {}
