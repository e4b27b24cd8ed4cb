// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::customer::CustomerId;
use crate::error::DomainError;
use crate::pricing::MIN_LEAD_TIME_DAYS;
use crate::vehicle::VehicleId;
use time::Date;

/// Validates a vehicle's basic field constraints.
///
/// This function checks that required fields are not empty. It does NOT
/// check for uniqueness (that requires registry context).
///
/// # Arguments
///
/// * `id` - The vehicle identifier
/// * `model` - The vehicle model
///
/// # Errors
///
/// Returns an error if the identifier or the model is empty.
pub fn validate_vehicle_fields(id: &VehicleId, model: &str) -> Result<(), DomainError> {
    if id.value().is_empty() {
        return Err(DomainError::InvalidVehicleId(String::from(
            "Vehicle id cannot be empty",
        )));
    }

    if model.is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Model cannot be empty",
        )));
    }

    Ok(())
}

/// Validates a customer's basic field constraints.
///
/// # Arguments
///
/// * `id` - The customer identifier
/// * `name` - The customer's name
///
/// # Errors
///
/// Returns an error if the identifier or the name is empty.
pub fn validate_customer_fields(id: &CustomerId, name: &str) -> Result<(), DomainError> {
    if id.value().is_empty() {
        return Err(DomainError::InvalidCustomerId(String::from(
            "Customer id cannot be empty",
        )));
    }

    if name.is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }

    Ok(())
}

/// Validates the minimum lead time between booking and rental start.
///
/// The gap is measured in whole calendar days and must be at least
/// [`MIN_LEAD_TIME_DAYS`]. A gap of exactly the minimum is valid.
///
/// # Arguments
///
/// * `today` - The booking date
/// * `rental_start` - The date the rental begins
///
/// # Errors
///
/// Returns `DomainError::LeadTimeViolation` if the gap is shorter than
/// the minimum (including rentals starting before the booking date).
pub fn validate_lead_time(today: Date, rental_start: Date) -> Result<(), DomainError> {
    let lead_days: i64 = (rental_start - today).whole_days();
    if lead_days < MIN_LEAD_TIME_DAYS {
        return Err(DomainError::LeadTimeViolation { lead_days });
    }
    Ok(())
}

/// Validates that a rental is at least one day long.
///
/// # Arguments
///
/// * `days` - The rental length in days
///
/// # Errors
///
/// Returns `DomainError::InvalidRentalDays` if `days` is zero.
pub const fn validate_rental_days(days: u32) -> Result<(), DomainError> {
    if days == 0 {
        return Err(DomainError::InvalidRentalDays(days));
    }
    Ok(())
}

/// Validates that a reservation may still be cancelled.
///
/// Cancellation is allowed only strictly before the rental start date.
///
/// # Arguments
///
/// * `today` - The date cancellation is attempted
/// * `rental_start` - The reservation's rental start date
///
/// # Errors
///
/// Returns `DomainError::CancellationWindowClosed` if `today` is on or
/// after `rental_start`.
pub fn validate_cancellation_window(today: Date, rental_start: Date) -> Result<(), DomainError> {
    if today >= rental_start {
        return Err(DomainError::CancellationWindowClosed {
            rental_start,
            today,
        });
    }
    Ok(())
}
