// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingId, CustomerId, DomainError, VehicleId, VehicleStatus};
use time::{Date, Month};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::DuplicateVehicle(VehicleId::new("CAR-01"));
    assert_eq!(format!("{err}"), "Vehicle 'CAR-01' is already registered");

    let err: DomainError = DomainError::DuplicateCustomer(CustomerId::new("NIC-9"));
    assert_eq!(format!("{err}"), "Customer 'NIC-9' is already registered");

    let err: DomainError = DomainError::CustomerNotFound(CustomerId::new("NIC-9"));
    assert_eq!(format!("{err}"), "Customer 'NIC-9' not found");

    let err: DomainError = DomainError::VehicleNotFound(VehicleId::new("CAR-01"));
    assert_eq!(format!("{err}"), "Vehicle 'CAR-01' not found");

    let err: DomainError = DomainError::ReservationNotFound(BookingId::new("AB12CD34"));
    assert_eq!(format!("{err}"), "Reservation 'AB12CD34' not found");

    let err: DomainError = DomainError::VehicleUnavailable {
        vehicle_id: VehicleId::new("CAR-01"),
        status: VehicleStatus::Reserved,
    };
    assert_eq!(
        format!("{err}"),
        "Vehicle 'CAR-01' is not available (status: Reserved)"
    );

    let err: DomainError = DomainError::LeadTimeViolation { lead_days: 2 };
    assert_eq!(
        format!("{err}"),
        "Booking must be at least 3 days before the rental start, got a lead of 2 day(s)"
    );

    let err: DomainError = DomainError::VehicleInUse {
        vehicle_id: VehicleId::new("CAR-01"),
        booking_id: BookingId::new("AB12CD34"),
    };
    assert_eq!(
        format!("{err}"),
        "Vehicle 'CAR-01' is referenced by active reservation 'AB12CD34'"
    );

    let err: DomainError = DomainError::InvalidRentalDays(0);
    assert_eq!(format!("{err}"), "Rental period must be at least 1 day, got 0");

    let err: DomainError = DomainError::InvalidCategory(String::from("Steam"));
    assert_eq!(format!("{err}"), "Unknown vehicle category: Steam");

    let err: DomainError = DomainError::InvalidStatus(String::from("Lost"));
    assert_eq!(format!("{err}"), "Unknown vehicle status: Lost");
}

#[test]
fn test_cancellation_window_display_includes_both_dates() {
    let rental_start: Date = Date::from_calendar_date(2026, Month::March, 10).unwrap();
    let today: Date = Date::from_calendar_date(2026, Month::March, 12).unwrap();

    let err: DomainError = DomainError::CancellationWindowClosed {
        rental_start,
        today,
    };

    let message: String = format!("{err}");
    assert!(message.contains("2026-03-10"));
    assert!(message.contains("2026-03-12"));
}
