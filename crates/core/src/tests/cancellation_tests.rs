// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_service, make_standard_reservation, march};
use crate::{BookingService, CoreError};
use eco_ride_domain::{BookingId, DomainError, Reservation, VehicleStatus};

#[test]
fn test_cancel_before_rental_start_succeeds() {
    let mut service: BookingService = create_test_service();
    let reservation: Reservation = make_standard_reservation(&mut service);

    let cancelled: bool = service
        .cancel_reservation(&reservation.booking_id, march(5))
        .unwrap();

    assert!(cancelled);
    let vehicle = service.vehicle(&reservation.vehicle_id).unwrap();
    assert_eq!(vehicle.status, VehicleStatus::Available);
    assert!(service.reservation(&reservation.booking_id).is_none());
}

#[test]
fn test_cancel_on_the_eve_of_the_rental_succeeds() {
    let mut service: BookingService = create_test_service();
    let reservation: Reservation = make_standard_reservation(&mut service);

    let cancelled: bool = service
        .cancel_reservation(&reservation.booking_id, march(8))
        .unwrap();

    assert!(cancelled);
}

#[test]
fn test_cancel_on_the_rental_start_date_fails() {
    let mut service: BookingService = create_test_service();
    let reservation: Reservation = make_standard_reservation(&mut service);

    let result: Result<bool, CoreError> =
        service.cancel_reservation(&reservation.booking_id, march(9));

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::CancellationWindowClosed {
                rental_start: march(9),
                today: march(9),
            }
        ))
    );
    // The failed cancellation must not have released the vehicle.
    let vehicle = service.vehicle(&reservation.vehicle_id).unwrap();
    assert_eq!(vehicle.status, VehicleStatus::Reserved);
    assert!(service.reservation(&reservation.booking_id).is_some());
}

#[test]
fn test_cancel_after_rental_start_fails() {
    let mut service: BookingService = create_test_service();
    let reservation: Reservation = make_standard_reservation(&mut service);

    let result: Result<bool, CoreError> =
        service.cancel_reservation(&reservation.booking_id, march(12));

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::CancellationWindowClosed {
                rental_start: march(9),
                today: march(12),
            }
        ))
    );
}

#[test]
fn test_cancel_unknown_booking_reports_nothing_to_do() {
    let mut service: BookingService = create_test_service();

    let cancelled: bool = service
        .cancel_reservation(&BookingId::new("ZZZZ9999"), march(5))
        .unwrap();

    assert!(!cancelled);
}

#[test]
fn test_cancel_is_idempotent_through_the_not_found_path() {
    let mut service: BookingService = create_test_service();
    let reservation: Reservation = make_standard_reservation(&mut service);

    let first: bool = service
        .cancel_reservation(&reservation.booking_id, march(5))
        .unwrap();
    let second: bool = service
        .cancel_reservation(&reservation.booking_id, march(5))
        .unwrap();

    assert!(first);
    assert!(!second);
}

#[test]
fn test_cancelled_booking_leaves_search_and_day_listings() {
    let mut service: BookingService = create_test_service();
    let reservation: Reservation = make_standard_reservation(&mut service);

    service
        .cancel_reservation(&reservation.booking_id, march(5))
        .unwrap();

    assert!(service.search(reservation.booking_id.value()).is_empty());
    assert!(service.bookings_on(march(9)).is_empty());
}
