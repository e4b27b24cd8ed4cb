// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_service, make_standard_reservation, march};
use crate::{BookingService, CoreError};
use eco_ride_domain::{DomainError, Reservation, VehicleCategory, VehicleId, VehicleStatus};

#[test]
fn test_add_then_duplicate_add_fails() {
    let mut service: BookingService = BookingService::new();
    let id: VehicleId = VehicleId::new("CAR-77");

    let first: Result<(), CoreError> = service.add_vehicle(
        id.clone(),
        String::from("Suzuki Alto"),
        VehicleCategory::CompactPetrol,
    );
    let second: Result<(), CoreError> = service.add_vehicle(
        id.clone(),
        String::from("Suzuki Alto"),
        VehicleCategory::CompactPetrol,
    );

    assert!(first.is_ok());
    assert_eq!(
        second,
        Err(CoreError::DomainViolation(DomainError::DuplicateVehicle(
            id
        )))
    );
}

#[test]
fn test_new_vehicle_is_available() {
    let service: BookingService = create_test_service();

    let vehicle = service.vehicle(&VehicleId::new("CAR-01")).unwrap();
    assert_eq!(vehicle.status, VehicleStatus::Available);
}

#[test]
fn test_update_overwrites_all_mutable_fields() {
    let mut service: BookingService = create_test_service();
    let id: VehicleId = VehicleId::new("CAR-02");

    service
        .update_vehicle(
            &id,
            String::from("Tesla Model 3"),
            VehicleCategory::Electric,
            VehicleStatus::UnderMaintenance,
        )
        .unwrap();

    let vehicle = service.vehicle(&id).unwrap();
    assert_eq!(vehicle.model, "Tesla Model 3");
    assert_eq!(vehicle.status, VehicleStatus::UnderMaintenance);
}

#[test]
fn test_update_unknown_vehicle_fails() {
    let mut service: BookingService = create_test_service();
    let id: VehicleId = VehicleId::new("CAR-99");

    let result: Result<(), CoreError> = service.update_vehicle(
        &id,
        String::from("Ghost"),
        VehicleCategory::Hybrid,
        VehicleStatus::Available,
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::VehicleNotFound(id)))
    );
}

#[test]
fn test_update_can_desync_a_reserved_vehicle() {
    // The overwrite is deliberately unvalidated against the ledger: an
    // operator can force a reserved vehicle to another status while the
    // reservation still exists.
    let mut service: BookingService = create_test_service();
    let reservation: Reservation = make_standard_reservation(&mut service);

    service
        .update_vehicle(
            &reservation.vehicle_id,
            String::from("Toyota Aqua"),
            VehicleCategory::Hybrid,
            VehicleStatus::Available,
        )
        .unwrap();

    let vehicle = service.vehicle(&reservation.vehicle_id).unwrap();
    assert_eq!(vehicle.status, VehicleStatus::Available);
    assert!(service.reservation(&reservation.booking_id).is_some());
}

#[test]
fn test_remove_unknown_vehicle_fails() {
    let mut service: BookingService = create_test_service();
    let id: VehicleId = VehicleId::new("CAR-99");

    assert_eq!(
        service.remove_vehicle(&id),
        Err(CoreError::DomainViolation(DomainError::VehicleNotFound(id)))
    );
}

#[test]
fn test_remove_reserved_vehicle_fails_until_released() {
    let mut service: BookingService = create_test_service();
    let reservation: Reservation = make_standard_reservation(&mut service);
    let vehicle_id: VehicleId = reservation.vehicle_id.clone();

    let blocked: Result<(), CoreError> = service.remove_vehicle(&vehicle_id);
    assert_eq!(
        blocked,
        Err(CoreError::DomainViolation(DomainError::VehicleInUse {
            vehicle_id: vehicle_id.clone(),
            booking_id: reservation.booking_id.clone(),
        }))
    );

    service
        .cancel_reservation(&reservation.booking_id, march(5))
        .unwrap();

    assert!(service.remove_vehicle(&vehicle_id).is_ok());
    assert!(service.vehicle(&vehicle_id).is_none());
}

#[test]
fn test_remove_after_finalize_succeeds() {
    let mut service: BookingService = create_test_service();
    let reservation: Reservation = make_standard_reservation(&mut service);
    let vehicle_id: VehicleId = reservation.vehicle_id.clone();

    service
        .finalize_invoice(&reservation.booking_id, 900)
        .unwrap();

    assert!(service.remove_vehicle(&vehicle_id).is_ok());
}

#[test]
fn test_vehicles_snapshot_lists_whole_fleet() {
    let service: BookingService = create_test_service();

    let vehicles = service.vehicles();
    assert_eq!(vehicles.len(), 3);
    assert!(
        vehicles
            .iter()
            .any(|vehicle| vehicle.id == VehicleId::new("CAR-03"))
    );
}

#[test]
fn test_add_vehicle_rejects_empty_id() {
    let mut service: BookingService = BookingService::new();

    let result: Result<(), CoreError> = service.add_vehicle(
        VehicleId::new(""),
        String::from("Suzuki Alto"),
        VehicleCategory::CompactPetrol,
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidVehicleId(_)))
    ));
}
