// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::BookingService;
use eco_ride_domain::{CustomerId, Reservation, VehicleCategory, VehicleId};
use time::{Date, Month};

/// A date in March 2026, the fixed month the tests book in.
pub fn march(day: u8) -> Date {
    Date::from_calendar_date(2026, Month::March, day).unwrap()
}

/// Creates a service with two customers and three vehicles registered.
pub fn create_test_service() -> BookingService {
    let mut service: BookingService = BookingService::new();

    service
        .register_customer(
            CustomerId::new("NIC-1001"),
            String::from("Jane Doe"),
            String::from("0771234567"),
            String::from("jane@example.com"),
        )
        .unwrap();
    service
        .register_customer(
            CustomerId::new("NIC-1002"),
            String::from("John Smith"),
            String::from("0777654321"),
            String::from("john@example.com"),
        )
        .unwrap();

    service
        .add_vehicle(
            VehicleId::new("CAR-01"),
            String::from("Toyota Aqua"),
            VehicleCategory::Hybrid,
        )
        .unwrap();
    service
        .add_vehicle(
            VehicleId::new("CAR-02"),
            String::from("Nissan Leaf"),
            VehicleCategory::Electric,
        )
        .unwrap();
    service
        .add_vehicle(
            VehicleId::new("CAR-03"),
            String::from("Range Rover Sport"),
            VehicleCategory::LuxurySuv,
        )
        .unwrap();

    service
}

/// Books CAR-01 for NIC-1001: booked March 2, starting March 9, 7 days,
/// 1000 expected km.
pub fn make_standard_reservation(service: &mut BookingService) -> Reservation {
    service
        .make_reservation(
            CustomerId::new("NIC-1001"),
            VehicleId::new("CAR-01"),
            march(2),
            march(9),
            7,
            1000,
        )
        .unwrap()
}
