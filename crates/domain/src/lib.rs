// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod category;
mod customer;
mod error;
mod invoice;
mod pricing;
mod reservation;
mod validation;
mod vehicle;

#[cfg(test)]
mod tests;

pub use category::VehicleCategory;
pub use customer::{Customer, CustomerId};
pub use error::DomainError;
pub use invoice::{Invoice, compute_invoice};
pub use pricing::{
    DISCOUNT_MIN_DAYS, MIN_LEAD_TIME_DAYS, RateCard, RateTable, REFUNDABLE_DEPOSIT,
    WEEKLY_DISCOUNT_RATE,
};
pub use reservation::{BOOKING_ID_LEN, BookingId, Reservation};
pub use validation::{
    validate_cancellation_window, validate_customer_fields, validate_lead_time,
    validate_rental_days, validate_vehicle_fields,
};
pub use vehicle::{Vehicle, VehicleId, VehicleStatus};
