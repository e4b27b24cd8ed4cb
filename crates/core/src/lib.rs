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

mod customers;
mod error;
mod fleet;
mod ledger;
mod service;

#[cfg(test)]
mod tests;

// Re-export public types
pub use customers::CustomerRegistry;
pub use error::CoreError;
pub use fleet::FleetRegistry;
pub use ledger::ReservationLedger;
pub use service::BookingService;
