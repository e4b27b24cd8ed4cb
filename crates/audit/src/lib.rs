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
    clippy::all
)]

//! Append-only invoice history.
//!
//! The booking core computes invoices and forgets them; this crate is
//! the optional extension that retains them. Records are immutable once
//! written and the log never shrinks. Nothing in the core reads the log
//! back to make decisions.

use eco_ride_domain::{BookingId, CustomerId, Invoice, VehicleId};
use serde::{Deserialize, Serialize};
use time::Date;

/// An immutable record of a finalized invoice.
///
/// A record captures the reservation identity alongside the priced
/// breakdown, since the reservation itself is removed from the ledger at
/// finalization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// The booking the invoice settles.
    pub booking_id: BookingId,
    /// The customer who held the reservation.
    pub customer_id: CustomerId,
    /// The vehicle that was rented.
    pub vehicle_id: VehicleId,
    /// The rental's settlement date (rental start plus rental days).
    pub finalized_on: Date,
    /// The priced breakdown.
    pub invoice: Invoice,
}

impl InvoiceRecord {
    /// Creates a new `InvoiceRecord`.
    ///
    /// Once created, a record is immutable.
    ///
    /// # Arguments
    ///
    /// * `booking_id` - The booking the invoice settles
    /// * `customer_id` - The customer who held the reservation
    /// * `vehicle_id` - The vehicle that was rented
    /// * `finalized_on` - The date the invoice was finalized
    /// * `invoice` - The priced breakdown
    #[must_use]
    pub const fn new(
        booking_id: BookingId,
        customer_id: CustomerId,
        vehicle_id: VehicleId,
        finalized_on: Date,
        invoice: Invoice,
    ) -> Self {
        Self {
            booking_id,
            customer_id,
            vehicle_id,
            finalized_on,
            invoice,
        }
    }
}

/// An append-only log of finalized invoices.
///
/// Every successful finalization appends exactly one record. Records are
/// never updated or removed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InvoiceLog {
    /// The records, in finalization order.
    records: Vec<InvoiceRecord>,
}

impl InvoiceLog {
    /// Creates a new empty `InvoiceLog`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends a record to the log.
    ///
    /// # Arguments
    ///
    /// * `record` - The record to append
    pub fn append(&mut self, record: InvoiceRecord) {
        self.records.push(record);
    }

    /// Returns all records, in finalization order.
    #[must_use]
    pub fn records(&self) -> &[InvoiceRecord] {
        &self.records
    }

    /// Returns the number of records in the log.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use eco_ride_domain::{RateTable, VehicleCategory, compute_invoice};
    use time::Month;

    fn make_record(token: &str) -> InvoiceRecord {
        let rate = RateTable::standard().rate_of(VehicleCategory::Hybrid);
        InvoiceRecord::new(
            BookingId::new(token),
            CustomerId::new("NIC-9"),
            VehicleId::new("CAR-01"),
            Date::from_calendar_date(2026, Month::March, 16).unwrap(),
            compute_invoice(&rate, 7, 1200),
        )
    }

    #[test]
    fn test_new_log_is_empty() {
        let log: InvoiceLog = InvoiceLog::new();

        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.records().is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut log: InvoiceLog = InvoiceLog::new();
        log.append(make_record("AAAA1111"));
        log.append(make_record("BBBB2222"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.records()[0].booking_id.value(), "AAAA1111");
        assert_eq!(log.records()[1].booking_id.value(), "BBBB2222");
    }

    #[test]
    fn test_record_retains_invoice_breakdown() {
        let record: InvoiceRecord = make_record("AB12CD34");

        assert_eq!(record.invoice.final_payable, 58_000.0);
        assert_eq!(record.customer_id.value(), "NIC-9");
        assert_eq!(record.vehicle_id.value(), "CAR-01");
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let record: InvoiceRecord = make_record("AB12CD34");

        let json: String = serde_json::to_string(&record).unwrap();
        let back: InvoiceRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(back, record);
    }
}
