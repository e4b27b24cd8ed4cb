// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Invoice computation.
//!
//! This module is a pure function of a rate card, the rental length and
//! the actual distance driven. All inputs are validated by the caller;
//! there are no error paths.

use crate::pricing::{DISCOUNT_MIN_DAYS, RateCard, REFUNDABLE_DEPOSIT, WEEKLY_DISCOUNT_RATE};
use serde::{Deserialize, Serialize};

/// A priced rental breakdown.
///
/// Invoices are computed once, returned to the caller and then forgotten
/// by the core; no invoice history is retained here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Daily rate times rental days.
    pub base_price: f64,
    /// Charge for kilometers driven beyond the free allowance.
    pub extra_km_charge: f64,
    /// Long-rental discount on the base price.
    pub discount: f64,
    /// Tax on the taxable amount (base minus discount plus extra charge).
    pub tax: f64,
    /// Refundable deposit deducted from the total.
    pub deposit_deducted: f64,
    /// Amount payable after all adjustments.
    pub final_payable: f64,
}

/// Computes the invoice for a completed rental.
///
/// # Arguments
///
/// * `rate` - The rate card for the vehicle's category
/// * `days` - The rental length in days (at least 1)
/// * `actual_km` - The actual distance driven in kilometers
///
/// # Returns
///
/// The priced breakdown. The final payable amount is
/// `base + extra - discount + tax - deposit`.
#[must_use]
pub fn compute_invoice(rate: &RateCard, days: u32, actual_km: u32) -> Invoice {
    let base_price: f64 = f64::from(rate.daily_rate) * f64::from(days);

    // Kilometers beyond the per-day allowance are charged per kilometer.
    let allowed_km: u32 = rate.free_km_per_day.saturating_mul(days);
    let extra_km: u32 = actual_km.saturating_sub(allowed_km);
    let extra_km_charge: f64 = f64::from(extra_km) * f64::from(rate.extra_km_charge);

    // Rentals of a week or more earn a discount on the base price only.
    let discount: f64 = if days >= DISCOUNT_MIN_DAYS {
        base_price * WEEKLY_DISCOUNT_RATE
    } else {
        0.0
    };

    let taxable: f64 = base_price - discount + extra_km_charge;
    let tax: f64 = taxable * rate.tax_rate;

    let deposit_deducted: f64 = f64::from(REFUNDABLE_DEPOSIT);
    let final_payable: f64 = base_price + extra_km_charge - discount + tax - deposit_deducted;

    Invoice {
        base_price,
        extra_km_charge,
        discount,
        tax,
        deposit_deducted,
        final_payable,
    }
}
