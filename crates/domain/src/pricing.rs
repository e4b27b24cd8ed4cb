// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The pricing catalog.
//!
//! A rate table maps each vehicle category to an immutable rate card.
//! The standard table is defined centrally here; tests may substitute
//! alternate tables via [`RateTable::with_rate`].

use crate::category::VehicleCategory;
use serde::{Deserialize, Serialize};

/// Refundable deposit taken at reservation time and deducted from the
/// final payable amount, in currency units.
pub const REFUNDABLE_DEPOSIT: u32 = 5000;

/// Minimum rental length that qualifies for the long-rental discount.
pub const DISCOUNT_MIN_DAYS: u32 = 7;

/// Discount fraction applied to the base price for long rentals.
pub const WEEKLY_DISCOUNT_RATE: f64 = 0.10;

/// Minimum number of whole days required between the booking date and
/// the rental start date.
pub const MIN_LEAD_TIME_DAYS: i64 = 3;

/// Per-category pricing attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateCard {
    /// Rental rate per day, in currency units.
    pub daily_rate: u32,
    /// Distance included in the daily rate, per day, in kilometers.
    pub free_km_per_day: u32,
    /// Charge per kilometer beyond the free allowance, in currency units.
    pub extra_km_charge: u32,
    /// Tax fraction applied to the taxable amount (0-1).
    pub tax_rate: f64,
}

impl RateCard {
    /// Creates a new `RateCard`.
    ///
    /// # Arguments
    ///
    /// * `daily_rate` - Rental rate per day
    /// * `free_km_per_day` - Free kilometer allowance per day
    /// * `extra_km_charge` - Charge per extra kilometer
    /// * `tax_rate` - Tax fraction (0-1)
    #[must_use]
    pub const fn new(
        daily_rate: u32,
        free_km_per_day: u32,
        extra_km_charge: u32,
        tax_rate: f64,
    ) -> Self {
        Self {
            daily_rate,
            free_km_per_day,
            extra_km_charge,
            tax_rate,
        }
    }
}

/// Read-only lookup from vehicle category to rate card.
///
/// Rate tables are immutable after construction. Lookups are total: every
/// category has a rate card, so `rate_of` cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// Rate cards indexed by category, in [`VehicleCategory::ALL`] order.
    rates: [RateCard; 4],
}

impl RateTable {
    /// Returns the standard rate table.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            rates: [
                RateCard::new(5000, 100, 50, 0.10),
                RateCard::new(7500, 150, 60, 0.12),
                RateCard::new(10_000, 200, 40, 0.08),
                RateCard::new(15_000, 250, 75, 0.15),
            ],
        }
    }

    /// Returns a copy of this table with one category's rate replaced.
    ///
    /// # Arguments
    ///
    /// * `category` - The category to override
    /// * `rate` - The replacement rate card
    #[must_use]
    pub const fn with_rate(mut self, category: VehicleCategory, rate: RateCard) -> Self {
        self.rates[category.index()] = rate;
        self
    }

    /// Looks up the rate card for a category.
    ///
    /// # Arguments
    ///
    /// * `category` - The category to look up
    #[must_use]
    pub const fn rate_of(&self, category: VehicleCategory) -> RateCard {
        self.rates[category.index()]
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::standard()
    }
}
