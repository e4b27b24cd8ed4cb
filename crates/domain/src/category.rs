// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents a vehicle pricing category.
///
/// Categories are fixed domain constants. Pricing attributes live in the
/// rate table, not on the category itself, so tests can substitute
/// alternate rate tables without touching the category set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleCategory {
    /// Compact petrol car.
    CompactPetrol,
    /// Hybrid car.
    Hybrid,
    /// Fully electric car.
    Electric,
    /// Luxury SUV.
    #[serde(rename = "LuxurySUV")]
    LuxurySuv,
}

impl VehicleCategory {
    /// All categories, in rate-table order.
    pub const ALL: [Self; 4] = [
        Self::CompactPetrol,
        Self::Hybrid,
        Self::Electric,
        Self::LuxurySuv,
    ];

    /// Returns the string representation of this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CompactPetrol => "CompactPetrol",
            Self::Hybrid => "Hybrid",
            Self::Electric => "Electric",
            Self::LuxurySuv => "LuxurySUV",
        }
    }

    /// Index of this category within [`Self::ALL`].
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::CompactPetrol => 0,
            Self::Hybrid => 1,
            Self::Electric => 2,
            Self::LuxurySuv => 3,
        }
    }
}

impl FromStr for VehicleCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CompactPetrol" => Ok(Self::CompactPetrol),
            "Hybrid" => Ok(Self::Hybrid),
            "Electric" => Ok(Self::Electric),
            "LuxurySUV" => Ok(Self::LuxurySuv),
            _ => Err(DomainError::InvalidCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
