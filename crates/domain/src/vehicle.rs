// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::category::VehicleCategory;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the availability state of a vehicle.
///
/// The reservation lifecycle only ever moves a vehicle between
/// `Available` and `Reserved`. `UnderMaintenance` is entered and left
/// solely through explicit fleet updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VehicleStatus {
    /// The vehicle may be reserved.
    #[default]
    Available,
    /// The vehicle is held by exactly one active reservation.
    Reserved,
    /// The vehicle is out of service and cannot be reserved.
    UnderMaintenance,
}

impl VehicleStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Reserved => "Reserved",
            Self::UnderMaintenance => "UnderMaintenance",
        }
    }

    /// Returns whether a vehicle in this status may be reserved.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl FromStr for VehicleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(Self::Available),
            "Reserved" => Ok(Self::Reserved),
            "UnderMaintenance" => Ok(Self::UnderMaintenance),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a vehicle identifier.
///
/// Identifiers are assigned externally (e.g., registration plates) and
/// never change for the lifetime of the vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleId {
    /// The identifier value.
    value: String,
}

impl VehicleId {
    /// Creates a new `VehicleId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The externally assigned identifier
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a vehicle in the fleet.
///
/// The fleet registry exclusively owns vehicles; reservations refer to
/// them by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// The externally assigned identifier (immutable).
    pub id: VehicleId,
    /// The vehicle model (informational, mutable).
    pub model: String,
    /// The pricing category (mutable).
    pub category: VehicleCategory,
    /// The availability state.
    pub status: VehicleStatus,
}

impl Vehicle {
    /// Creates a new `Vehicle` with status `Available`.
    ///
    /// # Arguments
    ///
    /// * `id` - The externally assigned identifier
    /// * `model` - The vehicle model
    /// * `category` - The pricing category
    #[must_use]
    pub const fn new(id: VehicleId, model: String, category: VehicleCategory) -> Self {
        Self {
            id,
            model,
            category,
            status: VehicleStatus::Available,
        }
    }
}
