//! Public API surface for the booking ledger.
//!
//! This file consolidates the entity types and ID newtypes shared by the
//! repository layer and the HTTP API. All types derive Serialize/Deserialize
//! for JSON serialization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use crate::models::City;

/// Flight identifier (ledger primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FlightId(pub i64);

/// Passenger identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PassengerId(pub i64);

impl FlightId {
    pub fn new(value: i64) -> Self {
        FlightId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl PassengerId {
    pub fn new(value: i64) -> Self {
        PassengerId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for FlightId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for PassengerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<FlightId> for i64 {
    fn from(id: FlightId) -> Self {
        id.0
    }
}

/// An airport, uniquely identified by its name.
///
/// Re-adding an airport under the same name overwrites the previous record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    /// Airport name (primary key)
    pub name: String,
    /// City the airport serves
    pub city: City,
    /// Number of terminals (positive)
    pub terminals: u32,
}

impl Airport {
    pub fn new(name: impl Into<String>, city: City, terminals: u32) -> Self {
        Self {
            name: name.into(),
            city,
            terminals,
        }
    }
}

/// A scheduled flight between two cities on a calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// Flight ID (primary key)
    pub id: FlightId,
    /// Origin city
    pub from_city: City,
    /// Destination city
    pub to_city: City,
    /// Calendar date of the flight (no time component)
    pub flight_date: NaiveDate,
    /// Flight duration in hours
    pub duration_hours: f64,
    /// Maximum passenger capacity
    pub max_capacity: u32,
}

/// A passenger. Only the ID participates in ledger logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    /// Passenger ID (primary key)
    pub id: PassengerId,
    /// Passenger name (informational only)
    #[serde(default)]
    pub name: String,
}

/// Outcome of a booking or cancellation attempt.
///
/// Policy violations (over capacity, duplicate booking, cancelling a booking
/// that does not exist) are reported as `Failure`, not as errors: they are
/// expected, recoverable-by-caller outcomes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingOutcome {
    Success,
    Failure,
}

impl BookingOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BookingOutcome::Success)
    }
}

impl std::fmt::Display for BookingOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingOutcome::Success => write!(f, "SUCCESS"),
            BookingOutcome::Failure => write!(f, "FAILURE"),
        }
    }
}
