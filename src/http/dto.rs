//! Data Transfer Objects for the HTTP API.
//!
//! The entity types in [`crate::api`] already derive Serialize/Deserialize
//! and are accepted as request bodies directly; this module adds the query
//! and response shapes around them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use crate::api::{Airport, BookingOutcome, City, Flight, FlightId, Passenger, PassengerId};

/// Generic acknowledgement for entity creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// Message about the operation
    pub message: String,
}

/// Request body for booking and cancellation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Flight to book on or cancel from
    pub flight_id: FlightId,
    /// Passenger the booking belongs to
    pub passenger_id: PassengerId,
}

/// Outcome of a booking or cancellation attempt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BookingResponse {
    /// "SUCCESS" or "FAILURE"
    pub status: BookingOutcome,
}

/// Query parameters for the shortest-duration endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShortestDurationQuery {
    /// Origin city
    pub from: City,
    /// Destination city
    pub to: City,
}

/// Response for the shortest-duration endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShortestDurationResponse {
    pub from: City,
    pub to: City,
    /// Minimum duration in hours; -1.0 when no direct flight exists
    pub duration_hours: f64,
}

/// Query parameters for the occupancy endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PeopleQuery {
    /// Calendar date (YYYY-MM-DD)
    pub date: NaiveDate,
}

/// Response for the occupancy endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeopleResponse {
    pub airport_name: String,
    pub date: NaiveDate,
    pub count: usize,
}

/// Response for the largest-airport endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LargestAirportResponse {
    pub airport_name: String,
}

/// Response for the fare endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FareResponse {
    pub flight_id: FlightId,
    /// Marginal fare for the next booking
    pub fare: i64,
}

/// Response for the revenue endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RevenueResponse {
    pub flight_id: FlightId,
    pub revenue: i64,
}

/// Response for the origin-airport endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OriginAirportResponse {
    pub flight_id: FlightId,
    pub airport_name: String,
}

/// Response for the per-passenger booking count endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BookingCountResponse {
    pub passenger_id: PassengerId,
    pub count: usize,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Ledger status
    pub repository: String,
}
