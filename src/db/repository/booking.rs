//! Booking repository trait for roster mutations and money queries.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{BookingOutcome, FlightId, PassengerId};

/// Base fare charged when a flight has no bookings yet.
pub const BASE_FARE: i64 = 3000;

/// Fare increment per passenger already booked on the flight.
pub const FARE_STEP: i64 = 50;

/// Repository trait for the per-flight booking rosters.
///
/// A roster is the ordered list of passenger IDs booked on a flight, in
/// booking order. Rosters come into existence on the first booking attempt
/// that touches a flight; an untouched flight has an implicit empty roster.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Attempt to book `passenger_id` onto `flight_id`.
    ///
    /// Policy violations are reported as `Ok(BookingOutcome::Failure)`:
    /// - the roster size before this booking strictly exceeds the flight's
    ///   `max_capacity` (the comparison is against the pre-booking size, so
    ///   a flight admits `max_capacity + 1` passengers before rejecting)
    /// - the passenger already appears in the roster
    ///
    /// Otherwise the passenger is appended (creating the roster if absent)
    /// and the outcome is `Success`.
    ///
    /// # Returns
    /// * `Ok(BookingOutcome)` - Result of the booking attempt
    /// * `Err(RepositoryError)` - If the flight record needed for the
    ///   capacity check is missing, or the store is unhealthy
    async fn book_ticket(
        &self,
        flight_id: FlightId,
        passenger_id: PassengerId,
    ) -> RepositoryResult<BookingOutcome>;

    /// Cancel an existing booking.
    ///
    /// Fails with `BookingOutcome::Failure` when the flight has no roster or
    /// the passenger is not in it. Removal is by value and preserves the
    /// relative order of the remaining entries.
    async fn cancel_ticket(
        &self,
        flight_id: FlightId,
        passenger_id: PassengerId,
    ) -> RepositoryResult<BookingOutcome>;

    /// Marginal fare for the next passenger to book on `flight_id`.
    ///
    /// Computed as `BASE_FARE + FARE_STEP * roster_len`; the passenger who is
    /// about to book is not included. A known flight with no roster yields
    /// the base fare.
    ///
    /// # Returns
    /// * `Ok(i64)` - Fare for the next booking
    /// * `Err(RepositoryError::NotFound)` - If the flight ID is unknown
    async fn flight_fare(&self, flight_id: FlightId) -> RepositoryResult<i64>;

    /// Total revenue of a flight, reconstructed from the current roster.
    ///
    /// The current roster is assumed to have booked sequentially from
    /// position 0, so revenue is `sum(BASE_FARE + FARE_STEP * i)` for `i` in
    /// `0..roster_len`, recomputed on every call. Cancellations therefore
    /// lower subsequent revenue figures. Untouched flights yield `0`.
    async fn flight_revenue(&self, flight_id: FlightId) -> RepositoryResult<i64>;

    /// Number of distinct flights whose roster contains `passenger_id`.
    async fn booking_count_for_passenger(
        &self,
        passenger_id: PassengerId,
    ) -> RepositoryResult<usize>;
}
