//! Directory repository trait for the entity tables and lookup queries.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::error::RepositoryResult;
use crate::api::{Airport, City, Flight, FlightId, Passenger};

/// Repository trait for the entity tables (airports, flights, passengers)
/// and the derived lookups that only read those tables.
///
/// Add operations perform no validation: re-adding under an existing key
/// overwrites the previous record.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Check that the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Insert or overwrite an airport, keyed by name.
    async fn add_airport(&self, airport: Airport) -> RepositoryResult<()>;

    /// Insert or overwrite a flight, keyed by flight ID.
    async fn add_flight(&self, flight: Flight) -> RepositoryResult<()>;

    /// Insert or overwrite a passenger, keyed by passenger ID.
    async fn add_passenger(&self, passenger: Passenger) -> RepositoryResult<()>;

    /// Name of the airport with the most terminals.
    ///
    /// Ties are broken by lexicographically smallest name. Returns `None`
    /// when no airports are known.
    async fn largest_airport_name(&self) -> RepositoryResult<Option<String>>;

    /// Minimum duration in hours over all direct flights from `from` to `to`.
    ///
    /// Matching is directional. Returns `-1.0` when no such flight exists.
    async fn shortest_duration(&self, from: City, to: City) -> RepositoryResult<f64>;

    /// Total count of passengers on flights touching the named airport on
    /// the given date.
    ///
    /// A flight matches when its date equals `date` and the airport's city is
    /// its origin or its destination. Every roster entry of a matching flight
    /// counts; a passenger on two matching flights counts twice. Unknown
    /// airport names yield `0`.
    async fn people_on(&self, date: NaiveDate, airport_name: &str) -> RepositoryResult<usize>;

    /// Name of an airport in the flight's origin city.
    ///
    /// Returns `None` for unknown flight IDs or when no airport serves the
    /// origin city. When several airports share the city, the
    /// lexicographically smallest name is returned so the choice stays
    /// deterministic.
    async fn airport_name_for_flight(
        &self,
        flight_id: FlightId,
    ) -> RepositoryResult<Option<String>>;
}
