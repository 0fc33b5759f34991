//! In-memory booking ledger.
//!
//! This module implements all repository traits over plain in-memory tables:
//! three entity maps (airports by name, flights and passengers by ID) and one
//! roster map (flight ID to the ordered list of booked passenger IDs). Every
//! derived query is a linear scan; the dataset is assumed small enough that
//! no secondary index is worth keeping.

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::{Airport, BookingOutcome, City, Flight, FlightId, Passenger, PassengerId};
use crate::db::repository::{
    BookingRepository, DirectoryRepository, ErrorContext, RepositoryError, RepositoryResult,
    BASE_FARE, FARE_STEP,
};

/// In-memory ledger repository.
///
/// All four tables live behind a single process-wide lock; each operation
/// takes the lock once and runs to completion, so calls are atomic with
/// respect to one another but no atomicity is offered across calls.
///
/// # Example
/// ```
/// use flightdesk::db::repositories::LocalRepository;
///
/// let repo = LocalRepository::new();
/// assert_eq!(repo.airport_count(), 0);
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LedgerData>>,
}

#[derive(Default)]
struct LedgerData {
    airports: HashMap<String, Airport>,
    flights: HashMap<FlightId, Flight>,
    passengers: HashMap<PassengerId, Passenger>,

    // Insertion order is booking order; fares and revenue depend on it.
    rosters: HashMap<FlightId, Vec<PassengerId>>,

    // Connection health
    is_healthy: bool,
}

impl LocalRepository {
    /// Create a new empty ledger.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LedgerData {
                is_healthy: true,
                ..Default::default()
            })),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write();
        data.is_healthy = healthy;
    }

    /// Clear all data from the ledger.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LedgerData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of airports stored.
    pub fn airport_count(&self) -> usize {
        self.data.read().airports.len()
    }

    /// Get the number of flights stored.
    pub fn flight_count(&self) -> usize {
        self.data.read().flights.len()
    }

    /// Get the number of passengers stored.
    pub fn passenger_count(&self) -> usize {
        self.data.read().passengers.len()
    }

    /// Current roster for a flight, in booking order.
    pub fn roster(&self, flight_id: FlightId) -> Vec<PassengerId> {
        self.data
            .read()
            .rosters
            .get(&flight_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        let data = self.data.read();
        if !data.is_healthy {
            return Err(RepositoryError::connection("Ledger is not healthy"));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DirectoryRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let data = self.data.read();
        Ok(data.is_healthy)
    }

    async fn add_airport(&self, airport: Airport) -> RepositoryResult<()> {
        self.check_health()?;
        let mut data = self.data.write();
        data.airports.insert(airport.name.clone(), airport);
        Ok(())
    }

    async fn add_flight(&self, flight: Flight) -> RepositoryResult<()> {
        self.check_health()?;
        let mut data = self.data.write();
        data.flights.insert(flight.id, flight);
        Ok(())
    }

    async fn add_passenger(&self, passenger: Passenger) -> RepositoryResult<()> {
        self.check_health()?;
        let mut data = self.data.write();
        data.passengers.insert(passenger.id, passenger);
        Ok(())
    }

    async fn largest_airport_name(&self) -> RepositoryResult<Option<String>> {
        let data = self.data.read();

        let mut best: Option<&Airport> = None;
        for airport in data.airports.values() {
            best = match best {
                None => Some(airport),
                Some(current)
                    if airport.terminals > current.terminals
                        || (airport.terminals == current.terminals
                            && airport.name < current.name) =>
                {
                    Some(airport)
                }
                Some(current) => Some(current),
            };
        }

        Ok(best.map(|airport| airport.name.clone()))
    }

    async fn shortest_duration(&self, from: City, to: City) -> RepositoryResult<f64> {
        let data = self.data.read();

        let minimum = data
            .flights
            .values()
            .filter(|flight| flight.from_city == from && flight.to_city == to)
            .map(|flight| flight.duration_hours)
            .fold(None, |acc: Option<f64>, duration| {
                Some(acc.map_or(duration, |current| current.min(duration)))
            });

        Ok(minimum.unwrap_or(-1.0))
    }

    async fn people_on(&self, date: NaiveDate, airport_name: &str) -> RepositoryResult<usize> {
        let data = self.data.read();

        let city = match data.airports.get(airport_name) {
            Some(airport) => airport.city,
            None => return Ok(0),
        };

        // Only flights with a roster entry can contribute; an untouched
        // flight has an implicit empty roster.
        let mut count = 0;
        for (flight_id, roster) in &data.rosters {
            if let Some(flight) = data.flights.get(flight_id) {
                if flight.flight_date == date
                    && (flight.from_city == city || flight.to_city == city)
                {
                    count += roster.len();
                }
            }
        }

        Ok(count)
    }

    async fn airport_name_for_flight(
        &self,
        flight_id: FlightId,
    ) -> RepositoryResult<Option<String>> {
        let data = self.data.read();

        let flight = match data.flights.get(&flight_id) {
            Some(flight) => flight,
            None => return Ok(None),
        };

        // Several airports may share the origin city; taking the smallest
        // name keeps the answer deterministic across runs.
        let name = data
            .airports
            .values()
            .filter(|airport| airport.city == flight.from_city)
            .map(|airport| airport.name.as_str())
            .min()
            .map(str::to_owned);

        Ok(name)
    }
}

// ==================== Booking Repository ====================

#[async_trait]
impl BookingRepository for LocalRepository {
    async fn book_ticket(
        &self,
        flight_id: FlightId,
        passenger_id: PassengerId,
    ) -> RepositoryResult<BookingOutcome> {
        self.check_health()?;
        let mut data = self.data.write();

        if let Some(roster) = data.rosters.get(&flight_id) {
            let flight = data.flights.get(&flight_id).ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("Flight {} not found", flight_id),
                    ErrorContext::new("book_ticket")
                        .with_entity("flight")
                        .with_entity_id(flight_id),
                )
            })?;

            // Capacity is compared against the roster size before this
            // booking with a strict greater-than, so a flight admits
            // max_capacity + 1 passengers before it starts rejecting.
            if roster.len() > flight.max_capacity as usize {
                return Ok(BookingOutcome::Failure);
            }

            if roster.contains(&passenger_id) {
                return Ok(BookingOutcome::Failure);
            }
        }

        data.rosters.entry(flight_id).or_default().push(passenger_id);
        log::debug!("Booked passenger {} on flight {}", passenger_id, flight_id);
        Ok(BookingOutcome::Success)
    }

    async fn cancel_ticket(
        &self,
        flight_id: FlightId,
        passenger_id: PassengerId,
    ) -> RepositoryResult<BookingOutcome> {
        self.check_health()?;
        let mut data = self.data.write();

        let roster = match data.rosters.get_mut(&flight_id) {
            Some(roster) => roster,
            None => return Ok(BookingOutcome::Failure),
        };

        match roster.iter().position(|booked| *booked == passenger_id) {
            Some(index) => {
                // Vec::remove shifts the tail left, preserving booking order.
                roster.remove(index);
                Ok(BookingOutcome::Success)
            }
            None => Ok(BookingOutcome::Failure),
        }
    }

    async fn flight_fare(&self, flight_id: FlightId) -> RepositoryResult<i64> {
        let data = self.data.read();

        if !data.flights.contains_key(&flight_id) {
            return Err(RepositoryError::not_found_with_context(
                format!("Flight {} not found", flight_id),
                ErrorContext::new("flight_fare")
                    .with_entity("flight")
                    .with_entity_id(flight_id),
            ));
        }

        let booked = data.rosters.get(&flight_id).map_or(0, Vec::len);
        Ok(BASE_FARE + FARE_STEP * booked as i64)
    }

    async fn flight_revenue(&self, flight_id: FlightId) -> RepositoryResult<i64> {
        let data = self.data.read();

        // Revenue is reconstructed from the current roster as if it had
        // booked sequentially from position 0; there is no running total,
        // so cancellations lower later answers without issuing refunds.
        let booked = data.rosters.get(&flight_id).map_or(0, Vec::len) as i64;
        let total = (0..booked).map(|i| BASE_FARE + FARE_STEP * i).sum();

        Ok(total)
    }

    async fn booking_count_for_passenger(
        &self,
        passenger_id: PassengerId,
    ) -> RepositoryResult<usize> {
        let data = self.data.read();

        let count = data
            .rosters
            .values()
            .filter(|roster| roster.contains(&passenger_id))
            .count();

        Ok(count)
    }
}
