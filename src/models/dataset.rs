// ============================================================================
// Seed Dataset Parsing
// ============================================================================
//
// These functions provide string-based parsing of seed datasets so a fresh
// ledger can be populated at startup. A dataset is a single JSON object with
// optional `airports`, `flights`, `passengers` and `bookings` arrays.

use anyhow::{Context, Result};

use crate::api::{Airport, BookingOutcome, Flight, FlightId, Passenger, PassengerId};
use crate::db::repository::{BookingRepository, DirectoryRepository, FullRepository};

/// A booking to replay against the ledger after the entities are loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookingRecord {
    pub flight_id: FlightId,
    pub passenger_id: PassengerId,
}

/// Parsed seed dataset with the checksum of the raw payload.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub airports: Vec<Airport>,
    pub flights: Vec<Flight>,
    pub passengers: Vec<Passenger>,
    pub bookings: Vec<BookingRecord>,
    pub checksum: String,
}

#[derive(serde::Deserialize)]
struct DatasetInput {
    #[serde(default)]
    airports: Vec<Airport>,
    #[serde(default)]
    flights: Vec<Flight>,
    #[serde(default)]
    passengers: Vec<Passenger>,
    #[serde(default)]
    bookings: Vec<BookingRecord>,
}

fn validate_input_dataset(dataset_json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(dataset_json).context("Invalid dataset JSON")?;
    if !value.is_object() {
        anyhow::bail!("Dataset must be a JSON object");
    }
    Ok(())
}

/// Parse a seed dataset from a JSON string.
///
/// All four sections are optional and default to empty; a checksum of the raw
/// payload is computed so identical datasets can be recognized in the logs.
pub fn parse_dataset_json_str(dataset_json: &str) -> Result<Dataset> {
    validate_input_dataset(dataset_json)?;

    let input: DatasetInput =
        serde_json::from_str(dataset_json).context("Failed to deserialize dataset JSON")?;

    Ok(Dataset {
        airports: input.airports,
        flights: input.flights,
        passengers: input.passengers,
        bookings: input.bookings,
        checksum: compute_dataset_checksum(dataset_json),
    })
}

/// Compute a checksum for the dataset JSON
pub fn compute_dataset_checksum(json_str: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(json_str.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

/// Summary of a dataset load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetLoadSummary {
    pub airports: usize,
    pub flights: usize,
    pub passengers: usize,
    pub bookings_applied: usize,
    pub bookings_rejected: usize,
}

/// Load a parsed dataset into a repository.
///
/// Entities are added first, then the recorded bookings are replayed in
/// order so roster order (and therefore fares and revenue) matches the
/// dataset. Rejected bookings are logged and skipped rather than aborting
/// the load.
pub async fn load_dataset(
    repo: &dyn FullRepository,
    dataset: &Dataset,
) -> Result<DatasetLoadSummary> {
    let mut summary = DatasetLoadSummary {
        airports: dataset.airports.len(),
        flights: dataset.flights.len(),
        passengers: dataset.passengers.len(),
        ..Default::default()
    };

    for airport in &dataset.airports {
        repo.add_airport(airport.clone()).await?;
    }
    for flight in &dataset.flights {
        repo.add_flight(flight.clone()).await?;
    }
    for passenger in &dataset.passengers {
        repo.add_passenger(passenger.clone()).await?;
    }

    for booking in &dataset.bookings {
        match repo.book_ticket(booking.flight_id, booking.passenger_id).await? {
            BookingOutcome::Success => summary.bookings_applied += 1,
            BookingOutcome::Failure => {
                log::warn!(
                    "Skipping seed booking: flight {} rejected passenger {}",
                    booking.flight_id,
                    booking.passenger_id
                );
                summary.bookings_rejected += 1;
            }
        }
    }

    Ok(summary)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_minimal_dataset() {
        let dataset_json = r#"{
            "airports": [
                { "name": "Indira Gandhi International", "city": "Delhi", "terminals": 3 }
            ],
            "flights": [
                {
                    "id": 1,
                    "from_city": "Delhi",
                    "to_city": "Mumbai",
                    "flight_date": "2024-03-15",
                    "duration_hours": 2.5,
                    "max_capacity": 120
                }
            ],
            "passengers": [
                { "id": 10, "name": "Asha" }
            ]
        }"#;

        let result = parse_dataset_json_str(dataset_json);
        assert!(result.is_ok(), "Should parse minimal dataset: {:?}", result.err());

        let dataset = result.unwrap();
        assert_eq!(dataset.airports.len(), 1);
        assert_eq!(dataset.airports[0].city, City::Delhi);
        assert_eq!(dataset.flights.len(), 1);
        assert_eq!(
            dataset.flights[0].flight_date,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert_eq!(dataset.passengers.len(), 1);
        assert!(dataset.bookings.is_empty());
    }

    #[test]
    fn test_parse_empty_object() {
        let dataset = parse_dataset_json_str("{}").unwrap();
        assert!(dataset.airports.is_empty());
        assert!(dataset.flights.is_empty());
        assert!(dataset.passengers.is_empty());
        assert!(dataset.bookings.is_empty());
    }

    #[test]
    fn test_parse_with_bookings() {
        let dataset_json = r#"{
            "bookings": [
                { "flight_id": 1, "passenger_id": 10 },
                { "flight_id": 1, "passenger_id": 11 }
            ]
        }"#;

        let dataset = parse_dataset_json_str(dataset_json).unwrap();
        assert_eq!(dataset.bookings.len(), 2);
        assert_eq!(dataset.bookings[0].passenger_id, PassengerId(10));
    }

    #[test]
    fn test_invalid_json() {
        let result = parse_dataset_json_str("not valid json {");
        assert!(result.is_err(), "Should fail with invalid JSON");
    }

    #[test]
    fn test_non_object_payload() {
        let result = parse_dataset_json_str("[1, 2, 3]");
        assert!(result.is_err(), "Should fail when payload is not an object");
    }

    #[test]
    fn test_checksum_is_stable() {
        let payload = r#"{"airports": []}"#;
        let a = parse_dataset_json_str(payload).unwrap();
        let b = parse_dataset_json_str(payload).unwrap();
        assert_eq!(a.checksum, b.checksum);
        assert_eq!(a.checksum.len(), 64);

        let other = parse_dataset_json_str(r#"{"flights": []}"#).unwrap();
        assert_ne!(a.checksum, other.checksum);
    }
}
