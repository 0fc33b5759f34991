//! Integration tests for the booking ledger.
//!
//! These tests exercise the full public trait surface of the repository,
//! driving realistic booking flows end to end.

use chrono::NaiveDate;
use flightdesk::api::{Airport, BookingOutcome, City, Flight, FlightId, Passenger, PassengerId};
use flightdesk::db::repositories::LocalRepository;
use flightdesk::db::{BookingRepository, DirectoryRepository, RepositoryError};

fn flight_on(id: i64, from: City, to: City, date: (i32, u32, u32), hours: f64, cap: u32) -> Flight {
    Flight {
        id: FlightId::new(id),
        from_city: from,
        to_city: to,
        flight_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        duration_hours: hours,
        max_capacity: cap,
    }
}

async fn seed_directory(repo: &LocalRepository) {
    for (name, city, terminals) in [
        ("Indira Gandhi International", City::Delhi, 3),
        ("Chhatrapati Shivaji", City::Mumbai, 2),
        ("Kempegowda", City::Bangalore, 2),
    ] {
        repo.add_airport(Airport::new(name, city, terminals))
            .await
            .unwrap();
    }

    repo.add_flight(flight_on(1, City::Delhi, City::Mumbai, (2024, 6, 1), 2.1, 3))
        .await
        .unwrap();
    repo.add_flight(flight_on(2, City::Delhi, City::Mumbai, (2024, 6, 1), 1.9, 3))
        .await
        .unwrap();
    repo.add_flight(flight_on(3, City::Mumbai, City::Bangalore, (2024, 6, 1), 1.5, 2))
        .await
        .unwrap();

    for id in 1..=6 {
        repo.add_passenger(Passenger {
            id: PassengerId::new(id),
            name: format!("passenger_{}", id),
        })
        .await
        .unwrap();
    }
}

#[tokio::test]
async fn test_directory_queries_after_seeding() {
    let repo = LocalRepository::new();
    seed_directory(&repo).await;

    assert_eq!(repo.airport_count(), 3);
    assert_eq!(repo.flight_count(), 3);
    assert_eq!(repo.passenger_count(), 6);

    assert_eq!(
        repo.largest_airport_name().await.unwrap(),
        Some("Indira Gandhi International".to_string())
    );

    let duration = repo
        .shortest_duration(City::Delhi, City::Mumbai)
        .await
        .unwrap();
    assert_eq!(duration, 1.9);

    // Directional: nothing flies Mumbai -> Delhi in this dataset.
    let reverse = repo
        .shortest_duration(City::Mumbai, City::Delhi)
        .await
        .unwrap();
    assert_eq!(reverse, -1.0);
}

#[tokio::test]
async fn test_largest_airport_tie() {
    let repo = LocalRepository::new();
    repo.add_airport(Airport::new("A", City::Delhi, 2)).await.unwrap();
    repo.add_airport(Airport::new("B", City::Mumbai, 3)).await.unwrap();
    repo.add_airport(Airport::new("C", City::Pune, 3)).await.unwrap();

    assert_eq!(
        repo.largest_airport_name().await.unwrap(),
        Some("B".to_string())
    );
}

#[tokio::test]
async fn test_full_booking_lifecycle() {
    let repo = LocalRepository::new();
    seed_directory(&repo).await;

    let flight = FlightId::new(1);

    // Quote before anyone books: base fare.
    assert_eq!(repo.flight_fare(flight).await.unwrap(), 3000);

    for passenger in 1..=3 {
        let outcome = repo
            .book_ticket(flight, PassengerId::new(passenger))
            .await
            .unwrap();
        assert_eq!(outcome, BookingOutcome::Success);
    }

    // Fare rose by 50 per booked passenger.
    assert_eq!(repo.flight_fare(flight).await.unwrap(), 3150);

    // Revenue is the sum of the fares each passenger paid in booking order.
    assert_eq!(repo.flight_revenue(flight).await.unwrap(), 3000 + 3050 + 3100);

    // Double booking is rejected regardless of remaining capacity.
    let duplicate = repo.book_ticket(flight, PassengerId::new(2)).await.unwrap();
    assert_eq!(duplicate, BookingOutcome::Failure);

    // Cancellation frees the slot and the duplicate guard.
    let cancelled = repo.cancel_ticket(flight, PassengerId::new(2)).await.unwrap();
    assert_eq!(cancelled, BookingOutcome::Success);
    assert_eq!(repo.flight_revenue(flight).await.unwrap(), 3000 + 3050);

    let rebooked = repo.book_ticket(flight, PassengerId::new(2)).await.unwrap();
    assert_eq!(rebooked, BookingOutcome::Success);
}

#[tokio::test]
async fn test_capacity_boundary() {
    let repo = LocalRepository::new();
    seed_directory(&repo).await;

    // Flight 3 has max_capacity 2; the pre-booking size check with a strict
    // greater-than admits passengers while roster size <= 2.
    let flight = FlightId::new(3);
    for passenger in 1..=3 {
        assert_eq!(
            repo.book_ticket(flight, PassengerId::new(passenger))
                .await
                .unwrap(),
            BookingOutcome::Success,
            "passenger {} should fit",
            passenger
        );
    }

    assert_eq!(
        repo.book_ticket(flight, PassengerId::new(4)).await.unwrap(),
        BookingOutcome::Failure
    );

    // A cancellation brings the roster back under the limit.
    repo.cancel_ticket(flight, PassengerId::new(1)).await.unwrap();
    assert_eq!(
        repo.book_ticket(flight, PassengerId::new(4)).await.unwrap(),
        BookingOutcome::Success
    );
}

#[tokio::test]
async fn test_occupancy_counts_across_flights() {
    let repo = LocalRepository::new();
    seed_directory(&repo).await;

    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

    repo.book_ticket(FlightId::new(1), PassengerId::new(1)).await.unwrap();
    repo.book_ticket(FlightId::new(1), PassengerId::new(2)).await.unwrap();
    repo.book_ticket(FlightId::new(2), PassengerId::new(1)).await.unwrap();
    repo.book_ticket(FlightId::new(3), PassengerId::new(3)).await.unwrap();

    // Flights 1 and 2 depart Delhi on the date: 2 + 1 roster entries.
    assert_eq!(
        repo.people_on(date, "Indira Gandhi International").await.unwrap(),
        3
    );

    // Mumbai is the destination of flights 1 and 2 and origin of flight 3.
    assert_eq!(repo.people_on(date, "Chhatrapati Shivaji").await.unwrap(), 4);

    assert_eq!(repo.people_on(date, "Nowhere International").await.unwrap(), 0);
}

#[tokio::test]
async fn test_booking_counts_per_passenger() {
    let repo = LocalRepository::new();
    seed_directory(&repo).await;

    repo.book_ticket(FlightId::new(1), PassengerId::new(1)).await.unwrap();
    repo.book_ticket(FlightId::new(2), PassengerId::new(1)).await.unwrap();
    repo.book_ticket(FlightId::new(3), PassengerId::new(1)).await.unwrap();
    repo.book_ticket(FlightId::new(3), PassengerId::new(2)).await.unwrap();

    assert_eq!(
        repo.booking_count_for_passenger(PassengerId::new(1)).await.unwrap(),
        3
    );
    assert_eq!(
        repo.booking_count_for_passenger(PassengerId::new(2)).await.unwrap(),
        1
    );

    repo.cancel_ticket(FlightId::new(2), PassengerId::new(1)).await.unwrap();
    assert_eq!(
        repo.booking_count_for_passenger(PassengerId::new(1)).await.unwrap(),
        2
    );
}

#[tokio::test]
async fn test_origin_airport_resolution() {
    let repo = LocalRepository::new();
    seed_directory(&repo).await;

    assert_eq!(
        repo.airport_name_for_flight(FlightId::new(3)).await.unwrap(),
        Some("Chhatrapati Shivaji".to_string())
    );

    assert_eq!(
        repo.airport_name_for_flight(FlightId::new(99)).await.unwrap(),
        None
    );
}

#[tokio::test]
async fn test_fare_for_unknown_flight_is_not_found() {
    let repo = LocalRepository::new();
    seed_directory(&repo).await;

    let result = repo.flight_fare(FlightId::new(99)).await;
    assert!(matches!(result, Err(RepositoryError::NotFound { .. })));

    // Revenue of an untouched flight is simply zero, no error.
    assert_eq!(repo.flight_revenue(FlightId::new(99)).await.unwrap(), 0);
}

#[tokio::test]
async fn test_overwrite_semantics() {
    let repo = LocalRepository::new();
    seed_directory(&repo).await;

    // Re-adding the Mumbai airport with more terminals makes it the largest.
    repo.add_airport(Airport::new("Chhatrapati Shivaji", City::Mumbai, 5))
        .await
        .unwrap();
    assert_eq!(repo.airport_count(), 3);
    assert_eq!(
        repo.largest_airport_name().await.unwrap(),
        Some("Chhatrapati Shivaji".to_string())
    );

    // Re-adding flight 2 with a shorter duration changes the route minimum.
    repo.add_flight(flight_on(2, City::Delhi, City::Mumbai, (2024, 6, 1), 1.0, 3))
        .await
        .unwrap();
    assert_eq!(
        repo.shortest_duration(City::Delhi, City::Mumbai).await.unwrap(),
        1.0
    );
}

#[tokio::test]
async fn test_unhealthy_ledger_surfaces_connection_errors() {
    let repo = LocalRepository::new();
    seed_directory(&repo).await;
    repo.set_healthy(false);

    let add = repo.add_airport(Airport::new("X", City::Pune, 1)).await;
    assert!(matches!(add, Err(RepositoryError::ConnectionError { .. })));

    let book = repo.book_ticket(FlightId::new(1), PassengerId::new(1)).await;
    assert!(matches!(book, Err(RepositoryError::ConnectionError { .. })));

    repo.set_healthy(true);
    assert!(repo
        .book_ticket(FlightId::new(1), PassengerId::new(1))
        .await
        .unwrap()
        .is_success());
}
