//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! repository traits for the ledger logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    Airport, BookingCountResponse, BookingRequest, BookingResponse, CreatedResponse, FareResponse,
    Flight, FlightId, HealthResponse, LargestAirportResponse, OriginAirportResponse, Passenger,
    PassengerId, PeopleQuery, PeopleResponse, RevenueResponse, ShortestDurationQuery,
    ShortestDurationResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::repository::{BookingRepository, DirectoryRepository};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the ledger is
/// accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository: repo_status,
    }))
}

// =============================================================================
// Entity Creation
// =============================================================================

/// POST /v1/airports
///
/// Add an airport, overwriting any previous record with the same name.
pub async fn create_airport(
    State(state): State<AppState>,
    Json(airport): Json<Airport>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let name = airport.name.clone();
    state.repository.add_airport(airport).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: format!("Airport {} added", name),
        }),
    ))
}

/// POST /v1/flights
pub async fn create_flight(
    State(state): State<AppState>,
    Json(flight): Json<Flight>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let id = flight.id;
    state.repository.add_flight(flight).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: format!("Flight {} added", id),
        }),
    ))
}

/// POST /v1/passengers
pub async fn create_passenger(
    State(state): State<AppState>,
    Json(passenger): Json<Passenger>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let id = passenger.id;
    state.repository.add_passenger(passenger).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: format!("Passenger {} added", id),
        }),
    ))
}

// =============================================================================
// Directory Queries
// =============================================================================

/// GET /v1/airports/largest
///
/// Name of the airport with the most terminals; ties break to the
/// lexicographically smallest name. 404 when no airports exist.
pub async fn get_largest_airport(
    State(state): State<AppState>,
) -> HandlerResult<LargestAirportResponse> {
    let airport_name = state
        .repository
        .largest_airport_name()
        .await?
        .ok_or_else(|| AppError::NotFound("No airports registered".to_string()))?;

    Ok(Json(LargestAirportResponse { airport_name }))
}

/// GET /v1/routes/shortest-duration?from=Delhi&to=Mumbai
///
/// Minimum duration over direct flights; the -1.0 sentinel is passed through
/// when no flight connects the cities.
pub async fn get_shortest_duration(
    State(state): State<AppState>,
    Query(query): Query<ShortestDurationQuery>,
) -> HandlerResult<ShortestDurationResponse> {
    let duration_hours = state
        .repository
        .shortest_duration(query.from, query.to)
        .await?;

    Ok(Json(ShortestDurationResponse {
        from: query.from,
        to: query.to,
        duration_hours,
    }))
}

/// GET /v1/airports/{name}/people?date=2024-06-01
///
/// Total count of booked passengers departing from or arriving at the airport
/// on the given date. Unknown airports report 0.
pub async fn get_people_on(
    State(state): State<AppState>,
    Path(airport_name): Path<String>,
    Query(query): Query<PeopleQuery>,
) -> HandlerResult<PeopleResponse> {
    let count = state.repository.people_on(query.date, &airport_name).await?;

    Ok(Json(PeopleResponse {
        airport_name,
        date: query.date,
        count,
    }))
}

/// GET /v1/flights/{flight_id}/origin-airport
///
/// Name of an airport in the flight's origin city; 404 when the flight is
/// unknown or no airport serves that city.
pub async fn get_origin_airport(
    State(state): State<AppState>,
    Path(flight_id): Path<i64>,
) -> HandlerResult<OriginAirportResponse> {
    let flight_id = FlightId::new(flight_id);

    let airport_name = state
        .repository
        .airport_name_for_flight(flight_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No origin airport resolvable for flight {}", flight_id))
        })?;

    Ok(Json(OriginAirportResponse {
        flight_id,
        airport_name,
    }))
}

// =============================================================================
// Fares, Revenue, Bookings
// =============================================================================

/// GET /v1/flights/{flight_id}/fare
///
/// Marginal fare quoted for the next passenger to book.
pub async fn get_flight_fare(
    State(state): State<AppState>,
    Path(flight_id): Path<i64>,
) -> HandlerResult<FareResponse> {
    let flight_id = FlightId::new(flight_id);
    let fare = state.repository.flight_fare(flight_id).await?;

    Ok(Json(FareResponse { flight_id, fare }))
}

/// GET /v1/flights/{flight_id}/revenue
pub async fn get_flight_revenue(
    State(state): State<AppState>,
    Path(flight_id): Path<i64>,
) -> HandlerResult<RevenueResponse> {
    let flight_id = FlightId::new(flight_id);
    let revenue = state.repository.flight_revenue(flight_id).await?;

    Ok(Json(RevenueResponse { flight_id, revenue }))
}

/// POST /v1/bookings
///
/// Attempt a booking. Policy violations (over capacity, duplicate booking)
/// come back as `{"status": "FAILURE"}`, not as HTTP errors.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> HandlerResult<BookingResponse> {
    let status = state
        .repository
        .book_ticket(request.flight_id, request.passenger_id)
        .await?;

    Ok(Json(BookingResponse { status }))
}

/// DELETE /v1/bookings
///
/// Cancel a booking; `{"status": "FAILURE"}` when no such booking exists.
pub async fn cancel_booking(
    State(state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> HandlerResult<BookingResponse> {
    let status = state
        .repository
        .cancel_ticket(request.flight_id, request.passenger_id)
        .await?;

    Ok(Json(BookingResponse { status }))
}

/// GET /v1/passengers/{passenger_id}/bookings/count
pub async fn get_booking_count(
    State(state): State<AppState>,
    Path(passenger_id): Path<i64>,
) -> HandlerResult<BookingCountResponse> {
    let passenger_id = PassengerId::new(passenger_id);
    let count = state
        .repository
        .booking_count_for_passenger(passenger_id)
        .await?;

    Ok(Json(BookingCountResponse {
        passenger_id,
        count,
    }))
}
