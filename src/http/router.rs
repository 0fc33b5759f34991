//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Entity creation
        .route("/airports", post(handlers::create_airport))
        .route("/flights", post(handlers::create_flight))
        .route("/passengers", post(handlers::create_passenger))
        // Directory queries
        .route("/airports/largest", get(handlers::get_largest_airport))
        .route("/airports/{name}/people", get(handlers::get_people_on))
        .route("/routes/shortest-duration", get(handlers::get_shortest_duration))
        .route("/flights/{flight_id}/origin-airport", get(handlers::get_origin_airport))
        // Fares and revenue
        .route("/flights/{flight_id}/fare", get(handlers::get_flight_fare))
        .route("/flights/{flight_id}/revenue", get(handlers::get_flight_revenue))
        // Bookings
        .route(
            "/bookings",
            post(handlers::create_booking).delete(handlers::cancel_booking),
        )
        .route(
            "/passengers/{passenger_id}/bookings/count",
            get(handlers::get_booking_count),
        );

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let repo =
            Arc::new(LocalRepository::new()) as Arc<dyn crate::db::repository::FullRepository>;
        let state = AppState::new(repo);
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
