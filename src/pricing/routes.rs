//! Pricing route handlers

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use crate::error::Result;
use crate::AppState;

use super::calculators::default_rental_period;
use super::requests::{BookingRequest, QuoteRequest};
use super::responses::{DefaultsResponse, QuoteResponse, VerificationResponse};
use super::services;

/// Router for quote and booking-verification endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pricing/quote", post(quote))
        .route("/api/pricing/defaults", get(defaults))
        .route("/api/bookings/verify", post(verify))
}

/// Quote a prospective booking
async fn quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>> {
    Ok(Json(services::quote(&state, &request).await?))
}

/// Initial pickup and dropoff dates for the booking form
async fn defaults() -> Json<DefaultsResponse> {
    let period = default_rental_period(Utc::now().date_naive());
    Json(DefaultsResponse {
        pickup_date: period.pickup,
        dropoff_date: period.dropoff,
    })
}

/// Re-price a submitted booking payload and report whether its total holds
async fn verify(
    State(state): State<AppState>,
    Json(booking): Json<BookingRequest>,
) -> Result<Json<VerificationResponse>> {
    Ok(Json(services::verify(&state, &booking).await?))
}
